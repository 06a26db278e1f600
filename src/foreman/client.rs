//! Foreman HTTP client for API interactions

use log::{debug, trace};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::{api, defaults};
use crate::error::{ForemanError, Result};

/// Connection settings for a Foreman server
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server hostname, optionally with a port (e.g. "foreman.example.com:8443")
    pub host: String,
    /// "http" or "https"
    pub protocol: String,
    pub username: String,
    pub password: String,
    /// Skip TLS certificate verification
    pub insecure: bool,
}

impl ClientConfig {
    /// Create a config with the default protocol and TLS verification on
    pub fn new(host: &str, username: &str, password: &str) -> Self {
        Self {
            host: host.to_string(),
            protocol: defaults::PROTOCOL.to_string(),
            username: username.to_string(),
            password: password.to_string(),
            insecure: false,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(ForemanError::Config("server hostname is empty".to_string()));
        }
        match self.protocol.as_str() {
            "http" | "https" => Ok(()),
            other => Err(ForemanError::Config(format!(
                "unsupported protocol '{}' (expected 'http' or 'https')",
                other
            ))),
        }
    }
}

/// Foreman API client
///
/// Stateless apart from connection settings; every call is one request.
pub struct ForemanClient {
    client: Client,
    config: ClientConfig,
    /// Custom base URL override (for testing with mock servers)
    base_url_override: Option<String>,
}

impl ForemanClient {
    /// Create a new client for the configured server
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(api::CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(api::REQUEST_TIMEOUT_SECS))
            .danger_accept_invalid_certs(config.insecure)
            .build()?;

        if config.insecure {
            debug!("TLS certificate verification disabled for {}", config.host);
        }

        Ok(Self {
            client,
            config,
            base_url_override: None,
        })
    }

    /// Create a client talking to an explicit base URL (e.g. a mock server)
    ///
    /// The URL replaces `<protocol>://<host>/api` entirely.
    pub fn with_base_url(config: ClientConfig, base_url: &str) -> Self {
        let client = Client::builder().build().unwrap_or_else(|_| Client::new());

        Self {
            client,
            config,
            base_url_override: Some(base_url.trim_end_matches('/').to_string()),
        }
    }

    /// Build the base URL for API requests
    pub(crate) fn base_url(&self) -> String {
        if let Some(ref url) = self.base_url_override {
            return url.clone();
        }
        format!(
            "{}://{}/{}",
            self.config.protocol,
            self.config.host,
            api::BASE_PATH.trim_start_matches('/')
        )
    }

    /// Build a full URL for an endpoint path such as "/organizations/3"
    pub(crate) fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url(), endpoint)
    }

    /// Get the configured host
    pub fn host(&self) -> &str {
        &self.config.host
    }

    /// Add standard headers and authentication to a request builder
    fn with_headers(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .basic_auth(&self.config.username, Some(&self.config.password))
            .header("Accept", "application/json")
            .header("Content-Type", "application/json")
    }

    /// Create a GET request builder with standard headers
    pub(crate) fn get(&self, url: &str) -> RequestBuilder {
        self.with_headers(self.client.get(url))
    }

    /// Create a POST request builder with standard headers
    pub(crate) fn post(&self, url: &str) -> RequestBuilder {
        self.with_headers(self.client.post(url))
    }

    /// Create a PUT request builder with standard headers
    pub(crate) fn put(&self, url: &str) -> RequestBuilder {
        self.with_headers(self.client.put(url))
    }

    /// Create a DELETE request builder with standard headers
    pub(crate) fn delete(&self, url: &str) -> RequestBuilder {
        self.with_headers(self.client.delete(url))
    }

    /// Send a request and decode a successful JSON body into `T`
    ///
    /// 404 maps to [`ForemanError::NotFound`]; any other non-success status
    /// maps to [`ForemanError::Api`] carrying the response body.
    pub(crate) async fn send_and_parse<T>(
        &self,
        builder: RequestBuilder,
        resource_label: &str,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = self.send(builder, resource_label).await?;
        let body = response.text().await?;
        trace!("Response body for {}: {}", resource_label, body);
        serde_json::from_str(&body).map_err(|e| {
            ForemanError::Json(format!("Failed to parse {}: {}", resource_label, e))
        })
    }

    /// Send a request whose successful body is not needed
    pub(crate) async fn send_and_discard(
        &self,
        builder: RequestBuilder,
        resource_label: &str,
    ) -> Result<()> {
        self.send(builder, resource_label).await.map(|_| ())
    }

    async fn send(&self, builder: RequestBuilder, resource_label: &str) -> Result<Response> {
        let response = builder.send().await?;
        let status = response.status();
        debug!("{} -> HTTP {}", resource_label, status.as_u16());

        if status.is_success() {
            return Ok(response);
        }
        if status.as_u16() == 404 {
            return Err(ForemanError::NotFound(resource_label.to_string()));
        }

        let body = response.text().await.unwrap_or_default();
        Err(ForemanError::Api {
            status: status.as_u16(),
            message: format!("Failed to process {}: {}", resource_label, body.trim()),
        })
    }
}

#[cfg(test)]
impl ForemanClient {
    /// Create a test client with mock base URL
    pub fn test_client(base_url: &str) -> Self {
        Self::with_base_url(
            ClientConfig::new("mock.foreman.test", "admin", "changeme"),
            base_url,
        )
    }
}
