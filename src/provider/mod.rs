//! Provider layer
//!
//! Binds resource and data source lifecycles to the Foreman API. Hooks take
//! an explicit [`ProviderContext`] that carries the configured client.

pub mod organization;
mod resource_data;
pub mod schema;

use crate::foreman::ForemanClient;

pub use resource_data::ResourceData;
pub use schema::{Attribute, AttributeType, ProviderSchema, Schema};

/// State shared by every lifecycle hook of a configured provider
pub struct ProviderContext {
    client: ForemanClient,
}

impl ProviderContext {
    pub fn new(client: ForemanClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ForemanClient {
        &self.client
    }
}

/// Schema of the provider configuration block
pub fn provider_config_schema() -> Schema {
    Schema::new()
        .with_attribute(
            "server_hostname",
            Attribute::required(AttributeType::String)
                .with_description("Hostname of the Foreman server, optionally with a port."),
        )
        .with_attribute(
            "server_protocol",
            Attribute::optional(AttributeType::String)
                .with_description("Protocol used to reach the server: \"http\" or \"https\"."),
        )
        .with_attribute(
            "client_username",
            Attribute::optional(AttributeType::String)
                .with_description("Username for HTTP basic authentication."),
        )
        .with_attribute(
            "client_password",
            Attribute::optional(AttributeType::String)
                .sensitive()
                .with_description("Password for HTTP basic authentication."),
        )
        .with_attribute(
            "client_tls_insecure",
            Attribute::optional(AttributeType::Bool)
                .with_description("Skip verification of the server's TLS certificate."),
        )
}

/// Every schema this provider exposes, keyed by type name
pub fn provider_schema() -> ProviderSchema {
    let mut schema = ProviderSchema {
        provider: provider_config_schema(),
        ..Default::default()
    };
    schema.resources.insert(
        organization::RESOURCE_NAME.to_string(),
        organization::resource_schema(),
    );
    schema.data_sources.insert(
        organization::RESOURCE_NAME.to_string(),
        organization::data_source_schema(),
    );
    schema
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_schema_registers_organization() {
        let schema = provider_schema();
        assert!(schema.resources.contains_key("foreman_organization"));
        assert!(schema.data_sources.contains_key("foreman_organization"));
        assert!(schema.provider.get("server_hostname").unwrap().required);
    }

    #[test]
    fn test_password_is_sensitive() {
        let schema = provider_config_schema();
        assert_eq!(schema.get("client_password").unwrap().sensitive, Some(true));
        assert_eq!(schema.get("client_username").unwrap().sensitive, None);
    }

    #[test]
    fn test_context_exposes_client() {
        let ctx = ProviderContext::new(ForemanClient::test_client("http://127.0.0.1:1"));
        assert_eq!(ctx.client().host(), "mock.foreman.test");
    }
}
