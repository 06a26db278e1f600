//! Username/password resolution from multiple sources

use log::debug;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::credentials;
use crate::error::{ForemanError, Result};

/// Credentials file structure
#[derive(Deserialize, Debug)]
pub(crate) struct CredentialsFile {
    pub(crate) credentials: HashMap<String, HostCredential>,
}

/// Single credential entry
#[derive(Deserialize, Debug, Clone)]
pub(crate) struct HostCredential {
    pub(crate) username: String,
    pub(crate) password: String,
}

impl CredentialsFile {
    /// Read and parse a credentials file
    ///
    /// Returns `Ok(None)` when the file does not exist.
    pub(crate) fn load(path: &Path) -> Result<Option<Self>> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(ForemanError::Credentials(format!(
                    "Could not read credentials file {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        serde_json::from_str(&content).map(Some).map_err(|e| {
            ForemanError::Credentials(format!(
                "Could not parse credentials file {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Default credentials path (~/.foremanctl/credentials.json)
    pub(crate) fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(credentials::DIR_NAME).join(credentials::FILE_NAME))
    }
}

/// Resolved API login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Login {
    pub username: String,
    pub password: String,
}

/// Login resolution with fallback logic
pub struct CredentialsResolver {
    host: String,
    credentials_path: Option<PathBuf>,
}

impl CredentialsResolver {
    /// Create a new resolver for the given host using the default file path
    pub fn new(host: &str) -> Self {
        Self {
            host: host.to_string(),
            credentials_path: CredentialsFile::default_path(),
        }
    }

    /// Create a resolver reading a specific credentials file
    pub fn with_path(host: &str, path: PathBuf) -> Self {
        Self {
            host: host.to_string(),
            credentials_path: Some(path),
        }
    }

    /// Resolve username and password, each independently, with fallback:
    /// 1. CLI argument (clap already folds in the FOREMAN_CLIENT_* env vars)
    /// 2. Credentials file entry for the host
    pub fn resolve(&self, cli_username: Option<&str>, cli_password: Option<&str>) -> Result<Login> {
        if let (Some(username), Some(password)) = (cli_username, cli_password) {
            debug!("Using username and password from CLI/environment");
            return Ok(Login {
                username: username.to_string(),
                password: password.to_string(),
            });
        }

        let file_entry = self.read_from_credentials_file()?;

        let username = cli_username
            .map(str::to_string)
            .or_else(|| file_entry.as_ref().map(|c| c.username.clone()));
        let password = cli_password
            .map(str::to_string)
            .or_else(|| file_entry.as_ref().map(|c| c.password.clone()));

        match (username, password) {
            (Some(username), Some(password)) => Ok(Login { username, password }),
            _ => Err(ForemanError::Credentials(self.not_found_message())),
        }
    }

    fn read_from_credentials_file(&self) -> Result<Option<HostCredential>> {
        let Some(path) = self.credentials_path.as_deref() else {
            return Ok(None);
        };
        debug!("Looking for credentials file at: {}", path.display());

        let Some(file) = CredentialsFile::load(path)? else {
            return Ok(None);
        };

        let entry = file.credentials.get(&self.host).cloned();
        if entry.is_some() {
            debug!(
                "Using credentials from {} for host: {}",
                path.display(),
                self.host
            );
        }
        Ok(entry)
    }

    /// Generate helpful error message when no login is found
    fn not_found_message(&self) -> String {
        let creds_info = self
            .credentials_path
            .as_ref()
            .map(|p| format!(" or in credentials file {}", p.display()))
            .unwrap_or_default();

        format!(
            "No credentials found for host '{}'. Please provide them using one of:\n\
             \n\
             1. CLI arguments:     foremanctl --username <USER> --password <PASS>\n\
             2. Environment vars:  export {}=<USER> {}=<PASS>\n\
             \n\
             Checked: CLI, env vars{}",
            self.host,
            credentials::USERNAME_ENV_VAR,
            credentials::PASSWORD_ENV_VAR,
            creds_info
        )
    }
}
