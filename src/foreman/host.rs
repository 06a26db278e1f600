//! Host resolution from multiple sources

use dialoguer::{theme::ColorfulTheme, Select};
use log::debug;
use std::path::{Path, PathBuf};

use crate::config::host as host_config;
use crate::error::{ForemanError, Result};

use super::credentials::CredentialsFile;

/// Host resolution with fallback logic
pub struct HostResolver {
    credentials_path: Option<PathBuf>,
}

impl Default for HostResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl HostResolver {
    /// Resolver backed by the default credentials file
    pub fn new() -> Self {
        Self {
            credentials_path: CredentialsFile::default_path(),
        }
    }

    /// Resolver backed by a specific credentials file
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            credentials_path: Some(path),
        }
    }

    /// Resolve host from multiple sources with fallback:
    /// 1. CLI argument (clap already folds in FOREMAN_SERVER_HOSTNAME)
    /// 2. Credentials file:
    ///    - If 1 host: use it
    ///    - If multiple hosts: interactive selection (or error in batch mode)
    ///    - If no hosts: error
    pub fn resolve(&self, cli_host: Option<&str>, batch_mode: bool) -> Result<String> {
        if let Some(host) = cli_host {
            debug!("Using host from CLI/environment: {}", host);
            return Ok(host.to_string());
        }

        debug!(
            "No host in CLI or {}, trying credentials file",
            host_config::ENV_VAR
        );
        self.resolve_from_credentials_file(batch_mode)
    }

    fn resolve_from_credentials_file(&self, batch_mode: bool) -> Result<String> {
        let path = self
            .credentials_path
            .as_deref()
            .ok_or_else(|| ForemanError::HostNotFound(Self::host_not_found_message(None, None)))?;

        let Some(file) = CredentialsFile::load(path)? else {
            return Err(ForemanError::HostNotFound(Self::host_not_found_message(
                Some(path),
                None,
            )));
        };

        let mut hosts: Vec<String> = file.credentials.into_keys().collect();
        hosts.sort();

        match hosts.len() {
            0 => Err(ForemanError::HostNotFound(Self::host_not_found_message(
                Some(path),
                None,
            ))),
            1 => {
                let host = hosts.remove(0);
                debug!(
                    "Using single host from credentials file {}: {}",
                    path.display(),
                    host
                );
                Ok(host)
            }
            _ if batch_mode => Err(ForemanError::HostNotFound(Self::host_not_found_message(
                Some(path),
                Some(&hosts),
            ))),
            _ => Self::interactive_host_selection(&hosts, path),
        }
    }

    /// Prompt user to select a host interactively
    fn interactive_host_selection(hosts: &[String], path: &Path) -> Result<String> {
        eprintln!("\nMultiple hosts found in {}:", path.display());

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Select a Foreman server")
            .items(hosts)
            .default(0)
            .interact()
            .map_err(|e| ForemanError::HostNotFound(format!("Failed to select host: {}", e)))?;

        let host = hosts[selection].clone();
        debug!("User selected host: {}", host);
        Ok(host)
    }

    /// Generate helpful error message when host is not found
    fn host_not_found_message(path: Option<&Path>, available_hosts: Option<&[String]>) -> String {
        let creds_info = match (path, available_hosts) {
            (Some(p), Some(hosts)) => format!(
                "\n   Credentials file: {} ({} hosts found)\n   Available hosts: {}",
                p.display(),
                hosts.len(),
                hosts.join(", ")
            ),
            (Some(p), None) => {
                format!("\n   Credentials file: {} (no hosts found)", p.display())
            }
            (None, _) => "\n   Credentials file: not found".to_string(),
        };

        format!(
            "No Foreman server specified. Please provide a host using one of:\n\
             \n\
             1. CLI argument:      foremanctl --host <HOST>\n\
             2. Environment var:   export {}=<HOST>\n\
             \n\
             Checked:{}\n",
            host_config::ENV_VAR,
            creds_info
        )
    }
}
