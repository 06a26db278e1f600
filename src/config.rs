/// Configuration constants for the Foreman API
pub mod api {
    /// Base path of the Foreman REST API
    pub const BASE_PATH: &str = "/api";

    /// Organizations endpoint
    pub const ORGANIZATIONS: &str = "organizations";

    /// Connect timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;

    /// Total request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
}

/// Configuration constants for credentials
pub mod credentials {
    /// Directory holding foremanctl files (relative to HOME)
    pub const DIR_NAME: &str = ".foremanctl";

    /// Credentials file name inside `DIR_NAME`
    pub const FILE_NAME: &str = "credentials.json";

    /// Environment variable for the API username
    pub const USERNAME_ENV_VAR: &str = "FOREMAN_CLIENT_USERNAME";

    /// Environment variable for the API password
    pub const PASSWORD_ENV_VAR: &str = "FOREMAN_CLIENT_PASSWORD";
}

/// Configuration constants for host resolution
pub mod host {
    /// Environment variable for the Foreman server hostname
    pub const ENV_VAR: &str = "FOREMAN_SERVER_HOSTNAME";

    /// Environment variable for the server protocol
    pub const PROTOCOL_ENV_VAR: &str = "FOREMAN_SERVER_PROTOCOL";

    /// Environment variable to skip TLS certificate verification
    pub const INSECURE_ENV_VAR: &str = "FOREMAN_CLIENT_TLS_INSECURE";
}

/// Default values for CLI
pub mod defaults {
    /// Default server protocol
    pub const PROTOCOL: &str = "https";

    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}
