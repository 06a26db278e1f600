use std::fmt;

/// Custom error type for Foreman operations
#[derive(Debug)]
pub enum ForemanError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// API returned an error response
    Api { status: u16, message: String },
    /// Server reported the resource as missing (404)
    NotFound(String),
    /// Host not found in any source
    HostNotFound(String),
    /// Username/password not found, or credentials file unreadable
    Credentials(String),
    /// JSON encode/decode error
    Json(String),
    /// Configuration error
    Config(String),
    /// Resource id is not a numeric Foreman id
    InvalidId(String),
    /// Data source lookup did not resolve to exactly one record
    DataSource(String),
    /// Decoded result did not have the expected shape
    UnexpectedResult { expected: String, got: String },
}

impl fmt::Display for ForemanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ForemanError::Http(e) => write!(f, "HTTP request failed: {}", e),
            ForemanError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            ForemanError::NotFound(what) => write!(f, "Not found: {}", what),
            ForemanError::HostNotFound(msg) => write!(f, "{}", msg),
            ForemanError::Credentials(msg) => write!(f, "{}", msg),
            ForemanError::Json(msg) => write!(f, "JSON error: {}", msg),
            ForemanError::Config(msg) => write!(f, "Configuration error: {}", msg),
            ForemanError::InvalidId(id) => {
                write!(f, "Invalid id '{}': expected a numeric Foreman id", id)
            }
            ForemanError::DataSource(msg) => write!(f, "{}", msg),
            ForemanError::UnexpectedResult { expected, got } => write!(
                f,
                "Data source results contain unexpected type. Expected [{}], got [{}]",
                expected, got
            ),
        }
    }
}

impl std::error::Error for ForemanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ForemanError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl ForemanError {
    /// Whether the server reported the resource as missing
    pub fn is_not_found(&self) -> bool {
        matches!(self, ForemanError::NotFound(_))
    }
}

impl From<reqwest::Error> for ForemanError {
    fn from(err: reqwest::Error) -> Self {
        ForemanError::Http(err)
    }
}

impl From<serde_json::Error> for ForemanError {
    fn from(err: serde_json::Error) -> Self {
        ForemanError::Json(err.to_string())
    }
}

impl From<std::io::Error> for ForemanError {
    fn from(err: std::io::Error) -> Self {
        ForemanError::Credentials(err.to_string())
    }
}

/// Result type alias for Foreman operations
pub type Result<T> = std::result::Result<T, ForemanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = ForemanError::Api {
            status: 422,
            message: "Name has already been taken".to_string(),
        };
        assert!(err.to_string().contains("422"));
        assert!(err.to_string().contains("Name has already been taken"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ForemanError>();
    }

    #[test]
    fn test_not_found_display() {
        let err = ForemanError::NotFound("organization 42".to_string());
        assert_eq!(err.to_string(), "Not found: organization 42");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_is_not_found_false_for_api_error() {
        let err = ForemanError::Api {
            status: 500,
            message: "boom".to_string(),
        };
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_invalid_id_display() {
        let err = ForemanError::InvalidId("abc".to_string());
        assert!(err.to_string().contains("'abc'"));
        assert!(err.to_string().contains("numeric"));
    }

    #[test]
    fn test_json_error_display() {
        let err = ForemanError::Json("Invalid JSON".to_string());
        assert!(err.to_string().contains("JSON error"));
        assert!(err.to_string().contains("Invalid JSON"));
    }

    #[test]
    fn test_config_error_display() {
        let err = ForemanError::Config("bad protocol".to_string());
        assert!(err.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_data_source_display_is_verbatim() {
        let err =
            ForemanError::DataSource("Data source organization returned no results".to_string());
        assert_eq!(
            err.to_string(),
            "Data source organization returned no results"
        );
    }

    #[test]
    fn test_unexpected_result_display() {
        let err = ForemanError::UnexpectedResult {
            expected: "ForemanOrganization".to_string(),
            got: "empty result list".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Expected [ForemanOrganization]"));
        assert!(msg.contains("got [empty result list]"));
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: ForemanError = json_err.into();
        match err {
            ForemanError::Json(msg) => assert!(!msg.is_empty()),
            _ => panic!("Expected ForemanError::Json"),
        }
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ForemanError = io_err.into();
        match err {
            ForemanError::Credentials(msg) => assert!(msg.contains("file not found")),
            _ => panic!("Expected ForemanError::Credentials"),
        }
    }

    #[test]
    fn test_error_source_none_for_api() {
        use std::error::Error;
        let err = ForemanError::Api {
            status: 500,
            message: "Server error".to_string(),
        };
        assert!(err.source().is_none());
    }
}
