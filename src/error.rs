use std::fmt;

/// Custom error type for REST API operations
#[derive(Debug)]
pub enum TwilioError {
    /// No response was obtained (network, DNS or TLS failure)
    Connection(String),
    /// API returned an error response
    Api {
        code: Option<i64>,
        status: u16,
        message: String,
        more_info: Option<String>,
    },
    /// Response body could not be decoded
    Json(String),
    /// Path template referenced a parameter that was not supplied
    Template(String),
    /// Credentials not found in any source
    CredentialsNotFound(String),
    /// Failed to read or parse credentials file
    Credentials(String),
    /// Configuration error
    Config(String),
}

impl TwilioError {
    /// Build an API error from a status and message
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        TwilioError::Api {
            code: None,
            status,
            message: message.into(),
            more_info: None,
        }
    }

    /// Server-provided error code, if any
    pub fn code(&self) -> Option<i64> {
        match self {
            TwilioError::Api { code, .. } => *code,
            _ => None,
        }
    }

    /// HTTP status of an API error
    pub fn status(&self) -> Option<u16> {
        match self {
            TwilioError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl fmt::Display for TwilioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TwilioError::Connection(msg) => write!(f, "Unable to connect to server: {}", msg),
            TwilioError::Api {
                code,
                status,
                message,
                more_info,
            } => {
                write!(f, "API error (status {}", status)?;
                if let Some(code) = code {
                    write!(f, ", code {}", code)?;
                }
                write!(f, "): {}", message)?;
                if let Some(info) = more_info {
                    write!(f, " ({})", info)?;
                }
                Ok(())
            }
            TwilioError::Json(msg) => write!(f, "JSON error: {}", msg),
            TwilioError::Template(msg) => write!(f, "Path template error: {}", msg),
            TwilioError::CredentialsNotFound(msg) => write!(f, "{}", msg),
            TwilioError::Credentials(msg) => write!(f, "{}", msg),
            TwilioError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for TwilioError {}

impl From<reqwest::Error> for TwilioError {
    fn from(err: reqwest::Error) -> Self {
        TwilioError::Connection(err.to_string())
    }
}

impl From<serde_json::Error> for TwilioError {
    fn from(err: serde_json::Error) -> Self {
        TwilioError::Json(err.to_string())
    }
}

impl From<std::io::Error> for TwilioError {
    fn from(err: std::io::Error) -> Self {
        TwilioError::Credentials(err.to_string())
    }
}

/// Result type alias for REST API operations
pub type Result<T> = std::result::Result<T, TwilioError>;
