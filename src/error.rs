use std::fmt;

/// Custom error type for hub operations
#[derive(Debug)]
pub enum HubError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// API returned an error response
    Api { status: u16, message: String },
    /// Command was invoked without a required argument
    Usage { message: String, usage: String },
    /// Positional argument failed validation
    InvalidArgument(String),
    /// User did not confirm a destructive action
    ConfirmationDeclined,
    /// Token not found in any source
    TokenNotFound(String),
    /// Host not found in any source
    HostNotFound(String),
    /// Failed to read or parse credentials
    Credentials(String),
    /// JSON parsing error
    Json(String),
    /// Configuration error
    Config(String),
    /// Reading from or writing to the terminal failed
    Io(std::io::Error),
    /// Error raised while performing a named action
    Action {
        action: &'static str,
        source: Box<HubError>,
    },
}

impl HubError {
    /// Wrap the error with the action that was being performed
    pub fn with_action(self, action: &'static str) -> Self {
        HubError::Action {
            action,
            source: Box::new(self),
        }
    }

    /// HTTP status of a failed remote call, when the transport supplied one
    pub fn status(&self) -> Option<u16> {
        match self {
            HubError::Api { status, .. } => Some(*status),
            HubError::Http(e) => e.status().map(|s| s.as_u16()),
            HubError::Action { source, .. } => source.status(),
            _ => None,
        }
    }

    /// True when the remote service refused the call for lack of permission.
    ///
    /// Uses the HTTP status when available and only falls back to the
    /// `HTTP 403` marker in the message otherwise.
    pub fn is_forbidden(&self) -> bool {
        match self.status() {
            Some(status) => status == 403,
            None => self.to_string().contains("HTTP 403"),
        }
    }
}

impl fmt::Display for HubError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HubError::Http(e) => write!(f, "HTTP request failed: {}", e),
            HubError::Api { status, message } => {
                let reason = reqwest::StatusCode::from_u16(*status)
                    .ok()
                    .and_then(|s| s.canonical_reason())
                    .unwrap_or("Unexpected response");
                write!(f, "{} (HTTP {})", reason, status)?;
                if !message.is_empty() {
                    write!(f, "\n{}", message)?;
                }
                Ok(())
            }
            HubError::Usage { message, usage } => write!(f, "{}\n{}", message, usage),
            HubError::InvalidArgument(arg) => write!(f, "invalid argument: {}", arg),
            HubError::ConfirmationDeclined => write!(f, "Please type 'yes' for confirmation."),
            HubError::TokenNotFound(msg) => write!(f, "{}", msg),
            HubError::HostNotFound(msg) => write!(f, "{}", msg),
            HubError::Credentials(msg) => write!(f, "{}", msg),
            HubError::Json(msg) => write!(f, "JSON error: {}", msg),
            HubError::Config(msg) => write!(f, "Configuration error: {}", msg),
            HubError::Io(e) => write!(f, "I/O error: {}", e),
            HubError::Action { action, source } => write!(f, "Error {}: {}", action, source),
        }
    }
}

impl std::error::Error for HubError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HubError::Http(e) => Some(e),
            HubError::Io(e) => Some(e),
            HubError::Action { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for HubError {
    fn from(err: reqwest::Error) -> Self {
        HubError::Http(err)
    }
}

impl From<serde_json::Error> for HubError {
    fn from(err: serde_json::Error) -> Self {
        HubError::Json(err.to_string())
    }
}

impl From<serde_yml::Error> for HubError {
    fn from(err: serde_yml::Error) -> Self {
        HubError::Config(err.to_string())
    }
}

impl From<std::io::Error> for HubError {
    fn from(err: std::io::Error) -> Self {
        HubError::Io(err)
    }
}

/// Result type alias for hub operations
pub type Result<T> = std::result::Result<T, HubError>;
