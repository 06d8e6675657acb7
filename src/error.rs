// Error types module
use thiserror::Error;

/// Convenience result alias for console-link operations.
pub type Result<T> = std::result::Result<T, ConsoleLinkError>;

/// Main error type for the console-link client.
#[derive(Error, Debug)]
pub enum ConsoleLinkError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Connection already exists: {0}")]
    Conflict(String),

    #[error("Unrecognized page markup: {0}")]
    MarkupShape(String),

    #[error("Server error: status={status_code}, path={path}")]
    Remote { status_code: u16, path: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ConsoleLinkError {
    /// Create a validation error
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        ConsoleLinkError::Validation(msg.into())
    }

    /// Create a conflict error for a connection name
    pub fn conflict<S: Into<String>>(name: S) -> Self {
        ConsoleLinkError::Conflict(name.into())
    }

    /// Create a markup-shape error
    pub fn markup<S: Into<String>>(msg: S) -> Self {
        ConsoleLinkError::MarkupShape(msg.into())
    }

    /// Create a remote-status error for a non-success response
    pub fn remote<S: Into<String>>(status_code: u16, path: S) -> Self {
        ConsoleLinkError::Remote {
            status_code,
            path: path.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ConsoleLinkError::validation("connection identifier cannot be empty");
        assert_eq!(
            err.to_string(),
            "Validation error: connection identifier cannot be empty"
        );
    }

    #[test]
    fn test_conflict_error_display() {
        let err = ConsoleLinkError::conflict("leaderboard");
        assert_eq!(err.to_string(), "Connection already exists: leaderboard");
    }

    #[test]
    fn test_markup_error_display() {
        let err = ConsoleLinkError::markup("navigation menu not found");
        assert_eq!(
            err.to_string(),
            "Unrecognized page markup: navigation menu not found"
        );
    }

    #[test]
    fn test_remote_error_display() {
        let err = ConsoleLinkError::remote(500, "/my/connections/create/nav/token");
        assert_eq!(
            err.to_string(),
            "Server error: status=500, path=/my/connections/create/nav/token"
        );
    }
}
