//! Error types and handling for the Telegram Bot API client.
//!
//! This module provides specific error types for the different failure
//! scenarios of a bot call. Errors are designed to be actionable and carry
//! enough context for callers to implement their own retry policy.
//!
//! ## Error Categories
//!
//! - **Network Errors**: Connection issues, timeouts (retryable)
//! - **API Errors**: The platform rejected a well-formed request; the
//!   numeric code and description are carried verbatim (situational)
//! - **Encoding Errors**: A structured field could not be JSON-encoded
//!   (not retryable)
//! - **Invalid Arguments**: Missing attachment, empty media group — caught
//!   before any network attempt (not retryable)
//! - **Configuration Errors**: Invalid settings (not retryable)

use std::fmt;

/// Result type alias for bot API operations.
pub type Result<T> = std::result::Result<T, BotError>;

/// Comprehensive error type for bot API operations.
#[derive(Debug, thiserror::Error)]
pub enum BotError {
    /// Network-related errors (retryable)
    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// Request timeout (retryable)
    #[error("Request timeout")]
    Timeout,

    /// The platform rejected the request. The code and description are
    /// reported by the server verbatim; no interpretation is applied.
    #[error("Telegram API error [{code}]: {description}")]
    Api { code: i64, description: String },

    /// A request was malformed before any network attempt was made.
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// A structured option field could not be JSON-encoded.
    #[error("JSON encoding failed: {0}")]
    Encoding(#[from] serde_json::Error),

    /// I/O errors (reading local files for upload)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// URL parsing errors
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration errors (not retryable)
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Generic errors for wrapping other error types
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl BotError {
    /// Determines if an error is retryable.
    ///
    /// Network errors and timeouts are retryable. API errors are retryable
    /// only for rate limiting and server-side failures; everything the
    /// caller can act on (bad request, forbidden, not found) is not.
    pub fn is_retryable(&self) -> bool {
        match self {
            BotError::Network(_) | BotError::Timeout => true,

            BotError::Api { code, .. } => match code {
                // Rate limiting (retryable with delay)
                429 => true,
                // Server errors
                500..=599 => true,
                _ => false,
            },

            _ => false,
        }
    }

    /// Gets the severity level of the error for logging purposes.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            BotError::Network(_) | BotError::Timeout => ErrorSeverity::Warning,

            BotError::Api { code, .. } => match code {
                // The token was rejected outright
                401 | 404 => ErrorSeverity::Critical,
                _ => ErrorSeverity::Error,
            },

            BotError::InvalidArgument { .. }
            | BotError::Encoding(_)
            | BotError::Io(_)
            | BotError::UrlParse(_)
            | BotError::Config { .. }
            | BotError::Internal(_) => ErrorSeverity::Error,
        }
    }

    /// Creates an API error from a response envelope's code and description.
    pub fn from_api_response(code: i64, description: impl Into<String>) -> Self {
        BotError::Api {
            code,
            description: description.into(),
        }
    }

    /// Creates an invalid-argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        BotError::InvalidArgument {
            message: message.into(),
        }
    }

    /// Creates a configuration error.
    pub fn config_error(message: impl Into<String>) -> Self {
        BotError::Config {
            message: message.into(),
        }
    }
}

/// Error severity levels for logging and monitoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Low impact errors that don't affect core functionality
    Warning,
    /// Standard errors that affect specific operations
    Error,
    /// High impact errors that affect core functionality
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "WARNING"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_retryability() {
        let timeout_err = BotError::Timeout;
        assert!(timeout_err.is_retryable());

        // Rate limiting should be retryable
        let flood_err = BotError::from_api_response(429, "Too Many Requests: retry after 30");
        assert!(flood_err.is_retryable());

        // Server errors should be retryable
        let server_err = BotError::from_api_response(502, "Bad Gateway");
        assert!(server_err.is_retryable());

        // Client-side API errors should not be retryable
        let forbidden_err = BotError::from_api_response(403, "Forbidden: bot was blocked");
        assert!(!forbidden_err.is_retryable());

        // Argument errors should not be retryable
        let arg_err = BotError::invalid_argument("missing photo attachment");
        assert!(!arg_err.is_retryable());
    }

    #[test]
    fn test_error_severity() {
        let network_err = BotError::Timeout;
        assert_eq!(network_err.severity(), ErrorSeverity::Warning);

        let config_err = BotError::config_error("missing base_url");
        assert_eq!(config_err.severity(), ErrorSeverity::Error);

        let auth_err = BotError::from_api_response(401, "Unauthorized");
        assert_eq!(auth_err.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_error_creation_helpers() {
        let api_err = BotError::from_api_response(400, "Bad Request: chat not found");
        match api_err {
            BotError::Api { code, description } => {
                assert_eq!(code, 400);
                assert_eq!(description, "Bad Request: chat not found");
            }
            _ => panic!("Expected Api error"),
        }

        let arg_err = BotError::invalid_argument("media group is empty");
        match arg_err {
            BotError::InvalidArgument { message } => {
                assert_eq!(message, "media group is empty");
            }
            _ => panic!("Expected InvalidArgument error"),
        }
    }
}
