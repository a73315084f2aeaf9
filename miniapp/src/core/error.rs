//! # Client Error Types
//!
//! Consolidated error handling for the mini-app client core.
//!
//! ## Error Categories
//!
//! - **Network**: no response was received (connection refused, DNS, TLS, reset)
//! - **Http**: a response arrived with a non-success status
//! - **Decode**: the body is not JSON or does not have the expected shape
//! - **Validation**: a caller-supplied argument violates a precondition; raised
//!   before any request is issued
//! - **Provider**: the payment provider answered `{"ok": false, ...}`
//! - **Config**: endpoint configuration is missing or malformed
//!
//! ## Usage Pattern
//!
//! ```rust
//! use miniapp::core::error::ClientError;
//!
//! fn validate_amount(amount: f64) -> Result<f64, ClientError> {
//!     if amount <= 0.0 {
//!         return Err(ClientError::Validation("from_amount must be greater than 0".to_string()));
//!     }
//!     Ok(amount)
//! }
//!
//! assert!(validate_amount(-1.0).is_err());
//! ```

use thiserror::Error;

/// Error type for every RemoteClient operation.
///
/// Errors are always surfaced to the caller; nothing in the client swallows
/// them or turns them into dialogs.
///
/// ```rust
/// use miniapp::core::error::ClientError;
///
/// let err = ClientError::Http { status: 404, message: "User not found".to_string() };
/// assert_eq!(err.to_string(), "HTTP error 404: User not found");
/// assert!(err.is_not_found());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// Transport failure, no response received.
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response. `message` is the remote `{"error": ...}` text when
    /// the body carries one, otherwise the canonical reason phrase.
    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },

    /// Body does not parse or does not match the expected shape.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Precondition violated; no request was sent.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The payment provider rejected the call.
    #[error("Payment provider error: {0}")]
    Provider(String),

    /// Missing or malformed configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::Http { status: 404, .. })
    }

    /// The remote refused the credentials (401 or 403).
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Http { status: 401 | 403, .. })
    }

    /// HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Network(err.to_string())
    }
}

/// Convenience type alias for `Result<T, ClientError>`.
pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            ClientError::Network("connection refused".to_string()).to_string(),
            "Network error: connection refused"
        );
        assert_eq!(
            ClientError::Validation("from_amount must be greater than 0".to_string()).to_string(),
            "Validation error: from_amount must be greater than 0"
        );
    }

    #[test]
    fn test_status_helpers() {
        let not_found = ClientError::Http { status: 404, message: "missing".to_string() };
        let server = ClientError::Http { status: 500, message: "boom".to_string() };

        assert!(not_found.is_not_found());
        assert!(!server.is_not_found());
        assert_eq!(server.status(), Some(500));
        assert_eq!(ClientError::Decode("x".to_string()).status(), None);

        let forbidden = ClientError::Http { status: 403, message: "Unauthorized".to_string() };
        assert!(forbidden.is_unauthorized());
        assert!(!not_found.is_unauthorized());
    }
}
