//! Cloud storage error types.

use thiserror::Error;

/// Cloud storage error variants.
///
/// The `Display` form is shown verbatim to the operator, so every variant
/// carries enough detail to diagnose a broken key file or network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum CloudError {
    #[error("credentials file not found: {path}")]
    CredentialsNotFound { path: String },

    #[error("invalid credentials: {reason}")]
    InvalidCredentials { reason: String },

    #[error("authentication rejected: {message}")]
    AuthRejected { message: String },

    #[error("network error: {message}")]
    NetworkError { message: String },

    #[error("storage service returned {status}: {message}")]
    ServiceError { status: u16, message: String },

    #[error("unexpected cloud error: {message}")]
    Unexpected { message: String },
}

impl CloudError {
    /// Creates credentials not found error.
    #[must_use]
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::CredentialsNotFound { path: path.into() }
    }

    /// Creates invalid credentials error.
    #[must_use]
    pub fn invalid_credentials(reason: impl Into<String>) -> Self {
        Self::InvalidCredentials {
            reason: reason.into(),
        }
    }

    /// Creates auth rejected error.
    #[must_use]
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::AuthRejected {
            message: message.into(),
        }
    }

    /// Creates network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::NetworkError {
            message: message.into(),
        }
    }

    /// Creates service error.
    #[must_use]
    pub fn service(status: u16, message: impl Into<String>) -> Self {
        Self::ServiceError {
            status,
            message: message.into(),
        }
    }

    /// Creates unexpected error.
    #[must_use]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Returns whether the key file itself is at fault.
    #[must_use]
    pub const fn is_credentials_error(&self) -> bool {
        matches!(
            self,
            Self::CredentialsNotFound { .. } | Self::InvalidCredentials { .. }
        )
    }
}
