//! Label parsing error types.

use thiserror::Error;

/// Raised when a free-form label matches none of the fixed choices.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} label: {value:?}")]
pub struct LabelError {
    kind: &'static str,
    value: String,
}

impl LabelError {
    /// Creates unknown label error.
    #[must_use]
    pub fn unknown(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}
