//! Photo upload error types.

use thiserror::Error;

/// Photo upload error variants.
#[derive(Debug, Error)]
pub enum PhotoError {
    #[error("unsupported file type {extension:?}, expected jpg, jpeg or png")]
    UnsupportedFormat { extension: String },

    #[error("photo file is empty")]
    Empty,

    #[error("failed to read photo: {0}")]
    Io(#[from] std::io::Error),
}

impl PhotoError {
    /// Creates unsupported format error.
    #[must_use]
    pub fn unsupported(extension: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            extension: extension.into(),
        }
    }
}
