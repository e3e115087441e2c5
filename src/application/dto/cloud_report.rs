//! Cloud key verification DTOs.

use crate::domain::entities::Bucket;

/// Result of a single cloud key verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CloudReport {
    /// Listing succeeded; buckets are in arrival order.
    Connected { buckets: Vec<Bucket> },
    /// Client construction or listing failed.
    Failed { diagnostic: String },
}

impl CloudReport {
    #[must_use]
    pub const fn is_connected(&self) -> bool {
        matches!(self, Self::Connected { .. })
    }

    /// Returns listed buckets, empty on failure.
    #[must_use]
    pub fn buckets(&self) -> &[Bucket] {
        match self {
            Self::Connected { buckets } => buckets,
            Self::Failed { .. } => &[],
        }
    }
}
