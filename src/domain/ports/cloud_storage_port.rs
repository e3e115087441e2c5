//! Cloud storage port definition.

use std::path::Path;

use async_trait::async_trait;

use crate::domain::entities::Bucket;
use crate::domain::errors::CloudError;

/// Port for object storage inventory operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CloudStoragePort: Send + Sync {
    /// Builds an authenticated session from the key file at `credentials_path`
    /// and lists every bucket it can see, in service order.
    async fn list_buckets(&self, credentials_path: &Path) -> Result<Vec<Bucket>, CloudError>;
}
