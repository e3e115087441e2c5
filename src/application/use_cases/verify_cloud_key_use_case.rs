//! Cloud key verification use case.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::dto::CloudReport;
use crate::domain::ports::CloudStoragePort;

/// Checks that the configured key file can list storage buckets.
#[derive(Clone)]
pub struct VerifyCloudKeyUseCase {
    storage_port: Arc<dyn CloudStoragePort>,
    credentials_path: PathBuf,
}

impl VerifyCloudKeyUseCase {
    /// Creates new verification use case.
    #[must_use]
    pub fn new(storage_port: Arc<dyn CloudStoragePort>, credentials_path: impl Into<PathBuf>) -> Self {
        Self {
            storage_port,
            credentials_path: credentials_path.into(),
        }
    }

    /// Returns the key file this use case verifies.
    #[must_use]
    pub fn credentials_path(&self) -> &Path {
        &self.credentials_path
    }

    /// Runs one best-effort listing. Failures are folded into the report.
    pub async fn execute(&self) -> CloudReport {
        debug!(path = %self.credentials_path.display(), "Verifying cloud key");

        match self.storage_port.list_buckets(&self.credentials_path).await {
            Ok(buckets) => {
                info!(count = buckets.len(), "Cloud key verified");
                CloudReport::Connected { buckets }
            }
            Err(e) => {
                warn!(error = %e, "Cloud key verification failed");
                CloudReport::Failed {
                    diagnostic: e.to_string(),
                }
            }
        }
    }
}
