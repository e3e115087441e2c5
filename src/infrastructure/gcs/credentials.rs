//! Service account key file.

use std::fmt;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::domain::errors::CloudError;

const SERVICE_ACCOUNT_TYPE: &str = "service_account";
const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

/// Parsed service account key. The private key is wiped on drop.
#[derive(Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct ServiceAccountKey {
    #[serde(rename = "type")]
    key_type: String,
    project_id: String,
    private_key: String,
    client_email: String,
    #[serde(default = "default_token_uri")]
    token_uri: String,
}

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

impl ServiceAccountKey {
    /// Parses a key from its JSON text.
    ///
    /// # Errors
    /// Returns `InvalidCredentials` for malformed JSON or a non service account key.
    pub fn from_json(content: &str) -> Result<Self, CloudError> {
        let key: Self = serde_json::from_str(content).map_err(|e| {
            CloudError::invalid_credentials(format!("malformed service account key: {e}"))
        })?;

        if key.key_type != SERVICE_ACCOUNT_TYPE {
            return Err(CloudError::invalid_credentials(format!(
                "expected key type {SERVICE_ACCOUNT_TYPE:?}, found {:?}",
                key.key_type
            )));
        }

        Ok(key)
    }

    /// Reads and parses the key file at `path`.
    ///
    /// # Errors
    /// Returns `CredentialsNotFound` when the file is missing, otherwise
    /// `InvalidCredentials` when it cannot be read or parsed.
    pub async fn load(path: &Path) -> Result<Self, CloudError> {
        debug!(path = %path.display(), "Loading service account key");

        let content = match tokio::fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(CloudError::not_found(path.display().to_string()));
            }
            Err(e) => {
                return Err(CloudError::invalid_credentials(format!(
                    "failed to read {}: {e}",
                    path.display()
                )));
            }
        };

        Self::from_json(&content)
    }

    #[must_use]
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    #[must_use]
    pub fn client_email(&self) -> &str {
        &self.client_email
    }

    #[must_use]
    pub fn token_uri(&self) -> &str {
        &self.token_uri
    }

    pub(super) fn private_key_pem(&self) -> &[u8] {
        self.private_key.as_bytes()
    }
}

impl fmt::Debug for ServiceAccountKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceAccountKey")
            .field("project_id", &self.project_id)
            .field("client_email", &self.client_email)
            .field("token_uri", &self.token_uri)
            .field("private_key", &"<redacted>")
            .finish()
    }
}
