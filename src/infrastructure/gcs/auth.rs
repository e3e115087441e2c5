//! Service account JWT assertion.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde::Serialize;

use super::credentials::ServiceAccountKey;
use crate::domain::errors::CloudError;

pub const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const READ_ONLY_SCOPE: &str = "https://www.googleapis.com/auth/devstorage.read_only";
const ASSERTION_LIFETIME_MINUTES: i64 = 60;

#[derive(Debug, Serialize)]
struct Claims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

/// Signs the RS256 assertion exchanged for an access token.
///
/// # Errors
/// Returns `InvalidCredentials` when the private key is not a usable RSA PEM.
pub fn sign_assertion(key: &ServiceAccountKey, now: DateTime<Utc>) -> Result<String, CloudError> {
    let encoding_key = EncodingKey::from_rsa_pem(key.private_key_pem())
        .map_err(|e| CloudError::invalid_credentials(format!("unusable private key: {e}")))?;

    let claims = Claims {
        iss: key.client_email(),
        scope: READ_ONLY_SCOPE,
        aud: key.token_uri(),
        iat: now.timestamp(),
        exp: (now + Duration::minutes(ASSERTION_LIFETIME_MINUTES)).timestamp(),
    };

    jsonwebtoken::encode(&Header::new(Algorithm::RS256), &claims, &encoding_key)
        .map_err(|e| CloudError::invalid_credentials(format!("failed to sign assertion: {e}")))
}
