//! Google Cloud Storage HTTP client.

use std::path::Path;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use super::auth::{JWT_BEARER_GRANT, sign_assertion};
use super::credentials::ServiceAccountKey;
use super::dto::{
    ApiErrorResponse, BucketListResponse, OAuthErrorResponse, TokenRequest, TokenResponse,
};
use crate::domain::entities::Bucket;
use crate::domain::errors::CloudError;
use crate::domain::ports::CloudStoragePort;

const USER_AGENT: &str = concat!("drishti/", env!("CARGO_PKG_VERSION"));

/// Storage JSON API client authenticated with a service account key.
///
/// No request timeout is configured: a stalled listing stays pending until the
/// service or the network gives up.
pub struct GcsStorageClient {
    client: Client,
    api_base: String,
}

impl GcsStorageClient {
    /// Creates client with custom base URL.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, CloudError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| CloudError::unexpected(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_base: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    async fn fetch_access_token(&self, key: &ServiceAccountKey) -> Result<String, CloudError> {
        let assertion = sign_assertion(key, Utc::now())?;

        debug!(client_email = %key.client_email(), "Exchanging service account assertion");

        let response = self
            .client
            .post(key.token_uri())
            .form(&TokenRequest {
                grant_type: JWT_BEARER_GRANT,
                assertion: &assertion,
            })
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<OAuthErrorResponse>().await {
                Ok(error) => error.message(),
                Err(_) => format!("HTTP {status}"),
            };
            warn!(%status, message = %message, "Token exchange rejected");
            return Err(if status.is_server_error() {
                CloudError::service(status.as_u16(), message)
            } else {
                CloudError::rejected(message)
            });
        }

        let token: TokenResponse = response.json().await.map_err(|e| {
            CloudError::unexpected(format!("failed to parse token response: {e}"))
        })?;

        debug!(expires_in = ?token.expires_in, "Access token issued");
        Ok(token.access_token)
    }

    async fn handle_error_response(status: StatusCode, response: reqwest::Response) -> CloudError {
        let error_message = match response.json::<ApiErrorResponse>().await {
            Ok(error) => error.error.message,
            Err(_) => format!("HTTP {status}"),
        };

        match status {
            StatusCode::UNAUTHORIZED => CloudError::rejected(error_message),
            StatusCode::SERVICE_UNAVAILABLE | StatusCode::GATEWAY_TIMEOUT => {
                CloudError::network(format!("storage service unavailable: {error_message}"))
            }
            _ => CloudError::service(status.as_u16(), error_message),
        }
    }
}

fn map_send_error(e: reqwest::Error) -> CloudError {
    warn!(error = %e, "Failed to reach Google Cloud");
    if e.is_timeout() {
        CloudError::network("request timed out")
    } else if e.is_connect() {
        CloudError::network(format!("failed to connect: {e}"))
    } else {
        CloudError::network(e.to_string())
    }
}

#[async_trait]
impl CloudStoragePort for GcsStorageClient {
    async fn list_buckets(&self, credentials_path: &Path) -> Result<Vec<Bucket>, CloudError> {
        let key = ServiceAccountKey::load(credentials_path).await?;
        let access_token = self.fetch_access_token(&key).await?;

        let url = format!("{}/storage/v1/b", self.api_base);
        let mut buckets = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut request = self
                .client
                .get(&url)
                .bearer_auth(&access_token)
                .query(&[("project", key.project_id())]);
            if let Some(token) = &page_token {
                request = request.query(&[("pageToken", token.as_str())]);
            }

            let response = request.send().await.map_err(map_send_error)?;
            let status = response.status();
            if !status.is_success() {
                return Err(Self::handle_error_response(status, response).await);
            }

            let page: BucketListResponse = response.json().await.map_err(|e| {
                warn!(error = %e, "Failed to parse bucket listing");
                CloudError::unexpected(format!("failed to parse bucket listing: {e}"))
            })?;

            debug!(count = page.items.len(), "Received bucket page");
            buckets.extend(page.items.into_iter().map(|b| Bucket::new(b.name)));

            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }

        debug!(project = %key.project_id(), count = buckets.len(), "Bucket listing complete");
        Ok(buckets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::gcs::credentials::tests::key_json;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::task::JoinHandle;

    const TEST_PEM: &str = include_str!("testdata/test_service_account.pem");
    const TOKEN_OK: &str = r#"{"access_token": "tok-1", "expires_in": 3599, "token_type": "Bearer"}"#;

    /// Offline client; the address is never contacted.
    fn offline_client() -> GcsStorageClient {
        GcsStorageClient::with_base_url("http://127.0.0.1:9").unwrap()
    }

    fn local_client(base: &str) -> GcsStorageClient {
        GcsStorageClient {
            client: Client::builder().no_proxy().build().unwrap(),
            api_base: base.to_string(),
        }
    }

    fn write_key(dir: &TempDir, token_uri: &str) -> PathBuf {
        let mut key: serde_json::Value =
            serde_json::from_str(&key_json("service_account", TEST_PEM)).unwrap();
        key["token_uri"] = serde_json::Value::from(token_uri);
        let path = dir.path().join("crowdmanagement.json");
        std::fs::write(&path, key.to_string()).unwrap();
        path
    }

    async fn read_request(socket: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0_u8; 4096];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);

            let text = String::from_utf8_lossy(&buf).into_owned();
            if let Some(end) = text.find("\r\n\r\n") {
                let length = text[..end]
                    .lines()
                    .filter_map(|line| line.split_once(':'))
                    .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
                    .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if buf.len() >= end + 4 + length {
                    return text;
                }
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Answers one connection per scripted reply and hands back the raw requests.
    async fn serve(replies: Vec<(u16, &'static str)>) -> (String, JoinHandle<Vec<String>>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let mut requests = Vec::new();
            for (status, body) in replies {
                let (mut socket, _) = listener.accept().await.unwrap();
                requests.push(read_request(&mut socket).await);
                let response = format!(
                    "HTTP/1.1 {status} Scripted\r\nContent-Type: application/json\r\n\
                     Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                socket.write_all(response.as_bytes()).await.unwrap();
                socket.shutdown().await.unwrap();
            }
            requests
        });

        (base, handle)
    }

    #[test]
    fn test_client_creation() {
        let client = GcsStorageClient::with_base_url("http://localhost:4443/");
        assert!(client.is_ok());
        assert_eq!(client.unwrap().api_base, "http://localhost:4443");
    }

    #[tokio::test]
    async fn test_missing_key_file_fails_before_network() {
        let dir = tempfile::tempdir().unwrap();

        let result = offline_client()
            .list_buckets(&dir.path().join("crowdmanagement.json"))
            .await;

        assert!(matches!(result, Err(CloudError::CredentialsNotFound { .. })));
    }

    #[tokio::test]
    async fn test_malformed_key_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("key.json");
        std::fs::write(&path, "{ not json").unwrap();

        let result = offline_client().list_buckets(&path).await;

        assert!(matches!(result, Err(CloudError::InvalidCredentials { .. })));
    }

    #[tokio::test]
    async fn test_bad_private_key_fails_before_network() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("key.json");
        std::fs::write(&path, key_json("service_account", "-----BEGIN NOTHING-----")).unwrap();

        let result = offline_client().list_buckets(&path).await;

        let Err(err) = result else {
            panic!("expected failure");
        };
        assert!(err.is_credentials_error());
        assert!(err.to_string().contains("unusable private key"));
    }

    #[tokio::test]
    async fn test_listing_follows_page_tokens() {
        let (base, server) = serve(vec![
            (200, TOKEN_OK),
            (200, r#"{"items": [{"name": "a"}, {"name": "b"}], "nextPageToken": "P2"}"#),
            (200, r#"{"items": [{"name": "c"}]}"#),
        ])
        .await;
        let dir = TempDir::new().unwrap();
        let path = write_key(&dir, &format!("{base}/token"));

        let buckets = local_client(&base).list_buckets(&path).await.unwrap();
        let requests = server.await.unwrap();

        let names: Vec<&str> = buckets.iter().map(Bucket::name).collect();
        assert_eq!(names, vec!["a", "b", "c"]);

        assert!(requests[0].starts_with("POST /token "));
        assert!(requests[0].contains("grant_type=urn%3Aietf%3Aparams%3Aoauth%3Agrant-type%3Ajwt-bearer"));
        assert!(requests[0].contains("assertion="));

        assert!(requests[1].starts_with("GET /storage/v1/b?project=drishti-venue "));
        assert!(
            requests[1]
                .to_ascii_lowercase()
                .contains("authorization: bearer tok-1")
        );
        assert!(requests[2].starts_with("GET /storage/v1/b?project=drishti-venue&pageToken=P2 "));
    }

    #[tokio::test]
    async fn test_failed_page_discards_earlier_pages() {
        let (base, server) = serve(vec![
            (200, TOKEN_OK),
            (200, r#"{"items": [{"name": "a"}], "nextPageToken": "P2"}"#),
            (403, r#"{"error": {"code": 403, "message": "no list perm"}}"#),
        ])
        .await;
        let dir = TempDir::new().unwrap();
        let path = write_key(&dir, &format!("{base}/token"));

        let result = local_client(&base).list_buckets(&path).await;
        let requests = server.await.unwrap();

        assert_eq!(result, Err(CloudError::service(403, "no list perm")));
        assert_eq!(requests.len(), 3);
    }

    #[tokio::test]
    async fn test_rejected_token_exchange() {
        let (base, server) = serve(vec![(
            401,
            r#"{"error": "invalid_grant", "error_description": "Invalid JWT Signature."}"#,
        )])
        .await;
        let dir = TempDir::new().unwrap();
        let path = write_key(&dir, &format!("{base}/token"));

        let result = local_client(&base).list_buckets(&path).await;
        let requests = server.await.unwrap();

        assert_eq!(
            result,
            Err(CloudError::rejected("invalid_grant: Invalid JWT Signature."))
        );
        assert_eq!(requests.len(), 1);
    }

    #[tokio::test]
    async fn test_unavailable_service_is_network_error() {
        let (base, server) = serve(vec![(200, TOKEN_OK), (503, "upstream down")]).await;
        let dir = TempDir::new().unwrap();
        let path = write_key(&dir, &format!("{base}/token"));

        let result = local_client(&base).list_buckets(&path).await;
        server.await.unwrap();

        assert_eq!(
            result,
            Err(CloudError::network(
                "storage service unavailable: HTTP 503 Service Unavailable"
            ))
        );
    }
}
