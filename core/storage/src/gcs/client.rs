//! Cloud Storage JSON API client.

use chrono::{DateTime, Utc};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{header, Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use medialift_common::{Error, Result};

use super::auth::TokenManager;

/// Cloud Storage JSON API base URL.
const STORAGE_API_BASE: &str = "https://storage.googleapis.com/storage/v1";
/// Cloud Storage upload API base URL.
const STORAGE_UPLOAD_BASE: &str = "https://storage.googleapis.com/upload/storage/v1";

/// Base of the public object URL pattern (`{base}/{bucket}/{key}`).
pub const PUBLIC_URL_BASE: &str = "https://storage.googleapis.com";

/// Encoding for object names in API paths: everything but unreserved
/// characters, so `/` inside a key becomes `%2F`.
const OBJECT_NAME: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

fn encode_object_name(name: &str) -> String {
    utf8_percent_encode(name, OBJECT_NAME).to_string()
}

/// Object resource returned by the Cloud Storage JSON API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectResource {
    /// Object key within the bucket.
    pub name: String,
    /// Bucket the object lives in.
    #[serde(default)]
    pub bucket: Option<String>,
    /// Object size in bytes; the API encodes it as a string.
    #[serde(default)]
    pub size: Option<String>,
    /// Stored content type.
    #[serde(default)]
    pub content_type: Option<String>,
    /// Stored content disposition.
    #[serde(default)]
    pub content_disposition: Option<String>,
    /// MD5 hash of the payload.
    #[serde(default)]
    pub md5_hash: Option<String>,
    /// HTTP etag.
    #[serde(default)]
    pub etag: Option<String>,
    /// Creation time.
    #[serde(default)]
    pub time_created: Option<DateTime<Utc>>,
    /// Last update time.
    #[serde(default)]
    pub updated: Option<DateTime<Utc>>,
}

impl ObjectResource {
    /// Get size as u64.
    pub fn size_bytes(&self) -> Option<u64> {
        self.size.as_ref().and_then(|s| s.parse().ok())
    }
}

/// Cloud Storage JSON API client.
pub struct GcsClient {
    http: Client,
    token_manager: Arc<TokenManager>,
    api_base: String,
    upload_base: String,
}

impl GcsClient {
    /// Create a new client against the production endpoints.
    pub fn new(token_manager: Arc<TokenManager>) -> Self {
        Self::with_base_urls(token_manager, STORAGE_API_BASE, STORAGE_UPLOAD_BASE)
    }

    /// Create a client against custom endpoints (emulators, test fixtures).
    pub fn with_base_urls(
        token_manager: Arc<TokenManager>,
        api_base: impl Into<String>,
        upload_base: impl Into<String>,
    ) -> Self {
        let http = Client::builder()
            .user_agent("MediaLift/0.1")
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            token_manager,
            api_base: api_base.into(),
            upload_base: upload_base.into(),
        }
    }

    /// Get authorization header.
    async fn auth_header(&self) -> Result<String> {
        let token = self.token_manager.get_access_token().await?;
        Ok(format!("Bearer {}", token))
    }

    /// Upload an object with public-read visibility.
    ///
    /// Stores `data` under `name` in `bucket`, with the given content type
    /// and a caller-supplied content disposition. One request, no retries.
    pub async fn insert_object(
        &self,
        bucket: &str,
        name: &str,
        data: Vec<u8>,
        content_type: &str,
        content_disposition: &str,
    ) -> Result<ObjectResource> {
        let url = format!("{}/b/{}/o", self.upload_base, bucket);
        let auth = self.auth_header().await?;

        let metadata = serde_json::json!({
            "name": name,
            "contentType": content_type,
            "contentDisposition": content_disposition,
        });

        let metadata_json = serde_json::to_string(&metadata)
            .map_err(|e| Error::Serialization(format!("Failed to serialize metadata: {}", e)))?;

        // Build multipart/related request body
        let boundary = "MediaLiftBoundary";
        let mut body = Vec::new();

        // Metadata part
        body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
        body.extend_from_slice(b"Content-Type: application/json; charset=UTF-8\r\n\r\n");
        body.extend_from_slice(metadata_json.as_bytes());
        body.extend_from_slice(b"\r\n");

        // Media part
        body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
        body.extend_from_slice(format!("Content-Type: {}\r\n\r\n", content_type).as_bytes());
        body.extend_from_slice(&data);
        body.extend_from_slice(b"\r\n");

        // End boundary
        body.extend_from_slice(format!("--{}--", boundary).as_bytes());

        let response = self
            .http
            .post(&url)
            .header(header::AUTHORIZATION, auth)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/related; boundary={}", boundary),
            )
            .query(&[
                ("uploadType", "multipart"),
                ("predefinedAcl", "publicRead"),
            ])
            .body(body)
            .send()
            .await
            .map_err(|e| Error::Network(format!("Failed to upload object: {}", e)))?;

        self.handle_response(response).await
    }

    /// Delete an object.
    ///
    /// # Errors
    /// - `Error::NotFound` if the object does not exist; callers decide
    ///   whether that is fatal
    pub async fn delete_object(&self, bucket: &str, name: &str) -> Result<()> {
        let url = format!(
            "{}/b/{}/o/{}",
            self.api_base,
            bucket,
            encode_object_name(name)
        );
        let auth = self.auth_header().await?;

        let response = self
            .http
            .delete(&url)
            .header(header::AUTHORIZATION, auth)
            .send()
            .await
            .map_err(|e| Error::Network(format!("Failed to delete object: {}", e)))?;

        let status = response.status();

        if status == StatusCode::NO_CONTENT || status.is_success() {
            Ok(())
        } else if status == StatusCode::NOT_FOUND {
            Err(Error::NotFound(format!("Object not found: {}", name)))
        } else if status == StatusCode::UNAUTHORIZED {
            Err(Error::Authentication(
                "Invalid or expired token".to_string(),
            ))
        } else if status == StatusCode::FORBIDDEN {
            Err(Error::PermissionDenied("Access denied".to_string()))
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(Error::Network(format!(
                "Delete failed: {} - {}",
                status, body
            )))
        }
    }

    /// Handle API response with error checking.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| Error::Network(format!("Failed to parse response: {}", e)))
        } else if status == StatusCode::NOT_FOUND {
            Err(Error::NotFound("Resource not found".to_string()))
        } else if status == StatusCode::UNAUTHORIZED {
            Err(Error::Authentication(
                "Invalid or expired token".to_string(),
            ))
        } else if status == StatusCode::FORBIDDEN {
            Err(Error::PermissionDenied("Access denied".to_string()))
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(Error::Network(format!("API error: {} - {}", status, body)))
        }
    }
}
