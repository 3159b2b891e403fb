//! S3-compatible storage client implementation.
//!
//! The bucket is fronted by a public CDN/base URL; uploads return the public
//! URL the site embeds directly in content records.

use aws_config::BehaviorVersion;
use aws_credential_types::Credentials;
use aws_sdk_s3::config::{Builder, Region};
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{StorageError, StorageResult};

/// Cache-control applied to uploaded media objects.
const UPLOAD_CACHE_CONTROL: &str = "public, max-age=3600";

/// Configuration for the storage client.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// S3 API endpoint URL.
    pub endpoint_url: String,
    /// Access key ID.
    pub access_key_id: String,
    /// Secret access key.
    pub secret_access_key: String,
    /// Bucket name holding site media.
    pub bucket_name: String,
    /// Region ("auto" for R2-style endpoints).
    pub region: String,
    /// Public base URL under which bucket objects are reachable.
    pub public_base_url: String,
}

impl StorageConfig {
    /// Create config from environment variables.
    ///
    /// | Env Var                     | Required | Default          |
    /// |-----------------------------|----------|------------------|
    /// | `STORAGE_ENDPOINT_URL`      | **yes**  | --               |
    /// | `STORAGE_ACCESS_KEY_ID`     | **yes**  | --               |
    /// | `STORAGE_SECRET_ACCESS_KEY` | **yes**  | --               |
    /// | `STORAGE_BUCKET_NAME`       | no       | `memopyk-media`  |
    /// | `STORAGE_REGION`            | no       | `auto`           |
    /// | `STORAGE_PUBLIC_BASE_URL`   | **yes**  | --               |
    pub fn from_env() -> StorageResult<Self> {
        Ok(Self {
            endpoint_url: std::env::var("STORAGE_ENDPOINT_URL")
                .map_err(|_| StorageError::config_error("STORAGE_ENDPOINT_URL not set"))?,
            access_key_id: std::env::var("STORAGE_ACCESS_KEY_ID")
                .map_err(|_| StorageError::config_error("STORAGE_ACCESS_KEY_ID not set"))?,
            secret_access_key: std::env::var("STORAGE_SECRET_ACCESS_KEY")
                .map_err(|_| StorageError::config_error("STORAGE_SECRET_ACCESS_KEY not set"))?,
            bucket_name: std::env::var("STORAGE_BUCKET_NAME")
                .unwrap_or_else(|_| "memopyk-media".to_string()),
            region: std::env::var("STORAGE_REGION").unwrap_or_else(|_| "auto".to_string()),
            public_base_url: std::env::var("STORAGE_PUBLIC_BASE_URL")
                .map_err(|_| StorageError::config_error("STORAGE_PUBLIC_BASE_URL not set"))?,
        })
    }
}

/// Result of a successful upload.
#[derive(Debug, Clone, Serialize)]
pub struct UploadedObject {
    /// Public URL embeddable in content records.
    pub url: String,
    /// Object key inside the bucket.
    pub key: String,
}

/// Object storage client for site media (bucket uploads and deletes).
#[derive(Clone)]
pub struct MediaStorage {
    client: Client,
    bucket: String,
    public_base_url: String,
}

impl MediaStorage {
    /// Create a new storage client from configuration.
    pub fn new(config: StorageConfig) -> Self {
        let credentials = Credentials::new(
            &config.access_key_id,
            &config.secret_access_key,
            None,
            None,
            "memopyk",
        );

        let sdk_config = Builder::new()
            .behavior_version(BehaviorVersion::latest())
            .endpoint_url(&config.endpoint_url)
            .region(Region::new(config.region))
            .credentials_provider(credentials)
            .force_path_style(true)
            .build();

        Self {
            client: Client::from_conf(sdk_config),
            bucket: config.bucket_name,
            public_base_url: config.public_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create from environment variables.
    pub fn from_env() -> StorageResult<Self> {
        Ok(Self::new(StorageConfig::from_env()?))
    }

    /// Upload media bytes under a timestamped, sanitized key.
    ///
    /// Returns the public URL and the object key.
    pub async fn upload(
        &self,
        data: Vec<u8>,
        original_filename: &str,
        content_type: &str,
    ) -> StorageResult<UploadedObject> {
        let key = object_key(original_filename)?;
        debug!(%key, size = data.len(), "Uploading media object");

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .body(ByteStream::from(data))
            .content_type(content_type)
            .cache_control(UPLOAD_CACHE_CONTROL)
            .send()
            .await
            .map_err(|e| StorageError::upload_failed(e.to_string()))?;

        let url = format!("{}/{key}", self.public_base_url);
        info!(%key, %url, "Media object uploaded");

        Ok(UploadedObject { url, key })
    }

    /// Delete an object by key. Returns `true` on success.
    ///
    /// Best-effort, mirroring the delete semantics of the admin panel: a
    /// failed delete is reported, not retried.
    pub async fn delete(&self, key: &str) -> StorageResult<bool> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| StorageError::delete_failed(e.to_string()))?;

        info!(%key, "Media object deleted");
        Ok(true)
    }
}

/// Derive a unique object key from an uploaded filename.
///
/// The filename is sanitized to `[A-Za-z0-9._-]` and prefixed with a
/// millisecond timestamp so repeated uploads of the same file never collide.
fn object_key(original_filename: &str) -> StorageResult<String> {
    let sanitized: String = original_filename
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if sanitized.trim_matches('_').is_empty() {
        return Err(StorageError::InvalidKey(format!(
            "Filename '{original_filename}' has no usable characters"
        )));
    }

    Ok(format!(
        "{}_{sanitized}",
        chrono::Utc::now().timestamp_millis()
    ))
}
