//! Download-through disk cache for remote video objects.
//!
//! Files are keyed by a deterministic filename derived from the source URL
//! (see [`memopyk_core::media_cache`]). A file is downloaded once on first
//! request and then served from disk forever; there is no eviction and no
//! expiry. Re-downloading happens only through the admin re-cache action
//! (delete + ensure).
//!
//! Concurrent requests for the same uncached URL are serialized through a
//! per-filename async mutex, so at most one download runs per URL; late
//! arrivals re-check the disk after acquiring the lock and take the hit path.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use futures::StreamExt;
use serde::Serialize;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use memopyk_core::media_cache::{cache_filename, is_video_filename, validate_video_url};

use crate::error::{MediaError, MediaResult};

/// Outcome of an [`VideoCache::ensure_cached`] call.
#[derive(Debug, Clone, Serialize)]
pub struct CacheOutcome {
    /// The deterministic cache filename for the URL.
    pub filename: String,
    /// Whether the file was already on disk (no download happened).
    pub already_cached: bool,
    /// Bytes written by this call (0 on a cache hit).
    pub bytes_written: u64,
}

/// Summary of the cache directory contents.
#[derive(Debug, Clone, Serialize)]
pub struct CacheInfo {
    pub total_files: usize,
    pub total_size: u64,
    pub files: Vec<String>,
}

/// Local disk cache for remote video files.
pub struct VideoCache {
    cache_dir: PathBuf,
    http: reqwest::Client,
    /// Per-filename download locks. Entries live for the process lifetime;
    /// the map is bounded by the number of distinct videos the site serves.
    download_locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl VideoCache {
    /// Create a cache rooted at `cache_dir`, creating the directory if needed.
    pub async fn new(cache_dir: impl Into<PathBuf>) -> MediaResult<Self> {
        let cache_dir = cache_dir.into();
        if !cache_dir.exists() {
            fs::create_dir_all(&cache_dir).await?;
            info!(dir = %cache_dir.display(), "Created video cache directory");
        }
        Ok(Self {
            cache_dir,
            http: reqwest::Client::new(),
            download_locks: Mutex::new(HashMap::new()),
        })
    }

    /// The directory this cache stores files in.
    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Ensure the video at `url` is cached locally, downloading it if absent.
    ///
    /// Idempotent: a URL whose file already exists returns immediately
    /// without touching the network. A failed download leaves no partial
    /// file; the caller may simply re-invoke.
    pub async fn ensure_cached(&self, url: &str) -> MediaResult<CacheOutcome> {
        validate_video_url(url).map_err(|e| MediaError::InvalidUrl(e.to_string()))?;

        let filename = cache_filename(url);
        let path = self.cache_dir.join(&filename);

        // Fast path: already on disk.
        if fs::try_exists(&path).await? {
            debug!(%filename, "Cache hit");
            return Ok(CacheOutcome {
                filename,
                already_cached: true,
                bytes_written: 0,
            });
        }

        // Serialize downloads per filename. Whoever gets the lock first
        // downloads; everyone else finds the file on the re-check.
        let lock = {
            let mut locks = self.download_locks.lock().await;
            Arc::clone(locks.entry(filename.clone()).or_default())
        };
        let _guard = lock.lock().await;

        if fs::try_exists(&path).await? {
            debug!(%filename, "Cache hit after waiting for in-flight download");
            return Ok(CacheOutcome {
                filename,
                already_cached: true,
                bytes_written: 0,
            });
        }

        match self.download_to(url, &path).await {
            Ok(bytes_written) => {
                info!(%filename, bytes_written, "Video cached");
                Ok(CacheOutcome {
                    filename,
                    already_cached: false,
                    bytes_written,
                })
            }
            Err(e) => {
                warn!(%filename, error = %e, "Video download failed");
                Err(e)
            }
        }
    }

    /// Stream the response body for `url` into `path`.
    ///
    /// Any failure removes the partial file before returning.
    async fn download_to(&self, url: &str, path: &Path) -> MediaResult<u64> {
        info!(%url, "Downloading video");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| MediaError::DownloadFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(MediaError::DownloadFailed(format!(
                "HTTP {} from {url}",
                response.status()
            )));
        }

        if let Some(len) = response.content_length() {
            debug!(content_length = len, "Download size known");
        }

        let mut file = fs::File::create(path).await?;
        let mut stream = response.bytes_stream();
        let mut bytes_written: u64 = 0;

        while let Some(chunk) = stream.next().await {
            let chunk = match chunk {
                Ok(c) => c,
                Err(e) => {
                    self.cleanup_partial(path).await;
                    return Err(MediaError::DownloadFailed(e.to_string()));
                }
            };
            if let Err(e) = file.write_all(&chunk).await {
                self.cleanup_partial(path).await;
                return Err(MediaError::Io(e));
            }
            bytes_written += chunk.len() as u64;
        }

        if let Err(e) = file.flush().await {
            self.cleanup_partial(path).await;
            return Err(MediaError::Io(e));
        }

        Ok(bytes_written)
    }

    /// Best-effort removal of a partially written file.
    async fn cleanup_partial(&self, path: &Path) {
        if let Err(e) = fs::remove_file(path).await {
            warn!(path = %path.display(), error = %e, "Failed to remove partial file");
        }
    }

    /// Resolve a cached filename to its on-disk path, if present.
    ///
    /// Filenames containing path separators or parent references never
    /// resolve; cache filenames cannot contain them.
    pub async fn local_path(&self, filename: &str) -> Option<PathBuf> {
        if filename.is_empty()
            || filename.contains('/')
            || filename.contains('\\')
            || filename.contains("..")
        {
            return None;
        }
        let path = self.cache_dir.join(filename);
        match fs::try_exists(&path).await {
            Ok(true) => Some(path),
            _ => None,
        }
    }

    /// Delete a cached file. Returns `true` if something was deleted.
    pub async fn remove(&self, filename: &str) -> MediaResult<bool> {
        let Some(path) = self.local_path(filename).await else {
            return Ok(false);
        };
        fs::remove_file(&path).await?;
        info!(%filename, "Deleted cached video");
        Ok(true)
    }

    /// Summarize the cache directory: video file count, total size, names.
    pub async fn info(&self) -> MediaResult<CacheInfo> {
        let mut files = Vec::new();
        let mut total_size: u64 = 0;

        let mut entries = fs::read_dir(&self.cache_dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let name = entry.file_name().to_string_lossy().to_string();
            if !is_video_filename(&name) {
                continue;
            }
            if let Ok(meta) = entry.metadata().await {
                total_size += meta.len();
            }
            files.push(name);
        }

        files.sort();
        Ok(CacheInfo {
            total_files: files.len(),
            total_size,
            files,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn new_creates_cache_directory() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested").join("cache");
        let cache = VideoCache::new(&target).await.unwrap();
        assert!(cache.cache_dir().is_dir());
    }

    #[tokio::test]
    async fn local_path_misses_for_unknown_file() {
        let dir = tempfile::tempdir().unwrap();
        let cache = VideoCache::new(dir.path()).await.unwrap();
        assert!(cache.local_path("missing.mp4").await.is_none());
    }

    #[tokio::test]
    async fn local_path_rejects_traversal() {
        let dir = tempfile::tempdir().unwrap();
        let cache = VideoCache::new(dir.path()).await.unwrap();
        tokio::fs::write(dir.path().join("clip.mp4"), b"data")
            .await
            .unwrap();

        assert!(cache.local_path("clip.mp4").await.is_some());
        assert!(cache.local_path("../clip.mp4").await.is_none());
        assert!(cache.local_path("sub/clip.mp4").await.is_none());
        assert!(cache.local_path("").await.is_none());
    }

    #[tokio::test]
    async fn remove_deletes_and_reports() {
        let dir = tempfile::tempdir().unwrap();
        let cache = VideoCache::new(dir.path()).await.unwrap();
        tokio::fs::write(dir.path().join("clip.mp4"), b"data")
            .await
            .unwrap();

        assert!(cache.remove("clip.mp4").await.unwrap());
        assert!(!cache.remove("clip.mp4").await.unwrap());
    }

    #[tokio::test]
    async fn info_counts_video_files_only() {
        let dir = tempfile::tempdir().unwrap();
        let cache = VideoCache::new(dir.path()).await.unwrap();
        tokio::fs::write(dir.path().join("a.mp4"), vec![0u8; 100])
            .await
            .unwrap();
        tokio::fs::write(dir.path().join("b.webm"), vec![0u8; 50])
            .await
            .unwrap();
        tokio::fs::write(dir.path().join("notes.txt"), b"x").await.unwrap();

        let info = cache.info().await.unwrap();
        assert_eq!(info.total_files, 2);
        assert_eq!(info.total_size, 150);
        assert_eq!(info.files, vec!["a.mp4".to_string(), "b.webm".to_string()]);
    }

    #[tokio::test]
    async fn ensure_cached_rejects_bad_urls() {
        let dir = tempfile::tempdir().unwrap();
        let cache = VideoCache::new(dir.path()).await.unwrap();
        assert!(matches!(
            cache.ensure_cached("ftp://example.com/clip.mp4").await,
            Err(MediaError::InvalidUrl(_))
        ));
    }
}
