//! Media cache error types.

use thiserror::Error;

/// Result type for media cache operations.
pub type MediaResult<T> = Result<T, MediaError>;

/// Errors that can occur while caching or serving video files.
#[derive(Debug, Error)]
pub enum MediaError {
    /// The source URL is not cachable.
    #[error("Invalid video URL: {0}")]
    InvalidUrl(String),

    /// The remote server refused or failed the download.
    #[error("Download failed: {0}")]
    DownloadFailed(String),

    /// Local filesystem failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
