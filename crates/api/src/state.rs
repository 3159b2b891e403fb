use std::sync::Arc;

use memopyk_media::VideoCache;
use memopyk_storage::MediaStorage;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: memopyk_db::DbPool,
    /// Server configuration (accessed by middleware and handlers).
    pub config: Arc<ServerConfig>,
    /// Object storage client for media uploads.
    pub media_storage: Arc<MediaStorage>,
    /// Local disk cache for remote video files.
    pub video_cache: Arc<VideoCache>,
}
