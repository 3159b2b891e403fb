//! Handlers for the `/admin/video-cache` resource.
//!
//! Admin management of the local video cache: inspect contents, force a
//! (re-)download, delete individual files.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use memopyk_media::{CacheInfo, CacheOutcome};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Request body for `POST /admin/video-cache`.
#[derive(Debug, Deserialize)]
pub struct CacheRequest {
    /// Source URL of the video to cache.
    pub url: String,
    /// Delete any existing file first, forcing a fresh download.
    #[serde(default)]
    pub force: bool,
}

/// GET /api/v1/admin/video-cache
///
/// Cache directory summary (file count, total size, filenames).
pub async fn info(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<CacheInfo>> {
    let info = state.video_cache.info().await?;
    Ok(Json(info))
}

/// POST /api/v1/admin/video-cache
///
/// The re-cache action: download a video into the cache. With `force`, any
/// existing file is deleted first so the object is fetched fresh.
pub async fn cache(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CacheRequest>,
) -> AppResult<(StatusCode, Json<CacheOutcome>)> {
    if input.force {
        let filename = memopyk_core::media_cache::cache_filename(&input.url);
        state.video_cache.remove(&filename).await?;
    }

    let outcome = state.video_cache.ensure_cached(&input.url).await?;
    let status = if outcome.already_cached {
        StatusCode::OK
    } else {
        StatusCode::CREATED
    };
    Ok((status, Json(outcome)))
}

/// DELETE /api/v1/admin/video-cache/{filename}
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(filename): Path<String>,
) -> AppResult<StatusCode> {
    let deleted = state.video_cache.remove(&filename).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("No cached video '{filename}'")))
    }
}
