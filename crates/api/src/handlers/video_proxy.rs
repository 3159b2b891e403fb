//! Handlers for the `/video-proxy` resource.
//!
//! Serves remote videos through the local disk cache with HTTP range
//! support so browsers can scrub. The URL form caches on miss (download
//! serialized per filename by the cache); the filename form only serves
//! what is already on disk.

use axum::body::Body;
use axum::extract::{Path, Query, State};
use axum::http::header::{self, HeaderMap};
use axum::http::StatusCode;
use axum::response::Response;
use serde::Deserialize;
use tokio::io::{AsyncReadExt, AsyncSeekExt};
use tokio_util::io::ReaderStream;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Cache-control for served video bytes: content is immutable per filename.
const VIDEO_CACHE_CONTROL: &str = "public, max-age=31536000";

#[derive(Debug, Deserialize)]
pub struct ProxyParams {
    /// Source URL of the video in object storage.
    pub url: String,
}

/// GET /api/v1/video-proxy?url=...
///
/// Ensures the video is cached locally, then streams it with range support.
pub async fn proxy_by_url(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(params): Query<ProxyParams>,
    headers: HeaderMap,
) -> AppResult<Response> {
    let outcome = state.video_cache.ensure_cached(&params.url).await?;
    serve_from_cache(&state, &outcome.filename, &headers).await
}

/// GET /api/v1/video-proxy/{filename}
///
/// Streams an already-cached file; 404 if the filename is not cached.
pub async fn serve_cached(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(filename): Path<String>,
    headers: HeaderMap,
) -> AppResult<Response> {
    serve_from_cache(&state, &filename, &headers).await
}

/// Stream a cached file, honoring an optional `Range` request header.
///
/// - No `Range`: 200 with the whole file.
/// - `bytes=S-E`: 206 with exactly E-S+1 bytes and a `Content-Range`.
///   An omitted end means the rest of the file.
/// - Start past EOF or past the end: 416 with `Content-Range: bytes */N`.
async fn serve_from_cache(
    state: &AppState,
    filename: &str,
    headers: &HeaderMap,
) -> AppResult<Response> {
    let path = state
        .video_cache
        .local_path(filename)
        .await
        .ok_or_else(|| AppError::NotFound(format!("No cached video '{filename}'")))?;

    let metadata = tokio::fs::metadata(&path)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;
    let file_size = metadata.len();
    let content_type = content_type_for_extension(filename);

    if let Some(range_value) = headers.get(header::RANGE) {
        let range_str = range_value
            .to_str()
            .map_err(|_| AppError::BadRequest("Invalid Range header".into()))?;

        if let Some((start, end)) = parse_range_header(range_str) {
            let end = end
                .map(|e| e.min(file_size.saturating_sub(1)))
                .unwrap_or_else(|| file_size.saturating_sub(1));

            if start >= file_size || start > end {
                return Ok(Response::builder()
                    .status(StatusCode::RANGE_NOT_SATISFIABLE)
                    .header(header::CONTENT_RANGE, format!("bytes */{file_size}"))
                    .body(Body::empty())
                    .unwrap());
            }

            let length = end - start + 1;

            let mut file = tokio::fs::File::open(&path)
                .await
                .map_err(|e| AppError::InternalError(e.to_string()))?;
            file.seek(std::io::SeekFrom::Start(start))
                .await
                .map_err(|e| AppError::InternalError(e.to_string()))?;

            let limited = file.take(length);
            let stream = ReaderStream::new(limited);

            return Ok(Response::builder()
                .status(StatusCode::PARTIAL_CONTENT)
                .header(header::CONTENT_TYPE, content_type)
                .header(header::CONTENT_LENGTH, length.to_string())
                .header(
                    header::CONTENT_RANGE,
                    format!("bytes {start}-{end}/{file_size}"),
                )
                .header(header::ACCEPT_RANGES, "bytes")
                .header(header::CACHE_CONTROL, VIDEO_CACHE_CONTROL)
                .body(Body::from_stream(stream))
                .unwrap());
        }
    }

    // No Range header — serve the full file.
    let file = tokio::fs::File::open(&path)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;
    let stream = ReaderStream::new(file);

    Ok(Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .header(header::CONTENT_LENGTH, file_size.to_string())
        .header(header::ACCEPT_RANGES, "bytes")
        .header(header::CACHE_CONTROL, VIDEO_CACHE_CONTROL)
        .body(Body::from_stream(stream))
        .unwrap())
}

/// Parse a `Range: bytes=START-END` header value.
/// Returns `(start, optional_end)`.
fn parse_range_header(range: &str) -> Option<(u64, Option<u64>)> {
    let range = range.strip_prefix("bytes=")?;
    let parts: Vec<&str> = range.splitn(2, '-').collect();
    if parts.len() != 2 {
        return None;
    }
    let start = parts[0].parse::<u64>().ok()?;
    let end = if parts[1].is_empty() {
        None
    } else {
        Some(parts[1].parse::<u64>().ok()?)
    };
    Some((start, end))
}

/// Guess a Content-Type from a file extension.
fn content_type_for_extension(path: &str) -> &'static str {
    let ext = path.rsplit('.').next().unwrap_or("").to_lowercase();
    match ext.as_str() {
        "mp4" | "m4v" => "video/mp4",
        "webm" => "video/webm",
        "mov" => "video/quicktime",
        "mkv" => "video/x-matroska",
        "avi" => "video/x-msvideo",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_range() {
        assert_eq!(parse_range_header("bytes=100-199"), Some((100, Some(199))));
    }

    #[test]
    fn parse_open_ended_range() {
        assert_eq!(parse_range_header("bytes=500-"), Some((500, None)));
    }

    #[test]
    fn parse_rejects_malformed() {
        assert_eq!(parse_range_header("bytes=abc-def"), None);
        assert_eq!(parse_range_header("items=0-10"), None);
        assert_eq!(parse_range_header("bytes=100"), None);
    }

    #[test]
    fn content_types_for_video_extensions() {
        assert_eq!(content_type_for_extension("clip.mp4"), "video/mp4");
        assert_eq!(content_type_for_extension("clip.WEBM"), "video/webm");
        assert_eq!(
            content_type_for_extension("noext"),
            "application/octet-stream"
        );
    }
}
