//! Cache filename derivation and URL validation for the video cache.
//!
//! A cached file is identified by a deterministic filename derived from its
//! source URL, so repeated requests for the same URL always resolve to the
//! same on-disk file.

use crate::error::CoreError;
use crate::hashing::sha256_hex;

/// Length of the URL-hash component embedded in cache filenames.
const URL_HASH_LEN: usize = 8;

/// Extension used when the source URL has no recognizable filename.
const FALLBACK_EXTENSION: &str = "mp4";

/// Video file extensions counted by cache directory listings.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "avi", "webm"];

/// Validate that a video source URL is non-empty and starts with `http`.
pub fn validate_video_url(url: &str) -> Result<(), CoreError> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(
            "Video URL must not be empty".to_string(),
        ));
    }
    if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
        return Err(CoreError::Validation(format!(
            "Video URL must start with http:// or https://, got: '{trimmed}'"
        )));
    }
    Ok(())
}

/// Derive the deterministic cache filename for a source URL.
///
/// The original filename (last URL path segment, query and fragment stripped)
/// keeps its stem and extension with a short URL hash inserted for
/// uniqueness: `clip.mp4` from `https://.../clip.mp4` becomes
/// `clip_3f2a9c01.mp4`. URLs without a dotted filename fall back to
/// `video_<hash>.mp4`. Two distinct URLs ending in the same segment therefore
/// never collide, while one URL always maps to one filename.
pub fn cache_filename(url: &str) -> String {
    let hash = &sha256_hex(url.as_bytes())[..URL_HASH_LEN];

    let segment = last_path_segment(url);
    match segment.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => {
            format!("{stem}_{hash}.{ext}")
        }
        _ => format!("video_{hash}.{FALLBACK_EXTENSION}"),
    }
}

/// Extract the last path segment of a URL, stripping query and fragment.
fn last_path_segment(url: &str) -> &str {
    let clean = url.split('?').next().unwrap_or(url);
    let clean = clean.split('#').next().unwrap_or(clean);

    let path = if let Some(rest) = clean
        .strip_prefix("https://")
        .or_else(|| clean.strip_prefix("http://"))
    {
        rest.find('/').map(|i| &rest[i..]).unwrap_or("")
    } else {
        clean
    };

    path.rsplit('/').find(|s| !s.is_empty()).unwrap_or("")
}

/// Whether a filename carries one of the recognized video extensions.
pub fn is_video_filename(filename: &str) -> bool {
    filename
        .rsplit('.')
        .next()
        .map(|ext| VIDEO_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
