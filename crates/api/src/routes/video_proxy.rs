//! Route definitions for the `/video-proxy` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::video_proxy;
use crate::state::AppState;

/// Routes mounted at `/video-proxy`.
///
/// ```text
/// GET /?url=...      -> proxy_by_url (cache-through, auth + Range)
/// GET /{filename}    -> serve_cached (cached-only, auth + Range)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/video-proxy", get(video_proxy::proxy_by_url))
        .route("/video-proxy/{filename}", get(video_proxy::serve_cached))
}
