//! Public route definitions for the `/hero-videos` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::hero_videos;
use crate::state::AppState;

/// Routes mounted at `/hero-videos`.
///
/// ```text
/// GET / -> list_public (active only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/hero-videos", get(hero_videos::list_public))
}
