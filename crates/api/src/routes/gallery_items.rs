//! Public route definitions for the `/gallery-items` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::gallery_items;
use crate::state::AppState;

/// Routes mounted at `/gallery-items`.
///
/// ```text
/// GET / -> list_public (active only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/gallery-items", get(gallery_items::list_public))
}
