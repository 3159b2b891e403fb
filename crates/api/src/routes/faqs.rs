//! Public route definitions for the `/faqs` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::faqs;
use crate::state::AppState;

/// Routes mounted at `/faqs`.
///
/// ```text
/// GET / -> list_public (active only, grouped by section)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/faqs", get(faqs::list_public))
}
