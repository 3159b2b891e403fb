//! Public route definitions for the `/contacts` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::contacts;
use crate::state::AppState;

/// Routes mounted at `/contacts`.
///
/// ```text
/// POST / -> create (public contact form)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/contacts", post(contacts::create))
}
