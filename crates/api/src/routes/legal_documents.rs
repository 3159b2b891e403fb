//! Public route definitions for the `/legal-documents` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::legal_documents;
use crate::state::AppState;

/// Routes mounted at `/legal-documents`.
///
/// ```text
/// GET /                  -> list_public (active only)
/// GET /{id}              -> get_by_id
/// GET /type/{doc_type}   -> get_by_type (active document for a type slug)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/legal-documents", get(legal_documents::list_public))
        .route("/legal-documents/{id}", get(legal_documents::get_by_id))
        .route(
            "/legal-documents/type/{doc_type}",
            get(legal_documents::get_by_type),
        )
}
