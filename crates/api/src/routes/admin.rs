//! Route definitions for the `/admin` tree.
//!
//! Every handler mounted here takes an [`crate::middleware::auth::AuthUser`]
//! extractor, so requests without a valid bearer token are rejected with 401
//! before any work happens.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::{
    contacts, deployment_history, faqs, gallery_items, hero_videos, legal_documents, uploads,
    video_cache,
};
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// GET    /hero-videos                    -> list_admin (includes inactive)
/// POST   /hero-videos                    -> create
/// GET    /hero-videos/{id}               -> get_by_id
/// PUT    /hero-videos/{id}               -> update
/// DELETE /hero-videos/{id}               -> delete
///
/// (same shape for /gallery-items, /faqs, /legal-documents)
///
/// GET    /contacts                       -> list_admin
/// GET    /contacts/{id}                  -> get_by_id
/// PUT    /contacts/{id}                  -> update
/// DELETE /contacts/{id}                  -> delete
///
/// GET    /deployment-history             -> list
/// POST   /deployment-history             -> create
/// PATCH  /deployment-history/{id}        -> update
///
/// POST   /uploads                        -> upload (multipart, 50 MiB cap)
///
/// GET    /video-cache                    -> info
/// POST   /video-cache                    -> cache (re-cache action)
/// DELETE /video-cache/{filename}         -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/hero-videos",
            get(hero_videos::list_admin).post(hero_videos::create),
        )
        .route(
            "/hero-videos/{id}",
            get(hero_videos::get_by_id)
                .put(hero_videos::update)
                .delete(hero_videos::delete),
        )
        .route(
            "/gallery-items",
            get(gallery_items::list_admin).post(gallery_items::create),
        )
        .route(
            "/gallery-items/{id}",
            get(gallery_items::get_by_id)
                .put(gallery_items::update)
                .delete(gallery_items::delete),
        )
        .route("/faqs", get(faqs::list_admin).post(faqs::create))
        .route(
            "/faqs/{id}",
            get(faqs::get_by_id).put(faqs::update).delete(faqs::delete),
        )
        .route(
            "/legal-documents",
            get(legal_documents::list_admin).post(legal_documents::create),
        )
        .route(
            "/legal-documents/{id}",
            get(legal_documents::get_by_id)
                .put(legal_documents::update)
                .delete(legal_documents::delete),
        )
        .route("/contacts", get(contacts::list_admin))
        .route(
            "/contacts/{id}",
            get(contacts::get_by_id)
                .put(contacts::update)
                .delete(contacts::delete),
        )
        .route(
            "/deployment-history",
            get(deployment_history::list).post(deployment_history::create),
        )
        .route(
            "/deployment-history/{id}",
            patch(deployment_history::update),
        )
        .route(
            "/uploads",
            post(uploads::upload).layer(DefaultBodyLimit::max(uploads::MAX_UPLOAD_BYTES)),
        )
        .route(
            "/video-cache",
            get(video_cache::info).post(video_cache::cache),
        )
        .route("/video-cache/{filename}", axum::routing::delete(video_cache::delete))
}
