pub mod admin;
pub mod auth;
pub mod contacts;
pub mod faqs;
pub mod gallery_items;
pub mod health;
pub mod hero_videos;
pub mod legal_documents;
pub mod video_proxy;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                          login (public)
/// /auth/refresh                        refresh (public)
/// /auth/logout                         logout (requires auth)
///
/// /hero-videos                         public active-only list
/// /gallery-items                       public active-only list
/// /faqs                                public active-only list
/// /legal-documents                     public active-only list
/// /legal-documents/{id}                public fetch
/// /legal-documents/type/{doc_type}     public fetch by type slug
/// /contacts                            public contact form (POST)
///
/// /video-proxy                         cache-through streaming (auth + Range)
/// /video-proxy/{filename}              cached-only streaming (auth + Range)
///
/// /admin/hero-videos[/{id}]            full CRUD (auth)
/// /admin/gallery-items[/{id}]          full CRUD (auth)
/// /admin/faqs[/{id}]                   full CRUD (auth)
/// /admin/legal-documents[/{id}]        full CRUD (auth)
/// /admin/contacts[/{id}]               inbox management (auth)
/// /admin/deployment-history[/{id}]     list, create, patch (auth)
/// /admin/uploads                       multipart media upload (auth)
/// /admin/video-cache[/{filename}]      cache info, re-cache, delete (auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .merge(hero_videos::router())
        .merge(gallery_items::router())
        .merge(faqs::router())
        .merge(legal_documents::router())
        .merge(contacts::router())
        .merge(video_proxy::router())
        .nest("/admin", admin::router())
}
