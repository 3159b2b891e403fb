//! Handlers for the `/gallery-items` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use memopyk_core::content::{validate_optional_text, validate_required_text};
use memopyk_core::error::CoreError;
use memopyk_core::types::DbId;
use memopyk_db::models::gallery_item::{CreateGalleryItem, GalleryItem, UpdateGalleryItem};
use memopyk_db::repositories::GalleryItemRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/v1/gallery-items
///
/// Public list: active items only, in display order.
pub async fn list_public(State(state): State<AppState>) -> AppResult<Json<Vec<GalleryItem>>> {
    let items = GalleryItemRepo::list_active(&state.pool).await?;
    Ok(Json(items))
}

/// GET /api/v1/admin/gallery-items
///
/// Admin list: every item, including inactive ones.
pub async fn list_admin(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<Vec<GalleryItem>>> {
    let items = GalleryItemRepo::list_all(&state.pool).await?;
    Ok(Json(items))
}

/// GET /api/v1/admin/gallery-items/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<GalleryItem>> {
    let item = GalleryItemRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "GalleryItem",
            id,
        }))?;
    Ok(Json(item))
}

/// POST /api/v1/admin/gallery-items
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateGalleryItem>,
) -> AppResult<(StatusCode, Json<GalleryItem>)> {
    validate_required_text("title_en", &input.title_en)?;
    validate_required_text("title_fr", &input.title_fr)?;
    let item = GalleryItemRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// PUT /api/v1/admin/gallery-items/{id}
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateGalleryItem>,
) -> AppResult<Json<GalleryItem>> {
    validate_optional_text("title_en", input.title_en.as_deref())?;
    validate_optional_text("title_fr", input.title_fr.as_deref())?;
    let item = GalleryItemRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "GalleryItem",
            id,
        }))?;
    Ok(Json(item))
}

/// DELETE /api/v1/admin/gallery-items/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = GalleryItemRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "GalleryItem",
            id,
        }))
    }
}
