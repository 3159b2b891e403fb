//! Handlers for the `/hero-videos` resource.
//!
//! The public endpoint lists active videos for the homepage carousel; the
//! admin endpoints manage the full set, including hidden entries.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use memopyk_core::content::{validate_optional_text, validate_required_text};
use memopyk_core::error::CoreError;
use memopyk_core::media_cache::validate_video_url;
use memopyk_core::types::DbId;
use memopyk_db::models::hero_video::{CreateHeroVideo, HeroVideo, UpdateHeroVideo};
use memopyk_db::repositories::HeroVideoRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/v1/hero-videos
///
/// Public list: active videos only, in display order.
pub async fn list_public(State(state): State<AppState>) -> AppResult<Json<Vec<HeroVideo>>> {
    let videos = HeroVideoRepo::list_active(&state.pool).await?;
    Ok(Json(videos))
}

/// GET /api/v1/admin/hero-videos
///
/// Admin list: every video, including inactive ones.
pub async fn list_admin(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<Vec<HeroVideo>>> {
    let videos = HeroVideoRepo::list_all(&state.pool).await?;
    Ok(Json(videos))
}

/// GET /api/v1/admin/hero-videos/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<HeroVideo>> {
    let video = HeroVideoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "HeroVideo",
            id,
        }))?;
    Ok(Json(video))
}

/// POST /api/v1/admin/hero-videos
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateHeroVideo>,
) -> AppResult<(StatusCode, Json<HeroVideo>)> {
    validate_create(&input)?;
    let video = HeroVideoRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(video)))
}

/// PUT /api/v1/admin/hero-videos/{id}
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateHeroVideo>,
) -> AppResult<Json<HeroVideo>> {
    validate_update(&input)?;
    let video = HeroVideoRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "HeroVideo",
            id,
        }))?;
    Ok(Json(video))
}

/// DELETE /api/v1/admin/hero-videos/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = HeroVideoRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "HeroVideo",
            id,
        }))
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate_create(input: &CreateHeroVideo) -> Result<(), CoreError> {
    validate_required_text("title_en", &input.title_en)?;
    validate_required_text("title_fr", &input.title_fr)?;
    validate_video_url(&input.url_en)?;
    validate_video_url(&input.url_fr)?;
    Ok(())
}

fn validate_update(input: &UpdateHeroVideo) -> Result<(), CoreError> {
    validate_optional_text("title_en", input.title_en.as_deref())?;
    validate_optional_text("title_fr", input.title_fr.as_deref())?;
    if let Some(url) = &input.url_en {
        validate_video_url(url)?;
    }
    if let Some(url) = &input.url_fr {
        validate_video_url(url)?;
    }
    Ok(())
}
