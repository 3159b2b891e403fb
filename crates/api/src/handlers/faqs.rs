//! Handlers for the `/faqs` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use memopyk_core::content::{validate_optional_text, validate_required_text};
use memopyk_core::error::CoreError;
use memopyk_core::types::DbId;
use memopyk_db::models::faq::{CreateFaq, Faq, UpdateFaq};
use memopyk_db::repositories::FaqRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/v1/faqs
///
/// Public list: active FAQs, grouped by section and ordered for display.
pub async fn list_public(State(state): State<AppState>) -> AppResult<Json<Vec<Faq>>> {
    let faqs = FaqRepo::list_active(&state.pool).await?;
    Ok(Json(faqs))
}

/// GET /api/v1/admin/faqs
///
/// Admin list: every FAQ, including inactive ones.
pub async fn list_admin(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<Vec<Faq>>> {
    let faqs = FaqRepo::list_all(&state.pool).await?;
    Ok(Json(faqs))
}

/// GET /api/v1/admin/faqs/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Faq>> {
    let faq = FaqRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Faq", id }))?;
    Ok(Json(faq))
}

/// POST /api/v1/admin/faqs
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateFaq>,
) -> AppResult<(StatusCode, Json<Faq>)> {
    validate_create(&input)?;
    let faq = FaqRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(faq)))
}

/// PUT /api/v1/admin/faqs/{id}
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateFaq>,
) -> AppResult<Json<Faq>> {
    validate_update(&input)?;
    let faq = FaqRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Faq", id }))?;
    Ok(Json(faq))
}

/// DELETE /api/v1/admin/faqs/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = FaqRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Faq", id }))
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate_create(input: &CreateFaq) -> Result<(), CoreError> {
    validate_required_text("section", &input.section)?;
    validate_required_text("section_name_en", &input.section_name_en)?;
    validate_required_text("section_name_fr", &input.section_name_fr)?;
    validate_required_text("question_en", &input.question_en)?;
    validate_required_text("question_fr", &input.question_fr)?;
    validate_required_text("answer_en", &input.answer_en)?;
    validate_required_text("answer_fr", &input.answer_fr)?;
    Ok(())
}

fn validate_update(input: &UpdateFaq) -> Result<(), CoreError> {
    validate_optional_text("section", input.section.as_deref())?;
    validate_optional_text("section_name_en", input.section_name_en.as_deref())?;
    validate_optional_text("section_name_fr", input.section_name_fr.as_deref())?;
    validate_optional_text("question_en", input.question_en.as_deref())?;
    validate_optional_text("question_fr", input.question_fr.as_deref())?;
    validate_optional_text("answer_en", input.answer_en.as_deref())?;
    validate_optional_text("answer_fr", input.answer_fr.as_deref())?;
    Ok(())
}
