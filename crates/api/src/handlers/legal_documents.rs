//! Handlers for the `/legal-documents` resource.
//!
//! Public pages fetch documents by ID or by type slug; the admin panel
//! manages the full set.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use memopyk_core::content::{
    validate_doc_type, validate_optional_text, validate_required_text,
};
use memopyk_core::error::CoreError;
use memopyk_core::types::DbId;
use memopyk_db::models::legal_document::{
    CreateLegalDocument, LegalDocument, UpdateLegalDocument,
};
use memopyk_db::repositories::LegalDocumentRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/v1/legal-documents
///
/// Public list: active documents only, ordered by type.
pub async fn list_public(State(state): State<AppState>) -> AppResult<Json<Vec<LegalDocument>>> {
    let documents = LegalDocumentRepo::list_active(&state.pool).await?;
    Ok(Json(documents))
}

/// GET /api/v1/legal-documents/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<LegalDocument>> {
    let document = LegalDocumentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "LegalDocument",
            id,
        }))?;
    Ok(Json(document))
}

/// GET /api/v1/legal-documents/type/{doc_type}
///
/// Fetch the active document of a given type (e.g. `privacy_policy`).
pub async fn get_by_type(
    State(state): State<AppState>,
    Path(doc_type): Path<String>,
) -> AppResult<Json<LegalDocument>> {
    validate_doc_type(&doc_type)?;
    let document = LegalDocumentRepo::find_active_by_type(&state.pool, &doc_type)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No active document of type '{doc_type}'")))?;
    Ok(Json(document))
}

/// GET /api/v1/admin/legal-documents
///
/// Admin list: every document, including inactive ones.
pub async fn list_admin(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<Vec<LegalDocument>>> {
    let documents = LegalDocumentRepo::list_all(&state.pool).await?;
    Ok(Json(documents))
}

/// POST /api/v1/admin/legal-documents
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateLegalDocument>,
) -> AppResult<(StatusCode, Json<LegalDocument>)> {
    validate_create(&input)?;
    let document = LegalDocumentRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(document)))
}

/// PUT /api/v1/admin/legal-documents/{id}
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateLegalDocument>,
) -> AppResult<Json<LegalDocument>> {
    validate_update(&input)?;
    let document = LegalDocumentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "LegalDocument",
            id,
        }))?;
    Ok(Json(document))
}

/// DELETE /api/v1/admin/legal-documents/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = LegalDocumentRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "LegalDocument",
            id,
        }))
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate_create(input: &CreateLegalDocument) -> Result<(), CoreError> {
    validate_doc_type(&input.doc_type)?;
    validate_required_text("title_en", &input.title_en)?;
    validate_required_text("title_fr", &input.title_fr)?;
    validate_required_text("content_en", &input.content_en)?;
    validate_required_text("content_fr", &input.content_fr)?;
    Ok(())
}

fn validate_update(input: &UpdateLegalDocument) -> Result<(), CoreError> {
    if let Some(doc_type) = &input.doc_type {
        validate_doc_type(doc_type)?;
    }
    validate_optional_text("title_en", input.title_en.as_deref())?;
    validate_optional_text("title_fr", input.title_fr.as_deref())?;
    validate_optional_text("content_en", input.content_en.as_deref())?;
    validate_optional_text("content_fr", input.content_fr.as_deref())?;
    Ok(())
}
