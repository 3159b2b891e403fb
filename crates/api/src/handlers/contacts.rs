//! Handlers for the `/contacts` resource.
//!
//! Creation is public (the site contact form); everything else is admin
//! inbox management.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use memopyk_core::content::{validate_email, validate_required_text};
use memopyk_core::error::CoreError;
use memopyk_core::types::DbId;
use memopyk_db::models::contact::{Contact, CreateContact, UpdateContact};
use memopyk_db::repositories::ContactRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /api/v1/contacts
///
/// Public contact form submission.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateContact>,
) -> AppResult<(StatusCode, Json<Contact>)> {
    validate_required_text("name", &input.name)?;
    validate_email(&input.email)?;
    let contact = ContactRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(contact)))
}

/// GET /api/v1/admin/contacts
///
/// Admin inbox, newest first.
pub async fn list_admin(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<Vec<Contact>>> {
    let contacts = ContactRepo::list_all(&state.pool).await?;
    Ok(Json(contacts))
}

/// GET /api/v1/admin/contacts/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Contact>> {
    let contact = ContactRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Contact",
            id,
        }))?;
    Ok(Json(contact))
}

/// PUT /api/v1/admin/contacts/{id}
///
/// Admin triage: status changes and corrections.
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateContact>,
) -> AppResult<Json<Contact>> {
    if let Some(email) = &input.email {
        validate_email(email)?;
    }
    let contact = ContactRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Contact",
            id,
        }))?;
    Ok(Json(contact))
}

/// DELETE /api/v1/admin/contacts/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ContactRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Contact",
            id,
        }))
    }
}
