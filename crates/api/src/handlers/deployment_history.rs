//! Handlers for the `/admin/deployment-history` resource.
//!
//! Audit trail of deployment runs. The deployment orchestration itself lives
//! outside this service; these endpoints only record and patch run entries.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use memopyk_core::content::{validate_deploy_kind, validate_deploy_status};
use memopyk_core::error::CoreError;
use memopyk_core::types::DbId;
use memopyk_db::models::deployment_history::{
    CreateDeploymentHistory, DeploymentHistory, UpdateDeploymentHistory,
};
use memopyk_db::repositories::DeploymentHistoryRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/v1/admin/deployment-history
///
/// Most recent run first.
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<Vec<DeploymentHistory>>> {
    let entries = DeploymentHistoryRepo::list_all(&state.pool).await?;
    Ok(Json(entries))
}

/// POST /api/v1/admin/deployment-history
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateDeploymentHistory>,
) -> AppResult<(StatusCode, Json<DeploymentHistory>)> {
    validate_deploy_kind(&input.kind)?;
    validate_deploy_status(&input.status)?;
    let entry = DeploymentHistoryRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// PATCH /api/v1/admin/deployment-history/{id}
///
/// Status / completion updates for a running entry.
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateDeploymentHistory>,
) -> AppResult<Json<DeploymentHistory>> {
    if let Some(status) = &input.status {
        validate_deploy_status(status)?;
    }
    let entry = DeploymentHistoryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "DeploymentHistory",
            id,
        }))?;
    Ok(Json(entry))
}
