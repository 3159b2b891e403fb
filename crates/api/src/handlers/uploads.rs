//! Handler for the `/admin/uploads` resource.
//!
//! Accepts a multipart media file from the admin panel and pushes it to
//! object storage, returning the public URL to embed in content records.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use memopyk_core::types::DbId;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Maximum accepted upload size (50 MiB), enforced via the route body limit.
pub const MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

/// Response for a completed upload.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub url: String,
    pub key: String,
    pub original_name: String,
    pub size: usize,
    pub content_type: String,
    /// The uploading admin, for the audit log.
    pub uploaded_by: DbId,
}

/// POST /api/v1/admin/uploads
///
/// Multipart body with a single `file` field. Only video/* and image/*
/// content types are accepted.
pub async fn upload(
    State(state): State<AppState>,
    user: AuthUser,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<UploadResponse>)> {
    let mut file: Option<(String, String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        if name == "file" {
            let filename = field.file_name().unwrap_or("upload.bin").to_string();
            let content_type = field
                .content_type()
                .unwrap_or("application/octet-stream")
                .to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            file = Some((filename, content_type, data.to_vec()));
        }
        // Ignore unknown fields.
    }

    let Some((filename, content_type, data)) = file else {
        return Err(AppError::BadRequest("No file provided".into()));
    };

    if !content_type.starts_with("video/") && !content_type.starts_with("image/") {
        return Err(AppError::BadRequest(format!(
            "Only video and image files are allowed, got '{content_type}'"
        )));
    }

    let size = data.len();
    let uploaded = state
        .media_storage
        .upload(data, &filename, &content_type)
        .await?;

    tracing::info!(
        key = %uploaded.key,
        size,
        uploaded_by = %user.user_id,
        "Media upload stored"
    );

    Ok((
        StatusCode::CREATED,
        Json(UploadResponse {
            url: uploaded.url,
            key: uploaded.key,
            original_name: filename,
            size,
            content_type,
            uploaded_by: user.user_id,
        }),
    ))
}
