//! Legal document entity model and DTOs.

use memopyk_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `legal_documents` table.
///
/// `doc_type` is one of the constants in `memopyk_core::content`
/// (legal_notice, privacy_policy, cookie_policy, terms_of_sale,
/// terms_of_use, faq).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LegalDocument {
    pub id: DbId,
    pub doc_type: String,
    pub title_en: String,
    pub title_fr: String,
    pub content_en: String,
    pub content_fr: String,
    pub is_active: bool,
    pub updated_at: Timestamp,
}

/// DTO for creating a new legal document.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLegalDocument {
    pub doc_type: String,
    pub title_en: String,
    pub title_fr: String,
    pub content_en: String,
    pub content_fr: String,
    /// Defaults to true if omitted.
    pub is_active: Option<bool>,
}

/// DTO for updating an existing legal document. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateLegalDocument {
    pub doc_type: Option<String>,
    pub title_en: Option<String>,
    pub title_fr: Option<String>,
    pub content_en: Option<String>,
    pub content_fr: Option<String>,
    pub is_active: Option<bool>,
}
