//! FAQ entity model and DTOs.
//!
//! FAQs are grouped by a free-text `section` key; `section_order` sorts the
//! groups and `order_index` sorts questions within a group.

use memopyk_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `faqs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Faq {
    pub id: DbId,
    pub section: String,
    pub section_name_en: String,
    pub section_name_fr: String,
    pub section_order: i32,
    pub order_index: i32,
    pub question_en: String,
    pub question_fr: String,
    pub answer_en: String,
    pub answer_fr: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new FAQ.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFaq {
    pub section: String,
    pub section_name_en: String,
    pub section_name_fr: String,
    /// Defaults to 0 if omitted.
    pub section_order: Option<i32>,
    /// Defaults to 0 if omitted.
    pub order_index: Option<i32>,
    pub question_en: String,
    pub question_fr: String,
    pub answer_en: String,
    pub answer_fr: String,
    /// Defaults to true if omitted.
    pub is_active: Option<bool>,
}

/// DTO for updating an existing FAQ. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateFaq {
    pub section: Option<String>,
    pub section_name_en: Option<String>,
    pub section_name_fr: Option<String>,
    pub section_order: Option<i32>,
    pub order_index: Option<i32>,
    pub question_en: Option<String>,
    pub question_fr: Option<String>,
    pub answer_en: Option<String>,
    pub answer_fr: Option<String>,
    pub is_active: Option<bool>,
}
