//! Hero video entity model and DTOs.
//!
//! A hero video is the looping background clip on the homepage banner, with
//! one source URL per language.

use memopyk_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `hero_videos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct HeroVideo {
    pub id: DbId,
    pub title_en: String,
    pub title_fr: String,
    pub url_en: String,
    pub url_fr: String,
    pub order_index: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new hero video.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateHeroVideo {
    pub title_en: String,
    pub title_fr: String,
    pub url_en: String,
    pub url_fr: String,
    /// Defaults to 0 if omitted.
    pub order_index: Option<i32>,
    /// Defaults to true if omitted.
    pub is_active: Option<bool>,
}

/// DTO for updating an existing hero video. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateHeroVideo {
    pub title_en: Option<String>,
    pub title_fr: Option<String>,
    pub url_en: Option<String>,
    pub url_fr: Option<String>,
    pub order_index: Option<i32>,
    pub is_active: Option<bool>,
}
