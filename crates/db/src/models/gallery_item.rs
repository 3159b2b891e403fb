//! Gallery item entity model and DTOs.
//!
//! A gallery item is a portfolio entry pairing a thumbnail or video with
//! bilingual title, description, and price.

use memopyk_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `gallery_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GalleryItem {
    pub id: DbId,
    pub title_en: String,
    pub title_fr: String,
    pub description_en: Option<String>,
    pub description_fr: Option<String>,
    pub video_url: Option<String>,
    pub image_url_en: Option<String>,
    pub image_url_fr: Option<String>,
    pub price_en: Option<String>,
    pub price_fr: Option<String>,
    pub alt_text_en: Option<String>,
    pub alt_text_fr: Option<String>,
    pub additional_info_en: Option<String>,
    pub additional_info_fr: Option<String>,
    pub order_index: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new gallery item.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGalleryItem {
    pub title_en: String,
    pub title_fr: String,
    pub description_en: Option<String>,
    pub description_fr: Option<String>,
    pub video_url: Option<String>,
    pub image_url_en: Option<String>,
    pub image_url_fr: Option<String>,
    pub price_en: Option<String>,
    pub price_fr: Option<String>,
    pub alt_text_en: Option<String>,
    pub alt_text_fr: Option<String>,
    pub additional_info_en: Option<String>,
    pub additional_info_fr: Option<String>,
    /// Defaults to 0 if omitted.
    pub order_index: Option<i32>,
    /// Defaults to true if omitted.
    pub is_active: Option<bool>,
}

/// DTO for updating an existing gallery item. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateGalleryItem {
    pub title_en: Option<String>,
    pub title_fr: Option<String>,
    pub description_en: Option<String>,
    pub description_fr: Option<String>,
    pub video_url: Option<String>,
    pub image_url_en: Option<String>,
    pub image_url_fr: Option<String>,
    pub price_en: Option<String>,
    pub price_fr: Option<String>,
    pub alt_text_en: Option<String>,
    pub alt_text_fr: Option<String>,
    pub additional_info_en: Option<String>,
    pub additional_info_fr: Option<String>,
    pub order_index: Option<i32>,
    pub is_active: Option<bool>,
}
