//! Repository for the `gallery_items` table.

use memopyk_core::types::DbId;
use sqlx::PgPool;

use crate::models::gallery_item::{CreateGalleryItem, GalleryItem, UpdateGalleryItem};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title_en, title_fr, description_en, description_fr, video_url, \
     image_url_en, image_url_fr, price_en, price_fr, alt_text_en, alt_text_fr, \
     additional_info_en, additional_info_fr, order_index, is_active, created_at, updated_at";

/// Provides CRUD operations for gallery items.
pub struct GalleryItemRepo;

impl GalleryItemRepo {
    /// Insert a new gallery item, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateGalleryItem,
    ) -> Result<GalleryItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO gallery_items (
                title_en, title_fr, description_en, description_fr, video_url,
                image_url_en, image_url_fr, price_en, price_fr, alt_text_en, alt_text_fr,
                additional_info_en, additional_info_fr, order_index, is_active)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13,
                COALESCE($14, 0), COALESCE($15, TRUE))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GalleryItem>(&query)
            .bind(&input.title_en)
            .bind(&input.title_fr)
            .bind(&input.description_en)
            .bind(&input.description_fr)
            .bind(&input.video_url)
            .bind(&input.image_url_en)
            .bind(&input.image_url_fr)
            .bind(&input.price_en)
            .bind(&input.price_fr)
            .bind(&input.alt_text_en)
            .bind(&input.alt_text_fr)
            .bind(&input.additional_info_en)
            .bind(&input.additional_info_fr)
            .bind(input.order_index)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// Find a gallery item by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<GalleryItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM gallery_items WHERE id = $1");
        sqlx::query_as::<_, GalleryItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List active gallery items in display order (public endpoint).
    pub async fn list_active(pool: &PgPool) -> Result<Vec<GalleryItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM gallery_items WHERE is_active ORDER BY order_index ASC"
        );
        sqlx::query_as::<_, GalleryItem>(&query)
            .fetch_all(pool)
            .await
    }

    /// List all gallery items, including inactive ones (admin endpoint).
    pub async fn list_all(pool: &PgPool) -> Result<Vec<GalleryItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM gallery_items ORDER BY order_index ASC");
        sqlx::query_as::<_, GalleryItem>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update a gallery item. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateGalleryItem,
    ) -> Result<Option<GalleryItem>, sqlx::Error> {
        let query = format!(
            "UPDATE gallery_items SET
                title_en = COALESCE($2, title_en),
                title_fr = COALESCE($3, title_fr),
                description_en = COALESCE($4, description_en),
                description_fr = COALESCE($5, description_fr),
                video_url = COALESCE($6, video_url),
                image_url_en = COALESCE($7, image_url_en),
                image_url_fr = COALESCE($8, image_url_fr),
                price_en = COALESCE($9, price_en),
                price_fr = COALESCE($10, price_fr),
                alt_text_en = COALESCE($11, alt_text_en),
                alt_text_fr = COALESCE($12, alt_text_fr),
                additional_info_en = COALESCE($13, additional_info_en),
                additional_info_fr = COALESCE($14, additional_info_fr),
                order_index = COALESCE($15, order_index),
                is_active = COALESCE($16, is_active),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GalleryItem>(&query)
            .bind(id)
            .bind(&input.title_en)
            .bind(&input.title_fr)
            .bind(&input.description_en)
            .bind(&input.description_fr)
            .bind(&input.video_url)
            .bind(&input.image_url_en)
            .bind(&input.image_url_fr)
            .bind(&input.price_en)
            .bind(&input.price_fr)
            .bind(&input.alt_text_en)
            .bind(&input.alt_text_fr)
            .bind(&input.additional_info_en)
            .bind(&input.additional_info_fr)
            .bind(input.order_index)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a gallery item by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM gallery_items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
