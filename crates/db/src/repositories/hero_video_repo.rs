//! Repository for the `hero_videos` table.

use memopyk_core::types::DbId;
use sqlx::PgPool;

use crate::models::hero_video::{CreateHeroVideo, HeroVideo, UpdateHeroVideo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title_en, title_fr, url_en, url_fr, order_index, is_active, created_at, updated_at";

/// Provides CRUD operations for hero videos.
pub struct HeroVideoRepo;

impl HeroVideoRepo {
    /// Insert a new hero video, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateHeroVideo) -> Result<HeroVideo, sqlx::Error> {
        let query = format!(
            "INSERT INTO hero_videos (title_en, title_fr, url_en, url_fr, order_index, is_active)
             VALUES ($1, $2, $3, $4, COALESCE($5, 0), COALESCE($6, TRUE))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HeroVideo>(&query)
            .bind(&input.title_en)
            .bind(&input.title_fr)
            .bind(&input.url_en)
            .bind(&input.url_fr)
            .bind(input.order_index)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// Find a hero video by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<HeroVideo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM hero_videos WHERE id = $1");
        sqlx::query_as::<_, HeroVideo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List active hero videos in display order (public endpoint).
    pub async fn list_active(pool: &PgPool) -> Result<Vec<HeroVideo>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM hero_videos WHERE is_active ORDER BY order_index ASC"
        );
        sqlx::query_as::<_, HeroVideo>(&query).fetch_all(pool).await
    }

    /// List all hero videos, including inactive ones (admin endpoint).
    pub async fn list_all(pool: &PgPool) -> Result<Vec<HeroVideo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM hero_videos ORDER BY order_index ASC");
        sqlx::query_as::<_, HeroVideo>(&query).fetch_all(pool).await
    }

    /// Update a hero video. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateHeroVideo,
    ) -> Result<Option<HeroVideo>, sqlx::Error> {
        let query = format!(
            "UPDATE hero_videos SET
                title_en = COALESCE($2, title_en),
                title_fr = COALESCE($3, title_fr),
                url_en = COALESCE($4, url_en),
                url_fr = COALESCE($5, url_fr),
                order_index = COALESCE($6, order_index),
                is_active = COALESCE($7, is_active),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HeroVideo>(&query)
            .bind(id)
            .bind(&input.title_en)
            .bind(&input.title_fr)
            .bind(&input.url_en)
            .bind(&input.url_fr)
            .bind(input.order_index)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a hero video by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM hero_videos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
