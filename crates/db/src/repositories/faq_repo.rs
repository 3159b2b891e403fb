//! Repository for the `faqs` table.

use memopyk_core::types::DbId;
use sqlx::PgPool;

use crate::models::faq::{CreateFaq, Faq, UpdateFaq};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, section, section_name_en, section_name_fr, section_order, \
     order_index, question_en, question_fr, answer_en, answer_fr, is_active, \
     created_at, updated_at";

/// Ordering shared by both list queries: groups first, then questions.
const ORDERING: &str = "ORDER BY section_order ASC, order_index ASC";

/// Provides CRUD operations for FAQs.
pub struct FaqRepo;

impl FaqRepo {
    /// Insert a new FAQ, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateFaq) -> Result<Faq, sqlx::Error> {
        let query = format!(
            "INSERT INTO faqs (section, section_name_en, section_name_fr, section_order,
                order_index, question_en, question_fr, answer_en, answer_fr, is_active)
             VALUES ($1, $2, $3, COALESCE($4, 0), COALESCE($5, 0), $6, $7, $8, $9,
                COALESCE($10, TRUE))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Faq>(&query)
            .bind(&input.section)
            .bind(&input.section_name_en)
            .bind(&input.section_name_fr)
            .bind(input.section_order)
            .bind(input.order_index)
            .bind(&input.question_en)
            .bind(&input.question_fr)
            .bind(&input.answer_en)
            .bind(&input.answer_fr)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// Find a FAQ by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Faq>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM faqs WHERE id = $1");
        sqlx::query_as::<_, Faq>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List active FAQs grouped and ordered for display (public endpoint).
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Faq>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM faqs WHERE is_active {ORDERING}");
        sqlx::query_as::<_, Faq>(&query).fetch_all(pool).await
    }

    /// List all FAQs, including inactive ones (admin endpoint).
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Faq>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM faqs {ORDERING}");
        sqlx::query_as::<_, Faq>(&query).fetch_all(pool).await
    }

    /// Update a FAQ. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFaq,
    ) -> Result<Option<Faq>, sqlx::Error> {
        let query = format!(
            "UPDATE faqs SET
                section = COALESCE($2, section),
                section_name_en = COALESCE($3, section_name_en),
                section_name_fr = COALESCE($4, section_name_fr),
                section_order = COALESCE($5, section_order),
                order_index = COALESCE($6, order_index),
                question_en = COALESCE($7, question_en),
                question_fr = COALESCE($8, question_fr),
                answer_en = COALESCE($9, answer_en),
                answer_fr = COALESCE($10, answer_fr),
                is_active = COALESCE($11, is_active),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Faq>(&query)
            .bind(id)
            .bind(&input.section)
            .bind(&input.section_name_en)
            .bind(&input.section_name_fr)
            .bind(input.section_order)
            .bind(input.order_index)
            .bind(&input.question_en)
            .bind(&input.question_fr)
            .bind(&input.answer_en)
            .bind(&input.answer_fr)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a FAQ by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM faqs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
