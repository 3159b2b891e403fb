//! Repository for the `legal_documents` table.

use memopyk_core::types::DbId;
use sqlx::PgPool;

use crate::models::legal_document::{CreateLegalDocument, LegalDocument, UpdateLegalDocument};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, doc_type, title_en, title_fr, content_en, content_fr, is_active, updated_at";

/// Provides CRUD operations for legal documents.
pub struct LegalDocumentRepo;

impl LegalDocumentRepo {
    /// Insert a new legal document, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateLegalDocument,
    ) -> Result<LegalDocument, sqlx::Error> {
        let query = format!(
            "INSERT INTO legal_documents (doc_type, title_en, title_fr, content_en, content_fr, is_active)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, TRUE))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LegalDocument>(&query)
            .bind(&input.doc_type)
            .bind(&input.title_en)
            .bind(&input.title_fr)
            .bind(&input.content_en)
            .bind(&input.content_fr)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// Find a legal document by its ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<LegalDocument>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM legal_documents WHERE id = $1");
        sqlx::query_as::<_, LegalDocument>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the active document of a given type (public endpoint).
    ///
    /// Newest wins if several active documents share a type.
    pub async fn find_active_by_type(
        pool: &PgPool,
        doc_type: &str,
    ) -> Result<Option<LegalDocument>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM legal_documents
             WHERE doc_type = $1 AND is_active
             ORDER BY updated_at DESC
             LIMIT 1"
        );
        sqlx::query_as::<_, LegalDocument>(&query)
            .bind(doc_type)
            .fetch_optional(pool)
            .await
    }

    /// List active legal documents ordered by type (public endpoint).
    pub async fn list_active(pool: &PgPool) -> Result<Vec<LegalDocument>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM legal_documents WHERE is_active ORDER BY doc_type ASC"
        );
        sqlx::query_as::<_, LegalDocument>(&query)
            .fetch_all(pool)
            .await
    }

    /// List all legal documents, including inactive ones (admin endpoint).
    pub async fn list_all(pool: &PgPool) -> Result<Vec<LegalDocument>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM legal_documents ORDER BY doc_type ASC");
        sqlx::query_as::<_, LegalDocument>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update a legal document. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateLegalDocument,
    ) -> Result<Option<LegalDocument>, sqlx::Error> {
        let query = format!(
            "UPDATE legal_documents SET
                doc_type = COALESCE($2, doc_type),
                title_en = COALESCE($3, title_en),
                title_fr = COALESCE($4, title_fr),
                content_en = COALESCE($5, content_en),
                content_fr = COALESCE($6, content_fr),
                is_active = COALESCE($7, is_active),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LegalDocument>(&query)
            .bind(id)
            .bind(&input.doc_type)
            .bind(&input.title_en)
            .bind(&input.title_fr)
            .bind(&input.content_en)
            .bind(&input.content_fr)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a legal document by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM legal_documents WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
