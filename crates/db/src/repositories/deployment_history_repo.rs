//! Repository for the `deployment_history` table.

use memopyk_core::types::DbId;
use sqlx::PgPool;

use crate::models::deployment_history::{
    CreateDeploymentHistory, DeploymentHistory, UpdateDeploymentHistory,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, kind, status, started_at, ended_at, duration_secs, logs, host, domain, created_at";

/// Provides CRUD operations for deployment history entries.
pub struct DeploymentHistoryRepo;

impl DeploymentHistoryRepo {
    /// Insert a new deployment history entry, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateDeploymentHistory,
    ) -> Result<DeploymentHistory, sqlx::Error> {
        let query = format!(
            "INSERT INTO deployment_history
                (kind, status, started_at, ended_at, duration_secs, logs, host, domain)
             VALUES ($1, $2, COALESCE($3, NOW()), $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DeploymentHistory>(&query)
            .bind(&input.kind)
            .bind(&input.status)
            .bind(input.started_at)
            .bind(input.ended_at)
            .bind(input.duration_secs)
            .bind(&input.logs)
            .bind(&input.host)
            .bind(&input.domain)
            .fetch_one(pool)
            .await
    }

    /// Find an entry by its ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<DeploymentHistory>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM deployment_history WHERE id = $1");
        sqlx::query_as::<_, DeploymentHistory>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all entries, most recent run first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<DeploymentHistory>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM deployment_history ORDER BY started_at DESC");
        sqlx::query_as::<_, DeploymentHistory>(&query)
            .fetch_all(pool)
            .await
    }

    /// Patch an entry (status / completion fields). Only non-`None` fields apply.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateDeploymentHistory,
    ) -> Result<Option<DeploymentHistory>, sqlx::Error> {
        let query = format!(
            "UPDATE deployment_history SET
                status = COALESCE($2, status),
                ended_at = COALESCE($3, ended_at),
                duration_secs = COALESCE($4, duration_secs),
                logs = COALESCE($5, logs)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DeploymentHistory>(&query)
            .bind(id)
            .bind(&input.status)
            .bind(input.ended_at)
            .bind(input.duration_secs)
            .bind(&input.logs)
            .fetch_optional(pool)
            .await
    }
}
