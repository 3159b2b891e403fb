//! Deployment history entity model and DTOs.
//!
//! Records of past deployment runs. The deployment orchestration itself is an
//! external collaborator; only its audit trail lives here.

use memopyk_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `deployment_history` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DeploymentHistory {
    pub id: DbId,
    pub kind: String,
    pub status: String,
    pub started_at: Timestamp,
    pub ended_at: Option<Timestamp>,
    pub duration_secs: Option<i32>,
    pub logs: Option<String>,
    pub host: Option<String>,
    pub domain: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a new deployment history entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDeploymentHistory {
    pub kind: String,
    pub status: String,
    /// Defaults to NOW() if omitted.
    pub started_at: Option<Timestamp>,
    pub ended_at: Option<Timestamp>,
    pub duration_secs: Option<i32>,
    pub logs: Option<String>,
    pub host: Option<String>,
    pub domain: Option<String>,
}

/// DTO for patching a deployment history entry (status/ending updates).
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateDeploymentHistory {
    pub status: Option<String>,
    pub ended_at: Option<Timestamp>,
    pub duration_secs: Option<i32>,
    pub logs: Option<String>,
}
