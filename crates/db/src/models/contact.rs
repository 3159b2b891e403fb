//! Contact request entity model and DTOs.
//!
//! Contacts are inbox rows from the public contact form; there is no
//! visibility flag, only a triage `status`.

use memopyk_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `contacts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Contact {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub package: Option<String>,
    pub message: Option<String>,
    pub preferred_contact: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new contact request (public form submission).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateContact {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub package: Option<String>,
    pub message: Option<String>,
    pub preferred_contact: Option<String>,
}

/// DTO for updating a contact (admin triage). All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateContact {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub package: Option<String>,
    pub message: Option<String>,
    pub preferred_contact: Option<String>,
    pub status: Option<String>,
}
