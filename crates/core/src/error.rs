use crate::types::DbId;

/// Domain-level error type shared across crates.
///
/// HTTP-specific mapping (status codes, JSON bodies) lives in the API crate;
/// everything below the handler layer reports errors in these terms.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// An entity lookup by ID found nothing.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Input failed domain validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The operation conflicts with existing state.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Missing or invalid credentials.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Authenticated but not allowed.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// An unexpected internal failure.
    #[error("Internal error: {0}")]
    Internal(String),
}
