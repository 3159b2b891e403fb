//! Content entity constants and validation helpers.
//!
//! Required-field and enum-style validation for the bilingual content
//! entities. Handlers call these before touching the database so a rejected
//! create persists nothing.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Legal document types
// ---------------------------------------------------------------------------

/// Site legal notice ("mentions légales").
pub const DOC_TYPE_LEGAL_NOTICE: &str = "legal_notice";
/// Privacy policy.
pub const DOC_TYPE_PRIVACY_POLICY: &str = "privacy_policy";
/// Cookie policy.
pub const DOC_TYPE_COOKIE_POLICY: &str = "cookie_policy";
/// General terms of sale.
pub const DOC_TYPE_TERMS_OF_SALE: &str = "terms_of_sale";
/// General terms of use.
pub const DOC_TYPE_TERMS_OF_USE: &str = "terms_of_use";
/// Long-form FAQ page.
pub const DOC_TYPE_FAQ: &str = "faq";

/// All valid legal document types.
pub const VALID_DOC_TYPES: &[&str] = &[
    DOC_TYPE_LEGAL_NOTICE,
    DOC_TYPE_PRIVACY_POLICY,
    DOC_TYPE_COOKIE_POLICY,
    DOC_TYPE_TERMS_OF_SALE,
    DOC_TYPE_TERMS_OF_USE,
    DOC_TYPE_FAQ,
];

// ---------------------------------------------------------------------------
// Contact statuses
// ---------------------------------------------------------------------------

/// Default status for a freshly submitted contact request.
pub const CONTACT_STATUS_NEW: &str = "new";

// ---------------------------------------------------------------------------
// Deployment history kinds and statuses
// ---------------------------------------------------------------------------

/// Full application deployment.
pub const DEPLOY_KIND_DEPLOYMENT: &str = "deployment";
/// Reverse-proxy / certificate setup.
pub const DEPLOY_KIND_NGINX_SETUP: &str = "nginx_setup";

/// All valid deployment history kinds.
pub const VALID_DEPLOY_KINDS: &[&str] = &[DEPLOY_KIND_DEPLOYMENT, DEPLOY_KIND_NGINX_SETUP];

/// Deployment finished successfully.
pub const DEPLOY_STATUS_SUCCESS: &str = "success";
/// Deployment failed.
pub const DEPLOY_STATUS_FAILED: &str = "failed";
/// Deployment is still running.
pub const DEPLOY_STATUS_IN_PROGRESS: &str = "in_progress";

/// All valid deployment history statuses.
pub const VALID_DEPLOY_STATUSES: &[&str] = &[
    DEPLOY_STATUS_SUCCESS,
    DEPLOY_STATUS_FAILED,
    DEPLOY_STATUS_IN_PROGRESS,
];

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate that a required text field is present and not blank.
pub fn validate_required_text(field: &'static str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

/// Validate an optional text field: `None` is fine, `Some` must not be blank.
pub fn validate_optional_text(
    field: &'static str,
    value: Option<&str>,
) -> Result<(), CoreError> {
    match value {
        Some(v) => validate_required_text(field, v),
        None => Ok(()),
    }
}

/// Validate that a legal document type is one of the known types.
pub fn validate_doc_type(doc_type: &str) -> Result<(), CoreError> {
    if VALID_DOC_TYPES.contains(&doc_type) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Unknown document type: '{doc_type}'. Valid types: {}",
            VALID_DOC_TYPES.join(", ")
        )))
    }
}

/// Validate that a deployment kind is one of the known kinds.
pub fn validate_deploy_kind(kind: &str) -> Result<(), CoreError> {
    if VALID_DEPLOY_KINDS.contains(&kind) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Unknown deployment kind: '{kind}'. Valid kinds: {}",
            VALID_DEPLOY_KINDS.join(", ")
        )))
    }
}

/// Validate that a deployment status is one of the known statuses.
pub fn validate_deploy_status(status: &str) -> Result<(), CoreError> {
    if VALID_DEPLOY_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Unknown deployment status: '{status}'. Valid statuses: {}",
            VALID_DEPLOY_STATUSES.join(", ")
        )))
    }
}

/// Validate that an email address has a plausible `local@domain` shape.
///
/// Not RFC-complete on purpose; the contact form only needs to reject
/// obviously broken input.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    let trimmed = email.trim();
    let valid = match trimmed.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        }
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "'{trimmed}' is not a valid email address"
        )))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- validate_required_text ----------------------------------------------

    #[test]
    fn required_text_accepts_non_empty() {
        assert!(validate_required_text("title_en", "Our films").is_ok());
    }

    #[test]
    fn required_text_rejects_empty_and_blank() {
        assert!(validate_required_text("title_en", "").is_err());
        assert!(validate_required_text("title_en", "   ").is_err());
    }

    // -- validate_optional_text ----------------------------------------------

    #[test]
    fn optional_text_accepts_none() {
        assert!(validate_optional_text("description_en", None).is_ok());
    }

    #[test]
    fn optional_text_rejects_blank_some() {
        assert!(validate_optional_text("description_en", Some(" ")).is_err());
        assert!(validate_optional_text("description_en", Some("ok")).is_ok());
    }

    // -- validate_doc_type ---------------------------------------------------

    #[test]
    fn known_doc_types_accepted() {
        for t in VALID_DOC_TYPES {
            assert!(validate_doc_type(t).is_ok());
        }
    }

    #[test]
    fn unknown_doc_type_rejected() {
        assert!(validate_doc_type("imprint").is_err());
        assert!(validate_doc_type("").is_err());
    }

    // -- validate_deploy_kind / validate_deploy_status -----------------------

    #[test]
    fn deploy_kinds_and_statuses() {
        assert!(validate_deploy_kind("deployment").is_ok());
        assert!(validate_deploy_kind("rollback").is_err());
        assert!(validate_deploy_status("in_progress").is_ok());
        assert!(validate_deploy_status("pending").is_err());
    }

    // -- validate_email ------------------------------------------------------

    #[test]
    fn plausible_emails_accepted() {
        assert!(validate_email("claire@example.com").is_ok());
        assert!(validate_email("  claire@example.com  ").is_ok());
    }

    #[test]
    fn broken_emails_rejected() {
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("claire@nodot").is_err());
        assert!(validate_email("claire@.com").is_err());
    }
}
