//! Shared SHA-256 hex digest utility.
//!
//! Used by the media cache for filename derivation and by the API crate for
//! refresh-token hashing, to avoid duplicating the same computation.

use sha2::{Digest, Sha256};

/// Compute a SHA-256 hex digest of the given bytes.
pub fn sha256_hex(data: &[u8]) -> String {
    let hash = Sha256::digest(data);
    format!("{hash:x}")
}
