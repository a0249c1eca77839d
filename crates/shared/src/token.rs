//! Opaque session-token generation.
//!
//! A session token is a random UUID stored on the user row. Issuing a new
//! token overwrites the previous one, so a user has at most one live
//! session at a time. Tokens never expire; they are valid until replaced by
//! the next login or cleared by logout.

use uuid::Uuid;

/// Generates a fresh opaque session token.
pub fn generate() -> String {
    Uuid::new_v4().to_string()
}
