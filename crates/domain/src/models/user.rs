//! User account domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents a user account.
///
/// The username is the primary identity; the token field holds the single
/// live session token, or `None` when the user is logged out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub name: String,
    #[serde(skip_serializing)] // Never serialize the password digest
    pub password: String,
    #[serde(skip_serializing)] // Session tokens only leave through login responses
    pub token: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
