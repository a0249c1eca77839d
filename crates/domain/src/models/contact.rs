//! Contact domain model and search query.

use serde::{Deserialize, Serialize};

/// Represents a contact owned by exactly one user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub id: i64,
    /// Owning user's username. Every read and write is scoped by this.
    pub username: String,
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Optional filters and paging parameters for contact search.
///
/// An absent filter places no constraint on the result set. The name filter
/// matches either the first or the last name; all matching is
/// case-insensitive substring containment.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactSearchQuery {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub page: Option<i64>,
    pub size: Option<i64>,
}
