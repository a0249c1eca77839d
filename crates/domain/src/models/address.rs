//! Address domain model.

use serde::{Deserialize, Serialize};

/// Represents an address owned by a contact.
///
/// Access is scoped transitively: an address is reachable only through a
/// contact that belongs to the requesting user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Address {
    pub id: i64,
    pub contact_id: i64,
    pub street: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub country: String,
    pub postal_code: String,
}
