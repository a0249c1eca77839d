//! Address entity (database row mapping).

use sqlx::FromRow;

/// Database row mapping for the addresses table.
#[derive(Debug, Clone, FromRow)]
pub struct AddressEntity {
    pub id: i64,
    pub contact_id: i64,
    pub street: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub country: String,
    pub postal_code: String,
}

impl From<AddressEntity> for domain::models::Address {
    fn from(entity: AddressEntity) -> Self {
        Self {
            id: entity.id,
            contact_id: entity.contact_id,
            street: entity.street,
            city: entity.city,
            province: entity.province,
            country: entity.country,
            postal_code: entity.postal_code,
        }
    }
}
