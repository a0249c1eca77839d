//! Address repository for database operations.
//!
//! Rows are keyed by `(contact_id, id)`; callers confirm the contact's
//! ownership before reaching this repository, completing the
//! user -> contact -> address scoping chain.

use domain::models::Address;
use sqlx::PgPool;

use crate::entities::AddressEntity;

/// Repository for address database operations.
#[derive(Clone)]
pub struct AddressRepository {
    pool: PgPool,
}

impl AddressRepository {
    /// Creates a new AddressRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create an address under a contact.
    pub async fn create(
        &self,
        contact_id: i64,
        street: Option<&str>,
        city: Option<&str>,
        province: Option<&str>,
        country: &str,
        postal_code: &str,
    ) -> Result<Address, sqlx::Error> {
        let entity = sqlx::query_as::<_, AddressEntity>(
            r#"
            INSERT INTO addresses (contact_id, street, city, province, country, postal_code)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, contact_id, street, city, province, country, postal_code
            "#,
        )
        .bind(contact_id)
        .bind(street)
        .bind(city)
        .bind(province)
        .bind(country)
        .bind(postal_code)
        .fetch_one(&self.pool)
        .await?;

        Ok(entity.into())
    }

    /// Find an address by id, scoped to its contact.
    pub async fn find_by_id(
        &self,
        contact_id: i64,
        id: i64,
    ) -> Result<Option<Address>, sqlx::Error> {
        let entity = sqlx::query_as::<_, AddressEntity>(
            r#"
            SELECT id, contact_id, street, city, province, country, postal_code
            FROM addresses
            WHERE contact_id = $1 AND id = $2
            "#,
        )
        .bind(contact_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(entity.map(Into::into))
    }

    /// List all addresses of a contact, oldest first.
    pub async fn list_by_contact(&self, contact_id: i64) -> Result<Vec<Address>, sqlx::Error> {
        let entities = sqlx::query_as::<_, AddressEntity>(
            r#"
            SELECT id, contact_id, street, city, province, country, postal_code
            FROM addresses
            WHERE contact_id = $1
            ORDER BY id
            "#,
        )
        .bind(contact_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(entities.into_iter().map(Into::into).collect())
    }

    /// Persist a merged update. Returns `None` when the address is absent
    /// or belongs to a different contact.
    pub async fn update(
        &self,
        contact_id: i64,
        id: i64,
        street: Option<&str>,
        city: Option<&str>,
        province: Option<&str>,
        country: &str,
        postal_code: &str,
    ) -> Result<Option<Address>, sqlx::Error> {
        let entity = sqlx::query_as::<_, AddressEntity>(
            r#"
            UPDATE addresses
            SET street = $3, city = $4, province = $5, country = $6, postal_code = $7
            WHERE contact_id = $1 AND id = $2
            RETURNING id, contact_id, street, city, province, country, postal_code
            "#,
        )
        .bind(contact_id)
        .bind(id)
        .bind(street)
        .bind(city)
        .bind(province)
        .bind(country)
        .bind(postal_code)
        .fetch_optional(&self.pool)
        .await?;

        Ok(entity.map(Into::into))
    }

    /// Delete an address, scoped to its contact. Returns whether a row was
    /// actually removed.
    pub async fn delete(&self, contact_id: i64, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM addresses WHERE contact_id = $1 AND id = $2")
            .bind(contact_id)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
