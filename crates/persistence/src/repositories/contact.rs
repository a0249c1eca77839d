//! Contact repository for database operations.
//!
//! Every query binds the owning username into the WHERE clause, so a
//! contact belonging to another user is indistinguishable from one that
//! does not exist.

use domain::models::{Contact, ContactSearchQuery};
use shared::pagination::PageRequest;
use sqlx::PgPool;

use crate::entities::ContactEntity;

/// Helper struct for building the dynamic WHERE clause of a contact search.
/// Tracks conditions and parameter positions so the count and list queries
/// stay in sync.
struct ContactFilterBuilder {
    conditions: Vec<String>,
    param_count: i32,
}

impl ContactFilterBuilder {
    /// Build filter conditions from a search query. The owner constraint is
    /// always present; each filter is added only when provided.
    fn build(query: &ContactSearchQuery) -> Self {
        let mut conditions = vec!["username = $1".to_string()];
        let mut param_count = 1;

        if query.name.is_some() {
            param_count += 1;
            // One bound pattern, matched against either name column.
            conditions.push(format!(
                "(first_name ILIKE ${p} OR last_name ILIKE ${p})",
                p = param_count
            ));
        }

        if query.email.is_some() {
            param_count += 1;
            conditions.push(format!("email ILIKE ${}", param_count));
        }

        if query.phone.is_some() {
            param_count += 1;
            conditions.push(format!("phone ILIKE ${}", param_count));
        }

        Self {
            conditions,
            param_count,
        }
    }

    fn where_clause(&self) -> String {
        self.conditions.join(" AND ")
    }
}

/// Wraps a search term in `%` wildcards for substring containment.
fn contains_pattern(term: &str) -> String {
    format!("%{}%", term)
}

/// Macro to bind the optional search filters to a SQLx builder, in the same
/// order the filter builder numbered them.
macro_rules! bind_search_filters {
    ($builder:expr, $query:expr) => {{
        let mut b = $builder;
        if let Some(ref name) = $query.name {
            b = b.bind(contains_pattern(name));
        }
        if let Some(ref email) = $query.email {
            b = b.bind(contains_pattern(email));
        }
        if let Some(ref phone) = $query.phone {
            b = b.bind(contains_pattern(phone));
        }
        b
    }};
}

/// Repository for contact database operations.
#[derive(Clone)]
pub struct ContactRepository {
    pool: PgPool,
}

impl ContactRepository {
    /// Creates a new ContactRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a contact owned by `username`.
    pub async fn create(
        &self,
        username: &str,
        first_name: &str,
        last_name: Option<&str>,
        email: Option<&str>,
        phone: Option<&str>,
    ) -> Result<Contact, sqlx::Error> {
        let entity = sqlx::query_as::<_, ContactEntity>(
            r#"
            INSERT INTO contacts (username, first_name, last_name, email, phone)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, username, first_name, last_name, email, phone
            "#,
        )
        .bind(username)
        .bind(first_name)
        .bind(last_name)
        .bind(email)
        .bind(phone)
        .fetch_one(&self.pool)
        .await?;

        Ok(entity.into())
    }

    /// Find a contact by id, scoped to its owner.
    pub async fn find_by_id(
        &self,
        username: &str,
        id: i64,
    ) -> Result<Option<Contact>, sqlx::Error> {
        let entity = sqlx::query_as::<_, ContactEntity>(
            r#"
            SELECT id, username, first_name, last_name, email, phone
            FROM contacts
            WHERE username = $1 AND id = $2
            "#,
        )
        .bind(username)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(entity.map(Into::into))
    }

    /// Check that a contact exists and belongs to `username`.
    ///
    /// Address operations call this first to enforce the ownership chain.
    pub async fn exists(&self, username: &str, id: i64) -> Result<bool, sqlx::Error> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM contacts WHERE username = $1 AND id = $2",
        )
        .bind(username)
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count > 0)
    }

    /// Persist a merged update. Returns `None` when the contact is absent
    /// or owned by someone else.
    pub async fn update(
        &self,
        username: &str,
        id: i64,
        first_name: &str,
        last_name: Option<&str>,
        email: Option<&str>,
        phone: Option<&str>,
    ) -> Result<Option<Contact>, sqlx::Error> {
        let entity = sqlx::query_as::<_, ContactEntity>(
            r#"
            UPDATE contacts
            SET first_name = $3, last_name = $4, email = $5, phone = $6
            WHERE username = $1 AND id = $2
            RETURNING id, username, first_name, last_name, email, phone
            "#,
        )
        .bind(username)
        .bind(id)
        .bind(first_name)
        .bind(last_name)
        .bind(email)
        .bind(phone)
        .fetch_optional(&self.pool)
        .await?;

        Ok(entity.map(Into::into))
    }

    /// Delete a contact, scoped to its owner. Returns whether a row was
    /// actually removed.
    pub async fn delete(&self, username: &str, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM contacts WHERE username = $1 AND id = $2")
            .bind(username)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Search contacts with optional filters and paging.
    ///
    /// Returns the requested page plus the total number of matching rows.
    /// A page past the end of the result set simply comes back empty.
    pub async fn search(
        &self,
        username: &str,
        query: &ContactSearchQuery,
        page: PageRequest,
    ) -> Result<(Vec<Contact>, i64), sqlx::Error> {
        let filter = ContactFilterBuilder::build(query);
        let where_clause = filter.where_clause();

        let count_query = format!("SELECT COUNT(*) FROM contacts WHERE {}", where_clause);
        let count_builder = sqlx::query_scalar::<_, i64>(&count_query).bind(username);
        let count_builder = bind_search_filters!(count_builder, query);
        let total: i64 = count_builder.fetch_one(&self.pool).await?;

        let list_query = format!(
            r#"
            SELECT id, username, first_name, last_name, email, phone
            FROM contacts
            WHERE {}
            ORDER BY id
            LIMIT ${} OFFSET ${}
            "#,
            where_clause,
            filter.param_count + 1,
            filter.param_count + 2
        );

        let list_builder = sqlx::query_as::<_, ContactEntity>(&list_query).bind(username);
        let list_builder = bind_search_filters!(list_builder, query);
        let entities = list_builder
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await?;

        let contacts = entities.into_iter().map(Into::into).collect();

        Ok((contacts, total))
    }
}
