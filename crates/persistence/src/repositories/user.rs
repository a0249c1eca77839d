//! User repository for database operations.

use sqlx::PgPool;

use crate::entities::UserEntity;

/// Repository for user-related database operations.
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Creates a new UserRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by username.
    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserEntity>, sqlx::Error> {
        sqlx::query_as::<_, UserEntity>(
            r#"
            SELECT username, name, password, token, created_at, updated_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
    }

    /// Check whether a username is already taken.
    pub async fn username_exists(&self, username: &str) -> Result<bool, sqlx::Error> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE username = $1")
                .bind(username)
                .fetch_one(&self.pool)
                .await?;

        Ok(count > 0)
    }

    /// Resolve a session token to its user.
    ///
    /// Tokens are matched exactly; an unmatched token yields `None`, which
    /// the caller translates into an unauthenticated error.
    pub async fn find_by_token(&self, token: &str) -> Result<Option<UserEntity>, sqlx::Error> {
        sqlx::query_as::<_, UserEntity>(
            r#"
            SELECT username, name, password, token, created_at, updated_at
            FROM users
            WHERE token = $1
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
    }

    /// Create a new user account.
    pub async fn create(
        &self,
        username: &str,
        name: &str,
        password_digest: &str,
    ) -> Result<UserEntity, sqlx::Error> {
        sqlx::query_as::<_, UserEntity>(
            r#"
            INSERT INTO users (username, name, password)
            VALUES ($1, $2, $3)
            RETURNING username, name, password, token, created_at, updated_at
            "#,
        )
        .bind(username)
        .bind(name)
        .bind(password_digest)
        .fetch_one(&self.pool)
        .await
    }

    /// Persist a merged profile update (display name and password digest).
    pub async fn update_profile(
        &self,
        username: &str,
        name: &str,
        password_digest: &str,
    ) -> Result<UserEntity, sqlx::Error> {
        sqlx::query_as::<_, UserEntity>(
            r#"
            UPDATE users
            SET name = $2, password = $3, updated_at = NOW()
            WHERE username = $1
            RETURNING username, name, password, token, created_at, updated_at
            "#,
        )
        .bind(username)
        .bind(name)
        .bind(password_digest)
        .fetch_one(&self.pool)
        .await
    }

    /// Set or clear a user's session token.
    ///
    /// Login stores a fresh token here, replacing any prior session; logout
    /// clears it with `None`.
    pub async fn set_token(
        &self,
        username: &str,
        token: Option<&str>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            UPDATE users
            SET token = $2, updated_at = NOW()
            WHERE username = $1
            "#,
        )
        .bind(username)
        .bind(token)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
