//! Session-token authentication extractor.
//!
//! The Authorization header carries the opaque session token verbatim.
//! Resolving the token is an exact-match lookup against the users table;
//! there is no expiry, so a token stays valid until the next login replaces
//! it or logout clears it.

use axum::{async_trait, extract::FromRequestParts, http::header, http::request::Parts};

use crate::app::AppState;
use crate::error::ApiError;
use persistence::repositories::UserRepository;

/// The authenticated user resolved from the session token.
///
/// Handlers taking this extractor reject unauthenticated requests with 401
/// before any business logic runs.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub domain::models::User);

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ApiError::Unauthorized("Unauthorized".to_string()))?;

        let user = UserRepository::new(state.pool.clone())
            .find_by_token(token)
            .await?
            .ok_or_else(|| ApiError::Unauthorized("Unauthorized".to_string()))?;

        Ok(CurrentUser(user.into()))
    }
}
