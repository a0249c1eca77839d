//! User routes: registration, login, current-profile, and logout.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::CurrentUser;
use crate::response::DataBody;
use persistence::repositories::UserRepository;
use shared::password::{hash_password, verify_password};

/// Login failures do not reveal which credential was wrong.
const WRONG_CREDENTIALS: &str = "Username or password is wrong";

/// User information in responses. The token is present only on login.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub username: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl From<domain::models::User> for UserResponse {
    fn from(user: domain::models::User) -> Self {
        Self {
            username: user.username,
            name: user.name,
            token: None,
        }
    }
}

/// Request body for user registration.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterUserRequest {
    #[validate(
        length(min = 1, max = 100, message = "Username must be 1-100 characters"),
        custom(function = "shared::validation::validate_not_blank")
    )]
    pub username: String,

    #[validate(length(min = 1, max = 100, message = "Password must be 1-100 characters"))]
    pub password: String,

    #[validate(
        length(min = 1, max = 100, message = "Name must be 1-100 characters"),
        custom(function = "shared::validation::validate_not_blank")
    )]
    pub name: String,
}

/// Register a new user.
///
/// POST /api/users
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterUserRequest>,
) -> Result<Json<DataBody<UserResponse>>, ApiError> {
    request.validate()?;

    let repo = UserRepository::new(state.pool.clone());

    // Uniqueness is checked before insert; a duplicate is a validation
    // failure, not a conflict.
    if repo.username_exists(&request.username).await? {
        return Err(ApiError::Validation("Username already exists".to_string()));
    }

    let digest = hash_password(&request.password)
        .map_err(|e| ApiError::Internal(format!("Password hashing failed: {}", e)))?;

    let user = repo.create(&request.username, &request.name, &digest).await?;

    info!(username = %user.username, "user registered");

    Ok(Json(DataBody::new(
        domain::models::User::from(user).into(),
    )))
}

/// Request body for login.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginUserRequest {
    #[validate(length(min = 1, max = 100, message = "Username must be 1-100 characters"))]
    pub username: String,

    #[validate(length(min = 1, max = 100, message = "Password must be 1-100 characters"))]
    pub password: String,
}

/// Log in and receive a fresh session token.
///
/// POST /api/users/login
///
/// A successful login overwrites any previously issued token, so only the
/// newest session stays valid. Failed logins leave the stored token alone.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginUserRequest>,
) -> Result<Json<DataBody<UserResponse>>, ApiError> {
    request.validate()?;

    let repo = UserRepository::new(state.pool.clone());

    let user = repo
        .find_by_username(&request.username)
        .await?
        .ok_or_else(|| ApiError::Unauthorized(WRONG_CREDENTIALS.to_string()))?;

    let password_valid = verify_password(&request.password, &user.password)
        .map_err(|e| ApiError::Internal(format!("Password verification failed: {}", e)))?;

    if !password_valid {
        return Err(ApiError::Unauthorized(WRONG_CREDENTIALS.to_string()));
    }

    let token = shared::token::generate();
    repo.set_token(&user.username, Some(&token)).await?;

    info!(username = %user.username, "user logged in");

    Ok(Json(DataBody::new(UserResponse {
        username: user.username,
        name: user.name,
        token: Some(token),
    })))
}

/// Get the current user's profile.
///
/// GET /api/users/current
pub async fn get_current_user(
    CurrentUser(user): CurrentUser,
) -> Result<Json<DataBody<UserResponse>>, ApiError> {
    Ok(Json(DataBody::new(user.into())))
}

/// Request body for updating the current user. Both fields are optional;
/// only provided fields are applied.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(
        length(min = 1, max = 100, message = "Name must be 1-100 characters"),
        custom(function = "shared::validation::validate_not_blank")
    )]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Password must be 1-100 characters"))]
    pub password: Option<String>,
}

/// Partially update the current user's profile.
///
/// PATCH /api/users/current
pub async fn update_current_user(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(request): Json<UpdateUserRequest>,
) -> Result<Json<DataBody<UserResponse>>, ApiError> {
    request.validate()?;

    // Merge the provided fields over the stored record.
    let name = request.name.unwrap_or(user.name);
    let digest = match request.password {
        Some(password) => hash_password(&password)
            .map_err(|e| ApiError::Internal(format!("Password hashing failed: {}", e)))?,
        None => user.password,
    };

    let updated = UserRepository::new(state.pool.clone())
        .update_profile(&user.username, &name, &digest)
        .await?;

    Ok(Json(DataBody::new(
        domain::models::User::from(updated).into(),
    )))
}

/// Log out and revoke the session token.
///
/// DELETE /api/users/current/logout
pub async fn logout(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<DataBody<bool>>, ApiError> {
    UserRepository::new(state.pool.clone())
        .set_token(&user.username, None)
        .await?;

    info!(username = %user.username, "user logged out");

    Ok(Json(DataBody::new(true)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_valid() {
        let request = RegisterUserRequest {
            username: "bani".to_string(),
            password: "rahasia".to_string(),
            name: "Bani Faza".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_register_request_empty_fields() {
        let request = RegisterUserRequest {
            username: "".to_string(),
            password: "".to_string(),
            name: "".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_register_request_blank_username() {
        let request = RegisterUserRequest {
            username: "   ".to_string(),
            password: "rahasia".to_string(),
            name: "Bani".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_register_request_username_too_long() {
        let request = RegisterUserRequest {
            username: "a".repeat(101),
            password: "rahasia".to_string(),
            name: "Bani".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_update_request_all_fields_optional() {
        let request = UpdateUserRequest {
            name: None,
            password: None,
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_update_request_rejects_empty_name() {
        let request = UpdateUserRequest {
            name: Some("".to_string()),
            password: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_user_response_token_omitted_when_none() {
        let response = UserResponse {
            username: "test".to_string(),
            name: "Test".to_string(),
            token: None,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("token").is_none());
    }
}
