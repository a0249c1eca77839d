//! Integration tests for user endpoints.
//!
//! Tests cover:
//! - POST /api/users (register)
//! - POST /api/users/login
//! - GET /api/users/current
//! - PATCH /api/users/current
//! - DELETE /api/users/current/logout

mod common;

use axum::http::{Method, StatusCode};
use common::{
    create_authenticated_user, create_test_app, create_test_pool, delete_request_with_token,
    get_request_with_token, json_request, json_request_with_token, login_user,
    parse_response_body, register_user, run_migrations, test_config, TestUser,
};
use serde_json::json;
use tower::ServiceExt;

// =============================================================================
// POST /api/users Tests
// =============================================================================

#[tokio::test]
async fn test_register_success() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;
    let app = create_test_app(test_config(), pool.clone());

    let user = TestUser::new();
    let request = json_request(
        Method::POST,
        "/api/users",
        json!({
            "username": user.username,
            "password": user.password,
            "name": user.name
        }),
    );

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    assert_eq!(body["data"]["username"], user.username.as_str());
    assert_eq!(body["data"]["name"], user.name.as_str());
    // Registration never issues a token
    assert!(body["data"].get("token").is_none());
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;
    let app = create_test_app(test_config(), pool.clone());

    let user = TestUser::new();
    register_user(&app, &user).await;

    // Same username again must fail without creating a second row
    let request = json_request(
        Method::POST,
        "/api/users",
        json!({
            "username": user.username,
            "password": "different",
            "name": "Someone Else"
        }),
    );

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = parse_response_body(response).await;
    assert!(body.get("errors").is_some());

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE username = $1")
        .bind(&user.username)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_register_invalid_body() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;
    let app = create_test_app(test_config(), pool.clone());

    let request = json_request(
        Method::POST,
        "/api/users",
        json!({
            "username": "",
            "password": "",
            "name": ""
        }),
    );

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = parse_response_body(response).await;
    assert!(body.get("errors").is_some());
}

// =============================================================================
// POST /api/users/login Tests
// =============================================================================

#[tokio::test]
async fn test_login_success() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;
    let app = create_test_app(test_config(), pool.clone());

    let user = TestUser::new();
    register_user(&app, &user).await;

    let request = json_request(
        Method::POST,
        "/api/users/login",
        json!({
            "username": user.username,
            "password": user.password
        }),
    );

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    assert_eq!(body["data"]["username"], user.username.as_str());
    assert!(!body["data"]["token"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_login_issues_fresh_token_each_time() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;
    let app = create_test_app(test_config(), pool.clone());

    let user = TestUser::new();
    register_user(&app, &user).await;

    let first = login_user(&app, &user).await;
    let second = login_user(&app, &user).await;
    assert_ne!(first, second);

    // Only the newest session stays valid
    let response = app
        .clone()
        .oneshot(get_request_with_token("/api/users/current", &first))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .clone()
        .oneshot(get_request_with_token("/api/users/current", &second))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_login_wrong_password() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;
    let app = create_test_app(test_config(), pool.clone());

    let user = TestUser::new();
    let token = create_authenticated_user(&app, &user).await;

    let request = json_request(
        Method::POST,
        "/api/users/login",
        json!({
            "username": user.username,
            "password": "wrong-password"
        }),
    );

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = parse_response_body(response).await;
    assert!(body.get("errors").is_some());

    // The failed attempt must not touch the stored token
    let response = app
        .clone()
        .oneshot(get_request_with_token("/api/users/current", &token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_login_unknown_username() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;
    let app = create_test_app(test_config(), pool.clone());

    let request = json_request(
        Method::POST,
        "/api/users/login",
        json!({
            "username": "nobody-here",
            "password": "whatever"
        }),
    );

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = parse_response_body(response).await;
    assert!(body.get("errors").is_some());
}

// =============================================================================
// GET /api/users/current Tests
// =============================================================================

#[tokio::test]
async fn test_get_current_user_success() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;
    let app = create_test_app(test_config(), pool.clone());

    let user = TestUser::new();
    let token = create_authenticated_user(&app, &user).await;

    let response = app
        .clone()
        .oneshot(get_request_with_token("/api/users/current", &token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    assert_eq!(body["data"]["username"], user.username.as_str());
    assert_eq!(body["data"]["name"], user.name.as_str());
}

#[tokio::test]
async fn test_get_current_user_missing_token() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;
    let app = create_test_app(test_config(), pool.clone());

    use axum::{body::Body, http::Request};
    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/users/current")
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_get_current_user_invalid_token() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;
    let app = create_test_app(test_config(), pool.clone());

    let response = app
        .clone()
        .oneshot(get_request_with_token("/api/users/current", "salah"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = parse_response_body(response).await;
    assert!(body.get("errors").is_some());
}

// =============================================================================
// PATCH /api/users/current Tests
// =============================================================================

#[tokio::test]
async fn test_update_current_user_name_only() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;
    let app = create_test_app(test_config(), pool.clone());

    let user = TestUser::new();
    let token = create_authenticated_user(&app, &user).await;

    let request = json_request_with_token(
        Method::PATCH,
        "/api/users/current",
        json!({ "name": "Updated Name" }),
        &token,
    );

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    assert_eq!(body["data"]["name"], "Updated Name");

    // Password was not supplied, so the old one still works
    login_user(&app, &user).await;
}

#[tokio::test]
async fn test_update_current_user_password_only() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;
    let app = create_test_app(test_config(), pool.clone());

    let user = TestUser::new();
    let token = create_authenticated_user(&app, &user).await;

    let request = json_request_with_token(
        Method::PATCH,
        "/api/users/current",
        json!({ "password": "brand-new-secret" }),
        &token,
    );

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Name was not supplied and must be unchanged
    let body = parse_response_body(response).await;
    assert_eq!(body["data"]["name"], user.name.as_str());

    // The new password logs in, the old one does not
    let updated = TestUser {
        username: user.username.clone(),
        password: "brand-new-secret".to_string(),
        name: user.name.clone(),
    };
    login_user(&app, &updated).await;

    let request = json_request(
        Method::POST,
        "/api/users/login",
        json!({
            "username": user.username,
            "password": user.password
        }),
    );
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_update_current_user_invalid_name() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;
    let app = create_test_app(test_config(), pool.clone());

    let user = TestUser::new();
    let token = create_authenticated_user(&app, &user).await;

    let request = json_request_with_token(
        Method::PATCH,
        "/api/users/current",
        json!({ "name": "" }),
        &token,
    );

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = parse_response_body(response).await;
    assert!(body.get("errors").is_some());
}

// =============================================================================
// DELETE /api/users/current/logout Tests
// =============================================================================

#[tokio::test]
async fn test_logout_revokes_token() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;
    let app = create_test_app(test_config(), pool.clone());

    let user = TestUser::new();
    let token = create_authenticated_user(&app, &user).await;

    let response = app
        .clone()
        .oneshot(delete_request_with_token(
            "/api/users/current/logout",
            &token,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    assert_eq!(body["data"], true);

    // The revoked token no longer resolves
    let response = app
        .clone()
        .oneshot(get_request_with_token("/api/users/current", &token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_requires_token() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;
    let app = create_test_app(test_config(), pool.clone());

    use axum::{body::Body, http::Request};
    let request = Request::builder()
        .method(Method::DELETE)
        .uri("/api/users/current/logout")
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
