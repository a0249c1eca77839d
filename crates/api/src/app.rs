use axum::{
    routing::{delete, get, post},
    Router,
};
use sqlx::PgPool;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::routes::{addresses, contacts, health, users};

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}

pub fn create_app(config: Config, pool: PgPool) -> Router {
    let state = AppState { pool };

    // Build CORS layer based on configuration
    let cors = if config.security.cors_origins.is_empty() {
        // Default: allow any origin (for development)
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        // Production: only allow specified origins
        use tower_http::cors::AllowOrigin;
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // Session checks run inside the CurrentUser extractor, so protected and
    // public routes live on the same router.
    Router::new()
        .route("/api/health", get(health::health_check))
        // User routes
        .route("/api/users", post(users::register))
        .route("/api/users/login", post(users::login))
        .route(
            "/api/users/current",
            get(users::get_current_user).patch(users::update_current_user),
        )
        .route("/api/users/current/logout", delete(users::logout))
        // Contact routes
        .route(
            "/api/contacts",
            post(contacts::create_contact).get(contacts::search_contacts),
        )
        .route(
            "/api/contacts/:contact_id",
            get(contacts::get_contact)
                .put(contacts::update_contact)
                .delete(contacts::delete_contact),
        )
        // Address routes (scoped through the owning contact)
        .route(
            "/api/contacts/:contact_id/addresses",
            post(addresses::create_address).get(addresses::list_addresses),
        )
        .route(
            "/api/contacts/:contact_id/addresses/:address_id",
            get(addresses::get_address)
                .put(addresses::update_address)
                .delete(addresses::delete_address),
        )
        // Global middleware (order matters: bottom layers run first)
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
