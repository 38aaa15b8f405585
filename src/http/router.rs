//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        // Accounts
        .route("/signup", post(handlers::signup))
        .route("/login", post(handlers::login))
        .route("/user/{username}", get(handlers::get_account))
        // Places
        .route("/data", get(handlers::list_places))
        .route("/data/{place_id}", get(handlers::get_place))
        .route("/coordinates", get(handlers::list_coordinates))
        .route("/coordinates/{place_id}", get(handlers::get_place_coordinates))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::auth::LocalIdentityProvider;
    use crate::db::repositories::LocalRepository;

    #[test]
    fn test_router_creation() {
        let state = AppState::new(
            Arc::new(LocalRepository::new()),
            Arc::new(LocalIdentityProvider::new()),
            "http://localhost:3000",
        );
        let _router = create_router(state);
        // If we got here, router was created successfully
    }
}
