//! # Routes
//!
//! Axum router configuration for the development purchase endpoint.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the main application router
///
/// Routes:
/// - GET  /health - Health check
/// - POST /api/checkout/{product_id} - Create a purchase session
/// - GET  /api/finishes - List the finish catalog
/// - GET  /checkout/success - Success page (session redirect target)
/// - GET  /checkout/cancel - Cancel page
pub fn create_router(state: AppState) -> Router {
    // The marketing page is served from its own origin in development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let checkout_pages = Router::new()
        .route("/success", get(handlers::checkout_success))
        .route("/cancel", get(handlers::checkout_cancel));

    let api_routes = Router::new()
        .route("/checkout/{product_id}", post(handlers::create_session))
        .route("/finishes", get(handlers::list_finishes));

    Router::new()
        .route("/health", get(handlers::health))
        .route("/", get(handlers::health))
        .nest("/checkout", checkout_pages)
        .nest("/api", api_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
