//! # Routes
//!
//! Axum router configuration for the storefront API. Cross-origin
//! headers are permissive on every response so the browser-side
//! storefront can call the session service directly.

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
/// - POST /create-checkout-session - Create a Stripe checkout session
///   (any other method on this path answers 405; OPTIONS pre-flight is
///   handled by the CORS layer)
/// - GET  /api/v1/products - List in-stock products
/// - GET  /api/v1/products/{id} - Get product by ID
/// - GET  /checkout/success - Post-payment confirmation page
/// - GET  /checkout/cancel - Cancelled-payment page
/// - GET  /health - Health check
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let checkout_routes = Router::new()
        .route("/success", get(handlers::checkout_success))
        .route("/cancel", get(handlers::checkout_cancel));

    let api_routes = Router::new()
        .route("/products", get(handlers::list_products))
        .route("/products/{product_id}", get(handlers::get_product));

    Router::new()
        .route("/health", get(handlers::health))
        .route("/", get(handlers::health))
        .route(
            "/create-checkout-session",
            post(handlers::create_checkout_session).fallback(handlers::method_not_allowed),
        )
        .nest("/checkout", checkout_routes)
        .nest("/api/v1", api_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
