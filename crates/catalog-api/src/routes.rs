//! # Routes
//!
//! Axum router configuration for the partner API.

use crate::handlers;
use crate::middleware::require_bearer;
use crate::state::AppState;
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the main application router
///
/// Routes:
/// - Public:
///   - GET  / - Status text
///   - GET  /health - Health check
///   - POST /auth/login - Exchange partner credentials for a token
///
/// - Bearer token required:
///   - GET    /produtos - List products
///   - POST   /produtos - Create product
///   - GET    /produtos/count - Product count
///   - GET    /produtos/search?name= - Search by name
///   - GET    /produtos/{id} - Get product
///   - PUT    /produtos/{id} - Merge-update product
///   - PATCH  /produtos/{id} - Merge-update product
///   - DELETE /produtos/{id} - Delete product
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let public_routes = Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/auth/login", post(handlers::login));

    // The gate runs only for matched routes
    let product_routes = Router::new()
        .route(
            "/produtos",
            get(handlers::list_products).post(handlers::create_product),
        )
        .route("/produtos/count", get(handlers::count_products))
        .route("/produtos/search", get(handlers::search_products))
        .route(
            "/produtos/{id}",
            get(handlers::get_product)
                .put(handlers::update_product)
                .patch(handlers::update_product)
                .delete(handlers::delete_product),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_bearer));

    Router::new()
        .merge(public_routes)
        .merge(product_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
