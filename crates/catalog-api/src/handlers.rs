//! # Request Handlers
//!
//! Axum request handlers for partner login and the product catalog.
//! Product handlers sit behind [`crate::middleware::require_bearer`].

use crate::response::{ApiError, ApiResponse};
use crate::state::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};
use catalog_auth::{AuthError, TokenClaims};
use catalog_core::Product;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, instrument, warn};

// =============================================================================
// Request/Response Types
// =============================================================================

/// Login request
#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default)]
    pub client_secret: Option<String>,
}

/// Login response
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Product count response
#[derive(Debug, Serialize)]
pub struct CountResponse {
    pub total_produtos: usize,
}

/// Search query (`?name=`)
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub name: Option<String>,
}

/// Non-numeric ids can never match a product
fn parse_product_id(raw: &str) -> Result<u64, ApiError> {
    raw.parse().map_err(|_| ApiError::NotFound("Produto"))
}

// =============================================================================
// Handlers
// =============================================================================

/// Root status text
pub async fn index() -> &'static str {
    "API de Parceiros está online!"
}

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "partner-catalog",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Exchange partner credentials for a bearer token
#[instrument(skip(state, body))]
pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<LoginResponse>>, ApiError> {
    let Json(request) = body.map_err(|_| AuthError::MissingCredentials)?;

    let (client_id, client_secret) = match (request.client_id, request.client_secret) {
        (Some(id), Some(secret)) if !id.is_empty() && !secret.is_empty() => (id, secret),
        _ => return Err(AuthError::MissingCredentials.into()),
    };

    let partner = state
        .partners
        .authenticate(&client_id, &client_secret)
        .map_err(|e| {
            warn!(client_id = %client_id, "login rejected");
            e
        })?;

    let token = state.signer.issue(&partner.client_id)?;
    info!(client_id = %partner.client_id, "issued partner token");

    Ok(ApiResponse::success(LoginResponse { token }))
}

/// List all products
pub async fn list_products(State(state): State<AppState>) -> Json<ApiResponse<Vec<Product>>> {
    ApiResponse::success(state.catalog.get_all_products())
}

/// Create a product
#[instrument(skip_all, fields(client_id = %claims.client_id))]
pub async fn create_product(
    State(state): State<AppState>,
    Extension(claims): Extension<TokenClaims>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(data) = body?;
    let product = state.catalog.create_product(data)?;

    info!(id = product.id, "product created");
    Ok((StatusCode::CREATED, ApiResponse::success(product)))
}

/// Get a single product
pub async fn get_product(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<ApiResponse<Product>>, ApiError> {
    let Path(raw_id) = path?;
    let id = parse_product_id(&raw_id)?;
    let product = state
        .catalog
        .get_product_by_id(id)
        .ok_or(ApiError::NotFound("Produto"))?;

    Ok(ApiResponse::success(product))
}

/// Merge-update a product (PUT and PATCH behave the same)
#[instrument(skip_all, fields(client_id = %claims.client_id))]
pub async fn update_product(
    State(state): State<AppState>,
    Extension(claims): Extension<TokenClaims>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ApiResponse<Product>>, ApiError> {
    let Path(raw_id) = path?;
    let id = parse_product_id(&raw_id)?;
    let Json(data) = body?;
    let product = state.catalog.update_product(id, data)?;

    info!(id, "product updated");
    Ok(ApiResponse::success(product))
}

/// Delete a product (204, no body)
#[instrument(skip_all, fields(client_id = %claims.client_id))]
pub async fn delete_product(
    State(state): State<AppState>,
    Extension(claims): Extension<TokenClaims>,
    path: Result<Path<String>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(raw_id) = path?;
    let id = parse_product_id(&raw_id)?;
    state.catalog.delete_product(id)?;

    info!(id, "product deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Number of stored products
pub async fn count_products(State(state): State<AppState>) -> Json<ApiResponse<CountResponse>> {
    ApiResponse::success(CountResponse {
        total_produtos: state.catalog.get_products_count(),
    })
}

/// Case-insensitive name search
pub async fn search_products(
    State(state): State<AppState>,
    query: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<ApiResponse<Vec<Product>>>, ApiError> {
    let Query(params) = query?;
    let name = params
        .name
        .filter(|n| !n.is_empty())
        .ok_or_else(|| ApiError::BadRequest("O parâmetro 'name' é obrigatório.".to_string()))?;

    Ok(ApiResponse::success(state.catalog.get_products_by_name(&name)))
}
