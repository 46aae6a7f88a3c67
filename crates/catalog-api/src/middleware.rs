//! # Request Gate
//!
//! Bearer-token middleware for the `/produtos` routes. Verified claims are
//! stored in the request extensions for handlers to pick up with
//! `Extension<TokenClaims>`.

use crate::response::ApiError;
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use catalog_auth::{authenticate, AuthError};
use tracing::debug;

/// Reject the request unless it carries a valid `Authorization: Bearer` token
pub async fn require_bearer(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = match request.headers().get(AUTHORIZATION) {
        None => None,
        // Non-ASCII header values cannot be `Bearer <token>`
        Some(value) => Some(value.to_str().map_err(|_| AuthError::TokenMalformed)?),
    };

    let claims = authenticate(header, &state.signer)?;

    debug!(client_id = %claims.client_id, "partner authenticated");
    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}
