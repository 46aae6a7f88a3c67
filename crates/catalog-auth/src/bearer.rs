//! # Bearer Header Parsing
//!
//! Turns an `Authorization` header value into verified [`TokenClaims`].
//!
//! Checks run in order: header absent, header malformed, token rejected.

use crate::error::{AuthError, AuthResult};
use crate::token::{TokenClaims, TokenSigner};

/// Authorization scheme accepted by the gate
pub const BEARER_SCHEME: &str = "Bearer";

/// Extract the token from an `Authorization` header value.
///
/// The value must be exactly `Bearer <token>`: two parts separated by a
/// single space, the first literally `Bearer`.
pub fn bearer_token(header: Option<&str>) -> AuthResult<&str> {
    let header = header.ok_or(AuthError::TokenMissing)?;

    let mut parts = header.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(BEARER_SCHEME), Some(token), None) if !token.is_empty() => Ok(token),
        _ => Err(AuthError::TokenMalformed),
    }
}

/// Run the full gate: extract the bearer token and verify it
pub fn authenticate(header: Option<&str>, signer: &TokenSigner) -> AuthResult<TokenClaims> {
    let token = bearer_token(header)?;
    signer.verify(token)
}
