//! # Bearer Tokens
//!
//! HS256 JWTs carrying the partner's client id and an absolute expiry.
//! Tokens are signed with the process-wide secret key, never with the
//! partner's own secret; the partner secret is only used at login.

use crate::error::{AuthError, AuthResult};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// How long an issued token stays valid
pub const TOKEN_VALIDITY_SECS: i64 = 60 * 60;

/// Claims embedded in every token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Authenticated partner
    pub client_id: String,
    /// Issued-at (unix seconds)
    pub iat: i64,
    /// Expiry (unix seconds)
    pub exp: i64,
}

/// Issues and verifies tokens with a symmetric key
#[derive(Clone)]
pub struct TokenSigner {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    validity: Duration,
}

impl TokenSigner {
    /// Create a signer for the given secret key
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        let secret = secret.as_ref();

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
            validity: Duration::seconds(TOKEN_VALIDITY_SECS),
        }
    }

    /// Issue a token valid from now
    pub fn issue(&self, client_id: &str) -> AuthResult<String> {
        self.issue_at(client_id, Utc::now())
    }

    /// Issue a token as if it had been created at `issued_at`
    pub fn issue_at(&self, client_id: &str, issued_at: DateTime<Utc>) -> AuthResult<String> {
        let claims = TokenClaims {
            client_id: client_id.to_string(),
            iat: issued_at.timestamp(),
            exp: (issued_at + self.validity).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| AuthError::Signing(e.to_string()))
    }

    /// Check signature, algorithm and expiry.
    ///
    /// An expired but otherwise valid token is `TokenExpired`; everything
    /// else that fails is `TokenInvalid`.
    pub fn verify(&self, token: &str) -> AuthResult<TokenClaims> {
        decode::<TokenClaims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::TokenInvalid,
            })
    }
}

impl std::fmt::Debug for TokenSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenSigner")
            .field("validity", &self.validity)
            .finish_non_exhaustive()
    }
}
