//! # Authentication Error Types
//!
//! Failures from partner login and from the bearer-token gate.
//! Display strings are the messages partners see in the error envelope.

use thiserror::Error;

/// Error type for login and token checks
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Login body lacks `client_id` or `client_secret`
    #[error("Credenciais 'client_id' e 'client_secret' são necessárias.")]
    MissingCredentials,

    /// Unknown partner or wrong secret
    #[error("Credenciais inválidas.")]
    InvalidCredentials,

    /// No Authorization header
    #[error("Token de autenticação ausente.")]
    TokenMissing,

    /// Authorization header is not `Bearer <token>`
    #[error("Cabeçalho de autorização malformado.")]
    TokenMalformed,

    /// Signature fine, but past `exp`
    #[error("Token expirado.")]
    TokenExpired,

    /// Bad structure, signature or algorithm
    #[error("Token inválido.")]
    TokenInvalid,

    /// Partner registry could not be loaded
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Token could not be produced
    #[error("Token signing failed: {0}")]
    Signing(String),
}

impl AuthError {
    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            AuthError::MissingCredentials => 400,
            AuthError::InvalidCredentials => 401,
            AuthError::TokenMissing => 401,
            AuthError::TokenMalformed => 400,
            AuthError::TokenExpired => 401,
            AuthError::TokenInvalid => 401,
            AuthError::Configuration(_) => 500,
            AuthError::Signing(_) => 500,
        }
    }
}

/// Result type alias for authentication operations
pub type AuthResult<T> = Result<T, AuthError>;
