//! # catalog-auth
//!
//! Partner authentication for the catalog API.
//!
//! This crate provides:
//! - `CredentialStore` and `PartnerCredential` for partner login
//! - `TokenSigner` and `TokenClaims` for one-hour HS256 bearer tokens
//! - `bearer_token` / `authenticate` for `Authorization` header checks
//! - `AuthError` for typed error handling
//!
//! ## Example
//!
//! ```rust
//! use catalog_auth::{authenticate, CredentialStore, TokenSigner};
//!
//! let partners = CredentialStore::builtin();
//! let signer = TokenSigner::new("process-secret");
//!
//! // Login: partner secret checked, token signed with the process key
//! let partner = partners.authenticate("partner_123", "super_secret_key_123").unwrap();
//! let token = signer.issue(&partner.client_id).unwrap();
//!
//! // Later requests
//! let header = format!("Bearer {}", token);
//! let claims = authenticate(Some(&header), &signer).unwrap();
//! assert_eq!(claims.client_id, "partner_123");
//! ```

pub mod bearer;
pub mod credentials;
pub mod error;
pub mod token;

// Re-exports
pub use bearer::{authenticate, bearer_token, BEARER_SCHEME};
pub use credentials::{CredentialStore, PartnerCredential};
pub use error::{AuthError, AuthResult};
pub use token::{TokenClaims, TokenSigner, TOKEN_VALIDITY_SECS};
