//! # Catalog Error Types
//!
//! Typed error handling for catalog operations.
//! All service operations return `Result<T, CatalogError>`.

use thiserror::Error;

/// Message returned when `name` or `price` is missing on creation
pub const MISSING_FIELDS_MESSAGE: &str = "Nome e preço são obrigatórios.";

/// Message returned when a price is negative
pub const NEGATIVE_PRICE_MESSAGE: &str = "O preço do produto não pode ser negativo.";

/// Core error type for catalog operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    /// Bad or missing input fields
    #[error("{0}")]
    Validation(String),

    /// Unknown product identifier
    #[error("Produto com ID {id} não encontrado.")]
    NotFound { id: u64 },
}

impl CatalogError {
    /// Shorthand for a validation failure
    pub fn validation(message: impl Into<String>) -> Self {
        CatalogError::Validation(message.into())
    }

    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            CatalogError::Validation(_) => 400,
            CatalogError::NotFound { .. } => 404,
        }
    }
}

/// Result type alias for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
