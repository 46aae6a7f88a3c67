//! # catalog-core
//!
//! Core types for the partner catalog.
//!
//! This crate provides:
//! - `Product`, `NewProduct` and `ProductPatch` for catalog records
//! - `ProductRepository` trait for product storage
//! - `InMemoryProductStore`, a single-lock store with monotonic ids
//! - `CatalogService` for validated create/update/delete
//! - `CatalogError` for typed error handling
//!
//! ## Example
//!
//! ```rust
//! use catalog_core::{CatalogService, InMemoryProductStore};
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! let service = CatalogService::new(Arc::new(InMemoryProductStore::new()));
//!
//! let product = service
//!     .create_product(json!({"name": "Caneca", "price": 25.0}))
//!     .unwrap();
//! assert_eq!(product.id, 1);
//!
//! let updated = service.update_product(1, json!({"price": 19.9})).unwrap();
//! assert_eq!(updated.name, "Caneca");
//! ```

pub mod error;
pub mod product;
pub mod repository;
pub mod service;
pub mod store;

// Re-exports for convenience
pub use error::{CatalogError, CatalogResult};
pub use product::{Attributes, NewProduct, Product, ProductPatch};
pub use repository::{ProductRepository, SharedRepository};
pub use service::CatalogService;
pub use store::InMemoryProductStore;
