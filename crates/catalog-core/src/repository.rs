//! # Product Repository Trait
//!
//! Storage seam between the catalog service and whatever holds products.
//!
//! ```text
//! ┌──────────────────┐      ┌──────────────────────────────┐
//! │  CatalogService  │ ───▶ │ ProductRepository (trait)    │
//! │  (validation)    │      │  ├── find_all / find_by_id   │
//! └──────────────────┘      │  ├── find_by_name_part       │
//!                           │  ├── save / update / delete  │
//!                           │  └── count                   │
//!                           └──────────────────────────────┘
//!                                          ▲
//!                               ┌──────────┴──────────┐
//!                               │ InMemoryProductStore│
//!                               └─────────────────────┘
//! ```

use crate::product::{NewProduct, Product, ProductPatch};
use std::sync::Arc;

/// Identifier-indexed product storage.
///
/// Implementations must make every call atomic with respect to every other
/// call and must never reuse an identifier.
pub trait ProductRepository: Send + Sync {
    /// All stored products
    fn find_all(&self) -> Vec<Product>;

    /// A single product, if the id is known
    fn find_by_id(&self, id: u64) -> Option<Product>;

    /// Products whose name contains `name_part`, ignoring case.
    /// Result order is unspecified.
    fn find_by_name_part(&self, name_part: &str) -> Vec<Product>;

    /// Assign the next identifier, store, and return the stored record
    fn save(&self, product: NewProduct) -> Product;

    /// Merge `patch` into an existing record; `None` if the id is unknown
    fn update(&self, id: u64, patch: ProductPatch) -> Option<Product>;

    /// Remove a record; `false` if the id is unknown
    fn delete(&self, id: u64) -> bool;

    /// Number of stored products
    fn count(&self) -> usize;
}

/// Type alias for a shared repository handle
pub type SharedRepository = Arc<dyn ProductRepository>;
