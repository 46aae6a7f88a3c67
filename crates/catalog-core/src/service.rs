//! # Catalog Service
//!
//! Business validation in front of a [`ProductRepository`].
//! Read operations pass straight through; writes validate partner input and
//! turn "not there" outcomes into [`CatalogError::NotFound`].

use crate::error::{CatalogError, CatalogResult};
use crate::product::{NewProduct, Product, ProductPatch};
use crate::repository::SharedRepository;
use serde_json::Value;
use tracing::{debug, instrument};

/// Catalog operations exposed to the API layer
#[derive(Clone)]
pub struct CatalogService {
    repository: SharedRepository,
}

impl CatalogService {
    /// Create a service over an injected repository
    pub fn new(repository: SharedRepository) -> Self {
        Self { repository }
    }

    pub fn get_all_products(&self) -> Vec<Product> {
        self.repository.find_all()
    }

    pub fn get_product_by_id(&self, id: u64) -> Option<Product> {
        self.repository.find_by_id(id)
    }

    pub fn get_products_by_name(&self, name: &str) -> Vec<Product> {
        self.repository.find_by_name_part(name)
    }

    pub fn get_products_count(&self) -> usize {
        self.repository.count()
    }

    /// Validate partner JSON and store it as a new product.
    ///
    /// Fails with `Validation` when `name` is missing or empty, when `price`
    /// is missing, or when `price` is negative.
    #[instrument(skip(self, data))]
    pub fn create_product(&self, data: Value) -> CatalogResult<Product> {
        let new = NewProduct::try_from(data)?;
        let product = self.repository.save(new);
        debug!(id = product.id, "product created");
        Ok(product)
    }

    /// Merge partner JSON into an existing product.
    ///
    /// Existence is checked before the payload is looked at, so an unknown id
    /// is always `NotFound`. The check and the write are separate store calls.
    #[instrument(skip(self, data))]
    pub fn update_product(&self, id: u64, data: Value) -> CatalogResult<Product> {
        if self.repository.find_by_id(id).is_none() {
            return Err(CatalogError::NotFound { id });
        }

        let patch = ProductPatch::try_from(data)?;

        // A delete can land between the check above and this write
        self.repository
            .update(id, patch)
            .ok_or(CatalogError::NotFound { id })
    }

    #[instrument(skip(self))]
    pub fn delete_product(&self, id: u64) -> CatalogResult<()> {
        if !self.repository.delete(id) {
            return Err(CatalogError::NotFound { id });
        }
        debug!(id, "product deleted");
        Ok(())
    }
}
