//! # In-Memory Product Store
//!
//! Single-lock product store. The map and the id counter live behind one
//! mutex, so every operation sees a consistent snapshot and id assignment
//! never races.

use crate::product::{NewProduct, Product, ProductPatch};
use crate::repository::ProductRepository;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use tracing::debug;

const FIRST_ID: u64 = 1;

#[derive(Debug)]
struct StoreInner {
    products: BTreeMap<u64, Product>,
    next_id: u64,
}

impl Default for StoreInner {
    fn default() -> Self {
        Self {
            products: BTreeMap::new(),
            next_id: FIRST_ID,
        }
    }
}

/// Process-local product store
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    inner: Mutex<StoreInner>,
}

impl InMemoryProductStore {
    /// Create an empty store; the first saved product gets id 1
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty the store and reset the id counter to 1.
    ///
    /// Test harness reset only; no route reaches it.
    pub fn clear(&self) {
        let mut inner = self.inner.lock();
        inner.products.clear();
        inner.next_id = FIRST_ID;
        debug!("product store cleared");
    }
}

impl ProductRepository for InMemoryProductStore {
    fn find_all(&self) -> Vec<Product> {
        self.inner.lock().products.values().cloned().collect()
    }

    fn find_by_id(&self, id: u64) -> Option<Product> {
        self.inner.lock().products.get(&id).cloned()
    }

    fn find_by_name_part(&self, name_part: &str) -> Vec<Product> {
        let needle = name_part.to_lowercase();
        self.inner
            .lock()
            .products
            .values()
            .filter(|p| p.name_contains(&needle))
            .cloned()
            .collect()
    }

    fn save(&self, product: NewProduct) -> Product {
        let mut inner = self.inner.lock();
        let id = inner.next_id;
        inner.next_id += 1;

        let product = Product::from_new(id, product);
        inner.products.insert(id, product.clone());
        debug!(id, "product saved");
        product
    }

    fn update(&self, id: u64, patch: ProductPatch) -> Option<Product> {
        let mut inner = self.inner.lock();
        let product = inner.products.get_mut(&id)?;
        product.apply(patch);
        Some(product.clone())
    }

    fn delete(&self, id: u64) -> bool {
        self.inner.lock().products.remove(&id).is_some()
    }

    fn count(&self) -> usize {
        self.inner.lock().products.len()
    }
}
