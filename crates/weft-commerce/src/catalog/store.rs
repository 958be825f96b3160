//! In-memory catalog store.

use crate::catalog::{FacetSummary, Product};
use crate::error::StoreError;
use crate::ids::ProductId;
use std::collections::HashSet;
use tracing::debug;

/// Session-lifetime product store.
///
/// Holds the immutable product list for the session. `load` replaces the
/// contents wholesale; nothing is ever edited in place.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and load a catalog from the external JSON feed.
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        let mut catalog = Self::new();
        catalog.load(products)?;
        Ok(catalog)
    }

    /// Replace the catalog contents.
    ///
    /// Rejects duplicate product ids, leaving the current contents in place on
    /// failure. The loaded list is ordered name-ascending, which is the browse
    /// baseline before the user picks any sort.
    pub fn load(&mut self, mut products: Vec<Product>) -> Result<(), StoreError> {
        let mut seen = HashSet::new();
        for product in &products {
            if !seen.insert(&product.id) {
                return Err(StoreError::DuplicateProductId(product.id.clone()));
            }
        }
        drop(seen);

        products.sort_by(|a, b| a.name.cmp(&b.name));
        debug!(count = products.len(), "catalog loaded");
        self.products = products;
        Ok(())
    }

    /// Read-only view of every product.
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Number of products loaded.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if no catalog has been loaded.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Derive the filter-panel option lists from the loaded products.
    pub fn facets(&self) -> FacetSummary {
        FacetSummary::from_products(&self.products)
    }
}
