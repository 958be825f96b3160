//! Filter-panel facet options derived from the catalog.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// Distinct option lists for the filter panel.
///
/// Genders, categories, and color names are sorted; sizes keep the order they
/// first appear in across the catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FacetSummary {
    pub genders: Vec<String>,
    pub categories: Vec<String>,
    pub sizes: Vec<String>,
    pub colors: Vec<String>,
}

impl FacetSummary {
    /// Collect the distinct facet values across a product list.
    pub fn from_products(products: &[Product]) -> Self {
        let mut summary = Self::default();
        for product in products {
            push_unique(&mut summary.genders, &product.gender);
            push_unique(&mut summary.categories, &product.category);
            for size in &product.sizes {
                push_unique(&mut summary.sizes, size);
            }
            for color in &product.colors {
                push_unique(&mut summary.colors, &color.name);
            }
        }
        summary.genders.sort();
        summary.categories.sort();
        summary.colors.sort();
        // TODO: order sizes by garment size (XS..XXL) instead of first appearance
        summary
    }

    /// True when no products contributed any values.
    pub fn is_empty(&self) -> bool {
        self.genders.is_empty()
            && self.categories.is_empty()
            && self.sizes.is_empty()
            && self.colors.is_empty()
    }
}

fn push_unique(values: &mut Vec<String>, value: &str) {
    if !values.iter().any(|v| v == value) {
        values.push(value.to_string());
    }
}
