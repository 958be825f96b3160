//! Product record types.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A color option on a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ColorOption {
    /// Display name (e.g., "Heather Grey").
    pub name: String,
    /// Hex swatch value (e.g., "#9a9a9a").
    pub hex: String,
}

impl ColorOption {
    pub fn new(name: impl Into<String>, hex: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hex: hex.into(),
        }
    }
}

/// A product in the catalog.
///
/// Field names and shapes follow the external catalog feed. Records are
/// created once at load time and never mutated; the cart snapshots the fields
/// it needs instead of holding references into the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Unit price.
    #[serde(with = "crate::money::decimal")]
    pub price: Money,
    /// Category (e.g., "hoodies").
    pub category: String,
    /// Target gender line.
    pub gender: String,
    /// Available sizes, in merchandising order.
    pub sizes: Vec<String>,
    /// Available colors, unique by name.
    #[serde(rename = "color")]
    pub colors: Vec<ColorOption>,
    /// Long-form description, display only.
    #[serde(default)]
    pub description: String,
    /// Fabric blurb, display only.
    #[serde(default)]
    pub material: String,
}

impl Product {
    /// Create a product with empty size, color, and display fields.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Money) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            category: String::new(),
            gender: String::new(),
            sizes: Vec::new(),
            colors: Vec::new(),
            description: String::new(),
            material: String::new(),
        }
    }

    /// Check whether the product is offered in the given size.
    pub fn has_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s == size)
    }

    /// Check whether the product is offered in the given color, by name.
    pub fn has_color(&self, color: &str) -> bool {
        self.colors.iter().any(|c| c.name == color)
    }

    /// Look up a color option by name.
    pub fn color(&self, name: &str) -> Option<&ColorOption> {
        self.colors.iter().find(|c| c.name == name)
    }
}
