//! Filter selection state and the pure filtering pass.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// A filterable dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Facet {
    Gender,
    Category,
    Size,
    Color,
}

impl Facet {
    /// All facets, in filter-panel display order.
    pub const ALL: [Facet; 4] = [Facet::Gender, Facet::Category, Facet::Size, Facet::Color];

    pub fn as_str(&self) -> &'static str {
        match self {
            Facet::Gender => "gender",
            Facet::Category => "category",
            Facet::Size => "size",
            Facet::Color => "color",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "gender" => Some(Facet::Gender),
            "category" => Some(Facet::Category),
            "size" => Some(Facet::Size),
            "color" => Some(Facet::Color),
            _ => None,
        }
    }
}

/// The active filter values, partitioned by facet.
///
/// An empty facet places no constraint. Values keep toggle-insertion order,
/// which is the order the selected-filter chips render in.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterSelection {
    gender: Vec<String>,
    category: Vec<String>,
    size: Vec<String>,
    color: Vec<String>,
}

/// A selected-filter chip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterChip {
    pub facet: Facet,
    pub value: String,
}

impl FilterSelection {
    /// Create a selection with every facet inactive.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle a facet value; returns true when the value is now active.
    pub fn toggle(&mut self, facet: Facet, value: impl Into<String>) -> bool {
        let value = value.into();
        let values = self.values_mut(facet);
        if let Some(pos) = values.iter().position(|v| *v == value) {
            values.remove(pos);
            false
        } else {
            values.push(value);
            true
        }
    }

    /// Active values for one facet.
    pub fn values(&self, facet: Facet) -> &[String] {
        match facet {
            Facet::Gender => &self.gender,
            Facet::Category => &self.category,
            Facet::Size => &self.size,
            Facet::Color => &self.color,
        }
    }

    fn values_mut(&mut self, facet: Facet) -> &mut Vec<String> {
        match facet {
            Facet::Gender => &mut self.gender,
            Facet::Category => &mut self.category,
            Facet::Size => &mut self.size,
            Facet::Color => &mut self.color,
        }
    }

    /// Whether a specific value is active.
    pub fn is_active(&self, facet: Facet, value: &str) -> bool {
        self.values(facet).iter().any(|v| v == value)
    }

    /// Drop every active value for one facet.
    pub fn clear_facet(&mut self, facet: Facet) {
        self.values_mut(facet).clear();
    }

    /// Drop every active value.
    pub fn clear(&mut self) {
        for facet in Facet::ALL {
            self.values_mut(facet).clear();
        }
    }

    /// True when no facet constrains the browse list.
    pub fn is_empty(&self) -> bool {
        Facet::ALL.iter().all(|&f| self.values(f).is_empty())
    }

    /// Number of active values across all facets.
    pub fn active_count(&self) -> usize {
        Facet::ALL.iter().map(|&f| self.values(f).len()).sum()
    }

    /// Chips for the active values: facet display order, then toggle order.
    pub fn chips(&self) -> Vec<FilterChip> {
        Facet::ALL
            .iter()
            .flat_map(|&facet| {
                self.values(facet).iter().map(move |value| FilterChip {
                    facet,
                    value: value.clone(),
                })
            })
            .collect()
    }

    /// Whether a product survives this selection.
    ///
    /// Facets combine with AND; values within one facet with OR. Gender and
    /// category match exactly; sizes and colors (by name) match when the
    /// product offers at least one active value.
    pub fn matches(&self, product: &Product) -> bool {
        (self.gender.is_empty() || self.gender.iter().any(|g| *g == product.gender))
            && (self.category.is_empty() || self.category.iter().any(|c| *c == product.category))
            && (self.size.is_empty() || self.size.iter().any(|s| product.has_size(s)))
            && (self.color.is_empty() || self.color.iter().any(|c| product.has_color(c)))
    }
}

/// Filter a product list against the active selection.
///
/// Pure and stable: the input is never mutated and surviving products keep
/// their input order. An empty selection returns the full list. Values that
/// match nothing simply produce an empty result, never an error.
pub fn apply<'a>(products: &'a [Product], selection: &FilterSelection) -> Vec<&'a Product> {
    products.iter().filter(|p| selection.matches(p)).collect()
}
