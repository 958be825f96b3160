//! Browse query: the filter-then-sort pipeline behind the product grid.

use crate::browse::filter::{self, Facet, FilterSelection};
use crate::browse::sort::{self, SortKey};
use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// A browse query over the loaded catalog.
///
/// Owned by the UI layer as part of its session state; `run` derives the
/// displayed list without touching the catalog or the query itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BrowseQuery {
    /// Active filter values.
    pub selection: FilterSelection,
    /// Sort order for the surviving products.
    pub sort: SortKey,
}

impl BrowseQuery {
    /// Create a query with no filters and the baseline sort.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle a filter value on.
    pub fn with_filter(mut self, facet: Facet, value: impl Into<String>) -> Self {
        self.selection.toggle(facet, value);
        self
    }

    /// Set the sort key.
    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Compute the displayed product list: filter, then stable sort.
    pub fn run<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        let matched = filter::apply(products, &self.selection);
        sort::sort(&matched, self.sort)
    }
}
