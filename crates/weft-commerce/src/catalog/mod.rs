//! Product catalog module.
//!
//! Contains the product record types, the session catalog store, and the
//! facet option lists derived from it.

mod facets;
mod product;
mod store;

pub use facets::FacetSummary;
pub use product::{ColorOption, Product};
pub use store::Catalog;
