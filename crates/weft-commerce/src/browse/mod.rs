//! Browse module.
//!
//! Faceted filtering, stable sorting, and the query pipeline that turns the
//! loaded catalog plus the user's selections into the displayed product list.

pub mod filter;
pub mod query;
pub mod sort;

pub use filter::{Facet, FilterChip, FilterSelection};
pub use query::BrowseQuery;
pub use sort::SortKey;
