//! Storefront domain logic for Weft, an apparel store.
//!
//! This crate is the pure computation core behind the store UI:
//!
//! - **Catalog**: the immutable session product list and its facet options
//! - **Browse**: faceted filtering and stable sorting of the product grid
//! - **Cart**: the line-item ledger keyed by product, size, and color
//! - **Pricing**: merchandise, shipping, and tax totals for the order summary
//!
//! Rendering, navigation, persistence, and the catalog fetch live in the
//! embedding UI layer. That layer owns the mutable session state and calls
//! into the operations here one user event at a time; every operation runs to
//! completion synchronously, so no internal locking exists. Embedders with
//! more than one thread must serialize cart mutation themselves.
//!
//! # Example
//!
//! ```rust,ignore
//! use weft_commerce::prelude::*;
//!
//! let catalog = Catalog::from_json(feed)?;
//!
//! // Browse: filter to hoodies, cheapest first.
//! let query = BrowseQuery::new()
//!     .with_filter(Facet::Category, "hoodies")
//!     .with_sort(SortKey::PriceAsc);
//! let grid = query.run(catalog.all());
//!
//! // Cart: add a selection and price the order.
//! let mut cart = Cart::new();
//! cart.add(grid[0], "M", "Black")?;
//! let totals = OrderTotals::compute(cart.lines(), &ShippingSelection::default())?;
//! println!("{}", totals.order_total);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod browse;
pub mod cart;
pub mod catalog;

pub use error::StoreError;
pub use ids::ProductId;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::StoreError;
    pub use crate::ids::ProductId;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, ColorOption, FacetSummary, Product};

    // Browse
    pub use crate::browse::{BrowseQuery, Facet, FilterChip, FilterSelection, SortKey};

    // Cart
    pub use crate::cart::{
        Cart, CartLine, LineKey, OrderTotals, ShippingLocation, ShippingMethod,
        ShippingSelection,
    };
}
