//! Storefront error types.

use crate::ids::ProductId;
use thiserror::Error;

/// Errors that can occur in storefront operations.
///
/// All of these are local validation failures: the caller rejects the action
/// and carries on, and the state that was being mutated is left unchanged.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Catalog load saw the same product id twice.
    #[error("duplicate product id: {0}")]
    DuplicateProductId(ProductId),

    /// Add-to-cart without an explicit size or color selection.
    #[error("a {0} must be selected before adding to the cart")]
    SelectionRequired(&'static str),

    /// Quantity edit below the minimum of 1.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Arithmetic overflow in a money calculation.
    #[error("arithmetic overflow in money calculation")]
    Overflow,

    /// Catalog JSON did not match the expected feed schema.
    #[error("catalog parse error: {0}")]
    CatalogParse(#[from] serde_json::Error),
}
