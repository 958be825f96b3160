//! Cart ledger and line item types.

use crate::catalog::Product;
use crate::error::StoreError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Composite identity of a cart line: a product in a chosen size and color.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineKey {
    pub product_id: ProductId,
    pub size: String,
    pub color: String,
}

impl LineKey {
    pub fn new(
        product_id: impl Into<ProductId>,
        size: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            size: size.into(),
            color: color.into(),
        }
    }
}

/// A line in the cart.
///
/// Carries a snapshot of the product's display fields taken at add time, so a
/// line never aliases catalog state and later catalog changes cannot reach it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Product this line was created from.
    pub product_id: ProductId,
    /// Product name at add time.
    pub name: String,
    /// Unit price at add time.
    pub unit_price: Money,
    /// Chosen size.
    pub size: String,
    /// Chosen color name.
    pub color: String,
    /// Quantity, always at least 1.
    pub quantity: i64,
}

impl CartLine {
    fn from_product(product: &Product, size: &str, color: &str) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price: product.price,
            size: size.to_string(),
            color: color.to_string(),
            quantity: 1,
        }
    }

    /// The composite key identifying this line.
    pub fn key(&self) -> LineKey {
        LineKey {
            product_id: self.product_id.clone(),
            size: self.size.clone(),
            color: self.color.clone(),
        }
    }

    fn matches(&self, key: &LineKey) -> bool {
        self.product_id == key.product_id && self.size == key.size && self.color == key.color
    }

    /// Line total (unit price times quantity).
    pub fn line_total(&self) -> Result<Money, StoreError> {
        self.unit_price
            .try_multiply(self.quantity)
            .ok_or(StoreError::Overflow)
    }
}

/// The shopping cart ledger.
///
/// At most one line exists per composite key; lines keep insertion order.
/// Mutations are synchronous and touch nothing beyond the ledger itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product in the chosen size and color.
    ///
    /// Both selections are required. A repeat add of the same combination
    /// increments the existing line instead of creating a second one. Returns
    /// a copy of the ledger line after the add.
    pub fn add(&mut self, product: &Product, size: &str, color: &str) -> Result<CartLine, StoreError> {
        if size.is_empty() {
            return Err(StoreError::SelectionRequired("size"));
        }
        if color.is_empty() {
            return Err(StoreError::SelectionRequired("color"));
        }

        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|l| l.product_id == product.id && l.size == size && l.color == color)
        {
            line.quantity = line.quantity.checked_add(1).ok_or(StoreError::Overflow)?;
            debug!(product = %line.product_id, size, color, quantity = line.quantity, "cart line incremented");
            return Ok(line.clone());
        }

        let line = CartLine::from_product(product, size, color);
        debug!(product = %line.product_id, size, color, "cart line added");
        self.lines.push(line.clone());
        Ok(line)
    }

    /// Overwrite a line's quantity from a direct user edit.
    ///
    /// Quantities below 1 are rejected with the ledger left unchanged;
    /// removing a line is its own explicit action, never a consequence of
    /// quantity math. Returns false when no line has the given key.
    pub fn set_quantity(&mut self, key: &LineKey, quantity: i64) -> Result<bool, StoreError> {
        if quantity < 1 {
            return Err(StoreError::InvalidQuantity(quantity));
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.matches(key)) {
            line.quantity = quantity;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Remove a line. Absent keys are a no-op.
    pub fn remove(&mut self, key: &LineKey) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|l| !l.matches(key));
        let removed = self.lines.len() < len_before;
        if removed {
            debug!(product = %key.product_id, size = %key.size, color = %key.color, "cart line removed");
        }
        removed
    }

    /// Empty the cart, e.g. on checkout completion.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Look up a line by key.
    pub fn line(&self, key: &LineKey) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.matches(key))
    }

    /// Total item count, summing quantities.
    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Number of distinct lines.
    pub fn unique_line_count(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn product(id: &str, name: &str, price_cents: i64) -> Product {
        Product::new(id, name, Money::new(price_cents, Currency::USD))
    }

    #[test]
    fn test_add_creates_line_with_snapshot() {
        let mut cart = Cart::new();
        let tee = product("tee-1", "Basic Tee", 1999);

        let line = cart.add(&tee, "M", "Black").unwrap();
        assert_eq!(line.quantity, 1);
        assert_eq!(line.name, "Basic Tee");
        assert_eq!(line.unit_price.amount_cents, 1999);
        assert_eq!(cart.unique_line_count(), 1);
    }

    #[test]
    fn test_repeat_add_increments_single_line() {
        let mut cart = Cart::new();
        let tee = product("tee-1", "Basic Tee", 1999);

        cart.add(&tee, "M", "Black").unwrap();
        let line = cart.add(&tee, "M", "Black").unwrap();

        assert_eq!(cart.unique_line_count(), 1);
        assert_eq!(line.quantity, 2);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_distinct_size_or_color_makes_new_line() {
        let mut cart = Cart::new();
        let tee = product("tee-1", "Basic Tee", 1999);

        cart.add(&tee, "M", "Black").unwrap();
        cart.add(&tee, "L", "Black").unwrap();
        cart.add(&tee, "M", "White").unwrap();

        assert_eq!(cart.unique_line_count(), 3);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_add_requires_size_and_color() {
        let mut cart = Cart::new();
        let tee = product("tee-1", "Basic Tee", 1999);

        let err = cart.add(&tee, "", "Black").unwrap_err();
        assert!(matches!(err, StoreError::SelectionRequired("size")));

        let err = cart.add(&tee, "M", "").unwrap_err();
        assert!(matches!(err, StoreError::SelectionRequired("color")));

        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_overwrites() {
        let mut cart = Cart::new();
        let tee = product("tee-1", "Basic Tee", 1999);
        cart.add(&tee, "M", "Black").unwrap();

        let key = LineKey::new("tee-1", "M", "Black");
        assert!(cart.set_quantity(&key, 5).unwrap());
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_set_quantity_rejects_below_one() {
        let mut cart = Cart::new();
        let tee = product("tee-1", "Basic Tee", 1999);
        cart.add(&tee, "M", "Black").unwrap();
        let key = LineKey::new("tee-1", "M", "Black");

        for quantity in [0, -3] {
            let err = cart.set_quantity(&key, quantity).unwrap_err();
            assert!(matches!(err, StoreError::InvalidQuantity(q) if q == quantity));
        }

        // Failed edits leave the line untouched.
        assert_eq!(cart.line(&key).unwrap().quantity, 1);
    }

    #[test]
    fn test_set_quantity_absent_key() {
        let mut cart = Cart::new();
        let key = LineKey::new("ghost", "M", "Black");
        assert!(!cart.set_quantity(&key, 2).unwrap());
    }

    #[test]
    fn test_remove_line() {
        let mut cart = Cart::new();
        let tee = product("tee-1", "Basic Tee", 1999);
        cart.add(&tee, "M", "Black").unwrap();

        let key = LineKey::new("tee-1", "M", "Black");
        assert!(cart.remove(&key));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_absent_key_is_noop() {
        let mut cart = Cart::new();
        let tee = product("tee-1", "Basic Tee", 1999);
        cart.add(&tee, "M", "Black").unwrap();

        assert!(!cart.remove(&LineKey::new("ghost", "M", "Black")));
        assert_eq!(cart.unique_line_count(), 1);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        let tee = product("tee-1", "Basic Tee", 1999);
        cart.add(&tee, "M", "Black").unwrap();
        cart.add(&tee, "L", "Black").unwrap();

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_snapshot_does_not_alias_catalog() {
        let mut cart = Cart::new();
        let mut tee = product("tee-1", "Basic Tee", 1999);
        cart.add(&tee, "M", "Black").unwrap();

        // A later catalog price change must not reach the existing line.
        tee.price = Money::new(2499, Currency::USD);
        let key = LineKey::new("tee-1", "M", "Black");
        assert_eq!(cart.line(&key).unwrap().unit_price.amount_cents, 1999);
    }

    #[test]
    fn test_lines_keep_insertion_order() {
        let mut cart = Cart::new();
        cart.add(&product("b", "B Tee", 1000), "M", "Black").unwrap();
        cart.add(&product("a", "A Tee", 1000), "M", "Black").unwrap();

        let ids: Vec<&str> = cart.lines().iter().map(|l| l.product_id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }
}
