//! Order totals derived from the cart and shipping selections.

use crate::cart::{CartLine, ShippingLocation, ShippingSelection};
use crate::error::StoreError;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Merchandise total above which shipping is free. The boundary is exclusive:
/// an order of exactly this amount still pays shipping.
pub const FREE_SHIPPING_THRESHOLD_CENTS: i64 = 500_00;

/// Sales tax applied to merchandise shipped within Canada.
pub const CANADA_TAX_PERCENT: f64 = 5.0;

/// Order totals for the cart summary.
///
/// Derived on every cart or shipping change, never stored. Merchandise
/// accumulates in exact cents; the only rounding is the tax percentage.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderTotals {
    /// Sum of unit price times quantity across all lines.
    pub merchandise_total: Money,
    /// Flat shipping rate, or zero above the free-shipping threshold.
    pub shipping_cost: Money,
    /// Tax on merchandise only; shipping is never taxed.
    pub tax_cost: Money,
    /// Merchandise plus shipping plus tax.
    pub order_total: Money,
}

impl OrderTotals {
    /// Compute totals for the given cart lines and shipping selections.
    pub fn compute(lines: &[CartLine], shipping: &ShippingSelection) -> Result<Self, StoreError> {
        let currency = lines
            .first()
            .map(|line| line.unit_price.currency)
            .unwrap_or_default();

        let mut merchandise_total = Money::zero(currency);
        for line in lines {
            let line_total = line.line_total()?;
            merchandise_total = merchandise_total
                .try_add(&line_total)
                .ok_or(StoreError::Overflow)?;
        }

        let shipping_cost = if merchandise_total.amount_cents > FREE_SHIPPING_THRESHOLD_CENTS
            || merchandise_total.is_zero()
        {
            Money::zero(currency)
        } else {
            shipping.rate(currency)
        };

        let tax_cost = if shipping.location == ShippingLocation::Canada {
            merchandise_total.percentage(CANADA_TAX_PERCENT)
        } else {
            Money::zero(currency)
        };

        let order_total = merchandise_total
            .try_add(&shipping_cost)
            .and_then(|total| total.try_add(&tax_cost))
            .ok_or(StoreError::Overflow)?;

        Ok(Self {
            merchandise_total,
            shipping_cost,
            tax_cost,
            order_total,
        })
    }

    /// Whether the order cleared the free-shipping threshold.
    pub fn has_free_shipping(&self) -> bool {
        self.merchandise_total.is_positive() && self.shipping_cost.is_zero()
    }
}
