//! Money type for representing monetary values.
//!
//! Uses cents-based integer representation so that accumulating line totals
//! never loses precision; rounding happens only where a fractional result is
//! unavoidable (percentages) and at display time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    CAD,
    EUR,
}

impl Currency {
    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::CAD => "CAD",
            Currency::EUR => "EUR",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::CAD => "CA$",
            Currency::EUR => "\u{20ac}",
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "USD" => Some(Currency::USD),
            "CAD" => Some(Currency::CAD),
            "EUR" => Some(Currency::EUR),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in cents. Arithmetic is checked: the fallible operations
/// return `None` on overflow or currency mismatch and callers surface that as
/// an error rather than panicking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in cents.
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub const fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a Money value from a decimal amount.
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        Self::new((amount * 100.0).round() as i64, currency)
    }

    /// Create a zero amount in the given currency.
    pub const fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.amount_cents > 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.amount_cents as f64 / 100.0
    }

    /// Try to add another Money value.
    ///
    /// Returns `None` if the currencies differ or the sum overflows.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        let sum = self.amount_cents.checked_add(other.amount_cents)?;
        Some(Money::new(sum, self.currency))
    }

    /// Try to multiply by a scalar, returning `None` on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        let product = self.amount_cents.checked_mul(factor)?;
        Some(Money::new(product, self.currency))
    }

    /// Calculate a percentage of this amount, rounded to the nearest cent.
    pub fn percentage(&self, percent: f64) -> Money {
        let amount = (self.amount_cents as f64 * percent / 100.0).round() as i64;
        Money::new(amount, self.currency)
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        format!("{}{:.2}", self.currency.symbol(), self.to_decimal())
    }

    /// Format as a display string without symbol (e.g., "49.99").
    pub fn display_amount(&self) -> String {
        format!("{:.2}", self.to_decimal())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Serde adapter for the catalog feed, where prices are plain decimal numbers
/// rather than `{amount_cents, currency}` objects.
pub mod decimal {
    use super::{Currency, Money};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(money: &Money, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(money.to_decimal())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Money, D::Error>
    where
        D: Deserializer<'de>,
    {
        let amount = f64::deserialize(deserializer)?;
        Ok(Money::from_decimal(amount, Currency::default()))
    }
}
