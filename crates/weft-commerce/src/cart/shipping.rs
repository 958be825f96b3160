//! Shipping method and destination types.

use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Shipping speed tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum ShippingMethod {
    #[default]
    Standard,
    Express,
    Priority,
}

impl ShippingMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShippingMethod::Standard => "standard",
            ShippingMethod::Express => "express",
            ShippingMethod::Priority => "priority",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "standard" => Some(ShippingMethod::Standard),
            "express" => Some(ShippingMethod::Express),
            "priority" => Some(ShippingMethod::Priority),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ShippingMethod::Standard => "Standard",
            ShippingMethod::Express => "Express",
            ShippingMethod::Priority => "Priority",
        }
    }
}

/// Shipping destinations with distinct rate columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum ShippingLocation {
    #[default]
    Canada,
    UnitedStates,
    International,
}

impl ShippingLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShippingLocation::Canada => "canada",
            ShippingLocation::UnitedStates => "unitedStates",
            ShippingLocation::International => "international",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "canada" => Some(ShippingLocation::Canada),
            "unitedstates" => Some(ShippingLocation::UnitedStates),
            "international" => Some(ShippingLocation::International),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ShippingLocation::Canada => "Canada",
            ShippingLocation::UnitedStates => "United States",
            ShippingLocation::International => "International",
        }
    }
}

/// The shopper's shipping choices, supplied by the UI controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct ShippingSelection {
    pub method: ShippingMethod,
    pub location: ShippingLocation,
}

impl ShippingSelection {
    pub fn new(method: ShippingMethod, location: ShippingLocation) -> Self {
        Self { method, location }
    }

    /// Flat rate for this method and destination.
    pub fn rate(&self, currency: Currency) -> Money {
        use ShippingLocation::*;
        use ShippingMethod::*;

        let cents = match (self.method, self.location) {
            (Standard, Canada) => 10_00,
            (Standard, UnitedStates) => 15_00,
            (Standard, International) => 20_00,
            (Express, Canada) | (Express, UnitedStates) => 25_00,
            (Express, International) => 30_00,
            (Priority, Canada) => 35_00,
            (Priority, UnitedStates) | (Priority, International) => 50_00,
        };
        Money::new(cents, currency)
    }
}
