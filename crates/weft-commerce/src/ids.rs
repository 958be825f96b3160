//! Type-safe product identifier.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Unique product identifier.
///
/// Catalog feeds are inconsistent about id types (some emit numbers, some
/// strings), so deserialization accepts both and normalizes to a string.
/// Serialization always produces a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ProductId(String);

impl ProductId {
    /// Create an id from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Text(String),
            Number(i64),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Text(s) => ProductId(s),
            Repr::Number(n) => ProductId(n.to_string()),
        })
    }
}
