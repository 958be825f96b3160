//! Sort keys and the stable sorting pass.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sort options for the browse list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    /// Name A-Z; also the catalog's baseline order.
    #[default]
    NameAsc,
    /// Name Z-A.
    NameDesc,
    /// Price high to low.
    PriceDesc,
    /// Price low to high.
    PriceAsc,
    /// Category A-Z.
    CategoryAsc,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::NameAsc => "nameAsc",
            SortKey::NameDesc => "nameDesc",
            SortKey::PriceDesc => "priceDesc",
            SortKey::PriceAsc => "priceAsc",
            SortKey::CategoryAsc => "categoryAsc",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "nameasc" => Some(SortKey::NameAsc),
            "namedesc" => Some(SortKey::NameDesc),
            "pricedesc" => Some(SortKey::PriceDesc),
            "priceasc" => Some(SortKey::PriceAsc),
            "categoryasc" => Some(SortKey::CategoryAsc),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::NameAsc => "Name: A-Z",
            SortKey::NameDesc => "Name: Z-A",
            SortKey::PriceDesc => "Price: High to Low",
            SortKey::PriceAsc => "Price: Low to High",
            SortKey::CategoryAsc => "Category: A-Z",
        }
    }

    /// Comparator for this key. Ties are left to sort stability, so equal
    /// keys keep their prior relative order.
    fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortKey::NameAsc => a.name.cmp(&b.name),
            SortKey::NameDesc => b.name.cmp(&a.name),
            SortKey::PriceDesc => b.price.amount_cents.cmp(&a.price.amount_cents),
            SortKey::PriceAsc => a.price.amount_cents.cmp(&b.price.amount_cents),
            SortKey::CategoryAsc => a.category.cmp(&b.category),
        }
    }
}

/// Order a browse list by the given key.
///
/// Returns a new sequence; the input is untouched. The sort is stable.
pub fn sort<'a>(products: &[&'a Product], key: SortKey) -> Vec<&'a Product> {
    let mut sorted = products.to_vec();
    sorted.sort_by(|a, b| key.compare(a, b));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};

    fn product(id: &str, name: &str, price_cents: i64, category: &str) -> Product {
        let mut p = Product::new(id, name, Money::new(price_cents, Currency::USD));
        p.category = category.to_string();
        p
    }

    fn fixture() -> Vec<Product> {
        vec![
            product("1", "Zip Hoodie", 6450, "hoodies"),
            product("2", "Basic Tee", 1999, "tees"),
            product("3", "Crew Tee", 1999, "tees"),
            product("4", "Joggers", 4500, "pants"),
        ]
    }

    #[test]
    fn test_name_asc_and_desc() {
        let products = fixture();
        let refs: Vec<&Product> = products.iter().collect();

        let asc = sort(&refs, SortKey::NameAsc);
        let names: Vec<&str> = asc.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Basic Tee", "Crew Tee", "Joggers", "Zip Hoodie"]);

        let desc = sort(&refs, SortKey::NameDesc);
        let names: Vec<&str> = desc.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Zip Hoodie", "Joggers", "Crew Tee", "Basic Tee"]);
    }

    #[test]
    fn test_price_asc() {
        let products = fixture();
        let refs: Vec<&Product> = products.iter().collect();

        let by_price = sort(&refs, SortKey::PriceAsc);
        let prices: Vec<i64> = by_price.iter().map(|p| p.price.amount_cents).collect();
        assert_eq!(prices, vec![1999, 1999, 4500, 6450]);
    }

    #[test]
    fn test_category_asc() {
        let products = fixture();
        let refs: Vec<&Product> = products.iter().collect();

        let by_category = sort(&refs, SortKey::CategoryAsc);
        let cats: Vec<&str> = by_category.iter().map(|p| p.category.as_str()).collect();
        assert_eq!(cats, vec!["hoodies", "pants", "tees", "tees"]);
    }

    #[test]
    fn test_stability_on_equal_keys() {
        let products = fixture();
        let refs: Vec<&Product> = products.iter().collect();

        // "Zip Hoodie" and "Basic Tee"/"Crew Tee" tie on nothing here, but the
        // two tees tie on price; input order (Basic before Crew) must survive.
        let by_price = sort(&refs, SortKey::PriceAsc);
        assert_eq!(by_price[0].id.as_str(), "2");
        assert_eq!(by_price[1].id.as_str(), "3");
    }

    #[test]
    fn test_sort_is_idempotent() {
        let products = fixture();
        let refs: Vec<&Product> = products.iter().collect();

        let once = sort(&refs, SortKey::PriceDesc);
        let twice = sort(&once, SortKey::PriceDesc);
        let once_ids: Vec<&str> = once.iter().map(|p| p.id.as_str()).collect();
        let twice_ids: Vec<&str> = twice.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(once_ids, twice_ids);
    }

    #[test]
    fn test_input_not_mutated() {
        let products = fixture();
        let refs: Vec<&Product> = products.iter().collect();

        let _ = sort(&refs, SortKey::NameDesc);
        assert_eq!(refs[0].id.as_str(), "1");
    }

    #[test]
    fn test_case_sensitive_lexicographic() {
        let products = vec![
            product("1", "apple cap", 1000, "caps"),
            product("2", "Zip Hoodie", 1000, "hoodies"),
        ];
        let refs: Vec<&Product> = products.iter().collect();

        // Uppercase sorts before lowercase in byte order.
        let asc = sort(&refs, SortKey::NameAsc);
        assert_eq!(asc[0].name, "Zip Hoodie");
    }

    #[test]
    fn test_key_round_trip() {
        for key in [
            SortKey::NameAsc,
            SortKey::NameDesc,
            SortKey::PriceDesc,
            SortKey::PriceAsc,
            SortKey::CategoryAsc,
        ] {
            assert_eq!(SortKey::from_str(key.as_str()), Some(key));
        }
        assert_eq!(SortKey::from_str("relevance"), None);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(SortKey::PriceAsc.display_name(), "Price: Low to High");
        assert_eq!(SortKey::default().display_name(), "Name: A-Z");
    }
}
