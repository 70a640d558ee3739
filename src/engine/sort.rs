use crate::models::Listing;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// Ordering applied to a filtered listing set
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum SortKey {
    /// Featured listings first, store order otherwise
    #[default]
    Featured,
    PriceLow,
    PriceHigh,
    AreaLow,
    AreaHigh,
}

impl SortKey {
    /// Map a UI sort key to a strategy. Unknown keys fall back to
    /// `Featured` rather than failing; a stale select value must never
    /// break the page.
    pub fn parse(key: &str) -> SortKey {
        match key {
            "price-low" => SortKey::PriceLow,
            "price-high" => SortKey::PriceHigh,
            "area-low" => SortKey::AreaLow,
            "area-high" => SortKey::AreaHigh,
            _ => SortKey::Featured,
        }
    }
}

/// Order a listing set by the chosen key.
///
/// Every strategy is a stable sort: listings comparing equal keep their
/// relative input order. The underlying store is never touched.
pub fn sort_listings<'a>(mut listings: Vec<&'a Listing>, key: SortKey) -> Vec<&'a Listing> {
    match key {
        SortKey::PriceLow => listings.sort_by_key(|l| l.price),
        SortKey::PriceHigh => listings.sort_by_key(|l| Reverse(l.price)),
        SortKey::AreaLow => listings.sort_by(|a, b| a.area.total_cmp(&b.area)),
        SortKey::AreaHigh => listings.sort_by(|a, b| b.area.total_cmp(&a.area)),
        SortKey::Featured => listings.sort_by_key(|l| !l.featured),
    }
    listings
}
