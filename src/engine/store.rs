use crate::models::Listing;
use serde::{Deserialize, Serialize};

/// Immutable snapshot of every listing known for the current session.
///
/// Built once per ingestion cycle and handed to the query engine; all
/// engine operations borrow from it and never reorder or mutate it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListingStore {
    listings: Vec<Listing>,
}

impl ListingStore {
    pub fn new(listings: Vec<Listing>) -> Self {
        Self { listings }
    }

    /// All listings in ingestion order
    pub fn all(&self) -> &[Listing] {
        &self.listings
    }

    pub fn get(&self, id: &str) -> Option<&Listing> {
        self.listings.iter().find(|l| l.id == id)
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_fixtures::listing;

    #[test]
    fn lookup_by_id() {
        let store = ListingStore::new(vec![listing("a", 100), listing("b", 200)]);
        assert_eq!(store.len(), 2);
        assert_eq!(store.get("b").map(|l| l.price), Some(200));
        assert!(store.get("missing").is_none());
    }
}
