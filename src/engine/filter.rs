use crate::models::{Listing, PropertyType, Source};
use serde::{Deserialize, Serialize};

/// Full set of active filter criteria at a point in time.
///
/// `Query::default()` is the identity query: every listing matches it.
/// Range bounds are inclusive on both ends and must satisfy min <= max.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Query {
    /// Case-insensitive substring of the listing location; empty = no restriction
    pub location: String,
    pub price_min: u64,
    pub price_max: u64,
    /// Minimum bedroom count; `None` = "any"
    pub bedrooms: Option<u32>,
    /// Minimum bathroom count; `None` = "any"
    pub bathrooms: Option<u32>,
    pub area_min: f64,
    pub area_max: f64,
    /// `None` = all property types
    pub property_type: Option<PropertyType>,
    /// Amenities the listing must all carry, compared case-insensitively.
    pub amenities: Vec<String>,
    /// Allowed sources; empty = no restriction
    pub sources: Vec<Source>,
}

impl Default for Query {
    fn default() -> Self {
        Self {
            location: String::new(),
            price_min: 0,
            price_max: u64::MAX,
            bedrooms: None,
            bathrooms: None,
            area_min: 0.0,
            area_max: f64::MAX,
            property_type: None,
            amenities: Vec::new(),
            sources: Vec::new(),
        }
    }
}

impl Query {
    /// Whether a single listing satisfies every active criterion.
    ///
    /// The amenity criterion is enforced here like every other one. The
    /// source sites' own search forms collect amenities without applying
    /// them; we deliberately do not reproduce that.
    pub fn matches(&self, listing: &Listing) -> bool {
        let matches_location = self.location.is_empty()
            || listing
                .location
                .to_lowercase()
                .contains(&self.location.to_lowercase());

        let matches_price = listing.price >= self.price_min && listing.price <= self.price_max;

        let matches_bedrooms = match self.bedrooms {
            None => true,
            Some(floor) => listing.bedrooms >= floor,
        };

        let matches_bathrooms = match self.bathrooms {
            None => true,
            Some(floor) => listing.bathrooms >= floor,
        };

        let matches_area = listing.area >= self.area_min && listing.area <= self.area_max;

        let matches_type = match self.property_type {
            None => true,
            Some(ty) => listing.property_type == ty,
        };

        let matches_amenities = self.amenities.iter().all(|wanted| {
            listing
                .amenities
                .iter()
                .any(|a| a.eq_ignore_ascii_case(wanted))
        });

        let matches_source = self.sources.is_empty() || self.sources.contains(&listing.source);

        matches_location
            && matches_price
            && matches_bedrooms
            && matches_bathrooms
            && matches_area
            && matches_type
            && matches_amenities
            && matches_source
    }
}

/// Apply a query to every listing, preserving store order.
pub fn filter_all<'a>(listings: &'a [Listing], query: &Query) -> Vec<&'a Listing> {
    listings.iter().filter(|l| query.matches(l)).collect()
}

/// Number of listings a query matches. Pure primitive for the alerting
/// collaborator; the saved-search registry never calls this itself.
pub fn count_matches(listings: &[Listing], query: &Query) -> usize {
    listings.iter().filter(|l| query.matches(l)).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_fixtures::listing;

    #[test]
    fn identity_query_matches_everything() {
        let all = vec![listing("a", 100), listing("b", 3_500_000)];
        let query = Query::default();
        assert!(all.iter().all(|l| query.matches(l)));
    }

    #[test]
    fn location_is_case_insensitive_substring() {
        let l = listing("a", 100); // "Lubumbashi, Centre-ville"
        let query = Query {
            location: "lubumbashi".into(),
            ..Query::default()
        };
        assert!(query.matches(&l));

        let query = Query {
            location: "Kolwezi".into(),
            ..Query::default()
        };
        assert!(!query.matches(&l));
    }

    #[test]
    fn price_range_is_inclusive() {
        let l = listing("a", 500);
        let query = Query {
            price_min: 500,
            price_max: 500,
            ..Query::default()
        };
        assert!(query.matches(&l));

        let query = Query {
            price_min: 501,
            ..Query::default()
        };
        assert!(!query.matches(&l));
    }

    #[test]
    fn bedroom_floor_and_any() {
        let l = listing("a", 100); // 2 bedrooms
        assert!(Query { bedrooms: None, ..Query::default() }.matches(&l));
        assert!(Query { bedrooms: Some(2), ..Query::default() }.matches(&l));
        assert!(!Query { bedrooms: Some(3), ..Query::default() }.matches(&l));
    }

    #[test]
    fn area_range_is_inclusive() {
        let l = listing("a", 100); // 85 m²
        let query = Query {
            area_min: 85.0,
            area_max: 85.0,
            ..Query::default()
        };
        assert!(query.matches(&l));

        let query = Query {
            area_max: 84.0,
            ..Query::default()
        };
        assert!(!query.matches(&l));
    }

    #[test]
    fn type_and_source_restrictions() {
        use crate::models::{PropertyType, Source};
        let l = listing("a", 100); // Apartment from ImmoKatanga
        let query = Query {
            property_type: Some(PropertyType::Villa),
            ..Query::default()
        };
        assert!(!query.matches(&l));

        let query = Query {
            sources: vec![Source::LogementKatanga],
            ..Query::default()
        };
        assert!(!query.matches(&l));

        let query = Query {
            property_type: Some(PropertyType::Apartment),
            sources: vec![Source::ImmoKatanga, Source::MaisonKatanga],
            ..Query::default()
        };
        assert!(query.matches(&l));
    }

    #[test]
    fn required_amenities_must_all_be_present() {
        let mut l = listing("a", 100);
        l.amenities = vec!["Parking".into(), "Jardin".into()];

        let query = Query {
            amenities: vec!["parking".into()],
            ..Query::default()
        };
        assert!(query.matches(&l), "amenity match is case-insensitive");

        let query = Query {
            amenities: vec!["Parking".into(), "Piscine".into()],
            ..Query::default()
        };
        assert!(!query.matches(&l), "one missing amenity rejects the listing");
    }

    #[test]
    fn filter_all_is_stable_and_idempotent() {
        let all = vec![listing("a", 100), listing("b", 900), listing("c", 200)];
        let query = Query {
            price_max: 500,
            ..Query::default()
        };
        let once = filter_all(&all, &query);
        let ids: Vec<_> = once.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);

        let owned: Vec<Listing> = once.iter().map(|l| (**l).clone()).collect();
        let twice = filter_all(&owned, &query);
        assert_eq!(twice.len(), once.len());
    }

    #[test]
    fn count_matches_agrees_with_filter_all() {
        let all = vec![listing("a", 100), listing("b", 900)];
        let query = Query {
            price_max: 500,
            ..Query::default()
        };
        assert_eq!(count_matches(&all, &query), filter_all(&all, &query).len());
    }
}
