use crate::models::{Listing, Source};
use serde::{Deserialize, Serialize};

/// Share of one aggregator source within a result set
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SourceShare {
    pub source: Source,
    pub count: usize,
    /// Rounded integer percentage of the total; 0 for an empty set
    pub percentage: u32,
}

/// Aggregate figures over a filtered result set, recomputed on every
/// query change. Prices are 0 when the set is empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogueStats {
    pub count: usize,
    pub avg_price: u64,
    pub min_price: u64,
    pub max_price: u64,
    pub featured_count: usize,
    /// One entry per known source, in display order
    pub sources: Vec<SourceShare>,
}

impl CatalogueStats {
    pub fn compute(listings: &[&Listing]) -> CatalogueStats {
        let count = listings.len();
        let total: u64 = listings.iter().map(|l| l.price).sum();
        let avg_price = if count > 0 {
            (total as f64 / count as f64).round() as u64
        } else {
            0
        };
        let min_price = listings.iter().map(|l| l.price).min().unwrap_or(0);
        let max_price = listings.iter().map(|l| l.price).max().unwrap_or(0);
        let featured_count = listings.iter().filter(|l| l.featured).count();

        let sources = Source::ALL
            .iter()
            .map(|&source| {
                let matching = listings.iter().filter(|l| l.source == source).count();
                let percentage = if count > 0 {
                    (matching as f64 / count as f64 * 100.0).round() as u32
                } else {
                    0
                };
                SourceShare {
                    source,
                    count: matching,
                    percentage,
                }
            })
            .collect();

        CatalogueStats {
            count,
            avg_price,
            min_price,
            max_price,
            featured_count,
            sources,
        }
    }
}
