pub mod sample;
pub mod traits;

pub use sample::{sample_catalogue, SampleFeed};
pub use traits::ListingSource;

use crate::models::Listing;
use anyhow::{Context, Result};
use tracing::info;

/// Collect listings from every registered source into one catalogue.
/// Store order is feed order; the engine relies on it being stable.
pub async fn aggregate(feeds: &[Box<dyn ListingSource>]) -> Result<Vec<Listing>> {
    let mut catalogue = Vec::new();
    for feed in feeds {
        let listings = feed
            .fetch()
            .await
            .with_context(|| format!("failed to fetch listings from {}", feed.source()))?;
        info!("Fetched {} listings from {}", listings.len(), feed.source());
        catalogue.extend(listings);
    }
    Ok(catalogue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Source;

    #[tokio::test]
    async fn aggregate_preserves_feed_order() {
        let feeds: Vec<Box<dyn ListingSource>> = vec![
            Box::new(SampleFeed::new(Source::ImmoKatanga)),
            Box::new(SampleFeed::new(Source::LogementKatanga)),
            Box::new(SampleFeed::new(Source::MaisonKatanga)),
        ];
        let catalogue = aggregate(&feeds).await.unwrap();
        assert_eq!(catalogue.len(), 15);

        let first_maison = catalogue
            .iter()
            .position(|l| l.source == Source::MaisonKatanga)
            .unwrap();
        assert!(catalogue[..first_maison]
            .iter()
            .all(|l| l.source != Source::MaisonKatanga));
    }
}
