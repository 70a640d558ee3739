use crate::models::{Listing, Source};
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for all listing feeds
/// This allows easy addition of new aggregator sites in the future
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Fetch the current listings from this source
    async fn fetch(&self) -> Result<Vec<Listing>>;

    /// Which aggregator site this feed covers
    fn source(&self) -> Source;
}
