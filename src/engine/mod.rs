//! The listing query engine.
//!
//! Pure, synchronous logic over an immutable [`ListingStore`] snapshot:
//! filtering, sorting, pagination, side-by-side comparison, saved
//! searches and derived statistics. No I/O happens here; ingestion and
//! rendering are the callers' business.

pub mod compare;
pub mod filter;
pub mod page;
pub mod saved;
pub mod sort;
pub mod stats;
pub mod store;

pub use compare::{project, ComparisonMatrix, ComparisonSelection};
pub use filter::{count_matches, filter_all, Query};
pub use page::{page_numbers, paginate, Page, PageToken, PAGE_SIZE};
pub use saved::{SavedSearch, SavedSearchRegistry, ValidationError};
pub use sort::{sort_listings, SortKey};
pub use stats::CatalogueStats;
pub use store::ListingStore;
