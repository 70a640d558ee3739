//! Immo Scout — aggregated real-estate catalogue for the Katanga region.
//!
//! Listings from several source sites are pulled through the
//! [`sources`] seam into one immutable [`engine::ListingStore`]; the
//! [`engine`] module then answers every catalogue question (filter,
//! sort, paginate, compare, saved searches, statistics) as a pure
//! function over that snapshot.

pub mod engine;
pub mod models;
pub mod sources;
