//! Client and aggregation pipeline for the places search provider.
//!
//! [`PlacesClient`] wraps the text-search and place-detail endpoints;
//! [`PlacesClient::search_all`] drives pagination, deduplication, and
//! filtering, and [`PlacesClient::enrich_with_details`] merges per-place
//! detail lookups over the aggregated records.

pub mod aggregate;
pub mod client;
pub mod enrich;
pub mod error;
pub mod types;

pub use aggregate::PaginationOptions;
pub use client::PlacesClient;
pub use error::PlacesError;
pub use types::{LocalizedText, Place, SearchTextResponse};
