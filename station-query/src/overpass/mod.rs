//! Overpass API client.
//!
//! Sends one fixed Overpass QL query to the public interpreter and parses
//! the `[out:json]` response. Elements come back in no particular order;
//! ordering is left to the caller.

mod client;
mod error;
mod types;

pub use client::{DEFAULT_BASE_URL, LINE6_STATIONS_QUERY, OverpassClient, OverpassConfig};
pub use error::OverpassError;
pub use types::{Element, ElementTags, OverpassResponse};
