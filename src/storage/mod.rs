//! Local filesystem persistence.
//!
//! - `PageCache`: raw page bodies keyed by the hash of their request path
//! - `write_map`: the single `map.json` produced by a run

pub mod cache;
pub mod output;

pub use cache::PageCache;
pub use output::{MAP_FILE, write_map};
