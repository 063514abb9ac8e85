// src/models/mod.rs

//! Domain models for the documentation mapper.

mod api_map;
mod config;

// Re-export all public types
pub use api_map::{ApiMap, Category, MethodEntry, Parameters};
pub use config::{Config, FetcherConfig, MIN_REQUEST_INTERVAL_MS};
