//! Pipeline entry points.
//!
//! - `run_mapper`: fetch the documentation, build the method map and write `map.json`

pub mod map;

pub use map::{MapOptions, MapSummary, build_map, map_with, run_mapper};
