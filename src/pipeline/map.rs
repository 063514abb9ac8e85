// src/pipeline/map.rs

//! Documentation mapping pipeline.
//!
//! One run walks `INIT -> cache dir -> listing page -> detail pages -> map.json`
//! and stops at the first error. Nothing is written unless every page was
//! fetched and extracted.

use std::path::PathBuf;

use crate::error::Result;
use crate::models::{ApiMap, Category, Config};
use crate::services::{FetchStats, PageFetcher, extract_method, method_links};
use crate::storage::{PageCache, write_map};
use crate::utils::ParserBackend;
use crate::utils::http::Transport;

/// Per-run settings supplied on the command line.
#[derive(Debug, Clone)]
pub struct MapOptions {
    /// API version label embedded in the map
    pub api_version: String,
    /// Cache directory, `None` to always hit the network
    pub cache_dir: Option<PathBuf>,
    /// Directory receiving `map.json`
    pub output_dir: PathBuf,
    /// Indent the generated JSON
    pub pretty: bool,
    /// HTML parser backend
    pub parser: ParserBackend,
}

/// Outcome of a completed run.
#[derive(Debug, Clone)]
pub struct MapSummary {
    pub output_path: PathBuf,
    pub method_count: usize,
    pub fetch: FetchStats,
}

/// Fetch the listing page and every method it links to.
///
/// The listing does not say which methods are site-scoped, so every method is
/// filed under [`Category::Network`] and the site list stays empty.
pub fn build_map<T: Transport>(
    fetcher: &mut PageFetcher<T>,
    root_path: &str,
    api_version: &str,
) -> Result<ApiMap> {
    let mut map = ApiMap::new(api_version);

    let root = fetcher.fetch(root_path)?;
    let links = method_links(&root)?;
    log::info!("Found {} methods on {}", links.len(), root_path);

    for (idx, link) in links.iter().enumerate() {
        log::debug!("[{}/{}] {}", idx + 1, links.len(), link.name);
        let detail = fetcher.fetch(&link.href)?;
        let entry = extract_method(&link.name, &detail)?;
        map.push(Category::Network, entry);
    }

    Ok(map)
}

/// Run the mapper end to end and write `map.json`.
pub fn run_mapper<T: Transport>(
    transport: T,
    config: &Config,
    options: &MapOptions,
) -> Result<MapSummary> {
    config.validate()?;

    log::info!(
        "Mapping {}{} (API version {}, parser {})",
        config.fetcher.base_url,
        config.fetcher.root_path,
        options.api_version,
        options.parser
    );
    let fetcher = PageFetcher::new(transport, &config.fetcher, options.parser);
    map_with(fetcher, &config.fetcher.root_path, options)
}

/// Run the mapper with an already configured fetcher.
pub fn map_with<T: Transport>(
    mut fetcher: PageFetcher<T>,
    root_path: &str,
    options: &MapOptions,
) -> Result<MapSummary> {
    if let Some(dir) = &options.cache_dir {
        let cache = PageCache::new(dir);
        cache.ensure_dir()?;
        log::info!("Using page cache at {}", cache.dir().display());
        fetcher = fetcher.with_cache(cache);
    }

    let map = build_map(&mut fetcher, root_path, &options.api_version)?;

    let output_path = write_map(&options.output_dir, &map, options.pretty)?;
    let summary = MapSummary {
        output_path,
        method_count: map.method_count(),
        fetch: fetcher.stats(),
    };

    log::info!(
        "Wrote {} methods to {}",
        summary.method_count,
        summary.output_path.display()
    );
    log::info!(
        "Network requests: {}, cache hits: {}",
        summary.fetch.network_requests,
        summary.fetch.cache_hits
    );

    Ok(summary)
}
