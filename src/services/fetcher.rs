//! Rate-limited page fetcher.
//!
//! Pages come from the local cache when enabled, otherwise from the network.
//! Network requests are spaced at least `min_interval` apart across the whole
//! run; cache hits neither wait nor reset the throttle.

use std::thread;
use std::time::{Duration, Instant};

use scraper::Html;

use crate::error::Result;
use crate::models::FetcherConfig;
use crate::storage::PageCache;
use crate::utils::ParserBackend;
use crate::utils::http::Transport;
use crate::utils::url::{join, normalize_path};

/// Counters reported at the end of a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FetchStats {
    pub network_requests: usize,
    pub cache_hits: usize,
}

/// Fetches and parses documentation pages by relative path.
pub struct PageFetcher<T: Transport> {
    transport: T,
    base_url: String,
    backend: ParserBackend,
    cache: Option<PageCache>,
    min_interval: Duration,
    last_request: Option<Instant>,
    stats: FetchStats,
}

impl<T: Transport> PageFetcher<T> {
    /// Create a fetcher without a cache.
    pub fn new(transport: T, config: &FetcherConfig, backend: ParserBackend) -> Self {
        Self {
            transport,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            backend,
            cache: None,
            min_interval: Duration::from_millis(config.min_interval_ms),
            last_request: None,
            stats: FetchStats::default(),
        }
    }

    /// Read from and write to `cache`.
    pub fn with_cache(mut self, cache: PageCache) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn stats(&self) -> FetchStats {
        self.stats
    }

    /// Fetch a page and parse it with the configured backend.
    pub fn fetch(&mut self, path: &str) -> Result<Html> {
        let path = normalize_path(&self.base_url, path);
        let bytes = self.fetch_normalized(&path)?;
        self.backend.parse(&path, &bytes)
    }

    /// Fetch the raw bytes of a page.
    pub fn fetch_bytes(&mut self, path: &str) -> Result<Vec<u8>> {
        let path = normalize_path(&self.base_url, path);
        self.fetch_normalized(&path)
    }

    fn fetch_normalized(&mut self, path: &str) -> Result<Vec<u8>> {
        if let Some(cache) = &self.cache {
            if let Some(bytes) = cache.read(path) {
                log::debug!("Cache hit for {}", path);
                self.stats.cache_hits += 1;
                return Ok(bytes);
            }
            log::debug!("Cache miss for {}", path);
        }

        self.throttle();
        log::info!("Retrieving {}...", path);
        let url = join(&self.base_url, path)?;
        let result = self.transport.get(&url);
        self.last_request = Some(Instant::now());
        let bytes = result?;
        self.stats.network_requests += 1;

        if let Some(cache) = &self.cache {
            cache.write(path, &bytes)?;
        }
        Ok(bytes)
    }

    /// Sleep until `min_interval` has passed since the last network request.
    fn throttle(&self) {
        if let Some(last) = self.last_request {
            let wait = self.min_interval.saturating_sub(last.elapsed());
            if !wait.is_zero() {
                log::debug!("Throttling for {} ms", wait.as_millis());
                thread::sleep(wait);
            }
        }
    }
}
