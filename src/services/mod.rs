//! Service layer for the documentation mapper.
//!
//! This module contains the business logic for:
//! - Page retrieval with caching and throttling (`PageFetcher`)
//! - Method and parameter extraction (`extractor`)

pub mod extractor;
mod fetcher;

pub use extractor::{MethodLink, extract_method, method_links};
pub use fetcher::{FetchStats, PageFetcher};

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory transport for tests.

    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::time::Instant;

    use crate::error::{AppError, Result};
    use crate::utils::http::Transport;

    /// Serves canned pages and records every request.
    pub struct FakeTransport {
        base_url: String,
        pages: HashMap<String, Vec<u8>>,
        requests: RefCell<Vec<(String, Instant)>>,
    }

    impl FakeTransport {
        pub fn new(base_url: &str) -> Self {
            Self {
                base_url: base_url.trim_end_matches('/').to_string(),
                pages: HashMap::new(),
                requests: RefCell::new(Vec::new()),
            }
        }

        pub fn with_page(mut self, path: &str, body: &str) -> Self {
            self.pages
                .insert(format!("{}{}", self.base_url, path), body.as_bytes().to_vec());
            self
        }

        pub fn request_count(&self) -> usize {
            self.requests.borrow().len()
        }

        pub fn requested_urls(&self) -> Vec<String> {
            self.requests.borrow().iter().map(|(url, _)| url.clone()).collect()
        }

        pub fn request_times(&self) -> Vec<Instant> {
            self.requests.borrow().iter().map(|(_, at)| *at).collect()
        }
    }

    impl Transport for FakeTransport {
        fn get(&self, url: &str) -> Result<Vec<u8>> {
            self.requests
                .borrow_mut()
                .push((url.to_string(), Instant::now()));
            self.pages.get(url).cloned().ok_or_else(|| AppError::Status {
                url: url.to_string(),
                status: 404,
            })
        }
    }
}
