// src/utils/http.rs

//! HTTP client utilities.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::error::{AppError, Result};
use crate::models::FetcherConfig;

/// Source of raw page bytes.
pub trait Transport {
    /// Issue a GET request and return the response body.
    fn get(&self, url: &str) -> Result<Vec<u8>>;
}

/// Create a configured blocking HTTP client.
pub fn create_client(config: &FetcherConfig) -> Result<Client> {
    // The blocking client otherwise applies its own 30s default.
    Ok(Client::builder()
        .user_agent(&config.user_agent)
        .timeout(config.timeout_secs.map(Duration::from_secs))
        .build()?)
}

/// Network transport backed by a blocking reqwest client.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a transport from fetcher settings.
    pub fn from_config(config: &FetcherConfig) -> Result<Self> {
        Ok(Self::new(create_client(config)?))
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response.bytes()?.to_vec())
    }
}
