use std::io::Read;
use std::time::Duration;

use reqwest::blocking::Client;

use super::{decode_records, CollectionSource, ImageSource};
use crate::app::types::Record;
use crate::errors::BrowseError;

/// Blocking HTTP implementation of both sources. No retries.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self, BrowseError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("beerZoom/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| BrowseError::network("<client>", e))?;
        Ok(HttpFetcher { client })
    }

    fn get_bytes(&self, url: &str) -> Result<Vec<u8>, BrowseError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| BrowseError::network(url, e))?;
        if !response.status().is_success() {
            return Err(BrowseError::network(
                url,
                format!("status {}", response.status()),
            ));
        }
        let mut reader = response;
        let mut bytes = Vec::with_capacity(64 * 1024);
        reader
            .read_to_end(&mut bytes)
            .map_err(|e| BrowseError::network(url, e))?;
        Ok(bytes)
    }
}

impl CollectionSource for HttpFetcher {
    fn fetch_collection(&self, url: &str) -> Result<Vec<Record>, BrowseError> {
        let bytes = self.get_bytes(url)?;
        decode_records(&bytes)
    }
}

impl ImageSource for HttpFetcher {
    fn fetch_image(&self, url: &str) -> Result<Vec<u8>, BrowseError> {
        if url.is_empty() {
            return Err(BrowseError::network(url, "record has no image"));
        }
        let bytes = self.get_bytes(url)?;
        tracing::debug!(url, len = bytes.len(), "fetched image");
        Ok(bytes)
    }
}
