//! PokeAPI client
//!
//! Fetch layer that sits in front of the network. Every request URL is first
//! looked up in the injected [`Cache`]; only misses reach the network, and
//! only successful responses are written back.

use reqwest::header::ACCEPT;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::cache::Cache;
use crate::config::Config;
use crate::error::{PokedexError, Result};
use crate::models::{LocationArea, LocationAreaPage, Pokemon};

/// HTTP client for the PokeAPI with a response cache.
#[derive(Debug)]
pub struct PokeClient {
    http: Client,
    base_url: String,
    cache: Cache,
}

impl PokeClient {
    /// Creates a client for the API rooted at `base_url`, using `cache` for
    /// every response.
    pub fn new(base_url: impl Into<String>, cache: Cache) -> Self {
        Self::with_client(Client::new(), base_url, cache)
    }

    /// Creates a client with a preconfigured HTTP client.
    pub fn with_client(http: Client, base_url: impl Into<String>, cache: Cache) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http,
            base_url,
            cache,
        }
    }

    /// Creates a client and its cache from configuration.
    ///
    /// # Panics
    /// Panics if called outside a tokio runtime.
    pub fn from_config(config: &Config) -> Self {
        let cache = Cache::with_config(config.cache_config());
        Self::new(config.api_base_url.clone(), cache)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn cache(&self) -> &Cache {
        &self.cache
    }

    // == URL Builders ==
    /// URL of the first page of location areas.
    pub fn location_areas_url(&self) -> String {
        format!("{}/location-area", self.base_url)
    }

    pub fn location_area_url(&self, name: &str) -> String {
        format!("{}/location-area/{}", self.base_url, name)
    }

    pub fn pokemon_url(&self, name: &str) -> String {
        format!("{}/pokemon/{}", self.base_url, name)
    }

    // == Fetch ==
    /// Returns the body of `GET url`, from the cache when possible.
    ///
    /// Non-success statuses are returned as [`PokedexError::Status`] and are
    /// never cached.
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        if let Some(body) = self.cache.get(url) {
            debug!("Cache hit for {}", url);
            return Ok(body);
        }
        debug!("Cache miss for {}, fetching", url);

        let response = self
            .http
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PokedexError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response.bytes().await?.to_vec();
        self.cache.put(url, body.clone());
        Ok(body)
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = self.fetch(url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    // == Typed Resources ==
    /// Fetches one page of the location-area listing.
    pub async fn location_area_page(&self, url: &str) -> Result<LocationAreaPage> {
        self.fetch_json(url).await
    }

    pub async fn location_area(&self, name: &str) -> Result<LocationArea> {
        self.fetch_json(&self.location_area_url(name)).await
    }

    pub async fn pokemon(&self, name: &str) -> Result<Pokemon> {
        self.fetch_json(&self.pokemon_url(name)).await
    }

    // == Shutdown ==
    /// Closes the cache, stopping its janitor.
    pub async fn shutdown(self) {
        self.cache.close().await;
    }
}
