//! Image search against the Unsplash API, with an explicit result cache and
//! a static fallback list.
//!
//! # Layers
//!
//! - [`ImageSearch`]: one network search. [`UnsplashApi`] is the HTTP
//!   implementation; tests substitute their own.
//! - [`ImageCache`]: successful results keyed by `(query, count)`. No
//!   eviction.
//! - [`ImageFetcher`]: owns a search backend and a cache. [`ImageFetcher::fetch`]
//!   consults the cache before searching; [`ImageFetcher::fetch_or_fallback`]
//!   never fails and substitutes [`PLACEHOLDER_IMAGES`] on any error.
//!
//! # Failure modes
//!
//! Every failure is a typed [`UnsplashError`]: missing credential (no request
//! is sent), non-2xx status, an empty `results` array, a transport error, or
//! a body that is not the expected JSON. Failures are never cached, so a later call retries the search.

use anyhow::Result;
use async_trait::async_trait;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Duration;
use thiserror::Error;

use crate::config::UnsplashConfig;

/// Largest batch one search or fallback returns; the search API's
/// `per_page` ceiling.
pub const MAX_IMAGE_COUNT: usize = 30;

/// Known-good images served when search fails.
pub const PLACEHOLDER_IMAGES: &[&str] = &[
    "https://images.unsplash.com/photo-1492691527719-9d1e07e534b4?q=80&w=1000",
    "https://images.unsplash.com/photo-1478720568477-152d9b164e26?q=80&w=1000",
    "https://images.unsplash.com/photo-1500210872423-af9c2242785b?q=80&w=1000",
    "https://images.unsplash.com/photo-1606767417686-5df5352f27af?q=80&w=1000",
    "https://images.unsplash.com/photo-1523207911345-32501502db22?q=80&w=1000",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnsplashImage {
    pub regular: String,
    pub small: String,
    pub thumb: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit: Option<Credit>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credit {
    pub name: String,
    pub link: String,
}

#[derive(Debug, Error)]
pub enum UnsplashError {
    #[error("image search credential is not configured")]
    MissingCredential,
    #[error("image search returned HTTP {0}")]
    Status(u16),
    #[error("no images found for '{0}'")]
    NoResults(String),
    #[error("image search request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("image search returned malformed JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A single image search, without caching or fallback.
#[async_trait]
pub trait ImageSearch: Send + Sync {
    async fn search(&self, query: &str, count: usize) -> Result<Vec<UnsplashImage>, UnsplashError>;
}

/// HTTP client for `GET /search/photos`.
pub struct UnsplashApi {
    client: reqwest::Client,
    endpoint: String,
    access_key: Option<String>,
}

impl UnsplashApi {
    /// Builds a client from config. The credential is read from the
    /// environment once, here.
    pub fn new(config: &UnsplashConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            access_key: config.access_key(),
        })
    }

    pub fn has_credential(&self) -> bool {
        self.access_key.is_some()
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<RawPhoto>,
}

#[derive(Debug, Deserialize)]
struct RawPhoto {
    urls: RawUrls,
    alt_description: Option<String>,
    user: Option<RawUser>,
}

#[derive(Debug, Deserialize)]
struct RawUrls {
    regular: String,
    small: String,
    thumb: String,
}

#[derive(Debug, Deserialize)]
struct RawUser {
    name: String,
    links: RawUserLinks,
}

#[derive(Debug, Deserialize)]
struct RawUserLinks {
    html: String,
}

impl RawPhoto {
    fn into_image(self, query: &str) -> UnsplashImage {
        UnsplashImage {
            regular: self.urls.regular,
            small: self.urls.small,
            thumb: self.urls.thumb,
            alt: Some(self.alt_description.unwrap_or_else(|| query.to_string())),
            credit: self.user.map(|u| Credit {
                name: u.name,
                link: u.links.html,
            }),
        }
    }
}

#[async_trait]
impl ImageSearch for UnsplashApi {
    async fn search(&self, query: &str, count: usize) -> Result<Vec<UnsplashImage>, UnsplashError> {
        let key = self
            .access_key
            .as_deref()
            .ok_or(UnsplashError::MissingCredential)?;

        let per_page = count.to_string();
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("query", query), ("per_page", per_page.as_str())])
            .header("Authorization", format!("Client-ID {}", key))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UnsplashError::Status(status.as_u16()));
        }

        let bytes = response.bytes().await?;
        let body: SearchResponse = serde_json::from_slice(&bytes)?;
        if body.results.is_empty() {
            return Err(UnsplashError::NoResults(query.to_string()));
        }

        Ok(body
            .results
            .into_iter()
            .map(|photo| photo.into_image(query))
            .collect())
    }
}

/// Successful search results keyed by `(query, count)`.
#[derive(Default)]
pub struct ImageCache {
    entries: RwLock<HashMap<(String, usize), Vec<UnsplashImage>>>,
}

impl ImageCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, query: &str, count: usize) -> Option<Vec<UnsplashImage>> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries.get(&(query.to_string(), count)).cloned()
    }

    /// Last writer wins; entries for the same key are interchangeable.
    pub fn insert(&self, query: &str, count: usize, images: Vec<UnsplashImage>) {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.insert((query.to_string(), count), images);
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Cached image search with a static fallback.
pub struct ImageFetcher {
    search: Arc<dyn ImageSearch>,
    cache: ImageCache,
}

impl ImageFetcher {
    pub fn new(search: Arc<dyn ImageSearch>) -> Self {
        Self {
            search,
            cache: ImageCache::new(),
        }
    }

    pub fn from_config(config: &UnsplashConfig) -> Result<Self> {
        Ok(Self::new(Arc::new(UnsplashApi::new(config)?)))
    }

    pub fn cache(&self) -> &ImageCache {
        &self.cache
    }

    /// Searches for `count` images (at most [`MAX_IMAGE_COUNT`]), serving
    /// repeat `(query, count)` pairs from the cache.
    pub async fn fetch(&self, query: &str, count: usize) -> Result<Vec<UnsplashImage>, UnsplashError> {
        let count = count.min(MAX_IMAGE_COUNT);
        if let Some(hit) = self.cache.get(query, count) {
            tracing::debug!(query, count, "image search cache hit");
            return Ok(hit);
        }

        let images = self.search.search(query, count).await?;
        self.cache.insert(query, count, images.clone());
        Ok(images)
    }

    /// Like [`fetch`](Self::fetch), but any failure yields
    /// [`fallback_images`] for `count`.
    pub async fn fetch_or_fallback(&self, query: &str, count: usize) -> Vec<UnsplashImage> {
        match self.fetch(query, count).await {
            Ok(images) => images,
            Err(e) => {
                tracing::warn!(query, count, error = %e, "image search failed, using fallback images");
                fallback_images(query, count)
            }
        }
    }
}

/// `count` images (at most [`MAX_IMAGE_COUNT`]) drawn cyclically from
/// [`PLACEHOLDER_IMAGES`].
pub fn fallback_images(query: &str, count: usize) -> Vec<UnsplashImage> {
    PLACEHOLDER_IMAGES
        .iter()
        .cycle()
        .take(count.min(MAX_IMAGE_COUNT))
        .map(|url| UnsplashImage {
            regular: url.to_string(),
            small: url.to_string(),
            thumb: url.to_string(),
            alt: Some(query.to_string()),
            credit: None,
        })
        .collect()
}

pub fn random_placeholder_image<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    PLACEHOLDER_IMAGES
        .choose(rng)
        .copied()
        .unwrap_or(PLACEHOLDER_IMAGES[0])
}
