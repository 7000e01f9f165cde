//! Content store abstraction and implementations.
//!
//! Defines the [`ContentStore`] trait and concrete implementations:
//! - **[`DisabledStore`]**: fails every query; used when no store is configured.
//! - **[`HttpContentStore`]**: sends GROQ queries to the store's HTTP query API.
//!
//! Use [`create_store`] to pick the implementation for a configuration.
//!
//! An empty array (or `null` for `[0]` queries) is a valid answer, distinct
//! from an error. The resolver treats both as a reason to serve placeholders
//! but records which one happened.
//!
//! # Query API
//!
//! ```text
//! GET https://<project>.api.sanity.io/v<version>/data/query/<dataset>?query=<GROQ>
//!     (apicdn.sanity.io when use_cdn = true)
//!
//! 200 { "ms": 4, "query": "...", "result": [ ... ] }
//! ```

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

use crate::config::StoreConfig;

/// A queryable content source.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Short label used in logs and `folio status`.
    fn name(&self) -> &str;

    /// Runs a query and returns the raw `result` value.
    async fn query(&self, query: &str) -> Result<Value>;
}

/// Runs a list query. `null` reads as an empty list.
///
/// Records are decoded one at a time. A record that does not decode is
/// logged and skipped; the query fails only when no record decodes.
pub async fn fetch_list<T: DeserializeOwned>(store: &dyn ContentStore, query: &str) -> Result<Vec<T>> {
    let items = match store.query(query).await? {
        Value::Null => return Ok(Vec::new()),
        Value::Array(items) => items,
        other => bail!(
            "Failed to decode content store result: expected a list, got {}",
            json_type(&other)
        ),
    };

    let mut records = Vec::with_capacity(items.len());
    let mut first_error = None;
    for (index, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<T>(item) {
            Ok(record) => records.push(record),
            Err(e) => {
                tracing::warn!(store = store.name(), index, error = %e, "skipping content store record that does not decode");
                first_error.get_or_insert(e);
            }
        }
    }

    match first_error {
        Some(e) if records.is_empty() => Err(e).context("Failed to decode content store result"),
        _ => Ok(records),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

/// Runs a single-document query. `null` reads as `None`.
pub async fn fetch_one<T: DeserializeOwned>(store: &dyn ContentStore, query: &str) -> Result<Option<T>> {
    match store.query(query).await? {
        Value::Null => Ok(None),
        value => serde_json::from_value(value)
            .map(Some)
            .context("Failed to decode content store result"),
    }
}

/// Builds the store for a configuration: HTTP when `[store]` is present,
/// disabled otherwise.
pub fn create_store(config: Option<&StoreConfig>) -> Result<Arc<dyn ContentStore>> {
    match config {
        Some(store) => Ok(Arc::new(HttpContentStore::new(store)?)),
        None => Ok(Arc::new(DisabledStore)),
    }
}

// ============ Disabled Store ============

/// Store used when none is configured. Every query fails, so every accessor
/// serves placeholders.
pub struct DisabledStore;

#[async_trait]
impl ContentStore for DisabledStore {
    fn name(&self) -> &str {
        "disabled"
    }

    async fn query(&self, _query: &str) -> Result<Value> {
        bail!("content store is not configured")
    }
}

// ============ HTTP Store ============

pub struct HttpContentStore {
    client: reqwest::Client,
    endpoint: String,
    token: Option<String>,
}

#[derive(serde::Deserialize)]
struct QueryResponse {
    #[serde(default)]
    result: Value,
}

impl HttpContentStore {
    pub fn new(config: &StoreConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(15))
            .build()?;
        Ok(Self {
            client,
            endpoint: query_endpoint(config),
            token: config.token(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// `https://<project>.<host>/v<version>/data/query/<dataset>`
pub fn query_endpoint(config: &StoreConfig) -> String {
    let host = if config.use_cdn {
        "apicdn.sanity.io"
    } else {
        "api.sanity.io"
    };
    format!(
        "https://{}.{}/v{}/data/query/{}",
        config.project_id,
        host,
        config.api_version.trim_start_matches('v'),
        config.dataset
    )
}

#[async_trait]
impl ContentStore for HttpContentStore {
    fn name(&self) -> &str {
        "http"
    }

    async fn query(&self, query: &str) -> Result<Value> {
        let mut request = self.client.get(&self.endpoint).query(&[("query", query)]);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .with_context(|| format!("Content store request to {} failed", self.endpoint))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            bail!("content store returned HTTP {}: {}", status, body);
        }

        let body: QueryResponse = response
            .json()
            .await
            .context("Content store returned malformed JSON")?;
        Ok(body.result)
    }
}
