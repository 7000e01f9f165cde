//! TOML configuration and environment credentials.
//!
//! The config file describes where the content store lives, how image search
//! is authorized, and where the HTTP API binds. Secrets never live in the file
//! itself: the file names the environment variables that hold them.
//!
//! ```toml
//! [store]
//! project_id = "abc123xy"
//! dataset = "production"
//! api_version = "2023-05-03"
//! use_cdn = true
//! token_env = "SANITY_API_TOKEN"
//!
//! [unsplash]
//! access_key_env = "UNSPLASH_ACCESS_KEY"
//!
//! [server]
//! bind = "127.0.0.1:3000"
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Content store connection. `None` disables the store; every accessor
    /// then serves placeholders.
    #[serde(default)]
    pub store: Option<StoreConfig>,
    #[serde(default)]
    pub unsplash: UnsplashConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    pub project_id: String,
    #[serde(default = "default_dataset")]
    pub dataset: String,
    #[serde(default = "default_api_version")]
    pub api_version: String,
    #[serde(default = "default_use_cdn")]
    pub use_cdn: bool,
    /// Name of the environment variable holding a read token, if the
    /// dataset is private.
    #[serde(default)]
    pub token_env: Option<String>,
}

fn default_dataset() -> String {
    "production".to_string()
}
fn default_api_version() -> String {
    "2023-05-03".to_string()
}
fn default_use_cdn() -> bool {
    true
}

impl StoreConfig {
    /// Builds a store config from `SANITY_*` environment variables.
    ///
    /// Returns `None` when `SANITY_PROJECT_ID` is unset or blank.
    pub fn from_env() -> Option<Self> {
        let project_id = std::env::var("SANITY_PROJECT_ID").ok()?;
        if project_id.trim().is_empty() {
            return None;
        }
        let dataset = std::env::var("SANITY_DATASET").unwrap_or_else(|_| default_dataset());
        let api_version =
            std::env::var("SANITY_API_VERSION").unwrap_or_else(|_| default_api_version());
        let use_cdn = std::env::var("SANITY_USE_CDN")
            .ok()
            .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
            .unwrap_or_else(default_use_cdn);
        Some(Self {
            project_id,
            dataset,
            api_version,
            use_cdn,
            token_env: None,
        })
    }

    /// Reads the read token from the configured environment variable.
    pub fn token(&self) -> Option<String> {
        self.token_env
            .as_deref()
            .and_then(|name| std::env::var(name).ok())
            .filter(|t| !t.is_empty())
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct UnsplashConfig {
    #[serde(default = "default_access_key_env")]
    pub access_key_env: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for UnsplashConfig {
    fn default() -> Self {
        Self {
            access_key_env: default_access_key_env(),
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_access_key_env() -> String {
    "UNSPLASH_ACCESS_KEY".to_string()
}
fn default_endpoint() -> String {
    "https://api.unsplash.com/search/photos".to_string()
}
fn default_timeout_secs() -> u64 {
    10
}

impl UnsplashConfig {
    /// The client credential, if the configured variable is set.
    pub fn access_key(&self) -> Option<String> {
        std::env::var(&self.access_key_env)
            .ok()
            .filter(|k| !k.trim().is_empty())
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "127.0.0.1:3000".to_string()
}

impl Config {
    /// Configuration used when no config file exists: store taken from the
    /// environment (if any), defaults everywhere else.
    pub fn minimal() -> Self {
        Self {
            store: StoreConfig::from_env(),
            unsplash: UnsplashConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let mut config: Config =
        toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    if config.store.is_none() {
        config.store = StoreConfig::from_env();
    }

    validate(&config)?;
    Ok(config)
}

/// Loads `path` if it exists, otherwise returns [`Config::minimal`].
pub fn load_or_minimal(path: &Path) -> Result<Config> {
    if path.exists() {
        load_config(path)
    } else {
        let config = Config::minimal();
        validate(&config)?;
        Ok(config)
    }
}

fn validate(config: &Config) -> Result<()> {
    if let Some(store) = &config.store {
        if store.project_id.trim().is_empty() {
            anyhow::bail!("store.project_id must not be empty");
        }
        if store.dataset.trim().is_empty() {
            anyhow::bail!("store.dataset must not be empty");
        }
        if !is_valid_api_version(&store.api_version) {
            anyhow::bail!(
                "store.api_version must be YYYY-MM-DD, '1' or 'X' (got '{}')",
                store.api_version
            );
        }
    }

    if config.unsplash.timeout_secs == 0 {
        anyhow::bail!("unsplash.timeout_secs must be > 0");
    }
    if config.unsplash.access_key_env.trim().is_empty() {
        anyhow::bail!("unsplash.access_key_env must not be empty");
    }

    Ok(())
}

fn is_valid_api_version(version: &str) -> bool {
    matches!(version, "1" | "X")
        || chrono::NaiveDate::parse_from_str(version, "%Y-%m-%d").is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml_src: &str) -> Config {
        toml::from_str(toml_src).unwrap()
    }

    #[test]
    fn test_defaults_applied() {
        let cfg = parse(
            r#"
[store]
project_id = "abc123"
"#,
        );
        let store = cfg.store.as_ref().unwrap();
        assert_eq!(store.dataset, "production");
        assert_eq!(store.api_version, "2023-05-03");
        assert!(store.use_cdn);
        assert_eq!(cfg.unsplash.access_key_env, "UNSPLASH_ACCESS_KEY");
        assert_eq!(cfg.server.bind, "127.0.0.1:3000");
        assert!(validate(&cfg).is_ok());
    }

    #[test]
    fn test_rejects_bad_api_version() {
        let cfg = parse(
            r#"
[store]
project_id = "abc123"
api_version = "yesterday"
"#,
        );
        let err = validate(&cfg).unwrap_err();
        assert!(err.to_string().contains("api_version"));
    }

    #[test]
    fn test_accepts_symbolic_api_versions() {
        assert!(is_valid_api_version("1"));
        assert!(is_valid_api_version("X"));
        assert!(is_valid_api_version("2021-10-21"));
        assert!(!is_valid_api_version("v2021-10-21"));
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let cfg = parse(
            r#"
[unsplash]
timeout_secs = 0
"#,
        );
        assert!(validate(&cfg).is_err());
    }
}
