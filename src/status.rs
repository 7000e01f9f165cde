//! `folio status`: health of the content store and image search.

use anyhow::Result;

use crate::config::Config;
use crate::store::{create_store, query_endpoint};
use crate::unsplash::UnsplashApi;

/// Cheapest query that proves the store answers.
const HEALTH_QUERY: &str = r#"count(*[_type == "project"])"#;

fn store_status(healthy: bool) -> &'static str {
    if healthy {
        "OK"
    } else {
        "UNREACHABLE"
    }
}

pub async fn run_status(config: &Config) -> Result<()> {
    println!("{:<14} {:<16} HEALTHY  DETAIL", "SERVICE", "STATUS");

    match &config.store {
        Some(store_config) => {
            let store = create_store(Some(store_config))?;
            let (healthy, detail) = match store.query(HEALTH_QUERY).await {
                Ok(count) => (true, format!("{} projects", count)),
                Err(e) => (false, format!("{:#}", e)),
            };
            println!(
                "{:<14} {:<16} {:<8} {}",
                "content-store",
                store_status(healthy),
                healthy,
                query_endpoint(store_config)
            );
            println!("{:<14} {}", "", detail);
        }
        None => {
            println!("{:<14} {:<16} {:<8} {}", "content-store", "NOT CONFIGURED", false, "serving placeholders");
        }
    }

    let images = UnsplashApi::new(&config.unsplash)?;
    if images.has_credential() {
        println!("{:<14} {:<16} {:<8} {}", "image-search", "CONFIGURED", true, config.unsplash.endpoint);
    } else {
        println!(
            "{:<14} {:<16} {:<8} set {} to enable",
            "image-search", "NOT CONFIGURED", false, config.unsplash.access_key_env
        );
    }

    Ok(())
}
