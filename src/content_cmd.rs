//! `folio content` and `folio images`: print resolved JSON to stdout.

use anyhow::Result;

use crate::config::Config;
use crate::kinds::ContentKind;
use crate::resolver::ContentResolver;

pub async fn run_content(config: &Config, kind: &str, data_only: bool) -> Result<()> {
    let kind: ContentKind = kind.parse()?;
    let resolver = ContentResolver::from_config(config)?;
    let resolved = resolver.resolve(kind).await?;

    if resolved.is_placeholder() {
        tracing::info!(kind = %kind, "serving placeholder content");
    }

    let output = if data_only {
        serde_json::to_string_pretty(&resolved.value)?
    } else {
        serde_json::to_string_pretty(&resolved)?
    };
    println!("{}", output);
    Ok(())
}

pub async fn run_images(config: &Config, query: &str, count: usize) -> Result<()> {
    let resolver = ContentResolver::from_config(config)?;
    let images = resolver.images().fetch_or_fallback(query, count).await;
    println!("{}", serde_json::to_string_pretty(&serde_json::json!({ "images": images }))?);
    Ok(())
}
