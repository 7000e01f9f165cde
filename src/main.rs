//! # Folio CLI (`folio`)
//!
//! ## Usage
//!
//! ```bash
//! folio --config ./config/folio.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `folio serve` | Start the HTTP API |
//! | `folio content <kind>` | Print resolved content for a kind as JSON |
//! | `folio images <query>` | Print image search results (or fallbacks) |
//! | `folio status` | Show content store and image search health |
//!
//! Log verbosity follows `RUST_LOG` (default `info`). Logs go to stderr so
//! JSON output on stdout stays clean.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use folio_content::{config, content_cmd, server, status};

/// Folio: portfolio content with placeholder fallback.
///
/// Reads `--config` when the file exists; otherwise the content store is
/// taken from `SANITY_*` environment variables and everything else uses
/// defaults.
#[derive(Parser)]
#[command(
    name = "folio",
    about = "Folio: portfolio content resolution with placeholder fallback",
    version
)]
struct Cli {
    /// Path to configuration file (TOML).
    #[arg(long, global = true, default_value = "./config/folio.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API on `[server].bind`.
    Serve,

    /// Print resolved content for one kind.
    ///
    /// Kinds: projects, featured-projects, showreel, gallery, workshops,
    /// posts, events, experiments, previews, snippets, testimonials, about.
    Content {
        kind: String,

        /// Print only the data, without the source annotation.
        #[arg(long)]
        data_only: bool,
    },

    /// Search images, falling back to the static list on failure.
    Images {
        query: String,

        #[arg(long, default_value = "5")]
        count: usize,
    },

    /// Show content store and image search status.
    Status,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let cfg = config::load_or_minimal(&cli.config)?;

    match cli.command {
        Commands::Serve => {
            server::run_server(&cfg).await?;
        }
        Commands::Content { kind, data_only } => {
            content_cmd::run_content(&cfg, &kind, data_only).await?;
        }
        Commands::Images { query, count } => {
            content_cmd::run_images(&cfg, &query, count).await?;
        }
        Commands::Status => {
            status::run_status(&cfg).await?;
        }
    }

    Ok(())
}
