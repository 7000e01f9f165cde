//! # Folio Content
//!
//! Content resolution for a cinematographer's portfolio site.
//!
//! Every page of the site reads its data through a [`resolver::ContentResolver`]
//! accessor. Accessors query a headless content store and, when the store is
//! unreachable or has nothing yet, fall back to realistic generated
//! placeholder content so every page always renders. Image-bearing
//! placeholders draw their pictures from an image-search API behind an
//! in-process cache, with a static list of stills as the last resort.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │ ContentStore │──▶│   Resolver   │◀──│ ImageFetcher │
//! │  (GROQ/HTTP) │   │ + generators │   │ cache+search │
//! └──────────────┘   └──────┬───────┘   └──────────────┘
//!                           │
//!                ┌──────────┴─────────┐
//!                ▼                    ▼
//!           ┌──────────┐        ┌──────────┐
//!           │   CLI    │        │   HTTP   │
//!           │ (folio)  │        │   API    │
//!           └──────────┘        └──────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! folio status                  # check store and image search
//! folio content workshops       # print resolved workshops
//! folio images "film set" --count 3
//! folio serve                   # start HTTP API
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration and environment credentials |
//! | [`models`] | Content records and the resolution outcome |
//! | [`kinds`] | Content kinds, store queries, default counts |
//! | [`store`] | Content store abstraction |
//! | [`media`] | Media descriptors and image URL building |
//! | [`fallback`] | Static image and video fallbacks |
//! | [`unsplash`] | Image search, cache, and fallback images |
//! | [`templates`] | Placeholder text |
//! | [`placeholder`] | Placeholder generators |
//! | [`resolver`] | Per-kind accessors with fallback |
//! | [`server`] | HTTP API |

pub mod config;
pub mod content_cmd;
pub mod fallback;
pub mod kinds;
pub mod media;
pub mod models;
pub mod placeholder;
pub mod resolver;
pub mod server;
pub mod status;
pub mod store;
pub mod templates;
pub mod unsplash;
