//! HTTP API for the portfolio frontend.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET`  | `/api/unsplash?query=<q>&count=<n>` | Image search proxy (cached, with fallback) |
//! | `GET`  | `/api/content/{kind}` | Resolved content for one kind |
//! | `GET`  | `/api/homepage` | Showreel, featured projects and testimonials |
//! | `GET`  | `/health` | Health check (returns version) |
//!
//! # Error Contract
//!
//! ```json
//! { "error": "Query parameter is required" }
//! ```
//!
//! Content endpoints never fail because the store is down; they serve
//! placeholders and report it in `source`.
//!
//! # CORS
//!
//! All origins, methods, and headers are permitted.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::config::Config;
use crate::kinds::ContentKind;
use crate::models::{HomepageData, Resolved};
use crate::resolver::ContentResolver;
use crate::unsplash::{UnsplashImage, MAX_IMAGE_COUNT};

/// Images returned by `/api/unsplash` when `count` is absent or unreadable.
pub const DEFAULT_IMAGE_COUNT: usize = 5;

#[derive(Clone)]
struct AppState {
    resolver: Arc<ContentResolver>,
}

/// Starts the HTTP API on `[server].bind`. Runs until the process is
/// terminated.
pub async fn run_server(config: &Config) -> anyhow::Result<()> {
    let resolver = Arc::new(ContentResolver::from_config(config)?);
    run_server_with(resolver, &config.server.bind).await
}

/// Starts the HTTP API with an already built resolver.
pub async fn run_server_with(resolver: Arc<ContentResolver>, bind: &str) -> anyhow::Result<()> {
    let app = router(resolver);

    let listener = tokio::net::TcpListener::bind(bind).await?;
    tracing::info!(bind = %bind, "portfolio API listening on http://{}", bind);
    axum::serve(listener, app).await?;

    Ok(())
}

/// Builds the router with CORS applied.
pub fn router(resolver: Arc<ContentResolver>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/unsplash", get(handle_images))
        .route("/api/content/{kind}", get(handle_content))
        .route("/api/homepage", get(handle_homepage))
        .route("/health", get(handle_health))
        .layer(cors)
        .with_state(AppState { resolver })
}

// ============ Error response ============

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

struct AppError {
    status: StatusCode,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { error: self.message })).into_response()
    }
}

fn bad_request(message: impl Into<String>) -> AppError {
    AppError {
        status: StatusCode::BAD_REQUEST,
        message: message.into(),
    }
}

fn not_found(message: impl Into<String>) -> AppError {
    AppError {
        status: StatusCode::NOT_FOUND,
        message: message.into(),
    }
}

fn internal(message: impl Into<String>) -> AppError {
    AppError {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        message: message.into(),
    }
}

// ============ GET /health ============

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// ============ GET /api/unsplash ============

/// Both fields are read as strings so a malformed `count` falls back to the
/// default instead of rejecting the request.
#[derive(Deserialize)]
struct ImageParams {
    query: Option<String>,
    count: Option<String>,
}

#[derive(Serialize)]
struct ImagesResponse {
    images: Vec<UnsplashImage>,
}

/// `count` as a non-negative integer capped at [`MAX_IMAGE_COUNT`], or
/// [`DEFAULT_IMAGE_COUNT`].
fn parse_count(raw: Option<&str>) -> usize {
    raw.and_then(|c| c.trim().parse::<usize>().ok())
        .unwrap_or(DEFAULT_IMAGE_COUNT)
        .min(MAX_IMAGE_COUNT)
}

async fn handle_images(
    State(state): State<AppState>,
    Query(params): Query<ImageParams>,
) -> Result<Json<ImagesResponse>, AppError> {
    let query = params
        .query
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .ok_or_else(|| bad_request("Query parameter is required"))?;
    let count = parse_count(params.count.as_deref());

    let images = state.resolver.images().fetch_or_fallback(query, count).await;
    if images.is_empty() {
        tracing::error!(query, count, "image proxy produced no images");
        return Err(internal("Failed to fetch images"));
    }

    Ok(Json(ImagesResponse { images }))
}

// ============ GET /api/content/{kind} ============

async fn handle_content(
    State(state): State<AppState>,
    Path(kind): Path<String>,
) -> Result<Json<Resolved<Value>>, AppError> {
    let kind: ContentKind = kind.parse().map_err(|e: anyhow::Error| not_found(e.to_string()))?;

    let resolved = state.resolver.resolve(kind).await.map_err(|e| {
        tracing::error!(kind = %kind, error = %e, "failed to serialize resolved content");
        internal("Failed to resolve content")
    })?;

    Ok(Json(resolved))
}

// ============ GET /api/homepage ============

async fn handle_homepage(State(state): State<AppState>) -> Json<HomepageData> {
    Json(state.resolver.homepage().await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_count_defaults() {
        assert_eq!(parse_count(None), 5);
        assert_eq!(parse_count(Some("abc")), 5);
        assert_eq!(parse_count(Some("-2")), 5);
        assert_eq!(parse_count(Some(" 12 ")), 12);
        assert_eq!(parse_count(Some("0")), 0);
        assert_eq!(parse_count(Some("50000000")), MAX_IMAGE_COUNT);
    }
}
