//! The content resolver: one accessor per content type.
//!
//! Each accessor queries the content store and returns the store's records
//! unchanged when there are any. When the store answers with nothing, fails,
//! or returns something that does not decode, the accessor logs the cause and
//! returns the paired generator's output at the kind's default count instead.
//! Accessors never fail.
//!
//! ```text
//!  accessor ──▶ ContentStore::query ──▶ non-empty ──▶ Resolved { Store }
//!                     │
//!                     ├── empty ───┐
//!                     └── error ───┴──▶ placeholder::* ──▶ Resolved { Placeholder }
//! ```
//!
//! Project and gallery placeholders carry images from [`ImageFetcher`], which
//! has its own cache and static fallback.

use anyhow::Result;
use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::{Arc, Mutex};

use crate::config::Config;
use crate::kinds::ContentKind;
use crate::models::{
    AboutPage, BlogPost, Event, Experiment, FallbackReason, GalleryImage, HomepageData, Preview,
    Project, Resolved, Showreel, Snippet, Testimonial, Workshop,
};
use crate::placeholder;
use crate::store::{create_store, fetch_list, fetch_one, ContentStore};
use crate::templates::GALLERY_QUERIES;
use crate::unsplash::ImageFetcher;

/// Image search query for placeholder project stills.
const PROJECT_IMAGE_QUERY: &str = "cinematography film";

pub struct ContentResolver {
    store: Arc<dyn ContentStore>,
    images: Arc<ImageFetcher>,
    rng: Mutex<StdRng>,
}

impl ContentResolver {
    pub fn new(store: Arc<dyn ContentStore>, images: Arc<ImageFetcher>) -> Self {
        Self {
            store,
            images,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Like [`new`](Self::new) with a fixed seed, for reproducible
    /// placeholder numbers and dates.
    pub fn with_seed(store: Arc<dyn ContentStore>, images: Arc<ImageFetcher>, seed: u64) -> Self {
        Self {
            store,
            images,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let store = create_store(config.store.as_ref())?;
        let images = Arc::new(ImageFetcher::from_config(&config.unsplash)?);
        Ok(Self::new(store, images))
    }

    pub fn store(&self) -> &dyn ContentStore {
        self.store.as_ref()
    }

    pub fn images(&self) -> &ImageFetcher {
        &self.images
    }

    /// Runs `f` with the random source. Never held across an await.
    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut *rng)
    }

    async fn remote_list<T: DeserializeOwned>(&self, kind: ContentKind) -> Result<Vec<T>, FallbackReason> {
        match fetch_list::<T>(self.store.as_ref(), kind.query()).await {
            Ok(items) if !items.is_empty() => Ok(items),
            Ok(_) => {
                tracing::debug!(kind = %kind, store = self.store.name(), "content store returned no items, using placeholders");
                Err(FallbackReason::Empty)
            }
            Err(e) => {
                tracing::warn!(kind = %kind, store = self.store.name(), error = %format!("{:#}", e), "content store query failed, using placeholders");
                Err(FallbackReason::Unavailable(format!("{:#}", e)))
            }
        }
    }

    async fn remote_one<T: DeserializeOwned>(&self, kind: ContentKind) -> Result<T, FallbackReason> {
        match fetch_one::<T>(self.store.as_ref(), kind.query()).await {
            Ok(Some(item)) => Ok(item),
            Ok(None) => {
                tracing::debug!(kind = %kind, store = self.store.name(), "content store returned no document, using placeholder");
                Err(FallbackReason::Empty)
            }
            Err(e) => {
                tracing::warn!(kind = %kind, store = self.store.name(), error = %format!("{:#}", e), "content store query failed, using placeholder");
                Err(FallbackReason::Unavailable(format!("{:#}", e)))
            }
        }
    }

    // ============ Projects ============

    pub async fn projects(&self) -> Resolved<Vec<Project>> {
        match self.remote_list(ContentKind::Project).await {
            Ok(items) => Resolved::from_store(items),
            Err(reason) => {
                let items = self
                    .placeholder_projects(ContentKind::Project.default_count())
                    .await;
                Resolved::placeholder(items, reason)
            }
        }
    }

    /// Featured projects for the homepage (at most three from the store).
    pub async fn featured_projects(&self) -> Resolved<Vec<Project>> {
        match self.remote_list(ContentKind::FeaturedProject).await {
            Ok(items) => Resolved::from_store(items),
            Err(reason) => {
                let items = self
                    .placeholder_projects(ContentKind::FeaturedProject.default_count())
                    .await
                    .into_iter()
                    .filter(|p| p.featured)
                    .collect();
                Resolved::placeholder(items, reason)
            }
        }
    }

    /// `count` placeholder projects with images from image search.
    pub async fn placeholder_projects(&self, count: usize) -> Vec<Project> {
        let images = self.images.fetch_or_fallback(PROJECT_IMAGE_QUERY, count).await;
        let now = Utc::now();
        self.with_rng(|rng| placeholder::projects(count, &images, now, rng))
    }

    pub async fn showreel(&self) -> Resolved<Showreel> {
        match self.remote_one(ContentKind::Showreel).await {
            Ok(item) => Resolved::from_store(item),
            Err(reason) => Resolved::placeholder(self.with_rng(placeholder::showreel), reason),
        }
    }

    // ============ Gallery ============

    pub async fn gallery_images(&self) -> Resolved<Vec<GalleryImage>> {
        match self.remote_list(ContentKind::GalleryImage).await {
            Ok(items) => Resolved::from_store(items),
            Err(reason) => {
                let items = self
                    .placeholder_gallery_images(ContentKind::GalleryImage.default_count())
                    .await;
                Resolved::placeholder(items, reason)
            }
        }
    }

    /// `count` gallery entries drawn from one image batch per gallery query.
    pub async fn placeholder_gallery_images(&self, count: usize) -> Vec<GalleryImage> {
        let per_query = count.div_ceil(GALLERY_QUERIES.len());
        let mut images = Vec::with_capacity(per_query * GALLERY_QUERIES.len());
        for query in GALLERY_QUERIES {
            images.extend(self.images.fetch_or_fallback(query, per_query).await);
        }
        placeholder::gallery_images(count, &images)
    }

    // ============ Time-bound content ============

    pub async fn workshops(&self) -> Resolved<Vec<Workshop>> {
        match self.remote_list(ContentKind::Workshop).await {
            Ok(items) => Resolved::from_store(items),
            Err(reason) => {
                let now = Utc::now();
                let count = ContentKind::Workshop.default_count();
                Resolved::placeholder(self.with_rng(|rng| placeholder::workshops(count, now, rng)), reason)
            }
        }
    }

    pub async fn blog_posts(&self) -> Resolved<Vec<BlogPost>> {
        match self.remote_list(ContentKind::BlogPost).await {
            Ok(items) => Resolved::from_store(items),
            Err(reason) => {
                let now = Utc::now();
                let count = ContentKind::BlogPost.default_count();
                Resolved::placeholder(self.with_rng(|rng| placeholder::blog_posts(count, now, rng)), reason)
            }
        }
    }

    pub async fn events(&self) -> Resolved<Vec<Event>> {
        match self.remote_list(ContentKind::Event).await {
            Ok(items) => Resolved::from_store(items),
            Err(reason) => {
                let now = Utc::now();
                let count = ContentKind::Event.default_count();
                Resolved::placeholder(self.with_rng(|rng| placeholder::events(count, now, rng)), reason)
            }
        }
    }

    pub async fn experiments(&self) -> Resolved<Vec<Experiment>> {
        match self.remote_list(ContentKind::Experiment).await {
            Ok(items) => Resolved::from_store(items),
            Err(reason) => {
                let now = Utc::now();
                let count = ContentKind::Experiment.default_count();
                Resolved::placeholder(self.with_rng(|rng| placeholder::experiments(count, now, rng)), reason)
            }
        }
    }

    pub async fn previews(&self) -> Resolved<Vec<Preview>> {
        match self.remote_list(ContentKind::Preview).await {
            Ok(items) => Resolved::from_store(items),
            Err(reason) => {
                let now = Utc::now();
                let count = ContentKind::Preview.default_count();
                Resolved::placeholder(self.with_rng(|rng| placeholder::previews(count, now, rng)), reason)
            }
        }
    }

    pub async fn snippets(&self) -> Resolved<Vec<Snippet>> {
        match self.remote_list(ContentKind::Snippet).await {
            Ok(items) => Resolved::from_store(items),
            Err(reason) => {
                let now = Utc::now();
                let count = ContentKind::Snippet.default_count();
                Resolved::placeholder(self.with_rng(|rng| placeholder::snippets(count, now, rng)), reason)
            }
        }
    }

    // ============ Static pages ============

    pub async fn testimonials(&self) -> Resolved<Vec<Testimonial>> {
        match self.remote_list(ContentKind::Testimonial).await {
            Ok(items) => Resolved::from_store(items),
            Err(reason) => {
                let count = ContentKind::Testimonial.default_count();
                Resolved::placeholder(self.with_rng(|rng| placeholder::testimonials(count, rng)), reason)
            }
        }
    }

    pub async fn about_page(&self) -> Resolved<AboutPage> {
        match self.remote_one(ContentKind::About).await {
            Ok(about) => Resolved::from_store(about),
            Err(reason) => Resolved::placeholder(placeholder::about_page(), reason),
        }
    }

    /// Showreel, featured projects and testimonials, resolved concurrently
    /// and independently.
    pub async fn homepage(&self) -> HomepageData {
        let (showreel, featured_projects, testimonials) =
            tokio::join!(self.showreel(), self.featured_projects(), self.testimonials());
        HomepageData {
            showreel: showreel.into_value(),
            featured_projects: featured_projects.into_value(),
            testimonials: testimonials.into_value(),
        }
    }

    /// Resolves any kind to JSON, for the HTTP API and CLI.
    pub async fn resolve(&self, kind: ContentKind) -> Result<Resolved<Value>> {
        match kind {
            ContentKind::Project => to_json(self.projects().await),
            ContentKind::FeaturedProject => to_json(self.featured_projects().await),
            ContentKind::Showreel => to_json(self.showreel().await),
            ContentKind::GalleryImage => to_json(self.gallery_images().await),
            ContentKind::Workshop => to_json(self.workshops().await),
            ContentKind::BlogPost => to_json(self.blog_posts().await),
            ContentKind::Event => to_json(self.events().await),
            ContentKind::Experiment => to_json(self.experiments().await),
            ContentKind::Preview => to_json(self.previews().await),
            ContentKind::Snippet => to_json(self.snippets().await),
            ContentKind::Testimonial => to_json(self.testimonials().await),
            ContentKind::About => to_json(self.about_page().await),
        }
    }
}

fn to_json<T: Serialize>(resolved: Resolved<T>) -> Result<Resolved<Value>> {
    Ok(Resolved {
        source: resolved.source,
        value: serde_json::to_value(resolved.value)?,
    })
}
