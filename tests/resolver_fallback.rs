//! Integration tests for content resolution.
//!
//! Every accessor is driven against in-memory stores that fail, answer with
//! nothing, or answer with fixtures, and against image searches that fail or
//! count their calls.

use anyhow::{bail, Result};
use async_trait::async_trait;
use chrono::Utc;
use folio_content::kinds::ContentKind;
use folio_content::media::MediaDescriptor;
use folio_content::models::{parse_store_date, partition_by_date, ContentSource, FallbackReason};
use folio_content::placeholder;
use folio_content::resolver::ContentResolver;
use folio_content::store::ContentStore;
use folio_content::unsplash::{ImageFetcher, ImageSearch, UnsplashError, UnsplashImage, PLACEHOLDER_IMAGES};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::{json, Value};
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

// ─── Test Stores ────────────────────────────────────────────────────

struct FailingStore;

#[async_trait]
impl ContentStore for FailingStore {
    fn name(&self) -> &str {
        "failing"
    }

    async fn query(&self, _query: &str) -> Result<Value> {
        bail!("connection refused")
    }
}

/// Answers like a reachable store with no documents.
struct EmptyStore;

#[async_trait]
impl ContentStore for EmptyStore {
    fn name(&self) -> &str {
        "empty"
    }

    async fn query(&self, query: &str) -> Result<Value> {
        if query.contains("][0]") {
            Ok(Value::Null)
        } else {
            Ok(json!([]))
        }
    }
}

/// Returns the fixture whose needle appears in the query, `[]` otherwise.
struct FixtureStore {
    fixtures: Vec<(&'static str, Value)>,
}

#[async_trait]
impl ContentStore for FixtureStore {
    fn name(&self) -> &str {
        "fixture"
    }

    async fn query(&self, query: &str) -> Result<Value> {
        Ok(self
            .fixtures
            .iter()
            .find(|(needle, _)| query.contains(needle))
            .map(|(_, value)| value.clone())
            .unwrap_or_else(|| json!([])))
    }
}

// ─── Test Image Searches ────────────────────────────────────────────

#[derive(Default)]
struct CountingSearch {
    calls: AtomicUsize,
}

#[async_trait]
impl ImageSearch for CountingSearch {
    async fn search(&self, query: &str, count: usize) -> Result<Vec<UnsplashImage>, UnsplashError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok((0..count)
            .map(|i| UnsplashImage {
                regular: format!("https://images.test/{}/{}", query.replace(' ', "-"), i),
                small: format!("https://images.test/{}/{}/small", query.replace(' ', "-"), i),
                thumb: format!("https://images.test/{}/{}/thumb", query.replace(' ', "-"), i),
                alt: Some(query.to_string()),
                credit: None,
            })
            .collect())
    }
}

struct FailingSearch;

#[async_trait]
impl ImageSearch for FailingSearch {
    async fn search(&self, _query: &str, _count: usize) -> Result<Vec<UnsplashImage>, UnsplashError> {
        Err(UnsplashError::MissingCredential)
    }
}

fn resolver(store: impl ContentStore + 'static, search: Arc<dyn ImageSearch>) -> ContentResolver {
    ContentResolver::with_seed(Arc::new(store), Arc::new(ImageFetcher::new(search)), 42)
}

fn expected_len(kind: ContentKind) -> usize {
    match kind {
        // Three generated, the first two featured.
        ContentKind::FeaturedProject => 2,
        _ => kind.default_count(),
    }
}

fn ids(value: &Value) -> Vec<String> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["_id"].as_str().unwrap().to_string())
        .collect()
}

// ─── Tests ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_failing_store_serves_placeholders_for_every_kind() {
    let resolver = resolver(FailingStore, Arc::new(FailingSearch));

    for kind in ContentKind::ALL {
        let resolved = resolver.resolve(kind).await.unwrap();
        match &resolved.source {
            ContentSource::Placeholder {
                reason: FallbackReason::Unavailable(message),
            } => assert!(message.contains("connection refused"), "{}: {}", kind, message),
            other => panic!("{}: expected unavailable placeholder, got {:?}", kind, other),
        }

        if kind.is_singleton() {
            assert!(resolved.value.is_object(), "{}", kind);
        } else {
            let items = resolved.value.as_array().unwrap();
            assert_eq!(items.len(), expected_len(kind), "{}", kind);
        }
    }
}

#[tokio::test]
async fn test_empty_store_matches_failing_store() {
    let empty = resolver(EmptyStore, Arc::new(FailingSearch));
    let failing = resolver(FailingStore, Arc::new(FailingSearch));

    for kind in ContentKind::ALL {
        let from_empty = empty.resolve(kind).await.unwrap();
        let from_failing = failing.resolve(kind).await.unwrap();

        assert_eq!(
            from_empty.source,
            ContentSource::Placeholder {
                reason: FallbackReason::Empty
            },
            "{}",
            kind
        );
        if kind.is_singleton() {
            assert_eq!(from_empty.value["_id"], from_failing.value["_id"], "{}", kind);
        } else {
            assert_eq!(ids(&from_empty.value), ids(&from_failing.value), "{}", kind);
        }
    }
}

#[tokio::test]
async fn test_placeholder_ids_are_unique_and_indexed() {
    let resolver = resolver(FailingStore, Arc::new(FailingSearch));

    for kind in ContentKind::ALL.into_iter().filter(|k| !k.is_singleton()) {
        let resolved = resolver.resolve(kind).await.unwrap();
        let ids = ids(&resolved.value);

        let unique: HashSet<&String> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len(), "{}: duplicate ids {:?}", kind, ids);

        for (i, id) in ids.iter().enumerate() {
            assert_eq!(id, &format!("placeholder-{}-{}", kind.id_namespace(), i), "{}", kind);
        }
    }
}

#[tokio::test]
async fn test_store_records_pass_through() {
    let store = FixtureStore {
        fixtures: vec![(
            r#"_type == "workshop""#,
            json!([{
                "_id": "ws-lighting",
                "title": "Lighting for Night Exteriors",
                "startDate": "2030-03-01T09:00:00Z",
                "price": 750,
                "seats": 12,
                "seatsAvailable": 4,
                "image": { "asset": { "_ref": "image-abc123-1200x800-jpg" } }
            }]),
        )],
    };
    let resolver = resolver(store, Arc::new(FailingSearch));

    let workshops = resolver.workshops().await;
    assert_eq!(workshops.source, ContentSource::Store);
    assert_eq!(workshops.value.len(), 1);

    let workshop = &workshops.value[0];
    assert_eq!(workshop.id, "ws-lighting");
    assert_eq!(workshop.enrolled(), 8);
    assert_eq!(workshop.image, MediaDescriptor::asset("image-abc123-1200x800-jpg"));

    // Kinds without fixtures are reachable-but-empty.
    let posts = resolver.blog_posts().await;
    assert_eq!(
        posts.source,
        ContentSource::Placeholder {
            reason: FallbackReason::Empty
        }
    );
    assert_eq!(posts.value.len(), 6);
}

#[tokio::test]
async fn test_undecodable_store_answer_is_unavailable() {
    let store = FixtureStore {
        fixtures: vec![(r#"_type == "event""#, json!("not a list"))],
    };
    let resolver = resolver(store, Arc::new(FailingSearch));

    let events = resolver.events().await;
    assert!(matches!(
        events.source,
        ContentSource::Placeholder {
            reason: FallbackReason::Unavailable(_)
        }
    ));
    assert_eq!(events.value.len(), 6);
}

#[tokio::test]
async fn test_placeholder_projects_use_searched_images() {
    let search = Arc::new(CountingSearch::default());
    let resolver = resolver(FailingStore, search.clone());

    let projects = resolver.projects().await.into_value();
    assert_eq!(projects.len(), 5);
    for (i, project) in projects.iter().enumerate() {
        assert_eq!(
            project.main_image,
            MediaDescriptor::external(format!("https://images.test/cinematography-film/{}", i))
        );
        assert_eq!(project.featured, i < 2);
        assert_eq!(project.slug.as_ref().unwrap().current, format!("project-{}", i + 1));
    }

    // Same (query, count): served from the cache.
    resolver.projects().await;
    assert_eq!(search.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_placeholder_projects_survive_image_search_failure() {
    let resolver = resolver(FailingStore, Arc::new(FailingSearch));

    let projects = resolver.projects().await.into_value();
    assert_eq!(projects.len(), 5);
    for project in &projects {
        match &project.main_image {
            MediaDescriptor::External { url } => {
                assert!(PLACEHOLDER_IMAGES.contains(&url.as_str()), "{}", url)
            }
            other => panic!("expected external image, got {:?}", other),
        }
    }
    assert!(resolver.images().cache().is_empty());
}

#[tokio::test]
async fn test_gallery_searches_each_gallery_query_once() {
    let search = Arc::new(CountingSearch::default());
    let resolver = resolver(FailingStore, search.clone());

    let gallery = resolver.gallery_images().await.into_value();
    assert_eq!(gallery.len(), 8);
    assert_eq!(search.calls.load(Ordering::SeqCst), 3);
    assert!(gallery.iter().all(|g| !g.image.is_absent()));

    resolver.gallery_images().await;
    assert_eq!(search.calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_homepage_resolves_parts_independently() {
    let store = FixtureStore {
        fixtures: vec![(
            r#"_type == "testimonial""#,
            json!([{ "_id": "t-1", "quote": "Remarkable eye.", "author": "Dana Cho", "rating": 5 }]),
        )],
    };
    let resolver = resolver(store, Arc::new(FailingSearch));

    let homepage = resolver.homepage().await;
    assert_eq!(homepage.showreel.id, "placeholder-showreel");
    assert!(homepage.showreel.video_url.is_some());
    assert_eq!(homepage.featured_projects.len(), 2);
    assert!(homepage.featured_projects.iter().all(|p| p.featured));
    assert_eq!(homepage.testimonials.len(), 1);
    assert_eq!(homepage.testimonials[0].author, "Dana Cho");
}

#[test]
fn test_five_placeholder_workshops() {
    let now = Utc::now();
    let mut rng = StdRng::seed_from_u64(5);
    let workshops = placeholder::workshops(5, now, &mut rng);

    assert_eq!(workshops.len(), 5);
    for (i, workshop) in workshops.iter().enumerate() {
        assert_eq!(workshop.id, format!("placeholder-workshop-{}", i));
        let price = workshop.price.unwrap();
        assert!((500.0..=2000.0).contains(&price), "price {}", price);
        assert!(workshop.seats_available <= workshop.seats);
        assert!(workshop.enrolled() <= workshop.seats);
        assert!(workshop.is_upcoming(now));
    }
}

#[test]
fn test_placeholder_events_partition_by_date() {
    let now = Utc::now();
    let mut rng = StdRng::seed_from_u64(11);
    let events = placeholder::events(6, now, &mut rng);

    let (upcoming, past) = partition_by_date(&events, now);
    assert_eq!(upcoming.len() + past.len(), events.len());
    assert_eq!(upcoming.len(), 3);
    assert!(upcoming.iter().all(|e| e.is_upcoming(now)));
    assert!(past.iter().all(|e| !e.is_upcoming(now)));
}

// ─── Store pass-through ─────────────────────────────────────────────

fn asset(reference: &str) -> Value {
    json!({ "_type": "image", "asset": { "_ref": reference, "_type": "reference" } })
}

/// One realistic store answer per content type: array-valued fields,
/// date-only dates, and fields no record type models.
fn store_fixtures() -> FixtureStore {
    FixtureStore {
        fixtures: vec![
            (
                r#"_type == "project""#,
                json!([{
                    "_id": "p-1",
                    "_type": "project",
                    "title": "Night Shift",
                    "slug": { "_type": "slug", "current": "night-shift" },
                    "mainImage": asset("image-abc-1200x800-jpg"),
                    "categories": ["Drama", "Commercial"],
                    "videoUrl": "https://vimeo.com/1",
                    "featured": true,
                    "date": "2024-03-01",
                    "client": "Nocturne Films"
                }]),
            ),
            (
                r#"_type == "showreel""#,
                json!({
                    "_id": "sr",
                    "_type": "showreel",
                    "title": "Reel 2024",
                    "videoUrl": "https://v/a.mp4",
                    "poster": "https://p.jpg"
                }),
            ),
            (
                r#"_type == "galleryImage""#,
                json!([{
                    "_id": "g-1",
                    "title": "Dusk",
                    "image": asset("image-def-1600x900-jpg"),
                    "description": "Golden hour on the pier",
                    "orderRank": "0|100000:"
                }]),
            ),
            (
                r#"_type == "workshop""#,
                json!([{
                    "_id": "w-1",
                    "title": "Lighting Night Exteriors",
                    "startDate": "2030-03-01",
                    "endDate": "2030-03-03T17:00:00Z",
                    "location": "Berlin",
                    "price": 1250.0,
                    "seats": 12,
                    "seatsAvailable": 4,
                    "level": "Advanced",
                    "registrationUrl": "https://example.com/register"
                }]),
            ),
            (
                r#"_type == "post""#,
                json!([{
                    "_id": "post-1",
                    "title": "On Lenses",
                    "slug": { "_type": "slug", "current": "on-lenses" },
                    "publishedAt": "2024-02-10T08:00:00Z",
                    "categories": [{ "title": "Gear" }],
                    "excerpt": "Why vintage glass still matters.",
                    "estimatedReadingTime": 7
                }]),
            ),
            (
                r#"_type == "event""#,
                json!([{
                    "_id": "ev-1",
                    "title": "Festival Panel",
                    "eventDate": "2030-06-01",
                    "location": "Cannes",
                    "ticketLink": "https://example.com/tickets",
                    "featured": false,
                    "capacity": 200
                }]),
            ),
            (
                r#"_type == "experiment""#,
                json!([{
                    "_id": "exp-1",
                    "title": "Infrared Landscapes",
                    "date": "2023-11-20",
                    "equipment": ["ARRI Alexa", "Cooke S4"],
                    "collaborators": ["Jane"],
                    "technique": "Infrared conversion",
                    "tags": ["ir", "landscape"]
                }]),
            ),
            (
                r#"_type == "preview""#,
                json!([{
                    "_id": "pv-1",
                    "title": "Cut 2",
                    "clientName": "Acme",
                    "createdAt": "2024-05-01T10:00:00Z",
                    "expiryDate": "2030-01-01",
                    "password": "s3cret",
                    "feedbackEnabled": true,
                    "version": 2
                }]),
            ),
            (
                r#"_type == "snippet""#,
                json!([{
                    "_id": "sn-1",
                    "title": "Rack Focus",
                    "tags": ["focus", "lens"],
                    "duration": 42,
                    "publishedAt": "2024-04-04",
                    "videoUrl": "https://v/rack.mp4"
                }]),
            ),
            (
                r#"_type == "testimonial""#,
                json!([{
                    "_id": "t-1",
                    "quote": "Remarkable eye.",
                    "author": "Dana Cho",
                    "role": "Director",
                    "rating": 5,
                    "company": "Tide Pictures"
                }]),
            ),
            (
                r#"_type == "about""#,
                json!({
                    "biography": "Cinematographer based in Lisbon.",
                    "skills": ["Lighting", "Color"],
                    "education": [{ "institution": "AFI", "degree": "MFA", "year": "2012" }],
                    "awards": [{ "title": "Best Cinematography", "project": "Tides", "year": "2020", "festival": "Sundance" }],
                    "cvUrl": "https://example.com/cv.pdf"
                }),
            ),
        ],
    }
}

/// Every field of `input` appears in `output` with the same value. Dates
/// compare by instant, since date-only values come back as RFC 3339.
fn assert_preserved(kind: ContentKind, input: &Value, output: &Value) {
    for (key, expected) in input.as_object().unwrap() {
        let actual = &output[key];
        match expected.as_str().and_then(parse_store_date) {
            Some(date) => assert_eq!(
                actual.as_str().and_then(parse_store_date),
                Some(date),
                "{}: field {}",
                kind,
                key
            ),
            None => assert_eq!(actual, expected, "{}: field {}", kind, key),
        }
    }
}

#[tokio::test]
async fn test_store_answers_pass_through_for_every_kind() {
    let fixtures = store_fixtures();
    let answers: Vec<(&'static str, Value)> = fixtures.fixtures.clone();
    let resolver = resolver(fixtures, Arc::new(FailingSearch));

    for kind in ContentKind::ALL {
        let resolved = resolver.resolve(kind).await.unwrap();
        assert_eq!(resolved.source, ContentSource::Store, "{}", kind);

        let (_, input) = answers
            .iter()
            .find(|(needle, _)| kind.query().contains(needle))
            .unwrap();
        match input {
            Value::Array(records) => {
                let output = resolved.value.as_array().unwrap();
                assert_eq!(output.len(), records.len(), "{}", kind);
                for (record, out) in records.iter().zip(output) {
                    assert_preserved(kind, record, out);
                }
            }
            record => assert_preserved(kind, record, &resolved.value),
        }
    }
}

#[tokio::test]
async fn test_one_bad_record_does_not_discard_the_rest() {
    let store = FixtureStore {
        fixtures: vec![(
            r#"_type == "testimonial""#,
            json!([
                { "_id": "t-1", "quote": "Remarkable eye.", "author": "Dana Cho" },
                { "_id": "t-2", "quote": ["not", "a", "string"], "author": "Lee" }
            ]),
        )],
    };
    let resolver = resolver(store, Arc::new(FailingSearch));

    let testimonials = resolver.testimonials().await;
    assert_eq!(testimonials.source, ContentSource::Store);
    assert_eq!(testimonials.value.len(), 1);
    assert_eq!(testimonials.value[0].id, "t-1");
}
