//! Content records served to the page layer.
//!
//! Every record deserializes from the content store's query projection
//! (camelCase fields, `_id` identifiers) and serializes back to the same
//! shape, so placeholder and store records are indistinguishable on the wire
//! except for their `placeholder-` identifiers.
//!
//! The store returns `null` for projected fields a document lacks, so
//! collection and flag fields go through [`nullable`]. Dates and label lists
//! are read leniently, and fields a record does not model are kept in its
//! `extra` map, so one odd field never costs the whole store answer.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::media::MediaDescriptor;

/// Deserializes `null` as `T::default()`.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Store fields a record type does not model. Flattened back on output.
pub type Extra = serde_json::Map<String, Value>;

/// Deserializes a store date. Anything [`parse_store_date`] cannot read
/// becomes `None` rather than failing the record.
fn lenient_date<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?
        .as_ref()
        .and_then(Value::as_str)
        .and_then(parse_store_date))
}

/// Reads RFC 3339 datetimes, naive `YYYY-MM-DDTHH:MM:SS` (taken as UTC) and
/// date-only `YYYY-MM-DD` values (midnight UTC).
pub fn parse_store_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(Utc.from_utc_datetime(&dt));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|d| Utc.from_utc_datetime(&d.and_time(NaiveTime::MIN)))
}

/// Deserializes a label list from `null`, a single string, or an array.
/// Array entries may be strings or objects with a `title` or `name`; other
/// entries are skipped.
fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let labels = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(label)) => vec![label],
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(label) => Some(label),
                Value::Object(map) => map
                    .get("title")
                    .or_else(|| map.get("name"))
                    .and_then(Value::as_str)
                    .map(str::to_string),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    };
    Ok(labels)
}

/// Prefix shared by all synthesized identifiers.
pub const PLACEHOLDER_PREFIX: &str = "placeholder-";

/// Common view over list records.
pub trait ContentItem {
    fn id(&self) -> &str;
    fn title(&self) -> &str;

    /// The date used for upcoming/past classification and ordering.
    fn primary_date(&self) -> Option<DateTime<Utc>>;

    fn is_placeholder(&self) -> bool {
        self.id().starts_with(PLACEHOLDER_PREFIX)
    }
}

/// Splits items into `(upcoming, past)` against `now`.
///
/// An item is upcoming when its primary date is at or after `now`; undated
/// items count as past. Every item lands in exactly one side.
pub fn partition_by_date<T: ContentItem>(items: &[T], now: DateTime<Utc>) -> (Vec<&T>, Vec<&T>) {
    items
        .iter()
        .partition(|item| item.primary_date().is_some_and(|d| d >= now))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Slug {
    pub current: String,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Slug {
    pub fn new(current: impl Into<String>) -> Self {
        Self {
            current: current.into(),
            extra: Extra::new(),
        }
    }

    /// Lowercases and joins whitespace-separated words with `-`.
    pub fn from_title(title: &str) -> Self {
        Self::new(
            title
                .split_whitespace()
                .collect::<Vec<_>>()
                .join("-")
                .to_lowercase(),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub title: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub title: String,
    pub description: Option<String>,
    pub slug: Option<Slug>,
    pub main_image: MediaDescriptor,
    #[serde(deserialize_with = "string_list")]
    pub categories: Vec<String>,
    pub video_url: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub featured: bool,
    #[serde(deserialize_with = "lenient_date")]
    pub date: Option<DateTime<Utc>>,
    /// Store fields without a typed counterpart, kept as received.
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Showreel {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub title: String,
    pub description: Option<String>,
    pub video_url: Option<String>,
    /// Store fields without a typed counterpart, kept as received.
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GalleryImage {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub title: String,
    pub image: MediaDescriptor,
    pub description: Option<String>,
    /// Store fields without a typed counterpart, kept as received.
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Workshop {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub title: String,
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient_date")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "lenient_date")]
    pub end_date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub image: MediaDescriptor,
    pub price: Option<f64>,
    /// Total capacity.
    #[serde(deserialize_with = "nullable")]
    pub seats: u32,
    #[serde(deserialize_with = "nullable")]
    pub seats_available: u32,
    pub curriculum: Option<String>,
    pub instructor: Option<String>,
    pub level: Option<String>,
    /// Store fields without a typed counterpart, kept as received.
    #[serde(flatten)]
    pub extra: Extra,
}

impl Workshop {
    /// Seats already taken. Never exceeds `seats`.
    pub fn enrolled(&self) -> u32 {
        self.seats.saturating_sub(self.seats_available)
    }

    pub fn is_sold_out(&self) -> bool {
        self.seats_available == 0
    }

    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.start_date.is_some_and(|d| d >= now)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlogPost {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub title: String,
    pub slug: Option<Slug>,
    pub main_image: MediaDescriptor,
    #[serde(deserialize_with = "lenient_date")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "nullable")]
    pub categories: Vec<Category>,
    pub excerpt: Option<String>,
    /// Minutes.
    pub estimated_reading_time: Option<u32>,
    /// Store fields without a typed counterpart, kept as received.
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Event {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub title: String,
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient_date")]
    pub event_date: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "lenient_date")]
    pub end_date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub image: MediaDescriptor,
    pub ticket_link: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub featured: bool,
    /// Store fields without a typed counterpart, kept as received.
    #[serde(flatten)]
    pub extra: Extra,
}

impl Event {
    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.event_date.is_some_and(|d| d >= now)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experiment {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub title: String,
    pub description: Option<String>,
    pub full_description: Option<String>,
    pub video_url: Option<String>,
    #[serde(deserialize_with = "lenient_date")]
    pub date: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "string_list")]
    pub equipment: Vec<String>,
    pub technique: Option<String>,
    #[serde(deserialize_with = "string_list")]
    pub collaborators: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub images: Vec<MediaDescriptor>,
    pub outcome: Option<String>,
    pub main_image: MediaDescriptor,
    /// Store fields without a typed counterpart, kept as received.
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preview {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub title: String,
    pub description: Option<String>,
    pub video_url: Option<String>,
    pub client_name: Option<String>,
    #[serde(deserialize_with = "lenient_date")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "lenient_date")]
    pub expiry_date: Option<DateTime<Utc>>,
    pub password: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub feedback_enabled: bool,
    pub thumbnail_image: MediaDescriptor,
    /// Store fields without a typed counterpart, kept as received.
    #[serde(flatten)]
    pub extra: Extra,
}

impl Preview {
    /// Previews without an expiry date never expire.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expiry_date.is_some_and(|d| d < now)
    }

    pub fn is_protected(&self) -> bool {
        self.password.as_deref().is_some_and(|p| !p.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Snippet {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub title: String,
    pub description: Option<String>,
    pub video_url: Option<String>,
    pub thumbnail: MediaDescriptor,
    #[serde(deserialize_with = "string_list")]
    pub tags: Vec<String>,
    /// Seconds.
    pub duration: Option<u32>,
    #[serde(deserialize_with = "lenient_date")]
    pub published_at: Option<DateTime<Utc>>,
    pub technique: Option<String>,
    /// Store fields without a typed counterpart, kept as received.
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Testimonial {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub quote: String,
    #[serde(deserialize_with = "nullable")]
    pub author: String,
    pub role: Option<String>,
    pub project: Option<String>,
    pub rating: Option<u8>,
    /// Store fields without a typed counterpart, kept as received.
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AboutPage {
    pub biography: Option<String>,
    pub philosophy: Option<String>,
    #[serde(deserialize_with = "string_list")]
    pub skills: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub education: Vec<Education>,
    #[serde(deserialize_with = "nullable")]
    pub awards: Vec<Award>,
    pub profile_image: MediaDescriptor,
    /// Store fields without a typed counterpart, kept as received.
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub year: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Award {
    pub title: String,
    pub project: String,
    pub year: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub festival: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomepageData {
    pub showreel: Showreel,
    pub featured_projects: Vec<Project>,
    pub testimonials: Vec<Testimonial>,
}

macro_rules! content_item {
    ($ty:ty, $title:ident, $date:ident) => {
        impl ContentItem for $ty {
            fn id(&self) -> &str {
                &self.id
            }
            fn title(&self) -> &str {
                &self.$title
            }
            fn primary_date(&self) -> Option<DateTime<Utc>> {
                self.$date
            }
        }
    };
    ($ty:ty, $title:ident) => {
        impl ContentItem for $ty {
            fn id(&self) -> &str {
                &self.id
            }
            fn title(&self) -> &str {
                &self.$title
            }
            fn primary_date(&self) -> Option<DateTime<Utc>> {
                None
            }
        }
    };
}

content_item!(Project, title, date);
content_item!(Workshop, title, start_date);
content_item!(BlogPost, title, published_at);
content_item!(Event, title, event_date);
content_item!(Experiment, title, date);
content_item!(Preview, title, created_at);
content_item!(Snippet, title, published_at);
content_item!(Showreel, title);
content_item!(GalleryImage, title);
content_item!(Testimonial, author);

// ============ Resolution outcome ============

/// Why placeholder content was served.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "cause", content = "message", rename_all = "snake_case")]
pub enum FallbackReason {
    /// The store answered, with nothing.
    Empty,
    /// The store could not be queried or its answer could not be read.
    Unavailable(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentSource {
    Store,
    Placeholder { reason: FallbackReason },
}

/// A resolved value and where it came from.
///
/// Callers that only render use [`value`](Self::value); the source exists for
/// diagnostics and never changes what is rendered.
#[derive(Debug, Clone, Serialize)]
pub struct Resolved<T> {
    pub source: ContentSource,
    #[serde(rename = "data")]
    pub value: T,
}

impl<T> Resolved<T> {
    pub fn from_store(value: T) -> Self {
        Self {
            source: ContentSource::Store,
            value,
        }
    }

    pub fn placeholder(value: T, reason: FallbackReason) -> Self {
        Self {
            source: ContentSource::Placeholder { reason },
            value,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self.source, ContentSource::Placeholder { .. })
    }

    pub fn into_value(self) -> T {
        self.value
    }
}
