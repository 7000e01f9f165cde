//! Content types known to the resolver.
//!
//! Each [`ContentKind`] fixes the store query (field projection and sort key),
//! how many placeholders stand in for it, and the namespace its placeholder
//! identifiers use.

use std::fmt;
use std::str::FromStr;

use crate::models::PLACEHOLDER_PREFIX;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Project,
    FeaturedProject,
    Showreel,
    GalleryImage,
    Workshop,
    BlogPost,
    Event,
    Experiment,
    Preview,
    Snippet,
    Testimonial,
    About,
}

impl ContentKind {
    pub const ALL: [ContentKind; 12] = [
        ContentKind::Project,
        ContentKind::FeaturedProject,
        ContentKind::Showreel,
        ContentKind::GalleryImage,
        ContentKind::Workshop,
        ContentKind::BlogPost,
        ContentKind::Event,
        ContentKind::Experiment,
        ContentKind::Preview,
        ContentKind::Snippet,
        ContentKind::Testimonial,
        ContentKind::About,
    ];

    /// Name used on the command line and in `/api/content/{kind}`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Project => "projects",
            Self::FeaturedProject => "featured-projects",
            Self::Showreel => "showreel",
            Self::GalleryImage => "gallery",
            Self::Workshop => "workshops",
            Self::BlogPost => "posts",
            Self::Event => "events",
            Self::Experiment => "experiments",
            Self::Preview => "previews",
            Self::Snippet => "snippets",
            Self::Testimonial => "testimonials",
            Self::About => "about",
        }
    }

    /// Middle segment of `placeholder-<namespace>-<i>`.
    pub fn id_namespace(self) -> &'static str {
        match self {
            Self::Project | Self::FeaturedProject => "project",
            Self::Showreel => "showreel",
            Self::GalleryImage => "gallery",
            Self::Workshop => "workshop",
            Self::BlogPost => "post",
            Self::Event => "event",
            Self::Experiment => "experiment",
            Self::Preview => "preview",
            Self::Snippet => "snippet",
            Self::Testimonial => "testimonial",
            Self::About => "about",
        }
    }

    /// Number of placeholders generated when the store has nothing.
    pub fn default_count(self) -> usize {
        match self {
            Self::Project => 5,
            Self::FeaturedProject => 3,
            Self::Showreel | Self::About => 1,
            Self::GalleryImage => 8,
            Self::Workshop => 3,
            Self::BlogPost => 6,
            Self::Event => 6,
            Self::Experiment => 4,
            Self::Preview => 3,
            Self::Snippet => 9,
            Self::Testimonial => 6,
        }
    }

    /// Singleton kinds query `[0]` and resolve to one object.
    pub fn is_singleton(self) -> bool {
        matches!(self, Self::Showreel | Self::About)
    }

    /// GROQ query sent to the content store.
    pub fn query(self) -> &'static str {
        match self {
            Self::Project => {
                r#"*[_type == "project"] | order(date desc) {
  _id, title, description, slug, mainImage, categories, videoUrl, featured, date
}"#
            }
            Self::FeaturedProject => {
                r#"*[_type == "project" && featured == true] | order(date desc)[0...3] {
  _id, title, description, slug, mainImage, categories, videoUrl, featured, date
}"#
            }
            Self::Showreel => r#"*[_type == "showreel"][0]"#,
            Self::GalleryImage => {
                r#"*[_type == "galleryImage"] | order(orderRank) {
  _id, title, image, description
}"#
            }
            Self::Workshop => {
                r#"*[_type == "workshop"] | order(startDate asc) {
  _id, title, description, startDate, endDate, location, image, price,
  seats, seatsAvailable, curriculum, instructor, level
}"#
            }
            Self::BlogPost => {
                r#"*[_type == "post"] | order(publishedAt desc) {
  _id, title, slug, mainImage, publishedAt, categories[]->{title}, excerpt,
  "estimatedReadingTime": round(length(pt::text(body)) / 5 / 180)
}"#
            }
            Self::Event => {
                r#"*[_type == "event"] | order(eventDate asc) {
  _id, title, description, eventDate, endDate, location, image, ticketLink, featured
}"#
            }
            Self::Experiment => {
                r#"*[_type == "experiment"] | order(date desc) {
  _id, title, description, fullDescription, videoUrl, date, equipment,
  technique, collaborators, images, outcome, mainImage
}"#
            }
            Self::Preview => {
                r#"*[_type == "preview"] | order(createdAt desc) {
  _id, title, description, videoUrl, clientName, createdAt, expiryDate,
  password, feedbackEnabled, thumbnailImage
}"#
            }
            Self::Snippet => {
                r#"*[_type == "snippet"] | order(publishedAt desc) {
  _id, title, description, videoUrl, thumbnail, tags, duration, publishedAt, technique
}"#
            }
            Self::Testimonial => {
                r#"*[_type == "testimonial"] | order(_createdAt desc)[0...6] {
  _id, quote, author, role, project, rating
}"#
            }
            Self::About => {
                r#"*[_type == "about"][0] {
  biography, philosophy, skills, education, awards, profileImage
}"#
            }
        }
    }
}

/// `placeholder-<namespace>-<index>`.
pub fn placeholder_id(kind: ContentKind, index: usize) -> String {
    format!("{}{}-{}", PLACEHOLDER_PREFIX, kind.id_namespace(), index)
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ContentKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let kind = match normalized.as_str() {
            "projects" | "project" | "works" => Self::Project,
            "featured-projects" | "featured" => Self::FeaturedProject,
            "showreel" | "reel" => Self::Showreel,
            "gallery" | "gallery-images" => Self::GalleryImage,
            "workshops" | "workshop" => Self::Workshop,
            "posts" | "blog" | "blogs" => Self::BlogPost,
            "events" | "event" => Self::Event,
            "experiments" | "experiment" => Self::Experiment,
            "previews" | "preview" => Self::Preview,
            "snippets" | "snippet" => Self::Snippet,
            "testimonials" | "testimonial" => Self::Testimonial,
            "about" => Self::About,
            other => anyhow::bail!(
                "Unknown content kind: '{}'. Expected one of: {}",
                other,
                ContentKind::ALL
                    .iter()
                    .map(|k| k.name())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        };
        Ok(kind)
    }
}
