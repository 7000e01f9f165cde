//! Media descriptors and the image URL builder.
//!
//! Records reference images in one of three shapes: nothing at all, an asset
//! reference held by the content store, or a plain external URL (the shape
//! placeholders use). [`MediaDescriptor`] captures the three as a tagged union
//! and [`MediaUrlBuilder`] turns any of them into an [`ImageUrl`] that
//! rendering code sizes with `.width(w).height(h)` without branching on the
//! shape.
//!
//! Nothing here fails: an absent or malformed descriptor resolves to
//! [`PLACEHOLDER_IMAGE_PATH`].
//!
//! ```rust
//! use folio_content::media::{MediaDescriptor, MediaUrlBuilder, PLACEHOLDER_IMAGE_PATH};
//!
//! let builder = MediaUrlBuilder::new(None);
//! let url = builder.image(&MediaDescriptor::Absent).width(800).height(600).url();
//! assert_eq!(url, PLACEHOLDER_IMAGE_PATH);
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{json, Value};
use std::fmt;

use crate::config::StoreConfig;

/// Static path served when no image can be resolved.
pub const PLACEHOLDER_IMAGE_PATH: &str = "/images/placeholder.jpg";

/// Image CDN host for store-managed assets.
const IMAGE_CDN: &str = "https://cdn.sanity.io/images";

/// `_type` written for external URL markers.
const EXTERNAL_TYPE: &str = "unsplashImage";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MediaDescriptor {
    #[default]
    Absent,
    /// Asset held by the content store, e.g. `image-Tb9Ew8CX-2000x3000-jpg`.
    Asset { reference: String },
    /// Direct URL; width and height requests do not alter it.
    External { url: String },
}

impl MediaDescriptor {
    pub fn external(url: impl Into<String>) -> Self {
        Self::External { url: url.into() }
    }

    pub fn asset(reference: impl Into<String>) -> Self {
        Self::Asset {
            reference: reference.into(),
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Classifies a raw JSON value. Unknown shapes become [`Self::Absent`].
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(s) if !s.trim().is_empty() => Self::external(s.clone()),
            Value::Object(map) => {
                let ty = map.get("_type").and_then(Value::as_str).unwrap_or("");
                let url = map.get("url").and_then(Value::as_str).filter(|u| !u.is_empty());

                if matches!(ty, "unsplashImage" | "external" | "externalImage") {
                    return url.map(Self::external).unwrap_or_default();
                }

                if let Some(reference) = map
                    .get("asset")
                    .and_then(|a| a.get("_ref"))
                    .and_then(Value::as_str)
                {
                    return Self::asset(reference);
                }

                url.map(Self::external).unwrap_or_default()
            }
            _ => Self::Absent,
        }
    }

    fn to_value(&self) -> Value {
        match self {
            Self::Absent => Value::Null,
            Self::Asset { reference } => json!({
                "_type": "image",
                "asset": { "_ref": reference, "_type": "reference" },
            }),
            Self::External { url } => json!({ "_type": EXTERNAL_TYPE, "url": url }),
        }
    }
}

impl Serialize for MediaDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for MediaDescriptor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

/// Resolves descriptors against the store's image CDN.
#[derive(Debug, Clone, Default)]
pub struct MediaUrlBuilder {
    project_id: Option<String>,
    dataset: Option<String>,
}

impl MediaUrlBuilder {
    /// Without a store config, asset descriptors resolve to the placeholder.
    pub fn new(store: Option<&StoreConfig>) -> Self {
        Self {
            project_id: store.map(|s| s.project_id.clone()),
            dataset: store.map(|s| s.dataset.clone()),
        }
    }

    pub fn image(&self, descriptor: &MediaDescriptor) -> ImageUrl {
        let target = match descriptor {
            MediaDescriptor::Absent => Target::Placeholder,
            MediaDescriptor::External { url } => Target::Fixed(url.clone()),
            MediaDescriptor::Asset { reference } => self.cdn_base(reference),
        };
        ImageUrl {
            target,
            width: None,
            height: None,
        }
    }

    fn cdn_base(&self, reference: &str) -> Target {
        let (Some(project), Some(dataset)) = (&self.project_id, &self.dataset) else {
            return Target::Placeholder;
        };
        match parse_asset_ref(reference) {
            Some(asset) => Target::Cdn(format!(
                "{}/{}/{}/{}-{}.{}",
                IMAGE_CDN, project, dataset, asset.id, asset.dimensions, asset.extension
            )),
            None => Target::Placeholder,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Target {
    Placeholder,
    Fixed(String),
    Cdn(String),
}

/// A resolved image with optional size hints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUrl {
    target: Target,
    width: Option<u32>,
    height: Option<u32>,
}

impl ImageUrl {
    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn is_placeholder(&self) -> bool {
        self.target == Target::Placeholder
    }

    pub fn url(&self) -> String {
        match &self.target {
            Target::Placeholder => PLACEHOLDER_IMAGE_PATH.to_string(),
            Target::Fixed(url) => url.clone(),
            Target::Cdn(base) => {
                let mut params = Vec::new();
                if let Some(w) = self.width {
                    params.push(format!("w={}", w));
                }
                if let Some(h) = self.height {
                    params.push(format!("h={}", h));
                }
                if params.is_empty() {
                    base.clone()
                } else {
                    format!("{}?{}", base, params.join("&"))
                }
            }
        }
    }
}

impl fmt::Display for ImageUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url())
    }
}

struct AssetParts<'a> {
    id: &'a str,
    dimensions: &'a str,
    extension: &'a str,
}

/// Splits `image-<id>-<W>x<H>-<ext>` into its parts.
fn parse_asset_ref(reference: &str) -> Option<AssetParts<'_>> {
    let rest = reference.strip_prefix("image-")?;
    let (rest, extension) = rest.rsplit_once('-')?;
    let (id, dimensions) = rest.rsplit_once('-')?;

    let (w, h) = dimensions.split_once('x')?;
    let numeric = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if id.is_empty() || extension.is_empty() || !numeric(w) || !numeric(h) {
        return None;
    }

    Some(AssetParts {
        id,
        dimensions,
        extension,
    })
}
