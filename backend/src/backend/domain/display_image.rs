//! Display-image location resolution.
//!
//! Given a stored filename and a size tag, derive where the resized variant
//! lives on disk and what its public URL is. This is pure string composition:
//! no filesystem checks, no I/O. The external resizer that produces the
//! variant files must use the same `<images folder>/<size tag>/<filename>`
//! convention.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::backend::domain::error::ProfileError;

/// Pixel bounds for one thumbnail variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

/// Configuration for display images: where originals and variants live,
/// how they are addressed publicly, and which size tags exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageConfig {
    /// Filesystem root the media tree is anchored at.
    pub media_root: PathBuf,
    /// Public URL prefix corresponding to `media_root`.
    pub media_url: String,
    /// Subfolder under the media tree holding display images.
    pub images_folder: String,
    /// Size-tag table; the set of recognized tags.
    pub sizes: BTreeMap<String, ImageSize>,
    /// Filename served for users without any uploaded photo.
    pub default_image: String,
}

impl Default for ImageConfig {
    fn default() -> Self {
        let mut sizes = BTreeMap::new();
        sizes.insert("small".to_string(), ImageSize { width: 50, height: 56 });
        sizes.insert("medium".to_string(), ImageSize { width: 75, height: 84 });
        sizes.insert("large".to_string(), ImageSize { width: 150, height: 168 });
        Self {
            media_root: PathBuf::from("media"),
            media_url: "/media".to_string(),
            images_folder: "images/profiles".to_string(),
            sizes,
            default_image: "placeholder.jpg".to_string(),
        }
    }
}

/// A resolved, size-specific reference to an image variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageLocation {
    pub url: String,
    pub path: PathBuf,
}

/// Resolves size-tagged image locations from configuration supplied once at
/// construction. Stateless beyond the config; safe to share across handlers.
#[derive(Clone)]
pub struct ImageLocationResolver {
    config: ImageConfig,
}

impl ImageLocationResolver {
    pub fn new(config: ImageConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ImageConfig {
        &self.config
    }

    /// The configured size tags, in stable (sorted) order.
    pub fn size_tags(&self) -> Vec<String> {
        self.config.sizes.keys().cloned().collect()
    }

    pub fn size_for(&self, tag: &str) -> Result<ImageSize, ProfileError> {
        self.config
            .sizes
            .get(tag)
            .copied()
            .ok_or_else(|| ProfileError::UnknownSizeTag(tag.to_string()))
    }

    /// The images directory for a size tag, relative to both the media root
    /// and the media URL.
    pub fn directory_for(&self, tag: &str) -> Result<PathBuf, ProfileError> {
        self.size_for(tag)?;
        Ok(Path::new(&self.config.images_folder).join(tag))
    }

    /// Filesystem path of the `tag`-sized variant of `filename`.
    pub fn path_to(&self, tag: &str, filename: &str) -> Result<PathBuf, ProfileError> {
        Ok(self
            .config
            .media_root
            .join(self.directory_for(tag)?)
            .join(filename))
    }

    /// Public URL of the `tag`-sized variant of `filename`.
    pub fn url_to(&self, tag: &str, filename: &str) -> Result<String, ProfileError> {
        self.size_for(tag)?;
        let url = [
            self.config.media_url.trim_end_matches('/'),
            self.config.images_folder.trim_matches('/'),
            tag,
            filename,
        ]
        .join("/");
        Ok(url)
    }

    /// Bundle path and URL for one variant into an immutable value.
    pub fn resolve(&self, tag: &str, filename: &str) -> Result<ImageLocation, ProfileError> {
        Ok(ImageLocation {
            url: self.url_to(tag, filename)?,
            path: self.path_to(tag, filename)?,
        })
    }

    /// Resolve every configured size tag for `filename`.
    pub fn resolve_all(&self, filename: &str) -> Vec<(String, ImageLocation)> {
        self.config
            .sizes
            .keys()
            .filter_map(|tag| {
                self.resolve(tag, filename)
                    .ok()
                    .map(|location| (tag.clone(), location))
            })
            .collect()
    }
}
