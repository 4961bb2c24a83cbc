//! Gallery configuration
//!
//! Defaults match the stock page: `dog-data.json` next to the page, images
//! from the Dog API CDN and placeholders from placedog.net. A TOML file may
//! override any subset of the fields.

use crate::error::ConfigError;
use crate::model::{BreedId, BreedRecord};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default data file path, relative to the source root
pub const DEFAULT_DATA_FILE: &str = "dog-data.json";

/// Default base URL for primary breed images
pub const DEFAULT_IMAGE_CDN: &str = "https://cdn2.thedogapi.com/images";

/// Default base URL for placeholder images
pub const DEFAULT_PLACEHOLDER: &str = "https://placedog.net/500/300";

/// Gallery configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Path of the breed document, relative to the source root
    pub data_file: PathBuf,
    /// Base URL joined with `{reference_image_id}.jpg`
    pub image_cdn: String,
    /// Base URL for placeholder images keyed by breed id
    pub placeholder: String,
}

impl GalleryConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With data file path
    #[inline]
    #[must_use]
    pub fn with_data_file(mut self, data_file: impl Into<PathBuf>) -> Self {
        self.data_file = data_file.into();
        self
    }

    /// With image CDN base URL
    #[inline]
    #[must_use]
    pub fn with_image_cdn(mut self, base: impl Into<String>) -> Self {
        self.image_cdn = base.into();
        self
    }

    /// With placeholder base URL
    #[inline]
    #[must_use]
    pub fn with_placeholder(mut self, base: impl Into<String>) -> Self {
        self.placeholder = base.into();
        self
    }

    /// Parse configuration from TOML text
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] if the text is not valid for this shape.
    pub fn from_toml_str(text: &str, origin: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: origin.into(),
            source,
        })
    }

    /// Read configuration from a TOML file
    ///
    /// # Errors
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_toml_str(&text, path)
    }

    /// Image URL shown first for a record
    ///
    /// CDN image when the record carries a reference image, otherwise a
    /// placeholder keyed by id.
    #[must_use]
    pub fn primary_image_url(&self, record: &BreedRecord) -> String {
        match record.reference_image_id.as_deref() {
            Some(reference) if !reference.is_empty() => {
                format!("{}/{reference}.jpg", self.image_cdn.trim_end_matches('/'))
            }
            _ => format!("{}?id={}", self.placeholder, record.id),
        }
    }

    /// Image URL substituted once the primary image fails to display
    #[must_use]
    pub fn fallback_image_url(&self, id: BreedId) -> String {
        format!("{}?random={id}", self.placeholder)
    }
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            image_cdn: DEFAULT_IMAGE_CDN.to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}
