//! Gallery configuration
//!
//! Card definitions, sizing and starting language for the demo gallery.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::card::{CardConfig, CardSizing};
use crate::storage::{get_data_dir, ConfigError};

/// One card in the gallery
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GalleryCard {
    #[serde(flatten)]
    pub config: CardConfig,
    /// Plain text projected into the description slot
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    pub sizing: CardSizing,
    /// Language applied at startup, `None` for the default strings
    pub language: Option<String>,
    pub cards: Vec<GalleryCard>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        let card = |title: &str, image: &str, primary: &str, description: &str| GalleryCard {
            config: CardConfig {
                title: title.to_string(),
                link: "https://hax.psu.edu".to_string(),
                image: image.to_string(),
                primary: primary.to_string(),
            },
            description: description.to_string(),
        };
        Self {
            sizing: CardSizing::Fixed,
            language: None,
            cards: vec![
                card(
                    "Intro to Systems",
                    "https://picsum.photos/seed/cpu/450/250",
                    "2",
                    "How processors, memory and operating systems fit together.",
                ),
                card(
                    "Design Tokens",
                    "https://picsum.photos/seed/tokens/450/250",
                    "11",
                    "Build consistent interfaces from shared spacing, color and type.",
                ),
                card(
                    "Web Components",
                    "https://picsum.photos/seed/wc/450/250",
                    "",
                    "Reusable elements that work in any page.",
                ),
            ],
        }
    }
}

impl GalleryConfig {
    /// Drop a language that is blank
    pub fn validate(&mut self) {
        if self
            .language
            .as_deref()
            .is_some_and(|language| language.trim().is_empty())
        {
            self.language = None;
        }
    }
}

/// Default location of the gallery file
pub fn default_gallery_path() -> Result<PathBuf, ConfigError> {
    Ok(get_data_dir()?.join("gallery.json"))
}

/// Load the gallery from `path`, or the default location when `None`
///
/// Returns the built-in gallery if the file doesn't exist or is invalid
pub fn load_gallery(path: Option<&Path>) -> GalleryConfig {
    match load_gallery_internal(path) {
        Ok(gallery) => gallery,
        Err(e) => {
            tracing::warn!("Failed to load gallery, using defaults: {}", e);
            GalleryConfig::default()
        }
    }
}

fn load_gallery_internal(path: Option<&Path>) -> Result<GalleryConfig, ConfigError> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => default_gallery_path()?,
    };

    if !path.exists() {
        tracing::info!("Gallery file not found at {}, using defaults", path.display());
        return Ok(GalleryConfig::default());
    }

    let json = fs::read_to_string(&path)?;
    // Fields missing from the file take their defaults
    let mut gallery: GalleryConfig = serde_json::from_str(&json)?;
    // Validate loaded gallery
    gallery.validate();

    tracing::debug!("Loaded {} cards from {}", gallery.cards.len(), path.display());
    Ok(gallery)
}
