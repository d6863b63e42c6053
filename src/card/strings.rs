//! Localizable card strings

use crate::i18n::Translations;

pub const EXPLORE_KEY: &str = "explore";
pub const DEFAULT_EXPLORE: &str = "Explore >";

/// Strings the renderer substitutes into the card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardStrings {
    /// Call-to-action label
    pub explore: String,
}

impl Default for CardStrings {
    fn default() -> Self {
        Self {
            explore: DEFAULT_EXPLORE.to_string(),
        }
    }
}

impl CardStrings {
    /// Overlay loaded translations on the defaults. Missing or blank entries
    /// keep the default text.
    pub fn from_translations(translations: Option<&Translations>) -> Self {
        // Start from defaults, then overlay what was loaded
        let mut strings = Self::default();
        if let Some(value) = translations
            .and_then(|t| t.get(EXPLORE_KEY))
            .filter(|v| !v.trim().is_empty())
        {
            strings.explore = value.clone();
        }
        strings
    }
}
