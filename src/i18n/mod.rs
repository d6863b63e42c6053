//! Localization
//!
//! The card only supplies configuration: which locales it supports and where
//! its translation resources live. Loading and substitution belong to a
//! [`Localization`] collaborator such as [`manager::I18nManager`].

use once_cell::sync::Lazy;
use std::collections::HashMap;
use thiserror::Error;
use uuid::Uuid;

pub mod manager;
pub mod source;

/// Key/value strings for one context in one locale
pub type Translations = HashMap<String, String>;

/// Locales the card ships translations for
pub const CARD_LOCALES: [&str; 4] = ["ar", "es", "hi", "zh"];

/// Localization-related errors
#[derive(Debug, Error)]
pub enum I18nError {
    #[error("Failed to read translation resource {path}: {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid translation resource {path}: {source}")]
    ParseError {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("No translations for {context} in locale {locale}")]
    Missing { context: String, locale: String },
}

/// Locale set and resource location for an element type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizationConfig {
    pub locales: Vec<String>,
    /// Directory holding `<tag>.<locale>.json`, always ending in `/`
    pub locales_path: String,
}

impl LocalizationConfig {
    /// Config for resources under `<module_base>/locales/`
    pub fn for_module(module_base: &str) -> Self {
        Self {
            locales: CARD_LOCALES.iter().map(|l| l.to_string()).collect(),
            locales_path: format!("{}/locales/", module_base.trim_end_matches('/')),
        }
    }

    /// Process-wide config for the card, rooted at the crate's own directory
    pub fn global() -> &'static LocalizationConfig {
        static CONFIG: Lazy<LocalizationConfig> =
            Lazy::new(|| LocalizationConfig::for_module(crate::MODULE_BASE));
        &CONFIG
    }

    pub fn supports(&self, locale: &str) -> bool {
        self.locales.iter().any(|l| l == locale)
    }
}

/// What an element hands to the localization subsystem at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizationRegistration {
    /// Element tag, used as the resource name prefix
    pub context: String,
    /// Instance registering the context
    pub instance: Uuid,
    pub config: LocalizationConfig,
}

/// The external localization subsystem as seen by an element
pub trait Localization: Send + Sync {
    /// Register an element's locale configuration. Repeated registrations for
    /// the same context must not change the first one.
    fn register_localization(&self, registration: LocalizationRegistration);

    /// Forget an instance that is going away. The context registration stays.
    fn unregister_instance(&self, _instance: Uuid) {}

    /// Translations currently applied for `context`, if any
    fn translations(&self, context: &str) -> Option<Translations>;

    /// Bumped each time translations are applied
    fn generation(&self) -> u64;
}

/// Localization that never loads anything; defaults are always used
#[derive(Debug, Default)]
pub struct NoLocalization;

impl Localization for NoLocalization {
    fn register_localization(&self, _registration: LocalizationRegistration) {}

    fn translations(&self, _context: &str) -> Option<Translations> {
        None
    }

    fn generation(&self) -> u64 {
        0
    }
}

/// Pick the supported locale for a requested language tag: exact match first,
/// then the primary subtag (`zh-CN` -> `zh`).
pub fn resolve_locale<'a>(config: &'a LocalizationConfig, requested: &str) -> Option<&'a str> {
    let requested = requested.trim().to_ascii_lowercase().replace('_', "-");
    if requested.is_empty() {
        return None;
    }
    let primary = requested.split('-').next().unwrap_or_default();
    config
        .locales
        .iter()
        .find(|l| l.to_ascii_lowercase() == requested)
        .or_else(|| config.locales.iter().find(|l| l.to_ascii_lowercase() == primary))
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locales_path_is_relative_to_module() {
        let config = LocalizationConfig::for_module("/srv/components/ddd-card/");
        assert_eq!(config.locales_path, "/srv/components/ddd-card/locales/");
        assert_eq!(config.locales, vec!["ar", "es", "hi", "zh"]);
    }

    #[test]
    fn test_global_config_is_shared() {
        let first = LocalizationConfig::global();
        let second = LocalizationConfig::global();
        assert!(std::ptr::eq(first, second));
        assert!(first.locales_path.ends_with("/locales/"));
    }

    #[test]
    fn test_resolve_locale() {
        let config = LocalizationConfig::for_module("/x");
        assert_eq!(resolve_locale(&config, "es"), Some("es"));
        assert_eq!(resolve_locale(&config, "zh-CN"), Some("zh"));
        assert_eq!(resolve_locale(&config, "HI_in"), Some("hi"));
        assert_eq!(resolve_locale(&config, "en"), None);
        assert_eq!(resolve_locale(&config, ""), None);
    }
}
