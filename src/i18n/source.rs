//! Translation sources
//!
//! Where the localization manager gets translation resources from.

use async_trait::async_trait;
use dashmap::DashMap;

use crate::i18n::{I18nError, Translations};

/// Loads the translations of one context in one locale
#[async_trait]
pub trait TranslationSource: Send + Sync {
    async fn load(
        &self,
        locales_path: &str,
        context: &str,
        locale: &str,
    ) -> Result<Translations, I18nError>;
}

/// In-memory source keyed by context and locale
#[derive(Default)]
pub struct StaticSource {
    entries: DashMap<(String, String), Translations>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, context: &str, locale: &str, translations: Translations) {
        self.entries
            .insert((context.to_string(), locale.to_string()), translations);
    }
}

#[async_trait]
impl TranslationSource for StaticSource {
    async fn load(
        &self,
        _locales_path: &str,
        context: &str,
        locale: &str,
    ) -> Result<Translations, I18nError> {
        self.entries
            .get(&(context.to_string(), locale.to_string()))
            .map(|entry| entry.value().clone())
            .ok_or_else(|| I18nError::Missing {
                context: context.to_string(),
                locale: locale.to_string(),
            })
    }
}

/// Reads `<locales_path><context>.<locale>.json` from disk
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonDirSource;

impl JsonDirSource {
    pub fn resource_path(locales_path: &str, context: &str, locale: &str) -> String {
        format!("{}{}.{}.json", locales_path, context, locale)
    }
}

#[async_trait]
impl TranslationSource for JsonDirSource {
    async fn load(
        &self,
        locales_path: &str,
        context: &str,
        locale: &str,
    ) -> Result<Translations, I18nError> {
        let path = Self::resource_path(locales_path, context, locale);
        let json = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| I18nError::ReadError {
                path: path.clone(),
                source,
            })?;
        let translations: Translations =
            serde_json::from_str(&json).map_err(|source| I18nError::ParseError {
                path: path.clone(),
                source,
            })?;
        tracing::debug!("Loaded {} strings from {}", translations.len(), path);
        Ok(translations)
    }
}
