//! Localization manager
//!
//! Keeps element registrations, loads translations for the active language and
//! notifies subscribers when new translations are applied.

use dashmap::DashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::watch;
use uuid::Uuid;

use crate::i18n::source::TranslationSource;
use crate::i18n::{resolve_locale, I18nError, Localization, LocalizationRegistration, Translations};

pub struct I18nManager {
    source: Arc<dyn TranslationSource>,
    /// First registration per context
    registrations: DashMap<String, LocalizationRegistration>,
    /// Context each registered instance belongs to
    instances: DashMap<Uuid, String>,
    applied: DashMap<String, Translations>,
    language: Mutex<Option<String>>,
    generation: watch::Sender<u64>,
}

impl I18nManager {
    pub fn new(source: Arc<dyn TranslationSource>) -> Self {
        let (generation, _) = watch::channel(0);
        Self {
            source,
            registrations: DashMap::new(),
            instances: DashMap::new(),
            applied: DashMap::new(),
            language: Mutex::new(None),
            generation,
        }
    }

    /// Receiver that changes whenever translations are applied
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.generation.subscribe()
    }

    pub fn language(&self) -> Option<String> {
        self.language
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn is_registered(&self, context: &str) -> bool {
        self.registrations.contains_key(context)
    }

    /// Number of instances that registered `context`
    pub fn instance_count(&self, context: &str) -> usize {
        self.instances
            .iter()
            .filter(|entry| entry.value() == context)
            .count()
    }

    /// Load and apply translations for `language` across all registered
    /// contexts.
    ///
    /// Contexts that do not support the language fall back to their default
    /// strings. Nothing is applied if any load fails.
    pub async fn set_language(&self, language: &str) -> Result<(), I18nError> {
        let registrations: Vec<LocalizationRegistration> = self
            .registrations
            .iter()
            .map(|entry| entry.value().clone())
            .collect();

        // Load everything first so a failure leaves the current strings alone
        let mut loaded = Vec::with_capacity(registrations.len());
        for registration in &registrations {
            let translations = match resolve_locale(&registration.config, language) {
                Some(locale) => Some(
                    self.source
                        .load(&registration.config.locales_path, &registration.context, locale)
                        .await?,
                ),
                None => {
                    tracing::debug!(
                        "{} has no locale for {}, using defaults",
                        registration.context,
                        language
                    );
                    None
                }
            };
            loaded.push((registration.context.clone(), translations));
        }

        // Unsupported contexts drop back to their defaults
        for (context, translations) in loaded {
            match translations {
                Some(translations) => {
                    self.applied.insert(context, translations);
                }
                None => {
                    self.applied.remove(&context);
                }
            }
        }

        *self
            .language
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(language.to_string());
        self.generation.send_modify(|generation| *generation += 1);

        tracing::info!("Applied language {}", language);
        Ok(())
    }
}

impl Localization for I18nManager {
    fn register_localization(&self, registration: LocalizationRegistration) {
        self.instances
            .insert(registration.instance, registration.context.clone());

        // First registration per context wins
        if self.registrations.contains_key(&registration.context) {
            return;
        }
        tracing::info!(
            "Registered localization for {} ({} locales at {})",
            registration.context,
            registration.config.locales.len(),
            registration.config.locales_path
        );
        self.registrations
            .entry(registration.context.clone())
            .or_insert(registration);
    }

    fn unregister_instance(&self, instance: Uuid) {
        self.instances.remove(&instance);
    }

    fn translations(&self, context: &str) -> Option<Translations> {
        self.applied.get(context).map(|entry| entry.value().clone())
    }

    fn generation(&self) -> u64 {
        *self.generation.borrow()
    }
}
