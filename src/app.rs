//! Root Dioxus application component
//!
//! This module contains the gallery's shared context and the root App
//! component.

use dioxus::prelude::*;
use std::sync::Arc;

use crate::card::{CardStrings, TAG};
use crate::i18n::manager::I18nManager;
use crate::i18n::Localization;
use crate::registry::ElementRegistry;
use crate::storage::gallery::GalleryConfig;
use crate::ui::Gallery;

/// Host-side collaborators, created before launch
#[derive(Clone)]
pub struct AppContext {
    pub registry: Arc<ElementRegistry>,
    pub i18n: Arc<I18nManager>,
    pub gallery: GalleryConfig,
}

/// Reactive application state shared across components
#[derive(Clone, Copy)]
pub struct AppState {
    pub strings: Signal<CardStrings>,
    pub language: Signal<Option<String>>,
}

/// Apply `language` and publish the resulting card strings
pub async fn switch_language(i18n: Arc<I18nManager>, mut state: AppState, language: String) {
    match i18n.set_language(&language).await {
        Ok(()) => {
            state
                .strings
                .set(CardStrings::from_translations(i18n.translations(TAG).as_ref()));
            state.language.set(Some(language));
        }
        Err(error) => {
            tracing::error!("Failed to apply language {}: {}", language, error);
        }
    }
}

#[component]
pub fn App() -> Element {
    let context = use_context::<AppContext>();
    let state = use_context_provider(|| AppState {
        strings: Signal::new(CardStrings::default()),
        language: Signal::new(None),
    });
    use_context_provider(|| state.strings);

    let initial_language = context.gallery.language.clone();
    let i18n = context.i18n.clone();
    use_hook(move || {
        if let Some(language) = initial_language {
            spawn(switch_language(i18n, state, language));
        }
    });

    rsx! {
        Gallery {}
    }
}
