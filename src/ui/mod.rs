//! UI components for the card gallery
//!
//! This module contains the Dioxus card component and the gallery around it.

pub mod card;
pub mod markup;

use dioxus::prelude::*;

use crate::app::{switch_language, AppContext, AppState};
use crate::i18n::CARD_LOCALES;
use crate::ui::card::DddCard;
use crate::ui::markup::MarkupPreview;

/// Language that keeps the built-in strings
const DEFAULT_LANGUAGE: &str = "en";

#[component]
pub fn Gallery() -> Element {
    let context = use_context::<AppContext>();
    let gallery = context.gallery.clone();
    let sizing = gallery.sizing;

    rsx! {
        div {
            class: "flex flex-col h-screen w-screen overflow-auto",
            style: "background-color: var(--ddd-theme-default-limestoneMaxLight, #f5f5f5); font-family: sans-serif;",

            header {
                class: "flex items-center gap-2 p-4",
                style: "border-bottom: 1px solid #ddd;",
                h1 { style: "font-size: 1.25rem; margin-right: auto;", "ddd-card gallery" }
                LanguageButton { language: DEFAULT_LANGUAGE }
                for language in CARD_LOCALES {
                    LanguageButton { key: "{language}", language }
                }
            }

            main {
                style: "display: flex; flex-wrap: wrap; gap: 1.5rem; padding: 1.5rem;",
                for (index, card) in gallery.cards.iter().enumerate() {
                    DddCard {
                        key: "{index}",
                        title: card.config.title.clone(),
                        link: card.config.link.clone(),
                        image: card.config.image.clone(),
                        primary: card.config.primary.clone(),
                        sizing,
                        {card.description.clone()}
                    }
                }
            }

            {gallery.cards.first().cloned().map(|card| rsx! { MarkupPreview { card } })}
        }
    }
}

#[component]
fn LanguageButton(language: &'static str) -> Element {
    let context = use_context::<AppContext>();
    let state = use_context::<AppState>();
    let active = state.language.read().as_deref().unwrap_or(DEFAULT_LANGUAGE) == language;

    rsx! {
        button {
            onclick: move |_| {
                spawn(switch_language(context.i18n.clone(), state, language.to_string()));
            },
            style: if active {
                "padding: 0.25rem 0.75rem; border-radius: 4px; border: 1px solid #1e407c; background: #1e407c; color: white;"
            } else {
                "padding: 0.25rem 0.75rem; border-radius: 4px; border: 1px solid #ccc; background: white; color: #333;"
            },
            "{language}"
        }
    }
}
