//! Markup preview
//!
//! Shows the HTML a card element instance produces, updated when the active
//! language changes.

use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

use crate::app::{AppContext, AppState};
use crate::card::{DddCardElement, TAG};
use crate::storage::gallery::GalleryCard;
use crate::types::dom::Node;

#[component]
pub fn MarkupPreview(card: GalleryCard) -> Element {
    let context = use_context::<AppContext>();
    let state = use_context::<AppState>();

    let element = use_hook(|| {
        let mut element = DddCardElement::new(context.i18n.clone());
        element.set_title(card.config.title.clone());
        element.set_link(card.config.link.clone());
        element.set_image(card.config.image.clone());
        element.set_primary(card.config.primary.clone());
        element.set_slotted(vec![Node::text(card.description.clone())]);
        element.connected();
        Rc::new(RefCell::new(element))
    });

    let on_drop = element.clone();
    use_drop(move || on_drop.borrow_mut().disconnected());

    // Re-run when the language changes
    let _ = state.strings.read();
    let html = {
        let mut element = element.borrow_mut();
        element.translations_applied();
        match element.update() {
            Some(outcome) => outcome.tree.to_html(),
            None => element.render().to_html(),
        }
    };

    let descriptor = context
        .registry
        .get(TAG)
        .map(|definition| definition.hax_properties)
        .unwrap_or_default();

    rsx! {
        section {
            style: "padding: 1.5rem; border-top: 1px solid #ddd;",
            h2 { style: "font-size: 1rem; margin-bottom: 0.5rem;", "Rendered markup" }
            p { style: "font-size: 0.75rem; color: #666;", "Page-builder descriptor: {descriptor}" }
            pre {
                style: "white-space: pre-wrap; font-size: 0.75rem; background: #fff; padding: 1rem; border-radius: 4px;",
                "{html}"
            }
        }
    }
}
