//! Dioxus rendition of the card
//!
//! Same structure and classes as [`crate::card::render`], with the accent bar
//! override taken from the same style derivation.

use dioxus::prelude::*;

use crate::card::render::LINK_TARGET;
use crate::card::style::accent_bar_style;
use crate::card::styles::stylesheet;
use crate::card::{CardSizing, CardStrings};

#[component]
pub fn DddCard(
    #[props(default)] title: String,
    #[props(default)] link: String,
    #[props(default)] image: String,
    #[props(default)] primary: String,
    #[props(default)] sizing: CardSizing,
    children: Element,
) -> Element {
    // Strings come from the host when it provides them
    let explore = try_use_context::<Signal<CardStrings>>()
        .map(|strings| strings.read().explore.clone())
        .unwrap_or_else(|| CardStrings::default().explore);

    let bar_style = accent_bar_style(&primary).map(|style| style.to_inline());
    let data_primary = (!primary.is_empty()).then(|| primary.clone());
    let host_class = format!("ddd-card-{}", sizing.as_str());
    let sheet = stylesheet(&format!(".{}", host_class), sizing);

    rsx! {
        div {
            class: "{host_class}",
            "data-primary": data_primary,

            style { "{sheet}" }

            div {
                class: "card",
                div {
                    class: "image",
                    img { src: "{image}", alt: "" }
                    div { class: "bar", style: bar_style }
                }
                div {
                    class: "content",
                    h3 { class: "title", "{title}" }
                    p { class: "desc", {children} }
                    div {
                        class: "link",
                        a { href: "{link}", target: LINK_TARGET, "{explore}" }
                    }
                }
            }
        }
    }
}
