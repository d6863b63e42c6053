//! Card renderer
//!
//! Pure derivation of the card's tree from its configuration, strings and
//! slotted children. Nothing is retained between calls.

use crate::card::config::CardConfig;
use crate::card::strings::CardStrings;
use crate::card::style::accent_bar_style;
use crate::types::dom::Node;

/// Browsing context the call-to-action opens in
pub const LINK_TARGET: &str = "_blank";

/// Render the card
///
/// ```text
/// div.card
/// ├── div.image  (img, div.bar)
/// └── div.content (h3.title, p.desc > slot, div.link > a)
/// ```
pub fn render(config: &CardConfig, strings: &CardStrings, slotted: &[Node]) -> Node {
    let bar_style = accent_bar_style(&config.primary).map(|style| style.to_inline());

    let image_region = Node::element("div")
        .class("image")
        .child(
            Node::element("img")
                .attr("src", config.image.as_str())
                .attr("alt", ""),
        )
        .child(Node::element("div").class("bar").attr_opt("style", bar_style));

    let content_region = Node::element("div")
        .class("content")
        .child(
            Node::element("h3")
                .class("title")
                .child(Node::text(config.title.as_str())),
        )
        .child(
            Node::element("p")
                .class("desc")
                .child(Node::slot(slotted.to_vec())),
        )
        .child(
            Node::element("div").class("link").child(
                Node::element("a")
                    .attr("href", config.link.as_str())
                    .attr("target", LINK_TARGET)
                    .child(Node::text(strings.explore.as_str())),
            ),
        );

    Node::element("div")
        .class("card")
        .child(image_region)
        .child(content_region)
        .into()
}
