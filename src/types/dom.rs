//! DOM tree description
//!
//! A small, display-independent tree that the card renderer produces. Hosts can
//! serialize it to HTML or query it directly.

use serde::{Deserialize, Serialize};

/// A node in a rendered tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Node {
    /// An element with a tag name, ordered attributes and children
    Element(ElementNode),
    /// A text node
    Text(String),
    /// An insertion point for externally supplied children
    Slot(SlotNode),
}

/// An element node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementNode {
    pub tag: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

/// A slot and the children assigned to it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotNode {
    /// `None` for the default slot
    pub name: Option<String>,
    pub assigned: Vec<Node>,
}

/// Elements that never have children or a closing tag
const VOID_ELEMENTS: &[&str] = &["img", "br", "hr", "input", "link", "meta"];

impl Node {
    /// Start building an element node
    pub fn element(tag: impl Into<String>) -> ElementNode {
        ElementNode {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    /// The default slot with the given assigned children
    pub fn slot(assigned: Vec<Node>) -> Self {
        Node::Slot(SlotNode {
            name: None,
            assigned,
        })
    }

    pub fn as_element(&self) -> Option<&ElementNode> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Concatenated text of this node and all descendants, slots included
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
            Node::Slot(slot) => {
                for child in &slot.assigned {
                    child.collect_text(out);
                }
            }
        }
    }

    /// First element (depth-first, self included) carrying the given class
    pub fn find_by_class(&self, class: &str) -> Option<&ElementNode> {
        match self {
            Node::Element(element) => {
                if element.has_class(class) {
                    return Some(element);
                }
                element
                    .children
                    .iter()
                    .find_map(|child| child.find_by_class(class))
            }
            Node::Slot(slot) => slot
                .assigned
                .iter()
                .find_map(|child| child.find_by_class(class)),
            Node::Text(_) => None,
        }
    }

    /// First element (depth-first, self included) with the given tag
    pub fn find_by_tag(&self, tag: &str) -> Option<&ElementNode> {
        match self {
            Node::Element(element) => {
                if element.tag == tag {
                    return Some(element);
                }
                element.children.iter().find_map(|child| child.find_by_tag(tag))
            }
            Node::Slot(slot) => slot.assigned.iter().find_map(|child| child.find_by_tag(tag)),
            Node::Text(_) => None,
        }
    }

    /// First slot in the tree
    pub fn find_slot(&self) -> Option<&SlotNode> {
        match self {
            Node::Slot(slot) => Some(slot),
            Node::Element(element) => element.children.iter().find_map(Node::find_slot),
            Node::Text(_) => None,
        }
    }

    /// Serialize to HTML. Slots are emitted as `<slot>` wrapping their assigned
    /// children so the projection stays visible in the output.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(&escape_text(text)),
            Node::Slot(slot) => {
                out.push_str("<slot");
                if let Some(name) = &slot.name {
                    out.push_str(&format!(" name=\"{}\"", escape_attribute(name)));
                }
                out.push('>');
                for child in &slot.assigned {
                    child.write_html(out);
                }
                out.push_str("</slot>");
            }
            Node::Element(element) => {
                out.push('<');
                out.push_str(&element.tag);
                for (name, value) in &element.attributes {
                    out.push_str(&format!(" {}=\"{}\"", name, escape_attribute(value)));
                }
                out.push('>');
                if VOID_ELEMENTS.contains(&element.tag.as_str()) {
                    return;
                }
                for child in &element.children {
                    child.write_html(out);
                }
                out.push_str(&format!("</{}>", element.tag));
            }
        }
    }
}

impl ElementNode {
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Add an attribute only when a value is present
    pub fn attr_opt(self, name: impl Into<String>, value: Option<String>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attribute("class")
            .map(|classes| classes.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    pub fn text_content(&self) -> String {
        self.children.iter().map(Node::text_content).collect()
    }
}

impl From<ElementNode> for Node {
    fn from(element: ElementNode) -> Self {
        Node::Element(element)
    }
}

fn escape_text(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attribute(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node {
        Node::element("div")
            .class("outer box")
            .child(Node::element("span").class("inner").child(Node::text("a < b")))
            .child(Node::slot(vec![Node::text("slotted")]))
            .into()
    }

    #[test]
    fn test_find_by_class_matches_any_listed_class() {
        let tree = sample();
        assert_eq!(tree.find_by_class("box").map(|e| e.tag.as_str()), Some("div"));
        assert_eq!(tree.find_by_class("inner").map(|e| e.tag.as_str()), Some("span"));
        assert!(tree.find_by_class("missing").is_none());
    }

    #[test]
    fn test_text_content_includes_slot_children() {
        assert_eq!(sample().text_content(), "a < bslotted");
        assert_eq!(sample().find_slot().map(|s| s.assigned.len()), Some(1));
    }

    #[test]
    fn test_html_escapes_text_and_attributes() {
        let node: Node = Node::element("a")
            .attr("href", "https://example.org/?a=1&b=\"2\"")
            .child(Node::text("<Explore>"))
            .into();
        assert_eq!(
            node.to_html(),
            "<a href=\"https://example.org/?a=1&amp;b=&quot;2&quot;\">&lt;Explore&gt;</a>"
        );
    }

    #[test]
    fn test_tree_serializes_with_text_nodes() {
        let tree = sample();
        let json = serde_json::to_string(&tree).unwrap();
        assert!(json.contains(r#"{"kind":"text","value":"a < b"}"#));

        let restored: Node = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, tree);
    }

    #[test]
    fn test_void_elements_have_no_closing_tag() {
        let node: Node = Node::element("img").attr("src", "/x.png").attr("alt", "").into();
        assert_eq!(node.to_html(), "<img src=\"/x.png\" alt=\"\">");
    }

    #[test]
    fn test_html_wraps_slot_children() {
        assert_eq!(
            sample().to_html(),
            "<div class=\"outer box\"><span class=\"inner\">a &lt; b</span><slot>slotted</slot></div>"
        );
    }
}
