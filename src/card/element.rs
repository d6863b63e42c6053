//! Card element instance
//!
//! Composes the property model, style derivation and renderer with a
//! localization collaborator supplied at construction.

use std::sync::Arc;
use uuid::Uuid;

use crate::card::config::{CardConfig, CardProperty, ChangedProperties, PropertyModel};
use crate::card::render::render;
use crate::card::strings::CardStrings;
use crate::card::style::{accent_bar_style, BarStyle};
use crate::card::{hax_properties_location, TAG};
use crate::i18n::{Localization, LocalizationConfig, LocalizationRegistration};
use crate::registry::{ElementDefinition, ElementRegistry, RegistryError};
use crate::types::dom::Node;

/// Result of one update cycle
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateOutcome {
    pub changed: ChangedProperties,
    /// Accent bar override, `None` when the static default applies
    pub bar_style: Option<BarStyle>,
    pub tree: Node,
}

pub struct DddCardElement {
    id: Uuid,
    properties: PropertyModel,
    localization: Arc<dyn Localization>,
    strings: CardStrings,
    seen_generation: u64,
    slotted: Vec<Node>,
    connected: bool,
}

impl DddCardElement {
    /// Observed attributes, in property order
    pub fn observed_attributes() -> Vec<&'static str> {
        CardProperty::ALL.iter().map(|p| p.attribute()).collect()
    }

    /// Define the element type in `registry`. A second definition under the
    /// same tag is rejected by the registry and returned as is.
    pub fn define(registry: &ElementRegistry) -> Result<(), RegistryError> {
        registry.define(ElementDefinition {
            tag: TAG.to_string(),
            observed_attributes: Self::observed_attributes(),
            hax_properties: hax_properties_location(crate::MODULE_BASE),
        })
    }

    pub fn new(localization: Arc<dyn Localization>) -> Self {
        Self::with_config(localization, LocalizationConfig::global().clone())
    }

    /// Construct with an explicit locale configuration
    pub fn with_config(localization: Arc<dyn Localization>, config: LocalizationConfig) -> Self {
        let id = Uuid::new_v4();
        localization.register_localization(LocalizationRegistration {
            context: TAG.to_string(),
            instance: id,
            config,
        });

        let strings = CardStrings::from_translations(localization.translations(TAG).as_ref());
        let seen_generation = localization.generation();
        let mut properties = PropertyModel::new();
        properties.request_update();

        Self {
            id,
            properties,
            localization,
            strings,
            seen_generation,
            slotted: Vec::new(),
            connected: false,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn config(&self) -> &CardConfig {
        self.properties.config()
    }

    pub fn strings(&self) -> &CardStrings {
        &self.strings
    }

    pub fn title(&self) -> &str {
        self.properties.get(CardProperty::Title)
    }

    pub fn link(&self) -> &str {
        self.properties.get(CardProperty::Link)
    }

    pub fn image(&self) -> &str {
        self.properties.get(CardProperty::Image)
    }

    pub fn primary(&self) -> &str {
        self.properties.get(CardProperty::Primary)
    }

    pub fn set_title(&mut self, value: impl Into<String>) {
        self.properties.set(CardProperty::Title, value);
    }

    pub fn set_link(&mut self, value: impl Into<String>) {
        self.properties.set(CardProperty::Link, value);
    }

    pub fn set_image(&mut self, value: impl Into<String>) {
        self.properties.set(CardProperty::Image, value);
    }

    pub fn set_primary(&mut self, value: impl Into<String>) {
        self.properties.set(CardProperty::Primary, value);
    }

    pub fn set_property(&mut self, property: CardProperty, value: impl Into<String>) {
        self.properties.set(property, value);
    }

    pub fn attribute_changed(&mut self, name: &str, value: Option<&str>) {
        if !self.properties.attribute_changed(name, value) {
            tracing::trace!("Ignoring unobserved attribute {}", name);
        }
    }

    pub fn reflected_attributes(&self) -> Vec<(&'static str, String)> {
        self.properties.reflected_attributes()
    }

    /// Replace the children projected into the description slot
    pub fn set_slotted(&mut self, children: Vec<Node>) {
        self.slotted = children;
        self.properties.request_update();
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn connected(&mut self) {
        self.connected = true;
        self.properties.request_update();
    }

    pub fn disconnected(&mut self) {
        self.connected = false;
    }

    /// Pick up translations applied since the last check. Returns whether an
    /// update was scheduled; detached instances ignore new translations.
    pub fn translations_applied(&mut self) -> bool {
        // Detached: a late load must not touch this instance
        if !self.connected {
            return false;
        }
        let generation = self.localization.generation();
        if generation == self.seen_generation {
            return false;
        }
        self.seen_generation = generation;
        self.strings =
            CardStrings::from_translations(self.localization.translations(TAG).as_ref());
        self.properties.request_update();
        true
    }

    pub fn is_update_pending(&self) -> bool {
        self.properties.is_update_pending()
    }

    /// Run an update cycle if one is pending
    pub fn update(&mut self) -> Option<UpdateOutcome> {
        let changed = self.properties.take_changes()?;
        let bar_style = accent_bar_style(self.primary());
        let tree = self.render();
        tracing::debug!(
            "Updated {} {} ({} changed properties)",
            TAG,
            self.id,
            changed.len()
        );
        Some(UpdateOutcome {
            changed,
            bar_style,
            tree,
        })
    }

    /// Current tree, derived from scratch
    pub fn render(&self) -> Node {
        render(self.properties.config(), &self.strings, &self.slotted)
    }
}

impl Drop for DddCardElement {
    fn drop(&mut self) {
        self.localization.unregister_instance(self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::manager::I18nManager;
    use crate::i18n::source::StaticSource;
    use crate::i18n::{NoLocalization, Translations};

    fn localized_manager() -> Arc<I18nManager> {
        let source = StaticSource::new();
        let mut zh = Translations::new();
        zh.insert("explore".to_string(), "探索 >".to_string());
        source.insert(TAG, "zh", zh);
        Arc::new(I18nManager::new(Arc::new(source)))
    }

    #[test]
    fn test_construction_registers_localization() {
        let manager = localized_manager();
        let first = DddCardElement::new(manager.clone());
        let second = DddCardElement::new(manager.clone());
        assert_ne!(first.id(), second.id());
        assert!(manager.is_registered(TAG));
        assert_eq!(manager.instance_count(TAG), 2);
    }

    #[test]
    fn test_dropped_instances_unregister() {
        let manager = localized_manager();
        let kept = DddCardElement::new(manager.clone());
        {
            let _dropped = DddCardElement::new(manager.clone());
            assert_eq!(manager.instance_count(TAG), 2);
        }
        assert_eq!(manager.instance_count(TAG), 1);
        assert!(manager.is_registered(TAG));

        drop(kept);
        assert_eq!(manager.instance_count(TAG), 0);
    }

    #[test]
    fn test_initial_update_renders_defaults() {
        let mut card = DddCardElement::new(Arc::new(NoLocalization));
        let outcome = card.update().unwrap();
        assert!(outcome.changed.is_empty());
        assert!(outcome.bar_style.is_none());
        assert_eq!(outcome.tree.find_by_tag("a").unwrap().text_content(), "Explore >");
        assert!(card.update().is_none());
    }

    #[test]
    fn test_property_writes_flow_into_next_update() {
        let mut card = DddCardElement::new(Arc::new(NoLocalization));
        card.update();

        card.set_title("Intro to Systems");
        card.set_image("/img/cpu.png");
        card.set_link("https://example.org/course");
        card.set_primary("2");

        let outcome = card.update().unwrap();
        assert_eq!(outcome.changed.len(), 4);
        assert_eq!(
            outcome.bar_style.map(|s| s.background_color),
            Some("var(--ddd-primary-2)".to_string())
        );
        assert_eq!(outcome.tree.find_by_tag("h3").unwrap().text_content(), "Intro to Systems");
        assert_eq!(card.reflected_attributes(), vec![("data-primary", "2".to_string())]);
    }

    #[test]
    fn test_unsupported_primary_is_silent() {
        let mut card = DddCardElement::new(Arc::new(NoLocalization));
        card.attribute_changed("data-primary", Some("99"));
        let outcome = card.update().unwrap();
        assert_eq!(card.primary(), "99");
        assert_eq!(crate::card::style::effective_accent(card.primary()), 2);
        assert!(outcome.tree.find_by_class("bar").is_some());
    }

    #[test]
    fn test_slotted_children_schedule_update() {
        let mut card = DddCardElement::new(Arc::new(NoLocalization));
        card.update();
        card.set_slotted(vec![Node::text("About this course")]);
        let outcome = card.update().unwrap();
        assert_eq!(
            outcome.tree.find_by_class("desc").unwrap().text_content(),
            "About this course"
        );
    }

    #[test]
    fn test_observed_attributes() {
        assert_eq!(
            DddCardElement::observed_attributes(),
            vec!["title", "link", "image", "data-primary"]
        );
    }

    #[tokio::test]
    async fn test_translations_rerender_connected_instances() {
        let manager = localized_manager();
        let mut card = DddCardElement::new(manager.clone());
        card.connected();
        card.update();

        assert!(!card.translations_applied());
        manager.set_language("zh-TW").await.unwrap();
        assert!(card.translations_applied());

        let outcome = card.update().unwrap();
        assert_eq!(outcome.tree.find_by_tag("a").unwrap().text_content(), "探索 >");
    }

    #[tokio::test]
    async fn test_detached_instance_ignores_translations() {
        let manager = localized_manager();
        let mut card = DddCardElement::new(manager.clone());
        card.connected();
        card.update();
        card.disconnected();

        manager.set_language("zh").await.unwrap();
        assert!(!card.translations_applied());
        assert!(!card.is_update_pending());
        assert_eq!(card.strings().explore, "Explore >");
    }

    #[tokio::test]
    async fn test_new_instance_starts_with_applied_translations() {
        let manager = localized_manager();
        let _first = DddCardElement::new(manager.clone());
        manager.set_language("zh").await.unwrap();

        let late = DddCardElement::new(manager.clone());
        assert_eq!(late.strings().explore, "探索 >");
    }
}
