//! Card property model
//!
//! Holds the configurable state of one card and tracks which properties changed
//! since the last update cycle.

use serde::{Deserialize, Serialize};

/// Configurable state of a single card
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    /// Heading text
    pub title: String,
    /// Call-to-action target, opened in a new browsing context
    pub link: String,
    /// Image source
    pub image: String,
    /// Palette token id for the accent bar, empty for the default color
    pub primary: String,
}

impl CardConfig {
    pub fn get(&self, property: CardProperty) -> &str {
        match property {
            CardProperty::Title => &self.title,
            CardProperty::Link => &self.link,
            CardProperty::Image => &self.image,
            CardProperty::Primary => &self.primary,
        }
    }

    fn slot_mut(&mut self, property: CardProperty) -> &mut String {
        match property {
            CardProperty::Title => &mut self.title,
            CardProperty::Link => &mut self.link,
            CardProperty::Image => &mut self.image,
            CardProperty::Primary => &mut self.primary,
        }
    }
}

/// The reactive properties of a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardProperty {
    Title,
    Link,
    Image,
    Primary,
}

impl CardProperty {
    pub const ALL: [CardProperty; 4] = [
        CardProperty::Title,
        CardProperty::Link,
        CardProperty::Image,
        CardProperty::Primary,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CardProperty::Title => "title",
            CardProperty::Link => "link",
            CardProperty::Image => "image",
            CardProperty::Primary => "primary",
        }
    }

    /// Attribute this property is observed from and reflected to
    pub fn attribute(self) -> &'static str {
        match self {
            CardProperty::Primary => "data-primary",
            other => other.name(),
        }
    }

    pub fn from_attribute(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.attribute() == name)
    }
}

/// Properties written since the last update, with their previous values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangedProperties {
    entries: Vec<(CardProperty, String)>,
}

impl ChangedProperties {
    pub fn contains(&self, property: CardProperty) -> bool {
        self.entries.iter().any(|(p, _)| *p == property)
    }

    /// Value the property had before the first write in this cycle
    pub fn previous(&self, property: CardProperty) -> Option<&str> {
        self.entries
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, old)| old.as_str())
    }

    pub fn properties(&self) -> impl Iterator<Item = CardProperty> + '_ {
        self.entries.iter().map(|(p, _)| *p)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    fn record(&mut self, property: CardProperty, old: String) {
        if !self.contains(property) {
            self.entries.push((property, old));
        }
    }
}

/// Reactive wrapper around [`CardConfig`]
///
/// Every write schedules an update, even when the value is unchanged. No
/// validation is applied to written values.
#[derive(Debug, Clone, Default)]
pub struct PropertyModel {
    config: CardConfig,
    changed: ChangedProperties,
    update_pending: bool,
}

impl PropertyModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CardConfig) -> Self {
        let mut model = Self::new();
        for property in CardProperty::ALL {
            model.set(property, config.get(property).to_string());
        }
        model
    }

    pub fn config(&self) -> &CardConfig {
        &self.config
    }

    pub fn get(&self, property: CardProperty) -> &str {
        self.config.get(property)
    }

    pub fn set(&mut self, property: CardProperty, value: impl Into<String>) {
        // Keep the oldest value if the property was already written this cycle
        let old = std::mem::replace(self.config.slot_mut(property), value.into());
        self.changed.record(property, old);
        self.request_update();
    }

    /// Schedule an update without touching any property
    pub fn request_update(&mut self) {
        self.update_pending = true;
    }

    pub fn is_update_pending(&self) -> bool {
        self.update_pending
    }

    /// Hand the pending changes to an update cycle, clearing them
    pub fn take_changes(&mut self) -> Option<ChangedProperties> {
        if !self.update_pending {
            return None;
        }
        self.update_pending = false;
        Some(std::mem::take(&mut self.changed))
    }

    /// Apply an observed attribute change. `None` means the attribute was
    /// removed. Returns `false` for attributes that are not observed.
    pub fn attribute_changed(&mut self, name: &str, value: Option<&str>) -> bool {
        match CardProperty::from_attribute(name) {
            // Removal resets the property to empty
            Some(property) => {
                self.set(property, value.unwrap_or_default());
                true
            }
            None => false,
        }
    }

    /// Attributes mirrored from properties. Only `primary` reflects; it is
    /// omitted while empty.
    pub fn reflected_attributes(&self) -> Vec<(&'static str, String)> {
        if self.config.primary.is_empty() {
            Vec::new()
        } else {
            vec![(
                CardProperty::Primary.attribute(),
                self.config.primary.clone(),
            )]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_empty() {
        let model = PropertyModel::new();
        for property in CardProperty::ALL {
            assert_eq!(model.get(property), "");
        }
        assert!(!model.is_update_pending());
    }

    #[test]
    fn test_write_schedules_update_and_records_previous_value() {
        let mut model = PropertyModel::new();
        model.set(CardProperty::Title, "First");
        model.set(CardProperty::Title, "Second");

        let changes = model.take_changes().unwrap();
        assert!(changes.contains(CardProperty::Title));
        assert_eq!(changes.previous(CardProperty::Title), Some(""));
        assert_eq!(changes.len(), 1);
        assert_eq!(model.get(CardProperty::Title), "Second");

        assert!(model.take_changes().is_none());
    }

    #[test]
    fn test_same_value_write_still_schedules() {
        let mut model = PropertyModel::new();
        model.set(CardProperty::Link, "");
        assert!(model.is_update_pending());
    }

    #[test]
    fn test_attribute_mapping() {
        assert_eq!(CardProperty::from_attribute("data-primary"), Some(CardProperty::Primary));
        assert_eq!(CardProperty::from_attribute("primary"), None);
        assert_eq!(CardProperty::from_attribute("title"), Some(CardProperty::Title));

        let mut model = PropertyModel::new();
        assert!(model.attribute_changed("data-primary", Some("4")));
        assert_eq!(model.config().primary, "4");
        assert!(model.attribute_changed("data-primary", None));
        assert_eq!(model.config().primary, "");
        assert!(!model.attribute_changed("style", Some("color: red")));
    }

    #[test]
    fn test_primary_reflection() {
        let mut model = PropertyModel::new();
        assert!(model.reflected_attributes().is_empty());

        model.set(CardProperty::Primary, "3");
        assert_eq!(
            model.reflected_attributes(),
            vec![("data-primary", "3".to_string())]
        );
    }

    #[test]
    fn test_with_config_marks_every_property_changed() {
        let config = CardConfig {
            title: "Intro".to_string(),
            primary: "6".to_string(),
            ..CardConfig::default()
        };
        let mut model = PropertyModel::with_config(config.clone());
        assert_eq!(model.config(), &config);

        let changes = model.take_changes().unwrap();
        assert_eq!(changes.properties().collect::<Vec<_>>(), CardProperty::ALL.to_vec());
    }

    #[test]
    fn test_config_deserializes_with_missing_fields() {
        let config: CardConfig = serde_json::from_str(r#"{"title":"Only title"}"#).unwrap();
        assert_eq!(config.title, "Only title");
        assert_eq!(config.primary, "");
    }
}
