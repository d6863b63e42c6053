//! Element registry
//!
//! Explicit replacement for a page-global custom element registry. Hosts create
//! one and define element types in it before first use.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use serde::Serialize;
use thiserror::Error;

/// Registry errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Element {0} is already defined")]
    AlreadyDefined(String),
    #[error("Invalid custom element name: {0}")]
    InvalidName(String),
}

/// A registered element type
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ElementDefinition {
    pub tag: String,
    pub observed_attributes: Vec<&'static str>,
    /// Location of the page-builder descriptor
    pub hax_properties: String,
}

pub struct ElementRegistry {
    definitions: DashMap<String, ElementDefinition>,
}

impl ElementRegistry {
    pub fn new() -> Self {
        Self {
            definitions: DashMap::new(),
        }
    }

    /// Define an element type. Tags can be defined once.
    pub fn define(&self, definition: ElementDefinition) -> Result<(), RegistryError> {
        if !is_valid_custom_element_name(&definition.tag) {
            return Err(RegistryError::InvalidName(definition.tag));
        }
        // Entry API so check-and-insert is a single step
        match self.definitions.entry(definition.tag.clone()) {
            Entry::Occupied(entry) => Err(RegistryError::AlreadyDefined(entry.key().clone())),
            Entry::Vacant(entry) => {
                tracing::info!("Defined element <{}>", definition.tag);
                entry.insert(definition);
                Ok(())
            }
        }
    }

    pub fn get(&self, tag: &str) -> Option<ElementDefinition> {
        self.definitions.get(tag).map(|d| d.clone())
    }

    pub fn is_defined(&self, tag: &str) -> bool {
        self.definitions.contains_key(tag)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl Default for ElementRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Starts with a lowercase ASCII letter, contains a hyphen, no uppercase
fn is_valid_custom_element_name(name: &str) -> bool {
    let starts_lower = name.chars().next().is_some_and(|c| c.is_ascii_lowercase());
    starts_lower
        && name.contains('-')
        && !name.chars().any(|c| c.is_ascii_uppercase() || c.is_whitespace())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{DddCardElement, TAG};

    #[test]
    fn test_define_card() {
        let registry = ElementRegistry::new();
        DddCardElement::define(&registry).unwrap();

        let definition = registry.get(TAG).unwrap();
        assert_eq!(definition.observed_attributes, vec!["title", "link", "image", "data-primary"]);
        assert!(definition.hax_properties.ends_with("/lib/ddd-card.haxProperties.json"));
    }

    #[test]
    fn test_second_definition_is_rejected() {
        let registry = ElementRegistry::new();
        DddCardElement::define(&registry).unwrap();
        assert_eq!(
            DddCardElement::define(&registry),
            Err(RegistryError::AlreadyDefined(TAG.to_string()))
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_invalid_names() {
        let registry = ElementRegistry::new();
        for name in ["card", "Ddd-card", "1-card", "", "ddd card-x"] {
            let result = registry.define(ElementDefinition {
                tag: name.to_string(),
                observed_attributes: Vec::new(),
                hax_properties: String::new(),
            });
            assert_eq!(result, Err(RegistryError::InvalidName(name.to_string())));
        }
        assert!(registry.is_empty());
    }
}
