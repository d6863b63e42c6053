//! The `ddd-card` element
//!
//! A themed card showing an image with an accent bar, a title, slotted
//! description content and a call-to-action link.

pub mod config;
pub mod element;
pub mod render;
pub mod strings;
pub mod style;
pub mod styles;

pub use config::{CardConfig, CardProperty, ChangedProperties, PropertyModel};
pub use element::{DddCardElement, UpdateOutcome};
pub use strings::CardStrings;
pub use styles::CardSizing;

/// Custom element tag
pub const TAG: &str = "ddd-card";

/// Page-builder descriptor for the element, found by tag name under `lib/`
pub fn hax_properties_location(module_base: &str) -> String {
    format!(
        "{}/lib/{}.haxProperties.json",
        module_base.trim_end_matches('/'),
        TAG
    )
}
