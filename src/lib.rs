//! ddd-card
//!
//! A themed card element: image with an accent bar, title, slotted description
//! and a call-to-action link, with localized strings.

pub mod app;
pub mod card;
pub mod i18n;
pub mod registry;
pub mod storage;
pub mod types;
pub mod ui;

/// Directory the card's own resources (locales, page-builder descriptor) live in
pub const MODULE_BASE: &str = env!("CARGO_MANIFEST_DIR");
