//! ddd-card gallery
//!
//! A desktop window showing configured cards with language switching.

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ddd_card::app::{App, AppContext};
use ddd_card::card::DddCardElement;
use ddd_card::i18n::manager::I18nManager;
use ddd_card::i18n::source::JsonDirSource;
use ddd_card::registry::ElementRegistry;
use ddd_card::storage::gallery::load_gallery;

fn main() {
    // Initialize tracing subscriber for logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("ddd_card=info".parse().unwrap()))
        .init();

    info!("Starting ddd-card gallery v{}", env!("CARGO_PKG_VERSION"));

    let gallery_path = std::env::args().nth(1).map(PathBuf::from);
    let gallery = load_gallery(gallery_path.as_deref());

    let registry = Arc::new(ElementRegistry::new());
    if let Err(e) = DddCardElement::define(&registry) {
        error!("{}", e);
        std::process::exit(1);
    }

    let context = AppContext {
        registry,
        i18n: Arc::new(I18nManager::new(Arc::new(JsonDirSource))),
        gallery,
    };

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::default().with_window(
                WindowBuilder::new()
                    .with_title("ddd-card")
                    .with_inner_size(LogicalSize::new(1200.0, 800.0)),
            ),
        )
        .with_context(context)
        .launch(App);
}
