//! Skillfall Engine - falling skill cards in WASM
//!
//! A catalog of skills becomes a pile of cards that rain into a container
//! once it scrolls into view, settle on the floor, and can be picked up and
//! dropped again with the pointer.
//!
//! Architecture:
//! - geometry/    - Vectors, card size, container bounds
//! - domain/      - Catalog, category styles, config
//! - systems/     - Physics step, drag controller, visibility trigger
//! - simulation/  - WidgetCore orchestration + JS facade
//! - dom/         - Browser observer and pointer listeners

// Logging macros (must be first for macro export!)
#[macro_use]
mod logging;
pub mod geometry;
pub mod domain;
pub mod systems;
pub mod simulation;
mod dom;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("skillfall engine initialized");
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::catalog::{Catalog, CatalogItem, SkillCategory};
pub use domain::config::WidgetConfig;
pub use simulation::{CardView, Lifecycle, PerfStats, SkillWidget, WidgetCore};
pub use systems::physics::Card;
