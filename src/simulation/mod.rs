//! Widget core - falling skill cards
//!
//! `WidgetCore` only orchestrates:
//! - physics lives in systems/physics (pure step function)
//! - drag and drop in systems/drag
//! - one-shot activation in systems/visibility
//!
//! Everything here runs on one thread. The tick and the pointer handlers
//! take turns on the same card list; a held card is never integrated, which
//! is the only exclusion rule needed.

use std::sync::Arc;

use crate::domain::catalog::Catalog;
use crate::domain::config::WidgetConfig;
use crate::geometry::{ContainerBounds, PlayArea};
use crate::systems::drag::{DragController, DragPhase};
use crate::systems::physics::{Card, PhysicsParams, StepOutcome};
use crate::systems::visibility::VisibilityTrigger;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/random.rs"]
mod random;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

pub use facade::SkillWidget;
pub use perf_stats::PerfStats;
pub use render_extract::{stacking_order, CardView, HELD_Z_BASE};

use perf_timer::PerfTimer;

/// Where the widget is in its life.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    /// Waiting for the container to scroll into view; no cards yet.
    Dormant,
    Running,
    /// Explicitly deactivated; cards kept, ticks ignored.
    Paused,
    TornDown,
}

/// The widget state
pub struct WidgetCore {
    catalog: Arc<Catalog>,
    config: WidgetConfig,
    cards: Vec<Card>,
    drag: DragController,
    trigger: VisibilityTrigger,
    measured: Option<ContainerBounds>,

    // State
    lifecycle: Lifecycle,
    frame: u64,
    rng_state: u32,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl WidgetCore {
    pub fn new(catalog: Catalog, config: WidgetConfig) -> Self {
        init::create_widget_core(catalog, config)
    }

    pub fn with_defaults() -> Self {
        Self::new(Catalog::builtin(), WidgetConfig::default())
    }

    pub fn config(&self) -> &WidgetConfig { &self.config }

    pub fn lifecycle(&self) -> Lifecycle { self.lifecycle }

    pub fn is_running(&self) -> bool { self.lifecycle == Lifecycle::Running }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn cards(&self) -> &[Card] { &self.cards }

    pub fn card(&self, id: &str) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }

    /// Measured bounds, or the configured fallback before the first layout.
    pub fn bounds(&self) -> ContainerBounds {
        ContainerBounds::resolve(self.measured, self.config.fallback_bounds())
    }

    pub fn is_measured(&self) -> bool { self.measured.is_some() }

    pub fn play_area(&self) -> PlayArea {
        PlayArea::new(self.bounds(), self.config.card_size())
    }

    pub fn physics_params(&self) -> PhysicsParams {
        PhysicsParams {
            gravity: self.config.gravity,
            friction: self.config.friction,
            card: self.config.card_size(),
        }
    }

    // === ACTIVATION / LIFECYCLE ===

    /// Feed a visible ratio (0..=1). Returns true the one time it activates.
    pub fn report_visibility(&mut self, visible_ratio: f32) -> bool {
        commands::report_visibility(self, visible_ratio)
    }

    pub fn has_activated(&self) -> bool { self.trigger.has_fired() }

    /// New container size; cards outside the new bounds are pulled back in.
    pub fn set_container_size(&mut self, width: f32, height: f32) -> bool {
        commands::set_container_size(self, width, height)
    }

    pub fn pause(&mut self) -> bool {
        commands::pause(self)
    }

    pub fn resume(&mut self) -> bool {
        commands::resume(self)
    }

    pub fn teardown(&mut self) {
        commands::teardown(self)
    }

    // === SIMULATION ===

    /// One fixed tick.
    pub fn tick(&mut self) -> StepOutcome {
        step::tick(self, 1.0)
    }

    /// Advance by `dt` ticks (fractional allowed).
    pub fn step_by(&mut self, dt: f32) -> StepOutcome {
        step::tick(self, dt)
    }

    // === DRAG API ===

    pub fn begin_drag(&mut self, card_id: &str, x: f32, y: f32, pointer_id: Option<i32>) -> bool {
        commands::begin_drag(self, card_id, x, y, pointer_id)
    }

    pub fn move_drag(&mut self, card_id: &str, x: f32, y: f32) -> bool {
        commands::move_drag(self, card_id, x, y)
    }

    pub fn end_drag(&mut self, card_id: &str) -> bool {
        commands::end_drag(self, card_id)
    }

    pub fn pointer_move(&mut self, pointer_id: i32, x: f32, y: f32) -> usize {
        commands::pointer_move(self, pointer_id, x, y)
    }

    pub fn pointer_up(&mut self, pointer_id: i32) -> usize {
        commands::pointer_up(self, pointer_id)
    }

    /// Blur / pointer lost: end every drag.
    pub fn release_all(&mut self) -> usize {
        commands::release_all(self)
    }

    pub fn drag_phase(&self, card_id: &str) -> DragPhase {
        self.drag.phase(card_id)
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    // === RENDER ===

    /// Cards back to front, ready to place.
    pub fn render_snapshot(&self) -> Vec<CardView> {
        render_extract::render_snapshot(self)
    }

    pub fn render_json(&self) -> String {
        render_extract::render_json(self)
    }

    // === SETTINGS / PERF ===

    pub fn set_gravity(&mut self, gravity: f32) -> bool {
        settings::set_gravity(self, gravity)
    }

    pub fn set_friction(&mut self, friction: f32) -> bool {
        settings::set_friction(self, friction)
    }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last tick perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
