use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_timers::callback::Interval;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{self, PointerSample, VisibilityObserver};
use crate::domain::catalog::Catalog;
use crate::domain::config::WidgetConfig;

use super::perf_stats::PerfStats;
use super::{Lifecycle, WidgetCore};

/// State shared between the JS-facing handle and the browser callbacks.
/// Callbacks only hold a `Weak`, so freeing the widget drops every handle.
struct WidgetShared {
    core: RefCell<WidgetCore>,
    container: RefCell<Option<Element>>,
    ticker: RefCell<Option<Interval>>,
    observer: RefCell<Option<VisibilityObserver>>,
    listeners: RefCell<Vec<EventListener>>,
}

impl WidgetShared {
    fn new(core: WidgetCore) -> Rc<Self> {
        Rc::new(Self {
            core: RefCell::new(core),
            container: RefCell::new(None),
            ticker: RefCell::new(None),
            observer: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
        })
    }

    /// Run `f` on the core, or return `fallback` if a callback already holds it.
    fn with_core<R>(&self, fallback: R, f: impl FnOnce(&mut WidgetCore) -> R) -> R {
        match self.core.try_borrow_mut() {
            Ok(mut core) => f(&mut core),
            Err(_) => fallback,
        }
    }

    fn start_ticker(self: &Rc<Self>) {
        if self.ticker.borrow().is_some() {
            return;
        }
        let Some(tick_ms) = self.core.try_borrow().ok().map(|core| core.config().tick_ms) else {
            return;
        };

        let weak = Rc::downgrade(self);
        let interval = Interval::new(tick_ms, move || {
            if let Some(shared) = weak.upgrade() {
                shared.with_core((), |core| {
                    core.tick();
                });
            }
        });
        *self.ticker.borrow_mut() = Some(interval);
        console_log!("skillfall: ticking every {}ms", tick_ms);
    }

    fn stop_ticker(&self) {
        let stopped = self.ticker.borrow_mut().take();
        if stopped.is_some() {
            drop(stopped);
            console_log!("skillfall: ticker stopped");
        }
    }

    fn on_visibility(self: &Rc<Self>, ratio: f32) {
        let activated = self.with_core(false, |core| core.report_visibility(ratio));
        if activated {
            self.start_ticker();
        }
    }

    fn on_pointer(&self, sample: PointerSample) {
        let container = self.container.borrow();
        self.with_core((), |core| {
            if !core.is_dragging() {
                return;
            }
            match sample {
                PointerSample::Move {
                    pointer_id,
                    client_x,
                    client_y,
                } => {
                    if let Some(element) = container.as_ref() {
                        let pos = dom::client_to_container(element, client_x, client_y);
                        core.pointer_move(pointer_id, pos.x, pos.y);
                    }
                }
                PointerSample::Up { pointer_id } => {
                    core.pointer_up(pointer_id);
                }
                PointerSample::Lost => {
                    core.release_all();
                }
            }
        });
    }

    fn has_container(&self) -> bool {
        self.container.borrow().is_some()
    }
}

#[wasm_bindgen]
pub struct SkillWidget {
    shared: Rc<WidgetShared>,
}

impl SkillWidget {
    pub fn from_core(core: WidgetCore) -> Self {
        Self {
            shared: WidgetShared::new(core),
        }
    }
}

impl Default for SkillWidget {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl SkillWidget {
    /// Widget over the built-in skill list with default tuning
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::from_core(WidgetCore::with_defaults())
    }

    /// Widget over a JSON catalog, optionally with a JSON config
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(catalog_json: &str, config_json: Option<String>) -> Result<SkillWidget, JsValue> {
        let catalog = Catalog::from_json(catalog_json).map_err(|e| {
            console_warn!("skillfall: bad catalog: {}", e);
            JsValue::from_str(&e)
        })?;
        let config = match config_json {
            Some(json) => WidgetConfig::from_json(&json).map_err(|e| {
                console_warn!("skillfall: bad config: {}", e);
                JsValue::from_str(&e)
            })?,
            None => WidgetConfig::default(),
        };
        Ok(Self::from_core(WidgetCore::new(catalog, config)))
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 {
        self.shared.core.try_borrow().map(|core| core.frame()).unwrap_or(0)
    }

    #[wasm_bindgen(getter)]
    pub fn card_count(&self) -> usize {
        self.shared.core.try_borrow().map(|core| core.cards().len()).unwrap_or(0)
    }

    #[wasm_bindgen(getter)]
    pub fn is_running(&self) -> bool {
        self.shared.core.try_borrow().map(|core| core.is_running()).unwrap_or(false)
    }

    #[wasm_bindgen(getter)]
    pub fn is_dragging(&self) -> bool {
        self.shared.core.try_borrow().map(|core| core.is_dragging()).unwrap_or(false)
    }

    #[wasm_bindgen(getter)]
    pub fn lifecycle(&self) -> String {
        let lifecycle = self
            .shared
            .core
            .try_borrow()
            .map(|core| core.lifecycle())
            .unwrap_or(Lifecycle::Dormant);
        match lifecycle {
            Lifecycle::Dormant => "dormant",
            Lifecycle::Running => "running",
            Lifecycle::Paused => "paused",
            Lifecycle::TornDown => "torn_down",
        }
        .to_string()
    }

    // === BROWSER WIRING ===

    /// Measure `container`, watch it for visibility and listen to window
    /// pointer events. Activation then starts the ticker on its own.
    pub fn attach(&self, container: Element) -> Result<(), JsValue> {
        let bounds = dom::measure(&container);
        let threshold = self
            .shared
            .with_core(None, |core| {
                core.set_container_size(bounds.width, bounds.height);
                Some(core.config().visibility_threshold)
            })
            .unwrap_or_default();

        let weak = Rc::downgrade(&self.shared);
        let observer = VisibilityObserver::observe(&container, threshold, move |ratio| {
            if let Some(shared) = weak.upgrade() {
                shared.on_visibility(ratio);
            }
        })?;

        let weak = Rc::downgrade(&self.shared);
        let listeners = dom::listen_window_pointers(move |sample| {
            if let Some(shared) = weak.upgrade() {
                shared.on_pointer(sample);
            }
        })?;

        *self.shared.container.borrow_mut() = Some(container);
        *self.shared.observer.borrow_mut() = Some(observer);
        *self.shared.listeners.borrow_mut() = listeners;
        Ok(())
    }

    /// Re-measure the attached container (call from a resize handler).
    pub fn refresh_bounds(&self) -> bool {
        let Some(bounds) = self.shared.container.borrow().as_ref().map(dom::measure) else {
            return false;
        };
        self.shared
            .with_core(false, |core| core.set_container_size(bounds.width, bounds.height))
    }

    /// Start the fixed-interval ticker (no-op until activated).
    pub fn start(&self) {
        if self.is_running() {
            self.shared.start_ticker();
        }
    }

    pub fn stop(&self) {
        self.shared.stop_ticker();
    }

    /// Drop every timer, observer and listener; the widget is done.
    pub fn destroy(&self) {
        self.shared.stop_ticker();
        self.shared.with_core((), |core| core.teardown());
        self.shared.observer.borrow_mut().take();
        self.shared.listeners.borrow_mut().clear();
        self.shared.container.borrow_mut().take();
    }

    // === ACTIVATION ===

    /// Manual visibility report for hosts that run their own observer.
    pub fn report_visibility(&self, visible_ratio: f32) -> bool {
        let activated = self.shared.with_core(false, |core| core.report_visibility(visible_ratio));
        if activated && self.shared.has_container() {
            self.shared.start_ticker();
        }
        activated
    }

    pub fn set_container_size(&self, width: f32, height: f32) -> bool {
        self.shared.with_core(false, |core| core.set_container_size(width, height))
    }

    pub fn pause(&self) -> bool {
        let paused = self.shared.with_core(false, |core| core.pause());
        if paused {
            self.shared.stop_ticker();
        }
        paused
    }

    pub fn resume(&self) -> bool {
        let resumed = self.shared.with_core(false, |core| core.resume());
        if resumed && self.shared.has_container() {
            self.shared.start_ticker();
        }
        resumed
    }

    // === SIMULATION ===

    /// One tick by hand. Returns the number of cards integrated.
    pub fn tick(&self) -> u32 {
        self.shared.with_core(0, |core| core.tick().simulated)
    }

    pub fn step_by(&self, dt: f32) -> u32 {
        self.shared.with_core(0, |core| core.step_by(dt).simulated)
    }

    // === DRAG API (container-local coordinates) ===

    pub fn begin_drag(&self, card_id: &str, x: f32, y: f32, pointer_id: Option<i32>) -> bool {
        self.shared
            .with_core(false, |core| core.begin_drag(card_id, x, y, pointer_id))
    }

    /// Pointer down in viewport coordinates, mapped through the attached container.
    pub fn begin_drag_client(&self, card_id: &str, client_x: f32, client_y: f32, pointer_id: i32) -> bool {
        let pos = match self.shared.container.borrow().as_ref() {
            Some(element) => dom::client_to_container(element, client_x, client_y),
            None => crate::geometry::Vec2::new(client_x, client_y),
        };
        self.begin_drag(card_id, pos.x, pos.y, Some(pointer_id))
    }

    pub fn move_drag(&self, card_id: &str, x: f32, y: f32) -> bool {
        self.shared.with_core(false, |core| core.move_drag(card_id, x, y))
    }

    pub fn end_drag(&self, card_id: &str) -> bool {
        self.shared.with_core(false, |core| core.end_drag(card_id))
    }

    pub fn pointer_move(&self, pointer_id: i32, x: f32, y: f32) -> usize {
        self.shared.with_core(0, |core| core.pointer_move(pointer_id, x, y))
    }

    pub fn pointer_up(&self, pointer_id: i32) -> usize {
        self.shared.with_core(0, |core| core.pointer_up(pointer_id))
    }

    pub fn release_all(&self) -> usize {
        self.shared.with_core(0, |core| core.release_all())
    }

    // === RENDER ===

    /// Cards back to front as JSON (see `CardView`)
    pub fn render_json(&self) -> String {
        self.shared
            .core
            .try_borrow()
            .map(|core| core.render_json())
            .unwrap_or_else(|_| "[]".to_string())
    }

    // === SETTINGS / PERF ===

    pub fn set_gravity(&self, gravity: f32) -> bool {
        self.shared.with_core(false, |core| core.set_gravity(gravity))
    }

    pub fn set_friction(&self, friction: f32) -> bool {
        self.shared.with_core(false, |core| core.set_friction(friction))
    }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&self, enabled: bool) {
        self.shared.with_core((), |core| core.enable_perf_metrics(enabled));
    }

    /// Get last tick perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.shared
            .core
            .try_borrow()
            .map(|core| core.get_perf_stats())
            .unwrap_or_default()
    }
}
