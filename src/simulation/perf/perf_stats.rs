use wasm_bindgen::prelude::*;

/// Snapshot of the last tick. All zeros while perf metrics are off.
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) tick_ms: f64,
    pub(super) cards_simulated: u32,
    pub(super) cards_held: u32,
    pub(super) cards_settled: u32,
    pub(super) floor_contacts: u32,
    pub(super) wall_contacts: u32,
    pub(super) frame: u64,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn tick_ms(&self) -> f64 { self.tick_ms }
    #[wasm_bindgen(getter)]
    pub fn cards_simulated(&self) -> u32 { self.cards_simulated }
    #[wasm_bindgen(getter)]
    pub fn cards_held(&self) -> u32 { self.cards_held }
    #[wasm_bindgen(getter)]
    pub fn cards_settled(&self) -> u32 { self.cards_settled }
    #[wasm_bindgen(getter)]
    pub fn floor_contacts(&self) -> u32 { self.floor_contacts }
    #[wasm_bindgen(getter)]
    pub fn wall_contacts(&self) -> u32 { self.wall_contacts }
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.frame }
}
