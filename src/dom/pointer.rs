use gloo_events::EventListener;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, MouseEvent, PointerEvent};

use super::window;

/// What the window saw, already reduced to what the drag code needs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum PointerSample {
    Move { pointer_id: i32, client_x: f32, client_y: f32 },
    Up { pointer_id: i32 },
    /// Focus lost or pointer left the window: release everything.
    Lost,
}

fn sample_from_event(event: &Event) -> Option<PointerSample> {
    match event.type_().as_str() {
        "pointermove" => event.dyn_ref::<PointerEvent>().map(|e| PointerSample::Move {
            pointer_id: e.pointer_id(),
            client_x: e.client_x() as f32,
            client_y: e.client_y() as f32,
        }),
        "pointerup" | "pointercancel" => event
            .dyn_ref::<PointerEvent>()
            .map(|e| PointerSample::Up { pointer_id: e.pointer_id() }),
        "pointerout" => event
            .dyn_ref::<MouseEvent>()
            .filter(|e| e.related_target().is_none())
            .map(|_| PointerSample::Lost),
        "blur" => Some(PointerSample::Lost),
        _ => None,
    }
}

const EVENTS: [&str; 5] = ["pointermove", "pointerup", "pointercancel", "pointerout", "blur"];

/// Window-wide pointer listeners, so a drag survives the pointer leaving
/// the card. Dropping the vec unregisters them.
pub(crate) fn listen_window_pointers(
    on_sample: impl Fn(PointerSample) + Clone + 'static,
) -> Result<Vec<EventListener>, JsValue> {
    let window = window()?;
    Ok(EVENTS
        .iter()
        .map(|&name| {
            let on_sample = on_sample.clone();
            EventListener::new(&window, name, move |event: &Event| {
                if let Some(sample) = sample_from_event(event) {
                    on_sample(sample);
                }
            })
        })
        .collect())
}
