//! Browser bindings: intersection observer and window pointer listeners.
//! The ticker itself is a `gloo_timers` interval. Every handle removes itself
//! from the page on drop, so tearing the widget down leaves no timers or
//! listeners behind.
//!
//! Nothing in here may run outside a browser; native builds only ever hold
//! empty slots in place of these handles.

mod observer;
mod pointer;

pub(crate) use observer::VisibilityObserver;
pub(crate) use pointer::{listen_window_pointers, PointerSample};

use wasm_bindgen::JsValue;
use web_sys::{Element, Window};

use crate::geometry::{ContainerBounds, Vec2};

pub(crate) fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window"))
}

/// Current on-screen size of the drop zone.
pub(crate) fn measure(element: &Element) -> ContainerBounds {
    let rect = element.get_bounding_client_rect();
    ContainerBounds::new(rect.width() as f32, rect.height() as f32)
}

/// Client (viewport) coordinates to container-local coordinates.
pub(crate) fn client_to_container(element: &Element, client_x: f32, client_y: f32) -> Vec2 {
    let rect = element.get_bounding_client_rect();
    Vec2::new(client_x - rect.left() as f32, client_y - rect.top() as f32)
}
