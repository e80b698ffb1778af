//! Pointer drag and drop
//!
//! Each card runs its own tiny state machine, `Idle -> Held -> Idle`:
//! - pointer down on a card: begin (Idle -> Held)
//! - pointer move: only meaningful while Held
//! - pointer up / cancel / window blur: end (Held -> Idle), velocity reset
//!
//! The held flag lives on the card itself; the grab offset lives in a
//! session owned by the controller. Several cards may be held at once
//! (multi-touch), one session per card.

mod controller;
mod session;

pub use controller::DragController;
pub use session::{DragPhase, DragSession};
