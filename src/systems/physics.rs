//! Card physics
//!
//! Deliberately small model, one card at a time, no card-to-card contact:
//! - Gravity accelerates cards downward every tick (velocity is not capped)
//! - The floor stops a card dead, no bounce
//! - Friction decays horizontal drift toward zero
//! - Walls clamp x and kill horizontal drift
//!
//! Held cards are skipped entirely. The held flag is read per card at the
//! moment it is integrated, so a drag that started between two ticks is
//! always honoured by the next one.

mod card;
mod collision;
mod forces;
mod types;
mod update;

pub use card::Card;
pub use collision::{resolve_floor, resolve_walls};
pub use forces::{apply_friction, apply_gravity};
pub use types::{CardStepResult, PhysicsParams, StepOutcome};
pub use update::{integrate_card, step, step_in_place};
