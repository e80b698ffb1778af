//! Container-local geometry: vectors, card size, drop-zone bounds.

mod bounds;
mod vec2;

pub use bounds::{CardSize, ContainerBounds, PlayArea};
pub use vec2::Vec2;
