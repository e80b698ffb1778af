pub mod drag;
pub mod physics;
pub mod visibility;
