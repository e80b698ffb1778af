use crate::domain::catalog::{CatalogItem, SkillCategory};
use crate::geometry::{PlayArea, Vec2};

/// A falling, draggable card. Display metadata is copied from the catalog
/// once and never changes afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Card {
    pub id: String,
    pub name: String,
    pub category: SkillCategory,
    pub color: Option<String>,
    /// Top-left corner, container-local pixels
    pub pos: Vec2,
    /// Pixels per tick
    pub velocity: Vec2,
    /// Under direct pointer control; physics leaves it alone.
    pub held: bool,
}

impl Card {
    pub fn from_item(item: &CatalogItem, pos: Vec2, velocity: Vec2) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            category: item.category,
            color: item.color.clone(),
            pos,
            velocity,
            held: false,
        }
    }

    /// Resting on the floor with no vertical motion left.
    pub fn is_settled(&self, area: &PlayArea) -> bool {
        !self.held && self.pos.y == area.floor_y() && self.velocity.y == 0.0
    }
}
