use crate::geometry::PlayArea;

use super::card::Card;

/// Stop a card that reached the floor. Inelastic: vy goes to zero, no bounce.
///
/// Only the floor is checked here. Cards spawn above the container and fall
/// in, so the top edge is never enforced by physics.
#[inline]
pub fn resolve_floor(card: &mut Card, area: &PlayArea) -> bool {
    if card.pos.y >= area.floor_y() {
        card.pos.y = area.floor_y();
        card.velocity.y = 0.0;
        return true;
    }
    false
}

/// Keep a card between the walls; any contact kills horizontal drift for good.
#[inline]
pub fn resolve_walls(card: &mut Card, area: &PlayArea) -> bool {
    let (x, hit) = area.clamp_x(card.pos.x);
    if hit {
        card.pos.x = x;
        card.velocity.x = 0.0;
    }
    hit
}
