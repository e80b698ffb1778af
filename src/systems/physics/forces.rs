use super::card::Card;

/// Accelerate a card downward. No terminal velocity.
#[inline(always)]
pub fn apply_gravity(card: &mut Card, gravity: f32, dt: f32) {
    card.velocity.y += gravity * dt;
}

/// Decay horizontal drift: `vx * friction^dt`.
#[inline(always)]
pub fn apply_friction(card: &mut Card, friction: f32, dt: f32) {
    let factor = if dt == 1.0 { friction } else { friction.powf(dt) };
    card.velocity.x *= factor;
}
