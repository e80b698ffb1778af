use crate::geometry::{ContainerBounds, PlayArea, Vec2};

use super::card::Card;
use super::collision::{resolve_floor, resolve_walls};
use super::forces::{apply_friction, apply_gravity};
use super::types::{CardStepResult, PhysicsParams, StepOutcome};

/// Advance a single card by `dt` ticks.
///
/// Order: gravity, vertical move, floor, friction, horizontal move, walls.
pub fn integrate_card(card: &mut Card, params: &PhysicsParams, area: &PlayArea, dt: f32) -> CardStepResult {
    if card.held {
        return CardStepResult::skipped();
    }

    apply_gravity(card, params.gravity, dt);
    card.pos.y += card.velocity.y * dt;
    let hit_floor = resolve_floor(card, area);

    apply_friction(card, params.friction, dt);
    card.pos.x += card.velocity.x * dt;
    let hit_wall = resolve_walls(card, area);

    // Only reachable with a corrupted input; park the card on the floor.
    if !card.pos.is_finite() || !card.velocity.is_finite() {
        card.pos = area.clamp(card.pos.finite_or_zero());
        card.pos.y = area.floor_y();
        card.velocity = Vec2::zero();
    }

    CardStepResult {
        skipped: false,
        hit_floor,
        hit_wall,
    }
}

/// Integrate every card in place. Non-positive or non-finite `dt` is a no-op.
pub fn step_in_place(cards: &mut [Card], bounds: ContainerBounds, params: &PhysicsParams, dt: f32) -> StepOutcome {
    let mut outcome = StepOutcome::default();
    if !dt.is_finite() || dt <= 0.0 {
        return outcome;
    }

    let area = PlayArea::new(bounds, params.card);
    for card in cards.iter_mut() {
        outcome.record(integrate_card(card, params, &area, dt));
    }
    outcome
}

/// Pure form of [`step_in_place`]: `cards -> cards'`.
pub fn step(cards: &[Card], bounds: ContainerBounds, params: &PhysicsParams, dt: f32) -> Vec<Card> {
    let mut next = cards.to_vec();
    step_in_place(&mut next, bounds, params, dt);
    next
}
