use std::sync::Arc;

use crate::domain::catalog::Catalog;
use crate::domain::config::WidgetConfig;
use crate::geometry::{PlayArea, Vec2};
use crate::systems::drag::DragController;
use crate::systems::physics::Card;
use crate::systems::visibility::VisibilityTrigger;

use super::perf_stats::PerfStats;
use super::random::{next_unit, seed_state};
use super::{Lifecycle, WidgetCore};

pub(super) fn create_widget_core(catalog: Catalog, config: WidgetConfig) -> WidgetCore {
    let config = config.sanitized();
    WidgetCore {
        catalog: Arc::new(catalog),
        trigger: VisibilityTrigger::new(config.visibility_threshold),
        rng_state: seed_state(config.seed),
        config,
        cards: Vec::new(),
        drag: DragController::new(),
        measured: None,
        lifecycle: Lifecycle::Dormant,
        frame: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}

/// Build one card per catalog item, staggered above the container so they
/// rain in one after another.
pub(super) fn seed_cards(world: &mut WidgetCore) {
    let area = world.play_area();
    let card_height = world.config.card_height;
    let spacing = world.config.spawn_spacing;
    let speed_min = world.config.spawn_speed_min;
    let jitter = world.config.spawn_speed_jitter;

    let catalog = Arc::clone(&world.catalog);
    let mut cards = Vec::with_capacity(catalog.len());
    for (index, item) in catalog.items().iter().enumerate() {
        let x = next_unit(&mut world.rng_state) * area.max_x;
        let y = -card_height - index as f32 * spacing;
        let vy = speed_min + next_unit(&mut world.rng_state) * jitter;
        cards.push(Card::from_item(item, Vec2::new(x, y), Vec2::new(0.0, vy)));
    }
    world.cards = cards;
}

/// Bring every card back inside after the container changed size.
///
/// Cards still entering from above keep their negative y; held cards are
/// clamped on all four edges like any drag move.
pub(super) fn reenforce_bounds(cards: &mut [Card], area: &PlayArea) {
    for card in cards.iter_mut() {
        if card.held {
            card.pos = area.clamp(card.pos);
            continue;
        }
        let (x, hit_wall) = area.clamp_x(card.pos.x);
        if hit_wall {
            card.pos.x = x;
            card.velocity.x = 0.0;
        }
        if card.pos.y > area.floor_y() {
            card.pos.y = area.floor_y();
            card.velocity.y = 0.0;
        }
    }
}
