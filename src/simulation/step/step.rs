use crate::systems::physics::{step_in_place, StepOutcome};

use super::{Lifecycle, PerfTimer, WidgetCore};

/// One scheduler tick. Does nothing unless the widget is running.
pub(super) fn tick(world: &mut WidgetCore, dt: f32) -> StepOutcome {
    if world.lifecycle != Lifecycle::Running {
        return StepOutcome::default();
    }

    let perf_on = world.perf_enabled;
    let tick_start = if perf_on { Some(PerfTimer::start()) } else { None };

    // Bounds are resolved per tick so a late measurement is picked up
    // without touching the cards.
    let bounds = world.bounds();
    let params = world.physics_params();
    let outcome = step_in_place(&mut world.cards, bounds, &params, dt);

    if let Some(start) = tick_start {
        let area = world.play_area();
        world.perf_stats.reset();
        world.perf_stats.cards_simulated = outcome.simulated;
        world.perf_stats.cards_held = outcome.held;
        world.perf_stats.floor_contacts = outcome.floor_contacts;
        world.perf_stats.wall_contacts = outcome.wall_contacts;
        world.perf_stats.cards_settled = world.cards.iter().filter(|c| c.is_settled(&area)).count() as u32;
        world.perf_stats.frame = world.frame;
        world.perf_stats.tick_ms = start.elapsed_ms();
    }

    world.frame += 1;
    outcome
}
