use crate::geometry::{ContainerBounds, Vec2};

use super::init::{reenforce_bounds, seed_cards};
use super::{Lifecycle, WidgetCore};

pub(super) fn report_visibility(world: &mut WidgetCore, visible_ratio: f32) -> bool {
    if world.lifecycle == Lifecycle::TornDown {
        return false;
    }
    if !world.trigger.observe(visible_ratio) {
        return false;
    }
    activate(world)
}

/// Dormant -> Running, seeding the cards. Happens at most once.
fn activate(world: &mut WidgetCore) -> bool {
    if world.lifecycle != Lifecycle::Dormant {
        return false;
    }
    if world.measured.is_none() {
        console_warn!(
            "skillfall: container not measured yet, using fallback {}x{}",
            world.config.fallback_width,
            world.config.fallback_height
        );
    }
    seed_cards(world);
    world.lifecycle = Lifecycle::Running;
    let bounds = world.bounds();
    console_log!(
        "skillfall: activated with {} cards in {}x{}",
        world.cards.len(),
        bounds.width,
        bounds.height
    );
    true
}

pub(super) fn set_container_size(world: &mut WidgetCore, width: f32, height: f32) -> bool {
    let bounds = ContainerBounds::new(width, height);
    if !bounds.is_measured() {
        console_warn!("skillfall: ignoring container size {}x{}", width, height);
        return false;
    }
    world.measured = Some(bounds);
    let area = world.play_area();
    reenforce_bounds(&mut world.cards, &area);
    true
}

pub(super) fn begin_drag(world: &mut WidgetCore, card_id: &str, x: f32, y: f32, pointer_id: Option<i32>) -> bool {
    if world.lifecycle == Lifecycle::TornDown {
        return false;
    }
    world.drag.begin_drag(&mut world.cards, card_id, Vec2::new(x, y), pointer_id)
}

pub(super) fn move_drag(world: &mut WidgetCore, card_id: &str, x: f32, y: f32) -> bool {
    let area = world.play_area();
    world.drag.move_drag(&mut world.cards, &area, card_id, Vec2::new(x, y))
}

pub(super) fn end_drag(world: &mut WidgetCore, card_id: &str) -> bool {
    world.drag.end_drag(&mut world.cards, card_id)
}

pub(super) fn pointer_move(world: &mut WidgetCore, pointer_id: i32, x: f32, y: f32) -> usize {
    let area = world.play_area();
    world.drag.pointer_move(&mut world.cards, &area, pointer_id, Vec2::new(x, y))
}

pub(super) fn pointer_up(world: &mut WidgetCore, pointer_id: i32) -> usize {
    world.drag.pointer_up(&mut world.cards, pointer_id)
}

pub(super) fn release_all(world: &mut WidgetCore) -> usize {
    world.drag.release_all(&mut world.cards)
}

pub(super) fn pause(world: &mut WidgetCore) -> bool {
    if world.lifecycle != Lifecycle::Running {
        return false;
    }
    world.lifecycle = Lifecycle::Paused;
    true
}

pub(super) fn resume(world: &mut WidgetCore) -> bool {
    if world.lifecycle != Lifecycle::Paused {
        return false;
    }
    world.lifecycle = Lifecycle::Running;
    true
}

/// Final state: no more ticks, no drags, no re-activation.
pub(super) fn teardown(world: &mut WidgetCore) {
    release_all(world);
    world.lifecycle = Lifecycle::TornDown;
}
