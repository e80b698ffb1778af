use super::perf_stats::PerfStats;
use super::WidgetCore;

pub(super) fn enable_perf_metrics(world: &mut WidgetCore, enabled: bool) {
    world.perf_enabled = enabled;
    if !enabled {
        world.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(world: &WidgetCore) -> PerfStats {
    world.perf_stats.clone()
}

/// Ignored unless finite and positive; gravity pointing up would lift
/// settled cards off the floor.
pub(super) fn set_gravity(world: &mut WidgetCore, gravity: f32) -> bool {
    if !(gravity.is_finite() && gravity > 0.0) {
        return false;
    }
    world.config.gravity = gravity;
    true
}

/// Ignored unless strictly between 0 and 1.
pub(super) fn set_friction(world: &mut WidgetCore, friction: f32) -> bool {
    if !(friction.is_finite() && friction > 0.0 && friction < 1.0) {
        return false;
    }
    world.config.friction = friction;
    true
}
