use serde::{Deserialize, Serialize};

use crate::geometry::{CardSize, ContainerBounds};

pub const DEFAULT_GRAVITY: f32 = 1.2;
pub const DEFAULT_FRICTION: f32 = 0.95;
pub const DEFAULT_CARD_WIDTH: f32 = 120.0;
pub const DEFAULT_CARD_HEIGHT: f32 = 60.0;
/// ~60 ticks per second
pub const DEFAULT_TICK_MS: u32 = 16;
pub const DEFAULT_VISIBILITY_THRESHOLD: f32 = 0.2;
pub const DEFAULT_FALLBACK_WIDTH: f32 = 1200.0;
pub const DEFAULT_FALLBACK_HEIGHT: f32 = 600.0;
pub const DEFAULT_SPAWN_SPACING: f32 = 30.0;
pub const DEFAULT_SPAWN_SPEED_MIN: f32 = 2.0;
pub const DEFAULT_SPAWN_SPEED_JITTER: f32 = 2.0;
pub const DEFAULT_SEED: u32 = 12345;

/// Widget tuning. Every field is optional in JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub gravity: f32,
    pub friction: f32,
    pub card_width: f32,
    pub card_height: f32,
    pub tick_ms: u32,
    pub visibility_threshold: f32,
    pub fallback_width: f32,
    pub fallback_height: f32,
    /// Vertical gap between staggered cards above the container.
    pub spawn_spacing: f32,
    pub spawn_speed_min: f32,
    pub spawn_speed_jitter: f32,
    pub seed: u32,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            friction: DEFAULT_FRICTION,
            card_width: DEFAULT_CARD_WIDTH,
            card_height: DEFAULT_CARD_HEIGHT,
            tick_ms: DEFAULT_TICK_MS,
            visibility_threshold: DEFAULT_VISIBILITY_THRESHOLD,
            fallback_width: DEFAULT_FALLBACK_WIDTH,
            fallback_height: DEFAULT_FALLBACK_HEIGHT,
            spawn_spacing: DEFAULT_SPAWN_SPACING,
            spawn_speed_min: DEFAULT_SPAWN_SPEED_MIN,
            spawn_speed_jitter: DEFAULT_SPAWN_SPEED_JITTER,
            seed: DEFAULT_SEED,
        }
    }
}

fn positive_or(value: f32, default: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        default
    }
}

fn non_negative_or(value: f32, default: f32) -> f32 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        default
    }
}

impl WidgetConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: WidgetConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        Ok(config.sanitized())
    }

    /// Replace out-of-range values with defaults.
    pub fn sanitized(mut self) -> Self {
        self.gravity = positive_or(self.gravity, DEFAULT_GRAVITY);
        if !(self.friction.is_finite() && self.friction > 0.0 && self.friction < 1.0) {
            self.friction = DEFAULT_FRICTION;
        }
        self.card_width = positive_or(self.card_width, DEFAULT_CARD_WIDTH);
        self.card_height = positive_or(self.card_height, DEFAULT_CARD_HEIGHT);
        if self.tick_ms == 0 {
            self.tick_ms = DEFAULT_TICK_MS;
        }
        if !(self.visibility_threshold.is_finite() && (0.0..=1.0).contains(&self.visibility_threshold)) {
            self.visibility_threshold = DEFAULT_VISIBILITY_THRESHOLD;
        }
        self.fallback_width = positive_or(self.fallback_width, DEFAULT_FALLBACK_WIDTH);
        self.fallback_height = positive_or(self.fallback_height, DEFAULT_FALLBACK_HEIGHT);
        self.spawn_spacing = non_negative_or(self.spawn_spacing, DEFAULT_SPAWN_SPACING);
        self.spawn_speed_min = non_negative_or(self.spawn_speed_min, DEFAULT_SPAWN_SPEED_MIN);
        self.spawn_speed_jitter = non_negative_or(self.spawn_speed_jitter, DEFAULT_SPAWN_SPEED_JITTER);
        self
    }

    pub fn card_size(&self) -> CardSize {
        CardSize::new(self.card_width, self.card_height)
    }

    pub fn fallback_bounds(&self) -> ContainerBounds {
        ContainerBounds::new(self.fallback_width, self.fallback_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = WidgetConfig::from_json(r#"{"gravity": 2.0}"#).expect("config should parse");
        assert_eq!(config.gravity, 2.0);
        assert_eq!(config.friction, DEFAULT_FRICTION);
        assert_eq!(config.card_size(), CardSize::new(120.0, 60.0));
    }

    #[test]
    fn out_of_range_values_are_replaced() {
        let config = WidgetConfig::from_json(
            r#"{"gravity": -1.0, "friction": 1.5, "card_width": 0, "tick_ms": 0, "visibility_threshold": 3}"#,
        )
        .expect("config should parse");
        assert_eq!(config.gravity, DEFAULT_GRAVITY);
        assert_eq!(config.friction, DEFAULT_FRICTION);
        assert_eq!(config.card_width, DEFAULT_CARD_WIDTH);
        assert_eq!(config.tick_ms, DEFAULT_TICK_MS);
        assert_eq!(config.visibility_threshold, DEFAULT_VISIBILITY_THRESHOLD);
    }
}
