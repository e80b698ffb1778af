/// One-shot activation from viewport visibility.
///
/// Fires the first time a reported visible ratio reaches the threshold and
/// never again for the life of the widget. The check is a level, not an
/// edge: a widget mounted already on screen activates on its first report.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityTrigger {
    threshold: f32,
    fired: bool,
}

impl VisibilityTrigger {
    pub fn new(threshold: f32) -> Self {
        let threshold = if threshold.is_finite() { threshold.clamp(0.0, 1.0) } else { 0.0 };
        Self { threshold, fired: false }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// Feed the current visible ratio. Returns `true` exactly once.
    pub fn observe(&mut self, visible_ratio: f32) -> bool {
        if self.fired || !visible_ratio.is_finite() {
            return false;
        }
        // A zero threshold still needs the region to actually be on screen.
        let visible = if self.threshold == 0.0 {
            visible_ratio > 0.0
        } else {
            visible_ratio >= self.threshold
        };
        if visible {
            self.fired = true;
        }
        visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_at_threshold() {
        let mut trigger = VisibilityTrigger::new(0.2);
        assert!(!trigger.observe(0.0));
        assert!(!trigger.observe(0.19));
        assert!(trigger.observe(0.2));
        assert!(!trigger.observe(1.0));
        assert!(!trigger.observe(0.0));
        assert!(!trigger.observe(0.5));
        assert!(trigger.has_fired());
    }

    #[test]
    fn already_visible_on_mount_fires() {
        let mut trigger = VisibilityTrigger::new(0.2);
        assert!(trigger.observe(1.0));
    }

    #[test]
    fn garbage_ratio_is_ignored() {
        let mut trigger = VisibilityTrigger::new(0.2);
        assert!(!trigger.observe(f32::NAN));
        assert!(!trigger.has_fired());
        let mut zero = VisibilityTrigger::new(0.0);
        assert!(!zero.observe(0.0));
        assert!(zero.observe(0.01));
    }
}
