use super::vec2::Vec2;

/// Size of a single card in pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardSize {
    pub width: f32,
    pub height: f32,
}

impl CardSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Measured size of the drop zone
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainerBounds {
    pub width: f32,
    pub height: f32,
}

impl ContainerBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// A layout that has not happened yet reports 0x0 (or garbage).
    pub fn is_measured(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Pick the measured bounds when usable, the fallback otherwise.
    pub fn resolve(measured: Option<ContainerBounds>, fallback: ContainerBounds) -> ContainerBounds {
        match measured {
            Some(bounds) if bounds.is_measured() => bounds,
            _ => fallback,
        }
    }
}

/// Range the top-left corner of a card may occupy inside the container.
///
/// `max_x`/`max_y` never go negative: a container narrower than a card pins
/// the card to the left/top edge instead of producing an empty range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayArea {
    pub max_x: f32,
    pub max_y: f32,
}

impl PlayArea {
    pub fn new(bounds: ContainerBounds, card: CardSize) -> Self {
        Self {
            max_x: (bounds.width - card.width).max(0.0),
            max_y: (bounds.height - card.height).max(0.0),
        }
    }

    #[inline]
    pub fn floor_y(&self) -> f32 {
        self.max_y
    }

    /// Clamp x into the walls. Returns the clamped value and whether a wall was hit.
    #[inline]
    pub fn clamp_x(&self, x: f32) -> (f32, bool) {
        if x < 0.0 {
            (0.0, true)
        } else if x > self.max_x {
            (self.max_x, true)
        } else {
            (x, false)
        }
    }

    /// Clamp all four edges.
    pub fn clamp(&self, pos: Vec2) -> Vec2 {
        Vec2::new(pos.x.clamp(0.0, self.max_x), pos.y.clamp(0.0, self.max_y))
    }

    pub fn contains(&self, pos: Vec2) -> bool {
        pos.x >= 0.0 && pos.x <= self.max_x && pos.y >= 0.0 && pos.y <= self.max_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmeasured_bounds_fall_back() {
        let fallback = ContainerBounds::new(1200.0, 600.0);
        assert_eq!(ContainerBounds::resolve(None, fallback), fallback);
        assert_eq!(
            ContainerBounds::resolve(Some(ContainerBounds::new(0.0, 0.0)), fallback),
            fallback
        );
        assert_eq!(
            ContainerBounds::resolve(Some(ContainerBounds::new(f32::NAN, 400.0)), fallback),
            fallback
        );
        let measured = ContainerBounds::new(800.0, 400.0);
        assert_eq!(ContainerBounds::resolve(Some(measured), fallback), measured);
    }

    #[test]
    fn play_area_never_inverts() {
        let area = PlayArea::new(ContainerBounds::new(100.0, 40.0), CardSize::new(120.0, 60.0));
        assert_eq!(area.max_x, 0.0);
        assert_eq!(area.max_y, 0.0);
        assert_eq!(area.clamp(Vec2::new(35.0, -10.0)), Vec2::zero());
    }

    #[test]
    fn clamp_x_reports_wall_contact() {
        let area = PlayArea::new(ContainerBounds::new(1200.0, 600.0), CardSize::new(120.0, 60.0));
        assert_eq!(area.clamp_x(-50.0), (0.0, true));
        assert_eq!(area.clamp_x(1100.0), (1080.0, true));
        assert_eq!(area.clamp_x(300.0), (300.0, false));
    }
}
