use crate::geometry::CardSize;

/// Constants the step function runs with
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicsParams {
    /// Added to vy every tick, positive = down
    pub gravity: f32,
    /// Multiplier applied to vx every tick, in (0, 1)
    pub friction: f32,
    pub card: CardSize,
}

/// What happened to one card during one integration
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CardStepResult {
    pub skipped: bool,
    pub hit_floor: bool,
    pub hit_wall: bool,
}

impl CardStepResult {
    #[inline]
    pub fn skipped() -> Self {
        Self {
            skipped: true,
            ..Self::default()
        }
    }
}

/// Per-tick totals, feeds the perf snapshot
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepOutcome {
    pub simulated: u32,
    pub held: u32,
    pub floor_contacts: u32,
    pub wall_contacts: u32,
}

impl StepOutcome {
    pub(crate) fn record(&mut self, result: CardStepResult) {
        if result.skipped {
            self.held += 1;
            return;
        }
        self.simulated += 1;
        if result.hit_floor {
            self.floor_contacts += 1;
        }
        if result.hit_wall {
            self.wall_contacts += 1;
        }
    }
}
