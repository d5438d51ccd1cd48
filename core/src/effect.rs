use crate::*;

/// Result of feeding one pointer sample to the effect.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum StrokeOutcome {
    NoChange,
    Scratched { fraction: f64 },
    /// The sample whose measurement first reached the threshold.
    RewardUnlocked { fraction: f64 },
}

impl StrokeOutcome {
    pub const fn has_update(self) -> bool {
        use StrokeOutcome::*;
        match self {
            NoChange => false,
            Scratched { .. } => true,
            RewardUnlocked { .. } => true,
        }
    }
}

/// One scratch-card session: the foil, the pointer state and the reveal progress.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealEffect {
    config: EffectConfig,
    outcome: Option<Outcome>,
    mask: Mask,
    brush_radius: f64,
    draw_state: DrawState,
    revealed: PixelCount,
    reward_shown: bool,
}

impl RevealEffect {
    pub fn new(config: EffectConfig, size: Size2, outcome: Option<Outcome>) -> Result<Self> {
        let config = config.validate()?;
        let mask = Mask::new(size, config.mask_color)?;
        let brush_radius = config.brush.radius_for(size);
        log::debug!(
            "new reveal effect {}x{}, brush radius {}, threshold {}",
            size.0,
            size.1,
            brush_radius,
            config.threshold
        );
        Ok(Self {
            config,
            outcome,
            mask,
            brush_radius,
            draw_state: DrawState::Idle,
            revealed: 0,
            reward_shown: false,
        })
    }

    /// Starts over at `size`: fresh foil, no progress, reward flag cleared. The outcome is kept.
    pub fn resize(&mut self, size: Size2) -> Result<()> {
        *self = Self::new(self.config, size, self.outcome)?;
        Ok(())
    }

    pub fn config(&self) -> &EffectConfig {
        &self.config
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn size(&self) -> Size2 {
        self.mask.size()
    }

    pub fn mask(&self) -> &Mask {
        &self.mask
    }

    pub fn brush_radius(&self) -> f64 {
        self.brush_radius
    }

    pub fn draw_state(&self) -> DrawState {
        self.draw_state
    }

    pub fn revealed_pixels(&self) -> PixelCount {
        self.revealed
    }

    pub fn reward_shown(&self) -> bool {
        self.reward_shown
    }

    pub fn face(&self) -> CardFace {
        match self.outcome {
            Some(outcome) => CardFace::for_outcome(outcome, self.size()),
            None => CardFace::blank(),
        }
    }

    pub fn handle(&mut self, input: PointerInput) -> StrokeOutcome {
        let PointerInput { phase, position } = input;
        log::trace!("{:?} at {:?} while {:?}", phase, position, self.draw_state);

        if phase == PointerPhase::Move && self.draw_state.is_drawing() {
            return self.stroke(position);
        }
        self.draw_state = self.draw_state.next(phase);
        StrokeOutcome::NoChange
    }

    /// Erases one brush disc at `center`, returning how many pixels it newly cleared.
    pub fn apply_brush(&mut self, center: Point2) -> PixelCount {
        self.mask.erase_disc(center, self.brush_radius)
    }

    /// Rescans the whole mask and returns the revealed fraction.
    pub fn measure_reveal(&mut self) -> f64 {
        self.revealed = self.mask.revealed_pixels();
        f64::from(self.revealed) / f64::from(self.mask.total_pixels())
    }

    /// Marks the reward shown when `fraction` reaches the threshold. `true` only on the first crossing.
    pub fn check_threshold(&mut self, fraction: f64) -> bool {
        if self.reward_shown || fraction < self.config.threshold {
            return false;
        }
        self.reward_shown = true;
        log::info!("reward unlocked at {:.3} revealed", fraction);
        true
    }

    fn stroke(&mut self, center: Point2) -> StrokeOutcome {
        self.apply_brush(center);
        let fraction = self.measure_reveal();
        log::debug!("revealed {} ({:.3})", self.revealed, fraction);
        if self.check_threshold(fraction) {
            StrokeOutcome::RewardUnlocked { fraction }
        } else {
            StrokeOutcome::Scratched { fraction }
        }
    }
}
