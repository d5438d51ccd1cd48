#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use brush::*;
pub use coords::*;
pub use effect::*;
pub use error::*;
pub use face::*;
pub use input::*;
pub use layout::*;
pub use mask::*;
pub use outcome::*;
pub use types::*;

mod brush;
mod coords;
mod effect;
mod error;
mod face;
mod input;
mod layout;
mod mask;
mod outcome;
mod types;

/// Everything that can be tuned about a card.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EffectConfig {
    pub layout: CanvasLayout,
    pub brush: BrushSize,
    /// Revealed fraction at which the reward control is shown.
    pub threshold: f64,
    pub mask_color: Rgb,
    /// Ask the result endpoint for an outcome and print it under the foil.
    pub fetch_outcome: bool,
    /// Also listen to touch events.
    pub touch: bool,
}

impl EffectConfig {
    pub fn validate(self) -> Result<Self> {
        if !(self.threshold > 0.0 && self.threshold <= 1.0) {
            return Err(ScratchError::InvalidThreshold(self.threshold));
        }
        self.brush.validate()?;
        if let CanvasLayout::Fixed(size) = self.layout {
            validate_size(size)?;
        }
        Ok(self)
    }
}

impl Default for EffectConfig {
    fn default() -> Self {
        Preset::default().config()
    }
}

/// The historical variants of the card, kept as named configurations.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Preset {
    /// Bare foil on a fixed canvas, mouse only, nothing printed underneath.
    Classic,
    /// Fixed canvas with the outcome fetched from the result endpoint.
    #[default]
    Fetched,
    /// Viewport-sized canvas, relative brush, touch input and a lower threshold.
    Mobile,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Classic, Preset::Fetched, Preset::Mobile];

    pub const fn config(self) -> EffectConfig {
        use Preset::*;
        match self {
            Classic => EffectConfig {
                layout: CanvasLayout::Fixed(CanvasLayout::DEFAULT_SIZE),
                brush: BrushSize::Fixed(30.0),
                threshold: 0.5,
                mask_color: Rgb::FOIL,
                fetch_outcome: false,
                touch: false,
            },
            Fetched => EffectConfig {
                fetch_outcome: true,
                ..Classic.config()
            },
            Mobile => EffectConfig {
                layout: CanvasLayout::Viewport {
                    margin: CanvasLayout::DEFAULT_MARGIN,
                },
                brush: BrushSize::Relative(0.1),
                threshold: 0.2,
                mask_color: Rgb::FOIL,
                fetch_outcome: true,
                touch: true,
            },
        }
    }

    pub const fn name(self) -> &'static str {
        use Preset::*;
        match self {
            Classic => "classic",
            Fetched => "fetched",
            Mobile => "mobile",
        }
    }
}
