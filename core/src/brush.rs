use serde::{Deserialize, Serialize};

use crate::*;

/// How big the scratching disc is. Resolved to a pixel radius once per initialisation.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum BrushSize {
    /// Radius in buffer pixels.
    Fixed(f64),
    /// Radius as a fraction of the shorter surface side.
    Relative(f64),
}

impl BrushSize {
    /// Smallest radius ever used, so that a tiny relative brush still scratches something.
    pub const MIN_RADIUS: f64 = 1.0;

    pub fn validate(self) -> Result<Self> {
        let value = match self {
            Self::Fixed(value) | Self::Relative(value) => value,
        };
        if value.is_finite() && value > 0.0 {
            Ok(self)
        } else {
            Err(ScratchError::InvalidBrush(value))
        }
    }

    pub fn radius_for(self, (width, height): Size2) -> f64 {
        let radius = match self {
            Self::Fixed(radius) => radius,
            Self::Relative(fraction) => fraction * f64::from(width.min(height)),
        };
        radius.max(Self::MIN_RADIUS)
    }
}

impl Default for BrushSize {
    fn default() -> Self {
        Self::Fixed(30.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_radius_ignores_surface_size() {
        assert_eq!(BrushSize::Fixed(30.0).radius_for((300, 200)), 30.0);
        assert_eq!(BrushSize::Fixed(30.0).radius_for((10, 10)), 30.0);
    }

    #[test]
    fn relative_radius_follows_shorter_side() {
        assert_eq!(BrushSize::Relative(0.1).radius_for((800, 400)), 40.0);
        assert_eq!(BrushSize::Relative(0.1).radius_for((400, 800)), 40.0);
        assert_eq!(BrushSize::Relative(0.01).radius_for((20, 20)), 1.0);
    }

    #[test]
    fn radius_never_drops_below_one_pixel() {
        assert_eq!(BrushSize::Fixed(0.5).radius_for((10, 10)), 1.0);
    }

    #[test]
    fn validate_rejects_non_positive_sizes() {
        assert!(BrushSize::Fixed(12.5).validate().is_ok());
        assert_eq!(
            BrushSize::Fixed(0.0).validate(),
            Err(ScratchError::InvalidBrush(0.0))
        );
        assert!(BrushSize::Relative(f64::NAN).validate().is_err());
    }
}
