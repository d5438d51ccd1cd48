use serde::{Deserialize, Serialize};

use crate::*;

/// How the canvas buffer size is chosen.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CanvasLayout {
    Fixed(Size2),
    /// Window inner size minus `margin` on each axis, recomputed on every resize.
    Viewport { margin: Size2 },
}

impl CanvasLayout {
    pub const DEFAULT_SIZE: Size2 = (300, 200);
    pub const DEFAULT_MARGIN: Size2 = (40, 200);

    pub const fn is_responsive(self) -> bool {
        matches!(self, Self::Viewport { .. })
    }

    /// Buffer size for a window of `viewport` CSS pixels. Never collapses below one pixel.
    pub fn resolve(self, (viewport_w, viewport_h): Point2) -> Size2 {
        match self {
            Self::Fixed(size) => size,
            Self::Viewport { margin } => (
                shrink(viewport_w, margin.0),
                shrink(viewport_h, margin.1),
            ),
        }
    }
}

impl Default for CanvasLayout {
    fn default() -> Self {
        Self::Fixed(Self::DEFAULT_SIZE)
    }
}

fn shrink(extent: f64, margin: Dim) -> Dim {
    // saturating cast: negative and NaN become 0
    ((extent - f64::from(margin)) as Dim).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_layout_ignores_viewport() {
        assert_eq!(
            CanvasLayout::default().resolve((1920.0, 1080.0)),
            (300, 200)
        );
    }

    #[test]
    fn viewport_layout_subtracts_margins() {
        let layout = CanvasLayout::Viewport {
            margin: CanvasLayout::DEFAULT_MARGIN,
        };

        assert!(layout.is_responsive());
        assert_eq!(layout.resolve((390.0, 844.0)), (350, 644));
        assert_eq!(layout.resolve((390.5, 844.9)), (350, 644));
    }

    #[test]
    fn tiny_viewport_keeps_one_pixel() {
        let layout = CanvasLayout::Viewport { margin: (40, 200) };

        assert_eq!(layout.resolve((10.0, 100.0)), (1, 1));
        assert_eq!(layout.resolve((f64::NAN, 0.0)), (1, 1));
    }
}
