use alloc::format;
use alloc::string::String;

use crate::*;

/// What lies under the foil: a background fill and an optional centred label.
#[derive(Clone, Debug, PartialEq)]
pub struct CardFace {
    /// `None` leaves the canvas transparent under the mask.
    pub background: Option<&'static str>,
    pub label: Option<&'static str>,
    pub color: &'static str,
    pub font_px: f64,
}

impl CardFace {
    pub const BACKGROUND: &'static str = "#fff";
    const FONT_RATIO: f64 = 0.2;
    const MIN_FONT_PX: f64 = 12.0;

    pub fn blank() -> Self {
        Self {
            background: None,
            label: None,
            color: "black",
            font_px: Self::MIN_FONT_PX,
        }
    }

    pub fn for_outcome(outcome: Outcome, (_, height): Size2) -> Self {
        Self {
            background: Some(Self::BACKGROUND),
            label: Some(outcome.label()),
            color: outcome.color(),
            font_px: (f64::from(height) * Self::FONT_RATIO).max(Self::MIN_FONT_PX),
        }
    }

    /// CSS font shorthand for the label.
    pub fn font(&self) -> String {
        format!("bold {}px sans-serif", self.font_px)
    }

    pub fn anchor((width, height): Size2) -> Point2 {
        (f64::from(width) / 2.0, f64::from(height) / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn win_face_is_green_text_on_white() {
        let face = CardFace::for_outcome(Outcome::Win, (300, 200));

        assert_eq!(face.background, Some("#fff"));
        assert_eq!(face.label, Some("あたり！"));
        assert_eq!(face.color, "green");
        assert_eq!(face.font(), "bold 40px sans-serif");
    }

    #[test]
    fn lose_face_is_red() {
        let face = CardFace::for_outcome(Outcome::Lose, (300, 200));

        assert_eq!(face.label, Some("ハズレ"));
        assert_eq!(face.color, "red");
    }

    #[test]
    fn font_has_a_floor() {
        assert_eq!(CardFace::for_outcome(Outcome::Win, (30, 20)).font_px, 12.0);
    }

    #[test]
    fn anchor_is_center() {
        assert_eq!(CardFace::anchor((300, 201)), (150.0, 100.5));
    }
}
