use serde::{Deserialize, Serialize};

use crate::*;

/// Normalised pointer phase. Mouse, pointer and touch events all collapse into these.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    Leave,
    Cancel,
}

/// One pointer sample, with its position already mapped into buffer space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerInput {
    pub phase: PointerPhase,
    pub position: Point2,
}

impl PointerInput {
    pub const fn new(phase: PointerPhase, position: Point2) -> Self {
        Self { phase, position }
    }

    pub const fn down(position: Point2) -> Self {
        Self::new(PointerPhase::Down, position)
    }

    pub const fn moved(position: Point2) -> Self {
        Self::new(PointerPhase::Move, position)
    }

    pub const fn up() -> Self {
        Self::new(PointerPhase::Up, (0.0, 0.0))
    }

    pub const fn leave() -> Self {
        Self::new(PointerPhase::Leave, (0.0, 0.0))
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawState {
    #[default]
    Idle,
    Drawing,
}

impl DrawState {
    pub const fn is_drawing(self) -> bool {
        matches!(self, Self::Drawing)
    }

    /// State after `phase`. `Move` never changes the state.
    pub const fn next(self, phase: PointerPhase) -> Self {
        use PointerPhase::*;
        match phase {
            Down => Self::Drawing,
            Up | Leave | Cancel => Self::Idle,
            Move => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_and_release_transitions() {
        use PointerPhase::*;

        assert_eq!(DrawState::Idle.next(Down), DrawState::Drawing);
        assert_eq!(DrawState::Drawing.next(Move), DrawState::Drawing);
        assert_eq!(DrawState::Idle.next(Move), DrawState::Idle);
        for phase in [Up, Leave, Cancel] {
            assert_eq!(DrawState::Drawing.next(phase), DrawState::Idle);
            assert_eq!(DrawState::Idle.next(phase), DrawState::Idle);
        }
    }
}
