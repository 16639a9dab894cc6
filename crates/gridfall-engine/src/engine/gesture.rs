//! Pointer-gesture classification.
//!
//! The game is also playable with a pointer: press, drag, release. Only
//! the displacement between press and release matters, so the host can
//! feed touch points or terminal mouse cells alike.

/// Player command derived from a completed gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeAction {
    MoveLeft,
    MoveRight,
    HardDrop,
    RotateClockwise,
}

/// Classifies the displacement from press to release.
///
/// The axis with the larger magnitude wins and ties go to the vertical
/// branch: a horizontal swipe moves toward the drag, a downward swipe
/// hard-drops, and anything else, upward swipes and plain taps included,
/// rotates clockwise.
#[must_use]
pub fn classify_swipe(dx: i32, dy: i32) -> SwipeAction {
    if dx.abs() > dy.abs() {
        if dx < 0 {
            SwipeAction::MoveLeft
        } else {
            SwipeAction::MoveRight
        }
    } else if dy > 0 {
        SwipeAction::HardDrop
    } else {
        SwipeAction::RotateClockwise
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_larger_axis_wins() {
        assert_eq!(classify_swipe(-8, 3), SwipeAction::MoveLeft);
        assert_eq!(classify_swipe(9, -4), SwipeAction::MoveRight);
        assert_eq!(classify_swipe(2, 7), SwipeAction::HardDrop);
        assert_eq!(classify_swipe(1, -6), SwipeAction::RotateClockwise);
    }

    #[test]
    fn a_tap_rotates() {
        assert_eq!(classify_swipe(0, 0), SwipeAction::RotateClockwise);
    }

    #[test]
    fn axis_ties_go_vertical() {
        assert_eq!(classify_swipe(5, 5), SwipeAction::HardDrop);
        assert_eq!(classify_swipe(-5, 5), SwipeAction::HardDrop);
        assert_eq!(classify_swipe(5, -5), SwipeAction::RotateClockwise);
        assert_eq!(classify_swipe(-5, -5), SwipeAction::RotateClockwise);
    }

    #[test]
    fn pure_vertical_zero_horizontal() {
        assert_eq!(classify_swipe(0, 12), SwipeAction::HardDrop);
        assert_eq!(classify_swipe(0, -12), SwipeAction::RotateClockwise);
        assert_eq!(classify_swipe(-12, 0), SwipeAction::MoveLeft);
        assert_eq!(classify_swipe(12, 0), SwipeAction::MoveRight);
    }
}
