//! The eight directions a piece can step in.

use crate::Square;
use std::fmt;

/// One of the eight board directions.
///
/// Diagonals combine one vertical and one horizontal component; their
/// bounds tests and steps are the conjunction and composition of the
/// component operations on [`Square`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    /// All directions in order.
    pub const ALL: [Direction; 8] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    /// Returns true if one step in this direction stays on the board.
    #[inline]
    pub const fn can_step(self, from: Square) -> bool {
        match self {
            Direction::Up => from.can_step_up(),
            Direction::Down => from.can_step_down(),
            Direction::Left => from.can_step_left(),
            Direction::Right => from.can_step_right(),
            Direction::UpLeft => from.can_step_up_left(),
            Direction::UpRight => from.can_step_up_right(),
            Direction::DownLeft => from.can_step_down_left(),
            Direction::DownRight => from.can_step_down_right(),
        }
    }

    /// Takes one step in this direction. Callers must check
    /// [`Direction::can_step`] first.
    #[inline]
    pub const fn step(self, from: Square) -> Square {
        match self {
            Direction::Up => from.step_up(),
            Direction::Down => from.step_down(),
            Direction::Left => from.step_left(),
            Direction::Right => from.step_right(),
            Direction::UpLeft => from.step_up_left(),
            Direction::UpRight => from.step_up_right(),
            Direction::DownLeft => from.step_down_left(),
            Direction::DownRight => from.step_down_right(),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::UpLeft => "up-left",
            Direction::UpRight => "up-right",
            Direction::DownLeft => "down-left",
            Direction::DownRight => "down-right",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_from_interior_square() {
        let d5 = Square::parse("D5").unwrap();
        let expected = [
            (Direction::Up, "D6"),
            (Direction::Down, "D4"),
            (Direction::Left, "C5"),
            (Direction::Right, "E5"),
            (Direction::UpLeft, "C6"),
            (Direction::UpRight, "E6"),
            (Direction::DownLeft, "C4"),
            (Direction::DownRight, "E4"),
        ];
        for (direction, label) in expected {
            assert!(direction.can_step(d5));
            assert_eq!(direction.step(d5).to_label(), label);
        }
    }

    #[test]
    fn every_direction_is_open_from_the_interior() {
        let e4 = Square::parse("E4").unwrap();
        for direction in Direction::ALL {
            assert!(direction.can_step(e4), "{} from E4", direction);
        }
    }

    #[test]
    fn blocked_at_board_edge() {
        let a1 = Square::A1;
        assert!(!Direction::Left.can_step(a1));
        assert!(!Direction::Down.can_step(a1));
        assert!(!Direction::DownLeft.can_step(a1));
        assert!(!Direction::UpLeft.can_step(a1));
        assert!(!Direction::DownRight.can_step(a1));
        assert!(Direction::Up.can_step(a1));
        assert!(Direction::Right.can_step(a1));
        assert!(Direction::UpRight.can_step(a1));
    }
}
