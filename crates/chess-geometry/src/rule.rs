//! Composable move rules.

use crate::{Direction, Square};

/// A composable movement rule: a bounds test paired with a destination.
///
/// Rules form a small closed algebra. The eight base rules each step one
/// square in a single direction; [`MoveRule::then`] chains two rules in
/// sequence, and [`MoveRule::slide`] repeats a direction until the board
/// edge. Every rule is a plain `Copy` value, so the per-piece catalogs are
/// `const` tables shared read-only by all callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveRule {
    /// A single step in one direction.
    Step(Direction),
    /// Two rules in sequence; both must apply.
    Then(&'static MoveRule, &'static MoveRule),
    /// Repeated steps in one direction, landing on the last square before
    /// the edge.
    Slide(Direction),
}

impl MoveRule {
    /// One step left.
    pub const LEFT: MoveRule = MoveRule::Step(Direction::Left);
    /// One step right.
    pub const RIGHT: MoveRule = MoveRule::Step(Direction::Right);
    /// One step up.
    pub const UP: MoveRule = MoveRule::Step(Direction::Up);
    /// One step down.
    pub const DOWN: MoveRule = MoveRule::Step(Direction::Down);
    /// One step up-left.
    pub const UP_LEFT: MoveRule = MoveRule::Step(Direction::UpLeft);
    /// One step up-right.
    pub const UP_RIGHT: MoveRule = MoveRule::Step(Direction::UpRight);
    /// One step down-left.
    pub const DOWN_LEFT: MoveRule = MoveRule::Step(Direction::DownLeft);
    /// One step down-right.
    pub const DOWN_RIGHT: MoveRule = MoveRule::Step(Direction::DownRight);

    /// Chains two rules in sequence.
    ///
    /// The result applies only where `first` applies from the origin and
    /// `second` applies from `first`'s destination, and it lands where
    /// `second` lands. This is how knight leaps are built from two smaller
    /// steps.
    #[inline]
    pub const fn then(first: &'static MoveRule, second: &'static MoveRule) -> MoveRule {
        MoveRule::Then(first, second)
    }

    /// Repeats a directional step until the board edge.
    ///
    /// The result applies only where at least one step in `direction` is
    /// possible, and it lands on the furthest reachable square, never an
    /// intermediate one.
    #[inline]
    pub const fn slide(direction: Direction) -> MoveRule {
        MoveRule::Slide(direction)
    }

    /// Applies this rule from the given square.
    ///
    /// Returns the destination when the rule applies, `None` otherwise.
    /// An inapplicable rule is a normal outcome, not an error.
    pub fn apply(self, from: Square) -> Option<Square> {
        match self {
            MoveRule::Step(direction) => {
                if direction.can_step(from) {
                    Some(direction.step(from))
                } else {
                    None
                }
            }
            MoveRule::Then(first, second) => {
                first.apply(from).and_then(|mid| second.apply(mid))
            }
            MoveRule::Slide(direction) => {
                let mut current = from;
                while direction.can_step(current) {
                    current = direction.step(current);
                }
                if current == from {
                    None
                } else {
                    Some(current)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(label: &str) -> Square {
        Square::parse(label).unwrap()
    }

    #[test]
    fn step_applies_inside_the_board() {
        assert_eq!(MoveRule::UP.apply(sq("D5")), Some(sq("D6")));
        assert_eq!(MoveRule::DOWN_RIGHT.apply(sq("D5")), Some(sq("E4")));
    }

    #[test]
    fn step_is_inapplicable_at_the_edge() {
        assert_eq!(MoveRule::UP.apply(sq("D8")), None);
        assert_eq!(MoveRule::LEFT.apply(sq("A5")), None);
        assert_eq!(MoveRule::UP_LEFT.apply(sq("A5")), None);
    }

    #[test]
    fn then_chains_two_steps() {
        let leap = MoveRule::then(&MoveRule::UP_LEFT, &MoveRule::UP);
        assert_eq!(leap.apply(sq("D5")), Some(sq("C7")));
    }

    #[test]
    fn then_fails_when_the_first_step_leaves_the_board() {
        let leap = MoveRule::then(&MoveRule::UP_LEFT, &MoveRule::UP);
        assert_eq!(leap.apply(sq("A5")), None);
    }

    #[test]
    fn then_fails_when_the_second_step_leaves_the_board() {
        // B1 -> A2 is fine, but there is no square left of A2.
        let leap = MoveRule::then(&MoveRule::UP_LEFT, &MoveRule::LEFT);
        assert_eq!(leap.apply(sq("B1")), None);
    }

    #[test]
    fn slide_lands_on_the_furthest_square() {
        assert_eq!(MoveRule::slide(Direction::Up).apply(sq("D5")), Some(sq("D8")));
        assert_eq!(MoveRule::slide(Direction::Left).apply(sq("D5")), Some(sq("A5")));
        assert_eq!(
            MoveRule::slide(Direction::UpRight).apply(sq("A1")),
            Some(sq("H8"))
        );
    }

    #[test]
    fn slide_is_inapplicable_at_the_edge() {
        assert_eq!(MoveRule::slide(Direction::Up).apply(sq("D8")), None);
        assert_eq!(MoveRule::slide(Direction::DownLeft).apply(sq("A1")), None);
    }

    #[test]
    fn slide_never_stops_short() {
        // One step short of the edge still reaches the edge itself.
        assert_eq!(MoveRule::slide(Direction::Up).apply(sq("D7")), Some(sq("D8")));
    }
}
