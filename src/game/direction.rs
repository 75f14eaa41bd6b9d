use serde::{Deserialize, Serialize};

/// Direction the snake can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        self.opposite() == other
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Returns the delta (dx, dy) for one tile in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// How a requested 180-degree turn is treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReversalPolicy {
    /// Turn around anyway. A snake of three or more segments runs into its
    /// own neck on that tick.
    #[default]
    Allow,
    /// Drop the request and keep the current heading while the snake is
    /// longer than one segment.
    Ignore,
}

impl ReversalPolicy {
    /// Picks the effective direction for the next tick
    pub fn resolve(self, current: Direction, requested: Direction, snake_len: usize) -> Direction {
        match self {
            ReversalPolicy::Ignore if snake_len > 1 && current.is_opposite(requested) => current,
            _ => requested,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_directions() {
        assert!(Direction::Up.is_opposite(Direction::Down));
        assert!(Direction::Down.is_opposite(Direction::Up));
        assert!(Direction::Left.is_opposite(Direction::Right));
        assert!(Direction::Right.is_opposite(Direction::Left));

        assert!(!Direction::Up.is_opposite(Direction::Left));
        assert!(!Direction::Up.is_opposite(Direction::Up));
    }

    #[test]
    fn test_direction_delta() {
        assert_eq!(Direction::Up.delta(), (0, -1));
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::Left.delta(), (-1, 0));
        assert_eq!(Direction::Right.delta(), (1, 0));
    }

    #[test]
    fn test_allow_policy_passes_reversal_through() {
        let policy = ReversalPolicy::Allow;
        assert_eq!(
            policy.resolve(Direction::Right, Direction::Left, 5),
            Direction::Left
        );
    }

    #[test]
    fn test_ignore_policy_keeps_heading() {
        let policy = ReversalPolicy::Ignore;
        assert_eq!(
            policy.resolve(Direction::Right, Direction::Left, 3),
            Direction::Right
        );
        assert_eq!(
            policy.resolve(Direction::Right, Direction::Up, 3),
            Direction::Up
        );
        // A lone head has no neck to run into
        assert_eq!(
            policy.resolve(Direction::Right, Direction::Left, 1),
            Direction::Left
        );
    }
}
