//! Board model
//!
//! The board is a square of `size` x `size` cells with a set of impassable
//! obstacle cells and one exit cell. Immutable for the duration of a level.

use std::collections::HashSet;

use super::position::Position;

/// The static part of a level: dimensions, exit, and obstacles.
///
/// Invariants (upheld by the level generator):
/// - the exit is never an obstacle
/// - the player start `(size-1, size-1)` is never an obstacle or the exit
/// - a path from the player start to the exit exists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub size: i32,
    pub exit: Position,
    pub obstacles: HashSet<Position>,
}

impl Grid {
    pub fn new(size: i32, exit: Position, obstacles: HashSet<Position>) -> Self {
        Grid {
            size,
            exit,
            obstacles,
        }
    }

    /// True iff both axes lie within `[0, size)`.
    pub fn contains(&self, pos: Position) -> bool {
        pos.row >= 0 && pos.row < self.size && pos.col >= 0 && pos.col < self.size
    }

    /// True iff the cell is an obstacle. Out-of-bounds cells are not
    /// obstacles; check [`Self::contains`] separately.
    pub fn is_blocked(&self, pos: Position) -> bool {
        self.obstacles.contains(&pos)
    }

    /// In bounds and not an obstacle.
    pub fn is_walkable(&self, pos: Position) -> bool {
        self.contains(pos) && !self.is_blocked(pos)
    }

    /// The fixed player start cell, the lower-right corner.
    pub fn player_start(&self) -> Position {
        Position::new(self.size - 1, self.size - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(obstacles: &[(i32, i32)]) -> Grid {
        Grid::new(
            6,
            Position::new(0, 0),
            obstacles.iter().map(|&(r, c)| Position::new(r, c)).collect(),
        )
    }

    #[test]
    fn contains_accepts_corners_and_rejects_outside() {
        let grid = grid_with(&[]);
        assert!(grid.contains(Position::new(0, 0)));
        assert!(grid.contains(Position::new(5, 5)));
        assert!(!grid.contains(Position::new(-1, 0)));
        assert!(!grid.contains(Position::new(0, 6)));
        assert!(!grid.contains(Position::new(6, 5)));
    }

    #[test]
    fn is_blocked_matches_obstacle_membership() {
        let grid = grid_with(&[(2, 3)]);
        assert!(grid.is_blocked(Position::new(2, 3)));
        assert!(!grid.is_blocked(Position::new(3, 2)));
    }

    #[test]
    fn walkable_requires_bounds_and_no_obstacle() {
        let grid = grid_with(&[(2, 3)]);
        assert!(grid.is_walkable(Position::new(1, 1)));
        assert!(!grid.is_walkable(Position::new(2, 3)));
        assert!(!grid.is_walkable(Position::new(-1, 5)));
    }

    #[test]
    fn player_start_is_lower_right_corner() {
        let grid = grid_with(&[]);
        assert_eq!(grid.player_start(), Position::new(5, 5));
    }
}
