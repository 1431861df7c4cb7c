/// A cell on the square board. 0-based: (0,0) is upper-left,
/// (size-1, size-1) is lower-right and is always the player start.
/// Row increases top-to-bottom, column increases left-to-right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub fn new(row: i32, col: i32) -> Self {
        Position { row, col }
    }

    /// Taxicab distance to another cell. Moves are 4-connected, so this is
    /// also the minimum number of steps on an obstacle-free board.
    pub fn manhattan_distance(&self, other: Position) -> i32 {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }

    /// The cell one step away in the given direction. May be out of bounds;
    /// callers validate against the grid.
    pub fn step(&self, direction: Direction) -> Position {
        let (dr, dc) = direction.delta();
        Position {
            row: self.row + dr,
            col: self.col + dc,
        }
    }
}

/// The four cardinal moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Fixed evaluation order for BFS expansion and pursuit scoring.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}
