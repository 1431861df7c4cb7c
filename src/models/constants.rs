/// Flat obstacle count every level starts from.
pub const BASE_OBSTACLE_COUNT: usize = 5;
/// Additional obstacles per level: `floor(level * 1.5)`.
pub const OBSTACLES_PER_LEVEL: f64 = 1.5;

/// Minimum Manhattan distance between any two zombie spawn cells.
pub const MIN_ZOMBIE_SPACING: i32 = 2;

/// Tie-breaking jitter added to pursuit scores, drawn from `[0, JITTER_MAX)`.
pub const JITTER_MAX: f64 = 0.3;

/// Whole-set retries allowed when a sampled obstacle layout walls off the exit.
pub const MAX_GENERATION_ATTEMPTS: u32 = 1_000;
/// Candidate draws allowed per placement loop (obstacle filling, zombie spawns).
pub const MAX_PLACEMENT_SAMPLES: u32 = 10_000;

/// What occupies a board cell, for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellContent {
    Empty,
    Player,
    Zombie,
    Exit,
    Obstacle,
    Death,
}

impl CellContent {
    pub fn symbol(&self) -> &'static str {
        match self {
            CellContent::Empty => " . ",
            CellContent::Player => " P ",
            CellContent::Zombie => " Z ",
            CellContent::Exit => " E ",
            CellContent::Obstacle => "###",
            CellContent::Death => " X ",
        }
    }
}
