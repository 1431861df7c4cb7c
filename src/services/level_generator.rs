//! Level generation
//!
//! Produces a solvable board for a given difficulty level. Exit, obstacles,
//! and zombie spawns are all rejection-sampled; an obstacle layout that walls
//! off the exit is discarded wholesale and redrawn. Every loop is bounded so
//! a pathological parameter combination surfaces as
//! [`GameError::GenerationExhausted`] instead of spinning forever.

use rand::rngs::StdRng;
use rand::Rng;

use std::collections::HashSet;

use crate::models::constants::{
    BASE_OBSTACLE_COUNT, MAX_GENERATION_ATTEMPTS, MAX_PLACEMENT_SAMPLES, MIN_ZOMBIE_SPACING,
    OBSTACLES_PER_LEVEL,
};
use crate::models::errors::{GameError, GameResult, GenerationStage};
use crate::models::game_state::GameState;
use crate::models::grid::Grid;
use crate::models::position::Position;

use super::pathfinder::shortest_path;

/// Board side length for a level: 6, then 8 (levels 2-4), 10 (5-7), 12 (8+).
pub fn grid_size_for(level: u32) -> i32 {
    if level <= 1 {
        6
    } else if level <= 4 {
        8
    } else if level <= 7 {
        10
    } else {
        12
    }
}

/// Zombies per level: 1, then 2 (levels 2-4), 3 (5-8), 4 (9+).
pub fn zombie_count_for(level: u32) -> usize {
    if level <= 1 {
        1
    } else if level <= 4 {
        2
    } else if level <= 8 {
        3
    } else {
        4
    }
}

/// Obstacle target for a level: `5 + floor(level * 1.5)`.
fn obstacle_target(level: u32) -> usize {
    BASE_OBSTACLE_COUNT + (level as f64 * OBSTACLES_PER_LEVEL).floor() as usize
}

/// Build a complete, solvable level.
///
/// Fails fast with [`GameError::InvalidLevel`] for level 0 (the game starts
/// at level 1), and with [`GameError::GenerationExhausted`] if a placement
/// loop runs out of retries.
pub fn initialize_level(level: u32, rng: &mut StdRng) -> GameResult<GameState> {
    if level == 0 {
        return Err(GameError::InvalidLevel(level));
    }

    let size = grid_size_for(level);
    let exit = generate_exit(size, rng);
    let obstacles = generate_obstacles(exit, size, level, rng)?;
    let grid = Grid::new(size, exit, obstacles);
    let zombies = place_zombies(&grid, level, rng)?;

    Ok(GameState::new(grid, zombies))
}

fn random_cell(size: i32, rng: &mut StdRng) -> Position {
    Position::new(rng.gen_range(0..size), rng.gen_range(0..size))
}

/// Uniform random exit cell; only the player start is excluded.
fn generate_exit(size: i32, rng: &mut StdRng) -> Position {
    let start = Position::new(size - 1, size - 1);
    loop {
        let candidate = random_cell(size, rng);
        if candidate != start {
            return candidate;
        }
    }
}

/// Sample an obstacle set of the target size, excluding the start and exit
/// cells, and redraw the whole set until the exit stays reachable.
fn generate_obstacles(
    exit: Position,
    size: i32,
    level: u32,
    rng: &mut StdRng,
) -> GameResult<HashSet<Position>> {
    let start = Position::new(size - 1, size - 1);
    let target = obstacle_target(level);
    let exhausted = || GameError::GenerationExhausted {
        stage: GenerationStage::Obstacles,
    };

    for _ in 0..MAX_GENERATION_ATTEMPTS {
        let mut obstacles = HashSet::new();
        let mut samples = 0;
        while obstacles.len() < target {
            samples += 1;
            if samples > MAX_PLACEMENT_SAMPLES {
                return Err(exhausted());
            }
            let candidate = random_cell(size, rng);
            if candidate != start && candidate != exit {
                obstacles.insert(candidate);
            }
        }

        let grid = Grid::new(size, exit, obstacles);
        if shortest_path(start, exit, &grid).is_some() {
            return Ok(grid.obstacles);
        }
    }

    Err(exhausted())
}

/// Sample zombie spawn cells one at a time. A candidate is kept iff it is
/// not an obstacle, lies at Manhattan distance >= `size / 3` from the player
/// start, and at distance >= 2 from every zombie already placed.
fn place_zombies(grid: &Grid, level: u32, rng: &mut StdRng) -> GameResult<Vec<Position>> {
    let start = grid.player_start();
    let min_player_distance = grid.size / 3;
    let count = zombie_count_for(level);

    let mut zombies: Vec<Position> = Vec::with_capacity(count);
    let mut samples = 0;
    while zombies.len() < count {
        samples += 1;
        if samples > MAX_PLACEMENT_SAMPLES {
            return Err(GameError::GenerationExhausted {
                stage: GenerationStage::Zombies,
            });
        }

        let candidate = random_cell(grid.size, rng);
        let too_close = zombies
            .iter()
            .any(|z| candidate.manhattan_distance(*z) < MIN_ZOMBIE_SPACING);
        if !grid.is_blocked(candidate)
            && candidate.manhattan_distance(start) >= min_player_distance
            && !too_close
        {
            zombies.push(candidate);
        }
    }

    Ok(zombies)
}
