//! Zombie pursuit
//!
//! Greedy local chase: each zombie steps onto the legal neighbor cell that
//! minimizes Manhattan distance to the player, with a small random jitter on
//! the score so ties break unpredictably. No global pathfinding, so a zombie
//! can get stuck in a pocket behind obstacles; that is part of the game.

use rand::rngs::StdRng;
use rand::Rng;

use crate::models::constants::JITTER_MAX;
use crate::models::grid::Grid;
use crate::models::position::{Direction, Position};

/// Pick one zombie's move toward the player.
///
/// The four directions are scored in [`Direction::ALL`] order; moves leaving
/// the board or entering an obstacle are discarded. Returns `None` when no
/// move is legal, in which case the zombie stays put.
pub fn next_move(
    zombie: Position,
    player: Position,
    grid: &Grid,
    rng: &mut StdRng,
) -> Option<Direction> {
    let mut best: Option<(Direction, f64)> = None;

    for direction in Direction::ALL {
        let destination = zombie.step(direction);
        if !grid.is_walkable(destination) {
            continue;
        }

        let jitter: f64 = rng.gen::<f64>() * JITTER_MAX;
        let score = destination.manhattan_distance(player) as f64 + jitter;
        match best {
            Some((_, best_score)) if best_score <= score => {}
            _ => best = Some((direction, score)),
        }
    }

    best.map(|(direction, _)| direction)
}

/// Advance every zombie one step toward the given player position.
///
/// Each zombie is scored independently against the same (pre-move) snapshot
/// of the pack: zombies do not see each other's moves within a turn and may
/// end up stacked on one cell.
pub fn move_all(
    player: Position,
    zombies: &[Position],
    grid: &Grid,
    rng: &mut StdRng,
) -> Vec<Position> {
    zombies
        .iter()
        .map(|&zombie| match next_move(zombie, player, grid, rng) {
            Some(direction) => zombie.step(direction),
            None => zombie,
        })
        .collect()
}
