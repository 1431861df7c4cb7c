//! Per-level game state
//!
//! One `GameState` exists per level attempt. It is created by the level
//! generator, advanced turn by turn as immutable snapshots by the game
//! engine, and discarded on retry or level transition. Nothing in it
//! survives across levels.

use super::grid::Grid;
use super::position::Position;

/// Snapshot of a level in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Static board for this level.
    pub grid: Grid,
    /// Current player cell.
    pub player: Position,
    /// Current zombie cells, in spawn order. Zombies may share a cell.
    pub zombies: Vec<Position>,
    /// Every cell the player has occupied, in order, starting with the
    /// spawn cell. Display-only.
    pub player_path: Vec<Position>,
    /// Number of accepted moves so far.
    pub move_count: u32,
}

impl GameState {
    /// Fresh state at the start of a level: player on the start cell,
    /// path containing only that cell, counter at zero.
    pub fn new(grid: Grid, zombies: Vec<Position>) -> Self {
        let player = grid.player_start();
        GameState {
            grid,
            player,
            zombies,
            player_path: vec![player],
            move_count: 0,
        }
    }
}
