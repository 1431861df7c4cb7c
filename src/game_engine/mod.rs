//! Turn state machine
//!
//! Advances the game one player input at a time: validate the move, shift
//! the player, run zombie pursuit, then check terminal conditions. The
//! engine owns the seeded RNG and the current [`GameState`] snapshot; each
//! accepted turn replaces the snapshot with a freshly built one, so a
//! rejected move provably leaves the state untouched.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::models::errors::GameResult;
use crate::models::game_state::GameState;
use crate::models::position::{Direction, Position};
use crate::services::level_generator::initialize_level;
use crate::services::pathfinder::shortest_path;
use crate::services::pursuit;

/// Where the current level attempt stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost { death_position: Position },
}

/// Result of a single move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Legal move, game goes on
    Continued,
    /// Player reached the exit
    Won,
    /// A zombie caught the player
    Lost,
    /// Move into a wall, an obstacle, or after the game ended; nothing changed
    Rejected,
}

/// One simulation turn as a pure function: the current snapshot goes in, a
/// new snapshot and the outcome come out.
///
/// A destination off the board or on an obstacle is rejected and the
/// returned snapshot equals the input. Otherwise the player moves, the move
/// counter and path record grow, and every zombie takes its pursuit step
/// toward the player's *new* cell. Reaching the exit is checked before
/// zombie collision, so escaping onto the exit as a zombie arrives there is
/// still a win.
pub fn step(state: &GameState, direction: Direction, rng: &mut StdRng) -> (GameState, MoveOutcome) {
    let destination = state.player.step(direction);
    if !state.grid.is_walkable(destination) {
        return (state.clone(), MoveOutcome::Rejected);
    }

    let mut next = state.clone();
    next.player = destination;
    next.move_count += 1;
    next.player_path.push(destination);
    next.zombies = pursuit::move_all(destination, &state.zombies, &state.grid, rng);

    let outcome = if destination == state.grid.exit {
        MoveOutcome::Won
    } else if next.zombies.contains(&destination) {
        MoveOutcome::Lost
    } else {
        MoveOutcome::Continued
    };
    (next, outcome)
}

/// Core game engine: one level attempt at a time, plus level flow
/// (next level, retry, restart).
pub struct GameEngine {
    level: u32,
    state: GameState,
    status: GameStatus,
    rng: StdRng,
}

impl GameEngine {
    /// Create an engine playing the given level, generated from `seed`.
    ///
    /// Fails if the level number is invalid or generation does not converge.
    pub fn new(level: u32, seed: u64) -> GameResult<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        let state = initialize_level(level, &mut rng)?;
        Ok(GameEngine {
            level,
            state,
            status: GameStatus::Playing,
            rng,
        })
    }

    /// Level currently being played.
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Returns the current game state snapshot
    pub fn game_state(&self) -> &GameState {
        &self.state
    }

    /// Returns the current status (playing / won / lost)
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Apply one player move request.
    ///
    /// No-op returning [`MoveOutcome::Rejected`] once the game is over;
    /// otherwise delegates to [`step`] and records any terminal transition.
    pub fn request_move(&mut self, direction: Direction) -> MoveOutcome {
        if self.status != GameStatus::Playing {
            return MoveOutcome::Rejected;
        }

        let (next, outcome) = step(&self.state, direction, &mut self.rng);
        match outcome {
            MoveOutcome::Rejected => return outcome,
            MoveOutcome::Won => self.status = GameStatus::Won,
            MoveOutcome::Lost => {
                self.status = GameStatus::Lost {
                    death_position: next.player,
                }
            }
            MoveOutcome::Continued => {}
        }
        self.state = next;
        outcome
    }

    /// Shortest possible number of moves from the player start to the exit,
    /// for the end-of-level stats. `None` should not occur on a generated
    /// level, but callers must treat it defensively.
    pub fn optimal_path_length(&self) -> Option<usize> {
        let grid = &self.state.grid;
        shortest_path(grid.player_start(), grid.exit, grid).map(|path| path.len() - 1)
    }

    /// Advance to the next level with a freshly generated board.
    pub fn next_level(&mut self) -> GameResult<()> {
        self.start_level(self.level + 1)
    }

    /// Replay the current level on a freshly generated board.
    pub fn retry_level(&mut self) -> GameResult<()> {
        self.start_level(self.level)
    }

    /// Back to level 1 with a freshly generated board.
    pub fn restart(&mut self) -> GameResult<()> {
        self.start_level(1)
    }

    fn start_level(&mut self, level: u32) -> GameResult<()> {
        self.state = initialize_level(level, &mut self.rng)?;
        self.level = level;
        self.status = GameStatus::Playing;
        Ok(())
    }

    // Test-only constructor: start from a hand-built board instead of a
    // generated one.
    #[cfg(test)]
    pub fn with_state(level: u32, state: GameState) -> Self {
        GameEngine {
            level,
            state,
            status: GameStatus::Playing,
            rng: StdRng::seed_from_u64(0),
        }
    }
}
