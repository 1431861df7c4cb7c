//! Zombie Escape Game Engine
//!
//! A grid-chase game: the player must reach the exit cell of a square board
//! while zombies chase it turn by turn. Levels are procedurally generated and
//! guaranteed solvable; zombies pursue with a greedy, locally jittered
//! heuristic rather than global pathfinding, so they can be shaken off behind
//! obstacle walls.
//!
//! # Modules
//!
//! - [`game_engine`] - Turn state machine: applies player moves, runs pursuit,
//!   detects win/loss
//! - [`models`] - Domain models (Grid, Position, GameState, errors)
//! - [`services`] - Level generation, pathfinding, pursuit, interactive loop
//! - [`io`] - Input/output abstractions for testing
//! - [`ui`] - Board and stats presentation
//!
//! # Example
//!
//! ```rust
//! use zombie_escape::{Direction, GameEngine};
//!
//! let mut engine = GameEngine::new(1, 42).expect("level 1 generates");
//! let outcome = engine.request_move(Direction::Up);
//! println!("{:?}", outcome);
//! ```

pub mod game_engine;
pub mod models;
pub mod services;
pub mod io;
pub mod ui;
pub mod cli;

// Re-export commonly used types
pub use game_engine::{GameEngine, GameStatus, MoveOutcome};
pub use models::position::{Direction, Position};
