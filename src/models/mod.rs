//! Domain models
//!
//! This module contains all domain models representing game entities
//! and concepts. Models are pure data structures with minimal logic.

pub mod constants;
pub mod position;
pub mod grid;
pub mod game_state;
pub mod errors;
