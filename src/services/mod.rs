//! Game services
//!
//! This module contains the algorithmic core: shortest-path search,
//! level generation, zombie pursuit, and the interactive terminal loop.

pub mod game;
pub mod level_generator;
pub mod pathfinder;
pub mod pursuit;
