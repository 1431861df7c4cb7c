//! User interface and presentation
//!
//! This module contains presenters that handle formatting and displaying
//! board state and end-of-level statistics. No game logic lives here.

pub mod presenters;
