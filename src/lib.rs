//! Hamburger order generation and alpha-map extraction for a stacking game
//!
//! Orders are random ingredient stacks whose size grows with the difficulty
//! level. Textures have their alpha channel split into a separate grayscale
//! map so the color and alpha can be compressed independently.

#![forbid(unsafe_code)]

/// Orders, ingredients, difficulty levels and the round timer
pub mod game;
/// Input/output operations, configuration and error handling
pub mod io;
/// Pixel grids, alpha extraction and texture import settings
pub mod texture;

pub use io::error::{Result, StackError};
