//! Hamburger order gameplay data

/// Burger layer categories
pub mod ingredient;
/// Difficulty levels and filling-count brackets
pub mod level;
/// Orders and their random generator
pub mod order;
/// Round countdown timer
pub mod timer;

pub use ingredient::{FILLINGS, Ingredient};
pub use level::DifficultyLevel;
pub use order::{Order, OrderGenerator};
pub use timer::{RoundTimer, TimerState};
