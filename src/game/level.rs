//! Difficulty levels and the filling-count table they select

use crate::io::configuration::MAX_INGREDIENTS;
use std::fmt;
use std::ops::Range;

/// Externally controlled difficulty of the current round
///
/// Levels below 1 are not rejected; they fall into the lowest bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DifficultyLevel(i32);

impl DifficultyLevel {
    /// Starting difficulty
    pub const FIRST: Self = Self(1);

    /// Wrap a raw level value
    pub const fn new(level: i32) -> Self {
        Self(level)
    }

    /// Raw level value
    pub const fn get(self) -> i32 {
        self.0
    }

    /// Next level up, saturating at `i32::MAX`
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Half-open range the filling count is drawn from at this level
    pub const fn filling_range(self) -> Range<u32> {
        match self.0 {
            i32::MIN..5 => 3..5,
            5..10 => 4..6,
            10..15 => 5..7,
            15..20 => 5..8,
            _ => 6..MAX_INGREDIENTS,
        }
    }
}

impl Default for DifficultyLevel {
    fn default() -> Self {
        Self::FIRST
    }
}

impl From<i32> for DifficultyLevel {
    fn from(level: i32) -> Self {
        Self(level)
    }
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
