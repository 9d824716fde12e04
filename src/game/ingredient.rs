//! Burger layer categories and the filling subset drawn from during generation

use crate::io::error::{StackError, invalid_parameter};
use std::fmt;
use std::str::FromStr;

/// A burger layer category
///
/// The two bread variants are structural bookends of every order and are
/// never drawn as filling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ingredient {
    /// Top bun, always last
    BreadTop,
    /// Bottom bun, always first
    BreadBottom,
    /// Cheese slice
    Cheese,
    /// Cabbage leaf
    Cabbage,
    /// Cucumber slices
    Cucumber,
    /// Fried egg
    Egg,
    /// Tomato slice
    Tomato,
    /// Meat patty
    Patty,
}

/// Ingredients eligible as filling, in enumeration order
pub const FILLINGS: [Ingredient; 6] = [
    Ingredient::Cheese,
    Ingredient::Cabbage,
    Ingredient::Cucumber,
    Ingredient::Egg,
    Ingredient::Tomato,
    Ingredient::Patty,
];

impl Ingredient {
    /// Every ingredient, bread first
    pub const ALL: [Self; 8] = [
        Self::BreadTop,
        Self::BreadBottom,
        Self::Cheese,
        Self::Cabbage,
        Self::Cucumber,
        Self::Egg,
        Self::Tomato,
        Self::Patty,
    ];

    /// Whether this ingredient may appear between the buns
    pub const fn is_filling(self) -> bool {
        !matches!(self, Self::BreadTop | Self::BreadBottom)
    }

    /// Lowercase identifier used as a sprite atlas key
    pub const fn sprite_key(self) -> &'static str {
        match self {
            Self::BreadTop => "breadtop",
            Self::BreadBottom => "breadbottom",
            Self::Cheese => "cheese",
            Self::Cabbage => "cabbage",
            Self::Cucumber => "cucumber",
            Self::Egg => "egg",
            Self::Tomato => "tomato",
            Self::Patty => "patty",
        }
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sprite_key())
    }
}

impl FromStr for Ingredient {
    type Err = StackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ingredient| ingredient.sprite_key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| invalid_parameter("ingredient", &s, &"unknown ingredient name"))
    }
}
