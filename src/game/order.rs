//! Burger orders and the seeded generator that produces them
//!
//! An order is the ingredient sequence a player has to rebuild. Its length
//! grows with the difficulty level following the table in
//! [`DifficultyLevel::filling_range`].

use crate::game::ingredient::{FILLINGS, Ingredient};
use crate::game::level::DifficultyLevel;
use crate::io::error::{Result, invalid_parameter};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Ingredient sequence framed by a bottom and a top bun
///
/// Only constructible with fillings between the buns, so the first element
/// is always [`Ingredient::BreadBottom`] and the last [`Ingredient::BreadTop`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Order {
    layers: Vec<Ingredient>,
}

impl Order {
    /// Frame the given fillings with buns
    ///
    /// # Errors
    ///
    /// Returns an error if any of the fillings is a bread variant
    pub fn from_fillings(fillings: &[Ingredient]) -> Result<Self> {
        if let Some(bread) = fillings.iter().find(|i| !i.is_filling()) {
            return Err(invalid_parameter(
                "fillings",
                bread,
                &"bread can only appear as the outer layers",
            ));
        }

        let mut layers = Vec::with_capacity(fillings.len() + 2);
        layers.push(Ingredient::BreadBottom);
        layers.extend_from_slice(fillings);
        layers.push(Ingredient::BreadTop);
        Ok(Self { layers })
    }

    /// All layers from bottom to top, buns included
    pub fn layers(&self) -> &[Ingredient] {
        &self.layers
    }

    /// Layers between the buns
    pub fn fillings(&self) -> &[Ingredient] {
        self.layers
            .get(1..self.layers.len().saturating_sub(1))
            .unwrap_or(&[])
    }

    /// Number of layers, buns included
    pub const fn len(&self) -> usize {
        self.layers.len()
    }

    /// Always false; an order holds at least its two buns
    pub const fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Sprite keys of every layer from bottom to top
    pub fn sprite_keys(&self) -> Vec<&'static str> {
        self.layers.iter().map(|i| i.sprite_key()).collect()
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for layer in &self.layers {
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            write!(f, "{layer}")?;
        }
        Ok(())
    }
}

/// Random order source with an injected random number generator
pub struct OrderGenerator<R = StdRng> {
    rng: R,
}

impl OrderGenerator<StdRng> {
    /// Create a deterministic generator from a seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> OrderGenerator<R> {
    /// Create a generator drawing from the given random source
    pub const fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Number of fillings for an order at `level`
    pub fn filling_count(&mut self, level: DifficultyLevel) -> usize {
        self.rng.random_range(level.filling_range()) as usize
    }

    /// Generate one order for `level`
    ///
    /// Fillings are drawn uniformly with replacement and kept in the order
    /// they were drawn.
    pub fn generate(&mut self, level: DifficultyLevel) -> Order {
        let count = self.filling_count(level);

        let mut layers = Vec::with_capacity(count + 2);
        layers.push(Ingredient::BreadBottom);
        for _ in 0..count {
            if let Some(&filling) = FILLINGS.choose(&mut self.rng) {
                layers.push(filling);
            }
        }
        layers.push(Ingredient::BreadTop);

        Order { layers }
    }

    /// Generate `count` consecutive orders for `level`
    pub fn generate_batch(&mut self, level: DifficultyLevel, count: usize) -> Vec<Order> {
        (0..count).map(|_| self.generate(level)).collect()
    }
}
