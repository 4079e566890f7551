//! Catching and collecting Pokemon
//!
//! Catch odds fall as base experience rises. A Pokemon that keeps escaping is
//! guaranteed to be caught on the throw after its [`GUARANTEED_CATCH_AFTER`]th
//! escape.

use std::collections::{BTreeMap, HashMap};

use rand::Rng;

use crate::models::Pokemon;

/// Escapes after which the next throw always succeeds.
pub const GUARANTEED_CATCH_AFTER: u32 = 4;

/// Odds used when the API reports no base experience.
const UNKNOWN_EXPERIENCE_ODDS: f64 = 0.5;

/// Probability that a single throw catches a Pokemon with the given base
/// experience.
pub fn catch_probability(base_experience: Option<u32>) -> f64 {
    match base_experience {
        None => UNKNOWN_EXPERIENCE_ODDS,
        Some(exp) if exp < 100 => 0.90,
        Some(exp) if exp < 200 => 0.75,
        Some(exp) if exp < 300 => 0.50,
        Some(_) => 0.25,
    }
}

/// Result of one throw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatchOutcome {
    Caught,
    Escaped,
}

// == Pokedex ==
/// The Pokemon the player has caught, plus escape counts for the rest.
#[derive(Debug, Default)]
pub struct Pokedex {
    caught: BTreeMap<String, Pokemon>,
    escapes: HashMap<String, u32>,
}

impl Pokedex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Throws a ball at `pokemon`, recording the outcome.
    ///
    /// Catching a Pokemon that is already in the Pokedex replaces its record.
    pub fn throw_ball(&mut self, pokemon: Pokemon, rng: &mut impl Rng) -> CatchOutcome {
        let escapes = self.escapes.get(&pokemon.name).copied().unwrap_or(0);
        let caught = escapes >= GUARANTEED_CATCH_AFTER
            || rng.gen_bool(catch_probability(pokemon.base_experience));

        if caught {
            self.escapes.remove(&pokemon.name);
            self.caught.insert(pokemon.name.clone(), pokemon);
            CatchOutcome::Caught
        } else {
            *self.escapes.entry(pokemon.name).or_insert(0) += 1;
            CatchOutcome::Escaped
        }
    }

    pub fn get(&self, name: &str) -> Option<&Pokemon> {
        self.caught.get(name)
    }

    /// Caught Pokemon names in alphabetical order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.caught.keys().map(String::as_str)
    }

    pub fn escapes(&self, name: &str) -> u32 {
        self.escapes.get(name).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.caught.len()
    }

    pub fn is_empty(&self) -> bool {
        self.caught.is_empty()
    }
}
