//! PokeAPI resource models
//!
//! serde shapes for the parts of the PokeAPI JSON the commands read.

pub mod location;
pub mod pokemon;

// Re-export commonly used types
pub use location::{LocationArea, LocationAreaPage, NamedResource, PokemonEncounter};
pub use pokemon::{Pokemon, PokemonStat, PokemonType, MAIN_STATS};
