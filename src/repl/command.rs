//! Command parsing
//!
//! Turns a cleaned input line into a [`Command`].

use crate::error::{PokedexError, Result};

/// A command the REPL understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    /// Next page of location areas
    Map,
    /// Previous page of location areas
    MapBack,
    Explore(String),
    Catch(String),
    Inspect(String),
    Pokedex,
    CacheStats,
}

/// Name and description of every command, in the order `help` lists them.
pub const COMMANDS: [(&str, &str); 9] = [
    ("help", "Displays a help message"),
    ("exit", "Exit the Pokedex"),
    ("map", "Lists the next page of location areas"),
    ("mapb", "Lists the previous page of location areas"),
    ("explore <area>", "Lists the Pokemon found in a location area"),
    ("catch <pokemon>", "Throws a Pokeball at a Pokemon"),
    ("inspect <pokemon>", "Shows details of a caught Pokemon"),
    ("pokedex", "Lists every Pokemon you have caught"),
    ("cache", "Shows response cache statistics"),
];

impl Command {
    /// Parses cleaned input words.
    ///
    /// Returns `Ok(None)` for an unknown command word and an error when a
    /// command is missing its argument. Extra words are ignored.
    pub fn parse(words: &[String]) -> Result<Option<Self>> {
        let Some((name, args)) = words.split_first() else {
            return Ok(None);
        };
        let arg = args.first().cloned();

        let command = match name.as_str() {
            "help" => Command::Help,
            "exit" => Command::Exit,
            "map" => Command::Map,
            "mapb" => Command::MapBack,
            "explore" => Command::Explore(require(arg, "explore", "area")?),
            "catch" => Command::Catch(require(arg, "catch", "pokemon")?),
            "inspect" => Command::Inspect(require(arg, "inspect", "pokemon")?),
            "pokedex" => Command::Pokedex,
            "cache" => Command::CacheStats,
            _ => return Ok(None),
        };
        Ok(Some(command))
    }
}

fn require(arg: Option<String>, command: &'static str, argument: &'static str) -> Result<String> {
    arg.ok_or(PokedexError::MissingArgument { command, argument })
}
