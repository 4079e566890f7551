//! REPL session state
//!
//! A [`Session`] owns the API client, the player's Pokedex and the
//! location-area page cursor, and executes one [`Command`] at a time.

use std::io::Write;

use rand::rngs::StdRng;
use rand::Rng;

use crate::api::PokeClient;
use crate::error::Result;
use crate::game::{CatchOutcome, Pokedex};
use crate::models::{LocationAreaPage, MAIN_STATS};
use crate::repl::command::{Command, COMMANDS};

/// Whether the REPL should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

// == Page Cursor ==
/// Where `map` and `mapb` go next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCursor {
    pub next: Option<String>,
    pub previous: Option<String>,
}

impl PageCursor {
    /// A cursor positioned before `first_page`.
    pub fn starting_at(first_page: String) -> Self {
        Self {
            next: Some(first_page),
            previous: None,
        }
    }

    fn follow(&mut self, page: &LocationAreaPage) {
        self.next = page.next.clone();
        self.previous = page.previous.clone();
    }
}

// == Session ==
pub struct Session<G: Rng = StdRng> {
    client: PokeClient,
    pokedex: Pokedex,
    cursor: PageCursor,
    rng: G,
}

impl<G: Rng> Session<G> {
    pub fn new(client: PokeClient, rng: G) -> Self {
        let cursor = PageCursor::starting_at(client.location_areas_url());
        Self {
            client,
            pokedex: Pokedex::new(),
            cursor,
            rng,
        }
    }

    pub fn client(&self) -> &PokeClient {
        &self.client
    }

    pub fn pokedex(&self) -> &Pokedex {
        &self.pokedex
    }

    pub fn cursor(&self) -> &PageCursor {
        &self.cursor
    }

    /// Gives back the client so its cache can be closed.
    pub fn into_client(self) -> PokeClient {
        self.client
    }

    // == Execute ==
    /// Runs one command, writing its output to `out`.
    pub async fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> Result<Flow> {
        match command {
            Command::Help => self.help(out)?,
            Command::Exit => {
                writeln!(out, "Closing the Pokedex... Goodbye!")?;
                return Ok(Flow::Exit);
            }
            Command::Map => self.map_next(out).await?,
            Command::MapBack => self.map_previous(out).await?,
            Command::Explore(area) => self.explore(&area, out).await?,
            Command::Catch(name) => self.catch(&name, out).await?,
            Command::Inspect(name) => self.inspect(&name, out)?,
            Command::Pokedex => self.list_pokedex(out)?,
            Command::CacheStats => self.cache_stats(out)?,
        }
        Ok(Flow::Continue)
    }

    fn help<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Welcome to the Pokedex!")?;
        writeln!(out, "Usage:")?;
        writeln!(out)?;
        for (name, description) in COMMANDS {
            writeln!(out, "{name}: {description}")?;
        }
        Ok(())
    }

    async fn map_next<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let Some(url) = self.cursor.next.clone() else {
            writeln!(out, "you're on the last page")?;
            return Ok(());
        };
        self.show_page(&url, out).await
    }

    async fn map_previous<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let Some(url) = self.cursor.previous.clone() else {
            writeln!(out, "you're on the first page")?;
            return Ok(());
        };
        self.show_page(&url, out).await
    }

    async fn show_page<W: Write>(&mut self, url: &str, out: &mut W) -> Result<()> {
        let page = self.client.location_area_page(url).await?;
        for area in &page.results {
            writeln!(out, "{}", area.name)?;
        }
        // The cursor only moves once the page was fetched and printed.
        self.cursor.follow(&page);
        Ok(())
    }

    async fn explore<W: Write>(&mut self, area: &str, out: &mut W) -> Result<()> {
        writeln!(out, "Exploring {area}...")?;
        let location = self.client.location_area(area).await?;

        writeln!(out, "Found Pokemon:")?;
        for name in location.pokemon_names() {
            writeln!(out, " - {name}")?;
        }
        Ok(())
    }

    async fn catch<W: Write>(&mut self, name: &str, out: &mut W) -> Result<()> {
        let pokemon = self.client.pokemon(name).await?;

        writeln!(out, "Throwing a Pokeball at {name}...")?;
        match self.pokedex.throw_ball(pokemon, &mut self.rng) {
            CatchOutcome::Caught => {
                writeln!(out, "{name} was caught!")?;
                writeln!(out, "You may now inspect it with the inspect command.")?;
            }
            CatchOutcome::Escaped => writeln!(out, "{name} escaped!")?,
        }
        Ok(())
    }

    fn inspect<W: Write>(&self, name: &str, out: &mut W) -> Result<()> {
        let Some(pokemon) = self.pokedex.get(name) else {
            writeln!(out, "you have not caught that pokemon")?;
            return Ok(());
        };

        writeln!(out, "Name: {}", pokemon.name)?;
        writeln!(out, "Height: {}", pokemon.height)?;
        writeln!(out, "Weight: {}", pokemon.weight)?;
        writeln!(out, "Stats:")?;
        for stat in MAIN_STATS {
            writeln!(out, " -{}: {}", stat, pokemon.base_stat(stat))?;
        }
        writeln!(out, "Types:")?;
        for kind in pokemon.type_names() {
            writeln!(out, " - {kind}")?;
        }
        Ok(())
    }

    fn list_pokedex<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.pokedex.is_empty() {
            writeln!(out, "Your Pokedex is empty")?;
            return Ok(());
        }
        writeln!(out, "Your Pokedex:")?;
        for name in self.pokedex.names() {
            writeln!(out, " - {name}")?;
        }
        Ok(())
    }

    fn cache_stats<W: Write>(&self, out: &mut W) -> Result<()> {
        let stats = self.client.cache().stats();
        writeln!(out, "Cached responses: {}", stats.total_entries)?;
        writeln!(out, "Hits: {}", stats.hits)?;
        writeln!(out, "Misses: {}", stats.misses)?;
        writeln!(out, "Hit rate: {:.1}%", stats.hit_rate() * 100.0)?;
        writeln!(out, "Sweeps: {}", stats.sweeps)?;
        writeln!(out, "Expired: {}", stats.expired)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::Cache;
    use rand::rngs::mock::StepRng;
    use std::time::Duration;

    /// Session against an address nothing listens on; tests seed the cache
    /// so no request ever reaches the network.
    fn offline_session() -> Session<StepRng> {
        let client = PokeClient::new("http://127.0.0.1:9/api/v2", Cache::new(Duration::from_secs(60)));
        Session::new(client, StepRng::new(0, 0))
    }

    fn seed(session: &Session<StepRng>, url: &str, body: &str) {
        session.client().cache().put(url, body.as_bytes().to_vec());
    }

    async fn run(session: &mut Session<StepRng>, command: Command) -> (Flow, String) {
        let mut out = Vec::new();
        let flow = session.execute(command, &mut out).await.unwrap();
        (flow, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn test_help_lists_every_command() {
        let mut session = offline_session();
        let (flow, out) = run(&mut session, Command::Help).await;

        assert_eq!(flow, Flow::Continue);
        assert!(out.starts_with("Welcome to the Pokedex!"));
        for (name, _) in COMMANDS {
            assert!(out.contains(name), "help should mention {name}");
        }
    }

    #[tokio::test]
    async fn test_exit_stops_the_loop() {
        let mut session = offline_session();
        let (flow, out) = run(&mut session, Command::Exit).await;
        assert_eq!(flow, Flow::Exit);
        assert_eq!(out, "Closing the Pokedex... Goodbye!\n");
    }

    #[tokio::test]
    async fn test_mapb_on_first_page() {
        let mut session = offline_session();
        let (_, out) = run(&mut session, Command::MapBack).await;
        assert_eq!(out, "you're on the first page\n");
    }

    #[tokio::test]
    async fn test_map_pages_forward_and_back() {
        let mut session = offline_session();
        let first = "http://127.0.0.1:9/api/v2/location-area";
        let second = "http://127.0.0.1:9/api/v2/location-area?offset=2&limit=2";
        seed(
            &session,
            first,
            &format!(r#"{{"count":3,"next":"{second}","previous":null,"results":[{{"name":"a","url":""}},{{"name":"b","url":""}}]}}"#),
        );
        seed(
            &session,
            second,
            &format!(r#"{{"count":3,"next":null,"previous":"{first}","results":[{{"name":"c","url":""}}]}}"#),
        );

        assert_eq!(run(&mut session, Command::Map).await.1, "a\nb\n");
        assert_eq!(run(&mut session, Command::Map).await.1, "c\n");
        assert_eq!(run(&mut session, Command::Map).await.1, "you're on the last page\n");
        assert_eq!(run(&mut session, Command::MapBack).await.1, "a\nb\n");
        assert_eq!(session.cursor().next.as_deref(), Some(second));
        assert!(session.cursor().previous.is_none());
    }

    #[tokio::test]
    async fn test_failed_page_keeps_cursor() {
        let mut session = offline_session();
        seed(&session, "http://127.0.0.1:9/api/v2/location-area", "{}");

        let mut out = Vec::new();
        assert!(session.execute(Command::Map, &mut out).await.is_err());
        assert_eq!(
            session.cursor().next.as_deref(),
            Some("http://127.0.0.1:9/api/v2/location-area")
        );
    }

    #[tokio::test]
    async fn test_catch_then_inspect() {
        let mut session = offline_session();
        seed(
            &session,
            "http://127.0.0.1:9/api/v2/pokemon/pikachu",
            r#"{"id":25,"name":"pikachu","base_experience":112,"height":4,"weight":60,
                "stats":[{"base_stat":35,"effort":0,"stat":{"name":"hp","url":""}},
                         {"base_stat":90,"effort":2,"stat":{"name":"speed","url":""}}],
                "types":[{"slot":1,"type":{"name":"electric","url":""}}]}"#,
        );

        let (_, out) = run(&mut session, Command::Inspect("pikachu".to_string())).await;
        assert_eq!(out, "you have not caught that pokemon\n");

        let (_, out) = run(&mut session, Command::Catch("pikachu".to_string())).await;
        assert!(out.starts_with("Throwing a Pokeball at pikachu...\npikachu was caught!"));

        let (_, out) = run(&mut session, Command::Inspect("pikachu".to_string())).await;
        assert_eq!(
            out,
            "Name: pikachu\nHeight: 4\nWeight: 60\nStats:\n -hp: 35\n -attack: 0\n -defense: 0\n \
             -special-attack: 0\n -special-defense: 0\n -speed: 90\nTypes:\n - electric\n"
        );

        let (_, out) = run(&mut session, Command::Pokedex).await;
        assert_eq!(out, "Your Pokedex:\n - pikachu\n");
    }

    #[tokio::test]
    async fn test_empty_pokedex_listing() {
        let mut session = offline_session();
        let (_, out) = run(&mut session, Command::Pokedex).await;
        assert_eq!(out, "Your Pokedex is empty\n");
    }

    #[tokio::test]
    async fn test_cache_stats_output() {
        let mut session = offline_session();
        seed(&session, "some-url", "{}");

        let (_, out) = run(&mut session, Command::CacheStats).await;
        assert!(out.contains("Cached responses: 1"));
        assert!(out.contains("Hit rate: 0.0%"));
    }
}
