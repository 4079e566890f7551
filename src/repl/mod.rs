//! Read-eval-print loop
//!
//! Reads lines, normalizes them with [`clean_input`], parses a [`Command`]
//! and hands it to the [`Session`]. Command failures are reported to the
//! user and the loop keeps going; only I/O errors on the terminal end it.

mod command;
mod session;

use std::io::Write;

use rand::Rng;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::warn;

pub use command::{Command, COMMANDS};
pub use session::{Flow, PageCursor, Session};

use crate::error::{PokedexError, Result};

pub const PROMPT: &str = "Pokedex > ";

/// Splits `text` on whitespace and lowercases every word.
pub fn clean_input(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}

// == Run ==
/// Runs the loop until `exit` or end of input.
pub async fn run<R, W, G>(session: &mut Session<G>, input: R, output: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
    G: Rng,
{
    let mut lines = input.lines();

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(output)?;
            break;
        };

        let words = clean_input(&line);
        if words.is_empty() {
            continue;
        }

        let command = match Command::parse(&words) {
            Ok(Some(command)) => command,
            Ok(None) => {
                writeln!(output, "Unknown command")?;
                continue;
            }
            Err(err) => {
                writeln!(output, "{err}")?;
                continue;
            }
        };

        match session.execute(command, output).await {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => break,
            Err(err @ PokedexError::Io(_)) => return Err(err),
            Err(err) => {
                warn!("Command '{}' failed: {}", line.trim(), err);
                writeln!(output, "Error: {err}")?;
            }
        }
    }

    Ok(())
}
