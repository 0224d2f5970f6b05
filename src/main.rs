//! Terminal falling-block game (default binary).
//!
//! Runs the full-screen crossterm mode; if the terminal cannot support it,
//! the same game continues in the turn-based line mode.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;

use blockfall::core::Game;
use blockfall::{line, term};

fn main() -> Result<()> {
    let mut game = Game::with_seed(clock_seed());

    if let Err(err) = term::run(&mut game) {
        eprintln!("Full-screen mode unavailable ({err}).");
        eprintln!("Falling back to simple line mode...");
        line::run(&mut game)?;
    }

    Ok(())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
