//! Real-time full-screen render adapter.
//!
//! The loop never blocks on input: it polls with a bounded timeout so the
//! gravity clock keeps running, and yields to the OS while idle instead of
//! spinning.

pub mod screen;

pub use screen::Screen;

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use crate::core::Game;
use crate::input::map_key;
use crate::types::{Command, TICK_MS};

/// Run the game in full-screen mode until game over or quit.
///
/// The terminal is always restored, even when the loop errors.
pub fn run(game: &mut Game) -> Result<()> {
    let mut screen = Screen::new();
    screen.enter()?;

    let result = run_loop(game, &mut screen);

    let _ = screen.exit();
    result
}

fn run_loop(game: &mut Game, screen: &mut Screen) -> Result<()> {
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        screen.draw(&game.snapshot())?;

        if game.game_over() {
            return wait_for_any_key();
        }

        // Poll with the time left until the next tick; this doubles as the
        // idle sleep.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match map_key(key.code) {
                        Some(Command::Quit) => return Ok(()),
                        Some(cmd) => {
                            game.apply(cmd);
                        }
                        None => {}
                    }
                }
            }
        }

        // Feed the measured elapsed time, not the nominal tick: a slow draw
        // or input burst must not slow the gravity clock.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            game.tick(elapsed.as_millis() as u32);
        }
    }
}

fn wait_for_any_key() -> Result<()> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}
