//! Fallback line-printing render adapter.
//!
//! Turn-based mode for terminals where raw mode is unavailable: each loop
//! iteration prints a frame, blocks on one line of input, applies the
//! command, and advances gravity exactly once. Real-time gravity is traded
//! for a plain request/response cycle; the engine is the same.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use crossterm::style::Stylize;

use crate::core::{Game, GameSnapshot};
use crate::input::parse_line;
use crate::term::screen::color_for;
use crate::types::{Command, BOARD_HEIGHT, BOARD_WIDTH};

/// Apply one submitted command and advance gravity exactly once.
///
/// `SoftDrop` is already a gravity step, so it is not followed by another;
/// every other turn ends with `step_turn`. Returns false when the player
/// quit.
fn play_turn(game: &mut Game, cmd: Option<Command>) -> bool {
    match cmd {
        Some(Command::Quit) => false,
        Some(Command::SoftDrop) => {
            game.apply(Command::SoftDrop);
            true
        }
        Some(cmd) => {
            game.apply(cmd);
            game.step_turn();
            true
        }
        None => {
            game.step_turn();
            true
        }
    }
}

/// Run the game in turn-based line mode until game over, quit, or EOF.
pub fn run(game: &mut Game) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock().lines();

    while !game.game_over() {
        print_frame(&game.snapshot())?;

        print!("Move (a,d,w,s) or q to quit: ");
        io::stdout().flush()?;

        let Some(line) = input.next() else {
            // EOF: treat like quit.
            break;
        };

        if !play_turn(game, parse_line(&line?)) {
            break;
        }
    }

    let snapshot = game.snapshot();
    println!();
    println!("GAME OVER");
    println!(
        "Final Score: {}, Level: {}",
        snapshot.score, snapshot.level
    );
    Ok(())
}

fn print_frame(snapshot: &GameSnapshot) -> Result<()> {
    let mut out = io::stdout().lock();

    writeln!(
        out,
        "Score: {}  Level: {}  Lines: {}  Next: {}",
        snapshot.score,
        snapshot.level,
        snapshot.lines,
        snapshot.next.kind.as_str()
    )?;

    let border = "■".repeat(BOARD_WIDTH as usize * 2 + 2);
    writeln!(out, "{}", border.clone().dark_grey())?;
    for y in 0..BOARD_HEIGHT as i8 {
        write!(out, "{}", "■ ".dark_grey())?;
        for x in 0..BOARD_WIDTH as i8 {
            match snapshot.cell_at(x, y) {
                Some(kind) => write!(out, "{}", "■ ".with(color_for(kind)))?,
                None => write!(out, "  ")?,
            }
        }
        writeln!(out, "{}", "■".dark_grey())?;
    }
    writeln!(out, "{}", border.dark_grey())?;
    Ok(())
}
