//! Input mapping - raw key codes and text lines to engine commands
//!
//! Both render adapters share this layer: the full-screen mode feeds
//! crossterm key codes through [`map_key`], the line mode feeds whole input
//! lines through [`parse_line`]. Anything unrecognized maps to `None` and is
//! dropped before it reaches the engine.

use crossterm::event::KeyCode;

use crate::types::Command;

/// Map a key press to a command. Reference keys are `a d s w q`; the arrow
/// keys and Esc are accepted as synonyms.
pub fn map_key(code: KeyCode) -> Option<Command> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Command::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Command::MoveRight),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Command::SoftDrop),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Command::RotateCw),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(Command::Quit),
        _ => None,
    }
}

/// Map one line of text input to a command (turn-based mode).
pub fn parse_line(line: &str) -> Option<Command> {
    match line.trim() {
        "a" | "A" => Some(Command::MoveLeft),
        "d" | "D" => Some(Command::MoveRight),
        "s" | "S" => Some(Command::SoftDrop),
        "w" | "W" => Some(Command::RotateCw),
        "q" | "Q" => Some(Command::Quit),
        _ => None,
    }
}
