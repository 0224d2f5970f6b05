//! Screen: owns the terminal session and draws full frames.
//!
//! Raw mode and the alternate screen are entered on `enter` and unwound on
//! `exit`; callers pair the two even when the game loop errors. Drawing is a
//! full redraw per frame, which is plenty at one frame per input or tick.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::core::GameSnapshot;
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Terminal column where the board's left border sits.
const BOARD_COL: u16 = 0;
/// Terminal row of the board's top border (row 0 is the status line).
const BOARD_ROW: u16 = 1;

pub struct Screen {
    stdout: io::Stdout,
}

impl Screen {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Draw one frame: status line, bordered board with the active piece
    /// overlaid, next-piece preview, and the game-over notice when set.
    pub fn draw(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        self.stdout
            .queue(terminal::Clear(terminal::ClearType::All))?;

        self.stdout.queue(cursor::MoveTo(0, 0))?;
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(Print(format!(
            "Score: {}  Level: {}  Lines: {}",
            snapshot.score, snapshot.level, snapshot.lines
        )))?;

        self.draw_board(snapshot)?;
        self.draw_next(snapshot)?;

        if snapshot.game_over {
            self.draw_game_over()?;
        }

        self.stdout.queue(ResetColor)?;
        self.stdout.flush()?;
        Ok(())
    }

    fn draw_board(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        let inner_w = BOARD_WIDTH as u16 * 2;

        self.stdout.queue(cursor::MoveTo(BOARD_COL, BOARD_ROW))?;
        self.stdout
            .queue(Print(format!("┌{}┐", "─".repeat(inner_w as usize))))?;

        for y in 0..BOARD_HEIGHT as i8 {
            self.stdout
                .queue(cursor::MoveTo(BOARD_COL, BOARD_ROW + 1 + y as u16))?;
            self.stdout.queue(Print("│"))?;
            for x in 0..BOARD_WIDTH as i8 {
                match snapshot.cell_at(x, y) {
                    Some(kind) => {
                        self.stdout.queue(SetForegroundColor(color_for(kind)))?;
                        self.stdout.queue(Print("██"))?;
                        self.stdout.queue(ResetColor)?;
                    }
                    None => {
                        self.stdout.queue(Print("  "))?;
                    }
                }
            }
            self.stdout.queue(Print("│"))?;
        }

        self.stdout
            .queue(cursor::MoveTo(BOARD_COL, BOARD_ROW + 1 + BOARD_HEIGHT as u16))?;
        self.stdout
            .queue(Print(format!("└{}┘", "─".repeat(inner_w as usize))))?;
        Ok(())
    }

    fn draw_next(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        let panel_x = BOARD_WIDTH as u16 * 2 + 6;

        self.stdout.queue(cursor::MoveTo(panel_x, BOARD_ROW + 1))?;
        self.stdout.queue(Print("Next:"))?;

        self.stdout
            .queue(SetForegroundColor(color_for(snapshot.next.kind)))?;
        for (cx, cy) in snapshot.next.shape.cells() {
            self.stdout.queue(cursor::MoveTo(
                panel_x + cx as u16 * 2,
                BOARD_ROW + 3 + cy as u16,
            ))?;
            self.stdout.queue(Print("██"))?;
        }
        self.stdout.queue(ResetColor)?;
        Ok(())
    }

    fn draw_game_over(&mut self) -> Result<()> {
        let center_y = BOARD_ROW + 1 + BOARD_HEIGHT as u16 / 2;
        self.stdout.queue(cursor::MoveTo(6, center_y))?;
        self.stdout.queue(Print("GAME OVER"))?;
        self.stdout.queue(cursor::MoveTo(1, center_y + 2))?;
        self.stdout.queue(Print("Press any key to exit"))?;
        Ok(())
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed display color per piece kind.
pub fn color_for(kind: PieceKind) -> Color {
    match kind {
        PieceKind::I => Color::Cyan,
        PieceKind::T => Color::Magenta,
        PieceKind::O => Color::Yellow,
        PieceKind::Z => Color::Red,
        PieceKind::S => Color::Green,
        PieceKind::J => Color::Blue,
        PieceKind::L => Color::White,
    }
}
