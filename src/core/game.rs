//! Game engine - gravity, command dispatch, locking, scoring
//!
//! One `Game` owns the complete session state. Render adapters feed it
//! commands and elapsed time; it never touches I/O. Invalid moves are
//! silently rejected, and the only terminal condition is the game-over
//! flag, which never resets.

use crate::core::{Board, GameSnapshot, Piece, PieceSource, RandomSource};
use crate::types::{Command, BASE_FALL_MS, FALL_STEP_MS, LINE_SCORES, MIN_FALL_MS};

pub struct Game {
    board: Board,
    current: Piece,
    next: Piece,
    source: Box<dyn PieceSource>,
    score: u32,
    level: u32,
    lines: u32,
    game_over: bool,
    fall_timer_ms: u32,
}

impl Game {
    /// Create a new session drawing pieces from the given source.
    pub fn new(mut source: Box<dyn PieceSource>) -> Self {
        let current = Piece::spawn(source.next_kind());
        let next = Piece::spawn(source.next_kind());
        Self {
            board: Board::new(),
            current,
            next,
            source,
            score: 0,
            level: 1,
            lines: 0,
            game_over: false,
            fall_timer_ms: 0,
        }
    }

    /// Convenience constructor with the default uniform random source.
    pub fn with_seed(seed: u32) -> Self {
        Self::new(Box::new(RandomSource::new(seed)))
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current(&self) -> Piece {
        self.current
    }

    pub fn next_piece(&self) -> Piece {
        self.next
    }

    /// Gravity interval for the current level, floored at 100ms.
    pub fn fall_interval_ms(&self) -> u32 {
        BASE_FALL_MS
            .saturating_sub((self.level - 1) * FALL_STEP_MS)
            .max(MIN_FALL_MS)
    }

    /// Dispatch one player command. Returns whether the command had an
    /// effect; a rejected transform is a silent no-op, not an error.
    pub fn apply(&mut self, cmd: Command) -> bool {
        if self.game_over {
            return false;
        }
        match cmd {
            Command::MoveLeft => self.try_shift(-1, 0),
            Command::MoveRight => self.try_shift(1, 0),
            Command::SoftDrop => {
                // Same step gravity takes, plus a timer reset so gravity
                // does not double-apply on the next tick.
                self.gravity_step();
                self.fall_timer_ms = 0;
                true
            }
            Command::RotateCw => {
                let candidate = self.current.rotated();
                if candidate.collides(&self.board, 0, 0) {
                    false
                } else {
                    self.current = candidate;
                    true
                }
            }
            // Quit terminates the adapter loop; the engine has nothing to do.
            Command::Quit => false,
        }
    }

    /// Advance timers by `elapsed_ms`; performs one gravity step when the
    /// fall interval elapses. Returns whether gravity advanced.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.game_over {
            return false;
        }
        self.fall_timer_ms += elapsed_ms;
        if self.fall_timer_ms < self.fall_interval_ms() {
            return false;
        }
        self.fall_timer_ms = 0;
        self.gravity_step();
        true
    }

    /// One gravity step regardless of wall-clock time. The turn-based line
    /// renderer calls this once per submitted command.
    pub fn step_turn(&mut self) {
        if self.game_over {
            return;
        }
        self.fall_timer_ms = 0;
        self.gravity_step();
    }

    /// Snapshot for the render adapters.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            active: self.current.into(),
            next: self.next.into(),
            score: self.score,
            level: self.level,
            lines: self.lines,
            game_over: self.game_over,
        }
    }

    fn try_shift(&mut self, dx: i8, dy: i8) -> bool {
        if self.current.collides(&self.board, dx, dy) {
            return false;
        }
        self.current = self.current.shifted(dx, dy);
        true
    }

    fn gravity_step(&mut self) {
        if self.current.collides(&self.board, 0, 1) {
            self.lock_current();
        } else {
            self.current = self.current.shifted(0, 1);
        }
    }

    /// Lock the current piece, clear rows, score, and promote the next
    /// piece. A blocked spawn ends the game.
    fn lock_current(&mut self) {
        self.board
            .place_cells(&self.current.board_cells(), self.current.kind);

        let cleared = self.board.clear_full_rows();
        self.score += LINE_SCORES[cleared] * self.level;
        self.lines += cleared as u32;
        self.level = 1 + self.lines / 10;

        self.current = self.next;
        self.next = Piece::spawn(self.source.next_kind());
        if self.current.collides(&self.board, 0, 0) {
            self.game_over = true;
        }
    }
}
