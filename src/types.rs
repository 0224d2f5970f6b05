//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board dimensions
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 20;

/// Game timing constants (in milliseconds)
pub const TICK_MS: u32 = 16;
pub const BASE_FALL_MS: u32 = 500;
pub const FALL_STEP_MS: u32 = 50;
pub const MIN_FALL_MS: u32 = 100;

/// Line clear scoring, indexed by cleared-row count and multiplied by level
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// Tetromino piece kinds, in catalog order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    T,
    O,
    Z,
    S,
    J,
    L,
}

impl PieceKind {
    /// All kinds in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::T,
        PieceKind::O,
        PieceKind::Z,
        PieceKind::S,
        PieceKind::J,
        PieceKind::L,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::T => "t",
            PieceKind::O => "o",
            PieceKind::Z => "z",
            PieceKind::S => "s",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }
}

/// Cell on the board (None = empty, Some = filled with piece kind)
pub type Cell = Option<PieceKind>;

/// Discrete player commands forwarded by the render adapters.
///
/// Unrecognized input never reaches the engine; the mapping layer returns
/// `None` for it instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    SoftDrop,
    RotateCw,
    Quit,
}
