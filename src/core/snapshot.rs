//! Read-only state snapshot consumed by the render adapters.

use crate::core::{Board, Piece, Shape};
use crate::types::{Cell, PieceKind};

/// Piece data as seen by a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceView {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl From<Piece> for PieceView {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
            x: value.x,
            y: value.y,
        }
    }
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone)]
pub struct GameSnapshot {
    pub board: Board,
    pub active: PieceView,
    pub next: PieceView,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    /// Board cell at (x, y) with the active piece overlaid.
    ///
    /// Both render modes draw from this, so the composition logic lives in
    /// exactly one place.
    pub fn cell_at(&self, x: i8, y: i8) -> Cell {
        for (cx, cy) in self.active.shape.cells() {
            if self.active.x + cx == x && self.active.y + cy == y {
                return Some(self.active.kind);
            }
        }
        self.board.get(x, y).flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Piece;

    #[test]
    fn cell_at_overlays_active_piece() {
        let mut board = Board::new();
        board.set(0, 19, Some(PieceKind::L));

        let mut active = Piece::spawn(PieceKind::O);
        active.x = 4;
        active.y = 10;

        let snapshot = GameSnapshot {
            board,
            active: active.into(),
            next: Piece::spawn(PieceKind::T).into(),
            score: 0,
            level: 1,
            lines: 0,
            game_over: false,
        };

        assert_eq!(snapshot.cell_at(4, 10), Some(PieceKind::O));
        assert_eq!(snapshot.cell_at(5, 11), Some(PieceKind::O));
        assert_eq!(snapshot.cell_at(0, 19), Some(PieceKind::L));
        assert_eq!(snapshot.cell_at(6, 10), None);
    }
}
