//! Active piece - the falling tetromino as a copyable value type
//!
//! Movement and rotation build candidate values; the engine only adopts a
//! candidate after testing it against the board.

use crate::core::{catalog, Board, Shape};
use crate::types::{PieceKind, BOARD_WIDTH};

/// The falling piece: shape matrix, kind, and top-left board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a piece of the given kind at its spawn position: horizontally
    /// centered (`x = W/2 - size/2`, floor division) on the top row.
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = catalog::shape_for(kind);
        Self {
            kind,
            shape,
            x: (BOARD_WIDTH / 2 - shape.size() / 2) as i8,
            y: 0,
        }
    }

    /// Candidate translated by (dx, dy).
    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Candidate rotated 90 degrees clockwise, position unchanged.
    pub fn rotated(&self) -> Self {
        Self {
            shape: self.shape.rotated_cw(),
            ..*self
        }
    }

    /// True iff any occupied cell, after applying the offset, lands outside
    /// the board or on a filled cell. Bounds are checked before the board is
    /// indexed.
    pub fn collides(&self, board: &Board, dx: i8, dy: i8) -> bool {
        self.shape.cells().iter().any(|&(cx, cy)| {
            let bx = self.x + cx + dx;
            let by = self.y + cy + dy;
            match board.get(bx, by) {
                None => true,          // out of bounds
                Some(cell) => cell.is_some(),
            }
        })
    }

    /// The board coordinates of the piece's occupied cells.
    pub fn board_cells(&self) -> arrayvec::ArrayVec<(i8, i8), 4> {
        self.shape
            .cells()
            .iter()
            .map(|&(cx, cy)| (self.x + cx, self.y + cy))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn spawn_centers_horizontally() {
        // x = W/2 - size/2 with floor division.
        assert_eq!(Piece::spawn(PieceKind::I).x, 3); // 5 - 2
        assert_eq!(Piece::spawn(PieceKind::T).x, 4); // 5 - 1
        assert_eq!(Piece::spawn(PieceKind::O).x, 4); // 5 - 1
        for kind in PieceKind::ALL {
            assert_eq!(Piece::spawn(kind).y, 0);
        }
    }

    #[test]
    fn shifted_and_rotated_do_not_mutate() {
        let piece = Piece::spawn(PieceKind::J);
        let moved = piece.shifted(-1, 2);
        let turned = piece.rotated();
        assert_eq!(piece, Piece::spawn(PieceKind::J));
        assert_eq!(moved.x, piece.x - 1);
        assert_eq!(moved.y, piece.y + 2);
        assert_eq!(turned.x, piece.x);
        assert_eq!(turned.shape, piece.shape.rotated_cw());
    }

    #[test]
    fn collides_on_left_wall() {
        let board = Board::new();
        let mut piece = Piece::spawn(PieceKind::O);
        piece.x = 0;
        assert!(!piece.collides(&board, 0, 0));
        assert!(piece.collides(&board, -1, 0));
    }

    #[test]
    fn collides_on_floor() {
        let board = Board::new();
        let mut piece = Piece::spawn(PieceKind::O);
        piece.y = 18; // bottom cells on row 19
        assert!(!piece.collides(&board, 0, 0));
        assert!(piece.collides(&board, 0, 1));
    }

    #[test]
    fn collides_on_occupied_cell() {
        let mut board = Board::new();
        board.set(4, 1, Some(PieceKind::L));
        let piece = Piece::spawn(PieceKind::O); // covers (4,0)-(5,1)
        assert!(piece.collides(&board, 0, 0));
        assert!(!piece.collides(&board, 2, 0));
    }

    #[test]
    fn negative_origin_is_legal_when_cells_stay_inside() {
        // Vertical I occupies matrix column 1, so origin x = -1 keeps its
        // cells at board column 0.
        let board = Board::new();
        let mut piece = Piece::spawn(PieceKind::I);
        piece.x = -1;
        assert!(!piece.collides(&board, 0, 0));
        assert!(piece.collides(&board, -1, 0));
    }

    #[test]
    fn board_cells_apply_position() {
        let mut piece = Piece::spawn(PieceKind::O);
        piece.x = 4;
        piece.y = 18;
        assert_eq!(
            piece.board_cells().as_slice(),
            &[(4, 18), (5, 18), (4, 19), (5, 19)]
        );
    }
}
