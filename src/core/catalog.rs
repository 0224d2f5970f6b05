//! Piece catalog - the 7 tetromino shape matrices
//!
//! Each shape is an immutable square boolean matrix (4x4 for I, 3x3 for
//! T/Z/S/J/L, 2x2 for O) stored as one bitmask per row. Rotation is the
//! transpose of the row-reversed matrix, i.e. a clockwise quarter turn.

use arrayvec::ArrayVec;

use crate::types::PieceKind;

/// Square boolean matrix describing a tetromino.
///
/// Row `y` has bit `x` set when cell `(x, y)` is occupied. Only the first
/// `size` rows and columns are meaningful; every catalog shape has exactly
/// four occupied cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    size: u8,
    rows: [u8; 4],
}

impl Shape {
    const fn new(size: u8, rows: [u8; 4]) -> Self {
        Self { size, rows }
    }

    /// Matrix side length (2, 3, or 4).
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Whether cell `(x, y)` of the matrix is occupied.
    pub fn is_set(&self, x: u8, y: u8) -> bool {
        x < self.size && y < self.size && (self.rows[y as usize] >> x) & 1 == 1
    }

    /// The occupied cell offsets, row-major.
    pub fn cells(&self) -> ArrayVec<(i8, i8), 4> {
        let mut out = ArrayVec::new();
        for y in 0..self.size {
            for x in 0..self.size {
                if self.is_set(x, y) {
                    out.push((x as i8, y as i8));
                }
            }
        }
        out
    }

    /// Clockwise 90-degree rotation: `new[y][x] = old[size-1-x][y]`.
    ///
    /// Pure transform; callers validate the candidate against the board
    /// before accepting it.
    pub fn rotated_cw(&self) -> Self {
        let n = self.size;
        let mut rows = [0u8; 4];
        for y in 0..n {
            for x in 0..n {
                if self.is_set(y, n - 1 - x) {
                    rows[y as usize] |= 1 << x;
                }
            }
        }
        Self { size: n, rows }
    }
}

/// The seven fixed tetromino definitions, each paired with its kind.
pub const CATALOG: [(PieceKind, Shape); 7] = [
    (PieceKind::I, Shape::new(4, [0b0010, 0b0010, 0b0010, 0b0010])),
    (PieceKind::T, Shape::new(3, [0b010, 0b111, 0b000, 0])),
    (PieceKind::O, Shape::new(2, [0b11, 0b11, 0, 0])),
    (PieceKind::Z, Shape::new(3, [0b110, 0b011, 0b000, 0])),
    (PieceKind::S, Shape::new(3, [0b011, 0b110, 0b000, 0])),
    (PieceKind::J, Shape::new(3, [0b001, 0b111, 0b000, 0])),
    (PieceKind::L, Shape::new(3, [0b100, 0b111, 0b000, 0])),
];

/// Look up the catalog shape for a piece kind.
pub fn shape_for(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => CATALOG[0].1,
        PieceKind::T => CATALOG[1].1,
        PieceKind::O => CATALOG[2].1,
        PieceKind::Z => CATALOG[3].1,
        PieceKind::S => CATALOG[4].1,
        PieceKind::J => CATALOG[5].1,
        PieceKind::L => CATALOG[6].1,
    }
}
