//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is empty or filled with a piece
//! kind. Uses a flat array for cache locality and zero allocation.
//! Coordinates: (x, y) with x in 0..10 left to right, y in 0..20 top to
//! bottom.

use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH * BOARD_HEIGHT) as usize;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled).
    ///
    /// Out-of-bounds coordinates are NOT occupied by this query alone;
    /// bounds handling belongs to the collision test.
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Write a locked piece's cells into the grid.
    ///
    /// Callers have already validated the placement via collision testing,
    /// so every offset is expected to be in bounds.
    pub fn place_cells(&mut self, cells: &[(i8, i8)], kind: PieceKind) {
        for &(x, y) in cells {
            self.set(x, y, Some(kind));
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Remove every full row at once, shifting the surviving rows down and
    /// inserting empty rows at the top. Relative order of survivors is
    /// preserved. Returns the number of rows cleared.
    pub fn clear_full_rows(&mut self) -> usize {
        let mut cleared = 0;
        let width = BOARD_WIDTH as usize;
        let mut write_y = BOARD_HEIGHT as usize;

        // Bottom-up two-pointer compaction.
        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        // Blank the rows that opened up at the top.
        for cell in &mut self.cells[..write_y * width] {
            *cell = None;
        }

        cleared
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_row(board: &mut Board, y: i8) {
        for x in 0..BOARD_WIDTH as i8 {
            board.set(x, y, Some(PieceKind::I));
        }
    }

    #[test]
    fn new_board_is_empty() {
        let board = Board::new();
        for y in 0..BOARD_HEIGHT as i8 {
            for x in 0..BOARD_WIDTH as i8 {
                assert!(!board.is_occupied(x, y));
            }
        }
    }

    #[test]
    fn index_bounds() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn is_occupied_is_false_out_of_bounds() {
        let mut board = Board::new();
        board.set(0, 19, Some(PieceKind::L));
        assert!(board.is_occupied(0, 19));
        assert!(!board.is_occupied(-1, 19));
        assert!(!board.is_occupied(0, 20));
    }

    #[test]
    fn place_cells_writes_kind() {
        let mut board = Board::new();
        board.place_cells(&[(4, 18), (5, 18), (4, 19), (5, 19)], PieceKind::O);
        assert_eq!(board.get(4, 18), Some(Some(PieceKind::O)));
        assert_eq!(board.get(5, 19), Some(Some(PieceKind::O)));
        assert!(!board.is_occupied(3, 19));
    }

    #[test]
    fn clear_full_rows_returns_zero_on_partial_rows() {
        let mut board = Board::new();
        for x in 0..9 {
            board.set(x, 19, Some(PieceKind::T));
        }
        assert_eq!(board.clear_full_rows(), 0);
        assert!(board.is_occupied(0, 19));
    }

    #[test]
    fn clear_full_rows_removes_single_row() {
        let mut board = Board::new();
        fill_row(&mut board, 19);
        board.set(3, 18, Some(PieceKind::S));

        assert_eq!(board.clear_full_rows(), 1);

        // Partial row above shifted down, top row emptied.
        assert_eq!(board.get(3, 19), Some(Some(PieceKind::S)));
        assert!(!board.is_occupied(3, 18));
        for x in 0..BOARD_WIDTH as i8 {
            assert!(!board.is_occupied(x, 0));
        }
    }

    #[test]
    fn clear_full_rows_removes_all_full_rows_at_once() {
        let mut board = Board::new();
        // Rows 16..=19 full, with a marker row in between untouched rows.
        for y in 16..20 {
            fill_row(&mut board, y);
        }
        board.set(0, 15, Some(PieceKind::J));
        board.set(9, 14, Some(PieceKind::L));

        assert_eq!(board.clear_full_rows(), 4);

        // Survivors keep their relative order, shifted down by 4.
        assert_eq!(board.get(9, 18), Some(Some(PieceKind::L)));
        assert_eq!(board.get(0, 19), Some(Some(PieceKind::J)));
        for y in 0..18 {
            for x in 0..BOARD_WIDTH as i8 {
                assert!(!board.is_occupied(x, y), "({}, {}) should be empty", x, y);
            }
        }
    }

    #[test]
    fn clear_full_rows_copes_with_more_than_four_rows() {
        // Gravity locks at most 4 full rows, but set() lets callers build
        // any grid; the count must not be capped.
        let mut board = Board::new();
        for y in 14..20 {
            fill_row(&mut board, y);
        }
        assert_eq!(board.clear_full_rows(), 6);
        for y in 0..BOARD_HEIGHT as i8 {
            for x in 0..BOARD_WIDTH as i8 {
                assert!(!board.is_occupied(x, y));
            }
        }
    }

    #[test]
    fn clear_full_rows_handles_non_adjacent_rows() {
        let mut board = Board::new();
        fill_row(&mut board, 17);
        fill_row(&mut board, 19);
        board.set(2, 18, Some(PieceKind::Z));

        assert_eq!(board.clear_full_rows(), 2);

        // The in-between partial row lands on the floor.
        assert_eq!(board.get(2, 19), Some(Some(PieceKind::Z)));
        assert!(!board.is_occupied(2, 18));
    }
}
