//! Board module - manages the game grid
//!
//! The board is a `width x height` grid (10x20 by default) of cell values:
//! `0` for empty, `1..=7` for a locked piece's type id.
//! Uses a flat row-major vector for cache locality.
//! Coordinates: (col, row) where col grows left to right and row 0 is the top.

use crate::config::{check_board_size, ConfigError};
use crate::shapes::Shape;
use crate::types::{CellValue, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, EMPTY};

/// The game board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (row * width + col)
    cells: Vec<CellValue>,
}

impl Board {
    /// Create a new empty board
    ///
    /// Both sides must be non-zero.
    pub fn new(width: u8, height: u8) -> Self {
        assert!(width > 0 && height > 0, "board sides must be non-zero");
        Self {
            width,
            height,
            cells: vec![EMPTY; width as usize * height as usize],
        }
    }

    /// Calculate flat index from (col, row) coordinates
    #[inline(always)]
    fn index(&self, col: i8, row: i8) -> Option<usize> {
        if col < 0 || row < 0 || col as u8 >= self.width || row as u8 >= self.height {
            return None;
        }
        Some(row as usize * self.width as usize + col as usize)
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Get cell at (col, row)
    /// Returns None if out of bounds
    pub fn get(&self, col: i8, row: i8) -> Option<CellValue> {
        self.index(col, row).map(|idx| self.cells[idx])
    }

    /// Set cell at (col, row)
    /// Returns false if out of bounds
    pub fn set(&mut self, col: i8, row: i8, value: CellValue) -> bool {
        match self.index(col, row) {
            Some(idx) => {
                self.cells[idx] = value;
                true
            }
            None => false,
        }
    }

    /// Check if position is inside the grid and empty
    pub fn is_free(&self, col: i8, row: i8) -> bool {
        self.get(col, row) == Some(EMPTY)
    }

    /// Check if position is inside the grid and filled
    pub fn is_occupied(&self, col: i8, row: i8) -> bool {
        matches!(self.get(col, row), Some(v) if v != EMPTY)
    }

    /// Check whether `shape` fits with its top-left corner at (col, row)
    ///
    /// Every filled cell must land inside the grid on an empty cell. This is
    /// the single legality check for spawning, movement, descent and rotation.
    pub fn can_place(&self, shape: &Shape, col: i8, row: i8) -> bool {
        shape.filled().all(|(r, c)| {
            let Some((x, y)) = offset(col, row, c, r) else {
                return false;
            };
            self.is_free(x, y)
        })
    }

    /// Write `kind`'s id into every cell `shape` covers at (col, row)
    ///
    /// The placement must already have passed [`Board::can_place`].
    pub fn lock(&mut self, shape: &Shape, col: i8, row: i8, kind: PieceKind) {
        debug_assert!(
            self.can_place(shape, col, row),
            "lock at ({}, {}) overlaps or leaves the board",
            col,
            row
        );
        for (r, c) in shape.filled() {
            if let Some((x, y)) = offset(col, row, c, r) {
                self.set(x, y, kind.id());
            }
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= self.height as usize {
            return false;
        }
        self.row(row).iter().all(|&cell| cell != EMPTY)
    }

    /// Cells of one row
    pub fn row(&self, row: usize) -> &[CellValue] {
        let width = self.width as usize;
        let start = row * width;
        &self.cells[start..start + width]
    }

    /// Remove every full row at once and return how many were removed
    ///
    /// Survivors keep their relative order and collapse downward; the same
    /// number of empty rows appears at the top. Uses a two-pointer pass with
    /// no allocation.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = self.width as usize;
        let mut write_y = self.height as usize;
        let mut cleared = 0;

        // Scan from bottom to top
        for read_y in (0..self.height as usize).rev() {
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

        self.cells[..write_y * width].fill(EMPTY);

        cleared
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[CellValue] {
        &self.cells
    }

    /// Copy the grid out as rows
    pub fn to_rows(&self) -> Vec<Vec<CellValue>> {
        self.cells
            .chunks(self.width as usize)
            .map(|row| row.to_vec())
            .collect()
    }

    /// Copy the grid into an existing row buffer, reusing its allocations
    pub fn write_rows(&self, out: &mut Vec<Vec<CellValue>>) {
        out.resize_with(self.height as usize, Vec::new);
        for (dst, src) in out.iter_mut().zip(self.cells.chunks(self.width as usize)) {
            dst.clear();
            dst.extend_from_slice(src);
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }

    /// Build a board from rows
    ///
    /// Rows must share one length, and both sides must lie in
    /// `MIN_BOARD_SIDE..=MAX_BOARD_SIDE`.
    pub fn from_rows(rows: &[Vec<CellValue>]) -> Result<Self, ConfigError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != width) {
            return Err(ConfigError::Ragged);
        }
        check_board_size(width, height)?;

        let mut board = Self::new(width as u8, height as u8);
        for (y, row) in rows.iter().enumerate() {
            let start = y * width;
            board.cells[start..start + width].copy_from_slice(row);
        }
        Ok(board)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT)
    }
}

/// Board coordinate of shape offset (r, c) placed at (col, row)
#[inline(always)]
fn offset(col: i8, row: i8, c: u8, r: u8) -> Option<(i8, i8)> {
    let x = col.checked_add(i8::try_from(c).ok()?)?;
    let y = row.checked_add(i8::try_from(r).ok()?)?;
    Some((x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::shape_for;

    #[test]
    fn test_board_index_calculation() {
        let board = Board::default();
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(9, 0), Some(9));
        assert_eq!(board.index(0, 1), Some(10));
        assert_eq!(board.index(9, 19), Some(199));
        assert_eq!(board.index(-1, 0), None);
        assert_eq!(board.index(10, 0), None);
        assert_eq!(board.index(0, 20), None);
    }

    #[test]
    fn test_custom_dimensions() {
        let board = Board::new(6, 8);
        assert_eq!(board.cells().len(), 48);
        assert_eq!(board.index(5, 7), Some(47));
        assert_eq!(board.index(6, 0), None);
    }

    #[test]
    fn test_can_place_rejects_negative_row() {
        let board = Board::default();
        let o = shape_for(PieceKind::O);
        assert!(board.can_place(&o, 4, 0));
        assert!(!board.can_place(&o, 4, -1));
    }

    #[test]
    fn test_holes_in_bounding_box_do_not_collide() {
        let mut board = Board::default();
        // T = [0 6 0] / [6 6 6]; its top corners are holes.
        board.set(3, 0, 1);
        board.set(5, 0, 1);
        assert!(board.can_place(&shape_for(PieceKind::T), 3, 0));
    }

    #[test]
    fn test_write_rows_reuses_buffer() {
        let mut board = Board::default();
        board.set(2, 19, 5);
        let mut rows = Vec::new();
        board.write_rows(&mut rows);
        assert_eq!(rows.len(), 20);
        assert_eq!(rows[19][2], 5);

        board.clear();
        board.write_rows(&mut rows);
        assert!(rows.iter().flatten().all(|&v| v == EMPTY));
    }

    #[test]
    fn test_from_rows_roundtrip() {
        let mut rows = vec![vec![0u8; 10]; 20];
        rows[5][3] = 4;
        rows[10][7] = 3;
        let board = Board::from_rows(&rows).unwrap();
        assert_eq!(board.to_rows(), rows);
    }

    #[test]
    fn test_from_rows_rejects_bad_sizes() {
        assert_eq!(Board::from_rows(&[]), Err(ConfigError::Width(0)));
        assert_eq!(
            Board::from_rows(&vec![vec![0u8; 300]; 20]),
            Err(ConfigError::Width(300))
        );
        assert_eq!(
            Board::from_rows(&vec![vec![0u8; 10]; 3]),
            Err(ConfigError::Height(3))
        );

        let mut ragged = vec![vec![0u8; 10]; 20];
        ragged[7].push(0);
        assert_eq!(Board::from_rows(&ragged), Err(ConfigError::Ragged));
    }
}
