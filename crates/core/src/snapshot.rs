use crate::piece::Piece;
use crate::shapes::Shape;
use crate::types::{CellValue, PieceKind, EMPTY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub col: i8,
    pub row: i8,
}

impl From<Piece> for PieceSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
            col: value.col,
            row: value.row,
        }
    }
}

impl PieceSnapshot {
    /// Check whether the piece covers board cell (col, row)
    pub fn covers(&self, col: i8, row: i8) -> bool {
        let dc = col as i16 - self.col as i16;
        let dr = row as i16 - self.row as i16;
        let (Ok(c), Ok(r)) = (u8::try_from(dc), u8::try_from(dr)) else {
            return false;
        };
        self.shape.is_filled(r, c)
    }
}

/// Read-only copy of everything a renderer needs
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub width: u8,
    pub height: u8,
    /// Locked cells, `grid[row][col]`.
    pub grid: Vec<Vec<CellValue>>,
    pub current: PieceSnapshot,
    pub next: PieceKind,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub interval_ms: u32,
    pub game_over: bool,
    pub episode: u32,
}

impl GameSnapshot {
    /// Locked cell value at (col, row), empty outside the grid
    pub fn cell(&self, col: i8, row: i8) -> CellValue {
        if col < 0 || row < 0 {
            return EMPTY;
        }
        self.grid
            .get(row as usize)
            .and_then(|r| r.get(col as usize))
            .copied()
            .unwrap_or(EMPTY)
    }

    /// Cell value with the current piece drawn over the locked cells
    pub fn cell_with_piece(&self, col: i8, row: i8) -> CellValue {
        if self.current.covers(col, row) {
            return self.current.kind.id();
        }
        self.cell(col, row)
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }
}
