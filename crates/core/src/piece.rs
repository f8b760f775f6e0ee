//! Active piece - type, orientation and grid position

use crate::shapes::{shape_for, Shape};
use crate::types::PieceKind;

/// A falling piece
///
/// Movement and rotation produce new values; whether the result is legal is
/// decided by [`Board::can_place`](crate::Board::can_place).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub col: i8,
    pub row: i8,
}

impl Piece {
    /// Create a piece in spawn orientation, horizontally centred on a board
    /// `board_width` wide, at row 0
    pub fn spawn(kind: PieceKind, board_width: u8) -> Self {
        let shape = shape_for(kind);
        Self {
            kind,
            shape,
            col: spawn_col(board_width, shape.cols()),
            row: 0,
        }
    }

    /// The shape turned 90° clockwise about its bounding box
    pub fn rotated(&self) -> Shape {
        self.shape.rotated_cw()
    }

    /// Same piece displaced by (dcol, drow)
    pub fn moved(&self, dcol: i8, drow: i8) -> Self {
        Self {
            col: self.col.saturating_add(dcol),
            row: self.row.saturating_add(drow),
            ..*self
        }
    }

    /// Same position with the shape replaced wholesale
    pub fn with_shape(&self, shape: Shape) -> Self {
        Self { shape, ..*self }
    }

    /// Board coordinates of every filled cell
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .filled()
            .map(move |(r, c)| (self.col + c as i8, self.row + r as i8))
    }
}

/// Spawn column: `width / 2 - shape_cols / 2`
pub fn spawn_col(board_width: u8, shape_cols: u8) -> i8 {
    (board_width / 2) as i8 - (shape_cols / 2) as i8
}
