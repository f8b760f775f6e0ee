//! Shape catalog - tetromino cell matrices
//!
//! Each shape is a small rectangular matrix (row 0 = top). A zero entry is a
//! hole in the bounding box; a non-zero entry equals the owning type id.
//! Catalog shapes are constants. Rotated orientations are derived on demand
//! with [`Shape::rotated_cw`] and never stored.

use crate::types::PieceKind;

/// Largest bounding box side of any shape
pub const MAX_SHAPE_SIDE: usize = 4;

/// Immutable rectangular cell matrix, at most 4x4
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    cells: [[u8; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE],
}

impl Shape {
    /// The empty placeholder (0x0)
    pub const EMPTY: Shape = Shape {
        rows: 0,
        cols: 0,
        cells: [[0; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE],
    };

    /// Build a shape from an `R x C` matrix
    ///
    /// Fails to compile (in const context) or panics if either side exceeds 4.
    pub const fn from_matrix<const R: usize, const C: usize>(matrix: [[u8; C]; R]) -> Self {
        assert!(R <= MAX_SHAPE_SIDE && C <= MAX_SHAPE_SIDE);
        let mut cells = [[0u8; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];
        let mut r = 0;
        while r < R {
            let mut c = 0;
            while c < C {
                cells[r][c] = matrix[r][c];
                c += 1;
            }
            r += 1;
        }
        Self {
            rows: R as u8,
            cols: C as u8,
            cells,
        }
    }

    /// Number of rows in the bounding box
    pub fn rows(&self) -> u8 {
        self.rows
    }

    /// Number of columns in the bounding box
    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Cell value at (row, col), 0 outside the bounding box
    pub fn get(&self, row: u8, col: u8) -> u8 {
        if row >= self.rows || col >= self.cols {
            return 0;
        }
        self.cells[row as usize][col as usize]
    }

    /// Check whether (row, col) is a filled cell
    pub fn is_filled(&self, row: u8, col: u8) -> bool {
        self.get(row, col) != 0
    }

    /// Iterate the filled cells as `(row, col)` offsets, row-major
    pub fn filled(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        (0..self.rows)
            .flat_map(move |r| (0..self.cols).map(move |c| (r, c)))
            .filter(move |&(r, c)| self.is_filled(r, c))
    }

    /// Count of filled cells
    pub fn filled_count(&self) -> usize {
        self.filled().count()
    }

    /// 90° clockwise rotation
    ///
    /// An `R x C` matrix becomes `C x R` with `out[c][R - 1 - r] = in[r][c]`.
    pub fn rotated_cw(&self) -> Shape {
        let mut cells = [[0u8; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];
        let rows = self.rows as usize;
        for r in 0..rows {
            for c in 0..self.cols as usize {
                cells[c][rows - 1 - r] = self.cells[r][c];
            }
        }
        Shape {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }

    /// Copy out as nested rows (for display and tests)
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.rows as usize)
            .map(|r| self.cells[r][..self.cols as usize].to_vec())
            .collect()
    }
}

impl Default for Shape {
    fn default() -> Self {
        Shape::EMPTY
    }
}

const I_SHAPE: Shape = Shape::from_matrix([[1, 1, 1, 1]]);
const J_SHAPE: Shape = Shape::from_matrix([[2, 0, 0], [2, 2, 2]]);
const L_SHAPE: Shape = Shape::from_matrix([[0, 0, 3], [3, 3, 3]]);
const O_SHAPE: Shape = Shape::from_matrix([[4, 4], [4, 4]]);
const S_SHAPE: Shape = Shape::from_matrix([[0, 5, 5], [5, 5, 0]]);
const T_SHAPE: Shape = Shape::from_matrix([[0, 6, 0], [6, 6, 6]]);
const Z_SHAPE: Shape = Shape::from_matrix([[7, 7, 0], [0, 7, 7]]);

/// Catalog indexed by type id; slot 0 is the empty placeholder
pub const CATALOG: [Shape; 8] = [
    Shape::EMPTY,
    I_SHAPE,
    J_SHAPE,
    L_SHAPE,
    O_SHAPE,
    S_SHAPE,
    T_SHAPE,
    Z_SHAPE,
];

/// Spawn orientation for a piece kind
pub fn shape_for(kind: PieceKind) -> Shape {
    CATALOG[kind.id() as usize]
}

/// Catalog lookup by raw type id (0 yields the empty placeholder)
pub fn shape_for_id(id: u8) -> Option<Shape> {
    CATALOG.get(id as usize).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_catalog_shape_has_four_cells_tagged_with_its_id() {
        for kind in PieceKind::ALL {
            let shape = shape_for(kind);
            assert_eq!(shape.filled_count(), 4, "{:?}", kind);
            for (r, c) in shape.filled() {
                assert_eq!(shape.get(r, c), kind.id());
            }
        }
    }

    #[test]
    fn empty_placeholder_has_no_cells() {
        assert_eq!(shape_for_id(0), Some(Shape::EMPTY));
        assert_eq!(Shape::EMPTY.filled_count(), 0);
        assert_eq!(shape_for_id(8), None);
    }

    #[test]
    fn rotation_swaps_dimensions() {
        let i = shape_for(PieceKind::I);
        let r = i.rotated_cw();
        assert_eq!((r.rows(), r.cols()), (4, 1));
        assert_eq!(r.to_rows(), vec![vec![1], vec![1], vec![1], vec![1]]);
    }

    #[test]
    fn rotating_j_clockwise() {
        // [2 0 0]      [2 2]
        // [2 2 2]  ->  [2 0]
        //              [2 0]
        let j = shape_for(PieceKind::J).rotated_cw();
        assert_eq!(j.to_rows(), vec![vec![2, 2], vec![2, 0], vec![2, 0]]);
    }

    #[test]
    fn get_outside_bounding_box_is_empty() {
        let o = shape_for(PieceKind::O);
        assert_eq!(o.get(2, 0), 0);
        assert_eq!(o.get(0, 3), 0);
    }
}
