//! Shape catalog and rotation tests

use blockfall::core::shapes::{shape_for, shape_for_id, Shape, CATALOG};
use blockfall::core::Piece;
use blockfall::types::PieceKind;

// ============== Catalog Tests ==============

#[test]
fn test_catalog_matrices() {
    assert_eq!(shape_for(PieceKind::I).to_rows(), vec![vec![1, 1, 1, 1]]);
    assert_eq!(
        shape_for(PieceKind::J).to_rows(),
        vec![vec![2, 0, 0], vec![2, 2, 2]]
    );
    assert_eq!(
        shape_for(PieceKind::L).to_rows(),
        vec![vec![0, 0, 3], vec![3, 3, 3]]
    );
    assert_eq!(shape_for(PieceKind::O).to_rows(), vec![vec![4, 4], vec![4, 4]]);
    assert_eq!(
        shape_for(PieceKind::S).to_rows(),
        vec![vec![0, 5, 5], vec![5, 5, 0]]
    );
    assert_eq!(
        shape_for(PieceKind::T).to_rows(),
        vec![vec![0, 6, 0], vec![6, 6, 6]]
    );
    assert_eq!(
        shape_for(PieceKind::Z).to_rows(),
        vec![vec![7, 7, 0], vec![0, 7, 7]]
    );
}

#[test]
fn test_catalog_slot_zero_is_placeholder() {
    assert_eq!(CATALOG[0], Shape::EMPTY);
    assert_eq!(shape_for_id(0).unwrap().rows(), 0);
    for kind in PieceKind::ALL {
        assert_eq!(shape_for_id(kind.id()), Some(shape_for(kind)));
    }
}

// ============== Rotation Tests ==============

#[test]
fn test_four_rotations_return_original() {
    for kind in PieceKind::ALL {
        let shape = shape_for(kind);
        let back = shape.rotated_cw().rotated_cw().rotated_cw().rotated_cw();
        assert_eq!(back, shape, "{:?}", kind);
    }
}

#[test]
fn test_rotation_formula() {
    // out[c][R - 1 - r] == in[r][c]
    for kind in PieceKind::ALL {
        let shape = shape_for(kind);
        let rotated = shape.rotated_cw();
        assert_eq!(rotated.rows(), shape.cols());
        assert_eq!(rotated.cols(), shape.rows());
        for r in 0..shape.rows() {
            for c in 0..shape.cols() {
                assert_eq!(rotated.get(c, shape.rows() - 1 - r), shape.get(r, c));
            }
        }
    }
}

#[test]
fn test_t_rotation_sequence() {
    let t = shape_for(PieceKind::T);

    let east = t.rotated_cw();
    assert_eq!(east.to_rows(), vec![vec![6, 0], vec![6, 6], vec![6, 0]]);

    let south = east.rotated_cw();
    assert_eq!(south.to_rows(), vec![vec![6, 6, 6], vec![0, 6, 0]]);

    let west = south.rotated_cw();
    assert_eq!(west.to_rows(), vec![vec![0, 6], vec![6, 6], vec![0, 6]]);
}

#[test]
fn test_o_rotation_is_identity() {
    let o = shape_for(PieceKind::O);
    assert_eq!(o.rotated_cw(), o);
}

#[test]
fn test_rotation_keeps_type_id() {
    for kind in PieceKind::ALL {
        let rotated = Piece::spawn(kind, 10).rotated();
        assert_eq!(rotated.filled_count(), 4);
        for (r, c) in rotated.filled() {
            assert_eq!(rotated.get(r, c), kind.id());
        }
    }
}

// ============== Spawn Tests ==============

#[test]
fn test_spawn_position() {
    for kind in PieceKind::ALL {
        let piece = Piece::spawn(kind, 10);
        let expected = 5 - (shape_for(kind).cols() / 2) as i8;
        assert_eq!(piece.col, expected, "{:?}", kind);
        assert_eq!(piece.row, 0);
        assert_eq!(piece.shape, shape_for(kind));
    }
}
