//! Core types module - shared data structures and constants
//!
//! This module defines the vocabulary shared by the game core, the input
//! adapter and the renderer. Everything here is plain data with no external
//! dependencies.
//!
//! # Board Dimensions
//!
//! Default playfield dimensions:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//!
//! # Cell Values
//!
//! A board cell is a `u8`: `0` is empty, `1..=7` is the type id of the piece
//! that was locked there. The type id doubles as the colour index.
//!
//! | Id | Kind |
//! |----|------|
//! | 1 | I |
//! | 2 | J |
//! | 3 | L |
//! | 4 | O |
//! | 5 | S |
//! | 6 | T |
//! | 7 | Z |
//!
//! # Pacing Constants
//!
//! Tick intervals are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `INITIAL_INTERVAL_MS` | 500 | Tick interval at session start |
//! | `FLAT_INTERVAL_STEP_MS` | 50 | Speed-up per level (flat policy) |
//! | `FLAT_INTERVAL_MIN_MS` | 50 | Fastest interval (flat policy) |
//! | `WEIGHTED_INTERVAL_STEP_MS` | 10 | Speed-up per clear (weighted policy) |
//! | `WEIGHTED_INTERVAL_MIN_MS` | 100 | Fastest interval (weighted policy) |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Command, PacingPolicy, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let piece = PieceKind::from_id(4).unwrap();
//! assert_eq!(piece, PieceKind::O);
//! assert_eq!(piece.id(), 4);
//!
//! assert_eq!(Command::from_str("moveLeft"), Some(Command::MoveLeft));
//! assert_eq!(PacingPolicy::from_str("weighted"), Some(PacingPolicy::Weighted));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Default board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Default board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Smallest accepted board side
pub const MIN_BOARD_SIDE: u8 = 4;

/// Largest accepted board side
pub const MAX_BOARD_SIDE: u8 = 40;

/// A board cell: 0 = empty, 1..=7 = locked piece type id
pub type CellValue = u8;

/// Empty cell marker
pub const EMPTY: CellValue = 0;

/// Tick interval at session start (500ms per row)
pub const INITIAL_INTERVAL_MS: u32 = 500;

/// Lines needed per level
pub const LINES_PER_LEVEL: u32 = 10;

/// Points per cleared line (flat policy)
pub const FLAT_POINTS_PER_LINE: u32 = 100;

/// Interval decrease per level-up (flat policy)
pub const FLAT_INTERVAL_STEP_MS: u32 = 50;

/// Interval floor (flat policy)
pub const FLAT_INTERVAL_MIN_MS: u32 = 50;

/// Line clear points by count (weighted policy), index = lines cleared
pub const WEIGHTED_LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Interval decrease per non-zero clear (weighted policy)
pub const WEIGHTED_INTERVAL_STEP_MS: u32 = 10;

/// Interval floor (weighted policy)
pub const WEIGHTED_INTERVAL_MIN_MS: u32 = 100;

/// Time bonus numerator: a placement taking `n` ms earns `TIME_BONUS_SCALE / n`
pub const TIME_BONUS_SCALE: u32 = 100_000;

/// Placements faster than this are scored as if they took this long
pub const TIME_BONUS_FASTEST_MS: u32 = 100;

/// Smallest time bonus awarded on a clear
pub const TIME_BONUS_MIN: u32 = 10;

/// The seven tetromino piece kinds
///
/// The discriminant is the type id written into board cells:
/// - **I** (1): cyan, horizontal bar
/// - **J** (2): blue
/// - **L** (3): orange (mirror of J)
/// - **O** (4): yellow, 2x2 square
/// - **S** (5): green
/// - **T** (6): pink
/// - **Z** (7): red (mirror of S)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    I = 1,
    J = 2,
    L = 3,
    O = 4,
    S = 5,
    T = 6,
    Z = 7,
}

impl PieceKind {
    /// All kinds in type-id order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Numeric type id (1..=7)
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Look up a kind by type id
    ///
    /// Returns `None` for 0 (the empty placeholder) and anything above 7.
    pub const fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(PieceKind::I),
            2 => Some(PieceKind::J),
            3 => Some(PieceKind::L),
            4 => Some(PieceKind::O),
            5 => Some(PieceKind::S),
            6 => Some(PieceKind::T),
            7 => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("T"), Some(PieceKind::T));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Uppercase letter
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::O => "O",
            PieceKind::S => "S",
            PieceKind::T => "T",
            PieceKind::Z => "Z",
        }
    }
}

/// Commands the input adapter may send to a session
///
/// `Restart` is only honoured once the game is over; every other command is
/// only honoured while playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Try one extra row of descent (never locks)
    SoftDrop,
    /// Rotate piece 90° clockwise, no kicks
    Rotate,
    /// Start a new game after game over
    Restart,
}

impl Command {
    /// Parse command from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Command;
    ///
    /// assert_eq!(Command::from_str("softDrop"), Some(Command::SoftDrop));
    /// assert_eq!(Command::from_str("ROTATE"), Some(Command::Rotate));
    /// assert_eq!(Command::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "softdrop" => Some(Command::SoftDrop),
            "rotate" => Some(Command::Rotate),
            "restart" => Some(Command::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::SoftDrop => "softDrop",
            Command::Rotate => "rotate",
            Command::Restart => "restart",
        }
    }
}

/// Scoring and pacing variants
///
/// - **Flat**: 100 points per line; every 10 lines the level goes up and the
///   tick interval shrinks by 50ms (floor 50ms).
/// - **Weighted**: 100/300/500/800 for 1-4 lines plus a time bonus for fast
///   placement; every clear shrinks the interval by 10ms (floor 100ms).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PacingPolicy {
    #[default]
    Flat,
    Weighted,
}

impl PacingPolicy {
    /// Parse policy from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "flat" => Some(PacingPolicy::Flat),
            "weighted" => Some(PacingPolicy::Weighted),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            PacingPolicy::Flat => "flat",
            PacingPolicy::Weighted => "weighted",
        }
    }

    /// Fastest tick interval this policy will reach
    pub fn min_interval_ms(&self) -> u32 {
        match self {
            PacingPolicy::Flat => FLAT_INTERVAL_MIN_MS,
            PacingPolicy::Weighted => WEIGHTED_INTERVAL_MIN_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pacing_defaults() {
        assert_eq!(INITIAL_INTERVAL_MS, 500);
        assert_eq!(FLAT_INTERVAL_STEP_MS, 50);
        assert_eq!(FLAT_INTERVAL_MIN_MS, 50);
        assert!(WEIGHTED_INTERVAL_MIN_MS > FLAT_INTERVAL_MIN_MS);
        assert_eq!(WEIGHTED_LINE_SCORES, [0, 100, 300, 500, 800]);
    }

    #[test]
    fn piece_ids_round_trip() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_id(kind.id()), Some(kind));
        }
        assert_eq!(PieceKind::from_id(0), None);
        assert_eq!(PieceKind::from_id(8), None);
    }
}
