//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the game rules and state. It has **no
//! dependency** on rendering, windowing, terminals or timers, making it:
//!
//! - **Deterministic**: a seeded or scripted randomizer replays the same game
//! - **Testable**: fresh [`Session`] per test, no global state
//! - **Portable**: any host can drive it (terminal, GUI, headless harness)
//!
//! # Module Structure
//!
//! - [`shapes`]: the seven tetromino matrices plus the empty placeholder
//! - [`board`]: grid, collision testing, locking and line clearing
//! - [`piece`]: the falling piece and its clockwise rotation
//! - [`rng`]: uniform piece selection behind an injectable trait
//! - [`scoring`]: flat and weighted score/pacing policies
//! - [`session`]: the Playing/GameOver state machine
//! - [`snapshot`]: read-only copy of the state for renderers
//!
//! # Game Rules
//!
//! - Pieces spawn centred at the top of the board
//! - Rotation is a plain 90° clockwise turn of the bounding box; if it does
//!   not fit where the piece is, it does not happen
//! - A piece locks when a tick cannot move it down; soft drop never locks
//! - All full rows clear at once after a lock
//! - The game ends when a new piece cannot spawn
//!
//! # Example
//!
//! ```
//! use blockfall_core::{Session, SessionConfig, TickOutcome};
//! use blockfall_types::Command;
//!
//! let mut game = Session::new(SessionConfig::default().with_seed(12345));
//!
//! game.command(Command::MoveRight);
//! game.command(Command::Rotate);
//! assert_eq!(game.tick(), TickOutcome::Fell);
//!
//! let snap = game.snapshot();
//! assert!(!snap.game_over);
//! assert_eq!(snap.score, 0);
//! ```
//!
//! # Timing
//!
//! The core never reads a clock. The host calls
//! [`Session::tick`](session::Session::tick) every
//! [`Session::interval_ms`](session::Session::interval_ms) milliseconds and
//! re-reads the interval after each lock, since clears may shorten it.

pub mod board;
pub mod config;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod shapes;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::{ConfigError, SessionConfig};
pub use piece::Piece;
pub use rng::{Randomizer, ScriptedRandomizer, UniformRandomizer};
pub use scoring::{Pacer, ScoreResult};
pub use session::{LockEvent, Session, SessionState, TickOutcome};
pub use shapes::{shape_for, Shape};
pub use snapshot::{GameSnapshot, PieceSnapshot};
