//! Terminal rendering surface.
//!
//! Draws a [`GameSnapshot`](blockfall_core::GameSnapshot) into a simple
//! framebuffer that is then flushed to a terminal backend. Nothing here
//! touches game state; it only reads snapshots.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
