//! Terminal input module (core-facing).
//!
//! This crate is intentionally independent of any renderer. It maps
//! `crossterm` key events into [`crate::types::Command`] values and nothing
//! more: one key press, one command.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
