//! Touch Tetris (workspace facade crate).
//!
//! Re-exports the piece geometry as `touch_tetris::{core, types}` and hosts the
//! headless scripted driver in [`sim`].

pub mod sim;

pub use touch_tetris_core as core;
pub use touch_tetris_types as types;
