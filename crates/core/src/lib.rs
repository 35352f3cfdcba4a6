//! Piece geometry core - pure, deterministic, and testable
//!
//! This crate owns tetromino shapes, 90° rotation, bounds-checked movement
//! and floor-only ghost projection for a touch-controlled puzzle game. It has
//! **no dependencies** on rendering, input capture or storage:
//!
//! - **Caller-owned**: every [`Piece`] belongs to the game loop that spawned it
//! - **Explicit boards**: board width and height are parameters, never globals
//! - **All-or-nothing**: a rejected operation leaves the piece untouched
//! - **Allocation-free hot paths**: shapes are 16-bit masks, cells come back in an `ArrayVec`
//!
//! # Module Structure
//!
//! - [`shape`]: occupancy grids, the 7 templates, clockwise/counter-clockwise rotation
//! - [`piece`]: an active piece and its move/rotate/drag/ghost operations
//! - [`rng`]: uniform random template selection for spawning
//! - [`snapshot`]: serializable view of a piece for renderers
//!
//! # Rules
//!
//! - **No wall kicks**: a rotation that does not fit is simply rejected
//! - **Tap to rotate**: tapping right of a piece's center rotates clockwise,
//!   anywhere else counter-clockwise
//! - **Drag saturates**: horizontal drags clamp at the walls
//! - **Ghost ignores the stack**: projection only respects the floor
//!
//! # Example
//!
//! ```
//! use touch_tetris_core::Piece;
//! use touch_tetris_core::types::PieceKind;
//!
//! let mut piece = Piece::spawn(PieceKind::T, 10);
//! assert!(piece.try_move(1, 0, 10, 20));
//! assert!(piece.rotate(true, 10, 20));
//! assert!(piece.set_x(-5.0, 10));
//! assert_eq!(piece.x(), 0);
//!
//! piece.teleport_to_ghost(20);
//! assert_eq!(piece.y() + piece.height(), 20);
//! ```

pub mod piece;
pub mod rng;
pub mod shape;
pub mod snapshot;

pub use touch_tetris_types as types;

// Re-export commonly used types for convenience
pub use piece::Piece;
pub use rng::{PieceRandomizer, SimpleRng};
pub use shape::{rotate_ccw, rotate_cw, template, Shape};
pub use snapshot::PieceSnapshot;
