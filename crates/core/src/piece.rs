//! Piece module - one active tetromino and its bounds-checked operations
//!
//! Coordinates: `(x, y)` is the board cell of the shape's top-left corner,
//! x grows to the right and y grows downward. Board dimensions are passed in
//! by the caller on every call; a piece knows nothing about the board it is
//! falling on beyond those two numbers.
//!
//! Every mutating operation either commits completely or leaves the piece
//! untouched and returns `false`. The exception is [`Piece::set_x`], which
//! clamps instead of rejecting.

use arrayvec::ArrayVec;
use tracing::{debug, trace};

use crate::shape::{template, Shape};
use crate::types::{PieceAction, PieceKind};

/// Upper bound on occupied cells of any shape (4x4)
pub const MAX_CELLS: usize = 16;

/// Whether `start + len` stays at or below `limit` without overflowing
fn ends_within(start: i32, len: i32, limit: i32) -> bool {
    matches!(start.checked_add(len), Some(end) if end <= limit)
}

/// An active tetromino instance, exclusively owned by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    shape: Shape,
    x: i32,
    y: i32,
}

impl Piece {
    /// Spawn a piece on row 0, centered on a board of the given width
    ///
    /// # Examples
    ///
    /// ```
    /// use touch_tetris_core::Piece;
    /// use touch_tetris_core::types::PieceKind;
    ///
    /// let piece = Piece::spawn(PieceKind::I, 10);
    /// assert_eq!((piece.x(), piece.y()), (3, 0));
    /// ```
    pub fn spawn(kind: PieceKind, board_width: i32) -> Self {
        Self::spawn_at(kind, board_width, 0)
    }

    /// Spawn a piece on `start_row`, centered on a board of the given width
    ///
    /// `x = floor(board_width / 2) - floor(shape_width / 2)`, so odd widths
    /// lean left.
    pub fn spawn_at(kind: PieceKind, board_width: i32, start_row: i32) -> Self {
        let shape = template(kind);
        let x = board_width.div_euclid(2) - shape.width() / 2;
        debug!(kind = kind.name(), x, y = start_row, "spawned piece");
        Self {
            kind,
            shape,
            x,
            y: start_row,
        }
    }

    /// Template this piece was spawned from
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Template name ("I", "O", ...)
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Display color as a CSS hex string
    pub fn color(&self) -> &'static str {
        self.kind.color()
    }

    /// Current (possibly rotated) grid
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Column of the top-left cell
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Row of the top-left cell
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Width of the current grid
    pub fn width(&self) -> i32 {
        self.shape.width()
    }

    /// Height of the current grid
    pub fn height(&self) -> i32 {
        self.shape.height()
    }

    /// Occupied cells in board coordinates
    pub fn cells(&self) -> ArrayVec<(i32, i32), MAX_CELLS> {
        self.shape
            .cells()
            .map(|(dx, dy)| (self.x.saturating_add(dx), self.y.saturating_add(dy)))
            .collect()
    }

    /// Try to move by (dx, dy)
    ///
    /// Succeeds iff the whole bounding box stays inside the board. Both axes
    /// are committed together or not at all. A delta that overflows `i32`
    /// is rejected like any other out-of-board move.
    pub fn try_move(&mut self, dx: i32, dy: i32, board_width: i32, board_height: i32) -> bool {
        let (Some(new_x), Some(new_y)) = (self.x.checked_add(dx), self.y.checked_add(dy)) else {
            trace!(kind = self.name(), dx, dy, "move rejected: overflow");
            return false;
        };
        let fits = new_x >= 0
            && ends_within(new_x, self.width(), board_width)
            && new_y >= 0
            && ends_within(new_y, self.height(), board_height);

        if !fits {
            trace!(kind = self.name(), new_x, new_y, "move rejected");
            return false;
        }
        self.x = new_x;
        self.y = new_y;
        true
    }

    /// Try to rotate 90° in place, keeping the top-left anchor
    ///
    /// The rotated grid fits iff `x + new_width <= board_width` and
    /// `y + new_height <= board_height`. Lower bounds are not re-checked:
    /// the anchor does not move, so a piece already at `x >= 0, y >= 0`
    /// stays there.
    pub fn rotate(&mut self, clockwise: bool, board_width: i32, board_height: i32) -> bool {
        let candidate = if clockwise {
            self.shape.rotate_cw()
        } else {
            self.shape.rotate_ccw()
        };

        if !ends_within(self.x, candidate.width(), board_width)
            || !ends_within(self.y, candidate.height(), board_height)
        {
            trace!(kind = self.name(), clockwise, "rotation rejected");
            return false;
        }
        self.shape = candidate;
        true
    }

    /// Rotate towards the tapped side of the piece
    ///
    /// A tap strictly right of the horizontal center (`x + width / 2`)
    /// rotates clockwise; on or left of it, counter-clockwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use touch_tetris_core::Piece;
    /// use touch_tetris_core::types::PieceKind;
    ///
    /// // T spawns at x = 4 with width 3, so its center is 5.5.
    /// let mut piece = Piece::spawn(PieceKind::T, 10);
    /// assert!(piece.rotate_towards(9.0, 10, 20));
    /// assert_eq!(piece.shape().to_rows(), vec![vec![1, 0], vec![1, 1], vec![1, 0]]);
    /// ```
    pub fn rotate_towards(&mut self, tap_x: f32, board_width: i32, board_height: i32) -> bool {
        let center = self.x as f32 + self.width() as f32 / 2.0;
        self.rotate(tap_x > center, board_width, board_height)
    }

    /// Drag horizontally to `target_x`, rounding to the nearest column
    ///
    /// Out-of-range targets saturate at the walls instead of being rejected.
    /// Returns `true` only if `x` actually changed.
    pub fn set_x(&mut self, target_x: f32, board_width: i32) -> bool {
        let max_x = board_width.saturating_sub(self.width());
        let clamped = (target_x.round() as i32).min(max_x).max(0);
        if clamped == self.x {
            return false;
        }
        self.x = clamped;
        true
    }

    /// Row the piece would land on if dropped straight down
    ///
    /// Only the floor is considered; placed blocks are invisible here. A
    /// piece already at or below the floor row stays where it is.
    pub fn ghost_y(&self, board_height: i32) -> i32 {
        self.y.max(board_height.saturating_sub(self.height()))
    }

    /// Move straight to the ghost row
    pub fn teleport_to_ghost(&mut self, board_height: i32) {
        self.y = self.ghost_y(board_height);
    }

    /// Apply one input action, returning whether the piece changed
    pub fn apply(&mut self, action: PieceAction, board_width: i32, board_height: i32) -> bool {
        match action {
            PieceAction::MoveLeft => self.try_move(-1, 0, board_width, board_height),
            PieceAction::MoveRight => self.try_move(1, 0, board_width, board_height),
            PieceAction::SoftDrop => self.try_move(0, 1, board_width, board_height),
            PieceAction::HardDrop => {
                let before = self.y;
                self.teleport_to_ghost(board_height);
                self.y != before
            }
            PieceAction::RotateCw => self.rotate(true, board_width, board_height),
            PieceAction::RotateCcw => self.rotate(false, board_width, board_height),
            PieceAction::Tap(x) => self.rotate_towards(x, board_width, board_height),
            PieceAction::Drag(x) => self.set_x(x, board_width),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_centers_with_left_bias() {
        // floor(9/2) - floor(3/2) = 3
        assert_eq!(Piece::spawn(PieceKind::T, 9).x(), 3);
        // floor(9/2) - floor(4/2) = 2
        assert_eq!(Piece::spawn(PieceKind::I, 9).x(), 2);
        assert_eq!(Piece::spawn(PieceKind::O, 10).x(), 4);
    }

    #[test]
    fn test_cells_are_offset_by_position() {
        let piece = Piece::spawn_at(PieceKind::T, 10, 5);
        let cells: Vec<_> = piece.cells().into_iter().collect();
        assert_eq!(cells, vec![(5, 5), (4, 6), (5, 6), (6, 6)]);
    }

    #[test]
    fn test_apply_hard_drop_reports_change() {
        let mut piece = Piece::spawn(PieceKind::O, 10);
        assert!(piece.apply(PieceAction::HardDrop, 10, 20));
        assert_eq!(piece.y(), 18);
        assert!(!piece.apply(PieceAction::HardDrop, 10, 20));
    }

    #[test]
    fn test_overflowing_move_is_rejected() {
        let mut piece = Piece::spawn(PieceKind::T, 10);
        let before = piece;
        assert!(!piece.try_move(i32::MAX, 0, 10, 20));
        assert!(!piece.try_move(0, i32::MIN, 10, 20));
        assert!(!piece.try_move(i32::MAX, i32::MIN, 10, 20));
        assert!(!piece.try_move(i32::MIN, i32::MAX, 10, 20));
        assert_eq!(piece, before);
    }

    #[test]
    fn test_extreme_board_dimensions_do_not_overflow() {
        let mut piece = Piece::spawn_at(PieceKind::I, 10, i32::MAX - 1);
        let before = piece;
        assert!(!piece.try_move(0, 1, 10, i32::MAX));
        assert!(!piece.rotate(true, 10, i32::MAX));
        assert_eq!(piece, before);

        let mut wide = Piece::spawn(PieceKind::O, i32::MAX);
        assert!(!wide.try_move(i32::MAX, 0, i32::MAX, 20));
        assert!(wide.set_x(f32::MAX, i32::MAX));
        assert_eq!(wide.x(), i32::MAX - 2);
        assert!(wide.rotate(true, i32::MAX, 20));
        assert_eq!(wide.cells().last(), Some(&(i32::MAX - 1, 1)));
    }

    #[test]
    fn test_ghost_y_matches_stepwise_drop() {
        for kind in PieceKind::ALL {
            for start_row in [0, 7, 18, 25] {
                let piece = Piece::spawn_at(kind, 10, start_row);
                let mut stepped = piece;
                while stepped.try_move(0, 1, 10, 20) {}
                let expected = if start_row + piece.height() <= 20 {
                    stepped.y()
                } else {
                    start_row
                };
                assert_eq!(piece.ghost_y(20), expected, "{:?} from {}", kind, start_row);
            }
        }
        let tall = Piece::spawn(PieceKind::T, 10);
        assert_eq!(tall.ghost_y(1_000_000_000), 1_000_000_000 - 2);
    }

    #[test]
    fn test_set_x_on_board_narrower_than_piece() {
        let mut piece = Piece::spawn(PieceKind::I, 2);
        // floor(2/2) - floor(4/2) = -1; clamp lands on 0
        assert_eq!(piece.x(), -1);
        assert!(piece.set_x(5.0, 2));
        assert_eq!(piece.x(), 0);
    }
}
