//! Core types module - shared data structures and constants
//!
//! This module defines the plain data shared by the geometry core and its
//! callers. Everything here is dependency-free so that an input layer or a
//! renderer can use it without pulling in the core.
//!
//! # Board Dimensions
//!
//! The board is described only by its width and height. Both are passed to
//! every geometry operation explicitly; the constants below are defaults for
//! callers that have no better idea.
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//!
//! # Examples
//!
//! ```
//! use touch_tetris_types::{PieceAction, PieceKind, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH};
//!
//! let kind = PieceKind::from_str("t").unwrap();
//! assert_eq!(kind, PieceKind::T);
//! assert_eq!(kind.name(), "T");
//!
//! let action = PieceAction::from_str("tap:7.5").unwrap();
//! assert_eq!(action, PieceAction::Tap(7.5));
//!
//! assert_eq!(DEFAULT_BOARD_WIDTH, 10);
//! assert_eq!(DEFAULT_BOARD_HEIGHT, 20);
//! ```

/// Default board width in cells (10 columns)
pub const DEFAULT_BOARD_WIDTH: i32 = 10;

/// Default board height in cells (20 rows)
pub const DEFAULT_BOARD_HEIGHT: i32 = 20;

/// The seven tetromino piece kinds
///
/// Each piece has a distinct shape and color:
/// - **I**: Cyan, horizontal bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Purple, T-shaped
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
/// - **L**: Orange, L-shaped
/// - **J**: Blue, J-shaped (mirror of L)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    L,
    J,
}

impl PieceKind {
    /// All kinds in template order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::L,
        PieceKind::J,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use touch_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "l" => Some(PieceKind::L),
            "j" => Some(PieceKind::J),
            _ => None,
        }
    }

    /// Display name of the template ("I", "O", ...)
    pub fn name(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::L => "L",
            PieceKind::J => "J",
        }
    }

    /// Display color as a CSS hex string
    pub fn color(&self) -> &'static str {
        match self {
            PieceKind::I => "#00f0f0",
            PieceKind::O => "#f0f000",
            PieceKind::T => "#a000f0",
            PieceKind::S => "#00f000",
            PieceKind::Z => "#f00000",
            PieceKind::L => "#f0a000",
            PieceKind::J => "#0000f0",
        }
    }

    /// Position in [`PieceKind::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Inputs a caller can feed to an active piece
///
/// `Tap` and `Drag` carry a horizontal coordinate in board-grid units. It is
/// fractional because touch positions rarely land on a cell boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PieceAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down
    SoftDrop,
    /// Teleport piece to its ghost row
    HardDrop,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Rotate piece 90° counter-clockwise
    RotateCcw,
    /// Rotate towards the side of the piece that was tapped
    Tap(f32),
    /// Drag piece horizontally, clamping at the walls
    Drag(f32),
}

impl PieceAction {
    /// Parse action from string
    ///
    /// Plain actions are matched case-insensitively; `tap` and `drag` take a
    /// coordinate after a colon.
    ///
    /// # Examples
    ///
    /// ```
    /// use touch_tetris_types::PieceAction;
    ///
    /// assert_eq!(PieceAction::from_str("moveLeft"), Some(PieceAction::MoveLeft));
    /// assert_eq!(PieceAction::from_str("DRAG:3"), Some(PieceAction::Drag(3.0)));
    /// assert_eq!(PieceAction::from_str("tap"), None);
    /// assert_eq!(PieceAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let lower = s.trim().to_lowercase();
        if let Some((name, arg)) = lower.split_once(':') {
            let x = arg.trim().parse::<f32>().ok().filter(|x| x.is_finite())?;
            return match name.trim() {
                "tap" => Some(PieceAction::Tap(x)),
                "drag" => Some(PieceAction::Drag(x)),
                _ => None,
            };
        }
        match lower.as_str() {
            "moveleft" => Some(PieceAction::MoveLeft),
            "moveright" => Some(PieceAction::MoveRight),
            "softdrop" => Some(PieceAction::SoftDrop),
            "harddrop" => Some(PieceAction::HardDrop),
            "rotatecw" => Some(PieceAction::RotateCw),
            "rotateccw" => Some(PieceAction::RotateCcw),
            _ => None,
        }
    }

    /// Action name without its argument
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceAction::MoveLeft => "moveLeft",
            PieceAction::MoveRight => "moveRight",
            PieceAction::SoftDrop => "softDrop",
            PieceAction::HardDrop => "hardDrop",
            PieceAction::RotateCw => "rotateCw",
            PieceAction::RotateCcw => "rotateCcw",
            PieceAction::Tap(_) => "tap",
            PieceAction::Drag(_) => "drag",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_parse_back() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_str(kind.name()), Some(kind));
        }
    }

    #[test]
    fn kind_index_matches_all_order() {
        for (i, kind) in PieceKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn plain_actions_parse_back() {
        for action in [
            PieceAction::MoveLeft,
            PieceAction::MoveRight,
            PieceAction::SoftDrop,
            PieceAction::HardDrop,
            PieceAction::RotateCw,
            PieceAction::RotateCcw,
        ] {
            assert_eq!(PieceAction::from_str(action.as_str()), Some(action));
        }
    }

    #[test]
    fn coordinate_actions_need_a_finite_number() {
        assert_eq!(PieceAction::from_str("tap:-1.5"), Some(PieceAction::Tap(-1.5)));
        assert_eq!(PieceAction::from_str(" drag : 4 "), Some(PieceAction::Drag(4.0)));
        assert_eq!(PieceAction::from_str("tap:"), None);
        assert_eq!(PieceAction::from_str("tap:abc"), None);
        assert_eq!(PieceAction::from_str("drag:NaN"), None);
        assert_eq!(PieceAction::from_str("moveLeft:1"), None);
    }
}
