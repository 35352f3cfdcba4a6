use serde::Serialize;

use crate::piece::Piece;

/// Everything a renderer needs to paint one piece and its ghost
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PieceSnapshot {
    pub name: &'static str,
    pub color: &'static str,
    pub x: i32,
    pub y: i32,
    pub ghost_y: i32,
    pub rows: Vec<Vec<u8>>,
}

impl PieceSnapshot {
    pub fn capture(piece: &Piece, board_height: i32) -> Self {
        Self {
            name: piece.name(),
            color: piece.color(),
            x: piece.x(),
            y: piece.y(),
            ghost_y: piece.ghost_y(board_height),
            rows: piece.shape().to_rows(),
        }
    }
}

impl Piece {
    /// Capture a render snapshot of this piece
    pub fn snapshot(&self, board_height: i32) -> PieceSnapshot {
        PieceSnapshot::capture(self, board_height)
    }
}
