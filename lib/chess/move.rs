use crate::chess::{Piece, Square};
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// A record of one played half-move.
///
/// Displays in [pure coordinate notation].
///
/// [pure coordinate notation]: https://www.chessprogramming.org/Algebraic_Chess_Notation#Pure_coordinate_notation
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display("{whence}{whither}")]
pub struct Move {
    whence: Square,
    whither: Square,
    piece: Piece,
    capture: Option<Piece>,
}

impl Move {
    /// Only [`Game::make_move`][`crate::chess::Game::make_move`] records moves.
    pub(crate) fn new(whence: Square, whither: Square, piece: Piece, capture: Option<Piece>) -> Self {
        Move {
            whence,
            whither,
            piece,
            capture,
        }
    }

    /// The source [`Square`].
    #[inline(always)]
    pub fn whence(&self) -> Square {
        self.whence
    }

    /// The destination [`Square`].
    #[inline(always)]
    pub fn whither(&self) -> Square {
        self.whither
    }

    /// The [`Piece`] moved.
    #[inline(always)]
    pub fn piece(&self) -> Piece {
        self.piece
    }

    /// The [`Piece`] captured, if any.
    #[inline(always)]
    pub fn capture(&self) -> Option<Piece> {
        self.capture
    }

    /// Whether this move captured a piece.
    #[inline(always)]
    pub fn is_capture(&self) -> bool {
        self.capture.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn move_displays_in_pure_coordinate_notation(m: Move) {
        assert_eq!(m.to_string(), format!("{}{}", m.whence(), m.whither()));
    }

    #[proptest]
    fn move_is_a_capture_iff_a_piece_was_captured(m: Move) {
        assert_eq!(m.is_capture(), m.capture().is_some());
    }
}
