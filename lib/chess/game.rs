use crate::chess::{movegen, Board, Color, Move, Outcome, Square};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

/// Represents an illegal move in a given position.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display("move `{_0}{_1}` is illegal in this position")]
pub struct IllegalMove(
    #[error(not(source))] pub Square,
    #[error(not(source))] pub Square,
);

/// A game of chess between two players.
///
/// `Game` is an immutable snapshot: [`Game::make_move`] returns the successor
/// state and leaves the receiver untouched, so a held reference is never
/// invalidated by a later move. Snapshots serialize for storage keyed by
/// [`Game::id`].
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Game {
    id: String,
    turn: Color,
    board: Board,
    moves: Vec<Move>,
}

impl Game {
    /// Starts a game from the standard opening position, with a freshly
    /// generated id and the white player to move.
    pub fn start() -> Self {
        Self::with_board(Uuid::new_v4().to_string(), Color::White, Board::default())
    }

    /// Resumes a game from an arbitrary position, with no recorded history.
    pub fn with_board(id: impl Into<String>, turn: Color, board: Board) -> Self {
        Game {
            id: id.into(),
            turn,
            board,
            moves: Vec::new(),
        }
    }

    /// This game's opaque identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The side to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// The current arrangement of pieces.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Every half-move played so far, in order.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Pseudo-legal destinations for the piece on `whence`.
    ///
    /// An empty square yields no candidates rather than an error; rejecting
    /// the selection of an empty square or of the opponent's pieces is the
    /// caller's policy.
    pub fn available_moves(&self, whence: Square) -> movegen::Moves {
        movegen::moves(&self.board, whence)
    }

    /// Whether the side to move is in check.
    ///
    /// True iff some opponent piece's pseudo-legal destinations include the
    /// square occupied by the current player's king. Positions without that
    /// king on the board are never in check.
    pub fn in_check(&self) -> bool {
        let Some(king) = self.board.king(self.turn) else {
            return false;
        };

        self.board
            .iter()
            .filter(|(p, _)| p.color() != self.turn)
            .any(|(_, sq)| movegen::moves(&self.board, sq).contains(&king))
    }

    /// Plays the piece on `whence` to `whither`, returning the successor game.
    ///
    /// Fails with [`IllegalMove`] unless `whither` is among
    /// [`Self::available_moves`]; the receiver is unchanged either way. On
    /// success the move is appended to the history and the turn flips.
    pub fn make_move(&self, whence: Square, whither: Square) -> Result<Game, IllegalMove> {
        let Some(piece) = self.board[whence] else {
            return Err(IllegalMove(whence, whither));
        };

        if !self.available_moves(whence).contains(&whither) {
            return Err(IllegalMove(whence, whither));
        }

        let m = Move::new(whence, whither, piece, self.board[whither]);
        debug!(game = %self.id, played = %m, "piece moved");

        let mut next = self.clone();
        next.board = self.board.move_piece(whence, whither);
        next.moves.push(m);
        next.turn = !self.turn;
        Ok(next)
    }

    /// The [`Outcome`] in case this position is final for the side to move.
    ///
    /// The position is final when no piece of the current player has any
    /// candidate move; checkmate if the player is also in check, stalemate
    /// otherwise. Terminality is recomputed on demand, never cached.
    pub fn outcome(&self) -> Option<Outcome> {
        if self.has_moves() {
            None
        } else if self.in_check() {
            Some(Outcome::Checkmate(!self.turn))
        } else {
            Some(Outcome::Stalemate)
        }
    }

    fn has_moves(&self) -> bool {
        self.board
            .iter()
            .filter(|(p, _)| p.color() == self.turn)
            .any(|(_, sq)| !movegen::moves(&self.board, sq).is_empty())
    }
}
