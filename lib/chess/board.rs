use crate::chess::{Color, File, ParsePieceError, Piece, Rank, Role, Square};
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};
use std::{ops::Index, str::FromStr};

/// The arrangement of pieces on the chess board.
///
/// `Board` is an immutable value; [`Board::move_piece`] returns the resulting
/// board and leaves the receiver untouched.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Board([[Option<Piece>; 8]; 8]);

impl Default for Board {
    fn default() -> Self {
        use {Color::*, Role::*};

        const BACK: [Role; 8] = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];

        let mut squares = [[None; 8]; 8];
        for (file, &role) in BACK.iter().enumerate() {
            squares[Rank::First.get() as usize][file] = Some(Piece(White, role));
            squares[Rank::Second.get() as usize][file] = Some(Piece(White, Pawn));
            squares[Rank::Seventh.get() as usize][file] = Some(Piece(Black, Pawn));
            squares[Rank::Eighth.get() as usize][file] = Some(Piece(Black, role));
        }

        Board(squares)
    }
}

impl Board {
    /// The [`Piece`] on the given [`Square`], if any.
    #[inline(always)]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self[sq]
    }

    /// The [`Square`] occupied by the king of a [`Color`], if any.
    #[inline(always)]
    pub fn king(&self, side: Color) -> Option<Square> {
        let king = Piece(side, Role::King);
        self.iter().find(|&(p, _)| p == king).map(|(_, sq)| sq)
    }

    /// An iterator over all pieces on the board and their squares.
    #[inline(always)]
    pub fn iter(&self) -> impl Iterator<Item = (Piece, Square)> + '_ {
        self.squares().filter_map(|(sq, p)| Some((p?, sq)))
    }

    /// An iterator over every square in visual layout order, rank `8` first
    /// and file `a` first within each rank.
    #[inline(always)]
    pub fn squares(&self) -> impl Iterator<Item = (Square, Option<Piece>)> + '_ {
        Rank::ALL.iter().rev().flat_map(move |&r| {
            File::ALL.iter().map(move |&f| {
                let sq = Square::new(f, r);
                (sq, self[sq])
            })
        })
    }

    /// Relocates whatever occupies `whence` to `whither`, returning the
    /// resulting board.
    ///
    /// No legality checking happens at this layer; a piece previously on
    /// `whither` is discarded. Legality is the caller's responsibility.
    pub fn move_piece(&self, whence: Square, whither: Square) -> Self {
        let piece = self[whence];
        let mut next = *self;
        *next.slot(whence) = None;
        *next.slot(whither) = piece;
        next
    }

    #[inline(always)]
    fn slot(&mut self, sq: Square) -> &mut Option<Piece> {
        &mut self.0[sq.rank().get() as usize][sq.file().get() as usize]
    }
}

/// Retrieves the [`Piece`] on a given [`Square`], if any.
impl Index<Square> for Board {
    type Output = Option<Piece>;

    #[inline(always)]
    fn index(&self, sq: Square) -> &Self::Output {
        &self.0[sq.rank().get() as usize][sq.file().get() as usize]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &r) in Rank::ALL.iter().rev().enumerate() {
            if i > 0 {
                f.write_char('\n')?;
            }

            for (j, &fl) in File::ALL.iter().enumerate() {
                if j > 0 {
                    f.write_char(' ')?;
                }

                match self[Square::new(fl, r)] {
                    Some(p) => write!(f, "{p}")?,
                    None => f.write_str("  ")?,
                }
            }
        }

        Ok(())
    }
}

/// The reason why parsing the board layout failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
pub enum ParseBoardError {
    #[display("expected 8 rows of squares")]
    InvalidRowCount,
    #[display("expected 8 space-separated cells per row")]
    InvalidRowShape,
    #[display("failed to parse square contents")]
    InvalidCell(ParsePieceError),
}

/// Parses the 8-row textual layout, rank `8` first, each row holding 8
/// two-character cells separated by single spaces. A cell is either a piece
/// code such as `Wp` or two spaces for an empty square.
impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<_> = s.lines().collect();
        let rows @ [_, _, _, _, _, _, _, _] = &rows[..] else {
            return Err(ParseBoardError::InvalidRowCount);
        };

        let mut squares = [[None; 8]; 8];
        for (i, row) in rows.iter().enumerate() {
            let rank = 7 - i;

            let cells = row.as_bytes();
            if !row.is_ascii()
                || cells.len() != 23
                || !cells.iter().skip(2).step_by(3).all(|&b| b == b' ')
            {
                return Err(ParseBoardError::InvalidRowShape);
            }

            for file in 0..8 {
                squares[rank][file] = match &row[file * 3..file * 3 + 2] {
                    "  " => None,
                    cell => Some(cell.parse()?),
                };
            }
        }

        Ok(Board(squares))
    }
}
