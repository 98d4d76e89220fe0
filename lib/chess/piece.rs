use crate::chess::{Color, ParseRoleError, Role};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Formatter, Write};
use std::str::FromStr;

/// A chess [piece][`Role`] of a certain [`Color`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Piece(pub Color, pub Role);

impl Piece {
    /// This piece's [`Color`].
    #[inline(always)]
    pub fn color(&self) -> Color {
        self.0
    }

    /// This piece's [`Role`].
    #[inline(always)]
    pub fn role(&self) -> Role {
        self.1
    }

    /// Mirrors this piece's [`Color`].
    #[inline(always)]
    pub fn flip(&self) -> Self {
        Piece(!self.0, self.1)
    }
}

/// Displays as the two-letter cell code of the board layout format, e.g. `Wp`.
impl fmt::Display for Piece {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_char(self.color().code())?;
        fmt::Display::fmt(&self.role(), f)
    }
}

/// The reason why parsing [`Piece`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display("failed to parse piece")]
pub struct ParsePieceError;

impl From<ParseRoleError> for ParsePieceError {
    fn from(_: ParseRoleError) -> Self {
        ParsePieceError
    }
}

impl FromStr for Piece {
    type Err = ParsePieceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();

        let color = match chars.next() {
            Some('W') => Color::White,
            Some('B') => Color::Black,
            _ => return Err(ParsePieceError),
        };

        Ok(Piece(color, chars.as_str().parse()?))
    }
}
