//! Pseudo-legal move generation.
//!
//! Candidates follow each piece's movement pattern and board occupancy only;
//! they are not filtered for moves that would leave the mover's own king
//! attacked, and neither castling nor en passant is generated.

use crate::chess::{Board, Color, Rank, Role, Square};
use arrayvec::ArrayVec;

/// Candidate destinations for a single piece.
///
/// No piece has more than 27 pseudo-legal destinations on an 8×8 board.
pub type Moves = ArrayVec<Square, 27>;

const ORTHOGONALS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

#[rustfmt::skip]
const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (-2, -1), (-2, 1), (-1, -2), (-1, 2),
    (1, -2), (1, 2), (2, -1), (2, 1),
];

#[rustfmt::skip]
const KING_STEPS: [(i8, i8); 8] = [
    (-1, -1), (-1, 0), (-1, 1), (0, -1),
    (0, 1), (1, -1), (1, 0), (1, 1),
];

/// Computes the candidate destinations for the piece on `whence`.
///
/// An empty square yields no candidates. The order of the candidates is
/// unspecified; callers sort if they need determinism.
pub fn moves(board: &Board, whence: Square) -> Moves {
    let mut moves = Moves::new();

    let Some(piece) = board[whence] else {
        return moves;
    };

    let color = piece.color();
    match piece.role() {
        Role::Pawn => pawn(board, whence, color, &mut moves),
        Role::Knight => leaper(board, whence, color, &KNIGHT_JUMPS, &mut moves),
        Role::Bishop => slider(board, whence, color, &DIAGONALS, &mut moves),
        Role::Rook => slider(board, whence, color, &ORTHOGONALS, &mut moves),
        Role::King => leaper(board, whence, color, &KING_STEPS, &mut moves),

        Role::Queen => {
            slider(board, whence, color, &ORTHOGONALS, &mut moves);
            slider(board, whence, color, &DIAGONALS, &mut moves);
        }
    }

    moves
}

/// Pawns advance onto empty squares only and capture diagonally only.
///
/// The double step requires the pawn to still be on its starting rank and
/// both cells ahead to be empty; it is derived from the rank alone, not from
/// the move history.
fn pawn(board: &Board, whence: Square, color: Color, moves: &mut Moves) {
    let (dir, start) = match color {
        Color::White => (1, Rank::Second),
        Color::Black => (-1, Rank::Seventh),
    };

    if let Some(ahead) = whence.shift(0, dir) {
        if board[ahead].is_none() {
            moves.push(ahead);

            if whence.rank() == start {
                if let Some(ahead) = ahead.shift(0, dir) {
                    if board[ahead].is_none() {
                        moves.push(ahead);
                    }
                }
            }
        }
    }

    for df in [-1, 1] {
        if let Some(target) = whence.shift(df, dir) {
            if board[target].is_some_and(|p| p.color() != color) {
                moves.push(target);
            }
        }
    }
}

/// Knights and kings step to fixed offsets not occupied by a friendly piece.
fn leaper(board: &Board, whence: Square, color: Color, steps: &[(i8, i8)], moves: &mut Moves) {
    for &(df, dr) in steps {
        if let Some(target) = whence.shift(df, dr) {
            if !board[target].is_some_and(|p| p.color() == color) {
                moves.push(target);
            }
        }
    }
}

/// Sliding pieces walk each ray one square at a time: an empty square is a
/// candidate and the ray continues, an enemy square is a candidate and the
/// ray stops, a friendly square stops the ray without becoming a candidate.
fn slider(board: &Board, whence: Square, color: Color, rays: &[(i8, i8)], moves: &mut Moves) {
    for &(df, dr) in rays {
        let mut target = whence.shift(df, dr);

        while let Some(sq) = target {
            match board[sq] {
                None => {
                    moves.push(sq);
                    target = sq.shift(df, dr);
                }

                Some(p) => {
                    if p.color() != color {
                        moves.push(sq);
                    }

                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn empty_squares_generate_no_moves(b: Board, #[filter(#b[#sq].is_none())] sq: Square) {
        assert!(moves(&b, sq).is_empty());
    }

    #[proptest]
    fn candidates_never_land_on_friendly_pieces(b: Board, sq: Square) {
        if let Some(piece) = b[sq] {
            for m in moves(&b, sq) {
                assert_ne!(b[m].map(|p| p.color()), Some(piece.color()));
            }
        }
    }

    #[proptest]
    fn candidates_never_include_the_source_square(b: Board, sq: Square) {
        assert!(!moves(&b, sq).contains(&sq));
    }

    #[proptest]
    fn candidates_are_unique(b: Board, sq: Square) {
        let mut candidates: Vec<_> = moves(&b, sq).to_vec();
        candidates.sort();
        candidates.dedup();
        assert_eq!(candidates.len(), moves(&b, sq).len());
    }

    #[proptest]
    fn sliding_rays_stop_at_the_first_occupied_square(
        b: Board,
        #[filter(#b[#sq].is_some_and(|p| matches!(p.role(), Role::Bishop | Role::Rook | Role::Queen)))]
        sq: Square,
    ) {
        for m in moves(&b, sq) {
            let df = (m.file().get() - sq.file().get()).signum();
            let dr = (m.rank().get() - sq.rank().get()).signum();

            let mut cursor = sq.shift(df, dr);
            while let Some(between) = cursor {
                if between == m {
                    break;
                }

                assert_eq!(b[between], None);
                cursor = between.shift(df, dr);
            }
        }
    }

    #[proptest]
    fn knights_jump_in_an_l_shape(b: Board, #[filter(#b[#sq].is_some_and(|p| p.role() == Role::Knight))] sq: Square) {
        for m in moves(&b, sq) {
            let df = (m.file().get() - sq.file().get()).abs();
            let dr = (m.rank().get() - sq.rank().get()).abs();
            assert_eq!(df.min(dr), 1);
            assert_eq!(df.max(dr), 2);
        }
    }

    #[proptest]
    fn kings_step_to_adjacent_squares(b: Board, #[filter(#b[#sq].is_some_and(|p| p.role() == Role::King))] sq: Square) {
        for m in moves(&b, sq) {
            assert!((m.file().get() - sq.file().get()).abs() <= 1);
            assert!((m.rank().get() - sq.rank().get()).abs() <= 1);
        }
    }

    #[proptest]
    fn pawns_stay_on_their_file_unless_capturing(
        b: Board,
        #[filter(#b[#sq].is_some_and(|p| p.role() == Role::Pawn))] sq: Square,
    ) {
        for m in moves(&b, sq) {
            if m.file() == sq.file() {
                assert_eq!(b[m], None);
            } else {
                assert!(b[m].is_some());
            }
        }
    }
}
