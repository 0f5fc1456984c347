//! Per-kind movement rules.
//!
//! Each rule looks only at the current grid plus, for en passant and castling, the game history.
//! None of them ask whether the mover's own king is left attacked.

use super::Game;
use crate::core::*;

/// What a piece moving from one square to another would do, when the move is allowed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Verdict {
    pub tag: MoveTag,

    /// Castles land on the g- or c-file even when the token named the rook's corner
    pub to: Square,

    pub captured: Option<Piece>,
}

impl Verdict {
    const fn new(tag: MoveTag, to: Square, captured: Option<Piece>) -> Self {
        Self { tag, to, captured }
    }
}

impl Game {
    /// Checks whether `piece` standing on `from` may move to `to`.
    pub(crate) fn verdict(&self, piece: Piece, from: Square, to: Square) -> Option<Verdict> {
        if from == to {
            return None;
        }

        let (df, dr) = from.delta(to);
        let colour = piece.colour();

        match piece.pt() {
            PieceType::Pawn => self.pawn_verdict(colour, from, to),
            PieceType::Knight => {
                let shape = (df.abs(), dr.abs());
                if shape != (1, 2) && shape != (2, 1) {
                    return None;
                }
                self.landing(colour, to)
            }
            PieceType::Bishop => self.slide(colour, from, to, false, true),
            PieceType::Rook => self.slide(colour, from, to, true, false),
            PieceType::Queen => self.slide(colour, from, to, true, true),
            PieceType::King => {
                if df.abs() <= 1 && dr.abs() <= 1 {
                    return self.landing(colour, to);
                }
                self.castle_verdict(colour, from, to)
            }
        }
    }

    /// Castling for the king of `colour` from `from` towards `to`.
    ///
    /// `to` may be two files from the king or the rook's own corner; both normalize to the
    /// castled king square.
    pub(crate) fn castle_verdict(&self, colour: Colour, from: Square, to: Square) -> Option<Verdict> {
        if from != colour.king_home() || to.rank() != from.rank() {
            return None;
        }

        let side = match to.file() {
            File::FileG | File::FileH => CastleSide::King,
            File::FileC | File::FileA => CastleSide::Queen,
            _ => return None,
        };

        if !self.castling().has(Castling::for_side(colour, side)) {
            return None;
        }

        let rank = from.rank();
        let path_empty = side
            .between_files()
            .iter()
            .all(|&file| self.get(Square::from_parts(file, rank)).is_none());
        if !path_empty {
            return None;
        }

        Some(Verdict::new(
            MoveTag::castle(side),
            Square::from_parts(side.king_to_file(), rank),
            None,
        ))
    }

    fn pawn_verdict(&self, colour: Colour, from: Square, to: Square) -> Option<Verdict> {
        let (df, dr) = from.delta(to);
        let forward = colour.forward();
        let promotes = to.rank() == colour.promotion_rank();
        let tag = if promotes {
            MoveTag::Promotion(PieceType::Queen)
        } else {
            MoveTag::Plain
        };

        match (df.abs(), dr) {
            (0, dr) if dr == forward => self
                .get(to)
                .is_none()
                .then_some(Verdict::new(tag, to, None)),

            (0, dr) if dr == 2 * forward => {
                let middle = from.offset(0, forward)?;
                let allowed = from.rank() == colour.pawn_rank()
                    && self.get(middle).is_none()
                    && self.get(to).is_none();
                allowed.then_some(Verdict::new(MoveTag::Plain, to, None))
            }

            (1, dr) if dr == forward => match self.get(to) {
                Some(victim) if victim.colour() != colour => {
                    Some(Verdict::new(tag, to, Some(victim)))
                }
                Some(_) => None,
                None => self.en_passant_verdict(colour, from, to),
            },

            _ => None,
        }
    }

    /// A diagonal pawn step onto an empty square, taking the pawn that just double-pushed past it
    fn en_passant_verdict(&self, colour: Colour, from: Square, to: Square) -> Option<Verdict> {
        let captured = Square::from_parts(to.file(), from.rank());
        let victim = Piece::from_parts(!colour, PieceType::Pawn);

        let last = self.history.last()?;
        let allowed = self.get(captured) == Some(victim)
            && last.piece() == victim
            && last.to() == captured
            && self.history.en_passant_target() == Some(to);

        allowed.then_some(Verdict::new(
            MoveTag::EnPassant { captured },
            to,
            Some(victim),
        ))
    }

    /// Rook-like and bishop-like travel along an unobstructed line
    fn slide(
        &self,
        colour: Colour,
        from: Square,
        to: Square,
        straight: bool,
        diagonal: bool,
    ) -> Option<Verdict> {
        let (df, dr) = from.delta(to);
        let on_line = (df == 0) != (dr == 0);
        let on_diagonal = df.abs() == dr.abs();

        if !((straight && on_line) || (diagonal && on_diagonal)) {
            return None;
        }
        if !self.board.path_clear(from, to) {
            return None;
        }
        self.landing(colour, to)
    }

    /// A plain move onto `to`, blocked only by a friendly piece
    fn landing(&self, colour: Colour, to: Square) -> Option<Verdict> {
        match self.get(to) {
            Some(occupant) if occupant.colour() == colour => None,
            occupant => Some(Verdict::new(MoveTag::Plain, to, occupant)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    fn game_with(pieces: &[(Square, Piece)]) -> Game {
        let mut board = Board::new();
        for &(sq, piece) in pieces {
            board.place(sq, piece);
        }
        Game::from_board(board)
    }

    #[test]
    fn test_knight_shape() {
        let game = Game::new();
        let knight = Piece::WhiteKnight;
        assert!(game.verdict(knight, Square::G1, Square::F3).is_some());
        assert!(game.verdict(knight, Square::G1, Square::H3).is_some());
        assert!(game.verdict(knight, Square::G1, Square::E2).is_none());
        assert!(game.verdict(knight, Square::G1, Square::G3).is_none());
    }

    #[test]
    fn test_sliders_need_clear_path() {
        let game = Game::new();
        assert!(game.verdict(Piece::WhiteBishop, Square::F1, Square::C4).is_none());
        assert!(game.verdict(Piece::WhiteRook, Square::A1, Square::A3).is_none());
        assert!(game.verdict(Piece::WhiteQueen, Square::D1, Square::D3).is_none());

        let open = game_with(&[
            (Square::D4, Piece::WhiteQueen),
            (Square::D7, Piece::BlackPawn),
            (Square::G7, Piece::WhitePawn),
        ]);
        let capture = open.verdict(Piece::WhiteQueen, Square::D4, Square::D7);
        assert_eq!(capture.and_then(|v| v.captured), Some(Piece::BlackPawn));
        assert!(open.verdict(Piece::WhiteQueen, Square::D4, Square::D8).is_none());
        assert!(open.verdict(Piece::WhiteQueen, Square::D4, Square::G7).is_none());
        assert!(open.verdict(Piece::WhiteQueen, Square::D4, Square::A7).is_some());
        assert!(open.verdict(Piece::WhiteQueen, Square::D4, Square::E6).is_none());
        assert!(open.verdict(Piece::WhiteRook, Square::D4, Square::A7).is_none());
        assert!(open.verdict(Piece::WhiteBishop, Square::D4, Square::D1).is_none());
    }

    #[test]
    fn test_pawn_pushes() {
        let game = Game::new();
        assert!(game.verdict(Piece::WhitePawn, Square::E2, Square::E3).is_some());
        assert!(game.verdict(Piece::WhitePawn, Square::E2, Square::E4).is_some());
        assert!(game.verdict(Piece::WhitePawn, Square::E2, Square::E5).is_none());
        assert!(game.verdict(Piece::WhitePawn, Square::E2, Square::E1).is_none());

        let blocked = game_with(&[
            (Square::C2, Piece::WhitePawn),
            (Square::C3, Piece::BlackKnight),
            (Square::F3, Piece::WhitePawn),
        ]);
        assert!(blocked.verdict(Piece::WhitePawn, Square::C2, Square::C3).is_none());
        assert!(blocked.verdict(Piece::WhitePawn, Square::C2, Square::C4).is_none());
        assert!(blocked.verdict(Piece::WhitePawn, Square::F3, Square::F5).is_none());
    }

    #[test]
    fn test_pawn_captures_only_diagonally_forward() {
        let game = game_with(&[
            (Square::D4, Piece::WhitePawn),
            (Square::E5, Piece::BlackPawn),
            (Square::C5, Piece::WhiteKnight),
            (Square::C3, Piece::BlackKnight),
        ]);
        let take = game.verdict(Piece::WhitePawn, Square::D4, Square::E5);
        assert_eq!(take.and_then(|v| v.captured), Some(Piece::BlackPawn));
        assert!(game.verdict(Piece::WhitePawn, Square::D4, Square::C5).is_none());
        assert!(game.verdict(Piece::WhitePawn, Square::D4, Square::C3).is_none());
        assert!(game.verdict(Piece::WhitePawn, Square::D4, Square::F6).is_none());
    }

    #[test]
    fn test_pawn_promotion_defaults_to_queen() {
        let game = game_with(&[(Square::B7, Piece::WhitePawn), (Square::A8, Piece::BlackRook)]);
        let push = game.verdict(Piece::WhitePawn, Square::B7, Square::B8);
        assert_eq!(
            push.map(|v| v.tag),
            Some(MoveTag::Promotion(PieceType::Queen))
        );
        let take = game.verdict(Piece::WhitePawn, Square::B7, Square::A8);
        assert_eq!(take.map(|v| v.tag), Some(MoveTag::Promotion(PieceType::Queen)));
    }

    #[test]
    fn test_king_steps_and_castle_shapes() {
        let game = game_with(&[
            (Square::E1, Piece::WhiteKing),
            (Square::H1, Piece::WhiteRook),
            (Square::A1, Piece::WhiteRook),
            (Square::B1, Piece::WhiteKnight),
        ]);
        assert!(game.verdict(Piece::WhiteKing, Square::E1, Square::F2).is_some());
        assert!(game.verdict(Piece::WhiteKing, Square::E1, Square::E3).is_none());

        let castle = game.verdict(Piece::WhiteKing, Square::E1, Square::H1);
        assert_eq!(
            castle,
            Some(Verdict::new(MoveTag::KingCastle, Square::G1, None))
        );
        assert_eq!(
            game.verdict(Piece::WhiteKing, Square::E1, Square::G1),
            castle
        );

        // Knight on b1 blocks the queen side
        assert!(game.verdict(Piece::WhiteKing, Square::E1, Square::C1).is_none());
        assert!(game.verdict(Piece::WhiteKing, Square::E1, Square::A1).is_none());
    }
}
