use super::MAX_MOVES;
use crate::core::*;

/// The append-only list of moves applied to a game.
///
/// Every derived position field (side to move, castling loss, en passant target, both move
/// counters) is computed from this list rather than stored separately, so it can never drift
/// from the moves actually played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveHistory {
    moves: Vec<MoveRecord>,
}

impl Default for MoveHistory {
    fn default() -> Self {
        Self {
            moves: Vec::with_capacity(MAX_MOVES),
        }
    }
}

impl MoveHistory {
    /// Appends a record and returns a reference to the stored copy
    #[inline]
    pub(crate) fn push(&mut self, record: MoveRecord) -> &MoveRecord {
        self.moves.push(record);
        &self.moves[self.moves.len() - 1]
    }

    /// Number of plies played
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// The most recently applied move
    #[inline]
    pub fn last(&self) -> Option<&MoveRecord> {
        self.moves.last()
    }

    /// The move at ply `index`, counting from zero
    #[inline]
    pub fn get(&self, index: usize) -> Option<&MoveRecord> {
        self.moves.get(index)
    }

    /// Iterates the moves oldest first
    #[inline]
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &MoveRecord> {
        self.moves.iter()
    }

    /// Side to move, from the parity of the number of plies played
    #[inline]
    pub fn stm(&self) -> Colour {
        if self.moves.len() % 2 == 0 {
            Colour::White
        } else {
            Colour::Black
        }
    }

    /// True when any applied move started on `square`
    pub fn ever_moved_from(&self, square: Square) -> bool {
        self.moves.iter().any(|record| record.from() == square)
    }

    /// The square passed over by the last move when that move was a two-rank pawn advance
    pub fn en_passant_target(&self) -> Option<Square> {
        let last = self.last().filter(|record| record.is_double_push())?;
        last.from().offset(0, last.colour().forward())
    }

    /// Plies since the most recent capture or pawn move
    pub fn halfmove_clock(&self) -> usize {
        self.moves
            .iter()
            .rev()
            .take_while(|record| !record.resets_clock())
            .count()
    }

    /// Starts at 1 and increments after each Black move
    pub fn fullmove_number(&self) -> usize {
        self.moves.len() / 2 + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(piece: Piece, from: Square, to: Square, captured: Option<Piece>) -> MoveRecord {
        MoveRecord::new(piece, from, to, captured, MoveTag::Plain)
    }

    #[test]
    fn test_empty_history() {
        let history = MoveHistory::default();
        assert!(history.is_empty());
        assert_eq!(history.stm(), Colour::White);
        assert_eq!(history.en_passant_target(), None);
        assert_eq!(history.halfmove_clock(), 0);
        assert_eq!(history.fullmove_number(), 1);
    }

    #[test]
    fn test_en_passant_target_follows_last_move() {
        let mut history = MoveHistory::default();
        history.push(record(Piece::WhitePawn, Square::E2, Square::E4, None));
        assert_eq!(history.en_passant_target(), Some(Square::E3));

        history.push(record(Piece::BlackPawn, Square::D7, Square::D5, None));
        assert_eq!(history.en_passant_target(), Some(Square::D6));

        history.push(record(Piece::WhiteKnight, Square::G1, Square::F3, None));
        assert_eq!(history.en_passant_target(), None);

        history.push(record(Piece::BlackPawn, Square::H7, Square::H6, None));
        assert_eq!(history.en_passant_target(), None);
    }

    #[test]
    fn test_counters() {
        let mut history = MoveHistory::default();
        history.push(record(Piece::WhitePawn, Square::E2, Square::E4, None));
        history.push(record(Piece::BlackKnight, Square::G8, Square::F6, None));
        history.push(record(Piece::WhiteKnight, Square::G1, Square::F3, None));
        assert_eq!(history.halfmove_clock(), 2);
        assert_eq!(history.fullmove_number(), 2);
        assert_eq!(history.stm(), Colour::Black);

        history.push(record(
            Piece::BlackKnight,
            Square::F6,
            Square::E4,
            Some(Piece::WhitePawn),
        ));
        assert_eq!(history.halfmove_clock(), 0);
        assert_eq!(history.fullmove_number(), 3);
        assert_eq!(history.len(), 4);
    }

    #[test]
    fn test_ever_moved_from() {
        let mut history = MoveHistory::default();
        let stored = *history.push(record(Piece::WhiteRook, Square::H1, Square::G1, None));
        assert_eq!(history.get(0), Some(&stored));
        history.push(record(Piece::BlackPawn, Square::A7, Square::A6, None));
        history.push(record(Piece::WhiteRook, Square::G1, Square::H1, None));

        assert!(history.ever_moved_from(Square::H1));
        assert!(history.ever_moved_from(Square::G1));
        assert!(!history.ever_moved_from(Square::E1));
        assert_eq!(history.iter().count(), 3);
    }
}
