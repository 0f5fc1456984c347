use thiserror::Error;

use super::{Board, MoveHistory, SanModifier, SanParseError};
use crate::core::*;

/******************************************\
|==========================================|
|                   Game                   |
|==========================================|
\******************************************/

/// # Game
///
/// A board plus the ordered history of every move applied to it. The history is the only source
/// of the side to move, castling loss, en passant target and both move counters.
///
/// ## Examples
///
/// ```
/// use sanboard::Game;
///
/// let mut game = Game::new();
/// assert!(game.apply_move("e4"));
/// assert!(!game.apply_move("e4"));
/// assert_eq!(
///     game.to_fen(),
///     "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub(super) board: Board,

    pub(super) history: MoveHistory,
}

impl Default for Game {
    fn default() -> Game {
        Game::new()
    }
}

impl Game {
    /// Creates a game at the standard starting position with no moves played
    pub fn new() -> Game {
        Game::from_board(Board::standard())
    }

    pub(super) fn from_board(board: Board) -> Game {
        Game {
            board,
            history: MoveHistory::default(),
        }
    }

    /// Returns the piece on the square, if any
    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.board.get(square)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// Side to move
    #[inline]
    pub fn stm(&self) -> Colour {
        self.history.stm()
    }

    /// Castling rights still available.
    ///
    /// A right needs the king and the rook on their home squares, and neither square may ever
    /// have been the origin of a move in this game.
    pub fn castling(&self) -> Castling {
        let mut rights = self.board.castling_rights();

        for colour in Colour::iter() {
            if self.history.ever_moved_from(colour.king_home()) {
                rights.remove(Castling::for_colour(colour));
                continue;
            }
            for side in CastleSide::ALL {
                if self.history.ever_moved_from(side.rook_home(colour)) {
                    rights.remove(Castling::for_side(colour, side));
                }
            }
        }

        rights
    }

    /// The last applied move in coordinate notation (`e2e4`, `e7e8q`), as a UCI engine expects
    pub fn last_move_uci(&self) -> Option<String> {
        self.history.last().map(MoveRecord::to_string)
    }
}

/******************************************\
|==========================================|
|                 Display                  |
|==========================================|
\******************************************/

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.board.write_diagram(f)?;
        writeln!(f, "Current Side: {:?}", self.stm())?;
        writeln!(f, "Castling: {}", self.castling())?;
        writeln!(
            f,
            "En Passant Square: {}",
            match self.history.en_passant_target() {
                Some(square) => square.to_string(),
                None => "None".to_string(),
            }
        )?;
        writeln!(f, "Half Move Clock: {}", self.history.halfmove_clock())?;
        writeln!(f, "Full Move: {}", self.history.fullmove_number())?;
        writeln!(
            f,
            "Last Move: {}",
            self.last_move_uci().unwrap_or_else(|| "None".to_string())
        )?;
        writeln!(f, "Fen: {}", self.to_fen())
    }
}

/******************************************\
|==========================================|
|               Move Errors                |
|==========================================|
\******************************************/

/// Why a move token was rejected. A rejected token never changes the game.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error(transparent)]
    Parse(#[from] SanParseError),

    #[error("No {piece} can move to {to}")]
    NoCandidate { piece: Piece, to: Square },

    #[error("{count} pieces of kind {piece} can move to {to}, the token must say which")]
    Ambiguous {
        piece: Piece,
        to: Square,
        count: usize,
    },

    #[error("{piece} on {from} cannot move to {to}")]
    Illegal {
        piece: Piece,
        from: Square,
        to: Square,
    },

    #[error("Expected {expected} on {square}, found {found:?}")]
    PieceMismatch {
        square: Square,
        expected: Piece,
        found: Option<Piece>,
    },

    #[error("Castling {0:?} side is not available")]
    CastlingUnavailable(CastleSide),

    #[error("Modifier {modifier:?} does not fit the move {from}{to}")]
    ModifierMismatch {
        modifier: SanModifier,
        from: Square,
        to: Square,
    },
}

/// The first token of a move list that could not be applied
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Move {ply} `{token}` rejected")]
pub struct ReplayError {
    /// One-based ply number of the rejected token
    pub ply: usize,

    pub token: String,

    #[source]
    pub source: MoveError,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let game = Game::new();
        assert_eq!(game, Game::default());
        assert_eq!(game.stm(), Colour::White);
        assert_eq!(game.castling(), Castling::ALL);
        assert!(game.history().is_empty());
        assert_eq!(game.last_move_uci(), None);
        assert_eq!(game.get(Square::D8), Some(Piece::BlackQueen));
        assert_eq!(game.board(), &Board::standard());
    }

    #[test]
    fn test_castling_lost_after_rook_returns() {
        let mut game = Game::new();
        for token in ["h4", "a5", "Rh3", "Ra6", "Rh1", "Ra8"] {
            assert!(game.apply_move(token), "{token} should apply");
        }
        assert_eq!(game.get(Square::H1), Some(Piece::WhiteRook));
        assert_eq!(game.get(Square::A8), Some(Piece::BlackRook));
        assert_eq!(game.castling(), Castling::WQ | Castling::BK);
    }

    #[test]
    fn test_castling_lost_after_king_returns() {
        let mut game = Game::new();
        for token in ["e4", "e5", "Ke2", "Ke7", "Ke1", "Ke8"] {
            assert!(game.apply_move(token), "{token} should apply");
        }
        assert_eq!(game.castling(), Castling::NONE);
    }

    #[test]
    fn test_custom_position_infers_castling() {
        let mut board = Board::new();
        board.place(Square::E1, Piece::WhiteKing);
        board.place(Square::A1, Piece::WhiteRook);
        board.place(Square::E8, Piece::BlackKing);
        board.place(Square::H8, Piece::BlackRook);

        let game = Game::from_board(board);
        assert_eq!(game.castling(), Castling::WQ | Castling::BK);
        assert_eq!(game.stm(), Colour::White);
    }

    #[test]
    fn test_display_lists_state() {
        let mut game = Game::new();
        assert!(game.apply_move("d4"));
        let shown = game.to_string();
        assert!(shown.contains("Current Side: Black"));
        assert!(shown.contains("En Passant Square: d3"));
        assert!(shown.contains("Last Move: d2d4"));
        assert!(shown.contains("Fen: rnbqkbnr/pppppppp/8/8/3P4/8/PPP1PPPP/RNBQKBNR b KQkq d3 0 1"));
    }
}
