pub mod fen;
pub mod game;
pub mod history;
pub mod movement;
pub mod rules;
pub mod san;

pub use fen::{FenParseError, START_FEN, START_PLACEMENT};
pub use game::{Game, MoveError, ReplayError};
pub use history::MoveHistory;
pub use san::{SanModifier, SanMove, SanParseError, move_tokens};

use crate::core::*;

/******************************************\
|==========================================|
|                Constants                 |
|==========================================|
\******************************************/

/// Initial capacity reserved for a game's move history
pub const MAX_MOVES: usize = 256;

/// Piece types along the back rank in the standard starting arrangement, file a to file h
const BACK_RANK: [PieceType; File::NUM] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/******************************************\
|==========================================|
|                  Board                   |
|==========================================|
\******************************************/

/// # Board
///
/// An 8x8 grid of optional pieces with no move history. This is the placement-mode builder: pieces
/// are written and cleared unconditionally, and the FEN it produces infers castling rights purely
/// from where kings and rooks stand.
///
/// [`Board::start_game`] turns the board into a tracked [`Game`] at the standard starting position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    board: [Option<Piece>; Square::NUM],
}

/******************************************\
|==========================================|
|           Basic Implementation           |
|==========================================|
\******************************************/

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

impl Board {
    /// Creates an empty board
    pub const fn new() -> Board {
        Board {
            board: [None; Square::NUM],
        }
    }

    /// Creates a board holding the standard starting arrangement
    pub fn standard() -> Board {
        let mut board = Board::new();
        board.set_standard();
        board
    }

    /// Clears the grid and writes the standard 32 piece starting arrangement
    fn set_standard(&mut self) {
        self.board = [None; Square::NUM];
        for colour in Colour::iter() {
            for (file, pt) in File::iter().zip(BACK_RANK) {
                self.place(
                    Square::from_parts(file, colour.back_rank()),
                    Piece::from_parts(colour, pt),
                );
                self.place(
                    Square::from_parts(file, colour.pawn_rank()),
                    Piece::from_parts(colour, PieceType::Pawn),
                );
            }
        }
    }

    /// Returns the piece on the square, if any
    #[inline]
    pub const fn get(&self, square: Square) -> Option<Piece> {
        self.board[square.index()]
    }

    /// Writes a piece to the square, replacing whatever stood there
    #[inline]
    pub fn place(&mut self, square: Square, piece: Piece) {
        self.board[square.index()] = Some(piece);
    }

    /// Empties the square, returning the piece that stood there
    #[inline]
    pub fn clear(&mut self, square: Square) -> Option<Piece> {
        self.board[square.index()].take()
    }

    /// Iterates the squares currently holding `piece`, a1 first
    pub fn squares_of(&self, piece: Piece) -> impl Iterator<Item = Square> + '_ {
        Square::iter().filter(move |&sq| self.get(sq) == Some(piece))
    }

    /// Consumes the board and starts a tracked game from it.
    ///
    /// Whatever was placed is discarded: the grid is rewritten with the standard starting
    /// arrangement and the game begins with an empty history.
    pub fn start_game(mut self) -> Game {
        self.set_standard();
        Game::from_board(self)
    }

    /// Lifts the piece off `square`.
    ///
    /// # Panics
    ///
    /// Panics if the square is empty. Moves are fully validated before any write, so an empty
    /// square here means the engine itself is broken.
    #[inline]
    pub(crate) fn take(&mut self, square: Square) -> Piece {
        match self.clear(square) {
            Some(piece) => piece,
            None => panic!("take: no piece on {square} during move application"),
        }
    }

    /// Moves the piece on `from` to `to`, overwriting any occupant of `to`
    #[inline]
    pub(crate) fn relocate(&mut self, from: Square, to: Square) {
        let piece = self.take(from);
        self.place(to, piece);
    }

    /// True when every square strictly between `from` and `to` is empty.
    ///
    /// The squares must share a rank, a file or a diagonal.
    pub(crate) fn path_clear(&self, from: Square, to: Square) -> bool {
        let (df, dr) = from.delta(to);
        debug_assert!(
            df == 0 || dr == 0 || df.abs() == dr.abs(),
            "path_clear: {from} and {to} are not aligned"
        );

        let (step_f, step_r) = (df.signum(), dr.signum());
        let steps = df.abs().max(dr.abs());

        (1..steps).all(|i| {
            from.offset(step_f * i, step_r * i)
                .is_some_and(|sq| self.get(sq).is_none())
        })
    }

    /// Writes the ASCII diagram shared by the board and game displays
    pub(crate) fn write_diagram(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const SEPARATOR: &str = "\n     +---+---+---+---+---+---+---+---+";

        writeln!(f, "{}", SEPARATOR)?;

        for rank in Rank::iter().rev() {
            write!(f, " {}   |", rank)?;

            for file in File::iter() {
                let cell = match self.get(Square::from_parts(file, rank)) {
                    Some(piece) => piece.fen_char(),
                    None => ' ',
                };
                write!(f, " {} |", cell)?;
            }

            writeln!(f, "{}", SEPARATOR)?;
        }

        writeln!(f)?;
        writeln!(f, "       A   B   C   D   E   F   G   H")?;
        writeln!(f)
    }
}

/******************************************\
|==========================================|
|                 Display                  |
|==========================================|
\******************************************/

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.write_diagram(f)?;
        writeln!(f, "Castling: {}", self.castling_rights())?;
        writeln!(f, "Fen: {}", self.to_fen(Colour::White))
    }
}
