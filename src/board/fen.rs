use thiserror::Error;

use super::{Board, Game};
use crate::core::*;

/******************************************\
|==========================================|
|            Useful fen strings            |
|==========================================|
\******************************************/

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub const START_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/******************************************\
|==========================================|
|               Write Fen                  |
|==========================================|
\******************************************/

impl Board {
    /// The piece placement field: rank 8 down to rank 1, file a to h, runs of empty squares as digits
    pub fn placement(&self) -> String {
        let mut fen = String::new();

        for rank in Rank::iter().rev() {
            let mut empty_count = 0;
            for file in File::iter() {
                match self.get(Square::from_parts(file, rank)) {
                    Some(piece) => {
                        if empty_count > 0 {
                            fen.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        fen.push(piece.fen_char());
                    }
                    None => {
                        empty_count += 1;
                    }
                }
            }
            if empty_count > 0 {
                fen.push_str(&empty_count.to_string());
            }
            if rank != Rank::Rank1 {
                fen.push('/');
            }
        }

        fen
    }

    /// Castling rights read off the grid alone: a king and a rook standing on their home squares
    pub fn castling_rights(&self) -> Castling {
        let mut rights = Castling::NONE;

        for colour in Colour::iter() {
            if self.get(colour.king_home()) != Some(Piece::from_parts(colour, PieceType::King)) {
                continue;
            }
            for side in CastleSide::ALL {
                let rook = Piece::from_parts(colour, PieceType::Rook);
                if self.get(side.rook_home(colour)) == Some(rook) {
                    rights.set(Castling::for_side(colour, side));
                }
            }
        }

        rights
    }

    /// Full FEN for the placement with `active` to move.
    ///
    /// With no history there is no en passant target, the half-move clock is 0 and the full-move
    /// number is 1.
    ///
    /// ## Examples
    ///
    /// ```
    /// use sanboard::{Board, core::{Colour, Piece, Square}};
    ///
    /// let mut board = Board::new();
    /// board.place(Square::E1, Piece::WhiteKing);
    /// board.place(Square::E8, Piece::BlackKing);
    /// assert_eq!(board.to_fen(Colour::White), "4k3/8/8/8/8/8/8/4K3 w - - 0 1");
    /// ```
    pub fn to_fen(&self, active: Colour) -> String {
        format!(
            "{} {} {} - 0 1",
            self.placement(),
            active_char(active),
            self.castling_rights()
        )
    }
}

impl Game {
    /// Full FEN for the current position, every derived field computed from the history
    pub fn to_fen(&self) -> String {
        format!(
            "{} {} {} {} {} {}",
            self.board.placement(),
            active_char(self.stm()),
            self.castling(),
            match self.history.en_passant_target() {
                Some(square) => square.to_string(),
                None => "-".to_string(),
            },
            self.history.halfmove_clock(),
            self.history.fullmove_number()
        )
    }
}

const fn active_char(colour: Colour) -> char {
    match colour {
        Colour::White => 'w',
        Colour::Black => 'b',
    }
}

/******************************************\
|==========================================|
|             Parse Placement              |
|==========================================|
\******************************************/

impl Board {
    /// Builds a board from a FEN piece placement field, the form a board snapshot arrives in.
    ///
    /// Only the first whitespace separated field is read, so a complete FEN string is accepted too;
    /// its remaining fields are ignored.
    ///
    /// ## Examples
    ///
    /// ```
    /// use sanboard::{Board, core::{Colour, Piece, Square}};
    ///
    /// let board = Board::from_placement("4k3/8/8/8/8/8/8/R3K3").unwrap();
    /// assert_eq!(board.get(Square::A1), Some(Piece::WhiteRook));
    /// assert_eq!(board.to_fen(Colour::Black), "4k3/8/8/8/8/8/8/R3K3 b Q - 0 1");
    /// ```
    pub fn from_placement(placement: &str) -> Result<Board, FenParseError> {
        let field = placement
            .split_whitespace()
            .next()
            .ok_or(FenParseError::EmptyPlacement)?;

        let rows: Vec<&str> = field.split('/').collect();
        if rows.len() != Rank::NUM {
            return Err(FenParseError::RankCount(rows.len()));
        }

        let mut board = Board::new();
        for (row, rank) in rows.into_iter().zip(Rank::iter().rev()) {
            board.fill_rank(row, rank)?;
        }
        Ok(board)
    }

    /// Writes one placement row onto `rank`, file a first
    fn fill_rank(&mut self, row: &str, rank: Rank) -> Result<(), FenParseError> {
        let mut files = 0;

        for c in row.chars() {
            if let Some(run) = c.to_digit(10).filter(|run| (1..=8).contains(run)) {
                files += run as usize;
            } else {
                let piece = c
                    .encode_utf8(&mut [0; 4])
                    .parse::<Piece>()
                    .map_err(|_| FenParseError::InvalidPiecePlacementChar(c))?;
                let Some(file) = File::try_from_index(files as u8) else {
                    return Err(FenParseError::RankWidth { rank, files: files + 1 });
                };
                self.place(Square::from_parts(file, rank), piece);
                files += 1;
            }

            if files > File::NUM {
                return Err(FenParseError::RankWidth { rank, files });
            }
        }

        if files != File::NUM {
            return Err(FenParseError::RankWidth { rank, files });
        }
        Ok(())
    }
}

/******************************************\
|==========================================|
|             Fen Parse Errors             |
|==========================================|
\******************************************/

/// Errors raised while reading a FEN piece placement field
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FenParseError {
    /// The input held no placement field at all
    #[error("Empty piece placement field")]
    EmptyPlacement,

    /// A character other than a piece letter, a digit 1-8 or '/' appeared in the placement field
    #[error("Invalid character in piece placement field: '{0}'")]
    InvalidPiecePlacementChar(char),

    /// The field was not split into exactly 8 ranks
    #[error("Piece placement describes {0} ranks, expected 8")]
    RankCount(usize),

    /// A rank described more or fewer than 8 files
    #[error("Rank {rank} describes {files} files, expected 8")]
    RankWidth { rank: Rank, files: usize },
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
