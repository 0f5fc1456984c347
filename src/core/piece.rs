use thiserror::Error;

use crate::core::Colour;

/******************************************\
|==========================================|
|                  Piece                   |
|==========================================|
\******************************************/

/// # Piece representation
///
/// - Represents the different chess pieces, an immutable pairing of colour and piece type

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Piece {
    WhitePawn, BlackPawn, WhiteKnight, BlackKnight, WhiteBishop, BlackBishop, WhiteRook, BlackRook, WhiteQueen, BlackQueen, WhiteKing, BlackKing
}

impl Piece {
    /// Number of elements in the Piece enum
    pub const NUM: usize = 12;
}

crate::impl_from_to_primitive!(Piece);

/******************************************\
|==========================================|
|                Piece Type                |
|==========================================|
\******************************************/

/// # Piece Type representation
///
/// - Represents the different chess piece types

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceType {
   Pawn, Knight, Bishop, Rook, Queen, King,
}

impl PieceType {
    /// Number of elements in the PieceType enum
    pub const NUM: usize = 6;
}

crate::impl_from_to_primitive!(PieceType);

/******************************************\
|==========================================|
|              Implementation              |
|==========================================|
\******************************************/

impl Piece {
    /// Returns the piece type of the piece
    pub const fn pt(self) -> PieceType {
        unsafe { PieceType::from_unchecked(self as u8 >> 1) }
    }

    /// Returns the colour of the piece
    pub const fn colour(self) -> Colour {
        unsafe { Colour::from_unchecked(self as u8 & 1) }
    }

    /// Combines a colour and piece type pair to create a piece
    ///
    /// ## Examples
    ///
    /// ```
    /// use sanboard::core::{Piece, Colour, PieceType};
    ///
    /// assert_eq!(Piece::from_parts(Colour::White, PieceType::Pawn), Piece::WhitePawn);
    /// assert_eq!(Piece::from_parts(Colour::Black, PieceType::King), Piece::BlackKing);
    /// ```
    pub const fn from_parts(colour: Colour, piece_type: PieceType) -> Self {
        unsafe { Piece::from_unchecked(colour as u8 | (piece_type as u8) << 1) }
    }

    /// The FEN letter for the piece, uppercase for White and lowercase for Black
    pub const fn fen_char(self) -> char {
        PIECE_STR.as_bytes()[self as usize] as char
    }
}

impl PieceType {
    /// Parses the uppercase piece letter used in move tokens (`P`, `N`, `B`, `R`, `Q`, `K`)
    ///
    /// ## Examples
    ///
    /// ```
    /// use sanboard::core::PieceType;
    ///
    /// assert_eq!(PieceType::from_san_letter('N'), Some(PieceType::Knight));
    /// assert_eq!(PieceType::from_san_letter('n'), None);
    /// ```
    pub const fn from_san_letter(c: char) -> Option<Self> {
        match c {
            'P' => Some(PieceType::Pawn),
            'N' => Some(PieceType::Knight),
            'B' => Some(PieceType::Bishop),
            'R' => Some(PieceType::Rook),
            'Q' => Some(PieceType::Queen),
            'K' => Some(PieceType::King),
            _ => None,
        }
    }
}

/******************************************\
|==========================================|
|                 Display                  |
|==========================================|
\******************************************/

/// String to convert from piece/piece type to their string representation
const PIECE_STR: &str = "PpNnBbRrQqKk";

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.fen_char())
    }
}

impl std::fmt::Display for PieceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let piece_char = PIECE_STR.as_bytes()[self.index() << 1].to_ascii_lowercase() as char;
        write!(f, "{}", piece_char)
    }
}

/******************************************\
|==========================================|
|                Parse Piece               |
|==========================================|
\******************************************/

impl std::str::FromStr for Piece {
    type Err = ParsePieceError;

    /// Parse the FEN piece character into a piece, with error checkings
    ///
    /// ## Examples
    ///
    /// ```
    /// use sanboard::core::{Piece, ParsePieceError};
    /// use std::str::FromStr;
    ///
    /// assert_eq!(Piece::from_str("P").unwrap(), Piece::WhitePawn);
    /// assert_eq!("k".parse::<Piece>().unwrap(), Piece::BlackKing);
    /// assert!(matches!("X".parse::<Piece>(), Err(ParsePieceError::InvalidChar('X'))));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(piece_char), None) = (chars.next(), chars.next()) else {
            return Err(ParsePieceError::InvalidLength(s.chars().count()));
        };

        let index = PIECE_STR
            .chars()
            .position(|c| c == piece_char)
            .ok_or(ParsePieceError::InvalidChar(piece_char))? as u8;

        unsafe { Ok(Piece::from_unchecked(index)) }
    }
}

/******************************************\
|==========================================|
|            Piece Parse Error             |
|==========================================|
\******************************************/

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParsePieceError {
    #[error("Invalid length for piece string: {0}, expected 1")]
    InvalidLength(usize),
    #[error("Invalid character for piece string: '{0}', expected one of 'PNBRQKpnbrqk'")]
    InvalidChar(char),
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_parts_round_trip() {
        for piece in (0..Piece::NUM as u8).filter_map(Piece::try_from_index) {
            assert_eq!(Piece::from_parts(piece.colour(), piece.pt()), piece);
        }
    }

    #[test]
    fn test_piece_type_extraction() {
        assert_eq!(Piece::WhitePawn.pt(), PieceType::Pawn);
        assert_eq!(Piece::BlackKnight.pt(), PieceType::Knight);
        assert_eq!(Piece::WhiteBishop.pt(), PieceType::Bishop);
        assert_eq!(Piece::BlackRook.pt(), PieceType::Rook);
        assert_eq!(Piece::WhiteQueen.pt(), PieceType::Queen);
        assert_eq!(Piece::BlackKing.pt(), PieceType::King);
        assert_eq!(Piece::BlackPawn.colour(), Colour::Black);
        assert_eq!(Piece::WhiteKing.colour(), Colour::White);
    }

    #[test]
    fn test_fen_chars() {
        assert_eq!(Piece::WhitePawn.fen_char(), 'P');
        assert_eq!(Piece::BlackPawn.fen_char(), 'p');
        assert_eq!(Piece::WhiteKnight.to_string(), "N");
        assert_eq!(Piece::BlackQueen.to_string(), "q");
        assert_eq!(Piece::BlackKing.to_string(), "k");
        assert_eq!(PieceType::Rook.to_string(), "r");
    }

    #[test]
    fn test_piece_from_str() {
        assert_eq!("N".parse::<Piece>(), Ok(Piece::WhiteKnight));
        assert_eq!("b".parse::<Piece>(), Ok(Piece::BlackBishop));
        assert_eq!("x".parse::<Piece>(), Err(ParsePieceError::InvalidChar('x')));
        assert_eq!("".parse::<Piece>(), Err(ParsePieceError::InvalidLength(0)));
        assert_eq!("Kq".parse::<Piece>(), Err(ParsePieceError::InvalidLength(2)));
    }

    #[test]
    fn test_san_letters() {
        for pt in (0..PieceType::NUM as u8).filter_map(PieceType::try_from_index) {
            let letter = pt.to_string().to_ascii_uppercase();
            let c = letter.chars().next().unwrap();
            assert_eq!(PieceType::from_san_letter(c), Some(pt));
        }
        assert_eq!(PieceType::from_san_letter('O'), None);
        assert_eq!(PieceType::from_san_letter('b'), None);
    }
}
