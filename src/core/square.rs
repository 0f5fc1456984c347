use thiserror::Error;

/******************************************\
|==========================================|
|                 Squares                  |
|==========================================|
\******************************************/

/// # Square representation
///
/// - Represents the 64 resolved squares of a chess board, `A1` is index 0 and `H8` is index 63

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Square {
    A1, B1, C1, D1, E1, F1, G1, H1,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A8, B8, C8, D8, E8, F8, G8, H8,
}

impl Square {
    /// Number of elements in the Square enum
    pub const NUM: usize = 64;
}

crate::impl_from_to_primitive!(Square);
crate::impl_enum_iter!(Square);

/******************************************\
|==========================================|
|                  Ranks                   |
|==========================================|
\******************************************/

/// # Ranks representation
///
/// - Represents the ranks of a chess board

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub enum Rank {
    Rank1, Rank2, Rank3, Rank4, Rank5, Rank6, Rank7, Rank8,
}

impl Rank {
    /// Number of elements in the Rank enum
    pub const NUM: usize = 8;
}

crate::impl_from_to_primitive!(Rank);
crate::impl_enum_iter!(Rank);

/******************************************\
|==========================================|
|                  Files                   |
|==========================================|
\******************************************/

/// # Files representation
///
/// - Represents the files of a chess board

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub enum File {
    FileA, FileB, FileC, FileD, FileE, FileF, FileG, FileH,
}

impl File {
    /// Number of elements in the File enum
    pub const NUM: usize = 8;
}

crate::impl_from_to_primitive!(File);
crate::impl_enum_iter!(File);

/******************************************\
|==========================================|
|               Square Hint                |
|==========================================|
\******************************************/

/// # Square Hint
///
/// A square where either axis may be unknown. Move tokens such as `Nbd7` or `R1e2` only name part
/// of the source square, and a hint records exactly what was named.
///
/// Only a hint with both axes set can be turned into a [`Square`], so an unresolved coordinate can
/// never reach the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct SquareHint {
    pub file: Option<File>,
    pub rank: Option<Rank>,
}

/******************************************\
|==========================================|
|              Implementation              |
|==========================================|
\******************************************/

impl Square {
    /// Returns the rank of a square
    ///
    /// ## Examples
    ///
    /// ```
    /// use sanboard::core::{Square, Rank};
    ///
    /// assert_eq!(Square::A1.rank(), Rank::Rank1);
    /// assert_eq!(Square::E4.rank(), Rank::Rank4);
    /// assert_eq!(Square::H8.rank(), Rank::Rank8);
    /// ```
    pub const fn rank(&self) -> Rank {
        let rank_index = (*self as u8) >> 3;
        unsafe { Rank::from_unchecked(rank_index) }
    }

    /// Returns the file of a square
    ///
    /// ## Examples
    ///
    /// ```
    /// use sanboard::core::{Square, File};
    ///
    /// assert_eq!(Square::A1.file(), File::FileA);
    /// assert_eq!(Square::E4.file(), File::FileE);
    /// assert_eq!(Square::H8.file(), File::FileH);
    /// ```
    pub const fn file(&self) -> File {
        let file_index = (*self as u8) & 0b111;
        unsafe { File::from_unchecked(file_index) }
    }

    /// Combines a pair of file and rank to create a square
    ///
    /// ## Examples
    ///
    /// ```
    /// use sanboard::core::{Square, File, Rank};
    ///
    /// assert_eq!(Square::from_parts(File::FileA, Rank::Rank1), Square::A1);
    /// assert_eq!(Square::from_parts(File::FileE, Rank::Rank4), Square::E4);
    /// ```
    pub const fn from_parts(file: File, rank: Rank) -> Self {
        let index = ((rank as u8) << 3) + (file as u8);
        unsafe { Self::from_unchecked(index) }
    }

    /// Builds a square from raw zero-based file and rank coordinates, `None` when off the board
    ///
    /// ## Examples
    ///
    /// ```
    /// use sanboard::core::Square;
    ///
    /// assert_eq!(Square::from_coords(4, 3), Some(Square::E4));
    /// assert_eq!(Square::from_coords(8, 0), None);
    /// assert_eq!(Square::from_coords(0, -1), None);
    /// ```
    pub const fn from_coords(file: i8, rank: i8) -> Option<Self> {
        if file < 0 || file > 7 || rank < 0 || rank > 7 {
            return None;
        }
        Some(unsafe { Self::from_unchecked(((rank as u8) << 3) + file as u8) })
    }

    /// Returns the square `df` files and `dr` ranks away, `None` when that falls off the board
    pub const fn offset(&self, df: i8, dr: i8) -> Option<Self> {
        Self::from_coords(self.file() as i8 + df, self.rank() as i8 + dr)
    }

    /// Signed file and rank deltas travelling from `self` to `to`
    pub const fn delta(&self, to: Square) -> (i8, i8) {
        (
            to.file() as i8 - self.file() as i8,
            to.rank() as i8 - self.rank() as i8,
        )
    }
}

impl Rank {
    /// Parses a rank digit `'1'..='8'`
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '1'..='8' => Some(unsafe { Self::from_unchecked(c as u8 - b'1') }),
            _ => None,
        }
    }
}

impl File {
    /// Parses a lowercase file letter `'a'..='h'`
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'a'..='h' => Some(unsafe { Self::from_unchecked(c as u8 - b'a') }),
            _ => None,
        }
    }
}

impl SquareHint {
    pub const fn new(file: Option<File>, rank: Option<Rank>) -> Self {
        Self { file, rank }
    }

    /// True when both the file and the rank are known
    pub const fn is_resolved(&self) -> bool {
        self.file.is_some() && self.rank.is_some()
    }

    /// The square named by the hint, only when it is fully resolved
    pub const fn square(&self) -> Option<Square> {
        match (self.file, self.rank) {
            (Some(file), Some(rank)) => Some(Square::from_parts(file, rank)),
            _ => None,
        }
    }

    /// Whether `sq` agrees with every axis the hint names
    pub fn admits(&self, sq: Square) -> bool {
        self.file.is_none_or(|f| f == sq.file()) && self.rank.is_none_or(|r| r == sq.rank())
    }
}

impl From<Square> for SquareHint {
    fn from(sq: Square) -> Self {
        Self::new(Some(sq.file()), Some(sq.rank()))
    }
}

/******************************************\
|==========================================|
|                 Display                  |
|==========================================|
\******************************************/

impl std::fmt::Display for File {
    /// Displays the file in the form of its chess board representation (FileA => 'a')
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", (b'a' + (*self as u8)) as char)
    }
}

impl std::fmt::Display for Rank {
    /// Displays the rank in the form of its chess board representation (Rank1 => '1')
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", (b'1' + (*self as u8)) as char)
    }
}

impl std::fmt::Display for Square {
    /// Displays the square in the form of its chess board representation (Square::A1 => 'a1')
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

/******************************************\
|==========================================|
|              Parsing Strings             |
|==========================================|
\******************************************/

impl std::str::FromStr for Square {
    type Err = ParseSquareError;

    /// Parses the square string into a square, with error checking
    ///
    /// ## Examples
    ///
    /// ```
    /// use sanboard::core::{Square, ParseSquareError};
    /// use std::str::FromStr;
    ///
    /// assert_eq!(Square::from_str("a1").unwrap(), Square::A1);
    /// assert_eq!("h8".parse::<Square>().unwrap(), Square::H8);
    /// assert!(matches!("e9".parse::<Square>(), Err(ParseSquareError::InvalidRankChar('9'))));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(file_char), Some(rank_char), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(ParseSquareError::InvalidLength(s.chars().count()));
        };

        let file = File::from_char(file_char).ok_or(ParseSquareError::InvalidFileChar(file_char))?;
        let rank = Rank::from_char(rank_char).ok_or(ParseSquareError::InvalidRankChar(rank_char))?;

        Ok(Square::from_parts(file, rank))
    }
}

/******************************************\
|==========================================|
|            Square Parse Errors           |
|==========================================|
\******************************************/

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseSquareError {
    #[error("Invalid length for square string: {0}, expected 2")]
    InvalidLength(usize),
    #[error("Invalid character for file string: '{0}', expected 'a'-'h'")]
    InvalidFileChar(char),
    #[error("Invalid character for rank string: '{0}', expected '1'-'8'")]
    InvalidRankChar(char),
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
    fn test_square_from_parts() {
        assert_eq!(Square::from_parts(File::FileA, Rank::Rank1), Square::A1);
        assert_eq!(Square::from_parts(File::FileE, Rank::Rank4), Square::E4);
        assert_eq!(Square::from_parts(File::FileH, Rank::Rank8), Square::H8);
    }

    #[test]
    fn test_file_and_rank() {
        let square = Square::C6;
        assert_eq!(square.file(), File::FileC);
        assert_eq!(square.rank(), Rank::Rank6);
    }

    #[test]
    fn test_square_conversions() {
        for sq in Square::iter() {
            assert_eq!(Square::from_parts(sq.file(), sq.rank()), sq);
            assert_eq!(
                Square::from_coords(sq.file() as i8, sq.rank() as i8),
                Some(sq)
            );
        }
    }

    #[test]
    fn test_offset_stays_on_board() {
        assert_eq!(Square::E2.offset(0, 2), Some(Square::E4));
        assert_eq!(Square::G1.offset(-1, 2), Some(Square::F3));
        assert_eq!(Square::A1.offset(-1, 0), None);
        assert_eq!(Square::H8.offset(0, 1), None);
        assert_eq!(Square::H4.offset(1, 1), None);
    }

    #[test]
    fn test_delta() {
        assert_eq!(Square::E2.delta(Square::E4), (0, 2));
        assert_eq!(Square::G8.delta(Square::F6), (-1, -2));
    }

    #[test]
    fn test_square_display() {
        assert_eq!(Square::A1.to_string(), "a1");
        assert_eq!(Square::E4.to_string(), "e4");
        assert_eq!(Square::H8.to_string(), "h8");
    }

    #[test]
    fn test_square_from_str_valid() {
        assert_eq!("a1".parse::<Square>().unwrap(), Square::A1);
        assert_eq!("h8".parse::<Square>().unwrap(), Square::H8);
        assert_eq!("e4".parse::<Square>().unwrap(), Square::E4);
        assert_eq!("c7".parse::<Square>().unwrap(), Square::C7);
        assert_eq!("b5".parse::<Square>().unwrap(), Square::B5);
    }

    #[test]
    fn test_square_from_str_invalid() {
        assert!(matches!(
            "e".parse::<Square>(),
            Err(ParseSquareError::InvalidLength(1))
        ));
        assert!(matches!(
            "e4g".parse::<Square>(),
            Err(ParseSquareError::InvalidLength(3))
        ));
        assert!(matches!(
            "".parse::<Square>(),
            Err(ParseSquareError::InvalidLength(0))
        ));
        assert!(matches!(
            "i1".parse::<Square>(),
            Err(ParseSquareError::InvalidFileChar('i'))
        ));
        assert!(matches!(
            "A1".parse::<Square>(),
            Err(ParseSquareError::InvalidFileChar('A'))
        ));
        assert!(matches!(
            "a9".parse::<Square>(),
            Err(ParseSquareError::InvalidRankChar('9'))
        ));
        assert!(matches!(
            "h0".parse::<Square>(),
            Err(ParseSquareError::InvalidRankChar('0'))
        ));
    }

    #[test]
    fn test_hint_resolution() {
        let empty = SquareHint::default();
        assert!(!empty.is_resolved());
        assert_eq!(empty.square(), None);
        assert!(empty.admits(Square::A1));

        let file_only = SquareHint::new(Some(File::FileB), None);
        assert!(!file_only.is_resolved());
        assert_eq!(file_only.square(), None);
        assert!(file_only.admits(Square::B8));
        assert!(!file_only.admits(Square::D7));

        let rank_only = SquareHint::new(None, Some(Rank::Rank1));
        assert!(rank_only.admits(Square::E1));
        assert!(!rank_only.admits(Square::E2));

        let full = SquareHint::from(Square::G1);
        assert!(full.is_resolved());
        assert_eq!(full.square(), Some(Square::G1));
    }
}
