use super::{File, Rank, Square};

/******************************************\
|==========================================|
|                 Colours                  |
|==========================================|
\******************************************/

/// # Colour Representation
///
/// Represents the two colours in chess: White and Black.

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Colour {
    White,
    Black
}

impl Colour {
    /// Number of elements in the Colour enum
    pub const NUM: usize = 2;
}

crate::impl_from_to_primitive!(Colour);
crate::impl_enum_iter!(Colour);

/******************************************\
|==========================================|
|               Castle Side                |
|==========================================|
\******************************************/

/// # Castle Side Representation
///
/// The wing a king castles towards. King side castles with the rook on the h-file,
/// queen side with the rook on the a-file.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    King,
    Queen,
}

/******************************************\
|==========================================|
|                 Castling                 |
|==========================================|
\******************************************/

/// # Castling Representation
///
/// Represents the castling rights for a position

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Castling(pub u8);

crate::impl_bit_ops!(Castling);

/******************************************\
|==========================================|
|              Implementation              |
|==========================================|
\******************************************/

impl Colour {
    /// Returns the rank step a pawn of this colour moves by (+1 for White, -1 for Black)
    pub const fn forward(&self) -> i8 {
        match self {
            Colour::White => 1,
            Colour::Black => -1,
        }
    }

    /// Returns the rank the pieces of this colour start on
    pub const fn back_rank(&self) -> Rank {
        match self {
            Colour::White => Rank::Rank1,
            Colour::Black => Rank::Rank8,
        }
    }

    /// Returns the rank the pawns of this colour start on
    pub const fn pawn_rank(&self) -> Rank {
        match self {
            Colour::White => Rank::Rank2,
            Colour::Black => Rank::Rank7,
        }
    }

    /// Returns the rank on which a pawn of this colour promotes
    pub const fn promotion_rank(&self) -> Rank {
        match self {
            Colour::White => Rank::Rank8,
            Colour::Black => Rank::Rank1,
        }
    }

    /// Returns the home square of this colour's king
    pub const fn king_home(&self) -> Square {
        Square::from_parts(File::FileE, self.back_rank())
    }
}

impl std::ops::Not for Colour {
    type Output = Self;

    /// Returns the opposite colour
    fn not(self) -> Self::Output {
        match self {
            Colour::White => Colour::Black,
            Colour::Black => Colour::White,
        }
    }
}

impl CastleSide {
    /// Both castle sides, king side first
    pub const ALL: [CastleSide; 2] = [CastleSide::King, CastleSide::Queen];

    /// File of the rook that castles on this side
    pub const fn rook_file(self) -> File {
        match self {
            CastleSide::King => File::FileH,
            CastleSide::Queen => File::FileA,
        }
    }

    /// File the king lands on after castling
    pub const fn king_to_file(self) -> File {
        match self {
            CastleSide::King => File::FileG,
            CastleSide::Queen => File::FileC,
        }
    }

    /// File the rook lands on after castling
    pub const fn rook_to_file(self) -> File {
        match self {
            CastleSide::King => File::FileF,
            CastleSide::Queen => File::FileD,
        }
    }

    /// Files strictly between the king's and the rook's home squares
    pub const fn between_files(self) -> &'static [File] {
        match self {
            CastleSide::King => &[File::FileF, File::FileG],
            CastleSide::Queen => &[File::FileB, File::FileC, File::FileD],
        }
    }

    /// Home square of the castling rook for `colour`
    pub const fn rook_home(self, colour: Colour) -> Square {
        Square::from_parts(self.rook_file(), colour.back_rank())
    }
}

impl Castling {
    // Atomic castling rights
    pub const WK: Castling = Castling(1);
    pub const WQ: Castling = Castling(2);
    pub const BK: Castling = Castling(4);
    pub const BQ: Castling = Castling(8);
    // Board colour castling rights
    pub const WHITE_CASTLING: Castling = Castling(3);
    pub const BLACK_CASTLING: Castling = Castling(12);
    // All or nothing castling rights
    pub const ALL: Castling = Castling(15);
    pub const NONE: Castling = Castling(0);

    /// Helper function to check if a castling right has another castling right as a subset
    pub fn has(self, right: Castling) -> bool {
        self & right != Castling::NONE
    }

    /// Helper function to set castling rights
    pub fn set(&mut self, right: Castling) {
        *self |= right;
    }

    /// Helper function to remove castling rights
    pub fn remove(&mut self, right: Castling) {
        *self &= !right;
    }

    /// Both castling rights of a colour
    #[inline]
    pub fn for_colour(colour: Colour) -> Self {
        match colour {
            Colour::White => Castling::WHITE_CASTLING,
            Colour::Black => Castling::BLACK_CASTLING,
        }
    }

    /// Get the castling right for a colour on a given side
    #[inline]
    pub fn for_side(colour: Colour, side: CastleSide) -> Self {
        match (colour, side) {
            (Colour::White, CastleSide::King) => Castling::WK,
            (Colour::White, CastleSide::Queen) => Castling::WQ,
            (Colour::Black, CastleSide::King) => Castling::BK,
            (Colour::Black, CastleSide::Queen) => Castling::BQ,
        }
    }
}

impl std::ops::Not for Castling {
    type Output = Self;

    /// Invert the bits to give the opposite castling rights
    #[inline]
    fn not(self) -> Self::Output {
        Castling(!self.0 & 0x0F)
    }
}

impl std::fmt::Display for Castling {
    /// Displays castling right in the `KQkq` format
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0 == 0 {
            return write!(f, "-");
        }

        let mut s = String::new();
        if self.has(Castling::WK) {
            s.push('K');
        }
        if self.has(Castling::WQ) {
            s.push('Q');
        }
        if self.has(Castling::BK) {
            s.push('k');
        }
        if self.has(Castling::BQ) {
            s.push('q');
        }

        write!(f, "{}", s)
    }
}
