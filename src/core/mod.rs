// Core module exports

// Value types shared by the board and the move parser
pub mod macros;
pub mod moves;
pub mod piece;
pub mod square;
pub mod types;

// Re-export common types for easier access
pub use moves::{MoveRecord, MoveTag};
pub use piece::{ParsePieceError, Piece, PieceType};
pub use square::{File, ParseSquareError, Rank, Square, SquareHint};
pub use types::{CastleSide, Castling, Colour};
