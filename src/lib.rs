//! # sanboard
//!
//! A chess position engine driven by algebraic notation. Moves arrive as SAN tokens (`e4`, `Nbd7`,
//! `O-O`, `exd6 e.p.`, `e8=Q+`), are checked against the piece movement rules, applied to an 8x8
//! board and the resulting position is written out as FEN.
//!
//! King safety is not checked: check, checkmate, stalemate and the draw rules are out of scope.
pub mod board;
pub mod core;

pub use board::{
    Board, FenParseError, Game, MoveError, MoveHistory, ReplayError, START_FEN, SanModifier,
    SanMove, SanParseError, move_tokens,
};
pub use crate::core::*;
