use tracing::{debug, trace};

use super::{Game, MoveError, ReplayError, SanModifier, SanMove};
use crate::core::*;

impl Game {
    /// Applies a move token, returning whether it was accepted.
    ///
    /// A rejected token, whether malformed or illegal, leaves the game exactly as it was.
    #[inline]
    pub fn apply_move(&mut self, token: &str) -> bool {
        self.try_apply_move(token).is_ok()
    }

    /// Applies a move token, returning the stored record or the reason it was rejected.
    ///
    /// The token is parsed and fully resolved against the current position before anything is
    /// written, so an `Err` never changes the game.
    pub fn try_apply_move(&mut self, token: &str) -> Result<&MoveRecord, MoveError> {
        let resolved = token
            .parse::<SanMove>()
            .map_err(MoveError::from)
            .and_then(|san| self.resolve(&san));

        match resolved {
            Ok(record) => Ok(self.commit(record)),
            Err(err) => {
                debug!(token, stm = ?self.stm(), %err, "rejected move token");
                Err(err)
            }
        }
    }

    /// Plays `tokens` in order on a fresh game, stopping at the first rejected token
    pub fn replay<I, S>(tokens: I) -> Result<Game, ReplayError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut game = Game::new();
        for (i, token) in tokens.into_iter().enumerate() {
            let token = token.as_ref();
            if let Err(source) = game.try_apply_move(token) {
                return Err(ReplayError {
                    ply: i + 1,
                    token: token.to_string(),
                    source,
                });
            }
        }
        Ok(game)
    }

    /// Matches a tokenized move against the position, producing the record it would apply
    fn resolve(&self, san: &SanMove) -> Result<MoveRecord, MoveError> {
        let us = self.stm();

        match *san {
            SanMove::Castle(side) => {
                let king = Piece::from_parts(us, PieceType::King);
                let from = us.king_home();
                let to = Square::from_parts(side.king_to_file(), us.back_rank());

                if self.get(from) != Some(king) {
                    return Err(MoveError::CastlingUnavailable(side));
                }

                let verdict = self
                    .castle_verdict(us, from, to)
                    .ok_or(MoveError::CastlingUnavailable(side))?;

                Ok(MoveRecord::new(king, from, verdict.to, None, verdict.tag))
            }

            SanMove::Regular {
                pt,
                hint,
                to,
                modifier,
                ..
            } => {
                let piece = Piece::from_parts(us, pt);

                let from = match hint.square() {
                    Some(from) => match self.get(from) {
                        Some(found) if found == piece => from,
                        found => {
                            return Err(MoveError::PieceMismatch {
                                square: from,
                                expected: piece,
                                found,
                            });
                        }
                    },
                    None => self.disambiguate(piece, hint, to)?,
                };

                let verdict = self
                    .verdict(piece, from, to)
                    .ok_or(MoveError::Illegal { piece, from, to })?;

                let tag = match (modifier, verdict.tag) {
                    (None, tag) => tag,
                    (Some(SanModifier::Promotion(pt)), MoveTag::Promotion(_)) => {
                        MoveTag::Promotion(pt)
                    }
                    (Some(SanModifier::EnPassant), tag @ MoveTag::EnPassant { .. }) => tag,
                    (Some(modifier), _) => {
                        return Err(MoveError::ModifierMismatch { modifier, from, to });
                    }
                };

                Ok(MoveRecord::new(piece, from, verdict.to, verdict.captured, tag))
            }
        }
    }

    /// Finds the single square from which `piece` can legally reach `to`
    fn disambiguate(&self, piece: Piece, hint: SquareHint, to: Square) -> Result<Square, MoveError> {
        let candidates: Vec<Square> = self
            .board
            .squares_of(piece)
            .filter(|&sq| sq != to && hint.admits(sq))
            .filter(|&sq| self.verdict(piece, sq, to).is_some())
            .collect();

        match candidates.as_slice() {
            [] => Err(MoveError::NoCandidate { piece, to }),
            [from] => Ok(*from),
            _ => Err(MoveError::Ambiguous {
                piece,
                to,
                count: candidates.len(),
            }),
        }
    }

    /// Writes a resolved record to the grid and appends it to the history
    fn commit(&mut self, record: MoveRecord) -> &MoveRecord {
        let (from, to) = (record.from(), record.to());
        let colour = record.colour();

        match record.tag() {
            MoveTag::Plain => self.board.relocate(from, to),

            MoveTag::EnPassant { captured } => {
                self.board.relocate(from, to);
                self.board.take(captured);
            }

            MoveTag::KingCastle => self.castle_pieces(colour, CastleSide::King, from, to),

            MoveTag::QueenCastle => self.castle_pieces(colour, CastleSide::Queen, from, to),

            MoveTag::Promotion(pt) => {
                self.board.take(from);
                self.board.place(to, Piece::from_parts(colour, pt));
            }
        }

        trace!(
            ply = self.history.len() + 1,
            piece = %record.piece(),
            uci = %record,
            tag = ?record.tag(),
            "applied move"
        );

        self.history.push(record)
    }

    fn castle_pieces(&mut self, colour: Colour, side: CastleSide, from: Square, to: Square) {
        let rook_from = side.rook_home(colour);
        let rook_to = Square::from_parts(side.rook_to_file(), colour.back_rank());

        self.board.relocate(from, to);
        self.board.relocate(rook_from, rook_to);
    }
}
