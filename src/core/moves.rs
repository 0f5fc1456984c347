use crate::core::*;

/******************************************\
|==========================================|
|                 Move Tag                 |
|==========================================|
\******************************************/

/// # Move Tag
///
/// The kind of move a record describes. Every tag other than `Plain` changes more of the grid than
/// the mover's origin and destination.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MoveTag {
    Plain,

    KingCastle,

    QueenCastle,

    /// The captured pawn sits beside the origin, not on the destination
    EnPassant { captured: Square },

    Promotion(PieceType),
}

impl MoveTag {
    pub const fn castle(side: CastleSide) -> Self {
        match side {
            CastleSide::King => MoveTag::KingCastle,
            CastleSide::Queen => MoveTag::QueenCastle,
        }
    }
}

/******************************************\
|==========================================|
|               Move Record                |
|==========================================|
\******************************************/

/// # Move Record
///
/// One resolved move: which piece went where, what it took and which special kind it was.
/// Records are built while a token is resolved, dropped if resolution fails and never modified
/// once they enter a game's history.
///
/// For castles `from`/`to` are the king's squares, with `to` on the g- or c-file.
#[derive(Debug, PartialEq, Clone, Copy, Eq, Hash)]
pub struct MoveRecord {
    piece: Piece,
    from: Square,
    to: Square,
    captured: Option<Piece>,
    tag: MoveTag,
}

impl MoveRecord {
    #[inline(always)]
    pub const fn new(
        piece: Piece,
        from: Square,
        to: Square,
        captured: Option<Piece>,
        tag: MoveTag,
    ) -> Self {
        Self {
            piece,
            from,
            to,
            captured,
            tag,
        }
    }

    #[inline(always)]
    pub const fn piece(&self) -> Piece {
        self.piece
    }

    #[inline(always)]
    pub const fn from(&self) -> Square {
        self.from
    }

    #[inline(always)]
    pub const fn to(&self) -> Square {
        self.to
    }

    #[inline(always)]
    pub const fn captured(&self) -> Option<Piece> {
        self.captured
    }

    #[inline(always)]
    pub const fn tag(&self) -> MoveTag {
        self.tag
    }

    #[inline(always)]
    pub const fn colour(&self) -> Colour {
        self.piece.colour()
    }

    #[inline(always)]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// Captures and pawn moves reset the half-move clock
    #[inline(always)]
    pub const fn resets_clock(&self) -> bool {
        self.is_capture() || matches!(self.piece.pt(), PieceType::Pawn)
    }

    /// A pawn advancing two ranks from its start square
    #[inline(always)]
    pub const fn is_double_push(&self) -> bool {
        matches!(self.piece.pt(), PieceType::Pawn) && self.from.delta(self.to).1.abs() == 2
    }
}

/******************************************\
|==========================================|
|                 Display                  |
|==========================================|
\******************************************/

impl std::fmt::Display for MoveRecord {
    /// Displays the move in coordinate notation, with the promotion piece appended (`e7e8q`)
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let MoveTag::Promotion(pt) = self.tag {
            write!(f, "{}", pt)?;
        }
        Ok(())
    }
}
