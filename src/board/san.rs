//! Tokenizer for standard algebraic notation move tokens.
//!
//! Accepted forms:
//! - castles: `O-O`, `O-O-O`
//! - piece moves: `[PNBRQK]? [a-h]? [1-8]? [xX-]? [a-h][1-8]` followed by an optional modifier,
//!   either a promotion (`=Q`, `=R`, `=B`, `=N`, or a bare `=` meaning queen) or the en passant
//!   annotation `e.p.` with at most one space before it
//!
//! Either form may carry one trailing `+`, `#` or `$`, which is ignored.

use thiserror::Error;

use crate::core::*;

/******************************************\
|==========================================|
|                 SAN Move                 |
|==========================================|
\******************************************/

/// Optional trailer on a piece-move token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SanModifier {
    Promotion(PieceType),
    EnPassant,
}

/// A move token after tokenizing, before it is matched against a position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SanMove {
    Castle(CastleSide),
    Regular {
        pt: PieceType,
        /// Whatever part of the source square the token named
        hint: SquareHint,
        /// The token carried an `x` or `X` before the destination
        capture: bool,
        to: Square,
        modifier: Option<SanModifier>,
    },
}

/******************************************\
|==========================================|
|                Parse SAN                 |
|==========================================|
\******************************************/

impl std::str::FromStr for SanMove {
    type Err = SanParseError;

    /// Tokenizes a single move token
    ///
    /// ## Examples
    ///
    /// ```
    /// use sanboard::{SanMove, core::{CastleSide, PieceType, Square}};
    ///
    /// assert_eq!("O-O+".parse::<SanMove>(), Ok(SanMove::Castle(CastleSide::King)));
    /// match "Nbd7".parse::<SanMove>().unwrap() {
    ///     SanMove::Regular { pt, to, .. } => {
    ///         assert_eq!(pt, PieceType::Knight);
    ///         assert_eq!(to, Square::D7);
    ///     }
    ///     _ => unreachable!(),
    /// }
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token.is_empty() {
            return Err(SanParseError::Empty);
        }
        if let Some((index, found)) = token.char_indices().find(|(_, c)| !c.is_ascii()) {
            return Err(SanParseError::UnexpectedChar {
                token: token.to_string(),
                index,
                found,
            });
        }

        let body = token.strip_suffix(['+', '#', '$']).unwrap_or(token);

        match body {
            "O-O" => return Ok(SanMove::Castle(CastleSide::King)),
            "O-O-O" => return Ok(SanMove::Castle(CastleSide::Queen)),
            _ => {}
        }

        let (body, modifier) = split_modifier(body)?;
        parse_regular(token, body, modifier)
    }
}

/// Splits a promotion or en passant trailer off the end of the token body
fn split_modifier(body: &str) -> Result<(&str, Option<SanModifier>), SanParseError> {
    if let Some(rest) = body.strip_suffix("e.p.") {
        let rest = rest.strip_suffix(' ').unwrap_or(rest);
        return Ok((rest, Some(SanModifier::EnPassant)));
    }

    let Some((rest, promo)) = body.split_once('=') else {
        return Ok((body, None));
    };

    let pt = match promo {
        "" | "Q" => PieceType::Queen,
        "R" => PieceType::Rook,
        "B" => PieceType::Bishop,
        "N" => PieceType::Knight,
        _ => return Err(SanParseError::InvalidPromotion(promo.to_string())),
    };

    Ok((rest, Some(SanModifier::Promotion(pt))))
}

fn parse_regular(
    token: &str,
    body: &str,
    modifier: Option<SanModifier>,
) -> Result<SanMove, SanParseError> {
    let (pt, rest, offset) = match body.chars().next().and_then(PieceType::from_san_letter) {
        Some(pt) => (pt, &body[1..], 1),
        None => (PieceType::Pawn, body, 0),
    };

    if rest.len() < 2 {
        return Err(SanParseError::MissingDestination(token.to_string()));
    }
    let (prefix, destination) = rest.split_at(rest.len() - 2);
    let to = destination
        .parse::<Square>()
        .map_err(|_| SanParseError::MissingDestination(token.to_string()))?;

    let mut chars = prefix.char_indices().peekable();
    let file = chars
        .next_if(|&(_, c)| File::from_char(c).is_some())
        .and_then(|(_, c)| File::from_char(c));
    let rank = chars
        .next_if(|&(_, c)| Rank::from_char(c).is_some())
        .and_then(|(_, c)| Rank::from_char(c));
    // '-' only separates the squares of long algebraic tokens such as `Ng1-f3`
    let capture = chars
        .next_if(|&(_, c)| matches!(c, 'x' | 'X' | '-'))
        .is_some_and(|(_, c)| c != '-');

    if let Some((index, found)) = chars.next() {
        return Err(SanParseError::UnexpectedChar {
            token: token.to_string(),
            index: offset + index,
            found,
        });
    }

    Ok(SanMove::Regular {
        pt,
        hint: SquareHint::new(file, rank),
        capture,
        to,
        modifier,
    })
}

/******************************************\
|==========================================|
|                 Movetext                 |
|==========================================|
\******************************************/

const RESULTS: [&str; 4] = ["1-0", "0-1", "1/2-1/2", "*"];

/// Splits PGN-style movetext into move tokens.
///
/// Move numbers (`12.`, `12...`, also when glued to the move as in `12.e4`) and game results are
/// dropped. A detached `e.p.` is joined back onto the token before it.
///
/// ## Examples
///
/// ```
/// use sanboard::move_tokens;
///
/// assert_eq!(
///     move_tokens("1. e4 d5 2. e5 f5 3. exf6 e.p. 1-0"),
///     vec!["e4", "d5", "e5", "f5", "exf6 e.p."]
/// );
/// ```
pub fn move_tokens(movetext: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();

    for word in movetext.split_whitespace() {
        if RESULTS.contains(&word) {
            continue;
        }

        let word = strip_move_number(word);
        if word.is_empty() {
            continue;
        }

        if word == "e.p." {
            if let Some(last) = tokens.last_mut() {
                last.push_str(" e.p.");
            }
            continue;
        }

        tokens.push(word.to_string());
    }

    tokens
}

fn strip_move_number(word: &str) -> &str {
    let rest = word.trim_start_matches(|c: char| c.is_ascii_digit());
    if rest.len() < word.len() && rest.starts_with('.') {
        rest.trim_start_matches('.')
    } else {
        word
    }
}

/******************************************\
|==========================================|
|             SAN Parse Errors             |
|==========================================|
\******************************************/

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SanParseError {
    #[error("Empty move token")]
    Empty,
    #[error("Move token `{0}` has no destination square")]
    MissingDestination(String),
    #[error("Unexpected character '{found}' at index {index} in move token `{token}`")]
    UnexpectedChar {
        token: String,
        index: usize,
        found: char,
    },
    #[error("Invalid promotion piece `{0}`, expected one of 'QRBN'")]
    InvalidPromotion(String),
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/

#[cfg(test)]
mod tests {
    use super::*;

    fn regular(token: &str) -> (PieceType, SquareHint, bool, Square, Option<SanModifier>) {
        match token.parse::<SanMove>() {
            Ok(SanMove::Regular {
                pt,
                hint,
                capture,
                to,
                modifier,
            }) => (pt, hint, capture, to, modifier),
            other => panic!("{token} parsed to {other:?}"),
        }
    }

    #[test]
    fn test_castles() {
        assert_eq!("O-O".parse::<SanMove>(), Ok(SanMove::Castle(CastleSide::King)));
        assert_eq!("O-O-O".parse::<SanMove>(), Ok(SanMove::Castle(CastleSide::Queen)));
        assert_eq!("O-O-O#".parse::<SanMove>(), Ok(SanMove::Castle(CastleSide::Queen)));
        assert!("O-O-O-O".parse::<SanMove>().is_err());
        assert!("0-0".parse::<SanMove>().is_err());
    }

    #[test]
    fn test_pawn_tokens() {
        assert_eq!(
            regular("e4"),
            (PieceType::Pawn, SquareHint::default(), false, Square::E4, None)
        );
        assert_eq!(
            regular("exd5"),
            (
                PieceType::Pawn,
                SquareHint::new(Some(File::FileE), None),
                true,
                Square::D5,
                None
            )
        );
        assert_eq!(regular("Pe4").0, PieceType::Pawn);
    }

    #[test]
    fn test_piece_tokens_with_hints() {
        let (pt, hint, capture, to, _) = regular("Nbd7");
        assert_eq!(pt, PieceType::Knight);
        assert_eq!(hint, SquareHint::new(Some(File::FileB), None));
        assert!(!capture);
        assert_eq!(to, Square::D7);

        let (pt, hint, capture, to, _) = regular("R1xe2");
        assert_eq!(pt, PieceType::Rook);
        assert_eq!(hint, SquareHint::new(None, Some(Rank::Rank1)));
        assert!(capture);
        assert_eq!(to, Square::E2);

        let (pt, hint, _, to, _) = regular("Qh4e1+");
        assert_eq!(pt, PieceType::Queen);
        assert_eq!(hint.square(), Some(Square::H4));
        assert_eq!(to, Square::E1);

        let (_, hint, capture, to, _) = regular("Ng1-f3");
        assert_eq!(hint.square(), Some(Square::G1));
        assert_eq!(to, Square::F3);
        assert!(!capture);

        let (_, hint, capture, _, _) = regular("e2-e4");
        assert_eq!(hint.square(), Some(Square::E2));
        assert!(!capture);

        assert!(regular("Ng1xf3").2);

        assert!(regular("BXc6").2);
    }

    #[test]
    fn test_modifiers() {
        assert_eq!(
            regular("e8=Q+").4,
            Some(SanModifier::Promotion(PieceType::Queen))
        );
        assert_eq!(
            regular("bxa1=N").4,
            Some(SanModifier::Promotion(PieceType::Knight))
        );
        assert_eq!(
            regular("h1=").4,
            Some(SanModifier::Promotion(PieceType::Queen))
        );
        assert_eq!(regular("exd6e.p.").4, Some(SanModifier::EnPassant));
        assert_eq!(regular("exd6 e.p.").4, Some(SanModifier::EnPassant));
        assert_eq!(regular("exd6 e.p.").3, Square::D6);
        assert_eq!(
            "e8=K".parse::<SanMove>(),
            Err(SanParseError::InvalidPromotion("K".to_string()))
        );
    }

    #[test]
    fn test_malformed_tokens() {
        assert_eq!("".parse::<SanMove>(), Err(SanParseError::Empty));
        assert_eq!("   ".parse::<SanMove>(), Err(SanParseError::Empty));
        assert_eq!(
            "N".parse::<SanMove>(),
            Err(SanParseError::MissingDestination("N".to_string()))
        );
        assert_eq!(
            "e9".parse::<SanMove>(),
            Err(SanParseError::MissingDestination("e9".to_string()))
        );
        assert_eq!(
            "Nzf3".parse::<SanMove>(),
            Err(SanParseError::UnexpectedChar {
                token: "Nzf3".to_string(),
                index: 1,
                found: 'z',
            })
        );
        assert_eq!(
            "exxd5".parse::<SanMove>(),
            Err(SanParseError::UnexpectedChar {
                token: "exxd5".to_string(),
                index: 2,
                found: 'x',
            })
        );
        assert!("e4++".parse::<SanMove>().is_err());
        assert!("Ке4".parse::<SanMove>().is_err());
        assert!("exd6  e.p.".parse::<SanMove>().is_err());
    }

    #[test]
    fn test_move_tokens() {
        assert_eq!(
            move_tokens("1. e4 e5 2. Nf3 Nc6 3...a6 4.Bb5 1/2-1/2"),
            vec!["e4", "e5", "Nf3", "Nc6", "a6", "Bb5"]
        );
        assert_eq!(move_tokens("  "), Vec::<String>::new());
        assert_eq!(move_tokens("e.p. e4 *"), vec!["e4"]);
    }
}
