//! Reading and resolving chess move notation.

use thiserror::Error;

use crate::{
    castling::CastlingSide,
    coordinates::{CoordinatesError, File, Square},
    piece::{Piece, PieceError, PieceType},
    position::Position,
    r#move::{LegalMove, Move},
};

/// Represents errors that can occur when parsing chess move notation.
#[derive(Error, Debug)]
pub enum NotationError {
    /// Error when the source square coordinates in the notation are invalid.
    #[error("Invalid from square: {0}")]
    InvalidFromSquare(CoordinatesError),

    /// Error when the destination square coordinates in the notation are invalid.
    #[error("Invalid to square: {0}")]
    InvalidToSquare(CoordinatesError),

    /// Error when the promotion piece notation is invalid.
    #[error("Invalid promotion notation: {0}")]
    InvalidPromotion(PieceError),

    /// Error when the overall notation format is incorrect.
    #[error("Invalid notation: {0}")]
    InvalidNotation(String),

    /// Error when there is no piece present at the specified source square.
    #[error("There is not a piece at the from square: {0}")]
    NoPieceAtFromSquare(Square),
}

/// Parses a chess move in coordinate notation and converts it to a Move object.
///
/// Coordinate notation represents moves as the source square followed by the destination square,
/// optionally followed by a promotion piece (e.g., "e2e4", "e7e8q"). The position provides the
/// context the notation leaves implicit: the moving piece, a captured piece, or the castling
/// nature of a two-file king move.
///
/// The move is built from what the board shows; it is not checked for legality.
pub fn parse_coordinate_notation(position: &Position, notation: &str) -> Result<Move, NotationError> {
    if notation.len() < 4 || notation.len() > 5 || !notation.is_ascii() {
        return Err(NotationError::InvalidNotation(notation.to_string()));
    }

    let from = Square::try_from(&notation[0..2]).map_err(NotationError::InvalidFromSquare)?;
    let to = Square::try_from(&notation[2..4]).map_err(NotationError::InvalidToSquare)?;

    let piece = position[from].ok_or(NotationError::NoPieceAtFromSquare(from))?;

    let maybe_promotion = match notation.chars().nth(4) {
        Some(character) => {
            let piece_type = PieceType::try_from(character).map_err(NotationError::InvalidPromotion)?;
            Some(Piece::new(piece.color(), piece_type))
        }
        None => None,
    };

    let maybe_capture = position[to];

    if let Some(promotion) = maybe_promotion {
        return Ok(match maybe_capture {
            Some(capture) => Move::new_capture_promotion(from, to, piece, capture, promotion),
            None => Move::new_promotion(from, to, piece, promotion),
        });
    }

    if let Some(capture) = maybe_capture {
        return Ok(Move::new_capture(from, to, piece, capture));
    }

    if piece.piece_type() == PieceType::Pawn {
        // A pawn moving diagonally onto an empty square can only be a prise en passant.
        if from.file() != to.file() {
            return Ok(Move::new_en_passant(from, to, piece));
        }

        let rank_distance = (u8::from(from.rank()) as i8 - u8::from(to.rank()) as i8).abs();
        if rank_distance == 2 {
            return Ok(Move::new_two_square_pawn_push(from, to, piece));
        }
    }

    // A king moving from the e file to the g or c file can only be castling.
    if piece.piece_type() == PieceType::King && from.file() == File::E {
        if to.file() == File::G {
            return Ok(Move::new_castling(from, to, piece, CastlingSide::Kingside));
        }
        if to.file() == File::C {
            return Ok(Move::new_castling(from, to, piece, CastlingSide::Queenside));
        }
    }

    Ok(Move::new(from, to, piece))
}

/// Finds the legal move written as `san` among the given moves.
///
/// The comparison is exact: the text must carry the disambiguation and the check or mate suffix
/// the move renders with.
pub fn resolve_san<'a>(moves: &'a [LegalMove], san: &str) -> Option<&'a LegalMove> {
    moves.iter().find(|mv| mv.to_san() == san)
}
