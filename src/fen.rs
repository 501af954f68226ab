//! Reading and writing positions in Forsyth-Edwards Notation.

use thiserror::Error;

use crate::board::Board;
use crate::castling::CastlingRights;
use crate::coordinates::{File, Rank, Square};
use crate::piece::{Color, Piece, PieceType};
use crate::position::Position;

/// Error type for parsing a FEN string.
#[derive(Error, Debug, PartialEq)]
pub enum FenError {
    #[error("Invalid piece placement field")]
    InvalidPiecePlacement,

    #[error("Each side must have exactly one king")]
    InvalidKingCount,

    #[error("Invalid active color field")]
    InvalidActiveColor,

    #[error("Invalid castling availability field")]
    InvalidCastlingAvailability,

    #[error("Invalid en passant square field")]
    InvalidEnPassantSquare,

    #[error("Invalid halfmove clock field")]
    InvalidHalfmoveClock,

    #[error("Invalid fullmove number field")]
    InvalidFullmoveNumber,

    #[error("Missing field in FEN string")]
    MissingField,
}

fn read_piece_placement(piece_placement: &str) -> Result<Board, FenError> {
    let mut board = Board::default();
    let mut file = Some(File::A);
    let mut rank = Some(Rank::R8);

    for c in piece_placement.chars() {
        if let Ok(piece) = Piece::try_from(c) {
            let rank_value = rank.ok_or(FenError::InvalidPiecePlacement)?;
            let file_value = file.ok_or(FenError::InvalidPiecePlacement)?;
            let square = Square::new(file_value, rank_value);
            if board[square].is_some() {
                return Err(FenError::InvalidPiecePlacement);
            }
            board.put_piece(piece, square);
            file = square.right(1).map(|sq| sq.file());
        } else if let Some(number) = c.to_digit(10) {
            let file_value = file.ok_or(FenError::InvalidPiecePlacement)?;
            file = Square::new(file_value, Rank::R1).right(number as i8).map(|sq| sq.file());
        } else if c == '/' {
            let rank_value = rank.ok_or(FenError::InvalidPiecePlacement)?;
            rank = Square::new(File::A, rank_value).down(1).map(|sq| sq.rank());
            file = Some(File::A);
        } else {
            return Err(FenError::InvalidPiecePlacement);
        }
    }

    for color in Color::ALL {
        if board.occupied((color, PieceType::King)).popcnt() != 1 {
            return Err(FenError::InvalidKingCount);
        }
    }

    Ok(board)
}

fn read_active_color(active_color: &str) -> Result<Color, FenError> {
    match active_color {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(FenError::InvalidActiveColor),
    }
}

fn read_castling(castling: &str) -> Result<CastlingRights, FenError> {
    if castling == "-" {
        return Ok(CastlingRights::empty());
    }

    let mut rights = CastlingRights::empty();
    for c in castling.chars() {
        let right = match c {
            'K' => CastlingRights::WHITE_KINGSIDE,
            'Q' => CastlingRights::WHITE_QUEENSIDE,
            'k' => CastlingRights::BLACK_KINGSIDE,
            'q' => CastlingRights::BLACK_QUEENSIDE,
            _ => return Err(FenError::InvalidCastlingAvailability),
        };
        if rights.contains(right) {
            return Err(FenError::InvalidCastlingAvailability);
        }
        rights |= right;
    }
    Ok(rights)
}

fn read_en_passant(en_passant: &str) -> Result<Option<Square>, FenError> {
    if en_passant == "-" {
        return Ok(None);
    }

    let square = Square::try_from(en_passant).map_err(|_| FenError::InvalidEnPassantSquare)?;
    if square.rank() != Rank::R3 && square.rank() != Rank::R6 {
        return Err(FenError::InvalidEnPassantSquare);
    }
    Ok(Some(square))
}

/// Parses a FEN string into a position. All six fields are required.
pub fn parse(fen: &str) -> Result<Position, FenError> {
    let mut fields = fen.split_whitespace();

    let board = read_piece_placement(fields.next().ok_or(FenError::MissingField)?)?;
    let side_to_move = read_active_color(fields.next().ok_or(FenError::MissingField)?)?;
    let castling_rights = read_castling(fields.next().ok_or(FenError::MissingField)?)?;
    let en_passant_square = read_en_passant(fields.next().ok_or(FenError::MissingField)?)?;
    let halfmove_clock = fields
        .next()
        .ok_or(FenError::MissingField)?
        .parse::<u16>()
        .map_err(|_| FenError::InvalidHalfmoveClock)?;
    let fullmove_number = fields
        .next()
        .ok_or(FenError::MissingField)?
        .parse::<u16>()
        .map_err(|_| FenError::InvalidFullmoveNumber)?;

    Ok(Position::from_parts(
        board,
        side_to_move,
        castling_rights,
        en_passant_square,
        halfmove_clock,
        fullmove_number,
    ))
}

fn write_piece_placement(position: &Position) -> String {
    let mut result = String::new();
    for rank in Rank::ALL.iter().rev() {
        let mut empty_count = 0;
        for file in File::ALL {
            match position[Square::new(file, *rank)] {
                Some(piece) => {
                    if empty_count > 0 {
                        result.push_str(&empty_count.to_string());
                        empty_count = 0;
                    }
                    result.push(piece.into());
                }
                None => empty_count += 1,
            }
        }
        if empty_count > 0 {
            result.push_str(&empty_count.to_string());
        }
        if *rank != Rank::R1 {
            result.push('/');
        }
    }
    result
}

fn write_castling(rights: CastlingRights) -> String {
    if rights.is_empty() {
        return String::from("-");
    }

    let mut result = String::with_capacity(4);
    for (right, c) in [
        (CastlingRights::WHITE_KINGSIDE, 'K'),
        (CastlingRights::WHITE_QUEENSIDE, 'Q'),
        (CastlingRights::BLACK_KINGSIDE, 'k'),
        (CastlingRights::BLACK_QUEENSIDE, 'q'),
    ] {
        if rights.contains(right) {
            result.push(c);
        }
    }
    result
}

/// Returns the FEN representation of a position.
pub fn serialize(position: &Position) -> String {
    format!(
        "{} {} {} {} {} {}",
        write_piece_placement(position),
        match position.side_to_move() {
            Color::White => 'w',
            Color::Black => 'b',
        },
        write_castling(position.castling_rights()),
        match position.en_passant_square() {
            Some(square) => square.to_string(),
            None => String::from("-"),
        },
        position.halfmove_clock(),
        position.fullmove_number()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_initial_position() {
        let position = parse(Position::INITIAL_FEN).expect("valid FEN");

        assert_eq!(position[Square::A1], Some(Piece::WHITE_ROOK));
        assert_eq!(position[Square::E8], Some(Piece::BLACK_KING));
        assert_eq!(position[Square::D4], None);
        assert_eq!(position.side_to_move(), Color::White);
        assert_eq!(position.castling_rights(), CastlingRights::all());
    }

    #[test]
    fn test_parse_position_with_en_passant_square() {
        let position =
            parse("rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 2").expect("valid FEN");
        assert_eq!(position.en_passant_square(), Some(Square::D6));
    }

    #[test]
    fn test_parse_position_with_partial_castling_rights() {
        let position = parse("r3k2r/8/8/8/8/8/8/R3K2R w Kq - 0 1").expect("valid FEN");
        assert_eq!(
            position.castling_rights(),
            CastlingRights::WHITE_KINGSIDE | CastlingRights::BLACK_QUEENSIDE
        );
    }

    #[test]
    fn test_parse_rejects_malformed_fields() {
        assert_eq!(parse("8/8/8/8/8/8/8/8 w - - 0 1"), Err(FenError::InvalidKingCount));
        assert_eq!(
            parse("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1"),
            Err(FenError::InvalidActiveColor)
        );
        assert_eq!(
            parse("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQxq - 0 1"),
            Err(FenError::InvalidCastlingAvailability)
        );
        assert_eq!(
            parse("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq e5 0 1"),
            Err(FenError::InvalidEnPassantSquare)
        );
        assert_eq!(
            parse("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - x 1"),
            Err(FenError::InvalidHalfmoveClock)
        );
        assert_eq!(parse("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -"), Err(FenError::MissingField));
        assert_eq!(
            parse("rnbqkbn!/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
            Err(FenError::InvalidPiecePlacement)
        );
    }

    #[test]
    fn test_serialize_round_trip() {
        let fens = [
            Position::INITIAL_FEN,
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 2",
            "8/5k2/8/8/8/8/3K4/8 b - - 12 53",
        ];

        for fen in fens {
            let position = parse(fen).expect("valid FEN");
            assert_eq!(serialize(&position), fen);
        }
    }
}
