use std::fmt::Display;

use crate::castling::CastlingSide;
use crate::coordinates::Square;
use crate::piece::{Piece, PieceType};

/// Represents the different types of moves that a piece can make.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum MoveType {
    Basic,
    Capture(Piece),
    Promotion(Piece),
    CapturePromotion { capture: Piece, promotion: Piece },
    TwoSquarePawnPush,
    EnPassant,
    Castling(CastlingSide),
}

/// Represents a move in a chess game.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Move {
    from_square: Square,
    to_square: Square,
    piece: Piece,
    move_type: MoveType,
}

impl Move {
    /// Creates a new move that is basic (not a capture, promotion, etc.).
    pub fn new(from_square: Square, to_square: Square, piece: Piece) -> Self {
        Self { from_square, to_square, piece, move_type: MoveType::Basic }
    }

    /// Creates a new move that is a capture.
    pub fn new_capture(from_square: Square, to_square: Square, piece: Piece, capture: Piece) -> Self {
        Self { from_square, to_square, piece, move_type: MoveType::Capture(capture) }
    }

    /// Creates a new move that is a promotion.
    pub fn new_promotion(from_square: Square, to_square: Square, piece: Piece, promotion: Piece) -> Self {
        Self { from_square, to_square, piece, move_type: MoveType::Promotion(promotion) }
    }

    /// Creates a new move that is both a capture and a promotion.
    pub fn new_capture_promotion(
        from_square: Square,
        to_square: Square,
        piece: Piece,
        capture: Piece,
        promotion: Piece,
    ) -> Self {
        Self { from_square, to_square, piece, move_type: MoveType::CapturePromotion { capture, promotion } }
    }

    /// Creates a new move that is a two-square pawn push.
    pub fn new_two_square_pawn_push(from_square: Square, to_square: Square, piece: Piece) -> Self {
        Self { from_square, to_square, piece, move_type: MoveType::TwoSquarePawnPush }
    }

    /// Creates a new move that is a capture of a pawn en passant.
    pub fn new_en_passant(from_square: Square, to_square: Square, piece: Piece) -> Self {
        Self { from_square, to_square, piece, move_type: MoveType::EnPassant }
    }

    /// Creates a new move that is a castling move.
    pub fn new_castling(from_square: Square, to_square: Square, piece: Piece, side: CastlingSide) -> Self {
        Self { from_square, to_square, piece, move_type: MoveType::Castling(side) }
    }

    /// Returns the source square of the move.
    pub fn from_square(&self) -> Square {
        self.from_square
    }

    /// Returns the destination square of the move.
    pub fn to_square(&self) -> Square {
        self.to_square
    }

    /// Returns the piece that is moving.
    pub fn piece(&self) -> Piece {
        self.piece
    }

    /// Returns the type of move.
    pub fn move_type(&self) -> MoveType {
        self.move_type
    }

    /// Returns whether the move captures a piece, en passant included.
    pub fn is_capture(&self) -> bool {
        matches!(
            self.move_type,
            MoveType::Capture(_) | MoveType::CapturePromotion { .. } | MoveType::EnPassant
        )
    }

    /// Returns the piece a pawn promotes into, if the move is a promotion.
    pub fn promotion(&self) -> Option<Piece> {
        match self.move_type {
            MoveType::Promotion(promotion) => Some(promotion),
            MoveType::CapturePromotion { promotion, .. } => Some(promotion),
            _ => None,
        }
    }
}

impl Display for Move {
    /// Formats the move in coordinate notation ("e2e4", "e7e8q").
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.from_square, self.to_square)?;
        if let Some(promotion) = self.promotion() {
            write!(f, "{}", char::from(promotion.piece_type()).to_ascii_lowercase())?;
        }
        Ok(())
    }
}

/// The situation the side to move faces after a move has been played, or in a standalone
/// position.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MoveResult {
    /// The game goes on and the side to move is not in check.
    Continue,
    /// The side to move is in check but has at least one legal reply.
    Check,
    /// The side to move is in check and has no legal reply.
    Checkmate,
    /// The side to move is not in check and has no legal reply.
    Stalemate,
}

impl MoveResult {
    /// Classifies a situation from whether the side to move is in check and whether it has any
    /// legal move.
    pub fn classify(king_attacked: bool, has_moves: bool) -> MoveResult {
        match (king_attacked, has_moves) {
            (true, true) => MoveResult::Check,
            (true, false) => MoveResult::Checkmate,
            (false, false) => MoveResult::Stalemate,
            (false, true) => MoveResult::Continue,
        }
    }

    /// Returns the algebraic notation suffix for the result. Stalemate has no suffix of its own.
    pub fn suffix(&self) -> &'static str {
        match self {
            MoveResult::Check => "+",
            MoveResult::Checkmate => "#",
            MoveResult::Continue | MoveResult::Stalemate => "",
        }
    }

    /// Returns whether the game is over.
    pub fn is_final(&self) -> bool {
        matches!(self, MoveResult::Checkmate | MoveResult::Stalemate)
    }
}

/// How much of the source square algebraic notation must spell out to single out a move among
/// others of the same piece type going to the same square.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Disambiguation {
    File,
    Rank,
    Full,
}

impl Disambiguation {
    /// Renders the disambiguation tag for a source square.
    pub fn render(&self, from: Square) -> String {
        match self {
            Disambiguation::File => from.file().to_string(),
            Disambiguation::Rank => from.rank().to_string(),
            Disambiguation::Full => from.to_string(),
        }
    }
}

/// A move that survived the legality filter, together with everything needed to render its full
/// algebraic notation.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct LegalMove {
    mv: Move,
    result: MoveResult,
    disambiguation: Option<Disambiguation>,
}

impl LegalMove {
    pub fn new(mv: Move, result: MoveResult, disambiguation: Option<Disambiguation>) -> Self {
        Self { mv, result, disambiguation }
    }

    pub fn inner(&self) -> &Move {
        &self.mv
    }

    /// Returns the situation the opponent faces once the move is played.
    pub fn result(&self) -> MoveResult {
        self.result
    }

    pub fn disambiguation(&self) -> Option<Disambiguation> {
        self.disambiguation
    }

    /// Renders the move in standard algebraic notation, check and mate suffixes included.
    pub fn to_san(&self) -> String {
        let mut san = String::new();

        if let MoveType::Castling(side) = self.mv.move_type() {
            san.push_str(match side {
                CastlingSide::Kingside => "O-O",
                CastlingSide::Queenside => "O-O-O",
            });
            san.push_str(self.result.suffix());
            return san;
        }

        let piece_type = self.mv.piece().piece_type();
        if piece_type != PieceType::Pawn {
            san.push(char::from(piece_type));
            if let Some(disambiguation) = self.disambiguation {
                san.push_str(&disambiguation.render(self.mv.from_square()));
            }
        } else if self.mv.is_capture() {
            // Pawn captures always name the source file.
            san.push_str(&self.mv.from_square().file().to_string());
        }

        if self.mv.is_capture() {
            san.push('x');
        }

        san.push_str(&self.mv.to_square().to_string());

        if let Some(promotion) = self.mv.promotion() {
            san.push('=');
            san.push(char::from(promotion.piece_type()));
        }

        san.push_str(self.result.suffix());
        san
    }
}

impl Display for LegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_san())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::Piece;

    mod move_tests {
        use super::*;

        #[test]
        fn test_size_of_move() {
            assert!(std::mem::size_of::<Move>() <= 8);
        }

        #[test]
        fn test_constructors_set_the_move_type() {
            let basic = Move::new(Square::D2, Square::D3, Piece::WHITE_PAWN);
            assert_eq!(basic.move_type(), MoveType::Basic);
            assert!(!basic.is_capture());

            let capture = Move::new_capture(Square::D4, Square::E7, Piece::WHITE_KNIGHT, Piece::BLACK_PAWN);
            assert_eq!(capture.move_type(), MoveType::Capture(Piece::BLACK_PAWN));
            assert!(capture.is_capture());

            let promotion =
                Move::new_promotion(Square::A7, Square::A8, Piece::WHITE_PAWN, Piece::WHITE_QUEEN);
            assert_eq!(promotion.promotion(), Some(Piece::WHITE_QUEEN));
            assert!(!promotion.is_capture());

            let capture_promotion = Move::new_capture_promotion(
                Square::H7,
                Square::G8,
                Piece::WHITE_PAWN,
                Piece::BLACK_KNIGHT,
                Piece::WHITE_QUEEN,
            );
            assert!(capture_promotion.is_capture());
            assert_eq!(capture_promotion.promotion(), Some(Piece::WHITE_QUEEN));

            let push = Move::new_two_square_pawn_push(Square::E2, Square::E4, Piece::WHITE_PAWN);
            assert_eq!(push.move_type(), MoveType::TwoSquarePawnPush);

            let en_passant = Move::new_en_passant(Square::D5, Square::E6, Piece::WHITE_PAWN);
            assert!(en_passant.is_capture());

            let castling =
                Move::new_castling(Square::E1, Square::G1, Piece::WHITE_KING, CastlingSide::Kingside);
            assert_eq!(castling.move_type(), MoveType::Castling(CastlingSide::Kingside));
        }

        #[test]
        fn test_coordinate_display() {
            let push = Move::new_two_square_pawn_push(Square::E2, Square::E4, Piece::WHITE_PAWN);
            assert_eq!(push.to_string(), "e2e4");

            let promotion =
                Move::new_promotion(Square::E7, Square::E8, Piece::WHITE_PAWN, Piece::WHITE_QUEEN);
            assert_eq!(promotion.to_string(), "e7e8q");
        }
    }

    mod move_result_tests {
        use super::*;

        #[test]
        fn test_classification_table() {
            assert_eq!(MoveResult::classify(true, true), MoveResult::Check);
            assert_eq!(MoveResult::classify(true, false), MoveResult::Checkmate);
            assert_eq!(MoveResult::classify(false, false), MoveResult::Stalemate);
            assert_eq!(MoveResult::classify(false, true), MoveResult::Continue);
        }

        #[test]
        fn test_suffixes() {
            assert_eq!(MoveResult::Check.suffix(), "+");
            assert_eq!(MoveResult::Checkmate.suffix(), "#");
            assert_eq!(MoveResult::Stalemate.suffix(), "");
            assert_eq!(MoveResult::Continue.suffix(), "");
        }

        #[test]
        fn test_is_final() {
            assert!(MoveResult::Checkmate.is_final());
            assert!(MoveResult::Stalemate.is_final());
            assert!(!MoveResult::Check.is_final());
            assert!(!MoveResult::Continue.is_final());
        }
    }

    mod legal_move_tests {
        use super::*;

        fn plain(mv: Move) -> LegalMove {
            LegalMove::new(mv, MoveResult::Continue, None)
        }

        #[test]
        fn test_san_basic_piece_move() {
            let mv = Move::new(Square::G1, Square::F3, Piece::WHITE_KNIGHT);
            assert_eq!(plain(mv).to_san(), "Nf3");
        }

        #[test]
        fn test_san_pawn_push_and_capture() {
            let push = Move::new(Square::E2, Square::E3, Piece::WHITE_PAWN);
            assert_eq!(plain(push).to_san(), "e3");

            let capture = Move::new_capture(Square::E4, Square::D5, Piece::WHITE_PAWN, Piece::BLACK_PAWN);
            assert_eq!(plain(capture).to_san(), "exd5");

            let en_passant = Move::new_en_passant(Square::E5, Square::D6, Piece::WHITE_PAWN);
            assert_eq!(plain(en_passant).to_san(), "exd6");
        }

        #[test]
        fn test_san_promotion() {
            let promotion =
                Move::new_promotion(Square::E7, Square::E8, Piece::WHITE_PAWN, Piece::WHITE_QUEEN);
            assert_eq!(plain(promotion).to_san(), "e8=Q");

            let capture_promotion = Move::new_capture_promotion(
                Square::E7,
                Square::D8,
                Piece::WHITE_PAWN,
                Piece::BLACK_ROOK,
                Piece::WHITE_KNIGHT,
            );
            let legal = LegalMove::new(capture_promotion, MoveResult::Check, None);
            assert_eq!(legal.to_san(), "exd8=N+");
        }

        #[test]
        fn test_san_castling() {
            let kingside =
                Move::new_castling(Square::E1, Square::G1, Piece::WHITE_KING, CastlingSide::Kingside);
            assert_eq!(plain(kingside).to_san(), "O-O");

            let queenside =
                Move::new_castling(Square::E8, Square::C8, Piece::BLACK_KING, CastlingSide::Queenside);
            let legal = LegalMove::new(queenside, MoveResult::Checkmate, None);
            assert_eq!(legal.to_san(), "O-O-O#");
        }

        #[test]
        fn test_san_disambiguation() {
            let mv = Move::new(Square::B1, Square::D2, Piece::WHITE_KNIGHT);

            let by_file = LegalMove::new(mv, MoveResult::Continue, Some(Disambiguation::File));
            assert_eq!(by_file.to_san(), "Nbd2");

            let mv = Move::new(Square::D1, Square::D2, Piece::WHITE_ROOK);
            let by_rank = LegalMove::new(mv, MoveResult::Continue, Some(Disambiguation::Rank));
            assert_eq!(by_rank.to_san(), "R1d2");

            let mv = Move::new_capture(Square::C3, Square::D5, Piece::WHITE_QUEEN, Piece::BLACK_PAWN);
            let full = LegalMove::new(mv, MoveResult::Continue, Some(Disambiguation::Full));
            assert_eq!(full.to_san(), "Qc3xd5");
        }
    }
}
