//! The move maker: applies a move to a position and produces the resulting position.

use once_cell::sync::Lazy;

use crate::castling::{CastlingRights, CastlingSide};
use crate::coordinates::{File, Rank, Square};
use crate::piece::{Color, Piece, PieceType};
use crate::position::Position;
use crate::r#move::{Move, MoveType};

/// For every square, the castling rights that survive a piece moving from or onto it.
///
/// Covering the `to` square as well as the `from` square means capturing a rook on its home
/// corner strips the right without any special casing.
static CASTLING_RIGHTS_MASK: Lazy<[CastlingRights; Square::COUNT]> = Lazy::new(|| {
    let mut masks = [CastlingRights::all(); Square::COUNT];

    masks[usize::from(Square::A1)] &= !CastlingRights::WHITE_QUEENSIDE;
    masks[usize::from(Square::H1)] &= !CastlingRights::WHITE_KINGSIDE;
    masks[usize::from(Square::E1)] &= !CastlingRights::both(Color::White);
    masks[usize::from(Square::A8)] &= !CastlingRights::BLACK_QUEENSIDE;
    masks[usize::from(Square::H8)] &= !CastlingRights::BLACK_KINGSIDE;
    masks[usize::from(Square::E8)] &= !CastlingRights::both(Color::Black);

    masks
});

/// Applies a move to a position and returns the resulting position. The input position is left
/// untouched.
///
/// The move must be well-formed for the position (the moving piece on its `from` square, the
/// captured piece where the move type says). Move generation only produces such moves; the
/// board mutators debug-assert the rest.
pub fn make(position: &Position, mv: &Move) -> Position {
    let mut board = position.board().clone();
    let color = position.side_to_move();
    let from = mv.from_square();
    let to = mv.to_square();

    match mv.move_type() {
        MoveType::Basic | MoveType::TwoSquarePawnPush => {
            board.move_piece(mv.piece(), from, to);
        }

        MoveType::Capture(_) => {
            board.remove_piece(to);
            board.move_piece(mv.piece(), from, to);
        }

        MoveType::Promotion(promotion) => {
            board.remove_piece(from);
            board.put_piece(promotion, to);
        }

        MoveType::CapturePromotion { promotion, .. } => {
            board.remove_piece(to);
            board.remove_piece(from);
            board.put_piece(promotion, to);
        }

        MoveType::EnPassant => {
            // The captured pawn is not on the destination but on the square the capturing pawn
            // passes next to.
            board.remove_piece(Square::new(to.file(), from.rank()));
            board.move_piece(mv.piece(), from, to);
        }

        MoveType::Castling(side) => {
            board.move_piece(mv.piece(), from, to);

            let back_rank = Rank::R1.relative_to_color(color);
            let (rook_from_file, rook_to_file) = match side {
                CastlingSide::Kingside => (File::H, File::F),
                CastlingSide::Queenside => (File::A, File::D),
            };
            let rook = Piece::new(color, PieceType::Rook);
            board.move_piece(rook, Square::new(rook_from_file, back_rank), Square::new(rook_to_file, back_rank));
        }
    }

    let castling_rights = position.castling_rights()
        & CASTLING_RIGHTS_MASK[usize::from(from)]
        & CASTLING_RIGHTS_MASK[usize::from(to)];

    let en_passant_square = match mv.move_type() {
        MoveType::TwoSquarePawnPush => {
            Some(Square::new(from.file(), Rank::R3.relative_to_color(color)))
        }
        _ => None,
    };

    let halfmove_clock = if mv.is_capture() || mv.piece().piece_type() == PieceType::Pawn {
        0
    } else {
        position.halfmove_clock() + 1
    };

    let fullmove_number = match color {
        Color::White => position.fullmove_number(),
        Color::Black => position.fullmove_number() + 1,
    };

    Position::from_parts(
        board,
        color.opposite(),
        castling_rights,
        en_passant_square,
        halfmove_clock,
        fullmove_number,
    )
}
