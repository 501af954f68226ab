//! Pseudo-legal move generation.
//!
//! The generators produce every move that respects piece movement, leaving king safety to the
//! legality filter. Each generator covers one concern: quiet non-pawn moves, non-pawn captures,
//! the whole family of pawn moves, and castling.

use crate::bitboard::Bitboard;
use crate::board::OccupancyFilter;
use crate::castling::{CastlingRights, CastlingSide};
use crate::coordinates::{File, Rank, Square};
use crate::move_gen::attacks;
use crate::move_gen::destinations::destinations;
use crate::move_gen::move_list::MoveList;
use crate::piece::{Color, Piece, PieceType};
use crate::position::Position;
use crate::r#move::Move;

const NON_PAWN_TYPES: [PieceType; 5] =
    [PieceType::Knight, PieceType::Bishop, PieceType::Rook, PieceType::Queen, PieceType::King];

/// Generates the quiet moves of the non-pawn pieces of the side to move: every piece move onto
/// an empty square.
pub fn generate_normal_moves(position: &Position, list: &mut MoveList) {
    let board = position.board();
    let color = position.side_to_move();
    let empty = !board.occupied(OccupancyFilter::All);

    for piece_type in NON_PAWN_TYPES {
        let piece = Piece::new(color, piece_type);
        for from in board.occupied(piece) {
            for to in destinations(board, piece, from) & empty {
                list.push(Move::new(from, to, piece));
            }
        }
    }
}

/// Generates the captures of the non-pawn pieces of the side to move.
pub fn generate_captures(position: &Position, list: &mut MoveList) {
    let board = position.board();
    let color = position.side_to_move();
    let enemies = board.occupied(color.opposite());

    for piece_type in NON_PAWN_TYPES {
        let piece = Piece::new(color, piece_type);
        for from in board.occupied(piece) {
            for to in destinations(board, piece, from) & enemies {
                let captured = board[to].expect("The destination holds an enemy piece.");
                list.push(Move::new_capture(from, to, piece, captured));
            }
        }
    }
}

fn push_promotions(list: &mut MoveList, from: Square, to: Square, pawn: Piece, captured: Option<Piece>) {
    for target in PieceType::PROMOTION_TARGETS {
        let promotion = Piece::new(pawn.color(), target);
        match captured {
            Some(captured) => list.push(Move::new_capture_promotion(from, to, pawn, captured, promotion)),
            None => list.push(Move::new_promotion(from, to, pawn, promotion)),
        }
    }
}

/// Generates the pawn moves of the side to move: single and double pushes, diagonal captures,
/// en passant captures and promotions. Any push or capture that reaches the last rank expands
/// into the four promotion choices.
pub fn generate_pawn_moves(position: &Position, list: &mut MoveList) {
    let board = position.board();
    let color = position.side_to_move();
    let pawn = Piece::new(color, PieceType::Pawn);
    let direction: i8 = match color {
        Color::White => 1,
        Color::Black => -1,
    };
    let start_rank = Rank::R2.relative_to_color(color);
    let promotion_rank = Rank::R8.relative_to_color(color);

    for from in board.occupied(pawn) {
        // Pushes. A pawn always has a forward square; promotion removes it from the last rank.
        if let Some(to) = from.up(direction) {
            if board[to].is_none() {
                if to.rank() == promotion_rank {
                    push_promotions(list, from, to, pawn, None);
                } else {
                    list.push(Move::new(from, to, pawn));

                    if from.rank() == start_rank {
                        if let Some(double_to) = to.up(direction) {
                            if board[double_to].is_none() {
                                list.push(Move::new_two_square_pawn_push(from, double_to, pawn));
                            }
                        }
                    }
                }
            }
        }

        // Diagonal captures, en passant included.
        for file_delta in [-1, 1] {
            let Some(to) = from.translate(file_delta, direction) else {
                continue;
            };

            match board[to] {
                Some(captured) if captured.color() != color => {
                    if to.rank() == promotion_rank {
                        push_promotions(list, from, to, pawn, Some(captured));
                    } else {
                        list.push(Move::new_capture(from, to, pawn, captured));
                    }
                }
                None if position.en_passant_square() == Some(to) => {
                    let bypassed = Square::new(to.file(), from.rank());
                    if board[bypassed] == Some(Piece::new(color.opposite(), PieceType::Pawn)) {
                        list.push(Move::new_en_passant(from, to, pawn));
                    }
                }
                _ => {}
            }
        }
    }
}

fn generate_castling(position: &Position, side: CastlingSide, list: &mut MoveList) {
    let board = position.board();
    let color = position.side_to_move();

    if !position.castling_rights().contains(CastlingRights::new(color, side)) {
        return;
    }

    let back_rank = Rank::R1.relative_to_color(color);
    let king_from = Square::new(File::E, back_rank);
    let rook_file = match side {
        CastlingSide::Kingside => File::H,
        CastlingSide::Queenside => File::A,
    };
    let rook_home = Square::new(rook_file, back_rank);

    let king = Piece::new(color, PieceType::King);
    if board[king_from] != Some(king) || board[rook_home] != Some(Piece::new(color, PieceType::Rook)) {
        return;
    }

    if !(Bitboard::between(king_from, rook_home) & board.occupied(OccupancyFilter::All)).is_empty() {
        return;
    }

    // Only the two squares the king travels over must be safe. On the queen side the rook also
    // passes the b-file square, but that square may be attacked; it only has to be empty, which
    // the between-check above already guarantees.
    let crossed_files = match side {
        CastlingSide::Kingside => [File::F, File::G],
        CastlingSide::Queenside => [File::D, File::C],
    };
    for file in crossed_files {
        if attacks::is_attacked(board, Square::new(file, back_rank), color.opposite()) {
            return;
        }
    }

    let king_to = Square::new(crossed_files[1], back_rank);
    list.push(Move::new_castling(king_from, king_to, king, side));
}

/// Generates the castling moves available to the side to move. A king in check cannot castle.
pub fn generate_castlings(position: &Position, list: &mut MoveList) {
    if position.is_check() {
        return;
    }

    for side in CastlingSide::ALL {
        generate_castling(position, side, list);
    }
}

/// Generates all pseudo-legal moves for the side to move.
pub fn generate_moves(position: &Position) -> MoveList {
    let mut list = MoveList::default();

    generate_pawn_moves(position, &mut list);
    generate_captures(position, &mut list);
    generate_normal_moves(position, &mut list);
    generate_castlings(position, &mut list);

    list
}
