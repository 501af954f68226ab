//! Per-piece reachability for the non-pawn pieces.
//!
//! Whether a piece steps or slides is a property of its type. Stepping pieces try each of their
//! move vectors once and keep the targets that stay on the board. Sliding pieces repeat a vector
//! until they leave the board or hit a piece; an enemy blocker is reachable (a capture), an own
//! blocker is not.

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::coordinates::Square;
use crate::piece::{Piece, PieceType};

const ORTHOGONAL_VECTORS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const DIAGONAL_VECTORS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ROYAL_VECTORS: [(i8, i8); 8] =
    [(1, 0), (-1, 0), (0, 1), (0, -1), (1, 1), (1, -1), (-1, 1), (-1, -1)];
const KNIGHT_VECTORS: [(i8, i8); 8] =
    [(1, 2), (2, 1), (2, -1), (1, -2), (-1, -2), (-2, -1), (-2, 1), (-1, 2)];

fn move_vectors(piece_type: PieceType) -> &'static [(i8, i8)] {
    match piece_type {
        PieceType::Knight => &KNIGHT_VECTORS,
        PieceType::Bishop => &DIAGONAL_VECTORS,
        PieceType::Rook => &ORTHOGONAL_VECTORS,
        PieceType::Queen | PieceType::King => &ROYAL_VECTORS,
        PieceType::Pawn => unreachable!("Pawns have their own generator."),
    }
}

fn steps(board: &Board, piece: Piece, from: Square) -> Bitboard {
    let mut destinations = Bitboard::EMPTY;
    for (file_delta, rank_delta) in move_vectors(piece.piece_type()) {
        if let Some(to) = from.translate(*file_delta, *rank_delta) {
            destinations |= to;
        }
    }
    destinations & !board.occupied(piece.color())
}

fn slides(board: &Board, piece: Piece, from: Square) -> Bitboard {
    let mut destinations = Bitboard::EMPTY;
    for (file_delta, rank_delta) in move_vectors(piece.piece_type()) {
        let mut next = from.translate(*file_delta, *rank_delta);
        while let Some(to) = next {
            match board[to] {
                None => destinations |= to,
                Some(blocker) => {
                    if blocker.color() != piece.color() {
                        destinations |= to;
                    }
                    break;
                }
            }
            next = to.translate(*file_delta, *rank_delta);
        }
    }
    destinations
}

/// Returns every square a non-pawn piece standing on `from` can reach: empty squares plus
/// enemy-occupied squares. Squares holding a piece of the same color are never included.
pub fn destinations(board: &Board, piece: Piece, from: Square) -> Bitboard {
    debug_assert_eq!(board[from], Some(piece));
    debug_assert!(piece.piece_type() != PieceType::Pawn);

    if piece.piece_type().is_slider() {
        slides(board, piece, from)
    } else {
        steps(board, piece, from)
    }
}
