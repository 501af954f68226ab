//! Turns pseudo-legal moves into confirmed legal moves.
//!
//! A pseudo-legal move is legal when the mover's king is not attacked in the resulting position.
//! The filter plays every candidate on a copy and inspects the copy; positions being immutable
//! values, there is nothing to undo.

use std::collections::HashMap;

use crate::coordinates::Square;
use crate::make;
use crate::move_gen::attacks;
use crate::move_gen::generation;
use crate::move_gen::move_list::MoveList;
use crate::piece::PieceType;
use crate::position::Position;
use crate::r#move::{Disambiguation, LegalMove, Move, MoveResult};

fn is_legal(position: &Position, mv: &Move) -> bool {
    let mover = position.side_to_move();
    let next = make::make(position, mv);
    !attacks::is_attacked(next.board(), next.king_square(mover), mover.opposite())
}

/// Returns the legal moves of the side to move, without notation or result classification.
///
/// This is the cheap entry point for callers that only need the raw moves, perft being the
/// typical one.
pub fn legal_moves(position: &Position) -> MoveList {
    generation::generate_moves(position).iter().filter(|mv| is_legal(position, mv)).collect()
}

fn has_legal_moves(position: &Position) -> bool {
    generation::generate_moves(position).iter().any(|mv| is_legal(position, &mv))
}

/// Classifies the situation of the side to move: check, checkmate, stalemate or a game that
/// simply goes on.
pub fn status(position: &Position) -> MoveResult {
    MoveResult::classify(position.is_check(), has_legal_moves(position))
}

/// Applies a move to a position, returning the resulting position.
pub fn apply_move(position: &Position, mv: &Move) -> Position {
    make::make(position, mv)
}

/// Computes the disambiguation tag for every move, keyed by index into `moves`.
///
/// Moves are grouped by moving piece type and destination; only groups with more than one
/// member need a tag, and pawn and king moves never do (a pawn capture already names its file,
/// and there is only one king).
fn disambiguations(moves: &[Move]) -> Vec<Option<Disambiguation>> {
    let mut groups: HashMap<(PieceType, Square), Vec<usize>> = HashMap::new();
    for (index, mv) in moves.iter().enumerate() {
        let piece_type = mv.piece().piece_type();
        if piece_type == PieceType::Pawn || piece_type == PieceType::King {
            continue;
        }
        groups.entry((piece_type, mv.to_square())).or_default().push(index);
    }

    let mut tags = vec![None; moves.len()];
    for indices in groups.values() {
        if indices.len() < 2 {
            continue;
        }

        let sources: Vec<Square> = indices.iter().map(|&index| moves[index].from_square()).collect();
        for (i, first) in sources.iter().enumerate() {
            for second in &sources[i + 1..] {
                assert!(first != second, "Two distinct moves cannot share a source square.");
            }
        }

        let all_same_file = sources.iter().all(|sq| sq.file() == sources[0].file());
        let mut files: Vec<_> = sources.iter().map(|sq| sq.file()).collect();
        files.sort_by_key(|file| u8::from(*file));
        files.dedup();
        let all_distinct_files = files.len() == sources.len();

        let tag = if all_same_file {
            Disambiguation::Rank
        } else if all_distinct_files {
            Disambiguation::File
        } else {
            Disambiguation::Full
        };

        for &index in indices {
            tags[index] = Some(tag);
        }
    }

    tags
}

/// Returns the legal moves of the side to move, each carrying the resulting game situation and
/// the notation disambiguation it needs.
pub fn generate_legal_moves(position: &Position) -> Vec<LegalMove> {
    let mover = position.side_to_move();

    let mut confirmed: Vec<(Move, Position)> = Vec::new();
    for mv in generation::generate_moves(position).iter() {
        let next = make::make(position, &mv);
        if !attacks::is_attacked(next.board(), next.king_square(mover), mover.opposite()) {
            confirmed.push((mv, next));
        }
    }

    let moves: Vec<Move> = confirmed.iter().map(|(mv, _)| *mv).collect();
    let tags = disambiguations(&moves);

    confirmed
        .into_iter()
        .zip(tags)
        .map(|((mv, next), tag)| {
            let result = MoveResult::classify(next.is_check(), has_legal_moves(&next));
            LegalMove::new(mv, result, tag)
        })
        .collect()
}
