//! Perft: counts the leaf nodes of the legal move tree to a given depth.
//!
//! Perft is the standard correctness check for move generation. The counts for well-known
//! positions are published; a single wrong, missing or extra move anywhere in the tree changes
//! the total.

use crate::analyzer;
use crate::make;
use crate::position::Position;

/// Counts the positions reachable from `position` in exactly `depth` half-moves.
///
/// A depth of zero counts the position itself. At depth one the move count is the answer, so the
/// moves are counted without being played.
pub fn perft(position: &Position, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = analyzer::legal_moves(position);
    if depth == 1 {
        return moves.len() as u64;
    }

    moves.iter().map(|mv| perft(&make::make(position, &mv), depth - 1)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fen;

    #[test]
    fn test_perft_depth_zero_counts_the_position_itself() {
        assert_eq!(perft(&Position::new(), 0), 1);
    }

    #[test]
    fn test_perft_initial_position_shallow() {
        let position = Position::new();
        assert_eq!(perft(&position, 1), 20);
        assert_eq!(perft(&position, 2), 400);
        assert_eq!(perft(&position, 3), 8902);
    }

    #[test]
    fn test_perft_counts_en_passant_and_castling() {
        // Kiwipete, the classic generator stress position.
        let position =
            fen::parse("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1")
                .expect("valid FEN");
        assert_eq!(perft(&position, 1), 48);
        assert_eq!(perft(&position, 2), 2039);
    }
}
