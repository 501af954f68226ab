//! Attack-map generation.
//!
//! Knight and king attacks come from a fixed pattern shifted to the piece square. Sliding pieces
//! use the hyperbola quintessence technique: the occupied squares of the line are folded through
//! a subtraction in both ray directions, which leaves exactly the squares up to and including the
//! first blocker. Pawn attacks are whole-bitboard diagonal shifts.

use once_cell::sync::Lazy;

use crate::bitboard::Bitboard;
use crate::board::{Board, OccupancyFilter};
use crate::coordinates::Square;
use crate::piece::{Color, PieceType};

const FILE_A: Bitboard = Bitboard::new(0x0101010101010101);
const FILE_H: Bitboard = Bitboard::new(0x8080808080808080);
const FILES_AB: Bitboard = Bitboard::new(0x0303030303030303);
const FILES_GH: Bitboard = Bitboard::new(0xc0c0c0c0c0c0c0c0);

// The knight pattern is centered on c3, the king pattern on b2.
const KNIGHT_PATTERN: Bitboard = Bitboard::new(0x0a_11_00_11_0a);
const KNIGHT_PATTERN_CENTER: u8 = 18;
const KING_PATTERN: Bitboard = Bitboard::new(0x07_05_07);
const KING_PATTERN_CENTER: u8 = 9;

/// Per-square masks of the four lines a slider can travel, the slider square included.
struct LineMasks {
    diagonal: [Bitboard; Square::COUNT],
    antidiagonal: [Bitboard; Square::COUNT],
    file: [Bitboard; Square::COUNT],
    rank: [Bitboard; Square::COUNT],
}

static LINE_MASKS: Lazy<LineMasks> = Lazy::new(|| {
    fn line(square: Square, file_delta: i8, rank_delta: i8) -> Bitboard {
        let mut mask = Bitboard::from(square);
        for direction in [1, -1] {
            let mut next = square.translate(file_delta * direction, rank_delta * direction);
            while let Some(sq) = next {
                mask |= sq;
                next = sq.translate(file_delta * direction, rank_delta * direction);
            }
        }
        mask
    }

    let mut masks = LineMasks {
        diagonal: [Bitboard::EMPTY; Square::COUNT],
        antidiagonal: [Bitboard::EMPTY; Square::COUNT],
        file: [Bitboard::EMPTY; Square::COUNT],
        rank: [Bitboard::EMPTY; Square::COUNT],
    };

    for square in Square::all() {
        let index = usize::from(square);
        masks.diagonal[index] = line(square, 1, 1);
        masks.antidiagonal[index] = line(square, -1, 1);
        masks.file[index] = line(square, 0, 1);
        masks.rank[index] = line(square, 1, 0);
    }

    masks
});

/// Computes the attacked squares along one line for a slider at `slider`, blockers included.
fn hyperbola(slider: Bitboard, occupied: Bitboard, mask: Bitboard) -> Bitboard {
    let occupied_line = occupied & mask;

    let forward = occupied_line.wrapping_sub(slider << 1);
    let backward = occupied_line.reverse().wrapping_sub(slider.reverse() << 1).reverse();

    (forward ^ backward) & mask
}

/// Shifts a pattern from its reference center to a new center square.
fn shift_pattern(pattern: Bitboard, center: u8, to: Square) -> Bitboard {
    let square = u8::from(to);
    if square > center {
        pattern << (square - center) as u32
    } else {
        pattern >> (center - square) as u32
    }
}

/// Returns the squares a knight on `square` attacks.
pub fn knight_attacks(square: Square) -> Bitboard {
    let pattern = shift_pattern(KNIGHT_PATTERN, KNIGHT_PATTERN_CENTER, square);

    // The shift wraps the pattern around the board edges; the half of the board the knight
    // stands on decides which side of the pattern is spill.
    if u8::from(square.file()) < 4 {
        pattern & !FILES_GH
    } else {
        pattern & !FILES_AB
    }
}

/// Returns the squares a king on `square` attacks.
pub fn king_attacks(square: Square) -> Bitboard {
    let pattern = shift_pattern(KING_PATTERN, KING_PATTERN_CENTER, square);

    if u8::from(square.file()) < 4 {
        pattern & !FILE_H
    } else {
        pattern & !FILE_A
    }
}

/// Returns the squares a bishop on `square` attacks, given the occupied squares of the board.
pub fn bishop_attacks(square: Square, occupied: Bitboard) -> Bitboard {
    let slider = Bitboard::from(square);
    let index = usize::from(square);

    hyperbola(slider, occupied, LINE_MASKS.diagonal[index])
        | hyperbola(slider, occupied, LINE_MASKS.antidiagonal[index])
}

/// Returns the squares a rook on `square` attacks, given the occupied squares of the board.
pub fn rook_attacks(square: Square, occupied: Bitboard) -> Bitboard {
    let slider = Bitboard::from(square);
    let index = usize::from(square);

    hyperbola(slider, occupied, LINE_MASKS.file[index])
        | hyperbola(slider, occupied, LINE_MASKS.rank[index])
}

/// Returns the squares a queen on `square` attacks, given the occupied squares of the board.
pub fn queen_attacks(square: Square, occupied: Bitboard) -> Bitboard {
    bishop_attacks(square, occupied) | rook_attacks(square, occupied)
}

/// Returns every square attacked by the pawns of a color, occupied or not. A pawn attacks its two
/// forward diagonals only; pushes are not attacks.
pub fn pawn_attacks(pawns: Bitboard, color: Color) -> Bitboard {
    match color {
        Color::White => (pawns << 7) & !FILE_H | (pawns << 9) & !FILE_A,
        Color::Black => (pawns >> 9) & !FILE_H | (pawns >> 7) & !FILE_A,
    }
}

/// Returns every square attacked by one side, empty squares included.
pub fn attacks(board: &Board, attacker: Color) -> Bitboard {
    let occupied = board.occupied(OccupancyFilter::All);
    let mut attacks = pawn_attacks(board.occupied((attacker, PieceType::Pawn)), attacker);

    for square in board.occupied((attacker, PieceType::Knight)) {
        attacks |= knight_attacks(square);
    }

    for square in board.occupied((attacker, PieceType::Bishop, PieceType::Queen)) {
        attacks |= bishop_attacks(square, occupied);
    }

    for square in board.occupied((attacker, PieceType::Rook, PieceType::Queen)) {
        attacks |= rook_attacks(square, occupied);
    }

    attacks |= king_attacks(board.king_square(attacker));

    attacks
}

/// Returns whether any piece of `attacker` attacks `square`. Cheaper than building the full
/// attack map when a single square is in question.
pub fn is_attacked(board: &Board, square: Square, attacker: Color) -> bool {
    let occupied = board.occupied(OccupancyFilter::All);

    if !(rook_attacks(square, occupied) & board.occupied((attacker, PieceType::Rook, PieceType::Queen)))
        .is_empty()
    {
        return true;
    }

    if !(bishop_attacks(square, occupied)
        & board.occupied((attacker, PieceType::Bishop, PieceType::Queen)))
    .is_empty()
    {
        return true;
    }

    if !(knight_attacks(square) & board.occupied((attacker, PieceType::Knight))).is_empty() {
        return true;
    }

    if !(king_attacks(square) & board.occupied((attacker, PieceType::King))).is_empty() {
        return true;
    }

    // An attacking pawn stands on a square from which `square` is reachable diagonally, which is
    // the reverse pawn-attack set of `square`.
    let pawns = board.occupied((attacker, PieceType::Pawn));
    !(pawn_attacks(Bitboard::from(square), attacker.opposite()) & pawns).is_empty()
}
