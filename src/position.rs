use std::ops::Index;

use crate::board::Board;
use crate::castling::CastlingRights;
use crate::coordinates::{File, Rank, Square};
use crate::move_gen::attacks;
use crate::piece::{Color, Piece};

/// A chess position: the board content plus everything the rules need to know about the game in
/// progress.
///
/// A `Position` is an immutable value. Playing a move never changes a position; the move maker
/// returns a fresh one. This keeps move legality checks trivially safe: a candidate move is
/// applied to a copy and the copy is inspected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    board: Board,
    side_to_move: Color,
    castling_rights: CastlingRights,
    en_passant_square: Option<Square>,
    halfmove_clock: u16,
    fullmove_number: u16,
}

impl Position {
    /// The FEN of the initial position of a chess game.
    pub const INITIAL_FEN: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    /// Returns the initial position of a chess game.
    pub fn new() -> Position {
        crate::fen::parse(Position::INITIAL_FEN).expect("The initial position FEN is well-formed.")
    }

    pub(crate) fn from_parts(
        board: Board,
        side_to_move: Color,
        castling_rights: CastlingRights,
        en_passant_square: Option<Square>,
        halfmove_clock: u16,
        fullmove_number: u16,
    ) -> Position {
        Position { board, side_to_move, castling_rights, en_passant_square, halfmove_clock, fullmove_number }
    }

    /// Returns the board content of the position.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the color of the side to move.
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Returns the castling moves still available to the players.
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    /// Returns the square a pawn can capture onto en passant, if the last move was a two-square
    /// pawn push.
    pub fn en_passant_square(&self) -> Option<Square> {
        self.en_passant_square
    }

    /// Returns the number of halfmoves since the last capture or pawn move.
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    /// Returns the number of the full move, starting at 1 and incremented after Black plays.
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    /// Returns the square occupied by the king of the specified color.
    pub fn king_square(&self, color: Color) -> Square {
        self.board.king_square(color)
    }

    /// Determines if the side to move is in check.
    pub fn is_check(&self) -> bool {
        attacks::is_attacked(
            &self.board,
            self.king_square(self.side_to_move),
            self.side_to_move.opposite(),
        )
    }

    /// Generates a compact string representation of the position.
    ///
    /// Rank numbers run down the left edge and file letters along the bottom, with the board
    /// seen from White's perspective. Empty squares render as dots.
    pub fn to_compact_string(&self) -> String {
        let mut board = String::with_capacity(171);
        for rank in Rank::ALL.iter().rev() {
            board.push_str(&format!("{}  ", rank));
            for file in File::ALL {
                let sq = Square::new(file, *rank);
                match self[sq] {
                    Some(piece) => board.push(piece.into()),
                    None => board.push('.'),
                }
                if file != File::H {
                    board.push(' ');
                } else {
                    board.push('\n');
                }
            }
        }
        board.push_str("   a b c d e f g h");

        board
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}

impl Index<Square> for Position {
    type Output = Option<Piece>;

    /// Returns the piece on a square, if any.
    fn index(&self, square: Square) -> &Self::Output {
        &self.board[square]
    }
}
