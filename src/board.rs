use std::ops::Index;

use crate::bitboard::Bitboard;
use crate::coordinates::Square;
use crate::piece::{Color, Piece, PieceType};

/// Defines filtering criteria for retrieving occupied squares from a board.
///
/// # Variants
/// * `All` - Selects all occupied squares regardless of the pieces on them
/// * `ByColor(Color)` - Selects only squares occupied by pieces of the specified color
/// * `ByType(PieceType)` - Selects only squares occupied by pieces of the specified type,
///   regardless of color
/// * `ByPiece(Piece)` - Selects only squares occupied by the specific piece
/// * `ByColorAndType(Color, PieceType)` - Equivalent to `ByPiece` but built from separate color
///   and type values
/// * `ByColorAndTwoTypes(Color, PieceType, PieceType)` - Selects squares occupied by pieces of the
///   specified color matching either of the two types
pub enum OccupancyFilter {
    All,
    ByColor(Color),
    ByType(PieceType),
    ByPiece(Piece),
    ByColorAndType(Color, PieceType),
    ByColorAndTwoTypes(Color, PieceType, PieceType),
}

impl From<Color> for OccupancyFilter {
    fn from(color: Color) -> Self {
        Self::ByColor(color)
    }
}

impl From<PieceType> for OccupancyFilter {
    fn from(piece_type: PieceType) -> Self {
        Self::ByType(piece_type)
    }
}

impl From<Piece> for OccupancyFilter {
    fn from(piece: Piece) -> Self {
        Self::ByPiece(piece)
    }
}

impl From<(Color, PieceType)> for OccupancyFilter {
    fn from((color, piece_type): (Color, PieceType)) -> Self {
        Self::ByColorAndType(color, piece_type)
    }
}

impl From<(Color, PieceType, PieceType)> for OccupancyFilter {
    fn from((color, type1, type2): (Color, PieceType, PieceType)) -> Self {
        Self::ByColorAndTwoTypes(color, type1, type2)
    }
}

/// The physical content of a chess board: where every piece stands.
///
/// Keeps one bitboard per piece, one per color, and a square-indexed mailbox. Every mutator
/// updates all three together, so the mailbox always agrees with the bitboards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    board: [Option<Piece>; Square::COUNT],
    bb_color: [Bitboard; Color::COUNT],
    bb_piece: [Bitboard; Piece::COUNT],
}

impl Default for Board {
    /// Creates an empty board.
    fn default() -> Self {
        Self {
            board: [None; Square::COUNT],
            bb_color: [Bitboard::EMPTY; Color::COUNT],
            bb_piece: [Bitboard::EMPTY; Piece::COUNT],
        }
    }
}

impl Board {
    /// Returns a bitboard of squares occupied by pieces matching the specified filter.
    ///
    /// Always inlined so the match on filter variants is resolved at compile time for the common
    /// call sites that pass a concrete filter type.
    #[inline(always)]
    pub fn occupied<F: Into<OccupancyFilter>>(&self, filter: F) -> Bitboard {
        match filter.into() {
            OccupancyFilter::All => {
                self.bb_color[usize::from(Color::White)] | self.bb_color[usize::from(Color::Black)]
            }

            OccupancyFilter::ByColor(color) => self.bb_color[usize::from(color)],

            OccupancyFilter::ByType(piece_type) => {
                self.bb_piece[usize::from(Piece::new(Color::White, piece_type))]
                    | self.bb_piece[usize::from(Piece::new(Color::Black, piece_type))]
            }

            OccupancyFilter::ByPiece(piece) => self.bb_piece[usize::from(piece)],

            OccupancyFilter::ByColorAndType(color, piece_type) => {
                self.bb_piece[usize::from(Piece::new(color, piece_type))]
            }

            OccupancyFilter::ByColorAndTwoTypes(color, type1, type2) => {
                self.bb_piece[usize::from(Piece::new(color, type1))]
                    | self.bb_piece[usize::from(Piece::new(color, type2))]
            }
        }
    }

    /// Returns the square occupied by the king of the specified color.
    ///
    /// # Panics
    /// Panics if no king of the specified color is on the board, which never happens in a
    /// well-formed position.
    pub fn king_square(&self, color: Color) -> Square {
        self.occupied((color, PieceType::King)).lsb().expect("There should always be a king on the board.")
    }

    /// Places a chess piece on a specific square on the board.
    ///
    /// The square must be empty; calling code that needs to replace a piece must remove the old
    /// one first.
    pub fn put_piece(&mut self, piece: Piece, square: Square) {
        debug_assert_eq!(self.board[usize::from(square)], None);

        self.board[usize::from(square)] = Some(piece);
        self.bb_color[usize::from(piece.color())] |= square;
        self.bb_piece[usize::from(piece)] |= Bitboard::from(square);
    }

    /// Removes a piece from a specific square.
    pub fn remove_piece(&mut self, square: Square) {
        let piece =
            self.board[usize::from(square)].expect("It is not possible to remove a piece from an empty square.");
        self.board[usize::from(square)] = None;
        self.bb_color[usize::from(piece.color())] ^= Bitboard::from(square);
        self.bb_piece[usize::from(piece)] ^= Bitboard::from(square);
    }

    /// Moves a known chess piece from one square to another. The piece must be present on the
    /// `from` square and the `to` square must be empty.
    pub fn move_piece(&mut self, piece: Piece, from: Square, to: Square) {
        debug_assert_eq!(self.board[usize::from(from)], Some(piece));
        debug_assert_eq!(self.board[usize::from(to)], None);

        self.board[usize::from(from)] = None;
        self.board[usize::from(to)] = Some(piece);
        let bb = from | to;
        self.bb_color[usize::from(piece.color())] ^= bb;
        self.bb_piece[usize::from(piece)] ^= bb;
    }
}

impl Index<Square> for Board {
    type Output = Option<Piece>;

    /// Returns the piece on a square, if any.
    fn index(&self, square: Square) -> &Self::Output {
        &self.board[usize::from(square)]
    }
}
