use std::convert::From;
use std::fmt::Display;

use thiserror::Error;

/// Represents an error that occurs when converting a character to a piece or piece type.
#[derive(Error, Debug, PartialEq)]
pub enum PieceError {
    #[error("Invalid piece character: {0}")]
    InvalidCharacter(char),
}

/// Represents the color of a chess piece.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    pub const COUNT: usize = 2;

    /// Represents all colors of chess pieces.
    pub const ALL: [Color; Color::COUNT] = [Color::White, Color::Black];

    /// Returns the opposite color.
    pub fn opposite(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl Display for Color {
    /// Formats the color as a string.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

impl From<Color> for u8 {
    /// Converts a `Color` to a `u8` value.
    fn from(color: Color) -> Self {
        color as u8
    }
}

impl From<Color> for usize {
    /// Converts a `Color` to a `usize` value, usable as an array index.
    fn from(color: Color) -> Self {
        color as usize
    }
}

impl From<u8> for Color {
    /// Converts a `u8` value to a `Color`.
    fn from(value: u8) -> Self {
        assert!(value <= Color::Black.into());
        unsafe { std::mem::transmute(value) }
    }
}

#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PieceType {
    Knight = 0,
    Bishop = 1,
    Rook = 2,
    Queen = 3,
    King = 4,
    Pawn = 5,
}

impl PieceType {
    /// Represents all piece types.
    pub const ALL: [PieceType; 6] = [
        PieceType::Pawn,
        PieceType::Knight,
        PieceType::Bishop,
        PieceType::Rook,
        PieceType::Queen,
        PieceType::King,
    ];

    /// The piece types a pawn can promote to.
    pub const PROMOTION_TARGETS: [PieceType; 4] =
        [PieceType::Knight, PieceType::Bishop, PieceType::Rook, PieceType::Queen];

    /// Returns whether the piece type moves along rays until blocked. Stepping types (knight,
    /// king) and pawns return false.
    pub fn is_slider(self) -> bool {
        matches!(self, PieceType::Bishop | PieceType::Rook | PieceType::Queen)
    }
}

impl From<PieceType> for u8 {
    /// Converts a `PieceType` to a `u8` value.
    fn from(piece_type: PieceType) -> Self {
        piece_type as u8
    }
}

impl From<u8> for PieceType {
    /// Converts a `u8` value to a `PieceType`.
    fn from(value: u8) -> Self {
        assert!(value <= PieceType::Pawn.into());
        unsafe { std::mem::transmute(value) }
    }
}

impl From<PieceType> for char {
    fn from(piece_type: PieceType) -> Self {
        match piece_type {
            PieceType::Pawn => 'P',
            PieceType::Knight => 'N',
            PieceType::Bishop => 'B',
            PieceType::Rook => 'R',
            PieceType::Queen => 'Q',
            PieceType::King => 'K',
        }
    }
}

impl TryFrom<char> for PieceType {
    type Error = PieceError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'p' | 'P' => Ok(PieceType::Pawn),
            'n' | 'N' => Ok(PieceType::Knight),
            'b' | 'B' => Ok(PieceType::Bishop),
            'r' | 'R' => Ok(PieceType::Rook),
            'q' | 'Q' => Ok(PieceType::Queen),
            'k' | 'K' => Ok(PieceType::King),
            _ => Err(PieceError::InvalidCharacter(value)),
        }
    }
}

impl Display for PieceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PieceType::Pawn => write!(f, "Pawn"),
            PieceType::Knight => write!(f, "Knight"),
            PieceType::Bishop => write!(f, "Bishop"),
            PieceType::Rook => write!(f, "Rook"),
            PieceType::Queen => write!(f, "Queen"),
            PieceType::King => write!(f, "King"),
        }
    }
}

/// Represents a chess piece.
///
/// A `Piece` is a combination of a `Color` and a `PieceType`. It is represented as a single byte,
/// with the lowest bit holding the `Color` and the higher bits holding the `PieceType`. The values
/// 0 to 11 cover all possible combinations.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Piece(u8);

#[allow(dead_code)]
impl Piece {
    pub const COUNT: usize = 12;

    pub const WHITE_KNIGHT: Piece = Piece(0);
    pub const WHITE_BISHOP: Piece = Piece(2);
    pub const WHITE_ROOK: Piece = Piece(4);
    pub const WHITE_QUEEN: Piece = Piece(6);
    pub const WHITE_KING: Piece = Piece(8);
    pub const WHITE_PAWN: Piece = Piece(10);
    pub const BLACK_KNIGHT: Piece = Piece(1);
    pub const BLACK_BISHOP: Piece = Piece(3);
    pub const BLACK_ROOK: Piece = Piece(5);
    pub const BLACK_QUEEN: Piece = Piece(7);
    pub const BLACK_KING: Piece = Piece(9);
    pub const BLACK_PAWN: Piece = Piece(11);

    /// Represents all possible chess pieces.
    pub const ALL: [Piece; Piece::COUNT] = [
        Piece::WHITE_PAWN,
        Piece::WHITE_KNIGHT,
        Piece::WHITE_BISHOP,
        Piece::WHITE_ROOK,
        Piece::WHITE_QUEEN,
        Piece::WHITE_KING,
        Piece::BLACK_PAWN,
        Piece::BLACK_KNIGHT,
        Piece::BLACK_BISHOP,
        Piece::BLACK_ROOK,
        Piece::BLACK_QUEEN,
        Piece::BLACK_KING,
    ];

    /// Creates a new `Piece` with the given `Color` and `PieceType`.
    pub fn new(color: Color, piece_type: PieceType) -> Self {
        Piece(u8::from(piece_type) << 1 | u8::from(color))
    }

    /// Returns the Color of the piece.
    pub fn color(self) -> Color {
        Color::from(self.0 & 1)
    }

    /// Returns the PieceType of the piece.
    pub fn piece_type(self) -> PieceType {
        PieceType::from(self.0 >> 1)
    }
}

impl From<Piece> for u8 {
    /// Converts a `Piece` to a `u8` value.
    fn from(piece: Piece) -> Self {
        piece.0
    }
}

impl From<Piece> for usize {
    /// Converts a `Piece` to a `usize` value, usable as an array index.
    fn from(piece: Piece) -> Self {
        usize::from(piece.0)
    }
}

impl From<u8> for Piece {
    /// Converts a `u8` value to a `Piece`.
    fn from(value: u8) -> Self {
        assert!(value <= Piece::BLACK_PAWN.into());
        Piece(value)
    }
}

impl From<Piece> for char {
    /// Converts a `Piece` to a single character, uppercase for White and lowercase for Black.
    fn from(piece: Piece) -> Self {
        match piece.color() {
            Color::White => char::from(piece.piece_type()).to_ascii_uppercase(),
            Color::Black => char::from(piece.piece_type()).to_ascii_lowercase(),
        }
    }
}

impl TryFrom<char> for Piece {
    type Error = PieceError;

    /// Converts a single character to a `Piece`.
    fn try_from(value: char) -> Result<Self, Self::Error> {
        let color = match char::is_uppercase(value) {
            true => Color::White,
            false => Color::Black,
        };
        let piece_type = PieceType::try_from(value)?;
        Ok(Piece::new(color, piece_type))
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.color(), self.piece_type())
    }
}
