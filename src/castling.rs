use bitflags::bitflags;

use crate::piece::Color;

/// Represents the side of the board a castling move happens on.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CastlingSide {
    Kingside = 0,
    Queenside = 1,
}

impl CastlingSide {
    pub const COUNT: usize = 2;

    pub const ALL: [CastlingSide; CastlingSide::COUNT] =
        [CastlingSide::Kingside, CastlingSide::Queenside];
}

bitflags! {
    /// The set of castling moves still available to the players.
    ///
    /// Rights only ever get removed as the game progresses; nothing a player does can restore a
    /// lost right.
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct CastlingRights: u8 {
        const WHITE_KINGSIDE = 1 << 0;
        const WHITE_QUEENSIDE = 1 << 1;
        const BLACK_KINGSIDE = 1 << 2;
        const BLACK_QUEENSIDE = 1 << 3;
    }
}

impl CastlingRights {
    /// Returns the single right for a color and side.
    pub fn new(color: Color, side: CastlingSide) -> CastlingRights {
        match (color, side) {
            (Color::White, CastlingSide::Kingside) => CastlingRights::WHITE_KINGSIDE,
            (Color::White, CastlingSide::Queenside) => CastlingRights::WHITE_QUEENSIDE,
            (Color::Black, CastlingSide::Kingside) => CastlingRights::BLACK_KINGSIDE,
            (Color::Black, CastlingSide::Queenside) => CastlingRights::BLACK_QUEENSIDE,
        }
    }

    /// Returns both rights of one color.
    pub fn both(color: Color) -> CastlingRights {
        CastlingRights::new(color, CastlingSide::Kingside)
            | CastlingRights::new(color, CastlingSide::Queenside)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_right() {
        assert_eq!(
            CastlingRights::new(Color::White, CastlingSide::Kingside),
            CastlingRights::WHITE_KINGSIDE
        );
        assert_eq!(
            CastlingRights::new(Color::Black, CastlingSide::Queenside),
            CastlingRights::BLACK_QUEENSIDE
        );
    }

    #[test]
    fn test_both() {
        assert_eq!(
            CastlingRights::both(Color::White),
            CastlingRights::WHITE_KINGSIDE | CastlingRights::WHITE_QUEENSIDE
        );
        assert_eq!(
            CastlingRights::both(Color::Black),
            CastlingRights::BLACK_KINGSIDE | CastlingRights::BLACK_QUEENSIDE
        );
    }

    #[test]
    fn test_removal_is_monotonic() {
        let mut rights = CastlingRights::all();
        rights.remove(CastlingRights::WHITE_KINGSIDE);
        assert!(!rights.contains(CastlingRights::WHITE_KINGSIDE));
        assert!(rights.contains(CastlingRights::WHITE_QUEENSIDE));
        assert!(rights.contains(CastlingRights::both(Color::Black)));
    }
}
