use std::mem::MaybeUninit;

use crate::r#move::Move;

const MAX_MOVES: usize = 256;

/// Structure to store a list of chess moves efficiently.
///
/// Uses a fixed-size array to avoid heap allocations during move generation. No known chess
/// position has more than 256 pseudo-legal moves, so the capacity is never a practical limit.
///
/// # Safety
/// For performance reasons the list does not bound-check on `push` in release builds. The caller
/// must not push more than `MAX_MOVES` moves.
#[derive(Debug, Clone)]
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    count: usize,
}

impl Default for MoveList {
    /// Creates a new empty move list.
    ///
    /// The backing array is left uninitialized; the `count` field guarantees only written
    /// elements are ever read.
    fn default() -> Self {
        Self {
            moves: unsafe {
                let block = MaybeUninit::uninit();
                block.assume_init()
            },
            count: 0,
        }
    }
}

impl MoveList {
    /// Adds a move to the list.
    pub fn push(&mut self, mv: Move) {
        debug_assert!(self.count < MAX_MOVES);

        self.moves[self.count] = mv;
        self.count += 1;
    }

    /// Checks if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns the number of moves currently in the list.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns an iterator over the valid moves in the list.
    pub fn iter(&self) -> impl Iterator<Item = Move> + '_ {
        self.moves.iter().take(self.count).copied()
    }
}

impl FromIterator<Move> for MoveList {
    /// Creates a MoveList from an iterator of moves. Panics in debug builds if the iterator
    /// yields more than `MAX_MOVES` moves.
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        let mut list = Self::default();
        for mv in iter {
            list.push(mv);
        }
        list
    }
}
