//! A chess legal move generation library.
//!
//! The library models positions as immutable values: applying a move produces a new
//! [`position::Position`] and leaves the original untouched. On top of the position sit the
//! pseudo-legal generators ([`move_gen`]), the legality filter and move classifier
//! ([`analyzer`]), FEN reading and writing ([`fen`]), move notation ([`notation`]) and the
//! perft node counter ([`perft`]).

pub mod analyzer;
pub mod bitboard;
pub mod board;
pub mod castling;
pub mod coordinates;
pub mod fen;
pub mod make;
pub mod r#move;
pub mod move_gen;
pub mod notation;
pub mod perft;
pub mod piece;
pub mod position;
