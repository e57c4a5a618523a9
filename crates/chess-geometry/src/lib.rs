//! Move geometry for chess pieces on an empty board.
//!
//! This crate answers one question: given a single piece on an otherwise
//! empty 8×8 board, which squares can it reach in one move? There is no
//! game state: no other pieces, no captures, no check, no turns.
//!
//! - [`Square`], [`File`], and [`Rank`] for board coordinates
//! - [`Direction`] and [`MoveRule`] for the composable movement rules
//! - [`Piece`] and its per-piece movement catalog
//! - [`find_all_next_positions`] as the label-in, labels-out entry point

mod direction;
mod movegen;
mod piece;
mod rule;
mod square;

pub use direction::Direction;
pub use movegen::{destinations, find_all_next_positions};
pub use piece::Piece;
pub use rule::MoveRule;
pub use square::{File, InvalidSquare, Rank, Square};
