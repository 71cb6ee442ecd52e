//! # chessmove
//!
//! Decides whether a chess piece may move from one square to another on a rectangular board.
//!
//! The crate covers piece movement geometry, blocking of sliding pieces, captures, pawn double
//! step and castling. It doesn't track the side to move, doesn't detect check or checkmate and
//! doesn't implement promotion or en passant: this is left to the code which drives the game.
//!
//! # Example
//!
//! ```
//! use chessmove::{Board, Coordinate, Descriptor, Piece};
//!
//! let mut board = Board::standard();
//! let king = Piece::new(Descriptor::WHITE_KING);
//! board.place_piece_at(king, Coordinate::new(1, 5)).unwrap();
//! board.place_piece_at(Piece::new(Descriptor::WHITE_ROOK), Coordinate::new(1, 8)).unwrap();
//!
//! // Castling is allowed, as neither the king nor the rook have moved
//! assert!(king.can_move(Coordinate::new(1, 5), Coordinate::new(1, 7), &board));
//!
//! board.mark_moved(Coordinate::new(1, 8));
//! assert!(!king.can_move(Coordinate::new(1, 5), Coordinate::new(1, 7), &board));
//! ```

pub mod between;
pub mod board;
pub mod castling;
pub mod leap;
pub mod legal;
pub mod pawns;
pub mod piece;
pub mod rules;

pub use chessmove_base::geometry;

/// Value types: colors, kinds, descriptors and coordinates
pub mod types {
    pub use chessmove_base::coord::*;
    pub use chessmove_base::types::*;
}

pub use board::{Board, BoardError, SquareInitializer};
pub use legal::{can_move, validate_move, IllegalMove};
pub use piece::{MoveState, Piece};
pub use types::{Color, Coordinate, Delta, Descriptor, Kind};

#[cfg(test)]
mod proptests;
