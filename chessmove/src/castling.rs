use crate::between;
use crate::board::Board;
use crate::geometry::{CastlingSide, Direction};
use crate::piece::Piece;
use crate::types::{Coordinate, Descriptor, Kind};

use thiserror::Error;

/// Reason why castling is not available
///
/// Attacks on the king or on the squares it passes are not considered here.
#[derive(Debug, Copy, Clone, Error, Eq, PartialEq)]
pub enum CastlingError {
    /// The king has already moved
    #[error("king has already moved")]
    KingMoved,
    /// There is no rook of the king's color on its home square
    #[error("no rook on {0}")]
    NoRook(Coordinate),
    /// The rook has already moved
    #[error("rook on {0} has already moved")]
    RookMoved(Coordinate),
    /// A piece stands between the king and the rook
    #[error("square {0} between king and rook is occupied")]
    PathBlocked(Coordinate),
}

/// Checks castling of `king` standing on `src` towards `side`
pub fn validate(
    board: &Board,
    king: &Piece,
    src: Coordinate,
    side: CastlingSide,
) -> Result<(), CastlingError> {
    if king.has_moved() {
        return Err(CastlingError::KingMoved);
    }
    let rook_pos = side.rook_home(src);
    if Direction::between(src, rook_pos) != Some(side.direction()) {
        return Err(CastlingError::NoRook(rook_pos));
    }
    let rook = Descriptor::from_parts(king.color(), Kind::Rook);
    match board.piece_at(rook_pos) {
        Some(p) if p.descriptor() == rook => {
            if p.has_moved() {
                return Err(CastlingError::RookMoved(rook_pos));
            }
        }
        _ => return Err(CastlingError::NoRook(rook_pos)),
    }
    if let Some(c) = between::first_blocker(board, src, rook_pos, side.direction()) {
        return Err(CastlingError::PathBlocked(c));
    }
    Ok(())
}
