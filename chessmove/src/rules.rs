//! Movement rules for each kind of piece
//!
//! Every rule receives the board, the moving piece and both squares. Both squares are on the
//! board and differ from each other; the engine in [`crate::legal`] checks this before
//! dispatching.

use crate::between::{self, Ray};
use crate::board::Board;
use crate::geometry::{CastlingSide, Direction};
use crate::legal::IllegalMove;
use crate::piece::Piece;
use crate::types::{Coordinate, Kind};
use crate::{castling, leap, pawns};

fn from_ray(ray: Ray, kind: Kind, dst: Coordinate) -> Result<(), IllegalMove> {
    match ray {
        Ray::Open => Ok(()),
        Ray::OwnPiece => Err(IllegalMove::OwnPieceAtDestination(dst)),
        Ray::Blocked(c) => Err(IllegalMove::PathBlocked(c)),
        Ray::Missed => Err(IllegalMove::WrongShape(kind)),
    }
}

pub fn rook(
    board: &Board,
    piece: &Piece,
    src: Coordinate,
    dst: Coordinate,
) -> Result<(), IllegalMove> {
    let ray = between::line(board, src, dst, piece.color());
    from_ray(ray, Kind::Rook, dst)
}

pub fn bishop(
    board: &Board,
    piece: &Piece,
    src: Coordinate,
    dst: Coordinate,
) -> Result<(), IllegalMove> {
    let ray = between::diagonal(board, src, dst, piece.color());
    from_ray(ray, Kind::Bishop, dst)
}

pub fn queen(
    board: &Board,
    piece: &Piece,
    src: Coordinate,
    dst: Coordinate,
) -> Result<(), IllegalMove> {
    let ray = match between::line(board, src, dst, piece.color()) {
        Ray::Missed => between::diagonal(board, src, dst, piece.color()),
        ray => ray,
    };
    from_ray(ray, Kind::Queen, dst)
}

pub fn knight(
    board: &Board,
    piece: &Piece,
    src: Coordinate,
    dst: Coordinate,
) -> Result<(), IllegalMove> {
    if !leap::is_knight_shape(src, dst) {
        return Err(IllegalMove::WrongShape(Kind::Knight));
    }
    if !leap::knight(board, src, dst, piece.color()) {
        return Err(IllegalMove::OwnPieceAtDestination(dst));
    }
    Ok(())
}

pub fn king(
    board: &Board,
    piece: &Piece,
    src: Coordinate,
    dst: Coordinate,
) -> Result<(), IllegalMove> {
    if let Some(side) = CastlingSide::from_king_move(src, dst) {
        return Ok(castling::validate(board, piece, src, side)?);
    }
    if !leap::is_king_shape(src, dst) {
        return Err(IllegalMove::WrongShape(Kind::King));
    }
    let ray = match Direction::between(src, dst) {
        Some(dir) => between::slide(board, src, dst, dir, piece.color()),
        None => Ray::Missed,
    };
    from_ray(ray, Kind::King, dst)
}

#[inline]
pub fn pawn(
    board: &Board,
    piece: &Piece,
    src: Coordinate,
    dst: Coordinate,
) -> Result<(), IllegalMove> {
    pawns::validate(board, piece, src, dst)
}

/// Dispatches to the rule for the kind of `piece`
pub fn validate(
    board: &Board,
    piece: &Piece,
    src: Coordinate,
    dst: Coordinate,
) -> Result<(), IllegalMove> {
    match piece.kind() {
        Kind::King => king(board, piece, src, dst),
        Kind::Queen => queen(board, piece, src, dst),
        Kind::Bishop => bishop(board, piece, src, dst),
        Kind::Knight => knight(board, piece, src, dst),
        Kind::Rook => rook(board, piece, src, dst),
        Kind::Pawn => pawn(board, piece, src, dst),
    }
}
