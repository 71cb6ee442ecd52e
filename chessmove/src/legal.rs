//! Move legality checks
//!
//! A move is checked in the following order:
//!
//! - both squares must lie on the board;
//! - the squares must differ;
//! - there must be a piece on the source square, and if the caller names the moving piece, its
//!   descriptor must match the one on the board;
//! - finally, the rule for the kind of the moving piece decides. A named mover brings its own
//!   move state; otherwise the state of the piece on the board is used.
//!
//! The checks don't consider whether the move leaves the mover's own king under attack, and
//! there is no notion of the side to move. The board is never modified.

use crate::board::Board;
use crate::castling::CastlingError;
use crate::piece::Piece;
use crate::rules;
use crate::types::{Coordinate, Descriptor, Kind};

use log::trace;
use thiserror::Error;

/// Reason why the move is illegal
#[derive(Debug, Copy, Clone, Error, Eq, PartialEq)]
pub enum IllegalMove {
    /// Source or destination lies outside the board
    #[error("square {0} is outside the board")]
    OutsideBoard(Coordinate),
    /// Source and destination are the same square
    #[error("piece cannot stay on its square")]
    NullMove,
    /// No piece on the source square
    #[error("no piece on {0}")]
    EmptyOrigin(Coordinate),
    /// The piece on the source square differs from the one that is moving
    #[error("expected {expected:?} on the source square, found {found:?}")]
    PieceMismatch {
        expected: Descriptor,
        found: Descriptor,
    },
    /// Destination holds a piece of the mover's color
    #[error("square {0} is occupied by own piece")]
    OwnPieceAtDestination(Coordinate),
    /// The piece cannot move this way
    #[error("{0} cannot move this way")]
    WrongShape(Kind),
    /// A piece stands between the source and the destination
    #[error("path is blocked on {0}")]
    PathBlocked(Coordinate),
    /// Pawn tries to capture on an empty square
    #[error("nothing to capture on {0}")]
    NothingToCapture(Coordinate),
    /// Pawn tries to advance onto an occupied square
    #[error("pawn cannot advance onto occupied square {0}")]
    PawnBlocked(Coordinate),
    /// Pawn tries to make a double step after it has moved
    #[error("pawn has already moved")]
    PawnAlreadyMoved,
    /// Castling is not available
    #[error("bad castling: {0}")]
    Castling(#[from] CastlingError),
}

pub(crate) fn validate(
    mover: Option<&Piece>,
    from: Coordinate,
    to: Coordinate,
    board: &Board,
) -> Result<(), IllegalMove> {
    if !board.inside_board(to) {
        return Err(IllegalMove::OutsideBoard(to));
    }
    if !board.inside_board(from) {
        return Err(IllegalMove::OutsideBoard(from));
    }
    if from == to {
        return Err(IllegalMove::NullMove);
    }
    let occupant = board.piece_at(from).ok_or(IllegalMove::EmptyOrigin(from))?;
    let piece = match mover {
        Some(mover) if mover.descriptor() != occupant.descriptor() => {
            return Err(IllegalMove::PieceMismatch {
                expected: mover.descriptor(),
                found: occupant.descriptor(),
            });
        }
        Some(mover) => mover,
        None => occupant,
    };
    rules::validate(board, piece, from, to)
}

pub(crate) fn check(
    mover: Option<&Piece>,
    from: Coordinate,
    to: Coordinate,
    board: &Board,
) -> bool {
    match validate(mover, from, to, board) {
        Ok(()) => true,
        Err(e) => {
            trace!("move {} -> {} rejected: {}", from, to, e);
            false
        }
    }
}

/// Returns `true` if the piece standing on `from` may move to `to`
///
/// Same as [`Piece::can_move()`](crate::Piece::can_move), but takes whatever piece is on `from`
/// as the moving one.
#[inline]
pub fn can_move(from: Coordinate, to: Coordinate, board: &Board) -> bool {
    check(None, from, to, board)
}

/// Same as [`can_move()`], but returns the reason of rejection
#[inline]
pub fn validate_move(from: Coordinate, to: Coordinate, board: &Board) -> Result<(), IllegalMove> {
    validate(None, from, to, board)
}
