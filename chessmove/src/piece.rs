//! Pieces and their move history

use crate::board::Board;
use crate::legal::{self, IllegalMove};
use crate::types::{Color, Coordinate, Descriptor, Kind};

use std::fmt;

/// Whether the piece has ever moved
///
/// The only transition is from [`MoveState::Unmoved`] to [`MoveState::Moved`]. It is never
/// reverted.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MoveState {
    #[default]
    Unmoved,
    Moved,
}

impl MoveState {
    /// Returns the state after the piece made a move
    #[inline]
    pub const fn advance(self) -> MoveState {
        MoveState::Moved
    }

    #[inline]
    pub const fn is_moved(&self) -> bool {
        matches!(*self, MoveState::Moved)
    }
}

/// Chess piece
///
/// The piece consists of an immutable [`Descriptor`] and a [`MoveState`] latch. The latch is
/// set by the code which drives the game, after it accepts a move made by this piece. Pawn
/// double step and castling are only available to pieces which haven't moved.
///
/// # Example
///
/// ```
/// # use chessmove::{Board, Coordinate, Descriptor, Piece};
/// #
/// let mut board = Board::standard();
/// let mut pawn = Piece::new(Descriptor::WHITE_PAWN);
/// board.place_piece_at(pawn, Coordinate::new(2, 5)).unwrap();
///
/// assert!(pawn.can_move(Coordinate::new(2, 5), Coordinate::new(4, 5), &board));
///
/// pawn.set_has_moved();
/// assert!(!pawn.can_move(Coordinate::new(2, 5), Coordinate::new(4, 5), &board));
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    descriptor: Descriptor,
    state: MoveState,
}

impl Piece {
    /// Creates a piece which hasn't moved yet
    #[inline]
    pub const fn new(descriptor: Descriptor) -> Piece {
        Piece {
            descriptor,
            state: MoveState::Unmoved,
        }
    }

    #[inline]
    pub const fn descriptor(&self) -> Descriptor {
        self.descriptor
    }

    #[inline]
    pub const fn color(&self) -> Color {
        self.descriptor.color()
    }

    #[inline]
    pub const fn kind(&self) -> Kind {
        self.descriptor.kind()
    }

    #[inline]
    pub const fn state(&self) -> MoveState {
        self.state
    }

    #[inline]
    pub const fn has_moved(&self) -> bool {
        self.state.is_moved()
    }

    /// Records that the piece has moved. Once set, it cannot be cleared.
    #[inline]
    pub fn set_has_moved(&mut self) {
        self.state = self.state.advance();
    }

    /// Returns `true` if this piece, standing on `from`, may move to `to` on `board`
    ///
    /// The piece stored on `board` at `from` must have the same descriptor as `self`. The move
    /// state of `self` decides whether pawn double step and castling are available.
    ///
    /// This function never fails: every kind of illegal request yields `false`. Use
    /// [`Piece::validate_move()`] to learn why the move was rejected.
    #[inline]
    pub fn can_move(&self, from: Coordinate, to: Coordinate, board: &Board) -> bool {
        legal::check(Some(self), from, to, board)
    }

    /// Same as [`Piece::can_move()`], but returns the reason of rejection
    pub fn validate_move(
        &self,
        from: Coordinate,
        to: Coordinate,
        board: &Board,
    ) -> Result<(), IllegalMove> {
        legal::validate(Some(self), from, to, board)
    }
}

impl From<Descriptor> for Piece {
    #[inline]
    fn from(descriptor: Descriptor) -> Self {
        Piece::new(descriptor)
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self.state {
            MoveState::Unmoved => write!(f, "Piece({})", self.descriptor),
            MoveState::Moved => write!(f, "Piece({}, moved)", self.descriptor),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}", self.descriptor)
    }
}
