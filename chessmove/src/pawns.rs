use crate::board::Board;
use crate::geometry;
use crate::legal::IllegalMove;
use crate::piece::Piece;
use crate::types::{Coordinate, Delta, Kind};

/// Shape of a pawn move relative to the pawn's color
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Shape {
    Single,
    Capture,
    Double,
    Other,
}

impl Shape {
    pub fn of(piece: &Piece, src: Coordinate, dst: Coordinate) -> Shape {
        let step = forward(piece);
        let d = src.delta_to(dst);
        if d == step {
            Shape::Single
        } else if d == step.scaled(2) {
            Shape::Double
        } else if d.rows == step.rows && d.columns.abs() == 1 {
            Shape::Capture
        } else {
            Shape::Other
        }
    }
}

fn forward(piece: &Piece) -> Delta {
    Delta::new(geometry::pawn_forward_delta(piece.color()), 0)
}

/// One step forward onto an empty square
pub fn single(board: &Board, dst: Coordinate) -> Result<(), IllegalMove> {
    if board.is_occupied(dst) {
        return Err(IllegalMove::PawnBlocked(dst));
    }
    Ok(())
}

/// One step diagonally forward, only onto an opponent's piece
pub fn capture(board: &Board, piece: &Piece, dst: Coordinate) -> Result<(), IllegalMove> {
    match board.piece_at(dst) {
        Some(p) if p.color() == piece.color().inv() => Ok(()),
        Some(_) => Err(IllegalMove::OwnPieceAtDestination(dst)),
        None => Err(IllegalMove::NothingToCapture(dst)),
    }
}

/// Two steps forward from an unmoved pawn, both squares must be empty
pub fn double(
    board: &Board,
    piece: &Piece,
    src: Coordinate,
    dst: Coordinate,
) -> Result<(), IllegalMove> {
    if piece.has_moved() {
        return Err(IllegalMove::PawnAlreadyMoved);
    }
    let mid = src + forward(piece);
    if board.is_occupied(mid) {
        return Err(IllegalMove::PathBlocked(mid));
    }
    single(board, dst)
}

pub fn validate(
    board: &Board,
    piece: &Piece,
    src: Coordinate,
    dst: Coordinate,
) -> Result<(), IllegalMove> {
    match Shape::of(piece, src, dst) {
        Shape::Single => single(board, dst),
        Shape::Capture => capture(board, piece, dst),
        Shape::Double => double(board, piece, src, dst),
        Shape::Other => Err(IllegalMove::WrongShape(Kind::Pawn)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Descriptor;

    #[test]
    fn test_shape() {
        let wp = Piece::new(Descriptor::WHITE_PAWN);
        let bp = Piece::new(Descriptor::BLACK_PAWN);
        let c = Coordinate::new(4, 4);
        assert_eq!(Shape::of(&wp, c, Coordinate::new(5, 4)), Shape::Single);
        assert_eq!(Shape::of(&wp, c, Coordinate::new(5, 3)), Shape::Capture);
        assert_eq!(Shape::of(&wp, c, Coordinate::new(5, 5)), Shape::Capture);
        assert_eq!(Shape::of(&wp, c, Coordinate::new(6, 4)), Shape::Double);
        assert_eq!(Shape::of(&wp, c, Coordinate::new(3, 4)), Shape::Other);
        assert_eq!(Shape::of(&wp, c, Coordinate::new(6, 5)), Shape::Other);

        assert_eq!(Shape::of(&bp, c, Coordinate::new(3, 4)), Shape::Single);
        assert_eq!(Shape::of(&bp, c, Coordinate::new(3, 5)), Shape::Capture);
        assert_eq!(Shape::of(&bp, c, Coordinate::new(2, 4)), Shape::Double);
        assert_eq!(Shape::of(&bp, c, Coordinate::new(5, 4)), Shape::Other);
    }

    #[test]
    fn test_double_blocked() {
        let mut b = Board::standard();
        let wp = Piece::new(Descriptor::WHITE_PAWN);
        let src = Coordinate::new(2, 5);
        let dst = Coordinate::new(4, 5);
        b.place_piece_at(wp, src).unwrap();
        assert_eq!(double(&b, &wp, src, dst), Ok(()));

        b.place_piece_at(Piece::new(Descriptor::BLACK_KNIGHT), Coordinate::new(3, 5)).unwrap();
        assert_eq!(
            double(&b, &wp, src, dst),
            Err(IllegalMove::PathBlocked(Coordinate::new(3, 5)))
        );

        b.remove_piece_at(Coordinate::new(3, 5));
        b.place_piece_at(Piece::new(Descriptor::BLACK_KNIGHT), dst).unwrap();
        assert_eq!(
            double(&b, &wp, src, dst),
            Err(IllegalMove::PawnBlocked(dst))
        );

        let mut moved = wp;
        moved.set_has_moved();
        assert_eq!(
            double(&b, &moved, src, dst),
            Err(IllegalMove::PawnAlreadyMoved)
        );
    }

    #[test]
    fn test_capture() {
        let mut b = Board::standard();
        let bp = Piece::new(Descriptor::BLACK_PAWN);
        let dst = Coordinate::new(5, 4);
        assert_eq!(
            capture(&b, &bp, dst),
            Err(IllegalMove::NothingToCapture(dst))
        );
        b.place_piece_at(Piece::new(Descriptor::WHITE_PAWN), dst).unwrap();
        assert_eq!(capture(&b, &bp, dst), Ok(()));
        b.place_piece_at(Piece::new(Descriptor::BLACK_QUEEN), dst).unwrap();
        assert_eq!(
            capture(&b, &bp, dst),
            Err(IllegalMove::OwnPieceAtDestination(dst))
        );
    }
}
