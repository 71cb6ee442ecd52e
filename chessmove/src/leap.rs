use crate::board::Board;
use crate::types::{Color, Coordinate};

/// Returns `false` if `dst` holds a piece of color `color`
///
/// Empty squares and squares with the opponent's pieces are open.
#[inline]
pub fn is_destination_open(board: &Board, dst: Coordinate, color: Color) -> bool {
    board.piece_at(dst).map_or(true, |p| p.color() != color)
}

/// Returns `true` if `src` and `dst` are one knight jump apart
#[inline]
pub fn is_knight_shape(src: Coordinate, dst: Coordinate) -> bool {
    matches!(
        (src.row_distance(dst), src.column_distance(dst)),
        (2, 1) | (1, 2)
    )
}

/// Returns `true` if `dst` is one of the eight squares around `src`
#[inline]
pub fn is_king_shape(src: Coordinate, dst: Coordinate) -> bool {
    src != dst && src.row_distance(dst) <= 1 && src.column_distance(dst) <= 1
}

/// Knight move test. Intermediate squares are never examined.
#[inline]
pub fn knight(board: &Board, src: Coordinate, dst: Coordinate, color: Color) -> bool {
    is_knight_shape(src, dst) && is_destination_open(board, dst, color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::Piece;
    use crate::types::Descriptor;

    #[test]
    fn test_destination() {
        let mut b = Board::standard();
        let c = Coordinate::new(3, 3);
        assert!(is_destination_open(&b, c, Color::White));
        b.place_piece_at(Piece::new(Descriptor::BLACK_BISHOP), c).unwrap();
        assert!(is_destination_open(&b, c, Color::White));
        assert!(!is_destination_open(&b, c, Color::Black));
    }

    #[test]
    fn test_knight_shape() {
        let src = Coordinate::new(4, 4);
        let mut count = 0;
        for row in 1..=8 {
            for column in 1..=8 {
                if is_knight_shape(src, Coordinate::new(row, column)) {
                    count += 1;
                }
            }
        }
        assert_eq!(count, 8);
        let (b1, c3) = (Coordinate::new(1, 2), Coordinate::new(3, 3));
        assert!(is_knight_shape(b1, c3));
        assert!(is_knight_shape(c3, Coordinate::new(2, 1)));
        assert!(!is_knight_shape(b1, Coordinate::new(3, 4)));
    }

    #[test]
    fn test_king_shape() {
        let src = Coordinate::new(4, 4);
        assert!(is_king_shape(src, Coordinate::new(5, 5)));
        assert!(is_king_shape(src, Coordinate::new(3, 4)));
        assert!(!is_king_shape(src, src));
        assert!(!is_king_shape(src, Coordinate::new(6, 4)));
        assert!(!is_king_shape(src, Coordinate::new(4, 2)));
    }

    #[test]
    fn test_knight_jumps() {
        let mut b = Board::standard();
        let src = Coordinate::new(3, 3);
        for (row, column) in [(2, 2), (2, 3), (3, 2), (4, 3), (4, 4), (3, 4), (2, 4)] {
            b.place_piece_at(Piece::new(Descriptor::WHITE_PAWN), Coordinate::new(row, column))
                .unwrap();
        }
        assert!(knight(&b, src, Coordinate::new(2, 1), Color::White));
        assert!(knight(&b, src, Coordinate::new(5, 4), Color::White));
        b.place_piece_at(Piece::new(Descriptor::WHITE_PAWN), Coordinate::new(2, 1)).unwrap();
        assert!(!knight(&b, src, Coordinate::new(2, 1), Color::White));
        assert!(knight(&b, src, Coordinate::new(2, 1), Color::Black));
    }
}
