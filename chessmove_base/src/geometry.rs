use crate::coord::{Coordinate, Delta};
use crate::types::Color;

/// Column of the rook taking part in castling towards the lower columns
pub const CASTLING_LOW_COLUMN: i32 = 1;

/// Column of the rook taking part in castling towards the higher columns
pub const CASTLING_HIGH_COLUMN: i32 = 8;

/// Number of columns the king travels while castling
pub const CASTLING_KING_STEP: u32 = 2;

/// One of the eight unit steps a sliding piece can take
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    /// "Up" means towards the higher rows, "right" means towards the higher columns.
    pub const fn delta(&self) -> Delta {
        match *self {
            Direction::Up => Delta::new(1, 0),
            Direction::Down => Delta::new(-1, 0),
            Direction::Left => Delta::new(0, -1),
            Direction::Right => Delta::new(0, 1),
            Direction::UpLeft => Delta::new(1, -1),
            Direction::UpRight => Delta::new(1, 1),
            Direction::DownLeft => Delta::new(-1, -1),
            Direction::DownRight => Delta::new(-1, 1),
        }
    }

    pub const fn is_diagonal(&self) -> bool {
        matches!(
            *self,
            Direction::UpLeft | Direction::UpRight | Direction::DownLeft | Direction::DownRight
        )
    }

    pub const fn is_vertical(&self) -> bool {
        matches!(*self, Direction::Up | Direction::Down)
    }

    pub const fn is_horizontal(&self) -> bool {
        matches!(*self, Direction::Left | Direction::Right)
    }

    /// Returns the direction of a straight or diagonal line from `src` to `dst`
    ///
    /// Returns `None` if the squares are equal or don't lie on a common line.
    pub fn between(src: Coordinate, dst: Coordinate) -> Option<Direction> {
        let d = src.delta_to(dst);
        let straight = d.rows == 0 || d.columns == 0;
        if d == Delta::default() || (!straight && d.rows.abs() != d.columns.abs()) {
            return None;
        }
        Some(match (d.rows.signum(), d.columns.signum()) {
            (1, 0) => Direction::Up,
            (-1, 0) => Direction::Down,
            (0, -1) => Direction::Left,
            (0, 1) => Direction::Right,
            (1, -1) => Direction::UpLeft,
            (1, 1) => Direction::UpRight,
            (-1, -1) => Direction::DownLeft,
            (-1, 1) => Direction::DownRight,
            _ => unreachable!(),
        })
    }
}

/// Row offset of a single pawn step for color `c`
///
/// White pawns advance towards the higher rows, black ones towards the lower rows.
pub const fn pawn_forward_delta(c: Color) -> i32 {
    match c {
        Color::White => 1,
        Color::Black => -1,
    }
}

/// Side of the board where castling happens
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CastlingSide {
    /// Towards the lower columns
    Low,
    /// Towards the higher columns
    High,
}

impl CastlingSide {
    pub const fn rook_column(&self) -> i32 {
        match *self {
            CastlingSide::Low => CASTLING_LOW_COLUMN,
            CastlingSide::High => CASTLING_HIGH_COLUMN,
        }
    }

    pub const fn direction(&self) -> Direction {
        match *self {
            CastlingSide::Low => Direction::Left,
            CastlingSide::High => Direction::Right,
        }
    }

    /// Detects the castling side from the king's move
    ///
    /// Returns `None` unless the king stays on its row and travels exactly two columns.
    pub fn from_king_move(src: Coordinate, dst: Coordinate) -> Option<CastlingSide> {
        if src.row_distance(dst) != 0 || src.column_distance(dst) != CASTLING_KING_STEP {
            return None;
        }
        if dst.column() > src.column() {
            Some(CastlingSide::High)
        } else {
            Some(CastlingSide::Low)
        }
    }

    pub const fn rook_home(&self, king: Coordinate) -> Coordinate {
        Coordinate::new(king.row(), self.rook_column())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_between() {
        let c = Coordinate::new(4, 4);
        for (row, column, dir) in [
            (8, 4, Direction::Up),
            (1, 4, Direction::Down),
            (4, 1, Direction::Left),
            (4, 7, Direction::Right),
            (6, 2, Direction::UpLeft),
            (7, 7, Direction::UpRight),
            (1, 1, Direction::DownLeft),
            (3, 5, Direction::DownRight),
        ] {
            assert_eq!(Direction::between(c, Coordinate::new(row, column)), Some(dir));
        }
        assert_eq!(Direction::between(c, c), None);
        assert_eq!(Direction::between(c, Coordinate::new(6, 5)), None);
        assert_eq!(Direction::between(c, Coordinate::new(5, 6)), None);
    }

    #[test]
    fn test_direction_kinds() {
        use Direction::*;

        let c = Coordinate::new(4, 4);
        for d in [Up, Down, Left, Right, UpLeft, UpRight, DownLeft, DownRight] {
            let delta = d.delta();
            let diagonal = delta.rows.abs() == delta.columns.abs();
            assert_eq!(d.is_vertical(), delta.columns == 0, "{:?}", d);
            assert_eq!(d.is_horizontal(), delta.rows == 0, "{:?}", d);
            assert_eq!(d.is_diagonal(), diagonal, "{:?}", d);
            assert_eq!(Direction::between(c, c + delta), Some(d));
        }
    }

    #[test]
    fn test_castling_side() {
        let king = Coordinate::new(1, 5);
        assert_eq!(
            CastlingSide::from_king_move(king, Coordinate::new(1, 7)),
            Some(CastlingSide::High)
        );
        assert_eq!(
            CastlingSide::from_king_move(king, Coordinate::new(1, 3)),
            Some(CastlingSide::Low)
        );
        assert_eq!(
            CastlingSide::from_king_move(king, Coordinate::new(1, 6)),
            None
        );
        assert_eq!(
            CastlingSide::from_king_move(king, Coordinate::new(2, 7)),
            None
        );
        assert_eq!(CastlingSide::High.rook_home(king), Coordinate::new(1, 8));
        assert_eq!(
            CastlingSide::Low.rook_home(Coordinate::new(8, 5)),
            Coordinate::new(8, 1)
        );
    }

    #[test]
    fn test_pawn_forward() {
        assert_eq!(pawn_forward_delta(Color::White), 1);
        assert_eq!(pawn_forward_delta(Color::Black), -1);
    }
}
