//! Property-based tests using proptest.

use crate::board::{Board, SquareInitializer};
use crate::legal::{self, IllegalMove};
use crate::piece::Piece;
use crate::types::{Coordinate, Delta, Descriptor};
use proptest::prelude::*;

fn descriptor_strategy() -> impl Strategy<Value = Descriptor> {
    (0..Descriptor::COUNT).prop_map(|i| Descriptor::iter().nth(i).unwrap())
}

/// Strategy for a square on the standard board
fn square_strategy() -> impl Strategy<Value = Coordinate> {
    (1..=8i32, 1..=8i32).prop_map(|(row, column)| Coordinate::new(row, column))
}

/// Strategy for any coordinate, including the ones far outside the board
fn coord_strategy() -> impl Strategy<Value = Coordinate> {
    (-3..=12i32, -3..=12i32).prop_map(|(row, column)| Coordinate::new(row, column))
}

/// Strategy for a random position, some of the pieces already moved
fn board_strategy() -> impl Strategy<Value = Board> {
    prop::collection::vec(
        (square_strategy(), descriptor_strategy(), any::<bool>()),
        0..24,
    )
    .prop_map(|items| {
        let inits = items.into_iter().map(|(square, d, moved)| {
            let mut piece = Piece::new(d);
            if moved {
                piece.set_has_moved();
            }
            SquareInitializer::new(square, piece)
        });
        Board::with_initializers(8, 8, inits).unwrap()
    })
}

fn is_outside(c: Coordinate) -> bool {
    c.row() < 1 || c.row() > 8 || c.column() < 1 || c.column() > 8
}

proptest! {
    /// Property: destinations outside the board are never reachable
    #[test]
    fn prop_outside_rejected(
        board in board_strategy(),
        from in square_strategy(),
        to in coord_strategy(),
    ) {
        prop_assume!(is_outside(to));
        prop_assert!(!legal::can_move(from, to, &board));
        prop_assert_eq!(legal::validate_move(from, to, &board), Err(IllegalMove::OutsideBoard(to)));
    }

    /// Property: a piece never moves onto its own square
    #[test]
    fn prop_null_move_rejected(board in board_strategy(), c in square_strategy()) {
        prop_assert!(!legal::can_move(c, c, &board));
        if let Some(p) = board.piece_at(c) {
            prop_assert!(!p.can_move(c, c, &board));
        }
    }

    /// Property: checks are pure and never modify the board
    #[test]
    fn prop_idempotent(
        board in board_strategy(),
        from in coord_strategy(),
        to in coord_strategy(),
    ) {
        let copy = board.clone();
        let first = legal::validate_move(from, to, &board);
        let second = legal::validate_move(from, to, &board);
        prop_assert_eq!(first, second);
        prop_assert_eq!(legal::can_move(from, to, &board), first.is_ok());
        prop_assert_eq!(&board, &copy);
    }

    /// Property: a move never ends on a piece of the mover's color
    #[test]
    fn prop_no_own_capture(
        board in board_strategy(),
        from in square_strategy(),
        to in square_strategy(),
    ) {
        if let (Some(src), Some(dst)) = (board.piece_at(from), board.piece_at(to)) {
            if src.color() == dst.color() {
                prop_assert!(!legal::can_move(from, to, &board));
            }
        }
    }

    /// Property: knights are never blocked by pieces outside the destination
    #[test]
    fn prop_knight_ignores_blockers(
        board in board_strategy(),
        from in square_strategy(),
        jump in 0..8usize,
    ) {
        const JUMPS: [(i32, i32); 8] =
            [(1, 2), (2, 1), (2, -1), (1, -2), (-1, -2), (-2, -1), (-2, 1), (-1, 2)];
        let (rows, columns) = JUMPS[jump];
        let to = from + Delta::new(rows, columns);
        prop_assume!(!is_outside(to));
        let mut board = board;
        board.place_piece_at(Piece::new(Descriptor::WHITE_KNIGHT), from).unwrap();
        board.remove_piece_at(to);
        prop_assert!(legal::can_move(from, to, &board));
    }
}
