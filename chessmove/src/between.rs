use crate::board::Board;
use crate::geometry::Direction;
use crate::leap;
use crate::types::{Color, Coordinate};

/// Outcome of casting a ray from the source square
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Ray {
    /// The destination is reached and can be taken
    Open,
    /// The destination holds a piece of the mover's color
    OwnPiece,
    /// A piece stands on the given intermediate square
    Blocked(Coordinate),
    /// The destination doesn't lie on the ray
    Missed,
}

/// Iterates over the squares strictly between `src` and `dst` along `dir`
///
/// `dst` must be reachable from `src` by repeated steps in `dir`, otherwise the iterator
/// stops at the board edge.
pub fn strict(
    board: &Board,
    src: Coordinate,
    dst: Coordinate,
    dir: Direction,
) -> impl Iterator<Item = Coordinate> + '_ {
    let step = dir.delta();
    let mut cur = src;
    std::iter::from_fn(move || {
        cur = cur + step;
        if cur == dst || !board.inside_board(cur) {
            return None;
        }
        Some(cur)
    })
}

/// Returns the first occupied square strictly between `src` and `dst` along `dir`
#[inline]
pub fn first_blocker(
    board: &Board,
    src: Coordinate,
    dst: Coordinate,
    dir: Direction,
) -> Option<Coordinate> {
    strict(board, src, dst, dir).find(|&c| board.is_occupied(c))
}

/// Casts a ray from `src` towards `dst` along `dir` for a piece of color `color`
///
/// The destination is tested first: if it holds a piece of `color`, the move is rejected
/// right away. Otherwise every intermediate square must be empty.
pub fn slide(board: &Board, src: Coordinate, dst: Coordinate, dir: Direction, color: Color) -> Ray {
    if Direction::between(src, dst) != Some(dir) {
        return Ray::Missed;
    }
    if !leap::is_destination_open(board, dst, color) {
        return Ray::OwnPiece;
    }
    match first_blocker(board, src, dst, dir) {
        Some(c) => Ray::Blocked(c),
        None => Ray::Open,
    }
}

fn slide_along(
    board: &Board,
    src: Coordinate,
    dst: Coordinate,
    color: Color,
    along: fn(&Direction) -> bool,
) -> Ray {
    match Direction::between(src, dst) {
        Some(dir) if along(&dir) => slide(board, src, dst, dir, color),
        _ => Ray::Missed,
    }
}

/// Slides up or down along the column
#[inline]
pub fn vertical(board: &Board, src: Coordinate, dst: Coordinate, color: Color) -> Ray {
    slide_along(board, src, dst, color, Direction::is_vertical)
}

/// Slides left or right along the row
#[inline]
pub fn horizontal(board: &Board, src: Coordinate, dst: Coordinate, color: Color) -> Ray {
    slide_along(board, src, dst, color, Direction::is_horizontal)
}

#[inline]
pub fn diagonal(board: &Board, src: Coordinate, dst: Coordinate, color: Color) -> Ray {
    slide_along(board, src, dst, color, Direction::is_diagonal)
}

/// Rook lines: vertical or horizontal
#[inline]
pub fn line(board: &Board, src: Coordinate, dst: Coordinate, color: Color) -> Ray {
    match vertical(board, src, dst, color) {
        Ray::Missed => horizontal(board, src, dst, color),
        res => res,
    }
}
