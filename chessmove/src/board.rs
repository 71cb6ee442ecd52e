//! Board and related things

use crate::piece::Piece;
use crate::types::Coordinate;

use std::fmt::{self, Display};

use log::debug;
use thiserror::Error;

/// Board editing error
#[derive(Debug, Copy, Clone, Error, Eq, PartialEq)]
pub enum BoardError {
    /// Coordinate lies outside the board
    #[error("square {0} is outside the board")]
    OutOfBounds(Coordinate),
}

/// A square together with the piece to put there
///
/// Used to fill the board with [`Board::reset()`] or [`Board::with_initializers()`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SquareInitializer {
    pub square: Coordinate,
    pub piece: Piece,
}

impl SquareInitializer {
    #[inline]
    pub const fn new(square: Coordinate, piece: Piece) -> SquareInitializer {
        SquareInitializer { square, piece }
    }
}

impl From<(Coordinate, Piece)> for SquareInitializer {
    #[inline]
    fn from((square, piece): (Coordinate, Piece)) -> Self {
        SquareInitializer::new(square, piece)
    }
}

/// Rectangular board with at most one piece on each square
///
/// The extents of the board are set on creation and never change. Squares are addressed with
/// 1-indexed [`Coordinate`]s, so the valid rows are `1..=rows()` and the valid columns are
/// `1..=columns()`. The board cannot hold a piece outside these extents: all the editing functions
/// check the coordinate and return [`BoardError::OutOfBounds`] for the squares outside.
///
/// The board is never modified while checking moves. It is edited only by the code which
/// drives the game.
///
/// # Example
///
/// ```
/// # use chessmove::{Board, Coordinate, Descriptor, Piece, board::PrettyStyle};
/// #
/// let mut b = Board::new(4, 5);
/// b.place_piece_at(Piece::new(Descriptor::WHITE_KING), Coordinate::new(1, 3)).unwrap();
/// b.place_piece_at(Piece::new(Descriptor::BLACK_ROOK), Coordinate::new(4, 1)).unwrap();
///
/// let res = r#"
/// 4|r....
/// 3|.....
/// 2|.....
/// 1|..K..
/// -+-----
///  |abcde
/// "#;
/// assert_eq!(b.pretty(PrettyStyle::Ascii).to_string().trim(), res.trim());
/// assert!(b.place_piece_at(Piece::new(Descriptor::BLACK_KING), Coordinate::new(5, 1)).is_err());
/// ```
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Board {
    rows: u16,
    columns: u16,
    cells: Vec<Option<Piece>>,
}

impl Board {
    /// Number of rows and columns on the standard chess board
    pub const STANDARD_SIZE: u16 = 8;

    /// Returns an empty board with `rows` rows and `columns` columns
    pub fn new(rows: u16, columns: u16) -> Board {
        Board {
            rows,
            columns,
            cells: vec![None; rows as usize * columns as usize],
        }
    }

    /// Returns an empty 8x8 board
    #[inline]
    pub fn standard() -> Board {
        Board::new(Self::STANDARD_SIZE, Self::STANDARD_SIZE)
    }

    /// Returns a board filled with `initializers`
    ///
    /// See [`Board::reset()`] for details.
    pub fn with_initializers<I>(
        rows: u16,
        columns: u16,
        initializers: I,
    ) -> Result<Board, BoardError>
    where
        I: IntoIterator<Item = SquareInitializer>,
    {
        let mut res = Board::new(rows, columns);
        res.reset(initializers)?;
        Ok(res)
    }

    #[inline]
    pub fn rows(&self) -> u16 {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> u16 {
        self.columns
    }

    /// Returns `true` if `c` lies on the board
    #[inline]
    pub fn inside_board(&self, c: Coordinate) -> bool {
        (1..=i32::from(self.rows)).contains(&c.row())
            && (1..=i32::from(self.columns)).contains(&c.column())
    }

    #[inline]
    fn index(&self, c: Coordinate) -> Option<usize> {
        if !self.inside_board(c) {
            return None;
        }
        Some((c.row() - 1) as usize * self.columns as usize + (c.column() - 1) as usize)
    }

    #[inline]
    fn coord(&self, index: usize) -> Coordinate {
        let columns = self.columns as usize;
        Coordinate::new((index / columns) as i32 + 1, (index % columns) as i32 + 1)
    }

    /// Returns the piece on the square `c`
    ///
    /// Squares outside the board are always empty.
    #[inline]
    pub fn piece_at(&self, c: Coordinate) -> Option<&Piece> {
        self.index(c).and_then(|i| self.cells[i].as_ref())
    }

    #[inline]
    pub fn piece_at_mut(&mut self, c: Coordinate) -> Option<&mut Piece> {
        let i = self.index(c)?;
        self.cells[i].as_mut()
    }

    #[inline]
    pub fn is_occupied(&self, c: Coordinate) -> bool {
        self.piece_at(c).is_some()
    }

    /// Puts `piece` on the square `c` and returns the piece which was there before
    pub fn place_piece_at(
        &mut self,
        piece: Piece,
        c: Coordinate,
    ) -> Result<Option<Piece>, BoardError> {
        let i = self.index(c).ok_or(BoardError::OutOfBounds(c))?;
        Ok(self.cells[i].replace(piece))
    }

    /// Removes the piece from the square `c` and returns it
    ///
    /// Returns `None` if the square is empty or lies outside the board.
    pub fn remove_piece_at(&mut self, c: Coordinate) -> Option<Piece> {
        let i = self.index(c)?;
        self.cells[i].take()
    }

    /// Sets the move state of the piece on `c` to "moved"
    ///
    /// Returns `false` if there is no piece on `c`.
    pub fn mark_moved(&mut self, c: Coordinate) -> bool {
        match self.piece_at_mut(c) {
            Some(p) => {
                p.set_has_moved();
                true
            }
            None => false,
        }
    }

    /// Clears the board and puts the pieces from `initializers`
    ///
    /// If two initializers refer to the same square, the latter one wins. If any of the
    /// initializers lies outside the board, the error is returned and the board is left unchanged.
    pub fn reset<I>(&mut self, initializers: I) -> Result<(), BoardError>
    where
        I: IntoIterator<Item = SquareInitializer>,
    {
        let mut cells = vec![None; self.cells.len()];
        let mut count = 0_usize;
        for init in initializers {
            let i = self
                .index(init.square)
                .ok_or(BoardError::OutOfBounds(init.square))?;
            cells[i] = Some(init.piece);
            count += 1;
        }
        self.cells = cells;
        debug!(
            "reset {}x{} board with {} initializers",
            self.rows, self.columns, count
        );
        Ok(())
    }

    /// Iterates over the occupied squares, row by row from the lowest one
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, &Piece)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(i, cell)| cell.as_ref().map(|p| (self.coord(i), p)))
    }

    /// Wraps the board to allow pretty-printing with the given style `Style`
    ///
    /// The resulting wrapper implements [`fmt::Display`], so can be used with
    /// `write!()`, `println!()`, or `ToString::to_string`. Rows are printed from the highest
    /// one, so on the standard board White is at the bottom.
    #[inline]
    pub fn pretty(&self, style: PrettyStyle) -> Pretty<'_> {
        Pretty { board: self, style }
    }
}

impl Default for Board {
    #[inline]
    fn default() -> Board {
        Board::standard()
    }
}

/// Style for [`Board::pretty()`]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PrettyStyle {
    /// Print pieces and frames as ASCII characters
    Ascii,
    /// Print pieces and frames as fancy Unicode characters
    Utf8,
}

/// Wrapper to pretty-print the board
///
/// See docs for [`Board::pretty()`] for more details.
pub struct Pretty<'a> {
    board: &'a Board,
    style: PrettyStyle,
}

fn column_char(column: u16) -> char {
    if (1..=26).contains(&column) {
        (b'a' + (column - 1) as u8) as char
    } else {
        '?'
    }
}

trait StyleTable {
    const HORZ_FRAME: char;
    const VERT_FRAME: char;
    const ANGLE_FRAME: char;
    const EMPTY: char = '.';

    fn piece(p: &Piece) -> char;

    fn fmt(b: &Board, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        let width = b.rows.to_string().len();
        for row in (1..=b.rows).rev() {
            write!(f, "{:>width$}{}", row, Self::VERT_FRAME, width = width)?;
            for column in 1..=b.columns {
                let c = Coordinate::new(i32::from(row), i32::from(column));
                match b.piece_at(c) {
                    Some(p) => write!(f, "{}", Self::piece(p))?,
                    None => write!(f, "{}", Self::EMPTY)?,
                }
            }
            writeln!(f)?;
        }
        for _ in 0..width {
            write!(f, "{}", Self::HORZ_FRAME)?;
        }
        write!(f, "{}", Self::ANGLE_FRAME)?;
        for _ in 0..b.columns {
            write!(f, "{}", Self::HORZ_FRAME)?;
        }
        writeln!(f)?;
        write!(f, "{:width$}{}", "", Self::VERT_FRAME, width = width)?;
        for column in 1..=b.columns {
            write!(f, "{}", column_char(column))?;
        }
        writeln!(f)?;
        Ok(())
    }
}

struct AsciiStyleTable;
struct Utf8StyleTable;

impl StyleTable for AsciiStyleTable {
    const HORZ_FRAME: char = '-';
    const VERT_FRAME: char = '|';
    const ANGLE_FRAME: char = '+';

    fn piece(p: &Piece) -> char {
        p.descriptor().as_char()
    }
}

impl StyleTable for Utf8StyleTable {
    const HORZ_FRAME: char = '─';
    const VERT_FRAME: char = '│';
    const ANGLE_FRAME: char = '┼';

    fn piece(p: &Piece) -> char {
        p.descriptor().as_utf8_char()
    }
}

impl<'a> Display for Pretty<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self.style {
            PrettyStyle::Ascii => AsciiStyleTable::fmt(self.board, f),
            PrettyStyle::Utf8 => Utf8StyleTable::fmt(self.board, f),
        }
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        AsciiStyleTable::fmt(self, f)
    }
}
