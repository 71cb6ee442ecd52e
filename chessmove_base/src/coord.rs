use derive_more::{Add, Neg};
use std::fmt;
use std::ops;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum CoordinateParseError {
    #[error("unexpected column char {0:?}")]
    UnexpectedColumnChar(char),
    #[error("unexpected row char {0:?}")]
    UnexpectedRowChar(char),
    #[error("row must be positive")]
    ZeroRow,
    #[error("row is too large")]
    RowOverflow,
    #[error("invalid string length")]
    BadLength,
}

/// Offset between two squares, in rows and columns
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Add, Neg)]
pub struct Delta {
    pub rows: i32,
    pub columns: i32,
}

impl Delta {
    pub const fn new(rows: i32, columns: i32) -> Delta {
        Delta { rows, columns }
    }

    pub const fn scaled(self, factor: i32) -> Delta {
        Delta::new(self.rows * factor, self.columns * factor)
    }
}

/// Square on a rectangular board
///
/// Rows and columns are 1-indexed. Any pair of integers forms a valid coordinate; whether it
/// lies on a particular board is decided by the board itself.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Coordinate {
    row: i32,
    column: i32,
}

impl Coordinate {
    pub const fn new(row: i32, column: i32) -> Coordinate {
        Coordinate { row, column }
    }

    pub const fn row(&self) -> i32 {
        self.row
    }

    pub const fn column(&self) -> i32 {
        self.column
    }

    /// Absolute difference between the rows of `self` and `other`
    pub const fn row_distance(&self, other: Coordinate) -> u32 {
        self.row.abs_diff(other.row)
    }

    /// Absolute difference between the columns of `self` and `other`
    pub const fn column_distance(&self, other: Coordinate) -> u32 {
        self.column.abs_diff(other.column)
    }

    /// Signed offset which leads from `self` to `other`
    pub const fn delta_to(&self, other: Coordinate) -> Delta {
        Delta::new(other.row - self.row, other.column - self.column)
    }

    pub const fn shift(self, delta: Delta) -> Coordinate {
        Coordinate::new(self.row + delta.rows, self.column + delta.columns)
    }
}

impl ops::Add<Delta> for Coordinate {
    type Output = Coordinate;

    #[inline]
    fn add(self, delta: Delta) -> Coordinate {
        self.shift(delta)
    }
}

impl ops::Sub<Delta> for Coordinate {
    type Output = Coordinate;

    #[inline]
    fn sub(self, delta: Delta) -> Coordinate {
        self.shift(-delta)
    }
}

impl fmt::Debug for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "Coordinate({}, {})", self.row, self.column)
    }
}

/// Algebraic form: column letter followed by the row number
///
/// Coordinates which have no algebraic form (non-positive, or columns beyond `z`) are printed
/// as `(row,column)`.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        if (1..=26).contains(&self.column) && self.row >= 1 {
            let letter = (b'a' + (self.column - 1) as u8) as char;
            return write!(f, "{}{}", letter, self.row);
        }
        write!(f, "({},{})", self.row, self.column)
    }
}

impl FromStr for Coordinate {
    type Err = CoordinateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        type Error = CoordinateParseError;

        let mut chars = s.chars();
        let column = match chars.next() {
            Some(c @ 'a'..='z') => (u32::from(c) - u32::from('a')) as i32 + 1,
            Some(c) => return Err(Error::UnexpectedColumnChar(c)),
            None => return Err(Error::BadLength),
        };
        let digits = chars.as_str();
        if digits.is_empty() {
            return Err(Error::BadLength);
        }
        let mut row: i32 = 0;
        for c in digits.chars() {
            let digit = c.to_digit(10).ok_or(Error::UnexpectedRowChar(c))?;
            row = row
                .checked_mul(10)
                .and_then(|r| r.checked_add(digit as i32))
                .ok_or(Error::RowOverflow)?;
        }
        if row == 0 {
            return Err(Error::ZeroRow);
        }
        Ok(Coordinate::new(row, column))
    }
}
