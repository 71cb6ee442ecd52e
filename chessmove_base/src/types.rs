use std::fmt::{self, Display};
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("unexpected color char {0:?}")]
    UnexpectedChar(char),
    #[error("invalid string length")]
    BadLength,
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum DescriptorParseError {
    #[error("unexpected piece char {0:?}")]
    UnexpectedChar(char),
    #[error("invalid string length")]
    BadLength,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    pub const fn inv(&self) -> Color {
        match *self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    pub fn as_char(&self) -> char {
        match *self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }

    pub fn from_char(c: char) -> Option<Color> {
        match c {
            'w' => Some(Color::White),
            'b' => Some(Color::Black),
            _ => None,
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Color::from_char(ch).ok_or(ColorParseError::UnexpectedChar(ch)),
            _ => Err(ColorParseError::BadLength),
        }
    }
}

/// Kind of a chess piece
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Kind {
    King = 0,
    Queen = 1,
    Bishop = 2,
    Knight = 3,
    Rook = 4,
    Pawn = 5,
}

impl Kind {
    pub const COUNT: usize = 6;

    pub const fn index(&self) -> usize {
        *self as u8 as usize
    }

    pub fn iter() -> impl Iterator<Item = Self> {
        [
            Kind::King,
            Kind::Queen,
            Kind::Bishop,
            Kind::Knight,
            Kind::Rook,
            Kind::Pawn,
        ]
        .into_iter()
    }

    pub fn as_char(&self) -> char {
        b"kqbnrp"[self.index()] as char
    }

    pub fn from_char(c: char) -> Option<Kind> {
        match c {
            'k' => Some(Kind::King),
            'q' => Some(Kind::Queen),
            'b' => Some(Kind::Bishop),
            'n' => Some(Kind::Knight),
            'r' => Some(Kind::Rook),
            'p' => Some(Kind::Pawn),
            _ => None,
        }
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        let name = match *self {
            Kind::King => "king",
            Kind::Queen => "queen",
            Kind::Bishop => "bishop",
            Kind::Knight => "knight",
            Kind::Rook => "rook",
            Kind::Pawn => "pawn",
        };
        write!(f, "{}", name)
    }
}

/// Identity of a piece: its color and its kind
///
/// Descriptor is set once when the piece is created and never changes afterwards.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Descriptor {
    color: Color,
    kind: Kind,
}

impl Descriptor {
    pub const WHITE_KING: Descriptor = Descriptor::from_parts(Color::White, Kind::King);
    pub const WHITE_QUEEN: Descriptor = Descriptor::from_parts(Color::White, Kind::Queen);
    pub const WHITE_BISHOP: Descriptor = Descriptor::from_parts(Color::White, Kind::Bishop);
    pub const WHITE_KNIGHT: Descriptor = Descriptor::from_parts(Color::White, Kind::Knight);
    pub const WHITE_ROOK: Descriptor = Descriptor::from_parts(Color::White, Kind::Rook);
    pub const WHITE_PAWN: Descriptor = Descriptor::from_parts(Color::White, Kind::Pawn);
    pub const BLACK_KING: Descriptor = Descriptor::from_parts(Color::Black, Kind::King);
    pub const BLACK_QUEEN: Descriptor = Descriptor::from_parts(Color::Black, Kind::Queen);
    pub const BLACK_BISHOP: Descriptor = Descriptor::from_parts(Color::Black, Kind::Bishop);
    pub const BLACK_KNIGHT: Descriptor = Descriptor::from_parts(Color::Black, Kind::Knight);
    pub const BLACK_ROOK: Descriptor = Descriptor::from_parts(Color::Black, Kind::Rook);
    pub const BLACK_PAWN: Descriptor = Descriptor::from_parts(Color::Black, Kind::Pawn);

    pub const COUNT: usize = 2 * Kind::COUNT;

    pub const fn from_parts(color: Color, kind: Kind) -> Descriptor {
        Descriptor { color, kind }
    }

    pub const fn color(&self) -> Color {
        self.color
    }

    pub const fn kind(&self) -> Kind {
        self.kind
    }

    pub const fn index(&self) -> usize {
        self.color as usize * Kind::COUNT + self.kind.index()
    }

    pub fn iter() -> impl Iterator<Item = Self> {
        [Color::White, Color::Black]
            .into_iter()
            .flat_map(|c| Kind::iter().map(move |k| Descriptor::from_parts(c, k)))
    }

    pub fn as_char(&self) -> char {
        let c = self.kind.as_char();
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    pub fn as_utf8_char(&self) -> char {
        ['♔', '♕', '♗', '♘', '♖', '♙', '♚', '♛', '♝', '♞', '♜', '♟'][self.index()]
    }

    pub fn from_char(c: char) -> Option<Self> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let kind = Kind::from_char(c.to_ascii_lowercase())?;
        Some(Descriptor::from_parts(color, kind))
    }
}

impl fmt::Debug for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "Descriptor({})", self.as_char())
    }
}

impl Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Descriptor {
    type Err = DescriptorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => {
                Descriptor::from_char(ch).ok_or(DescriptorParseError::UnexpectedChar(ch))
            }
            _ => Err(DescriptorParseError::BadLength),
        }
    }
}
