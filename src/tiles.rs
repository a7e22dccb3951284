use crate::error::ParseError;
use crate::error::ParseError::{BadChar, BadString, EmptyString};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// The location of a single cell on the board, ie, row and column. This struct is only a reference
/// to a location on the board, and does not contain any other information such as piece placement,
/// etc.
///
/// Row 0 and column 0 are the outer wall ring, so the playable area of a board of width `N` runs
/// from 1 to `N` on both axes. In text notation the column is a letter (`A` = 1) and the row a
/// number, so `"A4"` is row 4, column 1.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tile {
    pub row: u8,
    pub col: u8,
}

impl Tile {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// The tile displaced from this one by `offset`, if that lands on non-negative coordinates.
    /// Does not check the upper bounds of any board.
    pub fn offset(&self, offset: RowColOffset) -> Option<Tile> {
        let row = self.row.checked_add_signed(offset.row)?;
        let col = self.col.checked_add_signed(offset.col)?;
        Some(Tile::new(row, col))
    }

    /// The axis shared by this tile and `other`. Returns `None` if they share no axis, and also
    /// if they are the same tile.
    pub fn common_axis(&self, other: Tile) -> Option<Axis> {
        match (self.row == other.row, self.col == other.col) {
            (true, false) => Some(Axis::Horizontal),
            (false, true) => Some(Axis::Vertical),
            _ => None,
        }
    }
}

impl Debug for Tile {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile(row={}, col={})", self.row, self.col)
    }
}

impl Display for Tile {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match col_to_letter(self.col) {
            Some(letter) => write!(f, "{letter}{}", self.row),
            None => write!(f, "r{}c{}", self.row, self.col),
        }
    }
}

impl FromStr for Tile {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let letter = chars.next().ok_or(EmptyString)?;
        let col = letter_to_col(letter).ok_or(BadChar(letter))?;
        let digits = chars.as_str();
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(BadString(String::from(s)));
        }
        let row = digits.parse::<u8>()?;
        Ok(Tile::new(row, col))
    }
}

impl From<Tile> for (u8, u8) {
    fn from(value: Tile) -> Self {
        (value.row, value.col)
    }
}

impl From<(u8, u8)> for Tile {
    fn from((row, col): (u8, u8)) -> Self {
        Tile::new(row, col)
    }
}

/// Convert a column letter (case-insensitive) to its 1-based column index.
pub fn letter_to_col(letter: char) -> Option<u8> {
    if letter.is_ascii_alphabetic() {
        Some(letter.to_ascii_uppercase() as u8 - b'A' + 1)
    } else {
        None
    }
}

/// Convert a 1-based column index to its letter. Column 0 and anything past `Z` have none.
pub fn col_to_letter(col: u8) -> Option<char> {
    if (1..=26).contains(&col) {
        Some((b'A' + col - 1) as char)
    } else {
        None
    }
}

/// A straight line along which pieces move and are flanked.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub enum Axis {
    /// Along a column (row changes).
    Vertical,
    /// Along a row (column changes).
    Horizontal,
}

impl Axis {
    /// The two unit offsets pointing either way along this axis.
    pub fn unit_offsets(&self) -> [RowColOffset; 2] {
        match self {
            Axis::Vertical => [RowColOffset::new(1, 0), RowColOffset::new(-1, 0)],
            Axis::Horizontal => [RowColOffset::new(0, 1), RowColOffset::new(0, -1)],
        }
    }
}

/// A signed displacement in rows and columns.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub struct RowColOffset {
    pub row: i8,
    pub col: i8,
}

impl RowColOffset {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }
}

/// The four orthogonal unit offsets, in the order down, up, right, left.
pub const ORTHOGONAL: [RowColOffset; 4] = [
    RowColOffset::new(1, 0),
    RowColOffset::new(-1, 0),
    RowColOffset::new(0, 1),
    RowColOffset::new(0, -1),
];
