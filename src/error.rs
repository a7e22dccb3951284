use crate::pieces::PieceType;
use crate::tiles::Tile;
use std::num::ParseIntError;
use thiserror::Error;

/// Errors raised when parsing tiles, plays or board layouts from strings.
#[derive(Error, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// Tried to parse an empty string.
    #[error("empty string")]
    EmptyString,
    /// Encountered an unexpected character in a string.
    #[error("unexpected character '{0}'")]
    BadChar(char),
    /// Could not parse an integer from a string. This variant wraps the [`ParseIntError`] that was
    /// returned when trying to parse.
    #[error("bad integer: {0}")]
    BadInt(ParseIntError),
    /// A layout row did not describe the expected number of cells. The given `usize` is the
    /// actual number of cells described.
    #[error("layout row describes {0} cells")]
    BadLineLen(usize),
    /// A layout did not contain the expected number of rows. The given `usize` is the actual
    /// number of rows.
    #[error("layout has {0} rows")]
    BadLineCount(usize),
    /// A generic error type where the given string could not be parsed for some reason.
    #[error("could not parse \"{0}\"")]
    BadString(String),
}

impl From<ParseIntError> for ParseError {
    fn from(value: ParseIntError) -> Self {
        Self::BadInt(value)
    }
}

/// Misuse of the board API: reading an empty cell, filling an occupied one, or addressing a cell
/// that does not exist.
#[derive(Error, Debug, Eq, PartialEq, Copy, Clone)]
pub enum BoardError {
    #[error("cell {0} is empty")]
    EmptyCell(Tile),
    #[error("cell {0} is already occupied")]
    OccupiedCell(Tile),
    #[error("({row}, {col}) is outside the board")]
    OutOfBounds { row: u8, col: u8 },
    /// The cell's type does not admit this kind of piece (walls admit none).
    #[error("{piece_type:?} cannot be placed on {tile}")]
    CannotOccupy { tile: Tile, piece_type: PieceType },
    /// A second king was placed; the tile is where the existing one stands.
    #[error("there is already a king on {0}")]
    ExtraKing(Tile),
}

/// An invalid game configuration.
#[derive(Error, Debug, Eq, PartialEq)]
pub enum ConfigError {
    #[error("board width must be odd, got {0}")]
    EvenWidth(u8),
    #[error("board width must be at least 3, got {0}")]
    TooNarrow(u8),
    #[error("board width must be at most 25, got {0}")]
    TooWide(u8),
    #[error("attacking and defending players must be different")]
    SamePlayer,
    #[error("layout has no king")]
    MissingKing,
    #[error("layout has more than one king")]
    ExtraKing,
    #[error("bad layout: {0}")]
    BadLayout(#[from] ParseError),
    #[error("bad placement: {0}")]
    BadPlacement(#[from] BoardError),
}

/// The reason a play is illegal.
#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub enum InvalidPlay {
    /// The game is already over.
    GameOver,
    /// The origin or destination is not on the board.
    OutOfBounds,
    /// There is no piece to move at the origin.
    NoPiece,
    /// The piece being moved does not belong to the acting player.
    NotYourPiece,
    /// The destination is occupied, or is a cell this piece may not occupy.
    IllegalDestination,
    /// Origin and destination are not on the same row or column (or are the same cell).
    NotStraightLine,
    /// A piece stands between origin and destination.
    PathBlocked,
}

/// A play that was rejected. Carries the kind of failure and a message suitable for showing to
/// the player before asking for another move.
#[derive(Error, Debug, Eq, PartialEq, Clone)]
#[error("{reason}")]
pub struct IllegalMove {
    pub kind: InvalidPlay,
    pub reason: String,
}

impl IllegalMove {
    pub fn new(kind: InvalidPlay, reason: impl Into<String>) -> Self {
        Self { kind, reason: reason.into() }
    }
}

impl From<BoardError> for IllegalMove {
    fn from(value: BoardError) -> Self {
        let kind = match value {
            BoardError::EmptyCell(_) => InvalidPlay::NoPiece,
            BoardError::OccupiedCell(_)
            | BoardError::CannotOccupy { .. }
            | BoardError::ExtraKing(_) => InvalidPlay::IllegalDestination,
            BoardError::OutOfBounds { .. } => InvalidPlay::OutOfBounds,
        };
        Self::new(kind, value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use crate::error::{BoardError, IllegalMove, InvalidPlay};
    use crate::tiles::Tile;

    #[test]
    fn test_board_error_translation() {
        let e: IllegalMove = BoardError::EmptyCell(Tile::new(3, 2)).into();
        assert_eq!(e.kind, InvalidPlay::NoPiece);
        assert_eq!(e.to_string(), "cell B3 is empty");

        let e: IllegalMove = BoardError::OutOfBounds { row: 14, col: 2 }.into();
        assert_eq!(e.kind, InvalidPlay::OutOfBounds);
        assert_eq!(e.to_string(), "(14, 2) is outside the board");

        let e: IllegalMove = BoardError::OccupiedCell(Tile::new(1, 1)).into();
        assert_eq!(e.kind, InvalidPlay::IllegalDestination);

        let e: IllegalMove = BoardError::ExtraKing(Tile::new(6, 6)).into();
        assert_eq!(e.kind, InvalidPlay::IllegalDestination);
        assert_eq!(e.to_string(), "there is already a king on F6");
    }
}
