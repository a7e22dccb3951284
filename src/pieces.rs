use crate::cell::CellType;
use crate::tiles::Tile;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// The two sides of the game. The attacking side tries to surround the king; the defending side
/// tries to bring the king to a castle.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Side {
    Attacker,
    Defender,
}

impl Side {
    pub fn other(&self) -> Self {
        match self {
            Side::Attacker => Side::Defender,
            Side::Defender => Side::Attacker,
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Attacker => f.write_str("Attacker"),
            Side::Defender => f.write_str("Defender"),
        }
    }
}

/// A participant in a game. Players are compared by name, so the two players of a game must have
/// different names.
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Player {
    pub name: String,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// The different kinds of piece.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceType {
    Attacker,
    Defender,
    King,
}

impl PieceType {
    /// The side that owns pieces of this kind.
    pub fn side(&self) -> Side {
        match self {
            PieceType::Attacker => Side::Attacker,
            PieceType::Defender | PieceType::King => Side::Defender,
        }
    }

    /// Whether a piece of this kind may stand on a cell of the given type. Only the king may
    /// occupy a castle; nothing may occupy a wall.
    pub fn can_occupy(&self, cell_type: CellType) -> bool {
        match self {
            PieceType::Attacker | PieceType::Defender => cell_type == CellType::Normal,
            PieceType::King => matches!(cell_type, CellType::Normal | CellType::Castle),
        }
    }

    /// The character used for this kind of piece in layout strings and board rendering.
    pub fn glyph(&self) -> char {
        match self {
            PieceType::Attacker => 't',
            PieceType::Defender => 'T',
            PieceType::King => 'K',
        }
    }
}

impl TryFrom<char> for PieceType {
    type Error = char;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            't' => Ok(PieceType::Attacker),
            'T' => Ok(PieceType::Defender),
            'K' => Ok(PieceType::King),
            other => Err(other),
        }
    }
}

/// A single piece. The owner never changes. `location` is a handle back to the cell the piece
/// currently stands on, and is only ever written by [`crate::Cell::place_piece`] and
/// [`crate::Cell::take_piece`].
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub struct Piece {
    pub piece_type: PieceType,
    pub side: Side,
    pub(crate) location: Option<Tile>,
}

impl Piece {
    pub fn new(piece_type: PieceType) -> Self {
        Self { piece_type, side: piece_type.side(), location: None }
    }

    pub fn attacker() -> Self {
        Self::new(PieceType::Attacker)
    }

    pub fn defender() -> Self {
        Self::new(PieceType::Defender)
    }

    pub fn king() -> Self {
        Self::new(PieceType::King)
    }

    pub fn is_king(&self) -> bool {
        self.piece_type == PieceType::King
    }

    pub fn can_occupy(&self, cell_type: CellType) -> bool {
        self.piece_type.can_occupy(cell_type)
    }

    pub fn owned_by(&self, side: Side) -> bool {
        self.side == side
    }

    /// The tile this piece is standing on, or `None` if it is off the board.
    pub fn location(&self) -> Option<Tile> {
        self.location
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.piece_type)
    }
}
