use crate::error::BoardError;
use crate::error::BoardError::{CannotOccupy, EmptyCell, OccupiedCell};
use crate::pieces::Piece;
use crate::tiles::Tile;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The type of a cell, fixed when the board is built.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CellType {
    Normal,
    Castle,
    HorizontalWall,
    VerticalWall,
}

impl CellType {
    pub fn is_wall(&self) -> bool {
        matches!(self, CellType::HorizontalWall | CellType::VerticalWall)
    }

    /// The character used for an empty cell of this type when rendering the board.
    pub fn glyph(&self) -> char {
        match self {
            CellType::Normal => '.',
            CellType::Castle => '*',
            CellType::HorizontalWall => '-',
            CellType::VerticalWall => '|',
        }
    }
}

/// A single cell of the board. Holds at most one piece.
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub struct Cell {
    cell_type: CellType,
    tile: Tile,
    occupant: Option<Piece>,
}

impl Cell {
    pub(crate) fn new(cell_type: CellType, tile: Tile) -> Self {
        Self { cell_type, tile, occupant: None }
    }

    pub fn cell_type(&self) -> CellType {
        self.cell_type
    }

    /// The cell's position on the board.
    pub fn tile(&self) -> Tile {
        self.tile
    }

    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }

    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    /// The piece on this cell, or [`BoardError::EmptyCell`] if there is none.
    pub fn piece(&self) -> Result<&Piece, BoardError> {
        self.occupant.as_ref().ok_or(EmptyCell(self.tile))
    }

    /// The piece on this cell, if any.
    pub fn occupant(&self) -> Option<&Piece> {
        self.occupant.as_ref()
    }

    /// Put a piece on this cell, recording the cell as the piece's location. Fails if the cell is
    /// occupied or is a wall. Does not check whether the piece's kind may occupy a castle; that is
    /// a rule of movement, checked when validating plays.
    pub fn place_piece(&mut self, mut piece: Piece) -> Result<(), BoardError> {
        if self.is_occupied() {
            return Err(OccupiedCell(self.tile));
        }
        if self.cell_type.is_wall() {
            return Err(CannotOccupy { tile: self.tile, piece_type: piece.piece_type });
        }
        piece.location = Some(self.tile);
        self.occupant = Some(piece);
        Ok(())
    }

    /// Lift the piece off this cell, leaving it empty. The returned piece has no location.
    pub fn take_piece(&mut self) -> Result<Piece, BoardError> {
        let mut piece = self.occupant.take().ok_or(EmptyCell(self.tile))?;
        piece.location = None;
        Ok(piece)
    }

    /// Whether this cell hems in `piece`: true if the cell is anything other than a normal cell,
    /// or holds a piece of the other side. An empty normal cell, or one holding a friendly piece,
    /// never blocks.
    pub fn is_blocking_to(&self, piece: &Piece) -> bool {
        if self.cell_type != CellType::Normal {
            return true;
        }
        match &self.occupant {
            Some(other) => other.side != piece.side,
            None => false,
        }
    }

    /// The character representing this cell when rendering the board.
    pub fn glyph(&self) -> char {
        match &self.occupant {
            Some(piece) => piece.piece_type.glyph(),
            None => self.cell_type.glyph(),
        }
    }
}
