use std::fmt::{Display, Formatter, Write};

use crate::cell::{Cell, CellType};
use crate::config::{validate_width, Layout};
use crate::error::BoardError::{CannotOccupy, EmptyCell, OccupiedCell, OutOfBounds};
use crate::error::ParseError::{BadChar, BadLineCount, BadLineLen, EmptyString};
use crate::error::{BoardError, ConfigError, ParseError};
use crate::pieces::{Piece, PieceType};
use crate::tiles::{col_to_letter, Tile, ORTHOGONAL};

/// The grid of cells. A board of width `N` is `(N+2)×(N+2)`: an `N×N` playable area wrapped in
/// one ring of walls.
///
/// * The wall ring is made of horizontal walls along the top and bottom rows and vertical walls
///   down the left and right columns (including the four outer corners).
/// * Four castles replace wall cells in the top and bottom rows, at columns 1 and `N`, so they
///   sit just outside the corners of the playable area.
/// * The centre of the playable area is also a castle: the king's home.
///
/// Topology never changes once built. Only the occupants of cells do.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Board {
    width: u8,
    cells: Vec<Cell>,
}

impl Board {
    /// Build an empty board whose playable area is `width` cells across.
    pub fn new(width: u8) -> Result<Self, ConfigError> {
        validate_width(width)?;
        let side_len = width + 2;
        let center = width.div_ceil(2);
        let mut cells = Vec::with_capacity(side_len as usize * side_len as usize);
        for row in 0..side_len {
            for col in 0..side_len {
                let edge_row = row == 0 || row == side_len - 1;
                let edge_col = col == 0 || col == side_len - 1;
                let cell_type = if edge_col {
                    CellType::VerticalWall
                } else if edge_row && (col == 1 || col == width) {
                    CellType::Castle
                } else if edge_row {
                    CellType::HorizontalWall
                } else if row == center && col == center {
                    CellType::Castle
                } else {
                    CellType::Normal
                };
                cells.push(Cell::new(cell_type, Tile::new(row, col)));
            }
        }
        Ok(Self { width, cells })
    }

    /// Build a board and place the pieces of the given layout on it.
    pub fn with_layout(width: u8, layout: &Layout) -> Result<Self, ConfigError> {
        let mut board = Self::new(width)?;
        for (tile, piece_type) in layout.pieces(width)? {
            board.place_new_piece(tile, piece_type)?;
        }
        Ok(board)
    }

    /// Width of the playable area.
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Number of cells along each side of the full grid, walls included.
    pub fn side_len(&self) -> u8 {
        self.width + 2
    }

    /// The centre castle, where the king starts.
    pub fn center(&self) -> Tile {
        let c = self.width.div_ceil(2);
        Tile::new(c, c)
    }

    /// The four castles in the wall ring.
    pub fn corner_castles(&self) -> [Tile; 4] {
        let last = self.side_len() - 1;
        [
            Tile::new(0, 1),
            Tile::new(0, self.width),
            Tile::new(last, 1),
            Tile::new(last, self.width),
        ]
    }

    pub fn tile_in_bounds(&self, tile: Tile) -> bool {
        let r = 0..self.side_len();
        r.contains(&tile.row) && r.contains(&tile.col)
    }

    /// Whether the tile is inside the playable area (not on the wall ring).
    pub fn tile_playable(&self, tile: Tile) -> bool {
        let r = 1..=self.width;
        r.contains(&tile.row) && r.contains(&tile.col)
    }

    fn index(&self, tile: Tile) -> Result<usize, BoardError> {
        if self.tile_in_bounds(tile) {
            Ok(tile.row as usize * self.side_len() as usize + tile.col as usize)
        } else {
            Err(OutOfBounds { row: tile.row, col: tile.col })
        }
    }

    /// The cell at the given tile, or [`BoardError::OutOfBounds`].
    pub fn cell(&self, tile: Tile) -> Result<&Cell, BoardError> {
        let i = self.index(tile)?;
        Ok(&self.cells[i])
    }

    /// The cell at the given row and column, or [`BoardError::OutOfBounds`].
    pub fn get_cell(&self, row: u8, col: u8) -> Result<&Cell, BoardError> {
        self.cell(Tile::new(row, col))
    }

    pub(crate) fn cell_mut(&mut self, tile: Tile) -> Result<&mut Cell, BoardError> {
        let i = self.index(tile)?;
        Ok(&mut self.cells[i])
    }

    pub fn get_piece(&self, tile: Tile) -> Option<&Piece> {
        self.cell(tile).ok().and_then(Cell::occupant)
    }

    pub fn tile_occupied(&self, tile: Tile) -> bool {
        self.get_piece(tile).is_some()
    }

    /// Place a new piece of the given kind, refusing cells that kind may not occupy.
    pub(crate) fn place_new_piece(
        &mut self,
        tile: Tile,
        piece_type: PieceType,
    ) -> Result<(), BoardError> {
        let cell = self.cell_mut(tile)?;
        if !piece_type.can_occupy(cell.cell_type()) {
            return Err(CannotOccupy { tile, piece_type });
        }
        cell.place_piece(Piece::new(piece_type))
    }

    pub(crate) fn take_piece(&mut self, tile: Tile) -> Result<Piece, BoardError> {
        self.cell_mut(tile)?.take_piece()
    }

    /// Move the piece at `from` to `to`. Both cells are checked before anything is touched, so on
    /// error the board is unchanged. Does not check whether the move is legal.
    pub(crate) fn move_piece(&mut self, from: Tile, to: Tile) -> Result<(), BoardError> {
        if self.cell(from)?.is_empty() {
            return Err(EmptyCell(from));
        }
        let dest = self.cell(to)?;
        if dest.is_occupied() {
            return Err(OccupiedCell(to));
        }
        if dest.cell_type().is_wall() {
            let piece_type = self.cell(from)?.piece()?.piece_type;
            return Err(CannotOccupy { tile: to, piece_type });
        }
        let piece = self.take_piece(from)?;
        self.cell_mut(to)?.place_piece(piece)
    }

    /// The orthogonal neighbours of a tile that lie on the board. Fewer than four are returned
    /// for tiles on the outer ring.
    pub fn neighbors(&self, tile: Tile) -> Vec<Tile> {
        ORTHOGONAL
            .iter()
            .filter_map(|offset| tile.offset(*offset))
            .filter(|t| self.tile_in_bounds(*t))
            .collect()
    }

    /// The tiles strictly between two tiles on a common row or column. Empty if the tiles are
    /// adjacent, identical or share no axis. The result does not depend on the order of the
    /// arguments.
    pub fn tiles_between(&self, t1: Tile, t2: Tile) -> Vec<Tile> {
        let mut tiles: Vec<Tile> = vec![];
        let (r1, c1, r2, c2) = (t1.row, t1.col, t2.row, t2.col);
        if r1 == r2 {
            let col_range = if c1 > c2 { (c2 + 1)..c1 } else { (c1 + 1)..c2 };
            for col in col_range {
                tiles.push(Tile::new(r1, col))
            }
        } else if c1 == c2 {
            let row_range = if r1 > r2 { (r2 + 1)..r1 } else { (r1 + 1)..r2 };
            for row in row_range {
                tiles.push(Tile::new(row, c1))
            }
        }
        tiles
    }

    /// Iterate over every cell, row by row, walls included.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Iterate over the rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.side_len() as usize)
    }

    /// Every occupied tile with the kind of piece on it, row by row.
    pub fn occupants(&self) -> Vec<(Tile, PieceType)> {
        self.cells
            .iter()
            .filter_map(|c| c.occupant().map(|p| (c.tile(), p.piece_type)))
            .collect()
    }

    pub fn count_pieces(&self, piece_type: PieceType) -> usize {
        self.cells
            .iter()
            .filter(|c| c.occupant().is_some_and(|p| p.piece_type == piece_type))
            .count()
    }

    /// The tile the king stands on, if there is a king on the board.
    pub fn find_king(&self) -> Option<Tile> {
        self.cells
            .iter()
            .find(|c| c.occupant().is_some_and(Piece::is_king))
            .map(Cell::tile)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("   ")?;
        for col in 0..self.side_len() {
            let label = if self.tile_playable(Tile::new(1, col)) {
                col_to_letter(col)
            } else {
                None
            };
            f.write_char(label.unwrap_or(' '))?;
        }
        f.write_char('\n')?;
        for (r, row) in self.rows().enumerate() {
            if self.tile_playable(Tile::new(r as u8, 1)) {
                write!(f, "{r:>2} ")?;
            } else {
                f.write_str("   ")?;
            }
            for cell in row {
                f.write_char(cell.glyph())?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}

/// Parse a layout string describing the pieces on the playable area of a board of the given
/// width. Rows run top to bottom and are separated by `/`. Within a row, a number is a run of that
/// many empty cells, `t` is an attacker, `T` a defender and `K` the king. So on a 3-wide board,
/// `"1t1/tKt/1t1"` is a king surrounded by four attackers.
pub fn parse_layout(s: &str, width: u8) -> Result<Vec<(Tile, PieceType)>, ParseError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(EmptyString);
    }
    let mut pieces: Vec<(Tile, PieceType)> = vec![];
    let lines: Vec<&str> = s.split('/').collect();
    if lines.len() != width as usize {
        return Err(BadLineCount(lines.len()));
    }
    for (r, line) in lines.iter().enumerate() {
        let row = r as u8 + 1;
        let mut n_empty = 0usize;
        let mut col = 0usize;
        for chr in line.chars() {
            if let Some(d) = chr.to_digit(10) {
                n_empty = n_empty * 10 + d as usize;
                if col + n_empty > width as usize {
                    return Err(BadLineLen(col + n_empty));
                }
                continue;
            }
            col += n_empty;
            n_empty = 0;
            let piece_type = PieceType::try_from(chr).map_err(BadChar)?;
            col += 1;
            if col > width as usize {
                return Err(BadLineLen(col));
            }
            pieces.push((Tile::new(row, col as u8), piece_type));
        }
        col += n_empty;
        if col != width as usize {
            return Err(BadLineLen(col));
        }
    }
    Ok(pieces)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::board::{parse_layout, Board};
    use crate::cell::CellType;
    use crate::config::Layout;
    use crate::error::{BoardError, ConfigError, ParseError};
    use crate::hashset;
    use crate::pieces::PieceType;
    use crate::preset::boards;
    use crate::tiles::Tile;

    /// Assert that the given vector does not contain duplicates, and contains the same items as
    /// a comparison set (ignoring order).
    fn check_tile_vec(actual: Vec<Tile>, expected: HashSet<Tile>) {
        let actual_set: HashSet<Tile> = actual.iter().copied().collect();
        assert_eq!(actual_set.len(), actual.len(), "Vec contains duplicates");
        assert_eq!(actual_set, expected);
    }

    #[test]
    fn test_topology() {
        let board = Board::new(11).unwrap();
        assert_eq!(board.side_len(), 13);
        assert_eq!(board.iter().count(), 169);
        assert_eq!(board.center(), Tile::new(6, 6));

        let castles: HashSet<Tile> = board
            .iter()
            .filter(|c| c.cell_type() == CellType::Castle)
            .map(|c| c.tile())
            .collect();
        assert_eq!(
            castles,
            hashset!(
                Tile::new(0, 1),
                Tile::new(0, 11),
                Tile::new(12, 1),
                Tile::new(12, 11),
                Tile::new(6, 6)
            )
        );

        for cell in board.iter() {
            let Tile { row, col } = cell.tile();
            let expected = if castles.contains(&cell.tile()) {
                CellType::Castle
            } else if col == 0 || col == 12 {
                CellType::VerticalWall
            } else if row == 0 || row == 12 {
                CellType::HorizontalWall
            } else {
                CellType::Normal
            };
            assert_eq!(cell.cell_type(), expected, "unexpected type at {:?}", cell.tile());
            assert!(cell.is_empty());
        }
    }

    #[test]
    fn test_coordinates() {
        for width in [3, 7, 11, 25] {
            let board = Board::new(width).unwrap();
            for row in 0..board.side_len() {
                for col in 0..board.side_len() {
                    assert_eq!(board.get_cell(row, col).unwrap().tile(), Tile::new(row, col));
                }
            }
            let last = board.side_len();
            assert_eq!(
                board.get_cell(last, 0),
                Err(BoardError::OutOfBounds { row: last, col: 0 })
            );
            assert_eq!(
                board.get_cell(1, last),
                Err(BoardError::OutOfBounds { row: 1, col: last })
            );
        }
        let rows: Vec<usize> = Board::new(5).unwrap().rows().map(|r| r.len()).collect();
        assert_eq!(rows, vec![7; 7]);
    }

    #[test]
    fn test_bad_width() {
        assert_eq!(Board::new(10), Err(ConfigError::EvenWidth(10)));
        assert_eq!(Board::new(1), Err(ConfigError::TooNarrow(1)));
    }

    #[test]
    fn test_neighbors() {
        let board = Board::new(7).unwrap();
        check_tile_vec(
            board.neighbors(Tile::new(0, 0)),
            hashset!(Tile::new(0, 1), Tile::new(1, 0)),
        );
        check_tile_vec(
            board.neighbors(Tile::new(8, 4)),
            hashset!(Tile::new(7, 4), Tile::new(8, 3), Tile::new(8, 5)),
        );
        check_tile_vec(
            board.neighbors(Tile::new(3, 2)),
            hashset!(Tile::new(2, 2), Tile::new(4, 2), Tile::new(3, 1), Tile::new(3, 3)),
        );
    }

    #[test]
    fn test_tiles_between() {
        let board = Board::new(7).unwrap();
        let b = board.tiles_between(Tile::new(2, 2), Tile::new(2, 5));
        check_tile_vec(b, hashset!(Tile::new(2, 3), Tile::new(2, 4)));

        let b = board.tiles_between(Tile::new(1, 3), Tile::new(4, 3));
        check_tile_vec(b, hashset!(Tile::new(2, 3), Tile::new(3, 3)));

        assert!(board.tiles_between(Tile::new(1, 1), Tile::new(3, 3)).is_empty());
        assert!(board.tiles_between(Tile::new(1, 1), Tile::new(1, 1)).is_empty());
        assert!(board.tiles_between(Tile::new(1, 1), Tile::new(1, 2)).is_empty());

        for (a, b) in [
            (Tile::new(1, 4), Tile::new(6, 4)),
            (Tile::new(5, 1), Tile::new(5, 7)),
            (Tile::new(0, 1), Tile::new(3, 1)),
        ] {
            let forward: HashSet<Tile> = board.tiles_between(a, b).into_iter().collect();
            let backward: HashSet<Tile> = board.tiles_between(b, a).into_iter().collect();
            assert_eq!(forward, backward);
        }
    }

    #[test]
    fn test_move_piece() {
        let mut board = Board::new(7).unwrap();
        board.place_new_piece(Tile::new(2, 2), PieceType::Attacker).unwrap();
        board.place_new_piece(Tile::new(2, 5), PieceType::Defender).unwrap();
        let before = board.clone();

        assert_eq!(
            board.move_piece(Tile::new(2, 2), Tile::new(2, 5)),
            Err(BoardError::OccupiedCell(Tile::new(2, 5)))
        );
        assert_eq!(
            board.move_piece(Tile::new(3, 3), Tile::new(3, 5)),
            Err(BoardError::EmptyCell(Tile::new(3, 3)))
        );
        assert_eq!(
            board.move_piece(Tile::new(2, 2), Tile::new(2, 0)),
            Err(BoardError::CannotOccupy { tile: Tile::new(2, 0), piece_type: PieceType::Attacker })
        );
        assert_eq!(board, before);

        assert!(board.move_piece(Tile::new(2, 2), Tile::new(6, 2)).is_ok());
        assert!(!board.tile_occupied(Tile::new(2, 2)));
        assert_eq!(
            board.get_piece(Tile::new(6, 2)).and_then(|p| p.location()),
            Some(Tile::new(6, 2))
        );
    }

    #[test]
    fn test_place_new_piece() {
        let mut board = Board::new(7).unwrap();
        assert_eq!(
            board.place_new_piece(Tile::new(4, 4), PieceType::Defender),
            Err(BoardError::CannotOccupy { tile: Tile::new(4, 4), piece_type: PieceType::Defender })
        );
        assert!(board.place_new_piece(Tile::new(4, 4), PieceType::King).is_ok());
        assert_eq!(board.find_king(), Some(Tile::new(4, 4)));
        assert_eq!(
            board.place_new_piece(Tile::new(0, 3), PieceType::Attacker),
            Err(BoardError::CannotOccupy { tile: Tile::new(0, 3), piece_type: PieceType::Attacker })
        );
        assert_eq!(
            board.place_new_piece(Tile::new(9, 3), PieceType::Attacker),
            Err(BoardError::OutOfBounds { row: 9, col: 3 })
        );
    }

    #[test]
    fn test_parse_layout() {
        let pieces = parse_layout("1t1/tKt/1t1", 3).unwrap();
        assert_eq!(pieces.len(), 5);
        assert!(pieces.contains(&(Tile::new(2, 2), PieceType::King)));
        assert!(pieces.contains(&(Tile::new(1, 2), PieceType::Attacker)));
        assert!(pieces.contains(&(Tile::new(2, 3), PieceType::Attacker)));

        let pieces = parse_layout(boards::CLASSIC, 11).unwrap();
        assert_eq!(pieces.len(), 37);

        assert_eq!(parse_layout("", 3), Err(ParseError::EmptyString));
        assert_eq!(parse_layout("1x1/3/3", 3), Err(ParseError::BadChar('x')));
        assert_eq!(parse_layout("4/3/3", 3), Err(ParseError::BadLineLen(4)));
        assert_eq!(parse_layout("tttt/3/3", 3), Err(ParseError::BadLineLen(4)));
        assert_eq!(parse_layout("2/3/3", 3), Err(ParseError::BadLineLen(2)));
        assert_eq!(parse_layout("3/3/3/3", 3), Err(ParseError::BadLineCount(4)));
        assert_eq!(parse_layout("1t12/3/3", 3), Err(ParseError::BadLineLen(14)));
        assert_eq!(
            parse_layout("99999999999999999999999t/3/3", 3),
            Err(ParseError::BadLineLen(9))
        );
        let tall = vec!["3"; 300].join("/");
        assert_eq!(parse_layout(&tall, 3), Err(ParseError::BadLineCount(300)));
    }

    #[test]
    fn test_with_layout() {
        let board = Board::with_layout(11, &Layout::Standard).unwrap();
        assert_eq!(board.count_pieces(PieceType::Attacker), 16);
        assert_eq!(board.count_pieces(PieceType::Defender), 8);
        assert_eq!(board.count_pieces(PieceType::King), 1);

        let board = Board::with_layout(11, &Layout::Fen(boards::CLASSIC.to_string())).unwrap();
        assert_eq!(board.count_pieces(PieceType::Attacker), 24);
        assert_eq!(board.count_pieces(PieceType::Defender), 12);

        // An attacker on the centre castle.
        assert_eq!(
            Board::with_layout(3, &Layout::Fen("3/1t1/K2".to_string())),
            Err(ConfigError::BadPlacement(BoardError::CannotOccupy {
                tile: Tile::new(2, 2),
                piece_type: PieceType::Attacker
            }))
        );
    }

    #[test]
    fn test_display() {
        let board = Board::with_layout(3, &Layout::Fen("1t1/tKt/1t1".to_string())).unwrap();
        let expected = "    ABC \n   |*-*|\n 1 |.t.|\n 2 |tKt|\n 3 |.t.|\n   |*-*|\n";
        assert_eq!(board.to_string(), expected);
    }
}
