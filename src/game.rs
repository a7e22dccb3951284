use crate::board::Board;
use crate::cell::Cell;
use crate::config::GameConfig;
use crate::error::InvalidPlay::{
    GameOver, IllegalDestination, NoPiece, NotStraightLine, NotYourPiece, OutOfBounds, PathBlocked,
};
use crate::error::{BoardError, ConfigError, IllegalMove};
use crate::pieces::{Piece, PieceType, Player, Side};
use crate::play::{Play, PlayOutcome};
use crate::tiles::{Axis, Tile};
use log::{debug, info};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The current status of the game.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    /// Game is still ongoing.
    InProgress,
    /// The king has reached a corner castle.
    DefenderWon,
    /// The king is boxed in on all sides.
    AttackerWon,
    /// Reserved. No rule currently ends the game in a draw.
    Draw,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        matches!(self, GameStatus::AttackerWon | GameStatus::DefenderWon)
    }
}

/// A struct representing a single game: the board with its pieces, and the two players.
///
/// The game holds no turn order. Alternating between the players is left to the caller, which
/// passes the acting player in each [`Play`].
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    attacker: Player,
    defender: Player,
    /// Where the king stands. Kept in step with the board by every method that moves or removes
    /// pieces.
    king: Option<Tile>,
}

impl Game {
    /// Create a new [`Game`] on an 11-wide board with the standard opening.
    pub fn new(attacker: Player, defender: Player) -> Result<Self, ConfigError> {
        Self::with_config(attacker, defender, &GameConfig::default())
    }

    /// Create a new [`Game`] with the standard opening on a board of the given width.
    pub fn with_width(attacker: Player, defender: Player, width: u8) -> Result<Self, ConfigError> {
        Self::with_config(attacker, defender, &GameConfig::with_width(width))
    }

    pub fn with_config(
        attacker: Player,
        defender: Player,
        config: &GameConfig,
    ) -> Result<Self, ConfigError> {
        config.validate(&attacker, &defender)?;
        let board = Board::with_layout(config.width, &config.layout)?;
        let king = board.find_king();
        Ok(Self { board, attacker, defender, king })
    }

    /// Read-only view of the board, for rendering.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn width(&self) -> u8 {
        self.board.width()
    }

    pub fn attacker(&self) -> &Player {
        &self.attacker
    }

    pub fn defender(&self) -> &Player {
        &self.defender
    }

    pub fn player(&self, side: Side) -> &Player {
        match side {
            Side::Attacker => &self.attacker,
            Side::Defender => &self.defender,
        }
    }

    /// The side the given player is playing, or `None` if they are not in this game.
    pub fn side_of(&self, player: &Player) -> Option<Side> {
        if *player == self.attacker {
            Some(Side::Attacker)
        } else if *player == self.defender {
            Some(Side::Defender)
        } else {
            None
        }
    }

    /// The cell at the given row and column, or [`BoardError::OutOfBounds`].
    pub fn get_cell(&self, row: u8, col: u8) -> Result<&Cell, BoardError> {
        self.board.get_cell(row, col)
    }

    /// The tile the king stands on, if there is a king.
    pub fn king(&self) -> Option<Tile> {
        self.king
    }

    pub fn count_pieces(&self, piece_type: PieceType) -> usize {
        self.board.count_pieces(piece_type)
    }

    /// Build a play between two `(row, col)` coordinates, checking that both are on the board.
    pub fn make_play(
        &self,
        from: (u8, u8),
        to: (u8, u8),
        player: &Player,
    ) -> Result<Play, BoardError> {
        let from = self.board.get_cell(from.0, from.1)?.tile();
        let to = self.board.get_cell(to.0, to.1)?.tile();
        Ok(Play::new(from, to, player.clone()))
    }

    /// Put a new piece on the board, eg to set up a position. Refuses cells the piece may not
    /// occupy, and a second king.
    pub fn place_piece(&mut self, tile: Tile, piece_type: PieceType) -> Result<(), BoardError> {
        if let (PieceType::King, Some(king)) = (piece_type, self.king) {
            return Err(BoardError::ExtraKing(king));
        }
        self.board.place_new_piece(tile, piece_type)?;
        if piece_type == PieceType::King {
            self.king = Some(tile);
        }
        Ok(())
    }

    /// Take a piece off the board.
    pub fn remove_piece(&mut self, tile: Tile) -> Result<Piece, BoardError> {
        let piece = self.board.take_piece(tile)?;
        if piece.is_king() {
            self.king = None;
        }
        Ok(piece)
    }

    /// Check whether a play is legal, without changing anything. The checks run in a fixed order
    /// and the first failure is reported:
    ///
    /// 1. the game is not over and both tiles are on the board;
    /// 2. there is a piece at the origin;
    /// 3. it belongs to the acting player;
    /// 4. the destination is empty and of a type the piece may occupy;
    /// 5. origin and destination share exactly one of row or column;
    /// 6. every cell strictly between them is empty.
    pub fn check_play(&self, play: &Play) -> Result<(), IllegalMove> {
        let status = self.status();
        if status.is_over() {
            return Err(IllegalMove::new(GameOver, format!("The game is over ({status:?})")));
        }
        for tile in [play.from, play.to] {
            if !self.board.tile_in_bounds(tile) {
                return Err(IllegalMove::new(
                    OutOfBounds,
                    format!("({}, {}) is outside the board", tile.row, tile.col),
                ));
            }
        }
        let origin = self.board.cell(play.from)?;
        let dest = self.board.cell(play.to)?;
        let piece = origin.occupant().ok_or_else(|| {
            IllegalMove::new(NoPiece, format!("There is no piece on {}", play.from))
        })?;
        if self.side_of(&play.player) != Some(piece.side) {
            return Err(IllegalMove::new(
                NotYourPiece,
                format!("{} is not allowed to move the {} on {}", play.player, piece, play.from),
            ));
        }
        if dest.is_occupied() {
            return Err(IllegalMove::new(
                IllegalDestination,
                format!("{} is already occupied", play.to),
            ));
        }
        if !piece.can_occupy(dest.cell_type()) {
            return Err(IllegalMove::new(
                IllegalDestination,
                format!("The {} cannot go on a {:?} cell", piece, dest.cell_type()),
            ));
        }
        if play.from.common_axis(play.to).is_none() {
            return Err(IllegalMove::new(
                NotStraightLine,
                format!("{} to {} is not a straight line", play.from, play.to),
            ));
        }
        if let Some(t) = self
            .board
            .tiles_between(play.from, play.to)
            .into_iter()
            .find(|t| self.board.tile_occupied(*t))
        {
            return Err(IllegalMove::new(PathBlocked, format!("The path is blocked at {t}")));
        }
        Ok(())
    }

    pub fn is_legal(&self, play: &Play) -> bool {
        self.check_play(play).is_ok()
    }

    /// Every tile the piece at `tile` could legally move to if `player` were to move it. Empty if
    /// there is no such piece or it belongs to someone else.
    pub fn legal_destinations(&self, tile: Tile, player: &Player) -> Vec<Tile> {
        let mut dests: Vec<Tile> = vec![];
        for axis in [Axis::Vertical, Axis::Horizontal] {
            for step in axis.unit_offsets() {
                let mut t = tile;
                while let Some(next) = t.offset(step) {
                    if !self.board.tile_in_bounds(next) || self.board.tile_occupied(next) {
                        break;
                    }
                    t = next;
                    let play = Play::new(tile, t, player.clone());
                    if self.is_legal(&play) {
                        dests.push(t);
                    }
                }
            }
        }
        dests
    }

    /// Execute a play: move the piece, then remove any pieces it captures. Illegal plays are
    /// rejected with the board left exactly as it was.
    pub fn execute(&mut self, play: &Play) -> Result<PlayOutcome, IllegalMove> {
        if let Err(e) = self.check_play(play) {
            debug!("{} tried {play}: {e}", play.player);
            return Err(e);
        }
        self.board.move_piece(play.from, play.to)?;
        if self.king == Some(play.from) {
            self.king = Some(play.to);
        }
        debug!("{} played {play}", play.player);

        let captures = self.get_captures(play.to);
        for t in &captures {
            self.board.take_piece(*t)?;
            debug!("captured piece on {t}");
        }

        let status = self.status();
        if status.is_over() {
            info!("game over after {play}: {status:?}");
        }
        Ok(PlayOutcome { captures, status })
    }

    /// The tiles of pieces captured by the piece that has just arrived at `killer`.
    ///
    /// A piece next to the killer is captured if, along its row or its column, both neighbouring
    /// cells are blocking to it and one of them is the killer's. The king is never captured this
    /// way. Neighbours off the edge of the grid are ignored rather than counted as blocking.
    pub fn get_captures(&self, killer: Tile) -> Vec<Tile> {
        let mut captures: Vec<Tile> = vec![];
        for n in self.board.neighbors(killer) {
            let Some(victim) = self.board.get_piece(n) else {
                continue;
            };
            if victim.is_king() {
                continue;
            }
            if [Axis::Vertical, Axis::Horizontal]
                .into_iter()
                .any(|axis| self.pinned_along(n, victim, killer, axis))
            {
                captures.push(n);
            }
        }
        captures
    }

    /// Whether `victim`, standing on `tile`, is hemmed in along `axis` with the killer's cell at
    /// one end.
    fn pinned_along(&self, tile: Tile, victim: &Piece, killer: Tile, axis: Axis) -> bool {
        let ends: Vec<&Cell> = axis
            .unit_offsets()
            .iter()
            .filter_map(|offset| tile.offset(*offset))
            .filter_map(|t| self.board.cell(t).ok())
            .collect();
        ends.iter().all(|c| c.is_blocking_to(victim))
            && ends.iter().any(|c| c.is_occupied() && c.tile() == killer)
    }

    /// The status of the game, worked out from the board.
    ///
    /// * The defender has won if the king stands on a castle other than its home in the centre.
    /// * The attacker has won if every neighbouring cell of the king is blocking to it.
    ///
    /// A game without a king is always in progress.
    pub fn status(&self) -> GameStatus {
        let Some(king_tile) = self.king else {
            return GameStatus::InProgress;
        };
        let Some(king) = self.board.get_piece(king_tile) else {
            return GameStatus::InProgress;
        };
        if self.board.corner_castles().contains(&king_tile) {
            return GameStatus::DefenderWon;
        }
        let boxed_in = self
            .board
            .neighbors(king_tile)
            .into_iter()
            .filter_map(|t| self.board.cell(t).ok())
            .all(|c| c.is_blocking_to(king));
        if boxed_in {
            GameStatus::AttackerWon
        } else {
            GameStatus::InProgress
        }
    }

    pub fn is_over(&self) -> bool {
        self.status().is_over()
    }
}
