//! Rules engine for King's Escape, a tafl game played on a walled square board. The attacker
//! tries to box in the king; the defender tries to walk the king to one of the castles at the
//! corners of the board.
//!
//! The engine builds the board, checks and executes plays, resolves pincer captures and reports
//! the status of the game. Turn order, input and display are left to the caller; see
//! `src/main.rs` for a minimal text front end.

mod board;
mod cell;
pub mod config;
mod error;
mod game;
mod pieces;
mod play;
pub mod preset;
mod tiles;
mod utils;

pub use crate::{
    board::{parse_layout, Board},
    cell::{Cell, CellType},
    config::{GameConfig, Layout},
    error::{BoardError, ConfigError, IllegalMove, InvalidPlay, ParseError},
    game::{Game, GameStatus},
    pieces::{Piece, PieceType, Player, Side},
    play::{Play, PlayOutcome},
    tiles::{Axis, RowColOffset, Tile},
};
