//! Game configuration: board width and the starting layout of the pieces.

use crate::board::parse_layout;
use crate::error::ConfigError;
use crate::pieces::{PieceType, Player};
use crate::tiles::Tile;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Board width used when none is given.
pub const DEFAULT_WIDTH: u8 = 11;

/// Smallest board width with a distinct centre and corners.
pub const MIN_WIDTH: u8 = 3;

/// Largest board width. Columns are addressed by letter, and the right-hand wall column of the
/// widest board is `Z`.
pub const MAX_WIDTH: u8 = 25;

/// How the pieces are arranged at the start of a game.
#[derive(Eq, PartialEq, Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Layout {
    /// The standard opening, generated for the board width. See [`standard_layout`].
    #[default]
    Standard,
    /// No pieces at all.
    Empty,
    /// A layout string covering the playable area, in the format described at
    /// [`parse_layout`].
    Fen(String),
}

impl Layout {
    /// The pieces this layout places on a board of the given width, with their tiles.
    pub fn pieces(&self, width: u8) -> Result<Vec<(Tile, PieceType)>, ConfigError> {
        match self {
            Layout::Standard => Ok(standard_layout(width)),
            Layout::Empty => Ok(vec![]),
            Layout::Fen(s) => {
                let pieces = parse_layout(s, width)?;
                match pieces.iter().filter(|(_, p)| *p == PieceType::King).count() {
                    0 => Err(ConfigError::MissingKing),
                    1 => Ok(pieces),
                    _ => Err(ConfigError::ExtraKing),
                }
            }
        }
    }
}

/// The parameters of a single game.
#[derive(Eq, PartialEq, Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Width of the playable area. Must be odd and between [`MIN_WIDTH`] and [`MAX_WIDTH`].
    pub width: u8,
    pub layout: Layout,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { width: DEFAULT_WIDTH, layout: Layout::Standard }
    }
}

impl GameConfig {
    pub fn new(width: u8, layout: Layout) -> Self {
        Self { width, layout }
    }

    pub fn with_width(width: u8) -> Self {
        Self { width, ..Self::default() }
    }

    /// Check the width and the two players. The layout is checked when it is placed.
    pub fn validate(&self, attacker: &Player, defender: &Player) -> Result<(), ConfigError> {
        validate_width(self.width)?;
        if attacker == defender {
            return Err(ConfigError::SamePlayer);
        }
        Ok(())
    }
}

/// Check that a board of the given width can be built.
pub fn validate_width(width: u8) -> Result<(), ConfigError> {
    if width < MIN_WIDTH {
        Err(ConfigError::TooNarrow(width))
    } else if width > MAX_WIDTH {
        Err(ConfigError::TooWide(width))
    } else if width % 2 == 0 {
        Err(ConfigError::EvenWidth(width))
    } else {
        Ok(())
    }
}

/// Generate the standard opening for a board of the given width. With `c` the centre row and
/// column:
///
/// * the king stands on the centre;
/// * defenders stand one and two cells from the centre along its row and column;
/// * attackers stand on the three cells of each edge centred on row or column `c`, and on the
///   cell one step in from each edge along row or column `c`.
///
/// A cell that is already taken or lies outside the playable area is skipped, so on small boards
/// some pieces are dropped. On an 11-wide board this is 16 attackers, 8 defenders and the king.
pub fn standard_layout(width: u8) -> Vec<(Tile, PieceType)> {
    let n = width as i16;
    let c = (n + 1) / 2;
    let mut candidates: Vec<((i16, i16), PieceType)> = vec![((c, c), PieceType::King)];
    for d in [1, 2] {
        for (r, col) in [(c - d, c), (c + d, c), (c, c - d), (c, c + d)] {
            candidates.push(((r, col), PieceType::Defender));
        }
    }
    for k in [-1, 0, 1] {
        for (r, col) in [(1, c + k), (n, c + k), (c + k, 1), (c + k, n)] {
            candidates.push(((r, col), PieceType::Attacker));
        }
    }
    for (r, col) in [(2, c), (n - 1, c), (c, 2), (c, n - 1)] {
        candidates.push(((r, col), PieceType::Attacker));
    }

    let mut pieces: Vec<(Tile, PieceType)> = vec![];
    for ((r, col), piece_type) in candidates {
        if !(1..=n).contains(&r) || !(1..=n).contains(&col) {
            continue;
        }
        let tile = Tile::new(r as u8, col as u8);
        if pieces.iter().any(|(t, _)| *t == tile) {
            continue;
        }
        pieces.push((tile, piece_type));
    }
    pieces
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use crate::config::{GameConfig, Layout};
    use crate::preset::boards;

    #[test]
    fn test_round_trip() {
        let config = GameConfig::new(11, Layout::Fen(boards::CLASSIC.to_string()));
        let json = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);

        let partial: GameConfig = serde_json::from_str(r#"{"width": 7}"#).unwrap();
        assert_eq!(partial, GameConfig::with_width(7));
    }
}
