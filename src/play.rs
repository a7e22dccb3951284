use crate::error::ParseError;
use crate::error::ParseError::BadString;
use crate::game::GameStatus;
use crate::pieces::Player;
use crate::tiles::Tile;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A single attempted move of a piece from one tile to another by a player. (Named "Play" rather
/// than "Move" as the lower-cased version of the latter would clash with the Rust keyword.)
///
/// A play is only a request: nothing about it is checked until it is passed to
/// [`crate::Game::check_play`] or [`crate::Game::execute`].
#[derive(Debug, Eq, PartialEq, Clone, Hash)]
pub struct Play {
    pub from: Tile,
    pub to: Tile,
    pub player: Player,
}

impl Play {
    pub fn new(from: Tile, to: Tile, player: Player) -> Self {
        Self { from, to, player }
    }

    /// Parse a play written as `<tile> to <tile>`, eg `"A4 to E4"`. Spaces around `to` are
    /// optional and letters may be either case. Whether the tiles are on the board is not checked
    /// here.
    pub fn parse(s: &str, player: Player) -> Result<Self, ParseError> {
        let lower = s.trim().to_ascii_lowercase();
        let (from, to) = lower.split_once("to").ok_or_else(|| BadString(s.to_string()))?;
        Ok(Self::new(Tile::from_str(from)?, Tile::from_str(to)?, player))
    }
}

impl Display for Play {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.from, self.to)
    }
}

/// What happened as a result of a legal play.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct PlayOutcome {
    /// Tiles whose pieces were captured by the play.
    pub captures: Vec<Tile>,
    /// Status of the game after the play.
    pub status: GameStatus,
}

#[cfg(test)]
mod tests {
    use crate::error::ParseError;
    use crate::pieces::Player;
    use crate::play::Play;
    use crate::tiles::Tile;

    #[test]
    fn test_parse() {
        let p = Player::new("Antoine");
        let play = Play::parse("A4 to E4", p.clone()).unwrap();
        assert_eq!(play, Play::new(Tile::new(4, 1), Tile::new(4, 5), p.clone()));
        assert_eq!(play.to_string(), "A4 to E4");
        assert_eq!(
            Play::parse("b12to b3", p.clone()).unwrap(),
            Play::new(Tile::new(12, 2), Tile::new(3, 2), p.clone())
        );
        assert_eq!(
            Play::parse("A4 E4", p.clone()),
            Err(ParseError::BadString("A4 E4".to_string()))
        );
        assert_eq!(Play::parse("to E4", p.clone()), Err(ParseError::EmptyString));
        assert_eq!(Play::parse("A4 to 44", p.clone()), Err(ParseError::BadChar('4')));
        assert!(Play::parse("A4 to E", p).is_err());
    }
}
