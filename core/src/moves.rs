use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::GameError;

/// One of the three hands a player can throw.
///
/// The discriminants give the cyclic order used by [`Move::beats`]: every move is beaten by the one that follows it,
/// wrapping around from scissors back to rock.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock = 0,
    Paper = 1,
    Scissors = 2,
}

impl Move {
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    const fn from_index(index: u8) -> Self {
        Self::ALL[(index % 3) as usize]
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    /// The move that beats `self`.
    pub const fn beats(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// The move that `self` beats, inverse of [`Move::beats`].
    pub const fn loses_to(self) -> Self {
        Self::from_index(self.index() + 2)
    }

    pub const fn name(self) -> &'static str {
        use Move::*;
        match self {
            Rock => "rock",
            Paper => "paper",
            Scissors => "scissors",
        }
    }

    /// Stand-in for the artwork, handy for terminals and buttons.
    pub const fn glyph(self) -> &'static str {
        use Move::*;
        match self {
            Rock => "\u{270a}",
            Paper => "\u{270b}",
            Scissors => "\u{270c}",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Move {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|m| {
                s.eq_ignore_ascii_case(m.name()) || s.eq_ignore_ascii_case(&m.name()[..1])
            })
            .ok_or(GameError::UnknownMove)
    }
}
