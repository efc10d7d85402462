use serde::{Deserialize, Serialize};

use crate::Move;

/// Count type used for scores and rounds.
pub type RoundCount = u8;

/// Number of rounds in one session.
pub const TOTAL_ROUNDS: RoundCount = 5;

/// What the player is asked to do for one round.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    pub shown_move: Move,
    pub should_win: bool,
}

impl Challenge {
    pub const fn new(shown_move: Move, should_win: bool) -> Self {
        Self {
            shown_move,
            should_win,
        }
    }

    /// The move that beats the shown one.
    pub const fn required_move(&self) -> Move {
        self.shown_move.beats()
    }

    /// Picking the beating move is correct when told to win, and any other move is correct when told to lose.
    pub fn accepts(&self, player_move: Move) -> bool {
        (self.required_move() == player_move) == self.should_win
    }

    pub const fn directive_label(&self) -> &'static str {
        if self.should_win {
            "Win against"
        } else {
            "Lose against"
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub score: RoundCount,
    pub rounds_played: RoundCount,
}

impl SessionState {
    pub const fn rounds_left(&self) -> RoundCount {
        TOTAL_ROUNDS.saturating_sub(self.rounds_played)
    }
}
