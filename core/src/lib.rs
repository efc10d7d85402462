#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use generator::*;
pub use moves::*;
pub use types::*;

mod engine;
mod error;
mod generator;
mod moves;
mod types;

/// Result of one adjudicated round.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub challenge: Challenge,
    pub player_move: Move,
    pub correct: bool,
    pub finished: bool,
}

impl RoundOutcome {
    /// Every accepted submission moves the session forward, so there is always something to redraw.
    ///
    /// Rejected submissions never produce an outcome; callers holding a `Result` treat `Err` as no update.
    pub const fn has_update(self) -> bool {
        true
    }
}

/// Snapshot of a session, for score screens and reports.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub score: RoundCount,
    pub rounds_played: RoundCount,
    pub total_rounds: RoundCount,
    pub state: EngineState,
}
