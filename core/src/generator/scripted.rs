use alloc::vec::Vec;

use super::*;

/// Replays a fixed list of moves in a loop, for deterministic sessions.
#[derive(Clone, Debug, PartialEq)]
pub struct ScriptedChallengeGenerator {
    moves: Vec<Move>,
    next: usize,
    first_directive: bool,
}

impl ScriptedChallengeGenerator {
    pub fn new(moves: &[Move], first_directive: bool) -> Self {
        let moves = if moves.is_empty() {
            log::warn!("Empty move script, falling back to rock");
            alloc::vec![Move::Rock]
        } else {
            moves.to_vec()
        };
        Self {
            moves,
            next: 0,
            first_directive,
        }
    }
}

impl ChallengeGenerator for ScriptedChallengeGenerator {
    fn shown_move(&mut self) -> Move {
        let m = self.moves[self.next];
        self.next = (self.next + 1) % self.moves.len();
        m
    }

    fn first_directive(&mut self) -> bool {
        self.first_directive
    }
}
