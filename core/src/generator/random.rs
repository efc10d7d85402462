use rand::prelude::*;
use rand::rngs::StdRng;

use super::*;

/// Uniform choice over the three moves and a fair coin for the opening directive, reproducible from a seed.
#[derive(Clone, Debug)]
pub struct RandomChallengeGenerator {
    seed: u64,
    rng: StdRng,
}

impl RandomChallengeGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl ChallengeGenerator for RandomChallengeGenerator {
    fn shown_move(&mut self) -> Move {
        Move::ALL[self.rng.random_range(0..Move::ALL.len())]
    }

    fn first_directive(&mut self) -> bool {
        self.rng.random_bool(0.5)
    }
}
