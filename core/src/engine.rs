use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    Playing,
    Finished,
}

impl EngineState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Finished)
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::Playing
    }
}

/// Owns the current challenge and the running score, and drives rounds until the session is over.
///
/// The engine never renders anything: every call returns enough for a frontend to redraw from [`RoundEngine::challenge`]
/// and [`RoundEngine::session`].
#[derive(Clone, Debug)]
pub struct RoundEngine<G = RandomChallengeGenerator> {
    generator: G,
    challenge: Challenge,
    session: SessionState,
    state: EngineState,
}

impl RoundEngine<RandomChallengeGenerator> {
    pub fn from_seed(seed: u64) -> Self {
        Self::new(RandomChallengeGenerator::new(seed))
    }
}

impl<G: ChallengeGenerator> RoundEngine<G> {
    pub fn new(mut generator: G) -> Self {
        let should_win = generator.first_directive();
        let challenge = Challenge::new(generator.shown_move(), should_win);
        log::debug!("first challenge: {:?}", challenge);
        Self {
            generator,
            challenge,
            session: SessionState::default(),
            state: Default::default(),
        }
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn challenge(&self) -> Challenge {
        self.challenge
    }

    pub fn session(&self) -> SessionState {
        self.session
    }

    pub fn score(&self) -> RoundCount {
        self.session.score
    }

    pub fn rounds_played(&self) -> RoundCount {
        self.session.rounds_played
    }

    pub fn rounds_left(&self) -> RoundCount {
        self.session.rounds_left()
    }

    pub const fn total_rounds(&self) -> RoundCount {
        TOTAL_ROUNDS
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            score: self.session.score,
            rounds_played: self.session.rounds_played,
            total_rounds: TOTAL_ROUNDS,
            state: self.state,
        }
    }

    /// Replaces the current challenge with a fresh one whose directive is the opposite of the previous one.
    pub fn new_challenge(&mut self) -> Challenge {
        let should_win = !self.challenge.should_win;
        self.challenge = Challenge::new(self.generator.shown_move(), should_win);
        log::debug!("new challenge: {:?}", self.challenge);
        self.challenge
    }

    /// Scores `player_move` against the current challenge and advances to the next round.
    ///
    /// Rejected with [`GameError::AlreadyEnded`] once the session is finished, leaving the engine untouched.
    pub fn submit_move(&mut self, player_move: Move) -> Result<RoundOutcome> {
        self.check_playing()?;

        let challenge = self.challenge;
        let correct = challenge.accepts(player_move);
        log::debug!(
            "{:?} against {:?} (should win: {}) -> correct: {}",
            player_move,
            challenge.shown_move,
            challenge.should_win,
            correct
        );

        if correct {
            self.session.score += 1;
        }
        self.session.rounds_played += 1;

        let finished = self.session.rounds_played >= TOTAL_ROUNDS;
        if finished {
            self.state = EngineState::Finished;
            log::info!(
                "session finished with score {}/{}",
                self.session.score,
                TOTAL_ROUNDS
            );
        } else {
            self.new_challenge();
        }

        Ok(RoundOutcome {
            challenge,
            player_move,
            correct,
            finished,
        })
    }

    /// Starts a new session from zero; the directive keeps alternating from where the last one stopped.
    pub fn restart(&mut self) -> Challenge {
        log::info!("restarting session");
        self.session = SessionState::default();
        self.state = EngineState::Playing;
        self.new_challenge()
    }

    fn check_playing(&self) -> Result<()> {
        if self.state.is_finished() {
            log::warn!("move submitted after the session ended");
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Move::*;

    fn scripted(moves: &[Move], first_directive: bool) -> RoundEngine<ScriptedChallengeGenerator> {
        RoundEngine::new(ScriptedChallengeGenerator::new(moves, first_directive))
    }

    #[test]
    fn starts_playing_with_a_challenge() {
        let engine = scripted(&[Rock], true);

        assert_eq!(engine.state(), EngineState::Playing);
        assert_eq!(engine.challenge(), Challenge::new(Rock, true));
        assert_eq!(engine.session(), SessionState::default());
        assert_eq!(engine.rounds_left(), TOTAL_ROUNDS);
    }

    #[test]
    fn correct_submission_scores_and_advances() {
        let mut engine = scripted(&[Rock, Scissors], true);

        let outcome = engine.submit_move(Paper).unwrap();

        assert!(outcome.correct);
        assert!(!outcome.finished);
        assert_eq!(outcome.challenge, Challenge::new(Rock, true));
        assert_eq!(engine.score(), 1);
        assert_eq!(engine.rounds_played(), 1);
        assert_eq!(engine.challenge(), Challenge::new(Scissors, false));
    }

    #[test]
    fn incorrect_submission_counts_the_round_only() {
        let mut engine = scripted(&[Rock], false);

        let outcome = engine.submit_move(Paper).unwrap();

        assert!(!outcome.correct);
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.rounds_played(), 1);
    }

    #[test]
    fn directive_alternates_between_rounds() {
        let mut engine = scripted(&[Rock], true);
        let mut expected = true;

        for _ in 0..TOTAL_ROUNDS - 1 {
            assert_eq!(engine.challenge().should_win, expected);
            engine.submit_move(Rock).unwrap();
            expected = !expected;
        }
        assert_eq!(engine.challenge().should_win, expected);
    }

    #[test]
    fn finishes_after_total_rounds_whatever_the_answers() {
        let mut engine = RoundEngine::from_seed(3);

        for round in 1..=TOTAL_ROUNDS {
            let outcome = engine.submit_move(Move::ALL[round as usize % 3]).unwrap();
            assert_eq!(outcome.finished, round == TOTAL_ROUNDS);
        }

        assert_eq!(engine.state(), EngineState::Finished);
        assert_eq!(engine.rounds_played(), TOTAL_ROUNDS);
        assert_eq!(engine.rounds_left(), 0);
    }

    #[test]
    fn score_counts_correct_submissions() {
        for seed in 0..20 {
            let mut engine = RoundEngine::from_seed(seed);
            let mut correct = 0;

            while !engine.is_finished() {
                let challenge = engine.challenge();
                let pick = Move::ALL[(seed as usize + engine.rounds_played() as usize) % 3];
                let outcome = engine.submit_move(pick).unwrap();
                assert_eq!(outcome.correct, challenge.accepts(pick));
                if outcome.correct {
                    correct += 1;
                }
            }

            assert_eq!(engine.score(), correct);
            assert!(engine.score() <= TOTAL_ROUNDS);
        }
    }

    #[test]
    fn always_right_against_scissors_when_winning() {
        // Rock beats scissors on win rounds and does not beat paper on lose rounds.
        let mut engine = scripted(&[Scissors, Paper], true);

        for _ in 0..TOTAL_ROUNDS {
            assert!(engine.submit_move(Rock).unwrap().correct);
        }

        assert_eq!(engine.score(), 5);
        assert_eq!(engine.state(), EngineState::Finished);
    }

    #[test]
    fn always_right_against_paper_when_losing() {
        // Rock does not beat paper on lose rounds and beats scissors on win rounds.
        let mut engine = scripted(&[Paper, Scissors], false);

        for _ in 0..TOTAL_ROUNDS {
            assert!(engine.submit_move(Rock).unwrap().correct);
        }

        assert_eq!(engine.score(), 5);
        assert!(engine.is_finished());
    }

    #[test]
    fn submit_after_finish_is_rejected_without_side_effects() {
        let mut engine = scripted(&[Rock], true);
        for _ in 0..TOTAL_ROUNDS {
            engine.submit_move(Paper).unwrap();
        }
        let before = engine.summary();
        let challenge = engine.challenge();

        assert_eq!(engine.submit_move(Paper), Err(GameError::AlreadyEnded));
        assert_eq!(engine.summary(), before);
        assert_eq!(engine.challenge(), challenge);
    }

    #[test]
    fn no_challenge_is_generated_after_the_last_round() {
        let mut engine = scripted(&[Rock, Paper, Scissors], true);
        for _ in 0..TOTAL_ROUNDS - 1 {
            engine.submit_move(Rock).unwrap();
        }
        let last = engine.challenge();

        engine.submit_move(Rock).unwrap();

        assert_eq!(engine.challenge(), last);
    }

    #[test]
    fn restart_resets_session_and_keeps_alternating() {
        let mut engine = scripted(&[Rock, Paper], true);
        for _ in 0..TOTAL_ROUNDS {
            engine.submit_move(Paper).unwrap();
        }
        let last = engine.challenge();

        let fresh = engine.restart();

        assert_eq!(engine.state(), EngineState::Playing);
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.rounds_played(), 0);
        assert_eq!(engine.challenge(), fresh);
        assert_eq!(fresh.should_win, !last.should_win);
        assert!(engine.submit_move(Rock).is_ok());
    }

    #[test]
    fn restart_mid_session_starts_over() {
        let mut engine = RoundEngine::from_seed(11);
        engine.submit_move(Rock).unwrap();
        engine.submit_move(Rock).unwrap();

        engine.restart();

        assert_eq!(engine.session(), SessionState::default());
        assert_eq!(engine.rounds_left(), TOTAL_ROUNDS);
    }

    #[test]
    fn seeded_engines_replay_identically() {
        let mut a = RoundEngine::from_seed(99);
        let mut b = RoundEngine::from_seed(99);

        for _ in 0..TOTAL_ROUNDS {
            assert_eq!(a.challenge(), b.challenge());
            assert_eq!(a.submit_move(Scissors), b.submit_move(Scissors));
        }
        assert_eq!(a.generator().seed(), 99);
    }

    #[test]
    fn first_directive_varies_across_seeds() {
        let directives: alloc::vec::Vec<bool> = (0..64)
            .map(|seed| RoundEngine::from_seed(seed).challenge().should_win)
            .collect();

        assert!(directives.contains(&true));
        assert!(directives.contains(&false));
    }
}
