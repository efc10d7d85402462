use crate::*;
pub use random::*;
pub use scripted::*;

mod random;
mod scripted;

/// Source of the randomness behind each new challenge.
pub trait ChallengeGenerator {
    /// Move to show for the next challenge.
    fn shown_move(&mut self) -> Move;

    /// Directive for the first challenge, later ones just alternate.
    fn first_directive(&mut self) -> bool;
}
