use crate::ui::game::cards::Card;
use crate::ui::mvi::Intent;

#[derive(Clone, Debug)]
pub enum GameIntent {
    /// Start a new game. Also resets after game over — the two entry
    /// points are identical. Carries the fresh permutation so the
    /// reducer stays deterministic.
    Start { deck: Vec<Card> },
    /// Player revealed the card at `index`.
    Flip { index: usize },
    /// The mismatch delay elapsed for the game identified by `epoch`.
    MismatchElapsed { epoch: u64 },
}

impl Intent for GameIntent {}
