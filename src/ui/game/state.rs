use crate::ui::game::cards::{Card, CardValue};
use crate::ui::mvi::UiState;

/// Tagged game phase. Replaces the started/over flag pair so the two
/// can never disagree.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum GamePhase {
    #[default]
    NotStarted,
    InProgress,
    Over,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GameState {
    pub phase: GamePhase,
    /// Current permutation of the fixed card set; empty until the first start.
    pub deck: Vec<Card>,
    /// Indices revealed pending comparison. Never more than two.
    pub flipped: Vec<usize>,
    /// Values confirmed paired, two entries per found pair.
    pub matched: Vec<CardValue>,
    pub score: u32,
    pub turns: u32,
    /// Bumped on every (re)start. A pending mismatch timer carries the
    /// epoch it was scheduled under; once the counter moves on, the
    /// fire is stale and ignored.
    pub epoch: u64,
    /// Epoch of the mismatch delay currently awaiting its timer.
    pub pending_mismatch: Option<u64>,
}

impl UiState for GameState {}

impl GameState {
    /// Whether the card at `index` is currently showing its face,
    /// either flipped for comparison or permanently matched.
    pub fn is_face_up(&self, index: usize) -> bool {
        self.flipped.contains(&index)
            || self
                .deck
                .get(index)
                .is_some_and(|card| self.matched.contains(&card.value))
    }

    pub fn pairs_found(&self) -> usize {
        self.matched.len() / 2
    }
}
