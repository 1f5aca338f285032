//! The concentration board as a pure MVI state machine.
//!
//! All rules live in the reducer; shuffling and timers stay outside so
//! every transition is deterministic and directly testable.

mod cards;
mod intent;
mod reducer;
mod state;

pub use cards::{card_set, shuffled_deck, Card, CardValue, CARD_COUNT};
pub use intent::GameIntent;
pub use reducer::{turn_bonus, GameReducer};
pub use state::{GamePhase, GameState};
