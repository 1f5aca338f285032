//! Unidirectional data-flow primitives for the UI layer.
//!
//! Intents (player input, timer fires, async results) run through a
//! pure reducer to produce the next state; the view renders state and
//! nothing else mutates it.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
