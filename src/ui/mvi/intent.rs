/// Marker trait for intents: player actions, timer fires, and async
/// call results that a reducer folds into state.
pub trait Intent: Send + 'static {}
