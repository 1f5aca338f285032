/// Marker trait for state types: self-contained, cloneable snapshots
/// that the view can render without reaching anywhere else.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
