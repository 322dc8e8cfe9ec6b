/// Marker for screen state. `Default` is the state of a screen that is not
/// shown; `PartialEq` lets callers skip redundant work.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
