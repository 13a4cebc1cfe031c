/// Marker trait for reducer-owned state.
///
/// `PartialEq` lets callers detect whether an intent changed anything.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
