//! Base trait for root state held by the store.

/// Marker trait for root state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data needed by readers)
///
/// Every dispatch replaces the stored state with the reducer's output by
/// value swap; nothing mutates the previous state in place. `Default` is
/// the starting state when the builder is given no initial state.
pub trait State: Clone + Default + Send + Sync + 'static {}
