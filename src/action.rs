//! Base trait for actions dispatched through the store.

use std::fmt;

/// An intent to change state, dispatched through the store.
///
/// Actions represent:
/// - User actions (button clicks, key presses)
/// - System events (API responses, timers)
/// - Navigation events
///
/// Actions flow through the middleware chain by value and are borrowed by
/// reducers; the store never inspects their payload.
pub trait Action: fmt::Debug + Send + 'static {
    /// Short name identifying the action's kind.
    ///
    /// Used for logging and branching without looking at the payload.
    /// For an enum action this is typically the variant name.
    fn kind(&self) -> &'static str;
}
