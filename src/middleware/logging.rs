//! Middleware that logs dispatched actions via `tracing`.

use crate::action::Action;
use crate::middleware::{Middleware, Next};

/// Logs every action flowing through the pipeline.
///
/// Emits one `debug` event when an action enters this stage and one when
/// the inner pipeline returns, each carrying the action kind and the label
/// this instance was configured with. The action itself is forwarded
/// unchanged.
pub struct LoggingMiddleware<A> {
    label: &'static str,
    next: Next<A>,
}

impl<A: Action> LoggingMiddleware<A> {
    /// Create a logging stage labelled `label`, forwarding to `next`.
    pub fn new(label: &'static str, next: Next<A>) -> Self {
        Self { label, next }
    }
}

impl<A: Action> Middleware<A> for LoggingMiddleware<A> {
    fn handle(&mut self, action: A) -> A {
        tracing::debug!(store = self.label, kind = action.kind(), "dispatching");
        let result = (self.next)(action);
        tracing::debug!(store = self.label, kind = result.kind(), "dispatched");
        result
    }
}
