//! Middleware: interceptors between `dispatch` and the reducer.
//!
//! A middleware sees an action on the way in, decides whether to call the
//! rest of the pipeline through its `next` continuation, and sees the
//! result on the way out. The first middleware registered on the builder
//! is the outermost wrapper: first to observe a dispatched action, last to
//! observe the returned value. Not calling `next` short-circuits the
//! chain, so the reducer and subscribers do not run for that action; that
//! is a supported interception mechanism, not an error.

mod logging;

pub use logging::LoggingMiddleware;

/// One stage of the composed dispatch pipeline.
///
/// The innermost stage applies the reducer; every middleware wraps the
/// stages registered after it and forwards by calling this continuation.
pub type Next<A> = Box<dyn FnMut(A) -> A + Send>;

/// A middleware registered by type rather than as a ready-made factory.
///
/// Implementors are constructed once per built store by the closure given
/// to [`StoreBuilder::middleware_type`](crate::StoreBuilder::middleware_type);
/// the store handle, the `next` continuation and any extra configuration
/// are injected there. `handle` is then invoked for every dispatched
/// action, as a direct trait call with no per-dispatch setup cost.
///
/// The handling contract is forwarding: return an action (possibly
/// transformed) after optionally calling `next`.
pub trait Middleware<A>: Send {
    /// Intercept one dispatched action.
    fn handle(&mut self, action: A) -> A;
}
