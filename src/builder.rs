//! Builder that wires a reducer, an initial state and middleware into a
//! [`Store`].

use std::sync::Arc;

use crate::action::Action;
use crate::middleware::{Middleware, Next};
use crate::reducer::Reducer;
use crate::state::State;
use crate::store::{terminal_stage, Store, StoreCore, StoreHandle};

type MiddlewareFactory<S, A> = Box<dyn Fn(StoreHandle<S>, Next<A>) -> Next<A> + Send + Sync>;

/// Accumulates a reducer, an initial state and an ordered list of
/// middleware factories; [`build`](StoreBuilder::build) wires them into a
/// [`Store`].
///
/// Middleware ordering is a hard contract: the first middleware registered
/// becomes the outermost pipeline stage, first to see an incoming action
/// and last to see the returned value.
pub struct StoreBuilder<S, A> {
    reducer: Arc<dyn Reducer<S, A>>,
    initial_state: Option<S>,
    middleware: Vec<MiddlewareFactory<S, A>>,
}

impl<S: State, A: Action> StoreBuilder<S, A> {
    /// Start a builder around the reducing function for the state tree.
    pub fn new(reducer: impl Reducer<S, A> + 'static) -> Self {
        Self {
            reducer: Arc::new(reducer),
            initial_state: None,
            middleware: Vec::new(),
        }
    }

    /// Add or replace the initial state.
    ///
    /// Without it the store starts from `S::default()`.
    pub fn initial_state(mut self, state: S) -> Self {
        self.initial_state = Some(state);
        self
    }

    /// Append a ready-made middleware factory to the dispatch pipeline.
    ///
    /// The factory runs once per [`build`](StoreBuilder::build): it
    /// receives a handle on the store being built plus the already-composed
    /// inward continuation, and returns the dispatch function for its
    /// stage.
    pub fn middleware<F>(mut self, factory: F) -> Self
    where
        F: Fn(StoreHandle<S>, Next<A>) -> Next<A> + Send + Sync + 'static,
    {
        self.middleware.push(Box::new(factory));
        self
    }

    /// Append a middleware registered by type.
    ///
    /// `construct` runs once per [`build`](StoreBuilder::build) and builds
    /// the [`Middleware`] instance from the injected store handle and
    /// `next` continuation; extra configuration rides in the closure's
    /// captures. Dispatching then calls the instance's
    /// [`handle`](Middleware::handle) directly.
    pub fn middleware_type<M, F>(self, construct: F) -> Self
    where
        M: Middleware<A> + 'static,
        F: Fn(StoreHandle<S>, Next<A>) -> M + Send + Sync + 'static,
    {
        self.middleware(move |store, next| {
            let mut stage = construct(store, next);
            Box::new(move |action| stage.handle(action)) as Next<A>
        })
    }

    /// Wire the accumulated parts into a [`Store`].
    ///
    /// Each call assembles a fresh pipeline from the list's current
    /// contents and a fresh initial-state copy, so stores returned by
    /// repeated calls are independent; only the reducer is shared, behind
    /// `Arc`.
    pub fn build(&self) -> Store<S, A> {
        let initial = self.initial_state.clone().unwrap_or_default();
        let core = Arc::new(StoreCore::new(initial));
        let handle = StoreHandle::new(Arc::clone(&core));

        // Terminal stage first, then wrap outward in reverse registration
        // order so the first-registered middleware ends up outermost.
        let mut dispatch = terminal_stage(Arc::clone(&core), Arc::clone(&self.reducer));
        for factory in self.middleware.iter().rev() {
            dispatch = factory(handle.clone(), dispatch);
        }

        tracing::debug!(middleware = self.middleware.len(), "store pipeline assembled");
        Store::from_parts(core, dispatch)
    }
}
