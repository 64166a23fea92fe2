//! The store: current state, composed dispatch pipeline, subscribers.

use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use crate::action::Action;
use crate::middleware::Next;
use crate::reducer::Reducer;
use crate::state::State;
use crate::subscription::{SubscriberSet, Subscription};

/// State and subscriber storage shared between a [`Store`] and its handles.
pub(crate) struct StoreCore<S> {
    state: RwLock<S>,
    subscribers: Mutex<SubscriberSet>,
}

impl<S: State> StoreCore<S> {
    pub(crate) fn new(initial: S) -> Self {
        Self {
            state: RwLock::new(initial),
            subscribers: Mutex::new(SubscriberSet::new()),
        }
    }

    fn snapshot(&self) -> S {
        self.state.read().clone()
    }

    fn subscribe(&self, callback: impl Fn() + Send + Sync + 'static) -> Subscription {
        let subscription = self.subscribers.lock().insert(Arc::new(callback));
        tracing::trace!(?subscription, "subscriber added");
        subscription
    }

    fn unsubscribe(&self, subscription: Subscription) -> bool {
        let removed = self.subscribers.lock().remove(subscription);
        tracing::trace!(?subscription, removed, "unsubscribe");
        removed
    }

    fn notify(&self) {
        // Snapshot first: callbacks run with no lock held, so they may
        // subscribe/unsubscribe on this store. A subscriber added during an
        // in-flight dispatch is not part of the snapshot and misses it.
        let callbacks = self.subscribers.lock().snapshot();
        for callback in callbacks {
            callback();
        }
    }
}

/// Innermost pipeline stage: apply the reducer, swap the state, notify.
///
/// Fixed wiring, not user-supplied middleware. Returns the action
/// unchanged. A panic from a reducer or subscriber propagates to the
/// `dispatch` caller; state swapped in before the panic stays committed.
pub(crate) fn terminal_stage<S, A>(
    core: Arc<StoreCore<S>>,
    reducer: Arc<dyn Reducer<S, A>>,
) -> Next<A>
where
    S: State,
    A: Action,
{
    Box::new(move |action| {
        let next_state = reducer.reduce(core.snapshot(), &action);
        *core.state.write() = next_state;
        core.notify();
        action
    })
}

/// Cheap, cloneable read/subscribe capability on a store.
///
/// This is what middleware factories receive and what view code should be
/// handed down instead of reaching for a global. It exposes state
/// snapshots and subscription management but not `dispatch`: continuing
/// the chain is the job of a middleware's `next` continuation, and
/// starting a new dispatch belongs to the owner of the [`Store`].
pub struct StoreHandle<S> {
    core: Arc<StoreCore<S>>,
}

impl<S> Clone for StoreHandle<S> {
    fn clone(&self) -> Self {
        Self {
            core: Arc::clone(&self.core),
        }
    }
}

impl<S: State> StoreHandle<S> {
    pub(crate) fn new(core: Arc<StoreCore<S>>) -> Self {
        Self { core }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> S {
        self.core.snapshot()
    }

    /// Register a callback invoked after every completed dispatch.
    pub fn subscribe(&self, callback: impl Fn() + Send + Sync + 'static) -> Subscription {
        self.core.subscribe(callback)
    }

    /// Remove a previously registered callback.
    ///
    /// Returns `false` if the token is unknown or was already removed.
    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        self.core.unsubscribe(subscription)
    }
}

/// The state container: current state, subscribers, and the fully wired
/// dispatch pipeline.
///
/// Built by [`StoreBuilder`](crate::StoreBuilder); there is no other way
/// to obtain one. Each dispatch runs the whole middleware chain and the
/// reducer synchronously before returning.
pub struct Store<S, A> {
    core: Arc<StoreCore<S>>,
    pipeline: Mutex<Next<A>>,
}

impl<S: State, A: Action> Store<S, A> {
    pub(crate) fn from_parts(core: Arc<StoreCore<S>>, pipeline: Next<A>) -> Self {
        Self {
            core,
            pipeline: Mutex::new(pipeline),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> S {
        self.core.snapshot()
    }

    /// Run `action` through the middleware chain, terminating at the
    /// reducer application.
    ///
    /// Returns whatever the outermost middleware returns, conventionally
    /// the action itself, so callers can inspect or chain it. Overlapping
    /// calls from other threads serialize on the pipeline. The call is not
    /// reentrant: neither middleware nor subscriber callbacks may dispatch
    /// on the store they are attached to (middleware forwards with `next`
    /// instead).
    pub fn dispatch(&self, action: A) -> A {
        tracing::trace!(kind = action.kind(), "dispatch");
        let mut pipeline = self.pipeline.lock();
        (*pipeline)(action)
    }

    /// Register a callback invoked, in registration order, every time a
    /// dispatch completes and the reducer has produced a (possibly
    /// unchanged) new state.
    pub fn subscribe(&self, callback: impl Fn() + Send + Sync + 'static) -> Subscription {
        self.core.subscribe(callback)
    }

    /// Remove a previously registered callback.
    ///
    /// Returns `false` if the token is unknown or was already removed.
    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        self.core.unsubscribe(subscription)
    }

    /// A cheap handle exposing state reads and subscriptions.
    pub fn handle(&self) -> StoreHandle<S> {
        StoreHandle::new(Arc::clone(&self.core))
    }
}
