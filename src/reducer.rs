//! Reducer trait and reducer composition.

/// Reducer computes the next state from the current state and an action.
///
/// The reducer is the only place where state transitions happen.
/// This should be a pure function with no side effects: purity is a caller
/// contract, the store does not check it at runtime.
///
/// Plain functions and closures of shape `Fn(S, &A) -> S` are reducers via
/// the blanket impl below, so a reducer can be registered without a
/// dedicated type.
pub trait Reducer<S, A>: Send + Sync {
    /// Process an action and return the new state.
    fn reduce(&self, state: S, action: &A) -> S;
}

impl<S, A, F> Reducer<S, A> for F
where
    F: Fn(S, &A) -> S + Send + Sync,
{
    fn reduce(&self, state: S, action: &A) -> S {
        self(state, action)
    }
}

/// Composes an ordered sequence of reducers into one reducer.
///
/// `reduce` applies each reducer in insertion order, threading the output
/// of one as the input of the next: later reducers see the output of
/// earlier ones, not the original input. An empty combiner returns the
/// input state unchanged.
pub struct CombinedReducer<S, A> {
    reducers: Vec<Box<dyn Reducer<S, A>>>,
}

impl<S, A> CombinedReducer<S, A> {
    pub fn new() -> Self {
        Self {
            reducers: Vec::new(),
        }
    }

    /// Append a reducer to the sequence.
    pub fn with(mut self, reducer: impl Reducer<S, A> + 'static) -> Self {
        self.reducers.push(Box::new(reducer));
        self
    }
}

impl<S, A> Default for CombinedReducer<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, A> Reducer<S, A> for CombinedReducer<S, A> {
    fn reduce(&self, state: S, action: &A) -> S {
        self.reducers
            .iter()
            .fold(state, |state, reducer| reducer.reduce(state, action))
    }
}
