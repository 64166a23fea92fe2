//! Unidirectional application-state container.
//!
//! A single root state is reachable only through dispatched actions,
//! transformed by a pure reducing function, observable by subscribers, and
//! interceptable by an ordered chain of middleware.
//!
//! # Architecture
//!
//! ```text
//! dispatch(action)
//!       │
//!       ▼
//! middleware chain (first registered = outermost)
//!       │ next(action)
//!       ▼
//! reducer ──→ new state ──→ subscribers
//! ```
//!
//! - **State**: immutable root value, replaced wholesale on every dispatch
//! - **Action**: user action or system event, dispatched into the store
//! - **Reducer**: pure function that transforms state based on actions
//! - **Middleware**: interceptors that observe, transform or block actions
//!
//! # Example
//!
//! ```
//! use uniflow::{Action, State, StoreBuilder};
//!
//! #[derive(Debug)]
//! enum CounterAction {
//!     CountUp,
//!     CountDown,
//! }
//!
//! impl Action for CounterAction {
//!     fn kind(&self) -> &'static str {
//!         match self {
//!             CounterAction::CountUp => "CountUp",
//!             CounterAction::CountDown => "CountDown",
//!         }
//!     }
//! }
//!
//! #[derive(Clone, Default)]
//! struct AppState {
//!     counter: i64,
//! }
//!
//! impl State for AppState {}
//!
//! fn counter(state: AppState, action: &CounterAction) -> AppState {
//!     match action {
//!         CounterAction::CountUp => AppState { counter: state.counter + 1 },
//!         CounterAction::CountDown => AppState { counter: state.counter - 1 },
//!     }
//! }
//!
//! let store = StoreBuilder::new(counter).build();
//! store.dispatch(CounterAction::CountUp);
//! store.dispatch(CounterAction::CountUp);
//! store.dispatch(CounterAction::CountDown);
//! assert_eq!(store.state().counter, 1);
//! ```

mod action;
mod builder;
mod middleware;
mod reducer;
mod state;
mod store;
mod subscription;

pub use action::Action;
pub use builder::StoreBuilder;
pub use middleware::{LoggingMiddleware, Middleware, Next};
pub use reducer::{CombinedReducer, Reducer};
pub use state::State;
pub use store::{Store, StoreHandle};
pub use subscription::Subscription;
