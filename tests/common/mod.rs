//! Shared test fixtures: a counter domain driven through the store.

#![allow(dead_code, unused_imports)]

use uniflow::{Action, State};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterAction {
    CountUp,
    CountDown,
    Reset,
}

impl Action for CounterAction {
    fn kind(&self) -> &'static str {
        match self {
            CounterAction::CountUp => "CountUp",
            CounterAction::CountDown => "CountDown",
            CounterAction::Reset => "Reset",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CounterState {
    pub counter: i64,
}

impl State for CounterState {}

pub fn counter_reducer(state: CounterState, action: &CounterAction) -> CounterState {
    match action {
        CounterAction::CountUp => CounterState {
            counter: state.counter + 1,
        },
        CounterAction::CountDown => CounterState {
            counter: state.counter - 1,
        },
        CounterAction::Reset => CounterState { counter: 0 },
    }
}
