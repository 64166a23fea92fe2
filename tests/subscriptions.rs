mod common;

use std::sync::Arc;

use common::{counter_reducer, CounterAction};
use parking_lot::Mutex;
use uniflow::StoreBuilder;

#[test]
fn subscribers_run_once_per_dispatch_in_registration_order() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let store = StoreBuilder::new(counter_reducer).build();

    let first = Arc::clone(&log);
    store.subscribe(move || first.lock().push("first"));
    let second = Arc::clone(&log);
    store.subscribe(move || second.lock().push("second"));

    store.dispatch(CounterAction::CountUp);
    assert_eq!(*log.lock(), vec!["first", "second"]);

    store.dispatch(CounterAction::CountDown);
    assert_eq!(*log.lock(), vec!["first", "second", "first", "second"]);
}

#[test]
fn late_subscriber_misses_earlier_dispatches() {
    let calls = Arc::new(Mutex::new(0u32));
    let store = StoreBuilder::new(counter_reducer).build();

    store.dispatch(CounterAction::CountUp);

    let seen = Arc::clone(&calls);
    store.subscribe(move || *seen.lock() += 1);
    assert_eq!(*calls.lock(), 0);

    store.dispatch(CounterAction::CountUp);
    assert_eq!(*calls.lock(), 1);
}

#[test]
fn unsubscribe_stops_notifications() {
    let calls = Arc::new(Mutex::new(0u32));
    let store = StoreBuilder::new(counter_reducer).build();

    let seen = Arc::clone(&calls);
    let subscription = store.subscribe(move || *seen.lock() += 1);

    store.dispatch(CounterAction::CountUp);
    assert!(store.unsubscribe(subscription));
    store.dispatch(CounterAction::CountUp);

    assert_eq!(*calls.lock(), 1);
    assert!(!store.unsubscribe(subscription));
}

#[test]
fn subscriber_reads_the_committed_state() {
    let observed = Arc::new(Mutex::new(Vec::new()));
    let store = StoreBuilder::new(counter_reducer).build();

    let handle = store.handle();
    let sink = Arc::clone(&observed);
    store.subscribe(move || sink.lock().push(handle.state().counter));

    store.dispatch(CounterAction::CountUp);
    store.dispatch(CounterAction::CountUp);
    assert_eq!(*observed.lock(), vec![1, 2]);
}

#[test]
fn subscriber_added_mid_dispatch_misses_that_dispatch() {
    let calls = Arc::new(Mutex::new(0u32));
    let store = StoreBuilder::new(counter_reducer).build();

    let handle = store.handle();
    let seen = Arc::clone(&calls);
    store.subscribe(move || {
        let seen = Arc::clone(&seen);
        handle.subscribe(move || *seen.lock() += 1);
    });

    store.dispatch(CounterAction::CountUp);
    assert_eq!(*calls.lock(), 0);

    store.dispatch(CounterAction::CountUp);
    assert_eq!(*calls.lock(), 1);
}
