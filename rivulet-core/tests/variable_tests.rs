use parking_lot::Mutex;
use rivulet_core::{Callbacks, Unique, Variable};
use std::sync::Arc;

#[test]
fn subscriber_receives_the_current_value_first() {
    let variable = Variable::new(10);
    let seen = Arc::new(Mutex::new(Vec::new()));

    let sink = Arc::clone(&seen);
    let _subscription = variable.subscribe_next(move |value| sink.lock().push(value));
    variable.set(11);
    variable.set(12);

    assert_eq!(*seen.lock(), vec![10, 11, 12]);
}

#[test]
fn get_returns_the_latest_value() {
    let variable = Variable::new("initial");

    variable.set("updated");

    assert_eq!(variable.get(), "updated");
}

#[test]
fn set_if_changed_suppresses_duplicates() {
    let variable = Variable::new(1);
    let seen = Arc::new(Mutex::new(Vec::new()));

    let sink = Arc::clone(&seen);
    let _subscription = variable.subscribe_next(move |value| sink.lock().push(value));
    variable.set_if_changed(1);
    variable.set_if_changed(2);
    variable.set_if_changed(2);
    variable.set_if_changed(3);

    assert_eq!(*seen.lock(), vec![1, 2, 3]);
}

#[test]
fn plain_set_repeats_duplicates() {
    let variable = Variable::new(1);
    let seen = Arc::new(Mutex::new(Vec::new()));

    let sink = Arc::clone(&seen);
    let _subscription = variable.subscribe_next(move |value| sink.lock().push(value));
    variable.set(1);
    variable.set(1);

    assert_eq!(*seen.lock(), vec![1, 1, 1]);
}

#[test]
fn as_observable_sees_only_later_sets() {
    let variable = Variable::new(1);
    let seen = Arc::new(Mutex::new(Vec::new()));

    let sink = Arc::clone(&seen);
    let _subscription = variable
        .as_observable()
        .subscribe_next(move |value| sink.lock().push(value));
    variable.set(2);

    // No initial replay through the bare subject.
    assert_eq!(*seen.lock(), vec![2]);
}

#[test]
fn clones_share_the_cell() {
    let variable = Variable::new(0);
    let alias = variable.clone();

    alias.set(41);

    assert_eq!(variable.get(), 41);
}

#[test]
fn terminal_replay_runs_with_the_cell_unlocked() {
    let variable = Variable::new(1);
    variable.as_observable().done();

    // The late subscriber gets the terminal instead of the initial value;
    // its handler writes back into the cell it subscribed to.
    let reentrant = variable.clone();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let _subscription = variable.subscribe(
        Callbacks::new()
            .on_next(move |value| sink.lock().push(value))
            .on_done(move || reentrant.set(2)),
    );

    assert!(seen.lock().is_empty());
    assert_eq!(variable.get(), 2);
}

#[test]
fn unique_drops_writes_equal_to_current() {
    let state = Unique::new("idle");
    let seen = Arc::new(Mutex::new(Vec::new()));

    let sink = Arc::clone(&seen);
    let _subscription = state.subscribe_next(move |value| sink.lock().push(value));
    state.set("busy");
    state.set("busy");
    state.set("idle");
    state.set("idle");

    assert_eq!(state.get(), "idle");
    assert_eq!(*seen.lock(), vec!["idle", "busy", "idle"]);
}

#[test]
fn unique_delivers_the_current_value_on_subscribe() {
    let state = Unique::new(7);
    let seen = Arc::new(Mutex::new(Vec::new()));

    let sink = Arc::clone(&seen);
    let _subscription = state.subscribe_next(move |value| sink.lock().push(value));

    assert_eq!(*seen.lock(), vec![7]);
}
