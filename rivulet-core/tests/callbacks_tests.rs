use rivulet_core::{Callbacks, Event, RivuletError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[test]
fn empty_callbacks_ignore_every_event() {
    let callbacks: Callbacks<i32> = Callbacks::new();

    callbacks.dispatch(Event::Next(1));
    callbacks.dispatch(Event::Error(RivuletError::processing_error("boom")));
    callbacks.dispatch(Event::Done);
}

#[test]
fn dispatch_routes_to_the_matching_slot_only() {
    let nexts = Arc::new(AtomicUsize::new(0));
    let errors = Arc::new(AtomicUsize::new(0));
    let dones = Arc::new(AtomicUsize::new(0));

    let next_count = Arc::clone(&nexts);
    let error_count = Arc::clone(&errors);
    let done_count = Arc::clone(&dones);
    let callbacks = Callbacks::new()
        .on_next(move |_: i32| {
            next_count.fetch_add(1, Ordering::SeqCst);
        })
        .on_error(move |_| {
            error_count.fetch_add(1, Ordering::SeqCst);
        })
        .on_done(move || {
            done_count.fetch_add(1, Ordering::SeqCst);
        });

    callbacks.dispatch(Event::Next(1));
    callbacks.dispatch(Event::Next(2));
    callbacks.dispatch(Event::Done);

    assert_eq!(nexts.load(Ordering::SeqCst), 2);
    assert_eq!(errors.load(Ordering::SeqCst), 0);
    assert_eq!(dones.load(Ordering::SeqCst), 1);
}

#[test]
fn clones_share_the_handlers() {
    let nexts = Arc::new(AtomicUsize::new(0));

    let next_count = Arc::clone(&nexts);
    let callbacks = Callbacks::new().on_next(move |_: i32| {
        next_count.fetch_add(1, Ordering::SeqCst);
    });
    let cloned = callbacks.clone();

    callbacks.dispatch(Event::Next(1));
    cloned.dispatch(Event::Next(2));

    assert_eq!(nexts.load(Ordering::SeqCst), 2);
}

#[test]
fn later_builder_calls_replace_the_slot() {
    let first = Arc::new(AtomicUsize::new(0));
    let second = Arc::new(AtomicUsize::new(0));

    let first_count = Arc::clone(&first);
    let second_count = Arc::clone(&second);
    let callbacks = Callbacks::new()
        .on_next(move |_: i32| {
            first_count.fetch_add(1, Ordering::SeqCst);
        })
        .on_next(move |_: i32| {
            second_count.fetch_add(1, Ordering::SeqCst);
        });

    callbacks.dispatch(Event::Next(1));

    assert_eq!(first.load(Ordering::SeqCst), 0);
    assert_eq!(second.load(Ordering::SeqCst), 1);
}
