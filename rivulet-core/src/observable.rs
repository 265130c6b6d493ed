// Copyright 2026 the rivulet authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The hot, multicast subject at the center of the crate.
//!
//! An [`Observable`] pushes every emitted value to all currently registered
//! subscribers, in subscription order. It keeps no history: a value emitted
//! while nobody listens is gone. The one exception is the terminal event,
//! [`error`](Observable::error) or [`done`](Observable::done), which is
//! latched once and replayed to anyone subscribing afterwards.
//!
//! Handles are cheap to clone and share one underlying subject. All
//! operations are safe to call from any thread and from inside a running
//! handler; fan-out iterates a snapshot, so a handler may subscribe, emit or
//! remove subscriptions (including its own) without deadlocking.
//!
//! # Example
//!
//! ```
//! use rivulet_core::{Callbacks, Observable};
//! use parking_lot::Mutex;
//! use std::sync::Arc;
//!
//! let subject = Observable::new();
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&seen);
//! let subscription = subject.subscribe(Callbacks::new().on_next(move |value| {
//!     sink.lock().push(value);
//! }));
//!
//! subject.next(1);
//! subject.next(2);
//! subject.done();
//! subject.next(3); // terminated, dropped
//!
//! assert_eq!(*seen.lock(), vec![1, 2]);
//! assert!(!subscription.is_subscribed());
//! ```

use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use crate::callbacks::Callbacks;
use crate::disposable::{Disposable, Disposer};
use crate::error::RivuletError;
use crate::event::Event;
use crate::executor::Executor;
use crate::subscriber::Subscriber;

struct SubjectState<T> {
    subscribers: Vec<Subscriber<T>>,
    terminal: Option<Event<T>>,
    retained: Disposer,
}

impl<T> Default for SubjectState<T> {
    fn default() -> Self {
        Self {
            subscribers: Vec::new(),
            terminal: None,
            retained: Disposer::new(),
        }
    }
}

/// A hot, multicast stream of [`Event`]s.
pub struct Observable<T> {
    state: Arc<Mutex<SubjectState<T>>>,
}

impl<T> Observable<T>
where
    T: Clone + Send + 'static,
{
    /// Creates a subject with no subscribers and no terminal event.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(SubjectState::default())),
        }
    }

    /// Returns a non-owning handle to this subject.
    #[must_use]
    pub fn downgrade(&self) -> WeakObservable<T> {
        WeakObservable {
            state: Arc::downgrade(&self.state),
        }
    }

    /// Registers `callbacks` for caller-context delivery.
    ///
    /// Events are dispatched on whichever thread calls [`next`](Self::next),
    /// [`error`](Self::error) or [`done`](Self::done). If the subject already
    /// terminated, the stored terminal event is delivered to `callbacks`
    /// right away and the returned handle is not registered.
    pub fn subscribe(&self, callbacks: Callbacks<T>) -> Subscriber<T> {
        self.register(callbacks, None)
    }

    /// Registers `callbacks` with every delivery handed off to `executor`.
    pub fn subscribe_on(
        &self,
        executor: Arc<dyn Executor>,
        callbacks: Callbacks<T>,
    ) -> Subscriber<T> {
        self.register(callbacks, Some(executor))
    }

    /// Shorthand for subscribing with only a value handler.
    pub fn subscribe_next<F>(&self, next: F) -> Subscriber<T>
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        self.subscribe(Callbacks::new().on_next(next))
    }

    pub(crate) fn register(
        &self,
        callbacks: Callbacks<T>,
        executor: Option<Arc<dyn Executor>>,
    ) -> Subscriber<T> {
        let (subscriber, replay) = self.admit(callbacks, executor);
        if let Some(event) = replay {
            subscriber.notify(event);
        }
        subscriber
    }

    // Adds the subscriber to the live list, or hands back the latched
    // terminal. The caller delivers the replay once its own locks are
    // released; nothing is dispatched in here.
    pub(crate) fn admit(
        &self,
        callbacks: Callbacks<T>,
        executor: Option<Arc<dyn Executor>>,
    ) -> (Subscriber<T>, Option<Event<T>>) {
        let subscriber = Subscriber::new(callbacks, executor, self.downgrade());
        let replay = {
            let mut state = self.state.lock();
            match &state.terminal {
                Some(event) => Some(event.clone()),
                None => {
                    state.subscribers.push(subscriber.clone());
                    None
                }
            }
        };
        (subscriber, replay)
    }

    /// Emits a value to every current subscriber. A no-op once the subject
    /// has terminated.
    pub fn next(&self, value: T) {
        self.emit(Event::Next(value));
    }

    /// Terminates the subject with an error.
    ///
    /// The first terminal event wins; later `error`/`done` calls are
    /// dropped. Subscribers present at latch time receive the event and the
    /// subject stops referencing them.
    pub fn error(&self, error: RivuletError) {
        self.emit(Event::Error(error));
    }

    /// Terminates the subject normally. Same latch rules as
    /// [`error`](Self::error).
    pub fn done(&self) {
        self.emit(Event::Done);
    }

    fn emit(&self, event: Event<T>) {
        // Latch check, latch write and snapshot happen under one lock, so
        // admission is totally ordered with termination. Handlers run on the
        // snapshot outside the lock and may re-enter freely.
        let snapshot = {
            let mut state = self.state.lock();
            if state.terminal.is_some() {
                return;
            }
            if event.is_terminal() {
                state.terminal = Some(event.clone());
                std::mem::take(&mut state.subscribers)
            } else {
                state.subscribers.clone()
            }
        };
        for subscriber in &snapshot {
            subscriber.notify(event.clone());
        }
    }

    /// Removes every registration matching `subscriber` (by id).
    ///
    /// Safe to call from inside a handler; the current fan-out pass still
    /// runs on its snapshot.
    pub fn remove_subscriber(&self, subscriber: &Subscriber<T>) {
        // Removed entries drop outside the lock; their callbacks may own
        // subjects whose teardown re-enters this one.
        let _removed = {
            let mut state = self.state.lock();
            let (kept, removed): (Vec<_>, Vec<_>) = std::mem::take(&mut state.subscribers)
                .into_iter()
                .partition(|existing| existing != subscriber);
            state.subscribers = kept;
            removed
        };
    }

    /// Drops every registration at once.
    pub fn remove_subscribers(&self) {
        let _removed = std::mem::take(&mut self.state.lock().subscribers);
    }

    pub(crate) fn contains(&self, subscriber: &Subscriber<T>) -> bool {
        self.state.lock().subscribers.iter().any(|s| s == subscriber)
    }

    /// Number of live registrations.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.state.lock().subscribers.len()
    }

    /// Whether a terminal event has been latched.
    #[must_use]
    pub fn is_terminated(&self) -> bool {
        self.state.lock().terminal.is_some()
    }

    /// Returns a subject mirroring this one with every event handed off to
    /// `executor`.
    ///
    /// The returned subject keeps the bridging subscription alive for as long
    /// as it exists; dropping its last handle unsubscribes from `self`.
    pub fn observe_on(&self, executor: Arc<dyn Executor>) -> Observable<T> {
        let downstream = Observable::new();
        let weak = downstream.downgrade();
        let weak_error = weak.clone();
        let weak_done = weak.clone();
        let forward = Callbacks::new()
            .on_next(move |value| {
                if let Some(target) = weak.upgrade() {
                    target.next(value);
                }
            })
            .on_error(move |error| {
                if let Some(target) = weak_error.upgrade() {
                    target.error(error);
                }
            })
            .on_done(move || {
                if let Some(target) = weak_done.upgrade() {
                    target.done();
                }
            });
        let upstream = self.subscribe_on(executor, forward);
        downstream.retain_upstream(self.clone(), upstream);
        downstream
    }

    /// Ties `disposable`'s lifetime to this subject: it is disposed when the
    /// last handle to the subject drops.
    ///
    /// Operators use this to keep a scheduler or an auxiliary subscription
    /// alive exactly as long as the downstream subject.
    pub fn retain(&self, disposable: impl Disposable + Send + Sync + 'static) {
        self.state.lock().retained.add(Box::new(disposable));
    }

    /// Ties an upstream subject and the subscription into it to this
    /// subject's lifetime.
    ///
    /// The strong `upstream` handle keeps a mid-chain subject alive while
    /// anything downstream of it is; `subscription` is unsubscribed when the
    /// last handle to this subject drops, so chains detach from their source
    /// link by link.
    pub fn retain_upstream<U>(&self, upstream: Observable<U>, subscription: Subscriber<U>)
    where
        U: Clone + Send + 'static,
    {
        self.retain(UpstreamLink {
            _upstream: upstream,
            subscription,
        });
    }
}

impl<T> Default for Observable<T>
where
    T: Clone + Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<T> std::fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock();
        f.debug_struct("Observable")
            .field("subscribers", &state.subscribers.len())
            .field("terminated", &state.terminal.is_some())
            .finish()
    }
}

struct UpstreamLink<U> {
    // Held for ownership only; dropping it may free a mid-chain subject.
    _upstream: Observable<U>,
    subscription: Subscriber<U>,
}

impl<U> Disposable for UpstreamLink<U>
where
    U: Clone + Send + 'static,
{
    fn dispose(&self) {
        self.subscription.unsubscribe();
    }
}

/// A non-owning handle to an [`Observable`].
///
/// Operator closures capture their downstream as a `WeakObservable` so the
/// forwarding subscription never keeps the downstream alive on its own.
pub struct WeakObservable<T> {
    state: Weak<Mutex<SubjectState<T>>>,
}

impl<T> WeakObservable<T>
where
    T: Clone + Send + 'static,
{
    /// Recovers a strong handle if the subject is still alive.
    #[must_use]
    pub fn upgrade(&self) -> Option<Observable<T>> {
        self.state.upgrade().map(|state| Observable { state })
    }
}

impl<T> Clone for WeakObservable<T> {
    fn clone(&self) -> Self {
        Self {
            state: Weak::clone(&self.state),
        }
    }
}
