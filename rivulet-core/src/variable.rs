// Copyright 2026 the rivulet authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Observable value cells.
//!
//! A [`Variable`] always holds a current value; subscribing delivers that
//! value right away and then every later [`set`](Variable::set). A
//! [`Unique`] is the same cell with duplicate writes suppressed.
//!
//! # Example
//!
//! ```
//! use rivulet_core::Variable;
//! use parking_lot::Mutex;
//! use std::sync::Arc;
//!
//! let counter = Variable::new(0);
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&seen);
//! let _subscription = counter.subscribe_next(move |value| sink.lock().push(value));
//!
//! counter.set(1);
//! counter.set(2);
//!
//! assert_eq!(counter.get(), 2);
//! assert_eq!(*seen.lock(), vec![0, 1, 2]);
//! ```

use std::sync::Arc;

use parking_lot::Mutex;

use crate::callbacks::Callbacks;
use crate::event::Event;
use crate::executor::Executor;
use crate::observable::Observable;
use crate::subscriber::Subscriber;

/// A value cell whose writes are observable.
pub struct Variable<T> {
    inner: Arc<VariableInner<T>>,
}

struct VariableInner<T> {
    value: Mutex<T>,
    subject: Observable<T>,
}

impl<T> Variable<T>
where
    T: Clone + Send + 'static,
{
    /// Creates a cell holding `initial`.
    #[must_use]
    pub fn new(initial: T) -> Self {
        Self {
            inner: Arc::new(VariableInner {
                value: Mutex::new(initial),
                subject: Observable::new(),
            }),
        }
    }

    /// A copy of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.inner.value.lock().clone()
    }

    /// Stores `value` and emits it to all subscribers.
    pub fn set(&self, value: T) {
        *self.inner.value.lock() = value.clone();
        self.inner.subject.next(value);
    }

    /// Stores and emits `value` only when it differs from the current value.
    pub fn set_if_changed(&self, value: T)
    where
        T: PartialEq,
    {
        {
            let mut current = self.inner.value.lock();
            if *current == value {
                return;
            }
            *current = value.clone();
        }
        self.inner.subject.next(value);
    }

    /// Subscribes with caller-context delivery; the current value arrives
    /// first.
    pub fn subscribe(&self, callbacks: Callbacks<T>) -> Subscriber<T> {
        self.register(callbacks, None)
    }

    /// Subscribes with delivery handed off to `executor`; the current value
    /// arrives first, through the executor like everything else.
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

    /// A handle to the underlying subject, for composing with operators.
    #[must_use]
    pub fn as_observable(&self) -> Observable<T> {
        self.inner.subject.clone()
    }

    fn register(
        &self,
        callbacks: Callbacks<T>,
        executor: Option<Arc<dyn Executor>>,
    ) -> Subscriber<T> {
        // Registration and the snapshot of the current value happen under the
        // value lock, so no `set` can slip between them. Nothing is delivered
        // until the guard is released; handlers may re-enter this cell.
        let (subscriber, replay, current) = {
            let value = self.inner.value.lock();
            let (subscriber, replay) = self.inner.subject.admit(callbacks, executor);
            (subscriber, replay, value.clone())
        };
        match replay {
            // Terminated through `as_observable`; the terminal event replaces
            // the initial value.
            Some(event) => subscriber.notify(event),
            None if subscriber.is_subscribed() => subscriber.notify(Event::Next(current)),
            None => {}
        }
        subscriber
    }
}

impl<T> Clone for Variable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

/// A [`Variable`] that drops writes equal to the current value.
///
/// ```
/// use rivulet_core::Unique;
/// use parking_lot::Mutex;
/// use std::sync::Arc;
///
/// let state = Unique::new("idle");
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&seen);
/// let _subscription = state.subscribe_next(move |value| sink.lock().push(value));
///
/// state.set("busy");
/// state.set("busy"); // suppressed
/// state.set("idle");
///
/// assert_eq!(*seen.lock(), vec!["idle", "busy", "idle"]);
/// ```
pub struct Unique<T> {
    variable: Variable<T>,
}

impl<T> Unique<T>
where
    T: Clone + PartialEq + Send + 'static,
{
    /// Creates a cell holding `initial`.
    #[must_use]
    pub fn new(initial: T) -> Self {
        Self {
            variable: Variable::new(initial),
        }
    }

    /// A copy of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.variable.get()
    }

    /// Stores and emits `value` unless it equals the current value.
    pub fn set(&self, value: T) {
        self.variable.set_if_changed(value);
    }

    /// Subscribes with caller-context delivery; the current value arrives
    /// first.
    pub fn subscribe(&self, callbacks: Callbacks<T>) -> Subscriber<T> {
        self.variable.subscribe(callbacks)
    }

    /// Subscribes with delivery handed off to `executor`.
    pub fn subscribe_on(
        &self,
        executor: Arc<dyn Executor>,
        callbacks: Callbacks<T>,
    ) -> Subscriber<T> {
        self.variable.subscribe_on(executor, callbacks)
    }

    /// Shorthand for subscribing with only a value handler.
    pub fn subscribe_next<F>(&self, next: F) -> Subscriber<T>
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        self.variable.subscribe_next(next)
    }

    /// A handle to the underlying subject, for composing with operators.
    #[must_use]
    pub fn as_observable(&self) -> Observable<T> {
        self.variable.as_observable()
    }
}

impl<T> Clone for Unique<T> {
    fn clone(&self) -> Self {
        Self {
            variable: self.variable.clone(),
        }
    }
}
