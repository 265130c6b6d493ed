// Copyright 2026 the rivulet authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Subscription handles returned by [`Observable::subscribe`].
//!
//! A [`Subscriber`] pairs a [`Callbacks`] record with an optional delivery
//! [`Executor`] and a weak back-reference to its owning observable. Handles
//! are cheap to clone and compare by identity; dropping a handle does **not**
//! end the subscription, call [`Subscriber::unsubscribe`] (or dispose it) for
//! that.
//!
//! [`Observable::subscribe`]: crate::Observable::subscribe

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::callbacks::Callbacks;
use crate::disposable::Disposable;
use crate::event::Event;
use crate::executor::Executor;
use crate::observable::WeakObservable;

static NEXT_SUBSCRIBER_ID: AtomicU64 = AtomicU64::new(0);

/// A handle to one registration on an [`Observable`](crate::Observable).
///
/// Every subscription gets a process-unique id; equality and removal go by
/// that id, so clones of the same handle are interchangeable.
pub struct Subscriber<T> {
    inner: Arc<SubscriberInner<T>>,
}

struct SubscriberInner<T> {
    id: u64,
    callbacks: Callbacks<T>,
    executor: Option<Arc<dyn Executor>>,
    owner: WeakObservable<T>,
}

impl<T> Subscriber<T>
where
    T: Clone + Send + 'static,
{
    pub(crate) fn new(
        callbacks: Callbacks<T>,
        executor: Option<Arc<dyn Executor>>,
        owner: WeakObservable<T>,
    ) -> Self {
        Self {
            inner: Arc::new(SubscriberInner {
                id: NEXT_SUBSCRIBER_ID.fetch_add(1, Ordering::Relaxed),
                callbacks,
                executor,
                owner,
            }),
        }
    }

    /// The process-unique id of this subscription.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.inner.id
    }

    /// Whether this handle is still registered on its owning observable.
    ///
    /// Returns `false` after [`unsubscribe`](Self::unsubscribe), after the
    /// owner delivered a terminal event, or once the owner itself is gone.
    #[must_use]
    pub fn is_subscribed(&self) -> bool {
        self.inner
            .owner
            .upgrade()
            .is_some_and(|owner| owner.contains(self))
    }

    /// Removes this subscription from its owning observable.
    ///
    /// Idempotent; a no-op once the owner is gone.
    pub fn unsubscribe(&self) {
        if let Some(owner) = self.inner.owner.upgrade() {
            owner.remove_subscriber(self);
        }
    }

    /// Routes one event to the callbacks, through the executor when one was
    /// attached at subscribe time.
    pub(crate) fn notify(&self, event: Event<T>) {
        match &self.inner.executor {
            Some(executor) => {
                let subscriber = self.clone();
                executor.execute(Box::new(move || subscriber.deliver(event)));
            }
            None => self.deliver(event),
        }
    }

    fn deliver(&self, event: Event<T>) {
        let callbacks = &self.inner.callbacks;
        if catch_unwind(AssertUnwindSafe(|| callbacks.dispatch(event))).is_err() {
            crate::warn!("subscriber {} panicked in a handler, removing it", self.id());
            self.unsubscribe();
        }
    }
}

impl<T> Clone for Subscriber<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> PartialEq for Subscriber<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner.id == other.inner.id
    }
}

impl<T> Eq for Subscriber<T> {}

impl<T> std::fmt::Debug for Subscriber<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscriber").field("id", &self.inner.id).finish()
    }
}

impl<T> Disposable for Subscriber<T>
where
    T: Clone + Send + 'static,
{
    fn dispose(&self) {
        self.unsubscribe();
    }
}
