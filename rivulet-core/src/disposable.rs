// Copyright 2026 the rivulet authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Disposal primitives tying resource lifetimes together.
//!
//! [`Disposable`] is the release hook implemented by subscriptions and
//! schedulers. A [`Disposer`] collects disposables and releases them all at
//! once, also when dropped. Operator-created observables keep their upstream
//! handle and subscription (and scheduler, where present) in their internal
//! disposer, so dropping the last handle to a downstream observable detaches
//! the whole chain instead of leaking subscriptions.

use parking_lot::Mutex;

/// A resource that can be released exactly once, idempotently.
pub trait Disposable {
    /// Releases the resource. Calling this more than once has no further
    /// effect.
    fn dispose(&self);
}

/// Collects [`Disposable`]s and releases them together.
///
/// Disposal runs at the latest when the `Disposer` is dropped.
///
/// # Example
///
/// ```
/// use rivulet_core::{Disposable, Disposer};
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::sync::Arc;
///
/// struct Flag(Arc<AtomicBool>);
///
/// impl Disposable for Flag {
///     fn dispose(&self) {
///         self.0.store(true, Ordering::SeqCst);
///     }
/// }
///
/// let released = Arc::new(AtomicBool::new(false));
/// {
///     let disposer = Disposer::new();
///     disposer.add(Box::new(Flag(released.clone())));
/// }
/// assert!(released.load(Ordering::SeqCst));
/// ```
#[derive(Default)]
pub struct Disposer {
    items: Mutex<Vec<Box<dyn Disposable + Send + Sync>>>,
}

impl Disposer {
    /// Creates an empty disposer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a disposable for later release.
    pub fn add(&self, disposable: Box<dyn Disposable + Send + Sync>) {
        self.items.lock().push(disposable);
    }

    /// Releases every registered disposable and forgets it.
    pub fn dispose_all(&self) {
        // Drain under the lock, dispose outside it: dispose() may call back
        // into arbitrary code.
        let items = std::mem::take(&mut *self.items.lock());
        for item in items {
            item.dispose();
        }
    }
}

impl Disposable for Disposer {
    fn dispose(&self) {
        self.dispose_all();
    }
}

impl Drop for Disposer {
    fn drop(&mut self) {
        self.dispose_all();
    }
}
