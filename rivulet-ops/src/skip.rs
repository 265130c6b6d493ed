// Copyright 2026 the rivulet authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Skip operator that discards the first n values of an observable.

use parking_lot::Mutex;
use rivulet_core::{Callbacks, Observable, RivuletError};
use std::sync::Arc;

/// Extension trait providing the `skip` operator for observables.
pub trait SkipExt<T> {
    /// Discards the first `first` values from this observable.
    ///
    /// - Values beyond the first `first` are forwarded unchanged.
    /// - `Error` and `Done` pass through immediately; they do not count
    ///   against the skip budget.
    /// - `skip(0)` forwards every value.
    /// - A negative `first` reports the misuse as a single
    ///   `InvalidArgument` error on the downstream, which terminates it.
    ///
    /// The returned observable owns a handle to the source and the
    /// subscription into it, so it can sit in the middle of a chain;
    /// dropping its last handle unsubscribes from the source.
    ///
    /// # Example
    ///
    /// ```
    /// use parking_lot::Mutex;
    /// use rivulet_core::Observable;
    /// use rivulet_ops::SkipExt;
    /// use std::sync::Arc;
    ///
    /// let source = Observable::new();
    /// let tail = source.skip(2);
    /// let seen = Arc::new(Mutex::new(Vec::new()));
    /// let sink = Arc::clone(&seen);
    /// let _subscription = tail.subscribe_next(move |value| sink.lock().push(value));
    ///
    /// for value in [1, 2, 3, 4] {
    ///     source.next(value);
    /// }
    ///
    /// assert_eq!(*seen.lock(), vec![3, 4]);
    /// ```
    fn skip(&self, first: i64) -> Observable<T>;
}

impl<T> SkipExt<T> for Observable<T>
where
    T: Clone + Send + 'static,
{
    fn skip(&self, first: i64) -> Observable<T> {
        let downstream = Observable::new();
        let remaining = Arc::new(Mutex::new(first));

        let weak = downstream.downgrade();
        let weak_error = weak.clone();
        let weak_done = weak.clone();
        let forward = Callbacks::new()
            .on_next(move |value| {
                let target = match weak.upgrade() {
                    Some(target) => target,
                    None => return,
                };
                // Decide under the lock, emit outside it.
                let before = {
                    let mut remaining = remaining.lock();
                    let before = *remaining;
                    *remaining = (before - 1).max(0);
                    before
                };
                if before == 0 {
                    target.next(value);
                } else if before < 0 {
                    target.error(RivuletError::invalid_argument(
                        "skip count must be nonzero",
                    ));
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

        let upstream = self.subscribe(forward);
        downstream.retain_upstream(self.clone(), upstream);
        downstream
    }
}
