// Copyright 2026 the rivulet authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Debounce operator emitting only after a quiet period.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use rivulet_core::{Callbacks, Observable};

use crate::scheduler::Scheduler;

/// Extension trait providing the `debounce` operator for observables.
pub trait DebounceExt<T> {
    /// Emits a value downstream only once `period` has elapsed with no newer
    /// upstream value.
    ///
    /// - Every upstream value overwrites a pending slot and restarts the
    ///   quiet-period timer.
    /// - When the timer finally fires, the slot is emitted and cleared.
    /// - A steady stream arriving faster than `period` therefore emits
    ///   nothing until it pauses.
    ///
    /// `Error` and `Done` pass through immediately; a pending value that has
    /// not survived a quiet period yet is dropped with them. The returned
    /// observable owns the upstream subscription and the scheduler; dropping
    /// its last handle detaches both.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime context.
    fn debounce(&self, period: Duration) -> Observable<T>;
}

impl<T> DebounceExt<T> for Observable<T>
where
    T: Clone + Send + 'static,
{
    fn debounce(&self, period: Duration) -> Observable<T> {
        let downstream = Observable::new();
        let scheduler = Scheduler::new(period);
        let latest: Arc<Mutex<Option<T>>> = Arc::new(Mutex::new(None));

        let slot = Arc::clone(&latest);
        let restart = scheduler.clone();
        let weak_error = downstream.downgrade();
        let weak_done = downstream.downgrade();
        let forward = Callbacks::new()
            .on_next(move |value| {
                *slot.lock() = Some(value);
                // Restarting resets the quiet period; ticks never accumulate.
                restart.start();
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

        let slot = Arc::clone(&latest);
        let weak = downstream.downgrade();
        let tick_subscription = scheduler.ticks().subscribe_next(move |()| {
            let pending = slot.lock().take();
            if let Some(value) = pending {
                if let Some(target) = weak.upgrade() {
                    target.next(value);
                }
            }
        });

        downstream.retain_upstream(self.clone(), upstream);
        downstream.retain(tick_subscription);
        downstream.retain(scheduler);
        downstream
    }
}
