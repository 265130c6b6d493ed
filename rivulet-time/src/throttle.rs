// Copyright 2026 the rivulet authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Throttle operator bounding the downstream emission rate.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use rivulet_core::{Callbacks, Observable};

use crate::scheduler::Scheduler;

/// Extension trait providing the `throttle` operator for observables.
pub trait ThrottleExt<T> {
    /// Limits downstream emissions to at most one per `period`.
    ///
    /// This implements **trailing-edge** semantics:
    /// - Every upstream value overwrites a pending slot.
    /// - Once per period a tick emits the slot downstream and clears it.
    /// - A period in which nothing arrived emits nothing.
    ///
    /// The emitted value is therefore always the most recent one seen in its
    /// period. `Error` and `Done` pass through immediately without
    /// throttling. The returned observable owns the upstream subscription
    /// and the scheduler; dropping its last handle detaches both.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime context.
    fn throttle(&self, period: Duration) -> Observable<T>;
}

impl<T> ThrottleExt<T> for Observable<T>
where
    T: Clone + Send + 'static,
{
    fn throttle(&self, period: Duration) -> Observable<T> {
        let downstream = Observable::new();
        let scheduler = Scheduler::new(period);
        let latest: Arc<Mutex<Option<T>>> = Arc::new(Mutex::new(None));

        let slot = Arc::clone(&latest);
        let weak_error = downstream.downgrade();
        let weak_done = downstream.downgrade();
        let forward = Callbacks::new()
            .on_next(move |value| {
                *slot.lock() = Some(value);
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
        scheduler.start();

        downstream.retain_upstream(self.clone(), upstream);
        downstream.retain(tick_subscription);
        downstream.retain(scheduler);
        downstream
    }
}
