// Copyright 2026 the rivulet authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Periodic tick source driving the time-based operators.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use rivulet_core::{Disposable, Observable};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Emits `()` on its tick subject once per period while running.
///
/// The scheduler is idle after construction. [`start`](Scheduler::start)
/// spawns a tick task whose first tick lands one full period later;
/// restarting while running aborts the previous task first, so the period
/// always begins anew. Handles are cheap to clone and share one underlying
/// scheduler; the tick task is aborted when the last handle drops.
pub struct Scheduler {
    inner: Arc<SchedulerInner>,
}

struct SchedulerInner {
    period: Duration,
    handle: Handle,
    ticks: Observable<()>,
    running: Mutex<Option<JoinHandle<()>>>,
}

impl Scheduler {
    /// Creates an idle scheduler with the given tick period.
    ///
    /// A zero period is raised to one millisecond so the tick loop cannot
    /// spin.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime context.
    #[must_use]
    pub fn new(period: Duration) -> Self {
        let period = period.max(Duration::from_millis(1));
        Self {
            inner: Arc::new(SchedulerInner {
                period,
                handle: Handle::current(),
                ticks: Observable::new(),
                running: Mutex::new(None),
            }),
        }
    }

    /// The subject receiving one `()` per elapsed period.
    #[must_use]
    pub fn ticks(&self) -> &Observable<()> {
        &self.inner.ticks
    }

    /// The effective tick period.
    #[must_use]
    pub fn period(&self) -> Duration {
        self.inner.period
    }

    /// Whether the tick task is currently running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.inner.running.lock().is_some()
    }

    /// Starts the tick task; the first tick lands one full period from now.
    ///
    /// When already running, the previous task is aborted and the period
    /// starts over. Abort lands at the task's next await point, so a tick
    /// that already passed its timer may still be delivered once after the
    /// restart.
    pub fn start(&self) {
        let mut running = self.inner.running.lock();
        if let Some(previous) = running.take() {
            previous.abort();
        }
        let ticks = self.inner.ticks.clone();
        let period = self.inner.period;
        *running = Some(self.inner.handle.spawn(async move {
            loop {
                tokio::time::sleep(period).await;
                ticks.next(());
            }
        }));
        crate::debug!("scheduler started, period {:?}", period);
    }

    /// Aborts the tick task; idempotent.
    pub fn stop(&self) {
        if let Some(task) = self.inner.running.lock().take() {
            task.abort();
            crate::debug!("scheduler stopped");
        }
    }
}

impl Clone for Scheduler {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Disposable for Scheduler {
    fn dispose(&self) {
        self.stop();
    }
}

impl Drop for SchedulerInner {
    fn drop(&mut self) {
        if let Some(task) = self.running.get_mut().take() {
            task.abort();
        }
    }
}
