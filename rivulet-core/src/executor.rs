// Copyright 2026 the rivulet authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Delivery-context abstraction for handed-off subscriber notification.
//!
//! A subscriber registered through
//! [`subscribe_on`](crate::Observable::subscribe_on) receives its events via
//! an [`Executor`] instead of the emitting caller's thread. The executor is
//! injected per subscription, so delivery context stays explicit and
//! testable rather than flowing through an ambient global scheduler.

use tokio::runtime::Handle;

/// A deferred unit of subscriber delivery.
pub type Task = Box<dyn FnOnce() + Send>;

/// An execution context that runs delivery tasks.
///
/// Implementations decide where and when a task runs. Ordering between tasks
/// handed to the same executor is implementation-defined; the observable core
/// only guarantees ordering for subscribers delivered in the caller's
/// context.
pub trait Executor: Send + Sync {
    /// Schedules `task` to run on this context.
    fn execute(&self, task: Task);
}

/// [`Executor`] that spawns each delivery onto a Tokio runtime.
#[derive(Clone, Debug)]
pub struct TokioExecutor {
    handle: Handle,
}

impl TokioExecutor {
    /// Creates an executor bound to the current Tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime context.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handle: Handle::current(),
        }
    }

    /// Creates an executor bound to the given runtime handle.
    #[must_use]
    pub const fn from_handle(handle: Handle) -> Self {
        Self { handle }
    }
}

impl Default for TokioExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl Executor for TokioExecutor {
    fn execute(&self, task: Task) {
        self.handle.spawn(async move {
            task();
        });
    }
}
