// Copyright 2026 the rivulet authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_core::{Executor, Task};
use std::sync::atomic::{AtomicUsize, Ordering};

/// [`Executor`] that runs every task synchronously on the calling thread.
///
/// Deliveries stay deterministic while still exercising the executor
/// hand-off seam; a counter records how many tasks went through it.
#[derive(Debug, Default)]
pub struct InlineExecutor {
    handoffs: AtomicUsize,
}

impl InlineExecutor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tasks handed to this executor so far.
    #[must_use]
    pub fn handoffs(&self) -> usize {
        self.handoffs.load(Ordering::SeqCst)
    }
}

impl Executor for InlineExecutor {
    fn execute(&self, task: Task) {
        self.handoffs.fetch_add(1, Ordering::SeqCst);
        task();
    }
}
