// Copyright 2026 the rivulet authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Bridge from a hot subject into async code.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::Semaphore;

use crate::callbacks::Callbacks;
use crate::error::RivuletError;
use crate::observable::Observable;

/// The first signal observed by [`Observable::block`].
///
/// `value` is set for a `Next` signal, `error` for an `Error` signal; both
/// stay `None` when the subject completed without emitting.
#[derive(Debug, Clone)]
pub struct BlockResult<T> {
    pub value: Option<T>,
    pub error: Option<RivuletError>,
}

impl<T> Default for BlockResult<T> {
    fn default() -> Self {
        Self {
            value: None,
            error: None,
        }
    }
}

impl<T> Observable<T>
where
    T: Clone + Send + 'static,
{
    /// Waits for the next signal from this subject.
    ///
    /// Subscribes, parks the calling task until the subject emits anything
    /// (a value, an error or completion), then unsubscribes and reports that
    /// first signal. On an already-terminated subject this returns
    /// immediately with the latched terminal event.
    ///
    /// # Example
    ///
    /// ```
    /// use rivulet_core::Observable;
    ///
    /// #[tokio::main(flavor = "current_thread")]
    /// async fn main() {
    ///     let subject = Observable::new();
    ///     let producer = subject.clone();
    ///     tokio::spawn(async move { producer.next(5) });
    ///
    ///     let result = subject.block().await;
    ///     assert_eq!(result.value, Some(5));
    ///     assert!(result.error.is_none());
    /// }
    /// ```
    pub async fn block(&self) -> BlockResult<T> {
        let semaphore = Arc::new(Semaphore::new(0));
        let slot: Arc<Mutex<Option<BlockResult<T>>>> = Arc::new(Mutex::new(None));

        let next_slot = Arc::clone(&slot);
        let next_semaphore = Arc::clone(&semaphore);
        let error_slot = Arc::clone(&slot);
        let error_semaphore = Arc::clone(&semaphore);
        let done_slot = Arc::clone(&slot);
        let done_semaphore = Arc::clone(&semaphore);

        let callbacks = Callbacks::new()
            .on_next(move |value| {
                let mut slot = next_slot.lock();
                if slot.is_none() {
                    *slot = Some(BlockResult {
                        value: Some(value),
                        error: None,
                    });
                    next_semaphore.add_permits(1);
                }
            })
            .on_error(move |error| {
                let mut slot = error_slot.lock();
                if slot.is_none() {
                    *slot = Some(BlockResult {
                        value: None,
                        error: Some(error),
                    });
                    error_semaphore.add_permits(1);
                }
            })
            .on_done(move || {
                let mut slot = done_slot.lock();
                if slot.is_none() {
                    *slot = Some(BlockResult::default());
                    done_semaphore.add_permits(1);
                }
            });

        let subscription = self.subscribe(callbacks);
        // The semaphore is owned by this call and never closed.
        let _permit = semaphore.acquire().await;
        subscription.unsubscribe();

        let result = slot.lock().take();
        result.unwrap_or_default()
    }
}
