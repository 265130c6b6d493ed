// Copyright 2026 the rivulet authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Capability record holding a subscriber's event handlers.
//!
//! A [`Callbacks`] value carries up to three handler slots, one per
//! [`Event`](crate::Event) kind. An absent slot is a true no-op: dispatching
//! an event whose slot is empty does nothing. At most one slot is invoked per
//! dispatched event.
//!
//! # Example
//!
//! ```
//! use rivulet_core::{Callbacks, Event};
//!
//! let callbacks = Callbacks::new()
//!     .on_next(|value: i32| println!("got {value}"))
//!     .on_done(|| println!("finished"));
//!
//! callbacks.dispatch(Event::Next(7));
//! callbacks.dispatch(Event::Done);
//! ```

use crate::error::RivuletError;
use crate::event::Event;
use std::sync::Arc;

type NextFn<T> = Arc<dyn Fn(T) + Send + Sync>;
type ErrorFn = Arc<dyn Fn(RivuletError) + Send + Sync>;
type DoneFn = Arc<dyn Fn() + Send + Sync>;

/// Optional per-event-kind handlers for one subscription.
pub struct Callbacks<T> {
    next: Option<NextFn<T>>,
    error: Option<ErrorFn>,
    done: Option<DoneFn>,
}

impl<T> Callbacks<T> {
    /// Creates an empty record; every slot is a no-op until set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next: None,
            error: None,
            done: None,
        }
    }

    /// Sets the handler invoked for each `Next` value.
    #[must_use]
    pub fn on_next(mut self, f: impl Fn(T) + Send + Sync + 'static) -> Self {
        self.next = Some(Arc::new(f));
        self
    }

    /// Sets the handler invoked for a terminal `Error`.
    #[must_use]
    pub fn on_error(mut self, f: impl Fn(RivuletError) + Send + Sync + 'static) -> Self {
        self.error = Some(Arc::new(f));
        self
    }

    /// Sets the handler invoked for the terminal `Done` marker.
    #[must_use]
    pub fn on_done(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.done = Some(Arc::new(f));
        self
    }

    /// Invokes the slot matching `event`, if present.
    pub fn dispatch(&self, event: Event<T>) {
        match event {
            Event::Next(value) => {
                if let Some(next) = &self.next {
                    next(value);
                }
            }
            Event::Error(error) => {
                if let Some(handler) = &self.error {
                    handler(error);
                }
            }
            Event::Done => {
                if let Some(done) = &self.done {
                    done();
                }
            }
        }
    }
}

impl<T> Default for Callbacks<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Callbacks<T> {
    fn clone(&self) -> Self {
        Self {
            next: self.next.clone(),
            error: self.error.clone(),
            done: self.done.clone(),
        }
    }
}
