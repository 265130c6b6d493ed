// Copyright 2026 the rivulet authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Rivulet
//!
//! A push-based reactive observable library: hot subjects, per-subscription
//! callback records, executor-routed delivery, observable value cells and
//! time-based operators.
//!
//! ## Overview
//!
//! An [`Observable`] is a hot subject. Producers push values into it with
//! [`next`](Observable::next) and close it with [`error`](Observable::error)
//! or [`done`](Observable::done). Subscribers attach a [`Callbacks`] record
//! and receive every event emitted after they joined; the first terminal
//! event latches the subject, and late subscribers get the stored terminal
//! replayed instead of joining.
//!
//! On top of the core subject:
//!
//! - [`Variable`] and [`Unique`] are observable value cells that hand each
//!   new subscriber the current value before live updates.
//! - [`SkipExt::skip`], [`ThrottleExt::throttle`] and
//!   [`DebounceExt::debounce`] derive a new observable from an existing one.
//! - [`Observable::subscribe_on`] and [`Observable::observe_on`] route
//!   deliveries through an [`Executor`] instead of the emitter's thread.
//! - [`Observable::block`] lets async code await the first value or terminal
//!   event.
//!
//! ## Ownership
//!
//! Subscriptions are owned, never leaked. A derived observable (an operator
//! output or an `observe_on` mirror) owns its upstream subscription, so
//! dropping its last handle detaches it from the source. Individual
//! [`Subscriber`] handles can be dropped freely without unsubscribing; call
//! [`unsubscribe`](Subscriber::unsubscribe) to detach one, or park handles
//! in a [`Disposer`] for bulk teardown.
//!
//! ## Quick Start
//!
//! ```
//! use rivulet::{Callbacks, Observable};
//! use std::sync::{Arc, Mutex};
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&seen);
//!
//! let numbers = Observable::new();
//! let _subscription = numbers.subscribe(
//!     Callbacks::new()
//!         .on_next(move |n: i32| sink.lock().unwrap().push(n))
//!         .on_done(|| println!("closed")),
//! );
//!
//! numbers.next(1);
//! numbers.next(2);
//! numbers.done();
//!
//! assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
//! ```
//!
//! ## Time-based operators
//!
//! The throttle and debounce operators tick on a Tokio runtime:
//!
//! ```rust,no_run
//! use rivulet::{Observable, ThrottleExt};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() {
//!     let sensor = Observable::new();
//!     let throttled = sensor.throttle(Duration::from_millis(100));
//!     let _subscription = throttled.subscribe_next(|reading: f64| {
//!         println!("at most one reading per period: {reading}");
//!     });
//!
//!     sensor.next(20.1);
//!     sensor.next(20.4);
//! }
//! ```

// Re-export the core subject, events and delivery contexts
pub use rivulet_core::{
    BlockResult, Callbacks, Disposable, Disposer, Event, Executor, Observable, Result,
    RivuletError, Subscriber, Task, TokioExecutor, Unique, Variable, WeakObservable,
};

// Re-export the operator extension traits and the scheduler behind them
pub use rivulet_ops::SkipExt;
pub use rivulet_time::{DebounceExt, Scheduler, ThrottleExt};

/// Prelude module for convenient imports
pub mod prelude {
    pub use rivulet_core::{
        Callbacks, Disposable, Event, Observable, RivuletError, Subscriber, Unique, Variable,
    };
    pub use rivulet_ops::SkipExt;
    pub use rivulet_time::{DebounceExt, ThrottleExt};
}
