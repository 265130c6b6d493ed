// Copyright 2026 the rivulet authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Time-based operators for rivulet observables, driven by a periodic
//! scheduler.
//!
//! This crate provides rate limiting and quiet-period filtering for hot
//! observables. Both operators share the same chassis: a [`Scheduler`] ticks
//! on a Tokio task, a pending slot holds the most recent upstream value, and
//! each tick decides what reaches the downstream subject.
//!
//! # Overview
//!
//! - **[`Scheduler`]** - Periodic tick source with restart semantics
//! - **[`ThrottleExt`]** - Extension trait for `.throttle(period)`
//! - **[`DebounceExt`]** - Extension trait for `.debounce(period)`
//!
//! Everything here must be constructed inside a Tokio runtime context; the
//! scheduler captures the runtime handle at construction.
//!
//! # Example
//!
//! ```rust,no_run
//! use rivulet_core::Observable;
//! use rivulet_time::ThrottleExt;
//! use std::time::Duration;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let sensor: Observable<f64> = Observable::new();
//! let readings = sensor.throttle(Duration::from_millis(250));
//! let _subscription = readings.subscribe_next(|value| println!("reading: {value}"));
//!
//! sensor.next(20.1);
//! sensor.next(20.4); // only the latest per 250ms window is delivered
//! # }
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
mod debounce;
mod logging;
mod scheduler;
mod throttle;

pub use debounce::DebounceExt;
pub use scheduler::Scheduler;
pub use throttle::ThrottleExt;
