// Copyright 2026 the rivulet authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the rivulet workspace.
//!
//! This crate provides fixture types, channel-backed callback builders and
//! assertion helpers for testing observables and operators. It is meant for
//! development and testing only, not for production code.
//!
//! # Observing deliveries
//!
//! Subscriber callbacks run as a side effect of emission, so tests observe
//! them by forwarding every delivery into a `tokio::sync::mpsc` channel and
//! asserting on the receiving end:
//!
//! ```rust
//! use rivulet_core::Observable;
//! use rivulet_test_utils::{helpers::recv_timeout, value_channel};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let subject = Observable::new();
//! let (callbacks, mut rx) = value_channel();
//! let _subscription = subject.subscribe(callbacks);
//!
//! subject.next(42);
//! assert_eq!(recv_timeout(&mut rx, 100).await, Some(42));
//! # }
//! ```
//!
//! # Fixtures
//!
//! Pre-defined types for diverse test payloads:
//!
//! - `Person` - a person with name and age
//! - `Animal` - an animal with species and leg count
//! - `Plant` - a plant with name and height
//!
//! plus the [`TestData`] enum wrapping all three and ready-made values such
//! as `person_alice()`.
//!
//! # Module Organization
//!
//! - `test_data` - the [`TestData`] enum and fixture constructors
//! - `person`, `animal`, `plant` - the fixture types themselves
//! - `helpers` - channel assertion helpers
//! - `inline_executor` - a synchronous [`rivulet_core::Executor`] with a
//!   hand-off counter

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod animal;
pub mod helpers;
pub mod inline_executor;
pub mod person;
pub mod plant;
pub mod test_data;

use rivulet_core::{Callbacks, Event};
use tokio::sync::mpsc;

pub use inline_executor::InlineExecutor;
pub use test_data::TestData;

/// Creates a [`Callbacks`] record forwarding every `Next` value into a
/// channel.
///
/// Send failures are ignored, so dropping the receiver mid-test never trips
/// the subject's fault handling.
pub fn value_channel<T: Send + 'static>() -> (Callbacks<T>, mpsc::UnboundedReceiver<T>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let callbacks = Callbacks::new().on_next(move |value| {
        let _ = tx.send(value);
    });
    (callbacks, rx)
}

/// Creates a [`Callbacks`] record forwarding every delivery, terminal events
/// included, into a channel as [`Event`]s.
///
/// # Example
///
/// ```rust
/// use rivulet_core::{Event, Observable};
/// use rivulet_test_utils::{event_channel, helpers::recv_timeout};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let subject = Observable::new();
/// let (callbacks, mut rx) = event_channel();
/// let _subscription = subject.subscribe(callbacks);
///
/// subject.next(7);
/// subject.done();
///
/// assert_eq!(recv_timeout(&mut rx, 100).await, Some(Event::Next(7)));
/// assert_eq!(recv_timeout(&mut rx, 100).await, Some(Event::Done));
/// # }
/// ```
pub fn event_channel<T: Send + 'static>() -> (Callbacks<T>, mpsc::UnboundedReceiver<Event<T>>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let next_tx = tx.clone();
    let error_tx = tx.clone();
    let done_tx = tx;
    let callbacks = Callbacks::new()
        .on_next(move |value| {
            let _ = next_tx.send(Event::Next(value));
        })
        .on_error(move |error| {
            let _ = error_tx.send(Event::Error(error));
        })
        .on_done(move || {
            let _ = done_tx.send(Event::Done);
        });
    (callbacks, rx)
}
