// Copyright 2026 the rivulet authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::error::RivuletError;

/// A single emission of an [`Observable`](crate::Observable).
///
/// Exactly one variant describes each delivery: a value, an error, or the
/// completion marker. `Error` and `Done` are terminal; once either has been
/// emitted, an observable delivers nothing further.
#[derive(Debug, Clone)]
pub enum Event<T> {
    /// A value emitted by the producer.
    Next(T),
    /// A producer-signaled error that terminates the sequence.
    Error(RivuletError),
    /// Completion marker that terminates the sequence.
    Done,
}

impl<T: PartialEq> PartialEq for Event<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Event::Next(a), Event::Next(b)) => a == b,
            (Event::Done, Event::Done) => true,
            _ => false, // Errors are never equal
        }
    }
}

impl<T> Event<T> {
    /// Returns `true` if this is a `Next` value.
    pub const fn is_next(&self) -> bool {
        matches!(self, Event::Next(_))
    }

    /// Returns `true` if this is an `Error`.
    pub const fn is_error(&self) -> bool {
        matches!(self, Event::Error(_))
    }

    /// Returns `true` if this is the `Done` marker.
    pub const fn is_done(&self) -> bool {
        matches!(self, Event::Done)
    }

    /// Returns `true` if this event terminates the sequence.
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Event::Error(_) | Event::Done)
    }

    /// Converts from `Event<T>` to `Option<T>`, discarding anything but a value.
    pub fn value(self) -> Option<T> {
        match self {
            Event::Next(v) => Some(v),
            _ => None,
        }
    }

    /// Converts from `Event<T>` to `Option<RivuletError>`, discarding anything but an error.
    pub fn error(self) -> Option<RivuletError> {
        match self {
            Event::Error(e) => Some(e),
            _ => None,
        }
    }
}
