// Copyright 2026 the rivulet authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the rivulet observable core.
//!
//! This module defines the root [`RivuletError`] type carried by
//! [`Event::Error`](crate::Event::Error) and surfaced by operators. Producer
//! code wraps its own failures with [`RivuletError::user_error`]; operators
//! report misuse with [`RivuletError::invalid_argument`].
//!
//! # Examples
//!
//! ```
//! use rivulet_core::{Result, RivuletError};
//!
//! fn check_window(len: usize) -> Result<()> {
//!     if len == 0 {
//!         return Err(RivuletError::invalid_argument("window must be nonzero"));
//!     }
//!     Ok(())
//! }
//! ```

/// Root error type for all rivulet operations.
#[derive(Debug, thiserror::Error)]
pub enum RivuletError {
    /// Event processing encountered an error.
    ///
    /// General-purpose variant for failures inside the delivery machinery
    /// that do not fit a more specific category.
    #[error("Processing error: {context}")]
    ProcessingError {
        /// Description of what went wrong.
        context: String,
    },

    /// An operation was invoked with an argument outside its domain.
    ///
    /// Emitted as a downstream error event by operators, e.g. `skip` with a
    /// negative count.
    #[error("Invalid argument: {context}")]
    InvalidArgument {
        /// Description of the offending argument.
        context: String,
    },

    /// Custom error raised by producer code.
    ///
    /// Wraps an application-supplied cause so it can travel through the
    /// event system and reach every subscriber verbatim.
    #[error("User error: {0}")]
    UserError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl RivuletError {
    /// Create a processing error with the given context.
    pub fn processing_error(context: impl Into<String>) -> Self {
        Self::ProcessingError {
            context: context.into(),
        }
    }

    /// Create an invalid-argument error with the given context.
    pub fn invalid_argument(context: impl Into<String>) -> Self {
        Self::InvalidArgument {
            context: context.into(),
        }
    }

    /// Wrap a user error.
    pub fn user_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::UserError(Box::new(error))
    }
}

/// Specialized `Result` type for rivulet operations.
pub type Result<T> = std::result::Result<T, RivuletError>;

impl Clone for RivuletError {
    fn clone(&self) -> Self {
        match self {
            Self::ProcessingError { context } => Self::ProcessingError {
                context: context.clone(),
            },
            Self::InvalidArgument { context } => Self::InvalidArgument {
                context: context.clone(),
            },
            // The boxed cause cannot be cloned, so degrade to its message
            Self::UserError(e) => Self::ProcessingError {
                context: format!("User error: {}", e),
            },
        }
    }
}
