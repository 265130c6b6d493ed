// Copyright 2026 the rivulet authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Counting and filtering operators for rivulet observables.
//!
//! Each operator is an extension trait on
//! [`Observable`](rivulet_core::Observable) that builds a fresh downstream
//! subject and forwards events into it. The downstream owns the upstream
//! subscription, so dropping the last downstream handle detaches the chain.
//!
//! - **`SkipExt`** - Extension trait for `.skip(first)`

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod skip;

pub use skip::SkipExt;
