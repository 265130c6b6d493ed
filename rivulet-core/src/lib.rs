// Copyright 2026 the rivulet authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod block;
pub mod callbacks;
pub mod disposable;
pub mod error;
pub mod event;
pub mod executor;
mod logging;
pub mod observable;
pub mod subscriber;
pub mod variable;

pub use self::block::BlockResult;
pub use self::callbacks::Callbacks;
pub use self::disposable::{Disposable, Disposer};
pub use self::error::{Result, RivuletError};
pub use self::event::Event;
pub use self::executor::{Executor, Task, TokioExecutor};
pub use self::observable::{Observable, WeakObservable};
pub use self::subscriber::Subscriber;
pub use self::variable::{Unique, Variable};
