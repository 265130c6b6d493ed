// Copyright 2026 the rivulet authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::fmt::{self, Display};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plant {
    pub name: String,
    pub height_cm: u32,
}

impl Plant {
    #[must_use]
    pub const fn new(name: String, height_cm: u32) -> Self {
        Self { name, height_cm }
    }
}

impl Display for Plant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} cm)", self.name, self.height_cm)
    }
}
