//! Composition: a car has an engine.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Engine;

impl Engine {
    #[must_use]
    pub const fn start(&self) -> &'static str {
        "Engine running"
    }
}

/// A car that delegates starting to the engine it owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    /// Model name shown when starting.
    pub model: String,
    engine: Engine,
}

impl Car {
    #[must_use]
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            engine: Engine,
        }
    }

    #[must_use]
    pub const fn engine(&self) -> &Engine {
        &self.engine
    }

    #[must_use]
    pub fn start(&self) -> String {
        format!("{}: {}", self.model, self.engine.start())
    }
}
