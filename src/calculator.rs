use serde::{Deserialize, Serialize};

/// A simple accumulator used for member completion and hover.
///
/// Every operation overwrites the last result; nothing is carried over between
/// calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Calculator {
    last_result: f64,
}

impl Calculator {
    /// Creates a calculator whose last result is `0.0`.
    pub fn new() -> Self {
        Self { last_result: 0.0 }
    }

    /// Adds two numbers.
    pub fn add(&mut self, a: f64, b: f64) -> f64 {
        self.last_result = a + b;
        self.last_result
    }

    /// Subtracts `b` from `a`.
    pub fn subtract(&mut self, a: f64, b: f64) -> f64 {
        self.last_result = a - b;
        self.last_result
    }

    /// Gets the last result.
    pub fn last_result(&self) -> f64 {
        self.last_result
    }
}
