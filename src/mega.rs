//! Composite formula built on top of the [`Calculator`] capability.

use tracing::{debug, instrument};

use crate::calculator::Calculator;

/// Composes three calculator operations into one derived formula.
///
/// The calculator is injected so that test doubles can observe the exact
/// sequence of calls.
#[derive(Debug, Clone)]
pub struct MegaCalculator<C> {
    calculator: C,
}

impl<C: Calculator> MegaCalculator<C> {
    /// Creates a new `MegaCalculator` that exclusively owns `calculator`.
    pub fn new(calculator: C) -> Self {
        Self { calculator }
    }

    /// Computes `(first + second) * (first - 1)`.
    ///
    /// Always issues exactly three calls, in this order:
    /// `add(first, second)`, `subtract(first, 1)`, then
    /// `multiply(<add result>, <subtract result>)`.
    #[instrument(skip(self), level = "debug")]
    pub fn mega_algorithm(&self, first_number: i32, second_number: i32) -> i32 {
        let added = self.calculator.add(first_number, second_number);
        let sub_one = self.calculator.subtract(first_number, 1);
        let result = self.calculator.multiply(added, sub_one);
        debug!(added, sub_one, result, "mega algorithm finished");
        result
    }

    /// Returns a reference to the injected calculator.
    pub fn calculator(&self) -> &C {
        &self.calculator
    }

    /// Consumes the `MegaCalculator`, returning the injected calculator.
    pub fn into_inner(self) -> C {
        self.calculator
    }
}
