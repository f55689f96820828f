//! Integer arithmetic capability.
//!
//! [`Calculator`] is the contract every front end and composite depends on;
//! [`BasicCalculator`] is the stateless implementation used in production.
//!
//! # Overflow
//!
//! All operations use wrapping two's-complement `i32` arithmetic, so every
//! operation is total: `add(i32::MAX, 1) == i32::MIN`.

use std::sync::Arc;

use tracing::trace;

/// The add/subtract/multiply capability.
///
/// Object safe, so a single `Arc<dyn Calculator>` can be shared across
/// request handlers, and substitutable with test doubles.
pub trait Calculator: Send + Sync {
    /// Returns `x + y`.
    fn add(&self, x: i32, y: i32) -> i32;

    /// Returns `x - y`.
    fn subtract(&self, x: i32, y: i32) -> i32;

    /// Returns `x * y`.
    fn multiply(&self, x: i32, y: i32) -> i32;
}

/// A calculator shared across request handlers.
pub type SharedCalculator = Arc<dyn Calculator>;

/// Stateless calculator backed by native machine integers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BasicCalculator;

impl BasicCalculator {
    /// Creates a new calculator.
    pub fn new() -> Self {
        Self
    }
}

impl Calculator for BasicCalculator {
    fn add(&self, x: i32, y: i32) -> i32 {
        trace!(x, y, "add");
        x.wrapping_add(y)
    }

    fn subtract(&self, x: i32, y: i32) -> i32 {
        trace!(x, y, "subtract");
        x.wrapping_sub(y)
    }

    fn multiply(&self, x: i32, y: i32) -> i32 {
        trace!(x, y, "multiply");
        x.wrapping_mul(y)
    }
}

impl<C: Calculator + ?Sized> Calculator for &C {
    fn add(&self, x: i32, y: i32) -> i32 {
        (**self).add(x, y)
    }

    fn subtract(&self, x: i32, y: i32) -> i32 {
        (**self).subtract(x, y)
    }

    fn multiply(&self, x: i32, y: i32) -> i32 {
        (**self).multiply(x, y)
    }
}

impl<C: Calculator + ?Sized> Calculator for Box<C> {
    fn add(&self, x: i32, y: i32) -> i32 {
        (**self).add(x, y)
    }

    fn subtract(&self, x: i32, y: i32) -> i32 {
        (**self).subtract(x, y)
    }

    fn multiply(&self, x: i32, y: i32) -> i32 {
        (**self).multiply(x, y)
    }
}

impl<C: Calculator + ?Sized> Calculator for Arc<C> {
    fn add(&self, x: i32, y: i32) -> i32 {
        (**self).add(x, y)
    }

    fn subtract(&self, x: i32, y: i32) -> i32 {
        (**self).subtract(x, y)
    }

    fn multiply(&self, x: i32, y: i32) -> i32 {
        (**self).multiply(x, y)
    }
}
