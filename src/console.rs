//! Console front end.
//!
//! Prints a greeting followed by three sample calculations.

use std::io::{self, Write};

use crate::calculator::Calculator;

/// First line written by [`run`].
pub const GREETING: &str = "Hello, reader!";

/// Writes the greeting and the sample calculations to `out`.
///
/// ```text
/// Hello, reader!
/// 1 + 1 is 2
/// 4 - 1 is 3
/// 7 * 2 is 14
/// ```
///
/// # Errors
///
/// Returns any I/O error raised by `out`.
pub fn run<C: Calculator, W: Write>(calculator: &C, out: &mut W) -> io::Result<()> {
    writeln!(out, "{GREETING}")?;
    writeln!(out, "1 + 1 is {}", calculator.add(1, 1))?;
    writeln!(out, "4 - 1 is {}", calculator.subtract(4, 1))?;
    writeln!(out, "7 * 2 is {}", calculator.multiply(7, 2))?;
    out.flush()
}
