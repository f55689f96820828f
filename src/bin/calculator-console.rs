//! Mega Calculator - Console Entry Point
//!
//! Prints a greeting and three sample calculations to stdout.

use anyhow::{Context, Result};
use tracing::{Level, debug};

use mega_calculator::BasicCalculator;
use mega_calculator::console;
use mega_calculator::logging::init_tracing;

fn main() -> Result<()> {
    // Only warnings by default; RUST_LOG can raise it
    init_tracing(Level::WARN, false)?;

    let calculator = BasicCalculator::new();
    let stdout = std::io::stdout();
    console::run(&calculator, &mut stdout.lock()).context("failed to write to stdout")?;

    debug!("console run finished");
    Ok(())
}
