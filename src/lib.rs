//! Mega Calculator
//!
//! A small integer calculator exposed two ways: a console demo that prints a
//! few sample calculations, and a JSON-over-HTTP service.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐   ┌──────────────────┐
//! │ calculator-web   │   │calculator-console│
//! │ (axum, /add ...) │   │ (stdout)         │
//! └────────┬─────────┘   └────────┬─────────┘
//!          │                      │
//!          └──────────┬───────────┘
//!              ┌──────▼──────┐      ┌────────────────┐
//!              │ Calculator  │◄─────┤ MegaCalculator │
//!              │   (trait)   │      │ (composition)  │
//!              └─────────────┘      └────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`calculator`] - The calculator capability and its basic implementation
//! - [`mega`] - Formula composed from calculator operations
//! - [`console`] - Console front end
//! - [`web`] - HTTP front end
//! - [`config`] - Server configuration
//! - [`logging`] - Tracing setup
//! - [`error`] - Error types for the entire crate
//!
//! # Example
//!
//! ```
//! use mega_calculator::{BasicCalculator, MegaCalculator};
//!
//! let mega = MegaCalculator::new(BasicCalculator::new());
//! assert_eq!(mega.mega_algorithm(4, 10), 42);
//! ```

// Enforce documentation and other quality attributes
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Allow some pedantic lints that are too strict
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod calculator;
pub mod config;
pub mod console;
pub mod error;
pub mod logging;
pub mod mega;
pub mod web;

// Re-export commonly used types at the crate root
pub use calculator::{BasicCalculator, Calculator, SharedCalculator};
pub use error::{Error, Result};
pub use mega::MegaCalculator;
