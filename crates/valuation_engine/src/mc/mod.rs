//! Monte Carlo simulation kernel.
//!
//! The kernel is a one-shot, deterministic batch computation:
//!
//! 1. Draw the full shock matrix eagerly from a seeded generator
//! 2. Build the path matrix with the exact log-space GBM recurrence
//! 3. Reduce the terminal column to discounted expected payoffs
//!
//! Path rows are mutually independent and built in parallel; time steps
//! within a row are strictly ordered (each column depends only on the
//! previous one).

pub mod config;
pub mod error;
pub mod paths;
pub mod valuation;

pub use config::{SimulationConfig, SimulationConfigBuilder, DEFAULT_SEED, MAX_PATHS, MAX_STEPS};
pub use error::SimulationError;
pub use paths::{generate_paths, PathMatrix};
pub use valuation::{discounted_estimate, terminal_payoffs, PayoffKind, PriceEstimate};
