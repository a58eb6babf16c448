//! # Valuation Engine
//!
//! Monte Carlo valuation of European options under Geometric Brownian
//! Motion, cross-checked against the closed-form Black-Scholes price.
//!
//! This crate provides:
//! - Seeded, reproducible random number generation ([`rng::SimRng`])
//! - GBM path simulation over a discrete time grid ([`mc::generate_paths`])
//! - Discounted expected-payoff valuation ([`mc::valuation`])
//! - A single entry point composing both branches ([`engine::value_european`])
//!
//! # Architecture
//!
//! ```text
//! value_european
//! ├── SimulationConfig   (path/step counts, seed)
//! ├── SimRng             (shock matrix, drawn eagerly)
//! ├── generate_paths()   (exact log-space GBM recurrence)
//! ├── valuation          (discounted mean payoff + standard error)
//! └── BlackScholes       (analytical benchmark, no simulated data)
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod engine;
pub mod mc;
pub mod rng;

pub use engine::{value_european, ValuationError, ValuationParams, ValuationResult};
pub use mc::{PathMatrix, PriceEstimate, SimulationConfig, SimulationError};
pub use valuation_models::GbmParams;
