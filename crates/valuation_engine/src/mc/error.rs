//! Error types for the Monte Carlo simulation kernel.

use thiserror::Error;
use valuation_models::AnalyticalError;

use super::config::{MAX_PATHS, MAX_STEPS};

/// Simulation kernel errors.
///
/// Validation failures are raised before any simulation work begins;
/// [`NumericOverflow`](Self::NumericOverflow) surfaces non-finite prices
/// instead of letting them corrupt downstream averages.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SimulationError {
    /// Path count outside the valid range.
    #[error("Invalid path count {0}: must be in range [1, {MAX_PATHS}]")]
    InvalidPathCount(usize),

    /// Step count outside the valid range.
    #[error("Invalid step count {0}: must be in range [1, {MAX_STEPS}]")]
    InvalidStepCount(usize),

    /// Invalid model parameter value with name and offending value.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// The offending value.
        value: f64,
    },

    /// Intermediate exponentiation produced a non-finite price.
    #[error("Numeric overflow: non-finite price at path {path}, step {step}")]
    NumericOverflow {
        /// Index of the first offending path row.
        path: usize,
        /// Time-step index of the first offending entry.
        step: usize,
    },
}

impl From<AnalyticalError> for SimulationError {
    fn from(err: AnalyticalError) -> Self {
        match err {
            AnalyticalError::InvalidSpot { spot } => SimulationError::InvalidParameter {
                name: "spot",
                value: spot,
            },
            AnalyticalError::InvalidVolatility { volatility } => {
                SimulationError::InvalidParameter {
                    name: "volatility",
                    value: volatility,
                }
            }
            AnalyticalError::InvalidExpiry { expiry } => SimulationError::InvalidParameter {
                name: "maturity",
                value: expiry,
            },
        }
    }
}
