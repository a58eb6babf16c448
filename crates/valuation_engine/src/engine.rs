//! Valuation entry point.
//!
//! Composes the two branches of the engine:
//!
//! - **Monte Carlo**: seeded shock draw → GBM path matrix → discounted
//!   expected payoff of the terminal prices
//! - **Black-Scholes**: closed-form benchmark from the same model
//!   parameters, with no dependency on the simulated data
//!
//! Both are returned in a single aggregate result together with the path
//! matrix for downstream inspection or export.

use thiserror::Error;
use valuation_models::{AnalyticalError, BlackScholes, GbmParams};

use crate::mc::{
    discounted_estimate, generate_paths, terminal_payoffs, PathMatrix, PayoffKind, PriceEstimate,
    SimulationConfig, SimulationError,
};
use crate::rng::SimRng;

/// Valuation errors surfaced by the entry point.
///
/// The taxonomy is deliberately small: either a parameter violated its
/// precondition before any simulation work began, or an intermediate
/// exponentiation produced a non-finite price. There is no local recovery;
/// both propagate synchronously to the caller.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ValuationError {
    /// A model or simulation parameter violated its precondition.
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

impl From<SimulationError> for ValuationError {
    fn from(err: SimulationError) -> Self {
        match err {
            SimulationError::InvalidPathCount(count) => ValuationError::InvalidParameter {
                name: "n_paths",
                value: count as f64,
            },
            SimulationError::InvalidStepCount(count) => ValuationError::InvalidParameter {
                name: "n_steps",
                value: count as f64,
            },
            SimulationError::InvalidParameter { name, value } => {
                ValuationError::InvalidParameter { name, value }
            }
            SimulationError::NumericOverflow { path, step } => {
                ValuationError::NumericOverflow { path, step }
            }
        }
    }
}

impl From<AnalyticalError> for ValuationError {
    fn from(err: AnalyticalError) -> Self {
        SimulationError::from(err).into()
    }
}

/// Inputs of a valuation run.
///
/// Defaults follow the documented reference scenario:
/// S₀=100, K=100, r=0.05, σ=0.2, T=1.0, 120 steps, 5000 paths, seed 42.
///
/// # Examples
///
/// ```rust
/// use valuation_engine::{value_european, ValuationParams};
///
/// let result = value_european(&ValuationParams::default()).unwrap();
/// assert!(result.mc_call.price > 0.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValuationParams {
    /// GBM model parameters.
    pub model: GbmParams,
    /// Strike price (K).
    pub strike: f64,
    /// Number of time steps.
    pub n_steps: usize,
    /// Number of simulated paths.
    pub n_paths: usize,
    /// Seed for the shock draw.
    pub seed: u64,
}

impl Default for ValuationParams {
    fn default() -> Self {
        Self {
            model: GbmParams::default(),
            strike: 100.0,
            n_steps: 120,
            n_paths: 5000,
            seed: 42,
        }
    }
}

impl ValuationParams {
    /// Validates all parameters.
    ///
    /// # Errors
    ///
    /// [`ValuationError::InvalidParameter`] naming the first violated
    /// precondition; no simulation work happens on failure.
    pub fn validate(&self) -> Result<(), ValuationError> {
        self.model.validate()?;
        if !(self.strike > 0.0 && self.strike.is_finite()) {
            return Err(ValuationError::InvalidParameter {
                name: "strike",
                value: self.strike,
            });
        }
        self.config()?.validate()?;
        Ok(())
    }

    fn config(&self) -> Result<SimulationConfig, SimulationError> {
        SimulationConfig::builder()
            .n_paths(self.n_paths)
            .n_steps(self.n_steps)
            .seed(self.seed)
            .build()
    }
}

/// Aggregate result of a valuation run.
///
/// Produced once, never mutated. The path matrix is retained for
/// downstream inspection (e.g. trajectory export); the four prices are the
/// Monte Carlo estimates and their closed-form benchmarks.
#[derive(Clone, Debug, PartialEq)]
pub struct ValuationResult {
    /// Simulated trajectories, `[n_paths, n_steps + 1]`.
    pub paths: PathMatrix,
    /// Monte Carlo call price estimate.
    pub mc_call: PriceEstimate,
    /// Monte Carlo put price estimate.
    pub mc_put: PriceEstimate,
    /// Closed-form Black-Scholes call price.
    pub bs_call: f64,
    /// Closed-form Black-Scholes put price.
    pub bs_put: f64,
}

/// Values a European call and put under GBM.
///
/// Runs the Monte Carlo branch (seeded shock draw, path simulation,
/// discounted payoff aggregation) and the analytical Black-Scholes branch
/// from the same parameters, returning both in one aggregate result.
///
/// # Errors
///
/// - [`ValuationError::InvalidParameter`] for any precondition violation
///   (raised before simulation begins)
/// - [`ValuationError::NumericOverflow`] if path construction produces a
///   non-finite price
pub fn value_european(params: &ValuationParams) -> Result<ValuationResult, ValuationError> {
    params.validate()?;

    let config = params.config()?;
    let mut rng = SimRng::from_seed(config.seed());
    let paths = generate_paths(&params.model, &config, &mut rng)?;

    let terminals = paths.terminal_prices();
    let discount_factor = params.model.discount_factor();

    let call_payoffs = terminal_payoffs(&terminals, params.strike, PayoffKind::Call);
    let put_payoffs = terminal_payoffs(&terminals, params.strike, PayoffKind::Put);

    let mc_call = discounted_estimate(&call_payoffs, discount_factor);
    let mc_put = discounted_estimate(&put_payoffs, discount_factor);

    let bs = BlackScholes::new(params.model.spot, params.model.rate, params.model.volatility)?;
    let bs_call = bs.price_call(params.strike, params.model.maturity);
    let bs_put = bs.price_put(params.strike, params.model.maturity);

    Ok(ValuationResult {
        paths,
        mc_call,
        mc_put,
        bs_call,
        bs_put,
    })
}
