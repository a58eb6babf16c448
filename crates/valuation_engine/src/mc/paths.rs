//! GBM path simulation.
//!
//! Builds a matrix of risk-neutral price trajectories using the exact
//! log-space GBM transition:
//!
//! ```text
//! S(t+dt) = S(t) × exp((r - 0.5σ²)dt + σ√dt × Z)
//! ```
//!
//! The full shock matrix is drawn eagerly from the caller's seeded
//! generator before any path is built, so row construction can run in
//! parallel without affecting determinism.
//!
//! # Memory Layout
//!
//! Row-major contiguous storage: `paths[path_idx * (n_steps + 1) + step_idx]`
//! where `step_idx = 0` holds the initial spot price.

use rayon::prelude::*;
use valuation_models::GbmParams;

use super::config::SimulationConfig;
use super::error::SimulationError;
use crate::rng::SimRng;

/// Matrix of simulated price trajectories.
///
/// Shape is `[n_paths, n_steps + 1]`; column 0 is the constant initial spot
/// for every row and all entries are strictly positive (a consequence of
/// the log-normal transition with finite inputs, enforced by the overflow
/// scan in [`generate_paths`]).
///
/// Built once, then read-only.
#[derive(Clone, Debug, PartialEq)]
pub struct PathMatrix {
    /// Row-major price data, `n_paths × (n_steps + 1)`.
    data: Vec<f64>,
    n_paths: usize,
    n_steps: usize,
}

impl PathMatrix {
    /// Returns the number of simulated paths (rows).
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Returns the number of time steps (the matrix has `n_steps + 1` columns).
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Returns one trajectory, including the initial spot at index 0.
    #[inline]
    pub fn path(&self, path_idx: usize) -> &[f64] {
        let row = self.n_steps + 1;
        &self.data[path_idx * row..(path_idx + 1) * row]
    }

    /// Returns the price of `path_idx` at `step_idx` (0 is the initial spot).
    #[inline]
    pub fn value(&self, path_idx: usize, step_idx: usize) -> f64 {
        self.data[path_idx * (self.n_steps + 1) + step_idx]
    }

    /// Extracts the terminal column (one price per path).
    pub fn terminal_prices(&self) -> Vec<f64> {
        let row = self.n_steps + 1;
        (0..self.n_paths)
            .map(|path_idx| self.data[path_idx * row + self.n_steps])
            .collect()
    }

    /// Returns the full row-major buffer.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}

/// Simulates GBM trajectories from pre-drawn standard normal shocks.
///
/// # Arguments
///
/// * `params` - GBM model parameters (validated before any drawing)
/// * `config` - Path/step counts and seed bookkeeping (already validated at build)
/// * `rng` - Seeded generator; the shock matrix is drawn from it eagerly
///
/// # Determinism
///
/// For a fixed seed and fixed parameters the output is bit-for-bit
/// reproducible: shocks are drawn in a single sequential pass, and the
/// parallel row loop writes disjoint rows from frozen shock rows.
///
/// # Errors
///
/// - [`SimulationError::InvalidParameter`] if the model parameters violate
///   their preconditions (raised before any simulation work)
/// - [`SimulationError::NumericOverflow`] if the exponentiation produces a
///   non-finite price (pathological volatility/rate/step combinations)
pub fn generate_paths(
    params: &GbmParams,
    config: &SimulationConfig,
    rng: &mut SimRng,
) -> Result<PathMatrix, SimulationError> {
    params.validate()?;
    config.validate()?;

    let n_paths = config.n_paths();
    let n_steps = config.n_steps();

    // Draw all shocks up front; row construction must not touch the RNG.
    let mut shocks = vec![0.0_f64; n_paths * n_steps];
    rng.fill_normal(&mut shocks);

    let dt = params.maturity / n_steps as f64;
    let drift_dt = params.log_drift() * dt;
    let vol_sqrt_dt = params.volatility * dt.sqrt();
    let spot = params.spot;

    let mut data = vec![0.0_f64; n_paths * (n_steps + 1)];

    data.par_chunks_mut(n_steps + 1)
        .zip(shocks.par_chunks(n_steps))
        .for_each(|(row, shock_row)| {
            row[0] = spot;
            for step in 0..n_steps {
                let increment = drift_dt + vol_sqrt_dt * shock_row[step];
                row[step + 1] = row[step] * increment.exp();
            }
        });

    // Surface the first non-finite entry instead of letting it reach the
    // payoff averages.
    if let Some(idx) = data.iter().position(|v| !v.is_finite()) {
        return Err(SimulationError::NumericOverflow {
            path: idx / (n_steps + 1),
            step: idx % (n_steps + 1),
        });
    }

    Ok(PathMatrix {
        data,
        n_paths,
        n_steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn config(n_paths: usize, n_steps: usize, seed: u64) -> SimulationConfig {
        SimulationConfig::builder()
            .n_paths(n_paths)
            .n_steps(n_steps)
            .seed(seed)
            .build()
            .unwrap()
    }

    fn generate(params: &GbmParams, cfg: &SimulationConfig) -> PathMatrix {
        let mut rng = SimRng::from_seed(cfg.seed());
        generate_paths(params, cfg, &mut rng).unwrap()
    }

    #[test]
    fn test_initial_column_is_spot() {
        let params = GbmParams::new(100.0, 0.05, 0.2, 1.0);
        let paths = generate(&params, &config(10, 5, 42));

        for path_idx in 0..10 {
            assert_eq!(paths.value(path_idx, 0), 100.0);
        }
    }

    #[test]
    fn test_all_prices_positive_and_finite() {
        let params = GbmParams::new(100.0, 0.05, 0.2, 1.0);
        let paths = generate(&params, &config(100, 50, 42));

        for &price in paths.as_slice() {
            assert!(price > 0.0, "Price must be positive: {}", price);
            assert!(price.is_finite(), "Price must be finite: {}", price);
        }
    }

    #[test]
    fn test_reproducibility_same_seed() {
        let params = GbmParams::default();
        let p1 = generate(&params, &config(10, 5, 12345));
        let p2 = generate(&params, &config(10, 5, 12345));

        assert_eq!(p1.as_slice(), p2.as_slice());
    }

    #[test]
    fn test_different_seeds_differ() {
        let params = GbmParams::default();
        let p1 = generate(&params, &config(10, 5, 12345));
        let p2 = generate(&params, &config(10, 5, 54321));

        assert!(p1
            .as_slice()
            .iter()
            .zip(p2.as_slice().iter())
            .any(|(a, b)| a != b));
    }

    #[test]
    fn test_single_step_transition_matches_recurrence() {
        // With one step, S_T = S0 * exp((r - σ²/2)T + σ√T z) for the first
        // variate of the seeded sequence.
        let params = GbmParams::new(100.0, 0.05, 0.2, 1.0);
        let cfg = config(1, 1, 99);
        let paths = generate(&params, &cfg);

        let mut rng = SimRng::from_seed(99);
        let z = rng.gen_normal();
        let expected = 100.0 * ((0.05 - 0.5 * 0.04) + 0.2 * z).exp();

        assert_relative_eq!(paths.value(0, 1), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_terminal_prices_extraction() {
        let params = GbmParams::default();
        let paths = generate(&params, &config(10, 5, 42));

        let terminals = paths.terminal_prices();
        assert_eq!(terminals.len(), 10);
        for (path_idx, &terminal) in terminals.iter().enumerate() {
            assert_eq!(terminal, paths.value(path_idx, 5));
        }
    }

    #[test]
    fn test_statistical_mean_matches_forward() {
        // E[S(T)] ≈ S(0) * exp(r*T) for a large sample
        let params = GbmParams {
            spot: 100.0,
            rate: 0.05,
            volatility: 0.2,
            maturity: 1.0,
        };
        let paths = generate(&params, &config(50_000, 1, 42));

        let terminals = paths.terminal_prices();
        let mean = terminals.iter().sum::<f64>() / terminals.len() as f64;
        let expected = params.spot * (params.rate * params.maturity).exp();

        assert_relative_eq!(mean, expected, max_relative = 0.02);
    }

    #[test]
    fn test_invalid_params_rejected_before_simulation() {
        let cfg = config(10, 5, 42);
        let mut rng = SimRng::from_seed(42);

        let result = generate_paths(&GbmParams::new(100.0, 0.05, 0.0, 1.0), &cfg, &mut rng);
        assert!(matches!(
            result,
            Err(SimulationError::InvalidParameter {
                name: "volatility",
                ..
            })
        ));

        let result = generate_paths(&GbmParams::new(-1.0, 0.05, 0.2, 1.0), &cfg, &mut rng);
        assert!(matches!(
            result,
            Err(SimulationError::InvalidParameter { name: "spot", .. })
        ));
    }

    #[test]
    fn test_pathological_rate_surfaces_overflow() {
        // exp(4000) overflows f64 on the first transition
        let params = GbmParams::new(100.0, 4000.0, 0.2, 1.0);
        let cfg = config(4, 1, 42);
        let mut rng = SimRng::from_seed(42);

        let result = generate_paths(&params, &cfg, &mut rng);
        assert!(matches!(
            result,
            Err(SimulationError::NumericOverflow { .. })
        ));
    }
}
