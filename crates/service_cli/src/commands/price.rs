//! Price command implementation
//!
//! Runs the valuation engine and reports the Monte Carlo estimates next to
//! their closed-form Black-Scholes benchmarks.

use serde::Serialize;
use tracing::info;
use valuation_engine::{value_european, ValuationParams, ValuationResult};

use crate::{CliError, Result};

/// Serialisable summary of a valuation run.
#[derive(Debug, Serialize)]
struct PriceReport {
    mc_call: f64,
    mc_call_std_error: f64,
    mc_put: f64,
    mc_put_std_error: f64,
    bs_call: f64,
    bs_put: f64,
    n_paths: usize,
    n_steps: usize,
    seed: u64,
}

impl PriceReport {
    fn new(params: &ValuationParams, result: &ValuationResult) -> Self {
        Self {
            mc_call: result.mc_call.price,
            mc_call_std_error: result.mc_call.std_error,
            mc_put: result.mc_put.price,
            mc_put_std_error: result.mc_put.std_error,
            bs_call: result.bs_call,
            bs_put: result.bs_put,
            n_paths: params.n_paths,
            n_steps: params.n_steps,
            seed: params.seed,
        }
    }
}

/// Run the price command
pub fn run(params: &ValuationParams, format: &str) -> Result<()> {
    info!("Starting valuation...");
    info!(
        "  Model: S0={}, K={}, r={}, sigma={}, T={}",
        params.model.spot, params.strike, params.model.rate, params.model.volatility,
        params.model.maturity
    );
    info!(
        "  Simulation: {} paths x {} steps, seed {}",
        params.n_paths, params.n_steps, params.seed
    );

    let result = value_european(params)?;
    let report = PriceReport::new(params, &result);

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        "table" => {
            println!("\n┌──────────────────┬────────────┬────────────┐");
            println!("│                  │ Call       │ Put        │");
            println!("├──────────────────┼────────────┼────────────┤");
            println!(
                "│ Monte Carlo      │ {:>10.4} │ {:>10.4} │",
                report.mc_call, report.mc_put
            );
            println!(
                "│   (std error)    │ {:>10.4} │ {:>10.4} │",
                report.mc_call_std_error, report.mc_put_std_error
            );
            println!(
                "│ Black-Scholes    │ {:>10.4} │ {:>10.4} │",
                report.bs_call, report.bs_put
            );
            println!("└──────────────────┴────────────┴────────────┘");
        }
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: table, json",
                other
            )));
        }
    }

    info!("Valuation complete");
    Ok(())
}
