//! Paths command implementation
//!
//! Exports a sample of simulated trajectories as CSV, one row per time
//! step, for plotting with external tooling. The engine only ever reads
//! the path matrix here; nothing downstream feeds back into pricing.

use tracing::info;
use valuation_engine::{value_european, ValuationParams};

use crate::Result;

/// Run the paths command
pub fn run(params: &ValuationParams, output: &str, sample: usize) -> Result<()> {
    info!("Simulating trajectories for export...");
    info!(
        "  Simulation: {} paths x {} steps, seed {}",
        params.n_paths, params.n_steps, params.seed
    );

    let result = value_european(params)?;
    let paths = &result.paths;

    let n_export = sample.min(paths.n_paths());
    let dt = params.model.maturity / paths.n_steps() as f64;

    let mut writer = csv::Writer::from_path(output)?;

    let mut header = vec!["step".to_string(), "time".to_string()];
    header.extend((0..n_export).map(|i| format!("path_{}", i)));
    writer.write_record(&header)?;

    for step in 0..=paths.n_steps() {
        let mut record = vec![step.to_string(), format!("{:.6}", step as f64 * dt)];
        record.extend((0..n_export).map(|path_idx| format!("{:.6}", paths.value(path_idx, step))));
        writer.write_record(&record)?;
    }

    writer.flush()?;

    info!("Wrote {} trajectories to {}", n_export, output);
    Ok(())
}
