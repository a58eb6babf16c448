//! Valuation CLI - command line operations for the European option engine.
//!
//! # Commands
//!
//! - `valuation price` - Price a European call/put and compare Monte Carlo
//!   against the closed-form Black-Scholes benchmark
//! - `valuation paths --output <file>` - Export a sample of simulated
//!   trajectories as CSV for external plotting
//!
//! All model parameters have documented defaults (the reference scenario
//! S₀=100, K=100, r=0.05, σ=0.2, T=1, 120 steps, 5000 paths, seed 42), so
//! `valuation price` with no flags reproduces the reference run.

use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use valuation_engine::{GbmParams, ValuationParams};

mod commands;
mod error;

pub use error::{CliError, Result};

/// European option Monte Carlo valuation CLI
#[derive(Parser)]
#[command(name = "valuation")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Model and simulation parameters shared by all commands.
#[derive(Args, Clone, Copy, Debug)]
struct ModelArgs {
    /// Initial spot price (S₀)
    #[arg(long, default_value_t = 100.0)]
    spot: f64,

    /// Strike price (K)
    #[arg(long, default_value_t = 100.0)]
    strike: f64,

    /// Risk-free rate, annualised (r)
    #[arg(long, default_value_t = 0.05)]
    rate: f64,

    /// Volatility, annualised (σ)
    #[arg(long, default_value_t = 0.2)]
    volatility: f64,

    /// Time to maturity in years (T)
    #[arg(long, default_value_t = 1.0)]
    maturity: f64,

    /// Number of time steps
    #[arg(long, default_value_t = 120)]
    steps: usize,

    /// Number of simulated paths
    #[arg(long, default_value_t = 5000)]
    paths: usize,

    /// Random seed for reproducibility
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

impl ModelArgs {
    fn to_params(self) -> ValuationParams {
        ValuationParams {
            model: GbmParams::new(self.spot, self.rate, self.volatility, self.maturity),
            strike: self.strike,
            n_steps: self.steps,
            n_paths: self.paths,
            seed: self.seed,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Price a European call/put and compare against Black-Scholes
    Price {
        #[command(flatten)]
        model: ModelArgs,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Export a sample of simulated trajectories as CSV
    Paths {
        #[command(flatten)]
        model: ModelArgs,

        /// Output CSV file
        #[arg(short, long)]
        output: String,

        /// Number of trajectories to export
        #[arg(long, default_value_t = 20)]
        sample: usize,
    },
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Price { model, format } => commands::price::run(&model.to_params(), &format),
        Commands::Paths {
            model,
            output,
            sample,
        } => commands::paths::run(&model.to_params(), &output, sample),
    }
}
