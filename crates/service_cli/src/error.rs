//! Error types for the CLI.

use thiserror::Error;
use valuation_engine::ValuationError;

/// CLI errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// An argument value the parser accepts but the command rejects.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Engine-level failure (invalid parameter or numeric overflow).
    #[error(transparent)]
    Valuation(#[from] ValuationError),

    /// Filesystem failure while writing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialisation failure.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialisation failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
