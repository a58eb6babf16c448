//! # Valuation Models
//!
//! Model parameters and analytical formulas for European option valuation.
//!
//! This crate provides:
//! - GBM model parameters with up-front validation
//! - Closed-form Black-Scholes pricing for European calls and puts
//! - Standard normal distribution functions (CDF/PDF)
//!
//! The analytical branch is a pure function of the model parameters and is
//! used as the ground-truth benchmark for the Monte Carlo engine in
//! `valuation_engine`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod analytical;
pub mod gbm;

pub use analytical::{norm_cdf, norm_pdf, AnalyticalError, BlackScholes};
pub use gbm::GbmParams;
