//! Analytical pricing formulas for European options.
//!
//! This module provides the closed-form Black-Scholes solution used as the
//! ground-truth benchmark for the Monte Carlo engine, together with the
//! standard normal distribution functions it depends on.
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`**: the formulas work for any IEEE float type
//! - **Numerical stability**: erfc-based CDF for accuracy in the tails
//! - **Typed validation errors**: raised before any computation

pub mod black_scholes;
pub mod distributions;
pub mod error;

pub use black_scholes::BlackScholes;
pub use distributions::{norm_cdf, norm_pdf};
pub use error::AnalyticalError;
