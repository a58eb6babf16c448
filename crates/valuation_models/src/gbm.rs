//! Geometric Brownian Motion model parameters.
//!
//! GBM describes asset price dynamics under the risk-neutral measure:
//! ```text
//! dS = r * S * dt + sigma * S * dW
//! ```
//! with the exact transition over an interval dt:
//! ```text
//! S(t+dt) = S(t) * exp((r - 0.5*sigma^2)*dt + sigma*sqrt(dt)*dW)
//! ```
//! The log-space form is what the simulation kernel evaluates; it avoids
//! discretisation bias in the terminal distribution.

use crate::analytical::AnalyticalError;

/// Parameters for Geometric Brownian Motion dynamics.
///
/// Immutable per run. All values are annualised.
///
/// # Examples
///
/// ```rust
/// use valuation_models::GbmParams;
///
/// let params = GbmParams::new(100.0, 0.05, 0.2, 1.0);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GbmParams {
    /// Initial spot price (S₀).
    pub spot: f64,
    /// Risk-free rate (r) - annualised.
    pub rate: f64,
    /// Volatility (σ) - annualised.
    pub volatility: f64,
    /// Time to maturity (T) - in years.
    pub maturity: f64,
}

impl GbmParams {
    /// Creates new GBM parameters.
    ///
    /// Validation is deferred to [`validate`](Self::validate) so that
    /// invalid combinations can be constructed in tests and rejected with a
    /// typed error at the engine boundary.
    #[inline]
    pub fn new(spot: f64, rate: f64, volatility: f64, maturity: f64) -> Self {
        Self {
            spot,
            rate,
            volatility,
            maturity,
        }
    }

    /// Validates the parameters.
    ///
    /// Spot, volatility and maturity must be strictly positive and finite;
    /// the rate may be any finite real (negative rates are allowed).
    ///
    /// # Errors
    ///
    /// - [`AnalyticalError::InvalidSpot`] if spot is non-positive or non-finite
    /// - [`AnalyticalError::InvalidVolatility`] if volatility is non-positive
    ///   or non-finite
    /// - [`AnalyticalError::InvalidExpiry`] if maturity is non-positive or
    ///   non-finite, or if the rate is non-finite
    pub fn validate(&self) -> Result<(), AnalyticalError> {
        if !(self.spot > 0.0 && self.spot.is_finite()) {
            return Err(AnalyticalError::InvalidSpot { spot: self.spot });
        }
        if !(self.volatility > 0.0 && self.volatility.is_finite()) {
            return Err(AnalyticalError::InvalidVolatility {
                volatility: self.volatility,
            });
        }
        if !(self.maturity > 0.0 && self.maturity.is_finite()) || !self.rate.is_finite() {
            return Err(AnalyticalError::InvalidExpiry {
                expiry: self.maturity,
            });
        }
        Ok(())
    }

    /// Risk-neutral drift per unit time: `r - 0.5*sigma^2`.
    #[inline]
    pub fn log_drift(&self) -> f64 {
        self.rate - 0.5 * self.volatility * self.volatility
    }

    /// Discount factor over the full horizon: `exp(-r*T)`.
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.maturity).exp()
    }
}

impl Default for GbmParams {
    fn default() -> Self {
        Self {
            spot: 100.0,
            rate: 0.05,
            volatility: 0.2,
            maturity: 1.0,
        }
    }
}
