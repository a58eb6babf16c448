//! Black-Scholes pricing for European options.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! This branch has no randomness and no dependency on the simulation
//! kernel; it is a pure function of the model parameters.

use num_traits::Float;

use super::distributions::norm_cdf;
use super::error::AnalyticalError;

/// Black-Scholes model for European option pricing.
///
/// Provides closed-form pricing under lognormal dynamics.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`)
///
/// # Examples
/// ```
/// use valuation_models::BlackScholes;
///
/// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
/// let call = bs.price_call(100.0, 1.0);
/// let put = bs.price_put(100.0, 1.0);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call - put - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-6);
/// ```
#[derive(Debug, Clone)]
pub struct BlackScholes<T: Float> {
    /// Spot price (S)
    spot: T,
    /// Risk-free interest rate (r)
    rate: T,
    /// Volatility (σ)
    volatility: T,
}

impl<T: Float> BlackScholes<T> {
    /// Creates a new Black-Scholes model.
    ///
    /// # Errors
    /// - [`AnalyticalError::InvalidSpot`] if spot <= 0
    /// - [`AnalyticalError::InvalidVolatility`] if volatility <= 0
    pub fn new(spot: T, rate: T, volatility: T) -> Result<Self, AnalyticalError> {
        let zero = T::zero();

        if spot <= zero {
            return Err(AnalyticalError::InvalidSpot {
                spot: spot.to_f64().unwrap_or(0.0),
            });
        }

        if volatility <= zero {
            return Err(AnalyticalError::InvalidVolatility {
                volatility: volatility.to_f64().unwrap_or(0.0),
            });
        }

        Ok(Self {
            spot,
            rate,
            volatility,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// Computes the d1 term of the Black-Scholes formula.
    ///
    /// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
    ///
    /// Limiting cases at expiry collapse to a large ±value so the CDF
    /// saturates to 0 or 1.
    #[inline]
    pub fn d1(&self, strike: T, expiry: T) -> T {
        let zero = T::zero();
        let half = T::from(0.5).unwrap();
        let epsilon = T::from(1e-10).unwrap();

        if expiry <= epsilon {
            // At expiry: d1 → +∞ if ITM, -∞ if OTM
            let large = T::from(100.0).unwrap();
            return if self.spot > strike {
                large
            } else if self.spot < strike {
                -large
            } else {
                zero
            };
        }

        let vol_sqrt_t = self.volatility * expiry.sqrt();
        let log_moneyness = (self.spot / strike).ln();
        let drift = (self.rate + half * self.volatility * self.volatility) * expiry;

        (log_moneyness + drift) / vol_sqrt_t
    }

    /// Computes the d2 term: d₂ = d₁ - σ√T.
    #[inline]
    pub fn d2(&self, strike: T, expiry: T) -> T {
        let epsilon = T::from(1e-10).unwrap();

        if expiry <= epsilon {
            return self.d1(strike, expiry);
        }

        self.d1(strike, expiry) - self.volatility * expiry.sqrt()
    }

    /// Computes the European call option price.
    ///
    /// C = S·N(d₁) - K·e^(-rT)·N(d₂)
    ///
    /// At expiry the price collapses to intrinsic value.
    #[inline]
    pub fn price_call(&self, strike: T, expiry: T) -> T {
        let zero = T::zero();
        let epsilon = T::from(1e-10).unwrap();

        if expiry <= epsilon {
            let intrinsic = self.spot - strike;
            return if intrinsic > zero { intrinsic } else { zero };
        }

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        let discount = (-self.rate * expiry).exp();

        self.spot * norm_cdf(d1) - strike * discount * norm_cdf(d2)
    }

    /// Computes the European put option price.
    ///
    /// P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
    ///
    /// At expiry the price collapses to intrinsic value.
    #[inline]
    pub fn price_put(&self, strike: T, expiry: T) -> T {
        let zero = T::zero();
        let epsilon = T::from(1e-10).unwrap();

        if expiry <= epsilon {
            let intrinsic = strike - self.spot;
            return if intrinsic > zero { intrinsic } else { zero };
        }

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        let discount = (-self.rate * expiry).exp();

        strike * discount * norm_cdf(-d2) - self.spot * norm_cdf(-d1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_new_valid_parameters() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        assert_eq!(bs.spot(), 100.0);
        assert_eq!(bs.rate(), 0.05);
        assert_eq!(bs.volatility(), 0.2);
    }

    #[test]
    fn test_new_invalid_spot() {
        assert!(matches!(
            BlackScholes::new(-100.0_f64, 0.05, 0.2),
            Err(AnalyticalError::InvalidSpot { .. })
        ));
        assert!(matches!(
            BlackScholes::new(0.0_f64, 0.05, 0.2),
            Err(AnalyticalError::InvalidSpot { .. })
        ));
    }

    #[test]
    fn test_new_invalid_volatility() {
        assert!(matches!(
            BlackScholes::new(100.0_f64, 0.05, -0.2),
            Err(AnalyticalError::InvalidVolatility { .. })
        ));
        assert!(matches!(
            BlackScholes::new(100.0_f64, 0.05, 0.0),
            Err(AnalyticalError::InvalidVolatility { .. })
        ));
    }

    #[test]
    fn test_new_negative_rate_allowed() {
        assert!(BlackScholes::new(100.0_f64, -0.02, 0.2).is_ok());
    }

    #[test]
    fn test_d1_atm_zero_rate() {
        // ATM with r=0: d1 = σ√T / 2
        let bs = BlackScholes::new(100.0_f64, 0.0, 0.2).unwrap();
        assert_relative_eq!(bs.d1(100.0, 1.0), 0.1, epsilon = 1e-10);
    }

    #[test]
    fn test_d1_d2_relationship() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        let d1 = bs.d1(105.0, 0.5);
        let d2 = bs.d2(105.0, 0.5);
        assert_relative_eq!(d2, d1 - 0.2 * 0.5_f64.sqrt(), epsilon = 1e-10);
    }

    #[test]
    fn test_call_price_reference_value() {
        // Known reference: S=100, K=100, r=0.05, σ=0.2, T=1
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        assert_relative_eq!(bs.price_call(100.0, 1.0), 10.4506, epsilon = 0.001);
    }

    #[test]
    fn test_put_price_reference_value() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        assert_relative_eq!(bs.price_put(100.0, 1.0), 5.5735, epsilon = 0.001);
    }

    #[test]
    fn test_call_price_expiry_zero() {
        let bs = BlackScholes::new(110.0_f64, 0.05, 0.2).unwrap();
        assert_relative_eq!(bs.price_call(100.0, 0.0), 10.0, epsilon = 1e-10);

        let bs = BlackScholes::new(90.0_f64, 0.05, 0.2).unwrap();
        assert_relative_eq!(bs.price_call(100.0, 0.0), 0.0, epsilon = 1e-10);
    }

    #[test]
    fn test_put_price_expiry_zero() {
        let bs = BlackScholes::new(90.0_f64, 0.05, 0.2).unwrap();
        assert_relative_eq!(bs.price_put(100.0, 0.0), 10.0, epsilon = 1e-10);

        let bs = BlackScholes::new(110.0_f64, 0.05, 0.2).unwrap();
        assert_relative_eq!(bs.price_put(100.0, 0.0), 0.0, epsilon = 1e-10);
    }

    #[test]
    fn test_deep_itm_call_near_forward() {
        // Deep ITM call ≈ S - K*exp(-rT)
        let bs = BlackScholes::new(200.0_f64, 0.05, 0.2).unwrap();
        let price = bs.price_call(100.0, 1.0);
        let intrinsic = 200.0 - 100.0 * (-0.05_f64).exp();
        assert!(price >= intrinsic - 0.01);
    }

    #[test]
    fn test_deep_otm_call_near_zero() {
        let bs = BlackScholes::new(50.0_f64, 0.05, 0.2).unwrap();
        assert!(bs.price_call(100.0, 1.0) < 0.01);
    }

    #[test]
    fn test_degenerate_volatility_forward_payoff() {
        // σ → 0 drives the call price to max(S - K*exp(-rT), 0)
        let bs = BlackScholes::new(100.0_f64, 0.05, 1e-4).unwrap();
        let forward = 100.0 - 100.0 * (-0.05_f64).exp();
        assert_relative_eq!(bs.price_call(100.0, 1.0), forward, epsilon = 1e-4);
        assert!(bs.price_put(100.0, 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_put_call_parity_various_strikes() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        for strike in [80.0, 90.0, 100.0, 110.0, 120.0] {
            let call = bs.price_call(strike, 1.0);
            let put = bs.price_put(strike, 1.0);
            let forward = 100.0 - strike * (-0.05_f64).exp();
            assert_relative_eq!(call - put, forward, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_put_call_parity_various_expiries() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        for expiry in [0.25, 0.5, 1.0, 2.0] {
            let call = bs.price_call(100.0, expiry);
            let put = bs.price_put(100.0, expiry);
            let forward = 100.0 - 100.0 * (-0.05 * expiry).exp();
            assert_relative_eq!(call - put, forward, epsilon = 1e-9);
        }
    }

    proptest! {
        #[test]
        fn prop_put_call_parity(
            spot in 10.0..500.0_f64,
            strike in 10.0..500.0_f64,
            rate in -0.05..0.15_f64,
            vol in 0.01..1.0_f64,
            expiry in 0.05..5.0_f64,
        ) {
            let bs = BlackScholes::new(spot, rate, vol).unwrap();
            let call = bs.price_call(strike, expiry);
            let put = bs.price_put(strike, expiry);
            let forward = spot - strike * (-rate * expiry).exp();
            // CDF approximation error (~1.5e-7) scales with the notional
            prop_assert!((call - put - forward).abs() < 1e-4 * spot.max(strike));
        }

        #[test]
        fn prop_prices_non_negative(
            spot in 10.0..500.0_f64,
            strike in 10.0..500.0_f64,
            rate in 0.0..0.15_f64,
            vol in 0.01..1.0_f64,
            expiry in 0.05..5.0_f64,
        ) {
            let bs = BlackScholes::new(spot, rate, vol).unwrap();
            // erfc approximation error permits a vanishing negative excursion
            prop_assert!(bs.price_call(strike, expiry) > -1e-4 * spot.max(strike));
            prop_assert!(bs.price_put(strike, expiry) > -1e-4 * spot.max(strike));
        }
    }
}
