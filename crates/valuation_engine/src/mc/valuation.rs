//! Payoff valuation for European options.
//!
//! Reduces a vector of terminal prices to a discounted expected payoff.
//! The estimator is the unbiased sample mean of per-path payoffs,
//! discounted at the risk-free rate; its statistical error decreases as
//! O(1/√n_paths) and is reported as a standard error alongside the price.

/// Payoff type for option valuation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PayoffKind {
    /// Call option: max(S - K, 0)
    #[default]
    Call,
    /// Put option: max(K - S, 0)
    Put,
}

impl PayoffKind {
    /// Intrinsic payoff at expiry for a terminal price.
    #[inline]
    pub fn intrinsic(&self, terminal: f64, strike: f64) -> f64 {
        match self {
            PayoffKind::Call => (terminal - strike).max(0.0),
            PayoffKind::Put => (strike - terminal).max(0.0),
        }
    }
}

/// Monte Carlo price estimate.
///
/// `std_error` quantifies the sampling noise of the estimator; it is
/// informational output, not a confidence-interval guarantee.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PriceEstimate {
    /// Discounted expected payoff.
    pub price: f64,
    /// Standard error of the price estimate.
    pub std_error: f64,
}

impl PriceEstimate {
    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error
    }
}

/// Computes per-path intrinsic payoffs from terminal prices.
pub fn terminal_payoffs(terminals: &[f64], strike: f64, kind: PayoffKind) -> Vec<f64> {
    terminals
        .iter()
        .map(|&terminal| kind.intrinsic(terminal, strike))
        .collect()
}

/// Aggregates payoffs into a discounted price estimate.
///
/// Price is `discount_factor × mean(payoffs)`; the standard error is the
/// discounted sample standard deviation over √n.
pub fn discounted_estimate(payoffs: &[f64], discount_factor: f64) -> PriceEstimate {
    let n = payoffs.len();
    if n == 0 {
        return PriceEstimate::default();
    }

    let mean = payoffs.iter().sum::<f64>() / n as f64;

    let std_error = if n > 1 {
        let variance =
            payoffs.iter().map(|&p| (p - mean) * (p - mean)).sum::<f64>() / (n - 1) as f64;
        variance.sqrt() / (n as f64).sqrt()
    } else {
        0.0
    };

    PriceEstimate {
        price: mean * discount_factor,
        std_error: std_error * discount_factor,
    }
}
