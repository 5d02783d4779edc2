//! Counting statistics and sample clipping.
//!
//! # Discrete distributions
//!
//! | Distribution | Parameters | Support |
//! |---|---|---|
//! | [`Binomial`] | trials n, probability p | {0, …, n} |
//! | [`Poisson`] | rate λ | {0, 1, 2, …} |
//!
//! # Confidence intervals
//!
//! [`poisson_confidence_interval`] and [`binomial_confidence_interval`] invert
//! the CDFs above with [`crate::optim::bisect_log10`]. The `*_min_max_limits`
//! variants give the one-sided limits at a single level.
//!
//! # Outliers
//!
//! [`remove_outliers`] performs iterative sigma clipping and returns a keep
//! mask (requires `alloc`).
//!
//! # Example
//!
//! ```
//! use astrostat::stats::poisson_confidence_interval;
//!
//! let ci = poisson_confidence_interval(95.0_f64, 5).unwrap();
//! assert!(ci.lower < 5.0 && 5.0 < ci.upper);
//! ```

mod binomial;
mod interval;
mod poisson;

#[cfg(feature = "alloc")]
mod descriptive;
#[cfg(feature = "alloc")]
mod outliers;


pub use binomial::Binomial;
pub use interval::{
    binomial_confidence_interval, binomial_min_max_limits, poisson_confidence_interval,
    poisson_min_max_limits, ConfidenceInterval,
};
pub use poisson::Poisson;

#[cfg(feature = "alloc")]
pub use descriptive::{mean, median, population_std_dev};
#[cfg(feature = "alloc")]
pub use outliers::{remove_outliers, Centre, Clip, OutlierSettings};

use crate::optim::OptimError;

/// Errors from distribution construction and interval inversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StatsError {
    /// A parameter is out of its valid range.
    #[error("distribution parameter out of valid range")]
    InvalidParameter,
    /// The CDF inversion failed.
    #[error("confidence bound search failed: {0}")]
    Root(#[from] OptimError),
}

/// Trait for discrete probability distributions.
pub trait DiscreteDistribution<T> {
    /// Probability mass function P(X = k).
    fn pmf(&self, k: u64) -> T;
    /// Natural log of the probability mass function.
    fn ln_pmf(&self, k: u64) -> T;
    /// Cumulative distribution function P(X ≤ k).
    fn cdf(&self, k: u64) -> T;
    /// Upper tail P(X ≥ k), evaluated without forming `1 − cdf(k − 1)`.
    fn sf(&self, k: u64) -> T;
    /// Expected value E\[X\].
    fn mean(&self) -> T;
    /// Variance Var(X).
    fn variance(&self) -> T;
}
