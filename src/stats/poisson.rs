use crate::FloatScalar;
use crate::special::{gamma_inc, gamma_inc_upper, lgamma};
use super::{DiscreteDistribution, StatsError};

/// Poisson distribution with rate λ.
///
/// P(X = k) = λ^k e^{−λ} / k! for k = 0, 1, 2, …
///
/// # Example
///
/// ```
/// use astrostat::stats::{Poisson, DiscreteDistribution};
///
/// let p = Poisson::new(3.0_f64).unwrap();
/// assert!((p.mean() - 3.0).abs() < 1e-14);
/// assert_eq!(p.sf(0), 1.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Poisson<T> {
    lambda: T,
}

impl<T: FloatScalar> Poisson<T> {
    /// Create a Poisson distribution with rate `lambda`. Requires finite `lambda > 0`.
    pub fn new(lambda: T) -> Result<Self, StatsError> {
        if !(lambda > T::zero()) || lambda.is_infinite() {
            return Err(StatsError::InvalidParameter);
        }
        Ok(Self { lambda })
    }

    /// The rate λ.
    pub fn lambda(&self) -> T {
        self.lambda
    }
}

impl<T: FloatScalar> DiscreteDistribution<T> for Poisson<T> {
    fn pmf(&self, k: u64) -> T {
        self.ln_pmf(k).exp()
    }

    fn ln_pmf(&self, k: u64) -> T {
        let kf = T::count(k);
        kf * self.lambda.ln() - self.lambda - lgamma(kf + T::one())
    }

    fn cdf(&self, k: u64) -> T {
        // P(X ≤ k) = Q(k+1, λ)
        gamma_inc_upper(T::count(k + 1), self.lambda).unwrap_or_else(|_| T::nan())
    }

    fn sf(&self, k: u64) -> T {
        // P(X ≥ k) = P(k, λ)
        if k == 0 {
            return T::one();
        }
        gamma_inc(T::count(k), self.lambda).unwrap_or_else(|_| T::nan())
    }

    fn mean(&self) -> T {
        self.lambda
    }

    fn variance(&self) -> T {
        self.lambda
    }
}
