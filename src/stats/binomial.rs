use crate::FloatScalar;
use crate::special::{betainc, lgamma};
use super::{DiscreteDistribution, StatsError};

/// Binomial distribution B(n, p).
///
/// P(X = k) = C(n,k) p^k (1−p)^{n−k} for k = 0, …, n.
///
/// # Example
///
/// ```
/// use astrostat::stats::{Binomial, DiscreteDistribution};
///
/// let b = Binomial::new(10, 0.5_f64).unwrap();
/// assert!((b.mean() - 5.0).abs() < 1e-14);
/// assert!((b.variance() - 2.5).abs() < 1e-14);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Binomial<T> {
    n: u64,
    p: T,
}

impl<T: FloatScalar> Binomial<T> {
    /// Create a binomial distribution with `n` trials and success probability `p`.
    /// Requires `0 ≤ p ≤ 1`.
    pub fn new(n: u64, p: T) -> Result<Self, StatsError> {
        if !(p >= T::zero() && p <= T::one()) {
            return Err(StatsError::InvalidParameter);
        }
        Ok(Self { n, p })
    }

    /// Number of trials.
    pub fn trials(&self) -> u64 {
        self.n
    }

    /// Success probability.
    pub fn p(&self) -> T {
        self.p
    }
}

impl<T: FloatScalar> DiscreteDistribution<T> for Binomial<T> {
    fn pmf(&self, k: u64) -> T {
        if k > self.n {
            return T::zero();
        }
        self.ln_pmf(k).exp()
    }

    fn ln_pmf(&self, k: u64) -> T {
        if k > self.n {
            return T::neg_infinity();
        }
        let one = T::one();
        let nf = T::count(self.n);
        let kf = T::count(k);
        // 0·ln(0) terms at p ∈ {0, 1} vanish
        let success = if k == 0 { T::zero() } else { kf * self.p.ln() };
        let failure = if k == self.n { T::zero() } else { (nf - kf) * (one - self.p).ln() };
        lgamma(nf + one) - lgamma(kf + one) - lgamma(nf - kf + one) + success + failure
    }

    fn cdf(&self, k: u64) -> T {
        if k >= self.n {
            return T::one();
        }
        // P(X ≤ k) = I_{1−p}(n−k, k+1)
        let a = T::count(self.n - k);
        let b = T::count(k + 1);
        betainc(a, b, T::one() - self.p).unwrap_or_else(|_| T::nan())
    }

    fn sf(&self, k: u64) -> T {
        if k == 0 {
            return T::one();
        }
        if k > self.n {
            return T::zero();
        }
        // P(X ≥ k) = I_p(k, n−k+1)
        let a = T::count(k);
        let b = T::count(self.n - k + 1);
        betainc(a, b, self.p).unwrap_or_else(|_| T::nan())
    }

    fn mean(&self) -> T {
        T::count(self.n) * self.p
    }

    fn variance(&self) -> T {
        T::count(self.n) * self.p * (T::one() - self.p)
    }
}
