//! Special functions backing the discrete CDFs.
//!
//! | Function | Description |
//! |----------|-------------|
//! | [`lgamma`] | Log-gamma ln Γ(x) |
//! | [`lbeta`] | Log-beta ln B(a,b) |
//! | [`gamma_inc`] | Regularized lower incomplete gamma P(a,x) |
//! | [`gamma_inc_upper`] | Regularized upper incomplete gamma Q(a,x) = 1−P(a,x) |
//! | [`betainc`] | Regularized incomplete beta I_x(a,b) |
//!
//! The Poisson CDF is `Q(k+1, λ)` and the binomial CDF is `I_{1−p}(n−k, k+1)`,
//! so these are exactly what the confidence interval inversion needs.
//!
//! ```
//! use astrostat::special::{lgamma, gamma_inc_upper, betainc};
//!
//! // ln Γ(5) = ln 24
//! assert!((lgamma(5.0_f64) - 24.0_f64.ln()).abs() < 1e-12);
//!
//! // Q(1, x) = e^{−x}
//! assert!((gamma_inc_upper(1.0_f64, 2.0).unwrap() - (-2.0_f64).exp()).abs() < 1e-14);
//!
//! // I_x(1, 1) = x
//! assert!((betainc(1.0_f64, 1.0, 0.3).unwrap() - 0.3).abs() < 1e-14);
//! ```

mod betainc;
mod incgamma;

#[cfg(test)]
mod tests;

pub use betainc::betainc;
pub use incgamma::{gamma_inc, gamma_inc_upper};

use crate::FloatScalar;

/// Errors from special function evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SpecialError {
    /// Series or continued fraction did not converge within the iteration limit.
    #[error("series/continued fraction did not converge")]
    ConvergenceFailure,
    /// Input outside the function's domain (e.g. a ≤ 0 or x < 0 for incomplete gamma).
    #[error("input outside function domain")]
    DomainError,
}

/// Iterations allowed for a series or continued fraction whose largest
/// parameter is `scale`. Both need O(√scale) terms near the transition point.
pub(crate) fn iteration_cap<T: FloatScalar>(scale: T) -> usize {
    let extra = (T::lit(10.0) * scale.abs().sqrt()).to_usize().unwrap_or(0);
    500 + extra.min(1_000_000)
}

// Lanczos approximation, g = 7, n = 9 (Godfrey's coefficients).
const LANCZOS_G: f64 = 7.0;
const LANCZOS: [f64; 9] = [
    0.99999999999980993,
    676.5203681218851,
    -1259.1392167224028,
    771.32342877765313,
    -176.61502916214059,
    12.507343278686905,
    -0.13857109526572012,
    9.9843695780195716e-6,
    1.5056327351493116e-7,
];

/// Natural logarithm of |Γ(x)|.
///
/// Lanczos approximation in log space for `x ≥ 0.5`, reflection formula
/// below that. Poles at non-positive integers give `+∞`; NaN passes through.
///
/// ```
/// use astrostat::special::lgamma;
///
/// // ln Γ(100) without overflow
/// assert!((lgamma(100.0_f64) - 359.1342053695754).abs() < 1e-8);
/// ```
pub fn lgamma<T: FloatScalar>(x: T) -> T {
    if x.is_nan() {
        return x;
    }
    let one = T::one();
    let half = T::lit(0.5);

    if x <= T::zero() && x == x.floor() {
        return T::infinity();
    }

    if x < half {
        // Γ(x)Γ(1−x) = π / sin(πx)
        let s = (T::PI() * x).sin().abs();
        return T::PI().ln() - s.ln() - lgamma(one - x);
    }

    let z = x - one;
    let t = z + T::lit(LANCZOS_G) + half;
    let series = LANCZOS[1..]
        .iter()
        .enumerate()
        .fold(T::lit(LANCZOS[0]), |acc, (i, &c)| {
            acc + T::lit(c) / (z + T::count(i as u64 + 1))
        });

    T::lit(0.5) * (T::TAU()).ln() + (z + half) * t.ln() - t + series.ln()
}

/// Natural logarithm of the beta function, `ln Γ(a) + ln Γ(b) − ln Γ(a+b)`.
pub fn lbeta<T: FloatScalar>(a: T, b: T) -> T {
    lgamma(a) + lgamma(b) - lgamma(a + b)
}

/// Evaluate `b0 + a1/(b1 + a2/(b2 + …))` by the modified Lentz method.
///
/// `term(j)` yields `(a_j, b_j)` for `j ≥ 1`.
pub(crate) fn lentz<T: FloatScalar>(
    b0: T,
    max_iter: usize,
    mut term: impl FnMut(usize) -> (T, T),
) -> Result<T, SpecialError> {
    let tiny = T::lit(1e-300).max(T::min_positive_value());
    let nudge = |v: T| if v.abs() < tiny { tiny } else { v };

    let mut f = nudge(b0);
    let mut c = f;
    let mut d = T::zero();

    for j in 1..=max_iter {
        let (aj, bj) = term(j);
        d = nudge(bj + aj * d).recip();
        c = nudge(bj + aj / c);
        let delta = c * d;
        f = f * delta;
        if (delta - T::one()).abs() < T::epsilon() {
            return Ok(f);
        }
    }
    Err(SpecialError::ConvergenceFailure)
}
