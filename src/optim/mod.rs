//! Monotone root finding for inverting CDFs.
//!
//! - [`bisect_log10`] — bisection in base-10 exponent space for functions
//!   monotone over a positive domain spanning many decades.
//!
//! # Example
//!
//! ```
//! use astrostat::optim::{bisect_log10, BisectSettings};
//!
//! // x² = 4 somewhere in [0.1, 10]
//! let r = bisect_log10(|x: f64| x * x, 4.0, -1.0, 1.0, &BisectSettings::default()).unwrap();
//! assert!((r.x - 2.0).abs() < 1e-6);
//! ```

mod root;

#[cfg(test)]
mod tests;

pub use root::{bisect_log10, BisectSettings, DEFAULT_LOG_BRACKET};

/// Errors from root finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum OptimError {
    /// Maximum number of iterations exceeded.
    #[error("maximum iterations exceeded")]
    MaxIterations,
    /// The function values at the bracket ends do not straddle the target.
    #[error("min and max x values do not bracket the target")]
    BracketInvalid,
}

/// Result of a scalar root-finding algorithm.
#[derive(Debug, Clone, Copy)]
pub struct RootResult<T> {
    /// Approximate root, in linear space.
    pub x: T,
    /// Signed deviation from the target at the root: `f(x) - target`.
    pub fx: T,
    /// Number of bracket narrowing steps performed.
    pub iterations: usize,
    /// Number of function evaluations.
    pub evals: usize,
}

impl<T: crate::FloatScalar> RootResult<T> {
    /// Result for undefined input: `x` and `fx` both NaN.
    pub(crate) fn undefined() -> Self {
        Self {
            x: T::nan(),
            fx: T::nan(),
            iterations: 0,
            evals: 0,
        }
    }

    /// `true` when the result carries a root rather than propagated NaN.
    pub fn is_defined(&self) -> bool {
        !self.x.is_nan()
    }
}
