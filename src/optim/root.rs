use crate::traits::FloatScalar;

use super::{OptimError, RootResult};

/// Default search bracket as base-10 exponents: `[1e-10, 1e10]`.
pub const DEFAULT_LOG_BRACKET: (f64, f64) = (-10.0, 10.0);

/// Settings for [`bisect_log10`].
///
/// The default `f_tol` is `1e-6`, or `√ε` when that is larger. For `f32`
/// (`√ε ≈ 3.5e-4`) adjacent bracket exponents can move a steep `f` by more
/// than `1e-6`, so a tighter tolerance would never be met.
#[derive(Debug, Clone, Copy)]
pub struct BisectSettings<T> {
    /// Convergence tolerance on `|f(x) - target|`.
    pub f_tol: T,
    /// Maximum number of bracket narrowing steps.
    pub max_iter: usize,
}

impl<T: FloatScalar> Default for BisectSettings<T> {
    fn default() -> Self {
        Self {
            f_tol: T::lit(1e-6).max(T::epsilon().sqrt()),
            max_iter: 1000,
        }
    }
}

/// Bisection in log10 space.
///
/// Finds `x = 10^e` with `e ∈ [xlo, xhi]` such that `f(x) ≈ target`. `f` must
/// be monotone on `[10^xlo, 10^xhi]`; either direction works, a decreasing
/// `f` just flips which half is kept at each step.
///
/// # Arguments
///
/// * `f` — function to invert, evaluated only at positive arguments
/// * `target` — value sought
/// * `xlo`, `xhi` — bracket exponents, see [`DEFAULT_LOG_BRACKET`]
/// * `settings` — tolerance on the function value and iteration limit
///
/// A NaN `target`, `xlo` or `xhi` is not an error: the result has `x` and
/// `fx` both NaN and `f` is never called.
///
/// # Errors
///
/// Returns [`OptimError::BracketInvalid`] if `f(10^xlo) - target` and
/// `f(10^xhi) - target` do not have strictly opposite signs.
/// Returns [`OptimError::MaxIterations`] if `max_iter` narrowing steps pass
/// without meeting `f_tol`.
///
/// # Example
///
/// ```
/// use astrostat::optim::{bisect_log10, BisectSettings, OptimError};
///
/// let s = BisectSettings::default();
///
/// // e^{-x} is decreasing; e^{-x} = 0.5 at x = ln 2
/// let r = bisect_log10(|x: f64| (-x).exp(), 0.5, -3.0, 2.0, &s).unwrap();
/// assert!((r.x - 2.0_f64.ln()).abs() < 1e-5);
///
/// // 100 is not reachable by f(x) = x on [1e-10, 0.1]
/// let e = bisect_log10(|x: f64| x, 100.0, -10.0, -1.0, &s).unwrap_err();
/// assert_eq!(e, OptimError::BracketInvalid);
/// ```
pub fn bisect_log10<T: FloatScalar>(
    mut f: impl FnMut(T) -> T,
    target: T,
    xlo: T,
    xhi: T,
    settings: &BisectSettings<T>,
) -> Result<RootResult<T>, OptimError> {
    if target.is_nan() || xlo.is_nan() || xhi.is_nan() {
        return Ok(RootResult::undefined());
    }

    let ten = T::lit(10.0);
    let mut lo = xlo;
    let mut hi = xhi;

    let dlo = f(ten.powf(lo)) - target;
    let dhi = f(ten.powf(hi)) - target;
    let mut evals = 2usize;

    // NaN deviations fail this test too
    if !(dlo * dhi < T::zero()) {
        return Err(OptimError::BracketInvalid);
    }

    // Orient so the deviation rises from lo to hi
    let sign = if dhi < dlo { -T::one() } else { T::one() };

    let mut iterations = 0usize;
    loop {
        let mid = (lo + hi) / (T::one() + T::one());
        let x = ten.powf(mid);
        let diff = f(x) - target;
        evals += 1;

        log::trace!("bisect_log10: iter {iterations} log10(x) = {mid}, f(x) - target = {diff}");

        if diff.abs() < settings.f_tol {
            return Ok(RootResult {
                x,
                fx: diff,
                iterations,
                evals,
            });
        }
        if iterations == settings.max_iter {
            return Err(OptimError::MaxIterations);
        }
        if sign * diff > T::zero() {
            hi = mid;
        } else {
            lo = mid;
        }
        iterations += 1;
    }
}
