//! Confidence limits on a Poisson mean and a binomial probability.
//!
//! Confidence levels are given in percent (95, 90, 68.3, …). Each limit is
//! the parameter value at which the observed count, or something more
//! extreme, has probability `1 − conf/100`; it is found by bisecting the
//! monotone tail probability in log10 space.

use crate::optim::{bisect_log10, BisectSettings, DEFAULT_LOG_BRACKET};
use crate::FloatScalar;

use super::{Binomial, DiscreteDistribution, Poisson, StatsError};

/// A lower and upper limit; both NaN when the input was undefined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceInterval<T> {
    /// Lower limit.
    pub lower: T,
    /// Upper limit.
    pub upper: T,
}

impl<T: FloatScalar> ConfidenceInterval<T> {
    fn undefined() -> Self {
        Self {
            lower: T::nan(),
            upper: T::nan(),
        }
    }

    /// `false` when the limits are NaN.
    pub fn is_defined(&self) -> bool {
        !(self.lower.is_nan() || self.upper.is_nan())
    }

    /// `upper - lower`.
    pub fn width(&self) -> T {
        self.upper - self.lower
    }

    /// Whether `value` lies within `[lower, upper]`.
    pub fn contains(&self, value: T) -> bool {
        self.lower <= value && value <= self.upper
    }
}

impl<T> From<ConfidenceInterval<T>> for (T, T) {
    fn from(ci: ConfidenceInterval<T>) -> Self {
        (ci.lower, ci.upper)
    }
}

/// Level used for each side of a two-sided interval at `conf` percent.
fn two_sided_level<T: FloatScalar>(conf: T) -> T {
    let hundred = T::lit(100.0);
    conf + T::lit(0.5) * (hundred - conf)
}

/// Smallest and largest Poisson means consistent with `nevents` at `conf` percent.
///
/// `lower` is the mean for which ≥ `nevents` occurs in `100 − conf` percent
/// of cases, `upper` the mean for which ≤ `nevents` does. With no events the
/// lower limit is exactly 0. A NaN `conf` gives NaN limits.
///
/// # Errors
///
/// [`StatsError::Root`] if a limit lies outside `[1e-10, 1e10]` or `conf`
/// is not strictly between 0 and 100.
///
/// A level so close to 100 that `1 − conf/100` is within the default
/// bisection tolerance (`1e-6` for `f64`) is not an error: any mean whose
/// tail is near zero satisfies it, so the limits returned are meaningless.
///
/// # Example
///
/// ```
/// use astrostat::stats::poisson_min_max_limits;
///
/// // 95% upper limit for zero counts is −ln(0.05) ≈ 3.0
/// let ci = poisson_min_max_limits(95.0_f64, 0).unwrap();
/// assert_eq!(ci.lower, 0.0);
/// assert!((ci.upper - 0.05_f64.ln().abs()).abs() < 1e-4);
/// ```
pub fn poisson_min_max_limits<T: FloatScalar>(
    conf: T,
    nevents: u64,
) -> Result<ConfidenceInterval<T>, StatsError> {
    if conf.is_nan() {
        return Ok(ConfidenceInterval::undefined());
    }
    let target = T::one() - conf / T::lit(100.0);
    let settings = BisectSettings::default();
    let (xlo, xhi) = (T::lit(DEFAULT_LOG_BRACKET.0), T::lit(DEFAULT_LOG_BRACKET.1));

    let tail = |mu: T, upper: bool| match Poisson::new(mu) {
        Ok(d) if upper => d.cdf(nevents),
        Ok(d) => d.sf(nevents),
        Err(_) => T::nan(),
    };

    let lower = if nevents == 0 {
        T::zero()
    } else {
        bisect_log10(|mu| tail(mu, false), target, xlo, xhi, &settings)?.x
    };
    let upper = bisect_log10(|mu| tail(mu, true), target, xlo, xhi, &settings)?.x;

    log::debug!("poisson limits at {conf}% for {nevents} events: [{lower}, {upper}]");
    Ok(ConfidenceInterval { lower, upper })
}

/// Two-sided Poisson confidence interval on the mean given `nevents`.
///
/// Each side is computed at `conf + (100 − conf)/2` so that `conf` percent
/// lies between the limits. With no events the one-sided upper limit at
/// `conf` is returned instead. Negative `conf` is not rejected: it maps to a
/// per-side level between 0 and 50.
///
/// # Example
///
/// ```
/// use astrostat::stats::poisson_confidence_interval;
///
/// let ci = poisson_confidence_interval(95.0_f64, 5).unwrap();
/// assert!((ci.lower - 1.6235).abs() < 1e-3);
/// assert!((ci.upper - 11.668).abs() < 1e-2);
/// ```
pub fn poisson_confidence_interval<T: FloatScalar>(
    conf: T,
    nevents: u64,
) -> Result<ConfidenceInterval<T>, StatsError> {
    if nevents == 0 {
        return poisson_min_max_limits(conf, nevents);
    }
    poisson_min_max_limits(two_sided_level(conf), nevents)
}

/// Smallest and largest success probabilities consistent with `nsuccess`
/// out of `ntrial` at `conf` percent.
///
/// No successes gives a lower limit of exactly 0; all successes gives an
/// upper limit of exactly 1. A NaN `conf` gives NaN limits.
///
/// # Errors
///
/// [`StatsError::InvalidParameter`] if `nsuccess > ntrial`.
/// [`StatsError::Root`] if a limit falls below `1e-10` or `conf` is not
/// strictly between 0 and 100.
///
/// As with [`poisson_min_max_limits`], levels whose tail `1 − conf/100` is
/// within the bisection tolerance return without error but are meaningless.
pub fn binomial_min_max_limits<T: FloatScalar>(
    conf: T,
    ntrial: u64,
    nsuccess: u64,
) -> Result<ConfidenceInterval<T>, StatsError> {
    if conf.is_nan() {
        return Ok(ConfidenceInterval::undefined());
    }
    if nsuccess > ntrial {
        return Err(StatsError::InvalidParameter);
    }
    let target = T::one() - conf / T::lit(100.0);
    let settings = BisectSettings::default();
    // p ≤ 1
    let (xlo, xhi) = (T::lit(DEFAULT_LOG_BRACKET.0), T::zero());

    let tail = |p: T, upper: bool| match Binomial::new(ntrial, p) {
        Ok(d) if upper => d.cdf(nsuccess),
        Ok(d) => d.sf(nsuccess),
        Err(_) => T::nan(),
    };

    let lower = if nsuccess == 0 {
        T::zero()
    } else {
        bisect_log10(|p| tail(p, false), target, xlo, xhi, &settings)?.x
    };
    let upper = if nsuccess == ntrial {
        T::one()
    } else {
        bisect_log10(|p| tail(p, true), target, xlo, xhi, &settings)?.x
    };

    log::debug!(
        "binomial limits at {conf}% for {nsuccess}/{ntrial} successes: [{lower}, {upper}]"
    );
    Ok(ConfidenceInterval { lower, upper })
}

/// Two-sided binomial confidence interval on the success probability.
///
/// Each side is computed at `conf + (100 − conf)/2`. With no successes the
/// one-sided upper limit at `conf` is returned instead. Negative `conf` maps
/// to a per-side level between 0 and 50 rather than an error.
///
/// # Example
///
/// ```
/// use astrostat::stats::binomial_confidence_interval;
///
/// let ci = binomial_confidence_interval(95.0_f64, 10, 10).unwrap();
/// assert_eq!(ci.upper, 1.0);
/// // p^10 = 0.025 at the lower limit
/// assert!((ci.lower - 0.025_f64.powf(0.1)).abs() < 1e-5);
/// ```
pub fn binomial_confidence_interval<T: FloatScalar>(
    conf: T,
    ntrial: u64,
    nsuccess: u64,
) -> Result<ConfidenceInterval<T>, StatsError> {
    if nsuccess == 0 {
        return binomial_min_max_limits(conf, ntrial, nsuccess);
    }
    binomial_min_max_limits(two_sided_level(conf), ntrial, nsuccess)
}
