//! Iterative sigma clipping.

use alloc::vec::Vec;

use crate::FloatScalar;

use super::descriptive::{mean, median, population_std_dev};

/// Which side of the centre is clipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Clip {
    /// Reject points below `centre − nsig_lo·σ` only.
    Low,
    /// Reject points above `centre + nsig_hi·σ` only.
    High,
    /// Reject on both sides.
    #[default]
    Both,
}

/// How the centre of the surviving points is estimated.
#[derive(Debug, Clone, Copy)]
pub enum Centre<T> {
    /// Arithmetic mean.
    Mean,
    /// Median.
    Median,
    /// Caller-supplied estimator; only ever called on a non-empty slice.
    Custom(fn(&[T]) -> T),
}

impl<T: FloatScalar> Centre<T> {
    fn estimate(&self, data: &[T]) -> T {
        match self {
            Centre::Mean => mean(data),
            Centre::Median => median(data),
            Centre::Custom(f) => Some(f(data)),
        }
        .unwrap_or_else(T::nan)
    }
}

/// Settings for [`remove_outliers`].
#[derive(Debug, Clone, Copy)]
pub struct OutlierSettings<T> {
    /// Low outliers lie this many standard deviations below the centre.
    pub nsig_lo: T,
    /// High outliers lie this many standard deviations above the centre.
    pub nsig_hi: T,
    /// Which side(s) to clip.
    pub clip: Clip,
    /// Centre estimator.
    pub centre: Centre<T>,
    /// Clipping passes before giving up on convergence.
    pub max_iter: usize,
    /// Log each pass at debug level.
    pub verbose: bool,
}

impl<T: FloatScalar> OutlierSettings<T> {
    /// Clip both sides around the median, at most 100 passes.
    pub fn new(nsig_lo: T, nsig_hi: T) -> Self {
        Self {
            nsig_lo,
            nsig_hi,
            clip: Clip::Both,
            centre: Centre::Median,
            max_iter: 100,
            verbose: false,
        }
    }

    /// Same threshold on both sides.
    pub fn symmetric(nsig: T) -> Self {
        Self::new(nsig, nsig)
    }

    /// Replace the clipped side(s).
    pub fn with_clip(mut self, clip: Clip) -> Self {
        self.clip = clip;
        self
    }

    /// Replace the centre estimator.
    pub fn with_centre(mut self, centre: Centre<T>) -> Self {
        self.centre = centre;
        self
    }

    fn keeps(&self, x: T, centre: T, stdev: T) -> bool {
        let above_lo = x > centre - self.nsig_lo * stdev;
        let below_hi = x < centre + self.nsig_hi * stdev;
        match self.clip {
            Clip::Low => above_lo,
            Clip::High => below_hi,
            Clip::Both => above_lo && below_hi,
        }
    }
}

/// Strip outliers from `data`, iterating until the surviving set stops changing.
///
/// Returns a mask the same length as `data` that is `false` at every outlier.
/// NaN entries are always masked. Each pass recomputes the centre and the
/// population standard deviation of the survivors and keeps points strictly
/// inside the limits; a pass with zero spread rejects nothing. Iteration stops
/// when a pass leaves the survivor count unchanged or after `max_iter` passes.
///
/// # Example
///
/// ```
/// use astrostat::stats::{remove_outliers, OutlierSettings};
///
/// let mut data: Vec<f64> = (0..20).map(|i| i as f64).collect();
/// data.push(1000.0);
/// let good = remove_outliers(&data, &OutlierSettings::symmetric(3.0));
/// assert!(!good[20]);
/// assert_eq!(good.iter().filter(|&&g| g).count(), 20);
/// ```
pub fn remove_outliers<T: FloatScalar>(data: &[T], settings: &OutlierSettings<T>) -> Vec<bool> {
    let mut good: Vec<bool> = data.iter().map(|x| !x.is_nan()).collect();
    let mut ngood = good.iter().filter(|&&g| g).count();
    let mut niter = 0usize;

    while ngood > 0 {
        let survivors: Vec<T> = data
            .iter()
            .zip(&good)
            .filter_map(|(&x, &g)| g.then_some(x))
            .collect();
        let centre = settings.centre.estimate(&survivors);
        let stdev = population_std_dev(&survivors).unwrap_or_else(T::nan);

        if stdev > T::zero() {
            for (g, &x) in good.iter_mut().zip(data) {
                if *g {
                    *g = settings.keeps(x, centre, stdev);
                }
            }
        }

        niter += 1;
        let ngood_new = good.iter().filter(|&&g| g).count();
        if ngood_new == ngood || niter > settings.max_iter {
            break;
        }
        if settings.verbose {
            log::debug!(
                "remove_outliers: pass {niter}, kept {ngood_new} of {ngood}, centre {centre}, std {stdev}"
            );
        }
        ngood = ngood_new;
    }

    good
}
