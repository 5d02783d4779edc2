//! Location and scale of a sample, as used by sigma clipping.
//!
//! NaN is not filtered here; callers drop it first. Each returns `None` for
//! an empty slice.

use alloc::vec::Vec;

use crate::FloatScalar;

/// Arithmetic mean with Kahan compensated summation.
///
/// ```
/// use astrostat::stats::mean;
/// assert_eq!(mean(&[1.0_f64, 2.0, 3.0, 4.0]), Some(2.5));
/// assert_eq!(mean::<f64>(&[]), None);
/// ```
pub fn mean<T: FloatScalar>(data: &[T]) -> Option<T> {
    if data.is_empty() {
        return None;
    }
    let mut sum = T::zero();
    let mut comp = T::zero();
    for &x in data {
        let y = x - comp;
        let t = sum + y;
        comp = (t - sum) - y;
        sum = t;
    }
    Some(sum / T::count(data.len() as u64))
}

/// Median; the mean of the two central values for even lengths.
///
/// ```
/// use astrostat::stats::median;
/// assert_eq!(median(&[3.0_f64, 1.0, 2.0]), Some(2.0));
/// assert_eq!(median(&[4.0_f64, 1.0, 3.0, 2.0]), Some(2.5));
/// ```
pub fn median<T: FloatScalar>(data: &[T]) -> Option<T> {
    if data.is_empty() {
        return None;
    }
    let mut sorted: Vec<T> = data.to_vec();
    sorted.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(core::cmp::Ordering::Equal));
    let n = sorted.len();
    if n % 2 == 1 {
        Some(sorted[n / 2])
    } else {
        Some((sorted[n / 2 - 1] + sorted[n / 2]) / (T::one() + T::one()))
    }
}

/// Population standard deviation (denominator `n`), Welford's algorithm.
///
/// ```
/// use astrostat::stats::population_std_dev;
/// let v = [2.0_f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// assert!((population_std_dev(&v).unwrap() - 2.0).abs() < 1e-12);
/// ```
pub fn population_std_dev<T: FloatScalar>(data: &[T]) -> Option<T> {
    if data.is_empty() {
        return None;
    }
    let mut m = T::zero();
    let mut m2 = T::zero();
    for (i, &x) in data.iter().enumerate() {
        let n = T::count(i as u64 + 1);
        let delta = x - m;
        m = m + delta / n;
        m2 = m2 + delta * (x - m);
    }
    Some((m2 / T::count(data.len() as u64)).sqrt())
}
