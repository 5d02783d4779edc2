//! Regularized incomplete beta function I_x(a, b).

use super::{iteration_cap, lbeta, lentz, SpecialError};
use crate::FloatScalar;

/// Regularized incomplete beta function I_x(a, b) = B(x; a, b) / B(a, b).
///
/// Domain: `a > 0`, `b > 0`, `0 ≤ x ≤ 1`.
///
/// ```
/// use astrostat::special::betainc;
///
/// assert!(betainc(2.0_f64, 3.0, 0.0).unwrap().abs() < 1e-15);
/// assert!((betainc(2.0_f64, 3.0, 1.0).unwrap() - 1.0).abs() < 1e-15);
/// ```
pub fn betainc<T: FloatScalar>(a: T, b: T, x: T) -> Result<T, SpecialError> {
    if a.is_nan() || b.is_nan() || x.is_nan() {
        return Ok(T::nan());
    }
    let one = T::one();
    if a <= T::zero() || b <= T::zero() || x < T::zero() || x > one {
        return Err(SpecialError::DomainError);
    }
    if x == T::zero() || x == one {
        return Ok(x);
    }

    // The fraction converges fast only left of the mean; mirror otherwise.
    let two = one + one;
    if x > (a + one) / (a + b + two) {
        Ok(one - beta_fraction(b, a, one - x)?)
    } else {
        beta_fraction(a, b, x)
    }
}

/// I_x(a, b) = x^a (1−x)^b / (a B(a,b)) / (1 + d1/(1 + d2/(1 + …)))
///
/// with d_{2m} = m(b−m)x / ((a+2m−1)(a+2m)) and
/// d_{2m+1} = −(a+m)(a+b+m)x / ((a+2m)(a+2m+1)).
fn beta_fraction<T: FloatScalar>(a: T, b: T, x: T) -> Result<T, SpecialError> {
    let one = T::one();
    let prefix = (a * x.ln() + b * (one - x).ln() - lbeta(a, b)).exp() / a;

    let cf = lentz(one, iteration_cap(a.max(b)), |j| {
        let m = T::count((j / 2) as u64);
        let d = if j % 2 == 0 {
            m * (b - m) * x / ((a + m + m - one) * (a + m + m))
        } else {
            -(a + m) * (a + b + m) * x / ((a + m + m) * (a + m + m + one))
        };
        (d, one)
    })?;

    Ok(prefix / cf)
}
