use core::fmt::{Debug, Display};
use num_traits::{Float, FloatConst};

/// Trait for real floating-point element types.
///
/// Blanket-implemented for `f32` and `f64`. Everything generic in this crate
/// (special functions, distributions, the root finder, interval callers and
/// outlier clipping) is bounded on it.
pub trait FloatScalar: Float + FloatConst + Debug + Display {
    /// Convert an `f64` literal into `Self`.
    ///
    /// Literal conversions into `f32`/`f64` cannot fail, so this hides the
    /// `Option` returned by `NumCast`.
    #[inline]
    fn lit(v: f64) -> Self {
        Self::from(v).unwrap_or_else(Self::nan)
    }

    /// Convert a count into `Self`.
    #[inline]
    fn count(n: u64) -> Self {
        Self::from(n).unwrap_or_else(Self::nan)
    }
}

impl<T: Float + FloatConst + Debug + Display> FloatScalar for T {}
