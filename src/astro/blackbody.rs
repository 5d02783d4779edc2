//! Planck blackbody spectral radiance.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use super::constants::{ANGSTROM, C_LIGHT, H_PLANCK, K_BOLTZMANN};
use crate::FloatScalar;

/// Blackbody intensity as a function of frequency.
///
/// `B_ν = 2 h ν³ / (c² (exp(hν / kT) − 1))` in erg/s/cm²/Hz/sr, for `nu` in
/// Hz and `t` in Kelvin. Use `f64`: the intermediate `ν³` overflows `f32`
/// above a few THz.
///
/// # Example
///
/// ```
/// use astrostat::astro::blackbody_nu;
///
/// // hotter is brighter at every frequency
/// assert!(blackbody_nu(1e15_f64, 10_000.0) > blackbody_nu(1e15, 5_000.0));
/// ```
pub fn blackbody_nu<T: FloatScalar>(nu: T, t: T) -> T {
    let h = T::lit(H_PLANCK);
    let c = T::lit(C_LIGHT);
    let k = T::lit(K_BOLTZMANN);
    let two = T::one() + T::one();
    two * h * nu.powi(3) / (c * c * (h * nu / (k * t)).exp_m1())
}

/// Blackbody intensity as a function of wavelength.
///
/// `B_λ = 2 h c² / (λ⁵ (exp(hc / λkT) − 1))` for `lam` in Angstroms and `t`
/// in Kelvin, returned in erg/s/cm²/Å/sr.
///
/// # Example
///
/// ```
/// use astrostat::astro::blackbody_lam;
///
/// // The Sun peaks near 5000 Å
/// let t = 5772.0_f64;
/// assert!(blackbody_lam(5000.0, t) > blackbody_lam(3000.0, t));
/// assert!(blackbody_lam(5000.0, t) > blackbody_lam(9000.0, t));
/// ```
pub fn blackbody_lam<T: FloatScalar>(lam: T, t: T) -> T {
    let h = T::lit(H_PLANCK);
    let c = T::lit(C_LIGHT);
    let k = T::lit(K_BOLTZMANN);
    let angstrom = T::lit(ANGSTROM);
    let two = T::one() + T::one();

    let lam_cm = lam * angstrom;
    // erg/s/cm²/cm/sr
    let per_cm = two * h * c * c / (lam_cm.powi(5) * (h * c / (lam_cm * k * t)).exp_m1());
    per_cm * angstrom
}

/// [`blackbody_nu`] over a slice of frequencies.
#[cfg(feature = "alloc")]
pub fn blackbody_nu_slice<T: FloatScalar>(nu: &[T], t: T) -> Vec<T> {
    nu.iter().map(|&n| blackbody_nu(n, t)).collect()
}

/// [`blackbody_lam`] over a slice of wavelengths.
#[cfg(feature = "alloc")]
pub fn blackbody_lam_slice<T: FloatScalar>(lam: &[T], t: T) -> Vec<T> {
    lam.iter().map(|&l| blackbody_lam(l, t)).collect()
}
