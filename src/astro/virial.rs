//! Virial radius, circular velocity and temperature of a dark matter halo.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use super::constants::{G_NEWTON, KM, KPC, K_BOLTZMANN, M_PROTON, M_SUN};
use super::{AstroError, Cosmology};
use crate::FloatScalar;

/// Mean molecular weight of fully ionized primordial gas.
pub const MU_IONIZED: f64 = 0.59;
/// Mean molecular weight with hydrogen ionized and helium singly ionized.
pub const MU_HE_SINGLY_IONIZED: f64 = 0.61;
/// Mean molecular weight of neutral primordial gas.
pub const MU_NEUTRAL: f64 = 1.22;

/// Virial overdensity relative to the critical density at redshift `z`.
///
/// Bryan & Norman (1998, ApJ 495, 80) fit to spherical top-hat collapse,
/// good to 1% for `Ω(z)` between 0.1 and 1. With `x = Ω_m(z) − 1` it is
/// `18π² + 82x − 39x²` for a flat universe and `18π² + 60x − 32x²` for an
/// open one without dark energy.
///
/// # Errors
///
/// [`AstroError::NonFlatLambda`] for a curved universe with a cosmological
/// constant, which the fit does not cover.
///
/// # Example
///
/// ```
/// use astrostat::astro::{deltavir, Cosmology};
///
/// // Einstein-de Sitter gives the classic 18π²
/// let eds = Cosmology::flat(70.0_f64, 1.0);
/// let d = deltavir(0.0, &eds).unwrap();
/// assert!((d - 18.0 * core::f64::consts::PI.powi(2)).abs() < 1e-9);
/// ```
pub fn deltavir<T: FloatScalar>(z: T, cosmo: &Cosmology<T>) -> Result<T, AstroError> {
    let x = cosmo.om(z) - T::one();
    let base = T::lit(18.0) * T::PI() * T::PI();
    // Curvature below this is rounding in Ω_m + Ω_Λ
    let flat = cosmo.ok0().abs() < T::lit(1e-12);
    if flat {
        Ok(base + T::lit(82.0) * x - T::lit(39.0) * x * x)
    } else if cosmo.ode0 == T::zero() {
        Ok(base + T::lit(60.0) * x - T::lit(32.0) * x * x)
    } else {
        Err(AstroError::NonFlatLambda)
    }
}

/// Virial quantities of one halo.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VirialValues<T> {
    /// Virial radius, proper kpc.
    pub r: T,
    /// Circular velocity at the virial radius, km/s.
    pub v: T,
    /// Virial temperature, K.
    pub t: T,
}

/// Virial radius, circular velocity and temperature for a halo of total mass
/// `mass` (solar masses, dark matter included) at redshift `z`.
///
/// `mu` is the mean molecular weight of the gas; the temperature scales with
/// it. See [`MU_IONIZED`], [`MU_HE_SINGLY_IONIZED`] and [`MU_NEUTRAL`].
///
/// # Example
///
/// ```
/// use astrostat::astro::{calc_virial_values, Cosmology, MU_IONIZED};
///
/// let vir = calc_virial_values(1e12_f64, 0.0, &Cosmology::wmap5(), MU_IONIZED).unwrap();
/// assert!((vir.r - 261.2).abs() < 0.5);
/// assert!((vir.v - 128.3).abs() < 0.5);
/// ```
pub fn calc_virial_values<T: FloatScalar>(
    mass: T,
    z: T,
    cosmo: &Cosmology<T>,
    mu: f64,
) -> Result<VirialValues<T>, AstroError> {
    let rho_vir = deltavir(z, cosmo)? * cosmo.critical_density(z);
    let m_g = mass * T::lit(M_SUN);

    let r = (T::lit(3.0) * m_g / (T::lit(4.0) * T::PI() * rho_vir)).cbrt();
    let vcirc = (T::lit(G_NEWTON) * m_g / r).sqrt();
    let two = T::one() + T::one();
    let t = T::lit(mu) * T::lit(M_PROTON) * vcirc * vcirc / (two * T::lit(K_BOLTZMANN));

    Ok(VirialValues {
        r: r / T::lit(KPC),
        v: vcirc / T::lit(KM),
        t,
    })
}

/// Virial quantities on a mass × redshift grid, row-major by mass.
#[cfg(feature = "alloc")]
#[derive(Debug, Clone, PartialEq)]
pub struct VirialGrid<T> {
    nmass: usize,
    nz: usize,
    data: Vec<VirialValues<T>>,
}

#[cfg(feature = "alloc")]
impl<T: Copy> VirialGrid<T> {
    /// Number of masses (rows).
    pub fn nmass(&self) -> usize {
        self.nmass
    }

    /// Number of redshifts (columns).
    pub fn nz(&self) -> usize {
        self.nz
    }

    /// Values for mass index `i` and redshift index `j`.
    pub fn get(&self, i: usize, j: usize) -> Option<VirialValues<T>> {
        if i < self.nmass && j < self.nz {
            Some(self.data[i * self.nz + j])
        } else {
            None
        }
    }

    /// All values for mass index `i`, one per redshift.
    pub fn row(&self, i: usize) -> Option<&[VirialValues<T>]> {
        if i < self.nmass {
            Some(&self.data[i * self.nz..(i + 1) * self.nz])
        } else {
            None
        }
    }

    /// Iterate over every cell, row-major.
    pub fn iter(&self) -> impl Iterator<Item = &VirialValues<T>> {
        self.data.iter()
    }
}

/// [`calc_virial_values`] for every pair of `masses` and `redshifts`.
///
/// Cell `(i, j)` holds the halo of `masses[i]` at `redshifts[j]`.
#[cfg(feature = "alloc")]
pub fn virial_grid<T: FloatScalar>(
    masses: &[T],
    redshifts: &[T],
    cosmo: &Cosmology<T>,
    mu: f64,
) -> Result<VirialGrid<T>, AstroError> {
    let mut data = Vec::with_capacity(masses.len() * redshifts.len());
    for &m in masses {
        for &z in redshifts {
            data.push(calc_virial_values(m, z, cosmo, mu)?);
        }
    }
    Ok(VirialGrid {
        nmass: masses.len(),
        nz: redshifts.len(),
        data,
    })
}
