//! The little Friedmann cosmology the virial overdensity needs.

use super::constants::{G_NEWTON, KM, MPC};
use crate::FloatScalar;

/// A matter + dark energy (cosmological constant) background.
///
/// Radiation and neutrinos are neglected; curvature is whatever is left over,
/// `Ω_k = 1 − Ω_m − Ω_Λ`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cosmology<T> {
    /// Hubble constant today, km/s/Mpc.
    pub h0: T,
    /// Matter density parameter today.
    pub om0: T,
    /// Dark energy density parameter today.
    pub ode0: T,
}

impl<T: FloatScalar> Cosmology<T> {
    /// Build a cosmology from `H0` (km/s/Mpc), `Ω_m` and `Ω_Λ`.
    pub fn new(h0: T, om0: T, ode0: T) -> Self {
        Self { h0, om0, ode0 }
    }

    /// Flat: `Ω_Λ = 1 − Ω_m`.
    pub fn flat(h0: T, om0: T) -> Self {
        Self::new(h0, om0, T::one() - om0)
    }

    /// WMAP 5-year (Komatsu et al. 2009), flat.
    pub fn wmap5() -> Self {
        Self::flat(T::lit(70.2), T::lit(0.277))
    }

    /// WMAP 7-year (Komatsu et al. 2011), flat.
    pub fn wmap7() -> Self {
        Self::flat(T::lit(70.4), T::lit(0.272))
    }

    /// WMAP 9-year (Hinshaw et al. 2013), flat.
    pub fn wmap9() -> Self {
        Self::flat(T::lit(69.32), T::lit(0.2865))
    }

    /// Planck 2013 (Paper XVI), flat.
    pub fn planck13() -> Self {
        Self::flat(T::lit(67.77), T::lit(0.307_12))
    }

    /// Planck 2018 (Paper VI), flat.
    pub fn planck18() -> Self {
        Self::flat(T::lit(67.66), T::lit(0.309_66))
    }

    /// Curvature density parameter today.
    pub fn ok0(&self) -> T {
        T::one() - self.om0 - self.ode0
    }

    /// `E(z) = H(z) / H0`.
    pub fn efunc(&self, z: T) -> T {
        let a = T::one() + z;
        (self.om0 * a.powi(3) + self.ok0() * a * a + self.ode0).sqrt()
    }

    /// Hubble parameter at `z` in 1/s.
    pub fn hubble(&self, z: T) -> T {
        self.h0 * T::lit(KM / MPC) * self.efunc(z)
    }

    /// Matter density parameter at `z`.
    pub fn om(&self, z: T) -> T {
        let e = self.efunc(z);
        self.om0 * (T::one() + z).powi(3) / (e * e)
    }

    /// Critical density `3 H(z)² / 8πG` in g/cm³.
    pub fn critical_density(&self, z: T) -> T {
        let h = self.hubble(z);
        T::lit(3.0) * h * h / (T::lit(8.0) * T::PI() * T::lit(G_NEWTON))
    }
}

impl<T: FloatScalar> Default for Cosmology<T> {
    fn default() -> Self {
        Self::wmap5()
    }
}
