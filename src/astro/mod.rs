//! Astrophysical formulas in CGS units.
//!
//! - [`blackbody_nu`], [`blackbody_lam`] — Planck spectral radiance
//! - [`deltavir`] — Bryan & Norman virial overdensity
//! - [`calc_virial_values`], [`virial_grid`] — halo virial radius, velocity
//!   and temperature
//!
//! Intermediate values span ~10⁴⁵ to ~10⁻⁴⁷, so everything here should be
//! evaluated in `f64`.
//!
//! # Example
//!
//! ```
//! use astrostat::astro::{calc_virial_values, Cosmology, MU_IONIZED};
//!
//! let cosmo = Cosmology::<f64>::default();
//! let now = calc_virial_values(1e12, 0.0, &cosmo, MU_IONIZED).unwrap();
//! let then = calc_virial_values(1e12, 2.0, &cosmo, MU_IONIZED).unwrap();
//! // halos of fixed mass are smaller and hotter at high redshift
//! assert!(then.r < now.r && then.t > now.t);
//! ```

mod blackbody;
pub mod constants;
mod cosmology;
mod virial;


pub use blackbody::{blackbody_lam, blackbody_nu};
#[cfg(feature = "alloc")]
pub use blackbody::{blackbody_lam_slice, blackbody_nu_slice};
pub use cosmology::Cosmology;
pub use virial::{
    calc_virial_values, deltavir, VirialValues, MU_HE_SINGLY_IONIZED, MU_IONIZED, MU_NEUTRAL,
};
#[cfg(feature = "alloc")]
pub use virial::{virial_grid, VirialGrid};

/// Errors from the astrophysical formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AstroError {
    /// The virial overdensity fit needs a flat universe or one without dark energy.
    #[error("can't compute deltavir for a non-flat cosmology with a cosmological constant")]
    NonFlatLambda,
}
