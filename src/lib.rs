//! # astrostat
//!
//! Statistics and physics formulas for astronomical data analysis: exact
//! Poisson and binomial confidence intervals, sigma-clipping, blackbody
//! radiance and dark matter halo virial quantities. no-std compatible.
//!
//! ## Quick start
//!
//! ```
//! use astrostat::stats::poisson_confidence_interval;
//!
//! // 95% interval on the mean rate given 5 detected photons
//! let ci = poisson_confidence_interval(95.0_f64, 5).unwrap();
//! assert!(ci.lower > 1.6 && ci.upper < 11.7);
//! ```
//!
//! ## Modules
//!
//! - [`optim`] — Log-space bisection ([`optim::bisect_log10`]) for inverting
//!   monotone functions whose root may lie anywhere over many decades.
//!   Fails with [`optim::OptimError::BracketInvalid`] or
//!   [`optim::OptimError::MaxIterations`]; NaN input propagates as NaN.
//!
//! - [`special`] — Log-gamma, regularized incomplete gamma and beta functions,
//!   which give the Poisson and binomial CDFs in closed form.
//!
//! - [`stats`] — [`stats::Poisson`] and [`stats::Binomial`] distributions,
//!   one- and two-sided confidence limits on their parameters, and iterative
//!   outlier rejection ([`stats::remove_outliers`], requires `alloc`).
//!
//! - [`astro`] — CGS constants, Planck blackbody in frequency and wavelength
//!   form, Bryan & Norman virial overdensity and halo virial radius,
//!   circular velocity and temperature.
//!
//! - [`traits`] — [`FloatScalar`], the `f32`/`f64` element bound.
//!
//! ## Logging
//!
//! Diagnostics go through the [`log`] facade: per-iteration `trace` records
//! from the root finder, `debug` records for computed limits and verbose
//! clipping passes. Install any `log` backend to see them.
//!
//! ## Cargo features
//!
//! | Feature   | Default  | Description |
//! |-----------|----------|-------------|
//! | `std`     | yes      | Implies `alloc`. Hardware FPU via system libm |
//! | `alloc`   | via std  | Outlier masks, slice helpers and virial grids |
//! | `libm`    | no       | Pure-Rust software float fallback for `no_std` |
//! | `all`     | no       | All features |

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod astro;
pub mod optim;
pub mod special;
pub mod stats;
pub mod traits;

pub use optim::{bisect_log10, BisectSettings, OptimError, RootResult};
pub use stats::{
    binomial_confidence_interval, binomial_min_max_limits, poisson_confidence_interval,
    poisson_min_max_limits, ConfidenceInterval, StatsError,
};
pub use traits::FloatScalar;
