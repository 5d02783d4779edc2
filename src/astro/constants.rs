//! Physical constants in CGS units (CODATA 2018, IAU 2015).

/// Planck constant (erg s)
pub const H_PLANCK: f64 = 6.626_070_15e-27;

/// Speed of light in vacuum (cm/s)
pub const C_LIGHT: f64 = 2.997_924_58e10;

/// Boltzmann constant (erg/K)
pub const K_BOLTZMANN: f64 = 1.380_649e-16;

/// Newtonian constant of gravitation (cm^3 g^-1 s^-2)
pub const G_NEWTON: f64 = 6.674_30e-8;

/// Proton mass (g)
pub const M_PROTON: f64 = 1.672_621_923_69e-24;

/// Solar mass (g)
pub const M_SUN: f64 = 1.988_409_870_698_051e33;

/// Kiloparsec (cm)
pub const KPC: f64 = 3.085_677_581_491_367e21;

/// Megaparsec (cm)
pub const MPC: f64 = 3.085_677_581_491_367e24;

/// Kilometre (cm)
pub const KM: f64 = 1e5;

/// Angstrom (cm)
pub const ANGSTROM: f64 = 1e-8;
