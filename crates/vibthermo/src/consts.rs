//! Physical constants (CODATA 2018) and the unit conversions built from them.
//! SI units unless noted otherwise.

use std::f64::consts::PI;

/// planck's constant in J·s
pub const PLANCK: f64 = 6.626_070_15e-34;

/// boltzmann's constant in J/K
pub const BOLTZMANN: f64 = 1.380_649e-23;

/// avogadro's number
pub const AVOGADRO: f64 = 6.022_140_76e23;

/// molar gas constant in J/(mol·K)
pub const GAS_CONSTANT: f64 = BOLTZMANN * AVOGADRO;

/// speed of light in cm/s, so that h·c·ν is in J for ν in cm⁻¹
pub const LIGHT_SPEED: f64 = 2.997_924_58e10;

/// atomic mass unit in kg
pub const AMU: f64 = 1.660_539_066_60e-27;

/// bohr radius in m
pub const BOHR: f64 = 0.529_177_210_903e-10;

/// hartree in J
pub const HARTREE: f64 = 4.359_744_722_2071e-18;

pub const HARTREE_TO_KJ_MOL: f64 = HARTREE * AVOGADRO / 1000.0;

/// amu·bohr² in kg·m²
pub const AMU_BOHR2: f64 = AMU * BOHR * BOHR;

/// converts the square root of a mass-weighted hessian eigenvalue in
/// Eh/(bohr²·amu) to cm⁻¹. pre-computed value of
/// `sqrt(HARTREE / (BOHR * BOHR * AMU)) / (2π · LIGHT_SPEED)`
pub const WAVE: f64 = 5_140.487_143_715_828;

/// 4π²c²·amu in mdyne/Å, giving a force constant from a frequency in cm⁻¹ and
/// a reduced mass in amu
pub const FORCE_CONST: f64 =
    4.0 * PI * PI * LIGHT_SPEED * LIGHT_SPEED * AMU / 100.0;

/// average moment of inertia in kg·m² limiting the free-rotor moment in
/// Grimme's quasi-RRHO treatment
pub const B_AV: f64 = 1.0e-44;

/// one liter in m³
pub const LITER: f64 = 1.0e-3;
