//! Quasi-harmonic treatments of low-frequency modes, where the harmonic
//! oscillator entropy diverges as the frequency goes to zero

use std::f64::consts::PI;
use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::consts::{B_AV, BOLTZMANN, GAS_CONSTANT, LIGHT_SPEED, PLANCK};

/// The quasi-harmonic correction to apply. `Truhlar` raises every real
/// frequency below the cutoff to the cutoff, changing the frequency used by
/// every later formula. `Grimme` leaves the frequencies alone and instead
/// blends each mode's harmonic entropy with a free-rotor entropy
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize,
)]
pub enum QuasiHarmonic {
    #[default]
    #[serde(alias = "none")]
    None,
    #[serde(alias = "truhlar")]
    Truhlar,
    #[serde(alias = "grimme")]
    Grimme,
}

impl QuasiHarmonic {
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// apply `self` to `freqs`. the output has the same length and order.
    /// imaginary (negative) frequencies are passed through unchanged
    pub fn correct(&self, freqs: &[f64], cutoff: f64) -> Vec<f64> {
        match self {
            Self::Truhlar => {
                freqs.iter().map(|&f| truhlar(f, cutoff)).collect()
            }
            Self::None | Self::Grimme => freqs.to_vec(),
        }
    }
}

impl Display for QuasiHarmonic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                QuasiHarmonic::None => "none",
                QuasiHarmonic::Truhlar => "truhlar",
                QuasiHarmonic::Grimme => "grimme",
            }
        )
    }
}

/// free-function form of [QuasiHarmonic::correct]
pub fn correct(freqs: &[f64], scheme: QuasiHarmonic, cutoff: f64) -> Vec<f64> {
    scheme.correct(freqs, cutoff)
}

/// max(ν, cutoff) for real frequencies. imaginary ones are left alone
#[inline]
pub fn truhlar(freq: f64, cutoff: f64) -> f64 {
    if freq >= 0.0 { freq.max(cutoff) } else { freq }
}

/// Grimme's damping weight w(ν) = 1 / (1 + (cutoff/ν)⁴). w(cutoff) = 0.5, w
/// goes to 1 for ν ≫ cutoff and to 0 as ν goes to 0
#[inline]
pub fn damping(freq: f64, cutoff: f64) -> f64 {
    if freq <= 0.0 {
        return 0.0;
    }
    1.0 / (1.0 + (cutoff / freq).powi(4))
}

/// entropy in J/(mol·K) of a free rotor whose moment of inertia is that of a
/// harmonic oscillator with frequency `freq` in cm⁻¹, μ = h / (8π²νc),
/// limited by [B_AV]
pub fn free_rotor_entropy(freq: f64, temp: f64) -> f64 {
    let mu = PLANCK / (8.0 * PI * PI * freq * LIGHT_SPEED);
    let mu_prime = mu * B_AV / (mu + B_AV);
    let factor =
        8.0 * PI.powi(3) * mu_prime * BOLTZMANN * temp / PLANCK.powi(2);
    GAS_CONSTANT * (0.5 + factor.sqrt().ln())
}
