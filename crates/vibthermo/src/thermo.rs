//! Ideal-gas, rigid-rotor, harmonic-oscillator thermochemistry with optional
//! quasi-harmonic corrections

use std::f64::consts::PI;

use molecule::{InertiaFrame, Molecule};
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    conditions::ThermoConditions,
    consts::{
        AMU, AMU_BOHR2, AVOGADRO, BOLTZMANN, GAS_CONSTANT, HARTREE_TO_KJ_MOL,
        LIGHT_SPEED, LITER, PLANCK,
    },
    freq::NormalModeSet,
    qh::{QuasiHarmonic, damping, free_rotor_entropy},
};

/// The thermodynamic state functions of one molecule. Energies are in
/// kJ/mol and entropies in J/(mol·K)
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ThermoResult {
    pub temperature: f64,
    pub pressure: f64,

    /// zero-point vibrational energy
    pub zpe: f64,

    /// electronic energy
    pub e_elec: f64,

    /// thermal translational energy, 3/2 RT
    pub e_trans: f64,

    /// thermal rotational energy, 0, RT, or 3/2 RT
    pub e_rot: f64,

    /// thermal vibrational energy, excluding the zero-point energy
    pub e_vib: f64,

    /// e_elec + zpe + e_trans + e_rot + e_vib + RT
    pub enthalpy: f64,

    pub s_trans: f64,
    pub s_rot: f64,
    pub s_vib: f64,
    pub s_elec: f64,

    /// entropy change from the gas standard state at `pressure` to 1 mol/L.
    /// zero unless requested
    pub s_conc: f64,

    /// the sum of the entropy components
    pub entropy: f64,

    /// enthalpy - T·entropy
    pub gibbs: f64,

    /// the real frequencies in cm⁻¹ after scaling and any quasi-harmonic
    /// frequency correction. these are the frequencies behind every
    /// vibrational term
    pub freqs: Vec<f64>,

    /// the scaled imaginary frequencies as negative numbers. they contribute
    /// nothing to any term
    pub imaginary: Vec<f64>,
}

impl ThermoResult {
    /// the thermal correction to the enthalpy, excluding the electronic and
    /// zero-point energies
    pub fn thermal_enthalpy(&self) -> f64 {
        self.enthalpy - self.e_elec - self.zpe
    }
}

/// compute the thermochemistry of `mol` from its `modes` and inertia `frame`
/// under `cond`
pub fn compute(
    modes: &NormalModeSet,
    frame: &InertiaFrame,
    mol: &Molecule,
    cond: &ThermoConditions,
) -> Result<ThermoResult, Error> {
    cond.validate()?;
    mol.validate()?;
    let temp = cond.temperature;
    let rt = GAS_CONSTANT * temp;

    let (real, imaginary): (Vec<f64>, Vec<f64>) = modes
        .iter()
        .map(|m| m.freq * cond.scale_factor)
        .partition(|&f| f >= 0.0);
    if !imaginary.is_empty() {
        log::warn!(
            "{} imaginary frequencies excluded from the thermochemistry: \
             {imaginary:.1?}",
            imaginary.len()
        );
    }
    if cond.qh.is_active() {
        log::debug!(
            "applying {} correction below {} cm-1",
            cond.qh,
            cond.qh_cutoff
        );
    }
    let freqs = cond.qh.correct(&real, cond.qh_cutoff);

    let zpe = 0.5 * PLANCK * LIGHT_SPEED * freqs.iter().sum::<f64>() * AVOGADRO;

    let mut e_vib = 0.0;
    let mut s_vib = 0.0;
    for &f in &freqs {
        let w = damping(f, cond.qh_cutoff);
        let e = ho_energy(f, temp);
        e_vib += if cond.qh_enthalpy {
            w * e + (1.0 - w) * 0.5 * rt
        } else {
            e
        };
        let s = ho_entropy(f, temp);
        s_vib += match cond.qh {
            QuasiHarmonic::Grimme if f > 0.0 => {
                w * s + (1.0 - w) * free_rotor_entropy(f, temp)
            }
            _ => s,
        };
    }

    let e_trans = 1.5 * rt;
    let e_rot = 0.5 * frame.rotor.rotational_dof() as f64 * rt;
    let e_elec = cond.electronic_energy * HARTREE_TO_KJ_MOL;

    let s_trans =
        translational_entropy(mol.total_mass(), temp, cond.pressure);
    let s_rot = rotational_entropy(frame, cond.symmetry_number, temp);
    let s_elec = GAS_CONSTANT * (cond.multiplicity as f64).ln();
    let s_conc = if cond.concentration_correction {
        concentration_entropy(temp, cond.pressure)
    } else {
        0.0
    };
    let entropy = s_trans + s_rot + s_vib + s_elec + s_conc;

    let enthalpy = e_elec + (zpe + e_trans + e_rot + e_vib + rt) / 1000.0;
    let gibbs = enthalpy - temp * entropy / 1000.0;
    log::debug!(
        "S = {s_trans:.4} (trans) + {s_rot:.4} (rot) + {s_vib:.4} (vib) + \
         {s_elec:.4} (elec) + {s_conc:.4} (conc) J/(mol K)"
    );

    Ok(ThermoResult {
        temperature: temp,
        pressure: cond.pressure,
        zpe: zpe / 1000.0,
        e_elec,
        e_trans: e_trans / 1000.0,
        e_rot: e_rot / 1000.0,
        e_vib: e_vib / 1000.0,
        enthalpy,
        s_trans,
        s_rot,
        s_vib,
        s_elec,
        s_conc,
        entropy,
        gibbs,
        freqs,
        imaginary,
    })
}

/// hcν/kT for `freq` in cm⁻¹
#[inline]
fn reduced_freq(freq: f64, temp: f64) -> f64 {
    PLANCK * LIGHT_SPEED * freq / (BOLTZMANN * temp)
}

/// harmonic-oscillator entropy in J/(mol·K) of a mode with frequency `freq`
/// in cm⁻¹. zero for non-positive frequencies
pub fn ho_entropy(freq: f64, temp: f64) -> f64 {
    if freq <= 0.0 {
        return 0.0;
    }
    let x = reduced_freq(freq, temp);
    GAS_CONSTANT * (x / x.exp_m1() - (-(-x).exp()).ln_1p())
}

/// thermal harmonic-oscillator energy in J/mol of a mode with frequency
/// `freq` in cm⁻¹, excluding its zero-point energy
pub fn ho_energy(freq: f64, temp: f64) -> f64 {
    if freq <= 0.0 {
        return 0.0;
    }
    let x = reduced_freq(freq, temp);
    GAS_CONSTANT * temp * x / x.exp_m1()
}

/// Sackur-Tetrode entropy in J/(mol·K) of an ideal gas of molecules with
/// `mass` in amu
pub fn translational_entropy(mass: f64, temp: f64, pressure: f64) -> f64 {
    let m = mass * AMU;
    let kt = BOLTZMANN * temp;
    let lambda = (2.0 * PI * m * kt / (PLANCK * PLANCK)).powf(1.5);
    GAS_CONSTANT * ((lambda * kt / pressure).ln() + 2.5)
}

/// classical rigid-rotor entropy in J/(mol·K). zero for a single atom. a
/// linear molecule uses the mean of its two nonzero moments
pub fn rotational_entropy(
    frame: &InertiaFrame,
    symmetry_number: usize,
    temp: f64,
) -> f64 {
    let sigma = symmetry_number as f64;
    let kt = BOLTZMANN * temp;
    let h2 = PLANCK * PLANCK;
    let moms = frame.moments * AMU_BOHR2;
    if frame.is_atom() {
        0.0
    } else if frame.is_linear() {
        let i = 0.5 * (moms[1] + moms[2]);
        GAS_CONSTANT * ((8.0 * PI * PI * i * kt / (sigma * h2)).ln() + 1.0)
    } else {
        let prod = moms[0] * moms[1] * moms[2];
        let q = PI.sqrt() / sigma
            * (8.0 * PI * PI * kt / h2).powf(1.5)
            * prod.sqrt();
        GAS_CONSTANT * (q.ln() + 1.5)
    }
}

/// entropy change in J/(mol·K) of moving an ideal gas from `pressure` to a
/// concentration of 1 mol/L, -R ln(V/1 L) with V = RT/P the molar volume
pub fn concentration_entropy(temp: f64, pressure: f64) -> f64 {
    let volume = GAS_CONSTANT * temp / pressure;
    -GAS_CONSTANT * (volume / LITER).ln()
}
