//! The thermodynamic conditions and options for a thermochemistry run

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{Error, qh::QuasiHarmonic};

/// Conditions for [crate::thermo::compute]. Every field has a default, so a
/// partial table in a job file is filled in with the values from
/// [ThermoConditions::default]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThermoConditions {
    /// temperature in K
    pub temperature: f64,

    /// pressure in Pa
    pub pressure: f64,

    /// electronic energy in Eh, added to the enthalpy and free energy
    pub electronic_energy: f64,

    /// spin multiplicity 2S + 1, giving the electronic entropy R ln(mult)
    pub multiplicity: usize,

    /// rotational symmetry number σ
    pub symmetry_number: usize,

    /// empirical factor applied to every frequency before the thermodynamic
    /// sums. the normal modes themselves are not scaled
    pub scale_factor: f64,

    /// cutoff in cm⁻¹ for the quasi-harmonic correction
    pub qh_cutoff: f64,

    /// the quasi-harmonic entropy correction
    pub qh: QuasiHarmonic,

    /// also apply a quasi-harmonic correction to the vibrational energy, with
    /// Grimme's damping between the harmonic energy and ½RT per mode
    pub qh_enthalpy: bool,

    /// correct the entropy from the standard state at `pressure` to 1 mol/L
    pub concentration_correction: bool,
}

impl Default for ThermoConditions {
    fn default() -> Self {
        Self {
            temperature: 298.15,
            pressure: 101_325.0,
            electronic_energy: 0.0,
            multiplicity: 1,
            symmetry_number: 1,
            scale_factor: 1.0,
            qh_cutoff: 100.0,
            qh: QuasiHarmonic::None,
            qh_enthalpy: false,
            concentration_correction: false,
        }
    }
}

macro_rules! float_builders {
    ($($name: ident$(,)*)*) => {
        $(pub fn $name(mut self, x: f64) -> Self {
            self.$name = x;
            self
        })*
    }
}

macro_rules! int_builders {
    ($($name: ident$(,)*)*) => {
        $(pub fn $name(mut self, i: usize) -> Self {
            self.$name = i;
            self
        })*
    }
}

impl ThermoConditions {
    /// the default conditions at `temperature` and `pressure`
    pub fn new(temperature: f64, pressure: f64) -> Self {
        Self {
            temperature,
            pressure,
            ..Self::default()
        }
    }

    float_builders!(
        temperature,
        pressure,
        electronic_energy,
        scale_factor,
        qh_cutoff
    );

    int_builders!(multiplicity, symmetry_number);

    pub fn qh(mut self, qh: QuasiHarmonic) -> Self {
        self.qh = qh;
        self
    }

    pub fn qh_enthalpy(mut self, b: bool) -> Self {
        self.qh_enthalpy = b;
        self
    }

    pub fn concentration_correction(mut self, b: bool) -> Self {
        self.concentration_correction = b;
        self
    }

    /// check that the conditions are physical: positive finite temperature,
    /// pressure, scale factor, and cutoff, and nonzero multiplicity and
    /// symmetry number
    pub fn validate(&self) -> Result<(), Error> {
        let positive = [
            ("temperature", self.temperature),
            ("pressure", self.pressure),
            ("scale_factor", self.scale_factor),
            ("qh_cutoff", self.qh_cutoff),
        ];
        for (name, v) in positive {
            if !v.is_finite() || v <= 0.0 {
                return Err(Error::InvalidConditions(format!(
                    "{name} must be positive and finite, got {v}"
                )));
            }
        }
        if !self.electronic_energy.is_finite() {
            return Err(Error::InvalidConditions(format!(
                "electronic_energy must be finite, got {}",
                self.electronic_energy
            )));
        }
        if self.multiplicity == 0 {
            return Err(Error::InvalidConditions(
                "multiplicity must be at least 1".to_owned(),
            ));
        }
        if self.symmetry_number == 0 {
            return Err(Error::InvalidConditions(
                "symmetry_number must be at least 1".to_owned(),
            ));
        }
        Ok(())
    }
}

impl Display for ThermoConditions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Self {
            temperature,
            pressure,
            electronic_energy,
            multiplicity,
            symmetry_number,
            scale_factor,
            qh_cutoff,
            qh,
            qh_enthalpy,
            concentration_correction,
        } = self;
        writeln!(f, "temperature = {temperature} K")?;
        writeln!(f, "pressure = {pressure} Pa")?;
        writeln!(f, "electronic_energy = {electronic_energy} Eh")?;
        writeln!(f, "multiplicity = {multiplicity}")?;
        writeln!(f, "symmetry_number = {symmetry_number}")?;
        writeln!(f, "scale_factor = {scale_factor}")?;
        writeln!(f, "qh = {qh}")?;
        writeln!(f, "qh_cutoff = {qh_cutoff} cm-1")?;
        writeln!(f, "qh_enthalpy = {qh_enthalpy}")?;
        writeln!(f, "concentration_correction = {concentration_correction}")
    }
}
