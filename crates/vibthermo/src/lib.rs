//! Harmonic vibrational analysis and ideal-gas thermochemistry from a
//! cartesian hessian

use molecule::{InertiaFrame, Molecule};
use serde::{Deserialize, Serialize};

pub use conditions::ThermoConditions;
pub use error::Error;
pub use freq::{NormalMode, NormalModeSet, extract, extract_with_frame};
pub use qh::{QuasiHarmonic, correct};
pub use thermo::{ThermoResult, compute};

pub mod batch;
pub mod conditions;
pub mod consts;
pub mod error;
pub mod freq;
pub mod load;
pub mod output;
pub mod project;
pub mod qh;
pub mod thermo;
pub mod utils;

#[cfg(test)]
mod tests;

pub type Dmat = nalgebra::DMatrix<f64>;
pub type Dvec = nalgebra::DVector<f64>;

/// the full output for one molecule
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub frame: InertiaFrame,
    pub modes: NormalModeSet,
    pub thermo: ThermoResult,
}

impl Report {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// run the whole pipeline on `mol` with cartesian `hessian` in Eh/bohr²:
/// analyze the geometry, extract the normal modes, and compute the
/// thermochemistry under `cond`
pub fn run(
    hessian: &Dmat,
    mol: &Molecule,
    cond: &ThermoConditions,
) -> Result<Report, Error> {
    cond.validate()?;
    let frame = InertiaFrame::analyze(mol)?;
    let modes = extract_with_frame(hessian, mol, &frame)?;
    let thermo = compute(&modes, &frame, mol, cond)?;
    Ok(Report {
        frame,
        modes,
        thermo,
    })
}
