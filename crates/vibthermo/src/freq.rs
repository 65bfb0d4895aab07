//! Extraction of harmonic frequencies and cartesian normal modes from a
//! projected hessian

use std::cmp::Ordering;

use molecule::{InertiaFrame, Molecule};
use serde::{Deserialize, Serialize};

use crate::{
    Dmat, Dvec, Error,
    consts::FORCE_CONST,
    project::{
        ProjectionSubspace, build_subspace, check_hessian, check_invariance,
        mass_weight, project_mass_weighted,
    },
    utils::{linalg::eigen_symmetric, sqrt_masses, to_wavenumber},
};

/// squared overlap with the rigid-body subspace above which a retained
/// eigenvector is considered a translation or rotation rather than a
/// vibration
const OVERLAP_TOL: f64 = 0.5;

/// retained eigenvalues within this factor of the largest discarded one are
/// flagged as possibly confused with rigid-body motion
const SOFT_FACTOR: f64 = 10.0;

/// A single vibrational normal mode
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NormalMode {
    /// harmonic frequency in cm⁻¹. negative values encode imaginary
    /// frequencies
    pub freq: f64,

    /// eigenvalue of the projected mass-weighted hessian in Eh/(bohr²·amu)
    pub eigenvalue: f64,

    /// unit-length displacement vector in cartesian coordinates, length 3N
    pub displacement: Dvec,

    /// reduced mass in amu
    pub reduced_mass: f64,

    /// force constant in mdyne/Å from the magnitude of the frequency
    pub force_constant: f64,
}

impl NormalMode {
    #[must_use]
    pub fn is_imaginary(&self) -> bool {
        self.freq < 0.0
    }
}

/// The vibrational normal modes of a molecule, in the ascending eigenvalue
/// order of the solver, so imaginary modes come first
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalModeSet {
    pub modes: Vec<NormalMode>,

    /// the eigenvalues discarded as translations and rotations
    pub rigid: Vec<f64>,
}

impl NormalModeSet {
    pub fn len(&self) -> usize {
        self.modes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NormalMode> {
        self.modes.iter()
    }

    /// the signed harmonic frequencies in cm⁻¹
    pub fn freqs(&self) -> Vec<f64> {
        self.modes.iter().map(|m| m.freq).collect()
    }

    /// the imaginary frequencies, as negative numbers
    pub fn imaginary(&self) -> Vec<f64> {
        self.modes
            .iter()
            .filter(|m| m.is_imaginary())
            .map(|m| m.freq)
            .collect()
    }

    /// the cartesian displacement vectors as the columns of a 3N x nvib
    /// matrix
    pub fn lx(&self) -> Dmat {
        let n3n = self.modes.first().map_or(0, |m| m.displacement.len());
        let mut ret = Dmat::zeros(n3n, self.modes.len());
        for (i, m) in self.modes.iter().enumerate() {
            ret.set_column(i, &m.displacement);
        }
        ret
    }
}

impl<'a> IntoIterator for &'a NormalModeSet {
    type Item = &'a NormalMode;
    type IntoIter = std::slice::Iter<'a, NormalMode>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// compute the normal modes of `mol` from its cartesian `hessian` in
/// Eh/bohr². the molecule's inertia frame is computed along the way; use
/// [extract_with_frame] to supply one
pub fn extract(hessian: &Dmat, mol: &Molecule) -> Result<NormalModeSet, Error> {
    let frame = InertiaFrame::analyze(mol)?;
    extract_with_frame(hessian, mol, &frame)
}

/// like [extract] with a precomputed `frame`
pub fn extract_with_frame(
    hessian: &Dmat,
    mol: &Molecule,
    frame: &InertiaFrame,
) -> Result<NormalModeSet, Error> {
    mol.validate()?;
    let subspace = build_subspace(mol, frame)?;
    check_hessian(hessian, mol, &subspace)?;
    let hmw = mass_weight(hessian, &mol.masses());
    check_invariance(&hmw, &subspace)?;
    let hproj = project_mass_weighted(&hmw, &subspace);
    let (vals, vecs) = eigen_symmetric(&hproj)?;
    vibrations(&vals, &vecs, &subspace, &mol.masses())
}

/// split the eigendecomposition `vals` and `vecs` of the projected
/// mass-weighted hessian into the rigid-body eigenvalues spanned by
/// `subspace` and the vibrational normal modes
pub(crate) fn vibrations(
    vals: &Dvec,
    vecs: &Dmat,
    subspace: &ProjectionSubspace,
    masses: &[f64],
) -> Result<NormalModeSet, Error> {
    let n3n = vals.len();
    let nrigid = subspace.len();
    if nrigid > n3n {
        return Err(Error::ProjectionInconsistency(format!(
            "{nrigid} rigid-body modes requested from {n3n} coordinates"
        )));
    }

    let rigid = rigid_indices(vals, nrigid);
    let mut discarded: Vec<f64> = rigid.iter().map(|&i| vals[i]).collect();
    discarded.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    log::debug!("discarded rigid-body eigenvalues {discarded:?}");
    let soft = SOFT_FACTOR
        * discarded.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));

    let sqm = sqrt_masses(masses);
    let mut modes = Vec::with_capacity(n3n - nrigid);
    for i in (0..n3n).filter(|i| !rigid.contains(i)) {
        let lxm = vecs.column(i).into_owned();
        let overlap = subspace.overlap(&lxm);
        if overlap > OVERLAP_TOL {
            return Err(Error::ProjectionInconsistency(format!(
                "eigenvector {i} (eigenvalue {:.3e}) lies {:.1}% in the \
                 rigid-body subspace",
                vals[i],
                100.0 * overlap
            )));
        }
        if vals[i].abs() <= soft {
            log::warn!(
                "vibrational eigenvalue {:.3e} is within a factor of \
                 {SOFT_FACTOR} of the rigid-body eigenvalues",
                vals[i]
            );
        }
        modes.push(make_mode(vals[i], &lxm, &sqm));
    }

    Ok(NormalModeSet {
        modes,
        rigid: discarded,
    })
}

/// indices of the `nrigid` eigenvalues smallest in magnitude. these are the
/// ones the projection drove toward zero
fn rigid_indices(vals: &Dvec, nrigid: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..vals.len()).collect();
    order.sort_by(|&a, &b| {
        vals[a]
            .abs()
            .partial_cmp(&vals[b].abs())
            .unwrap_or(Ordering::Equal)
    });
    order.truncate(nrigid);
    order
}

/// un-mass-weight the eigenvector `lxm` and normalize it. the norm before
/// normalization gives the reduced mass
fn make_mode(eigenvalue: f64, lxm: &Dvec, sqm: &Dvec) -> NormalMode {
    let lx = lxm.component_div(sqm);
    let norm2 = lx.norm_squared();
    let reduced_mass = 1.0 / norm2;
    let freq = to_wavenumber(eigenvalue);
    NormalMode {
        freq,
        eigenvalue,
        displacement: lx / norm2.sqrt(),
        reduced_mass,
        force_constant: FORCE_CONST * freq * freq * reduced_mass,
    }
}
