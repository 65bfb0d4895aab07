//! Removal of rigid-body translation and rotation from the mass-weighted
//! hessian

use molecule::{InertiaFrame, Molecule};
use serde::{Deserialize, Serialize};

use crate::{
    Dmat, Dvec, Error,
    utils::{linalg::check_symmetric, sqrt_masses, symmetrize},
};

/// squared norm below which a candidate rigid-body vector is treated as
/// vanishing and dropped
const NORM_TOL: f64 = 1e-4;

/// largest allowed ‖H v‖ / ‖H‖ for a rigid-body vector v of the mass-weighted
/// hessian H. a hessian built for a different geometry, atom ordering, or set
/// of masses does not leave the rotations invariant
const INVARIANCE_TOL: f64 = 1e-2;

/// norm below which a vector left over from Gram-Schmidt means it was linearly
/// dependent on the vectors before it
const GS_TOL: f64 = 1e-6;

/// Orthonormal 3N-vectors spanning rigid translation and rotation in
/// mass-weighted cartesian coordinates. translations come first
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSubspace {
    pub vectors: Vec<Dvec>,
}

impl ProjectionSubspace {
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// the projector I - Σ vₖvₖᵀ onto the complement of `self`
    pub fn projector(&self, n3n: usize) -> Dmat {
        let mut ret = Dmat::identity(n3n, n3n);
        for v in &self.vectors {
            ret -= v * v.transpose();
        }
        ret
    }

    /// the squared length of the component of `v` lying in `self`
    pub fn overlap(&self, v: &Dvec) -> f64 {
        self.vectors.iter().map(|u| u.dot(v).powi(2)).sum()
    }
}

/// build the rigid-body subspace for `mol`. Translations along x, y, and z
/// have √mᵢ at every atom. Rotations about each principal axis `a` the
/// molecule can rotate about have the 3-block √mᵢ (a × rᵢ), where rᵢ is the
/// position of atom i relative to the center of mass
pub fn build_subspace(
    mol: &Molecule,
    frame: &InertiaFrame,
) -> Result<ProjectionSubspace, Error> {
    let natom = mol.natoms();
    let n3n = 3 * natom;
    let sqm = sqrt_masses(&mol.masses());

    let mut candidates = Vec::with_capacity(6);
    for axis in 0..3 {
        let mut v = Dvec::zeros(n3n);
        for i in 0..natom {
            v[3 * i + axis] = sqm[3 * i];
        }
        candidates.push(v);
    }
    for axis in frame.rotation_axes() {
        let mut v = Dvec::zeros(n3n);
        for (i, atom) in mol.atoms.iter().enumerate() {
            let r = atom.coord() - frame.com;
            let block = sqm[3 * i] * axis.cross(&r);
            v.fixed_rows_mut::<3>(3 * i).copy_from(&block);
        }
        candidates.push(v);
    }

    let before = candidates.len();
    candidates.retain(|v| v.norm_squared() > NORM_TOL);
    if candidates.len() != frame.rigid_modes() {
        return Err(Error::ProjectionInconsistency(format!(
            "expected {} rigid-body vectors for {}, but only {} of {before} \
             candidates are non-vanishing",
            frame.rigid_modes(),
            frame.rotor,
            candidates.len(),
        )));
    }

    let vectors = gram_schmidt(candidates)?;
    log::debug!("built rigid-body subspace of dimension {}", vectors.len());
    Ok(ProjectionSubspace { vectors })
}

/// orthonormalize `vecs` in order with modified Gram-Schmidt
fn gram_schmidt(vecs: Vec<Dvec>) -> Result<Vec<Dvec>, Error> {
    let mut ret: Vec<Dvec> = Vec::with_capacity(vecs.len());
    for (k, mut v) in vecs.into_iter().enumerate() {
        for u in &ret {
            let d = u.dot(&v);
            v.axpy(-d, u, 1.0);
        }
        let norm = v.norm();
        if norm < GS_TOL {
            return Err(Error::ProjectionInconsistency(format!(
                "rigid-body vector {k} is linearly dependent on the others"
            )));
        }
        ret.push(v / norm);
    }
    Ok(ret)
}

/// form the mass-weighted hessian D H D, where D is the diagonal matrix of
/// 1/√mᵢ repeated for each cartesian direction
pub fn mass_weight(hessian: &Dmat, masses: &[f64]) -> Dmat {
    let sqm = sqrt_masses(masses);
    let mut fx = hessian.clone();
    let n3n = sqm.len();
    for i in 0..n3n {
        for j in 0..n3n {
            fx[(i, j)] /= sqm[i] * sqm[j];
        }
    }
    fx
}

/// project `subspace` out of the mass-weighted hessian `hmw`:
/// (I - Σ vvᵀ) H (I - Σ vvᵀ)
pub fn project_mass_weighted(
    hmw: &Dmat,
    subspace: &ProjectionSubspace,
) -> Dmat {
    let (n3n, _) = hmw.shape();
    let p = subspace.projector(n3n);
    symmetrize(&(&p * hmw * &p))
}

/// check that `hessian` and `subspace` both have the 3N dimensions of `mol`
/// and that `hessian` is finite and symmetric
pub fn check_hessian(
    hessian: &Dmat,
    mol: &Molecule,
    subspace: &ProjectionSubspace,
) -> Result<(), Error> {
    let n3n = 3 * mol.natoms();
    let (rows, cols) = hessian.shape();
    if (rows, cols) != (n3n, n3n) {
        return Err(Error::Shape(format!(
            "hessian is {rows}x{cols}, but {} atoms require {n3n}x{n3n}",
            mol.natoms()
        )));
    }
    check_symmetric(hessian)?;
    if subspace.vectors.iter().any(|v| v.len() != n3n) {
        return Err(Error::Shape(format!(
            "projection subspace does not match {} atoms",
            mol.natoms()
        )));
    }
    Ok(())
}

/// check that the mass-weighted hessian `hmw` leaves every vector of
/// `subspace` invariant to within [INVARIANCE_TOL], relative to its Frobenius
/// norm. this holds at any stationary point of the geometry the hessian was
/// computed at. a zero hessian passes trivially
pub fn check_invariance(
    hmw: &Dmat,
    subspace: &ProjectionSubspace,
) -> Result<(), Error> {
    let norm = hmw.norm();
    if norm == 0.0 {
        return Ok(());
    }
    for (k, v) in subspace.vectors.iter().enumerate() {
        let residual = (hmw * v).norm() / norm;
        if residual > INVARIANCE_TOL {
            return Err(Error::ProjectionInconsistency(format!(
                "rigid-body vector {k} has relative residual {residual:.3e} \
                 under the hessian, tolerance {INVARIANCE_TOL:.0e}. check \
                 that the geometry and hessian share the same atom order"
            )));
        }
    }
    Ok(())
}

/// mass-weight the cartesian `hessian` of `mol` and project the rigid-body
/// motions in `subspace` out of it
pub fn project(
    hessian: &Dmat,
    mol: &Molecule,
    subspace: &ProjectionSubspace,
) -> Result<Dmat, Error> {
    check_hessian(hessian, mol, subspace)?;
    let hmw = mass_weight(hessian, &mol.masses());
    Ok(project_mass_weighted(&hmw, subspace))
}
