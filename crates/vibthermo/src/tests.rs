use std::str::FromStr;

use molecule::{InertiaFrame, Molecule};

use crate::{
    Dmat,
    project::{build_subspace, mass_weight},
    utils::sqrt_masses,
};

mod batch;
mod freq;

pub(crate) fn water() -> Molecule {
    Molecule::from_str(
        "
    15.99491 0.0000  0.0000 -0.1243
     1.00783 0.0000  1.4314  0.9860
     1.00783 0.0000 -1.4314  0.9860
",
    )
    .unwrap()
}

pub(crate) fn ammonia() -> Molecule {
    Molecule::from_str(
        "
    14.00307  0.0000  0.0000  0.1273
     1.00783  0.0000  1.7720 -0.5898
     1.00783  1.5346 -0.8860 -0.5898
     1.00783 -1.5346 -0.8860 -0.5898
",
    )
    .unwrap()
}

pub(crate) fn carbon_dioxide() -> Molecule {
    Molecule::from_str(
        "
    15.99491 0.0 0.0 -2.1944
    12.00000 0.0 0.0  0.0000
    15.99491 0.0 0.0  2.1944
",
    )
    .unwrap()
}

/// the diatomic with masses 1.0 and 35.45 along z with a stretching force
/// constant of `k` Eh/bohr²
pub(crate) fn diatomic(k: f64) -> (Molecule, Dmat) {
    let mol = Molecule::from_str("1.0 0.0 0.0 0.0\n35.45 0.0 0.0 2.4").unwrap();
    let mut hess = Dmat::zeros(6, 6);
    hess[(2, 2)] = k;
    hess[(5, 5)] = k;
    hess[(2, 5)] = -k;
    hess[(5, 2)] = -k;
    (mol, hess)
}

/// a hessian from a spring of constant `k` between every pair of atoms in
/// `mol`, which leaves translations and rotations at zero energy
pub(crate) fn spring_hessian(mol: &Molecule, k: f64) -> Dmat {
    let n = mol.natoms();
    let mut ret = Dmat::zeros(3 * n, 3 * n);
    for i in 0..n {
        for j in i + 1..n {
            let u = (mol.atoms[i].coord() - mol.atoms[j].coord()).normalize();
            let block = k * u * u.transpose();
            for a in 0..3 {
                for b in 0..3 {
                    ret[(3 * i + a, 3 * i + b)] += block[(a, b)];
                    ret[(3 * j + a, 3 * j + b)] += block[(a, b)];
                    ret[(3 * i + a, 3 * j + b)] -= block[(a, b)];
                    ret[(3 * j + a, 3 * i + b)] -= block[(a, b)];
                }
            }
        }
    }
    ret
}

/// shift every vibrational eigenvalue of the mass-weighted `hessian` by `c`,
/// leaving the rigid-body eigenvalues at zero. this lifts the zero-energy
/// bends of a linear spring model
pub(crate) fn stiffen(hessian: &Dmat, mol: &Molecule, c: f64) -> Dmat {
    let frame = InertiaFrame::analyze(mol).unwrap();
    let sub = build_subspace(mol, &frame).unwrap();
    let n3n = 3 * mol.natoms();
    let p = sub.projector(n3n);
    let hmw = mass_weight(hessian, &mol.masses());
    let shifted = &p * (hmw + c * Dmat::identity(n3n, n3n)) * &p;
    let sqm = Dmat::from_diagonal(&sqrt_masses(&mol.masses()));
    let ret = &sqm * shifted * &sqm;
    0.5 * (&ret + ret.transpose())
}
