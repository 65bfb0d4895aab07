use approx::assert_abs_diff_eq;
use molecule::{InertiaFrame, Molecule};
use test_case::test_case;

use super::*;
use crate::{
    Dvec, Error,
    consts::WAVE,
    extract,
    freq::vibrations,
    project::build_subspace,
    utils::linalg::eigen_symmetric,
    utils::to_wavenumber,
};

#[test_case(water(), 3 ; "water")]
#[test_case(ammonia(), 6 ; "ammonia")]
#[test_case(diatomic(0.5).0, 1 ; "diatomic")]
#[test_case(molecule::molecule![4.0026 0.0 0.0 0.0], 0 ; "atom")]
fn mode_count(mol: Molecule, want: usize) {
    let hess = spring_hessian(&mol, 0.5);
    let modes = extract(&hess, &mol).unwrap();
    assert_eq!(modes.len(), want);
    assert_eq!(modes.rigid.len(), 3 * mol.natoms() - want);
}

#[test]
fn linear_mode_count() {
    let mol = carbon_dioxide();
    let hess = stiffen(&spring_hessian(&mol, 0.5), &mol, 0.01);
    let modes = extract(&hess, &mol).unwrap();
    assert_eq!(modes.len(), 4);
    assert!(modes.imaginary().is_empty());
    // the two bends are degenerate at the shift
    let bend = to_wavenumber(0.01);
    assert_abs_diff_eq!(modes.modes[0].freq, bend, epsilon = 1e-4);
    assert_abs_diff_eq!(modes.modes[1].freq, bend, epsilon = 1e-4);
}

#[test_case(water() ; "water")]
#[test_case(ammonia() ; "ammonia")]
fn matches_unprojected(mol: Molecule) {
    // the spring hessian is invariant to rigid motion, so its nonzero
    // eigenvalues are the vibrations
    let hess = spring_hessian(&mol, 0.5);
    let hmw = crate::project::mass_weight(&hess, &mol.masses());
    let (vals, _) = eigen_symmetric(&hmw).unwrap();
    let want: Vec<f64> = vals
        .iter()
        .filter(|v| v.abs() > 1e-8)
        .map(|&v| to_wavenumber(v))
        .collect();
    let got = extract(&hess, &mol).unwrap().freqs();
    assert_eq!(got.len(), want.len());
    for (g, w) in got.iter().zip(&want) {
        assert_abs_diff_eq!(g, w, epsilon = 1e-6);
    }
}

#[test]
fn diatomic_stretch() {
    let (mol, hess) = diatomic(0.5);
    let modes = extract(&hess, &mol).unwrap();
    assert_eq!(modes.len(), 1);
    let (m1, m2): (f64, f64) = (1.0, 35.45);
    let mu = m1 * m2 / (m1 + m2);
    let mode = &modes.modes[0];
    assert_abs_diff_eq!(mode.freq, (0.5 / mu).sqrt() * WAVE, epsilon = 1e-6);
    assert_abs_diff_eq!(mode.freq, 3685.7843872079443, epsilon = 1e-6);
    assert!(!mode.is_imaginary());

    // only z displacements, in opposite directions
    let d = &mode.displacement;
    assert_abs_diff_eq!(d.norm(), 1.0, epsilon = 1e-12);
    for i in [0, 1, 3, 4] {
        assert_abs_diff_eq!(d[i], 0.0, epsilon = 1e-10);
    }
    assert!(d[2] * d[5] < 0.0);

    // 1/Σ lx² for the normalized mass-weighted eigenvector
    let want = m1 * m2 * (m1 + m2) / (m1 * m1 + m2 * m2);
    assert_abs_diff_eq!(mode.reduced_mass, want, epsilon = 1e-8);
    assert!(mode.force_constant > 0.0);
}

#[test]
fn imaginary_mode() {
    let (mol, hess) = diatomic(-0.5);
    let modes = extract(&hess, &mol).unwrap();
    assert_eq!(modes.len(), 1);
    assert!(modes.modes[0].is_imaginary());
    assert_abs_diff_eq!(
        modes.imaginary()[0],
        -3685.7843872079443,
        epsilon = 1e-6
    );
    // same magnitude as the real stretch
    let (_, hess) = diatomic(0.5);
    let real = extract(&hess, &mol).unwrap();
    assert_abs_diff_eq!(
        modes.modes[0].force_constant,
        real.modes[0].force_constant,
        epsilon = 1e-12
    );
    assert!(modes.modes[0].force_constant > 0.0);
}

#[test]
fn imaginary_first() {
    // a negative curvature along one bond of the spring model
    let mol = water();
    let mut hess = spring_hessian(&mol, 0.5);
    let n = mol.natoms();
    let u = (mol.atoms[0].coord() - mol.atoms[1].coord()).normalize();
    let block = -2.0 * u * u.transpose();
    for a in 0..3 {
        for b in 0..3 {
            hess[(a, b)] += block[(a, b)];
            hess[(3 + a, 3 + b)] += block[(a, b)];
            hess[(a, 3 + b)] -= block[(a, b)];
            hess[(3 + a, b)] -= block[(a, b)];
        }
    }
    let modes = extract(&hess, &mol).unwrap();
    assert_eq!(modes.len(), 3 * n - 6);
    let freqs = modes.freqs();
    assert!(freqs[0] < 0.0);
    assert!(freqs.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn displacement_matrix() {
    let mol = ammonia();
    let modes = extract(&spring_hessian(&mol, 0.5), &mol).unwrap();
    let lx = modes.lx();
    assert_eq!(lx.shape(), (12, 6));
    for col in lx.column_iter() {
        assert_abs_diff_eq!(col.norm(), 1.0, epsilon = 1e-12);
    }
}

#[test]
fn mismatched_hessian() {
    let mol = water();
    let err = extract(&Dmat::zeros(6, 6), &mol).unwrap_err();
    assert!(matches!(err, Error::Shape(_)));
}

#[test]
fn degenerate_geometry() {
    let mol = Molecule::default();
    let err = extract(&Dmat::zeros(0, 0), &mol).unwrap_err();
    assert!(matches!(err, Error::DegenerateGeometry(_)));

    let mol = molecule::molecule![
        0.0 0.0 0.0 0.0
        1.0 0.0 0.0 1.0
    ];
    let err = extract(&Dmat::zeros(6, 6), &mol).unwrap_err();
    assert!(matches!(err, Error::DegenerateGeometry(_)));
}

#[test_case(1, 0 ; "oxygen and hydrogen")]
#[test_case(1, 2 ; "hydrogens")]
fn swapped_atoms(i: usize, j: usize) {
    let mol = water();
    let hess = spring_hessian(&mol, 0.5);
    let mut swapped = mol.clone();
    swapped.atoms.swap(i, j);
    let err = extract(&hess, &swapped).unwrap_err();
    assert!(err.is_projection_inconsistency(), "{err}");
}

#[test]
fn slightly_displaced_geometry() {
    // a hessian from a nearby geometry still separates cleanly
    let mol = water();
    let hess = spring_hessian(&mol, 0.5);
    let mut moved = mol.clone();
    moved.atoms[1].y *= 1.001;
    let modes = extract(&hess, &moved).unwrap();
    assert_eq!(modes.len(), 3);
}

#[test]
fn rigid_eigenvector_retained() {
    // a translation sits on the largest eigenvalue, so it survives the
    // count-based discard
    let (mol, _) = diatomic(0.5);
    let frame = InertiaFrame::analyze(&mol).unwrap();
    let sub = build_subspace(&mol, &frame).unwrap();
    let vals = Dvec::from_vec(vec![0.0, 0.0, 0.0, 0.0, 0.0, 0.5]);
    let mut vecs = Dmat::zeros(6, 6);
    vecs.set_column(5, &sub.vectors[0]);
    let err = vibrations(&vals, &vecs, &sub, &mol.masses()).unwrap_err();
    assert!(err.is_projection_inconsistency(), "{err}");
    assert!(err.to_string().contains("100.0%"), "{err}");
}
