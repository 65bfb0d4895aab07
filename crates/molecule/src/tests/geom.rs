//! tests for geometrical operations like the center of mass, the moment of
//! inertia, and rotor classification

use std::str::FromStr;

use crate::*;
use approx::assert_abs_diff_eq;
use test_case::test_case;

fn water() -> Molecule {
    Molecule::from_str(
        "
    15.99491 0.0000000000  0.0000000000 -0.2347746000
     1.00783 0.0000000000  1.4313901416  0.9860410955
     1.00783 0.0000000000 -1.4313901416  0.9860410955
",
    )
    .unwrap()
}

#[test]
fn com() {
    let mol = molecule![
        1.0 0.0 0.0 0.0
        3.0 0.0 0.0 4.0
    ];
    assert_abs_diff_eq!(mol.com(), Vec3::new(0.0, 0.0, 3.0), epsilon = 1e-12);
}

#[test]
fn inertia_tensor_is_symmetric() {
    let mol = molecule![
        12.0  0.1  0.3 -0.2
         1.0  1.2  0.4  0.9
         1.0 -0.8  1.1  0.3
        16.0  0.2 -1.3  0.5
    ];
    let moi = mol.centered().moi();
    assert_abs_diff_eq!(moi, moi.transpose(), epsilon = 1e-12);
}

#[test]
fn planar_moments() {
    // for a planar molecule the largest moment is the sum of the other two
    let frame = InertiaFrame::analyze(&water()).unwrap();
    let m = frame.moments;
    assert!(m[0] <= m[1] && m[1] <= m[2]);
    assert_abs_diff_eq!(m[2], m[0] + m[1], epsilon = 1e-10);
    assert_eq!(frame.rotor, Rotor::AsymmTop);
    assert_eq!(frame.rigid_modes(), 6);
}

#[test]
fn principal_axes_diagonalize_tensor() {
    let frame = InertiaFrame::analyze(&water()).unwrap();
    let got = frame.axes.transpose() * frame.tensor * frame.axes;
    let want = Mat3::from_diagonal(&frame.moments);
    assert_abs_diff_eq!(got, want, epsilon = 1e-10);
    assert_abs_diff_eq!(
        frame.axes.transpose() * frame.axes,
        Mat3::identity(),
        epsilon = 1e-12
    );
}

#[test]
fn diatomic_moments() {
    // I = μr² for a diatomic
    let mol = molecule![
        1.0 0.0 0.0 0.0
        35.45 0.0 0.0 2.4
    ];
    let frame = InertiaFrame::analyze(&mol).unwrap();
    let mu = 35.45 / 36.45;
    assert_abs_diff_eq!(frame.moments[0], 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(frame.moments[1], mu * 2.4 * 2.4, epsilon = 1e-10);
    assert_abs_diff_eq!(frame.moments[2], mu * 2.4 * 2.4, epsilon = 1e-10);
    assert_eq!(frame.rotation_axes().len(), 2);
    assert_eq!(frame.rigid_modes(), 5);
}

#[test_case(molecule![4.0 1.0 2.0 3.0], Rotor::Atom ; "atom")]
#[test_case(molecule![
    1.0 0.0 0.0 0.0
    19.0 0.0 0.0 1.7
], Rotor::Diatomic ; "diatomic")]
#[test_case(molecule![
    16.0 0.0 0.0 -2.2
    12.0 0.0 0.0  0.0
    16.0 0.0 0.0  2.2
], Rotor::Linear ; "linear")]
#[test_case(molecule![
    12.0  0.0  0.0  0.0
     1.0  1.0  1.0  1.0
     1.0  1.0 -1.0 -1.0
     1.0 -1.0  1.0 -1.0
     1.0 -1.0 -1.0  1.0
], Rotor::SphericalTop ; "spherical")]
#[test_case(molecule![
    1.0  1.0                 0.0 0.0
    1.0 -0.5  0.866_025_403_784_438_6 0.0
    1.0 -0.5 -0.866_025_403_784_438_6 0.0
], Rotor::OblateSymmTop ; "oblate")]
#[test_case(molecule![
    10.0  0.0                 0.0  3.0
     1.0  1.0                 0.0  0.0
     1.0 -0.5  0.866_025_403_784_438_6  0.0
     1.0 -0.5 -0.866_025_403_784_438_6  0.0
    10.0  0.0                 0.0 -3.0
], Rotor::ProlateSymmTop ; "prolate")]
#[test_case(water(), Rotor::AsymmTop ; "asymmetric")]
fn rotor_type(mol: Molecule, want: Rotor) {
    let frame = InertiaFrame::analyze(&mol).unwrap();
    assert_eq!(frame.rotor, want);
}

#[test]
fn empty_molecule() {
    let got = InertiaFrame::analyze(&Molecule::default());
    assert_eq!(got, Err(MoleculeError::Empty));
}

#[test]
fn bad_mass() {
    let got = Molecule::from_slices(&[1.0, 0.0], &[0.0; 6]);
    assert_eq!(got, Err(MoleculeError::BadMass { index: 1, mass: 0.0 }));
    let got = Molecule::from_slices(&[1.0, -2.0], &[0.0; 6]);
    assert!(matches!(got, Err(MoleculeError::BadMass { index: 1, .. })));
}

#[test]
fn length_mismatch() {
    let got = Molecule::from_slices(&[1.0, 2.0], &[0.0; 5]);
    assert_eq!(got, Err(MoleculeError::Length { masses: 2, coords: 5 }));
}

#[test]
fn parse_bad_line() {
    let got = Molecule::from_str("1.0 0.0 0.0\n");
    assert!(matches!(got, Err(MoleculeError::Parse(_))));
}

#[test]
fn centered_is_order_independent() {
    let a = water().centered();
    let mut rev = water();
    rev.atoms.reverse();
    assert_eq!(a, rev.centered());
    assert_abs_diff_eq!(a.com(), Vec3::zeros(), epsilon = 1e-12);
}
