//! Principal-axis analysis of a [Molecule]

use std::cmp::Ordering;

use nalgebra::SymmetricEigen;
use serde::{Deserialize, Serialize};

use crate::{Mat3, Molecule, MoleculeError, Rotor, Vec3};

/// The rigid-body frame of a molecule. Moments are in amu·bohr², sorted in
/// ascending order, and the columns of `axes` are the matching unit principal
/// axes
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InertiaFrame {
    /// center of mass in the input frame
    pub com: Vec3,

    /// inertia tensor about `com`
    pub tensor: Mat3,

    pub moments: Vec3,

    pub axes: Mat3,

    pub rotor: Rotor,
}

impl InertiaFrame {
    /// compute the center of mass, inertia tensor, and principal moments and
    /// axes of `mol`, and classify its rotor type
    pub fn analyze(mol: &Molecule) -> Result<Self, MoleculeError> {
        mol.validate()?;
        let com = mol.com();
        let tensor = mol.centered().moi();
        let (moments, axes) = symm_eigen_decomp3(tensor);
        let rotor = mol.rotor_type(&moments);
        log::debug!(
            "principal moments {:.6} {:.6} {:.6}; molecule is {rotor}",
            moments[0],
            moments[1],
            moments[2]
        );
        Ok(Self {
            com,
            tensor,
            moments,
            axes,
            rotor,
        })
    }

    #[must_use]
    pub fn is_linear(&self) -> bool {
        self.rotor.is_linear()
    }

    #[must_use]
    pub fn is_atom(&self) -> bool {
        self.rotor.is_atom()
    }

    /// the number of rigid-body degrees of freedom: three translations plus
    /// the rotations allowed by the rotor type
    pub fn rigid_modes(&self) -> usize {
        3 + self.rotor.rotational_dof()
    }

    /// the principal axes about which the molecule can rotate. a linear
    /// molecule cannot rotate about its own axis, which carries the smallest
    /// moment
    pub fn rotation_axes(&self) -> Vec<Vec3> {
        let skip = 3 - self.rotor.rotational_dof();
        (skip..3).map(|i| self.axes.column(i).into_owned()).collect()
    }
}

/// eigendecomposition of the symmetric 3x3 matrix `mat` with the eigenvalues
/// in ascending order and the eigenvectors in the matching columns
pub fn symm_eigen_decomp3(mat: Mat3) -> (Vec3, Mat3) {
    let SymmetricEigen {
        eigenvectors: vecs,
        eigenvalues: vals,
    } = SymmetricEigen::new(mat);
    let mut pairs: Vec<_> = vals.iter().enumerate().collect();
    pairs.sort_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    let mut ret = Mat3::zeros();
    for (i, (j, _)) in pairs.iter().enumerate() {
        ret.set_column(i, &vecs.column(*j));
    }
    (Vec3::new(*pairs[0].1, *pairs[1].1, *pairs[2].1), ret)
}
