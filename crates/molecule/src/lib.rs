//! Point-mass molecules and their rigid-body properties: center of mass,
//! inertia tensor, principal moments and axes, and rotor classification.

pub use atom::*;
pub use error::MoleculeError;
pub use inertia::*;
pub use rotor::Rotor;
use serde::{Deserialize, Serialize};


pub mod atom;
mod error;
pub mod inertia;
mod mol_traits;
pub mod rotor;

use nalgebra as na;

pub type Vec3 = na::Vector3<f64>;
pub type Mat3 = na::Matrix3<f64>;

/// Ångstrom per bohr, CODATA 2018
pub const ANGBOHR: f64 = 0.529177210903;

/// the largest principal moment, in amu·bohr², below which a molecule is
/// treated as a single atom
pub const ATOM_MOMENT_TOL: f64 = 1e-6;

/// ratio of the smallest to the largest principal moment below which a
/// molecule is linear
pub const LINEAR_RATIO_TOL: f64 = 1e-4;

/// relative tolerance for calling two principal moments equal when
/// classifying symmetric and spherical tops
pub const TOP_RATIO_TOL: f64 = 1e-4;

/// build a [Molecule] from whitespace-separated `mass x y z` groups
#[macro_export]
macro_rules! molecule {
    ($($mass:literal $x:literal $y:literal $z:literal)+) => {
	$crate::Molecule::new(vec![
	    $($crate::Atom::new($mass, $x, $y, $z),)*
	    ])
    };
}

#[derive(Clone, Default, Serialize, Deserialize)]
pub struct Molecule {
    pub atoms: Vec<Atom>,
}

fn close(a: f64, b: f64, eps: f64) -> bool {
    f64::abs(a - b) < eps
}

impl Molecule {
    pub fn new(atoms: Vec<Atom>) -> Self {
        Self { atoms }
    }

    /// build a `Molecule` from a slice of masses and a flat slice of
    /// coordinates, three per atom
    pub fn from_slices(
        masses: &[f64],
        coords: &[f64],
    ) -> Result<Self, MoleculeError> {
        if 3 * masses.len() != coords.len() {
            return Err(MoleculeError::Length {
                masses: masses.len(),
                coords: coords.len(),
            });
        }
        let atoms = masses
            .iter()
            .zip(coords.chunks_exact(3))
            .map(|(&m, c)| Atom::new(m, c[0], c[1], c[2]))
            .collect();
        let ret = Self { atoms };
        ret.validate()?;
        Ok(ret)
    }

    /// check that `self` has at least one atom, that every mass is positive,
    /// and that every coordinate is finite
    pub fn validate(&self) -> Result<(), MoleculeError> {
        if self.atoms.is_empty() {
            return Err(MoleculeError::Empty);
        }
        for (index, atom) in self.atoms.iter().enumerate() {
            if !atom.has_valid_mass() {
                return Err(MoleculeError::BadMass {
                    index,
                    mass: atom.mass,
                });
            }
            if !atom.coord().iter().all(|c| c.is_finite()) {
                return Err(MoleculeError::BadCoord { index });
            }
        }
        Ok(())
    }

    pub fn natoms(&self) -> usize {
        self.atoms.len()
    }

    /// return the mass of each atom as a vector
    pub fn masses(&self) -> Vec<f64> {
        self.atoms.iter().map(|a| a.mass).collect()
    }

    pub fn total_mass(&self) -> f64 {
        self.atoms.iter().map(|a| a.mass).sum()
    }

    /// compute the type of molecular rotor based on the ascending principal
    /// moments of inertia in `moms`. These tests are taken from the [Crawford
    /// Programming
    /// Projects](https://github.com/CrawfordGroup/ProgrammingProjects/blob/master/Project%2301/hints/step7-solution.md)
    pub fn rotor_type(&self, moms: &Vec3) -> Rotor {
        if self.atoms.len() == 1 || moms[2] < ATOM_MOMENT_TOL {
            return Rotor::Atom;
        }
        if moms[0] < LINEAR_RATIO_TOL * moms[2] {
            return if self.atoms.len() == 2 {
                Rotor::Diatomic
            } else {
                Rotor::Linear
            };
        }
        let eps = TOP_RATIO_TOL * moms[2];
        if close(moms[0], moms[1], eps) && close(moms[1], moms[2], eps) {
            Rotor::SphericalTop
        } else if close(moms[0], moms[1], eps) {
            Rotor::OblateSymmTop
        } else if close(moms[1], moms[2], eps) {
            Rotor::ProlateSymmTop
        } else {
            Rotor::AsymmTop
        }
    }

    /// compute the mass-weighted center of `self`
    pub fn com(&self) -> Vec3 {
        let mut sum = 0.0;
        let mut com = Vec3::zeros();
        for atom in &self.atoms {
            sum += atom.mass;
            com += atom.mass * atom.coord();
        }
        com / sum
    }

    /// compute the moment of inertia tensor about the origin
    pub fn moi(&self) -> Mat3 {
        let mut ret = Mat3::zeros();
        for &Atom { mass: w, x, y, z } in &self.atoms {
            // diagonal
            ret[(0, 0)] += w * (y * y + z * z);
            ret[(1, 1)] += w * (x * x + z * z);
            ret[(2, 2)] += w * (x * x + y * y);
            // off-diagonal
            ret[(1, 0)] -= w * x * y;
            ret[(2, 0)] -= w * x * z;
            ret[(2, 1)] -= w * y * z;
        }
        ret.fill_upper_triangle_with_lower_triangle();
        ret
    }

    /// translate each of the atoms in `self` by vec
    pub fn translate(&mut self, vec: Vec3) -> &mut Self {
        for atom in self.atoms.iter_mut() {
            *atom += vec;
        }
        self
    }

    /// return a copy of `self` translated so that its center of mass is at
    /// the origin
    pub fn centered(&self) -> Self {
        let mut ret = self.clone();
        let com = ret.com();
        ret.translate(-com);
        ret
    }

    /// convert the coordinates in `self` from Angstroms to Bohr
    pub fn to_bohr(&mut self) {
        for atom in self.atoms.iter_mut() {
            atom.x /= ANGBOHR;
            atom.y /= ANGBOHR;
            atom.z /= ANGBOHR;
        }
    }
}
