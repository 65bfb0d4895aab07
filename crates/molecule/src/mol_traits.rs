use crate::{Atom, Molecule, MoleculeError};
use approx::AbsDiffEq;
use std::{fmt::Display, str::FromStr};

impl std::fmt::Debug for Molecule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self}")
    }
}

/// A Molecule is AbsDiffEq if each of its Atoms is
impl AbsDiffEq for Molecule {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        1e-8
    }

    /// compare molecules irrespective of order. try to find an atom in other
    /// that equals the current atom in self. If found, remove it, so it can't
    /// be double-counted.
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        let mut theirs = other.atoms.clone();
        if self.atoms.len() != theirs.len() {
            return false;
        }
        for atom in &self.atoms {
            match theirs.iter().position(|b| atom.abs_diff_eq(b, epsilon)) {
                Some(i) => {
                    theirs.remove(i);
                }
                None => return false,
            }
        }
        true
    }
}

impl PartialEq for Molecule {
    fn eq(&self, other: &Self) -> bool {
        self.abs_diff_eq(other, Self::default_epsilon())
    }
}

impl FromStr for Molecule {
    type Err = MoleculeError;

    /// parse lines like
    ///      15.99491   0.000000000    0.000000000   -0.124238453
    ///       1.00783   0.000000000    1.431390207    0.986041184
    ///       1.00783   0.000000000   -1.431390207    0.986041184
    /// into a molecule. blank lines are skipped
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let atoms = s
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(Atom::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        let ret = Self::new(atoms);
        ret.validate()?;
        Ok(ret)
    }
}

impl Display for Molecule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let precision = f.precision().unwrap_or(8);
        let width = f.width().unwrap_or(precision + 4);
        writeln!(f)?;
        for atom in &self.atoms {
            writeln!(
                f,
                "{:12.6}{:w$.p$}{:w$.p$}{:w$.p$}",
                atom.mass,
                atom.x,
                atom.y,
                atom.z,
                w = width,
                p = precision,
            )?;
        }
        Ok(())
    }
}
