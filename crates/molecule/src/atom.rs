use std::{
    fmt::Display,
    ops::{Add, AddAssign, Neg, Sub},
    str::FromStr,
};

use approx::AbsDiffEq;
use serde::{Deserialize, Serialize};

use crate::{MoleculeError, Vec3};

/// A point mass. `mass` is in amu and the coordinates are in bohr
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Atom {
    pub mass: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl PartialEq for Atom {
    fn eq(&self, other: &Self) -> bool {
        self.abs_diff_eq(other, Self::default_epsilon())
    }
}

impl AbsDiffEq for Atom {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        1e-8
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        let close = |a: f64, b: f64| (a - b).abs() < epsilon;
        close(self.mass, other.mass)
            && close(self.x, other.x)
            && close(self.y, other.y)
            && close(self.z, other.z)
    }
}

impl Neg for Atom {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            mass: self.mass,
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl Add<Vec3> for Atom {
    type Output = Atom;

    fn add(self, rhs: Vec3) -> Self::Output {
        Atom {
            x: self.x + rhs[0],
            y: self.y + rhs[1],
            z: self.z + rhs[2],
            ..self
        }
    }
}

impl Sub<Vec3> for Atom {
    type Output = Atom;

    fn sub(self, rhs: Vec3) -> Self::Output {
        self + -rhs
    }
}

impl AddAssign<Vec3> for Atom {
    fn add_assign(&mut self, rhs: Vec3) {
        *self = *self + rhs
    }
}

impl Display for Atom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:12.6} {:15.10} {:15.10} {:15.10}",
            self.mass, self.x, self.y, self.z
        )
    }
}

impl FromStr for Atom {
    type Err = MoleculeError;

    /// parse an Atom from a line like
    ///  12.0 1.0 1.0 1.0
    /// where the first field is the mass
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<f64> = s
            .split_whitespace()
            .map(|f| f.parse())
            .collect::<Result<_, _>>()
            .map_err(|_| MoleculeError::Parse(s.trim().to_owned()))?;
        match fields[..] {
            [mass, x, y, z] => Ok(Self::new(mass, x, y, z)),
            _ => Err(MoleculeError::Parse(s.trim().to_owned())),
        }
    }
}

impl Atom {
    pub fn new(mass: f64, x: f64, y: f64, z: f64) -> Self {
        Self { mass, x, y, z }
    }

    pub fn coord(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Returns `true` if the mass is finite and positive
    pub fn has_valid_mass(&self) -> bool {
        self.mass.is_finite() && self.mass > 0.0
    }
}
