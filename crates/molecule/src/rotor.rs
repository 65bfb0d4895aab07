use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// The type of rigid rotor described by a set of principal moments
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rotor {
    /// a single atom. no rotational degrees of freedom
    Atom,
    Diatomic,
    Linear,
    SphericalTop,
    OblateSymmTop,
    ProlateSymmTop,
    AsymmTop,
}

impl Rotor {
    /// Returns `true` if the rotor is [`Linear`] or [`Diatomic`].
    ///
    /// [`Linear`]: Rotor::Linear
    /// [`Diatomic`]: Rotor::Diatomic
    #[must_use]
    pub fn is_linear(&self) -> bool {
        matches!(self, Self::Linear | Self::Diatomic)
    }

    /// Returns `true` if the rotor is [`Atom`].
    ///
    /// [`Atom`]: Rotor::Atom
    #[must_use]
    pub fn is_atom(&self) -> bool {
        matches!(self, Self::Atom)
    }

    /// the number of rotational degrees of freedom: 0 for an atom, 2 for a
    /// linear molecule, and 3 otherwise
    pub fn rotational_dof(&self) -> usize {
        if self.is_atom() {
            0
        } else if self.is_linear() {
            2
        } else {
            3
        }
    }
}

impl Display for Rotor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Rotor::Atom => "an atom",
                Rotor::Diatomic => "diatomic",
                Rotor::Linear => "linear",
                Rotor::SphericalTop => "a spherical top",
                Rotor::OblateSymmTop => "an oblate symmetric top",
                Rotor::ProlateSymmTop => "a prolate symmetric top",
                Rotor::AsymmTop => "an asymmetric top",
            }
        )
    }
}
