use thiserror::Error;

/// Reasons a [crate::Molecule] cannot describe a physical system
#[derive(Clone, Debug, Error, PartialEq)]
pub enum MoleculeError {
    #[error("molecule contains no atoms")]
    Empty,

    #[error("atom {index} has non-positive or non-finite mass {mass}")]
    BadMass { index: usize, mass: f64 },

    #[error("atom {index} has a non-finite coordinate")]
    BadCoord { index: usize },

    #[error("{masses} masses but {coords} coordinates")]
    Length { masses: usize, coords: usize },

    #[error("failed to parse atom from `{0}`")]
    Parse(String),
}
