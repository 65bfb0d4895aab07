use molecule::MoleculeError;
use thiserror::Error;

/// Failures of the vibrational analysis and thermochemistry pipeline. None of
/// these are recoverable for the molecule in question: the computation is
/// deterministic, so retrying with the same input cannot succeed
#[derive(Debug, Error)]
pub enum Error {
    /// a matrix has the wrong dimensions
    #[error("shape error: {0}")]
    Shape(String),

    /// the hessian is not symmetric to within tolerance
    #[error(
        "matrix is not symmetric: element ({i}, {j}) differs from its \
         transpose by {diff:.3e}, tolerance {tol:.3e}"
    )]
    Asymmetry {
        i: usize,
        j: usize,
        diff: f64,
        tol: f64,
    },

    /// a matrix element is NaN or infinite
    #[error("matrix element ({i}, {j}) is not finite: {value}")]
    NonFinite { i: usize, j: usize, value: f64 },

    /// the rigid-body subspace did not separate cleanly from the vibrations.
    /// usually a mismatch between the geometry and the hessian, such as a
    /// different atom ordering
    #[error("projection inconsistency: {0}")]
    ProjectionInconsistency(String),

    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(#[from] MoleculeError),

    #[error("invalid conditions: {0}")]
    InvalidConditions(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {0}")]
    Parse(String),
}

impl Error {
    /// Returns `true` if the error is [`ProjectionInconsistency`].
    ///
    /// [`ProjectionInconsistency`]: Error::ProjectionInconsistency
    #[must_use]
    pub fn is_projection_inconsistency(&self) -> bool {
        matches!(self, Self::ProjectionInconsistency(..))
    }
}
