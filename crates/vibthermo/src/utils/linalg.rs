use std::cmp::Ordering;

use crate::Dmat;
use crate::Dvec;
use crate::Error;
use nalgebra::SymmetricEigen;

use super::{max_asymmetry, symmetrize};

/// allowed asymmetry, relative to the largest matrix element (or absolute if
/// all elements are smaller than one)
pub const SYMMETRY_TOL: f64 = 1e-6;

/// compute the eigen decomposition of the symmetric matrix `mat` and return
/// the eigenvalues in ascending order with the eigenvectors in the matching
/// columns. the sort is stable, so degenerate eigenvalues keep the order the
/// solver produced them in
pub fn symm_eigen_decomp(mat: Dmat) -> (Dvec, Dmat) {
    let SymmetricEigen {
        eigenvectors: vecs,
        eigenvalues: vals,
    } = SymmetricEigen::new(mat);
    let mut pairs: Vec<_> = vals.iter().enumerate().collect();
    pairs.sort_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    let (rows, cols) = vecs.shape();
    let mut ret = Dmat::zeros(rows, cols);
    for i in 0..cols {
        ret.set_column(i, &vecs.column(pairs[i].0));
    }
    (
        Dvec::from_iterator(vals.len(), pairs.iter().map(|a| *a.1)),
        ret,
    )
}

/// check that `mat` is square, has only finite elements, and is symmetric to
/// within [SYMMETRY_TOL]
pub fn check_symmetric(mat: &Dmat) -> Result<(), Error> {
    let (rows, cols) = mat.shape();
    if rows != cols {
        return Err(Error::Shape(format!(
            "expected a square matrix, found {rows}x{cols}"
        )));
    }
    for i in 0..rows {
        for j in 0..cols {
            let value = mat[(i, j)];
            if !value.is_finite() {
                return Err(Error::NonFinite { i, j, value });
            }
        }
    }
    if rows == 0 {
        return Ok(());
    }
    let tol = SYMMETRY_TOL * mat.amax().max(1.0);
    let (i, j, diff) = max_asymmetry(mat);
    if diff > tol {
        return Err(Error::Asymmetry { i, j, diff, tol });
    }
    Ok(())
}

/// checked version of [symm_eigen_decomp]. `mat` must be square and
/// symmetric to within [SYMMETRY_TOL]. the residual asymmetry is averaged out
/// before decomposing
pub fn eigen_symmetric(mat: &Dmat) -> Result<(Dvec, Dmat), Error> {
    check_symmetric(mat)?;
    Ok(symm_eigen_decomp(symmetrize(mat)))
}
