use crate::{Dmat, Dvec, consts::WAVE};

pub mod linalg;

/// convert a mass-weighted hessian eigenvalue in Eh/(bohr²·amu) to a
/// frequency in cm⁻¹. negative eigenvalues give negative (imaginary)
/// frequencies
#[inline]
pub fn to_wavenumber(eigenvalue: f64) -> f64 {
    if eigenvalue < 0.0 {
        -WAVE * f64::sqrt(-eigenvalue)
    } else {
        WAVE * f64::sqrt(eigenvalue)
    }
}

/// square roots of the atomic masses repeated once for each cartesian axis
pub(crate) fn sqrt_masses(masses: &[f64]) -> Dvec {
    Dvec::from_iterator(
        3 * masses.len(),
        masses.iter().flat_map(|m| [m.sqrt(); 3]),
    )
}

/// the largest absolute difference between `mat` and its transpose along with
/// its position
pub(crate) fn max_asymmetry(mat: &Dmat) -> (usize, usize, f64) {
    let (rows, _) = mat.shape();
    let mut ret = (0, 0, 0.0);
    for i in 0..rows {
        for j in 0..i {
            let diff = (mat[(i, j)] - mat[(j, i)]).abs();
            if diff > ret.2 {
                ret = (i, j, diff);
            }
        }
    }
    ret
}

/// average `mat` with its transpose
pub(crate) fn symmetrize(mat: &Dmat) -> Dmat {
    0.5 * (mat + mat.transpose())
}
