//! Loading cartesian hessians and geometries from plain text files

use std::{fmt::Debug, fs::read_to_string, path::Path};

use molecule::{Molecule, MoleculeError};

use crate::{Dmat, Error};

fn read<P>(infile: P) -> Result<String, Error>
where
    P: AsRef<Path> + Debug,
{
    read_to_string(&infile).map_err(|source| Error::Io {
        path: infile.as_ref().display().to_string(),
        source,
    })
}

/// load a cartesian hessian for `n3n` coordinates from `infile`. see
/// [parse_hessian] for the accepted layouts
pub fn load_hessian<P>(infile: P, n3n: usize) -> Result<Dmat, Error>
where
    P: AsRef<Path> + Debug,
{
    let data = read(&infile)?;
    parse_hessian(&data, n3n)
        .map_err(|e| Error::Parse(format!("{infile:?}: {e}")))
}

/// parse whitespace-separated hessian elements. the elements can be either
/// the full `n3n` x `n3n` matrix in row-major order, the same preceded by a
/// two-number header as in a fort.15 file, or the lower triangle including
/// the diagonal row by row
pub fn parse_hessian(s: &str, n3n: usize) -> Result<Dmat, String> {
    let data = s
        .split_whitespace()
        .map(|w| match w.parse::<f64>() {
            Ok(x) if x.is_finite() => Ok(x),
            Ok(x) => Err(format!("{w:?}: element {x} is not finite")),
            Err(e) => Err(format!("{w:?}: {e}")),
        })
        .collect::<Result<Vec<_>, _>>()?;
    let dl = data.len();
    let full = n3n * n3n;
    let tri = n3n * (n3n + 1) / 2;
    if dl == full {
        Ok(Dmat::from_row_slice(n3n, n3n, &data))
    } else if dl == full + 2 {
        Ok(Dmat::from_row_slice(n3n, n3n, &data[2..]))
    } else if dl == tri {
        let mut ret = Dmat::zeros(n3n, n3n);
        let mut elems = data.into_iter();
        for i in 0..n3n {
            for j in 0..=i {
                let x = elems.next().unwrap_or_default();
                ret[(i, j)] = x;
                ret[(j, i)] = x;
            }
        }
        Ok(ret)
    } else {
        Err(format!(
            "wrong number of elements. found {dl}, expected {full} for the \
             full matrix or {tri} for the lower triangle"
        ))
    }
}

/// load a [Molecule] from `infile` containing one `mass x y z` line per atom,
/// with coordinates in bohr
pub fn load_molecule<P>(infile: P) -> Result<Molecule, Error>
where
    P: AsRef<Path> + Debug,
{
    let data = read(&infile)?;
    data.parse::<Molecule>().map_err(|e| match e {
        MoleculeError::Parse(_) => Error::Parse(format!("{infile:?}: {e}")),
        e => Error::DegenerateGeometry(e),
    })
}
