//! Running the pipeline over many independent molecules

use molecule::Molecule;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{Dmat, Error, Report, conditions::ThermoConditions};

/// a single molecule in a batch
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub name: String,
    pub molecule: Molecule,
    pub hessian: Dmat,

    /// conditions for this job alone, replacing the ones shared by the batch
    pub conditions: Option<ThermoConditions>,
}

impl Job {
    pub fn new(
        name: impl Into<String>,
        molecule: Molecule,
        hessian: Dmat,
    ) -> Self {
        Self {
            name: name.into(),
            molecule,
            hessian,
            conditions: None,
        }
    }

    pub fn with_conditions(mut self, cond: ThermoConditions) -> Self {
        self.conditions = Some(cond);
        self
    }

    /// run the pipeline on `self` under its own conditions if it has them,
    /// otherwise under `cond`
    pub fn run(&self, cond: &ThermoConditions) -> Result<Report, Error> {
        let cond = self.conditions.as_ref().unwrap_or(cond);
        crate::run(&self.hessian, &self.molecule, cond)
    }
}

/// run every job in `jobs` under `cond` in parallel on the current rayon
/// thread pool. the results are in the same order as `jobs`, and a failure in
/// one job has no effect on the others
pub fn run_batch(
    jobs: &[Job],
    cond: &ThermoConditions,
) -> Vec<Result<Report, Error>> {
    jobs.par_iter()
        .map(|job| {
            let ret = job.run(cond);
            if let Err(e) = &ret {
                log::error!("{}: {e}", job.name);
            }
            ret
        })
        .collect()
}
