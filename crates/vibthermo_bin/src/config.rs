//! Job files for running the thermochemistry of several molecules

use std::{
    fmt::Debug,
    path::{Path, PathBuf},
};

use anyhow::Context;
use molecule::Molecule;
use serde::{Deserialize, Serialize};
use vibthermo::{Error, ThermoConditions, batch::Job, load::load_hessian};


#[derive(Deserialize, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
struct RawMolecule {
    /// A name for the molecule, used to label its output
    name: String,

    /// The geometry, with one line per atom containing the atomic mass in amu
    /// followed by the x, y, and z coordinates.
    geometry: String,

    /// The length unit of the coordinates in `geometry`, "bohr" or
    /// "angstrom". Defaults to bohr.
    #[serde(default)]
    units: Units,

    /// The path to a file holding the cartesian hessian in Eh/bohr², either
    /// the full matrix in row-major order or its lower triangle. Relative
    /// paths are taken relative to the job file.
    hessian: PathBuf,

    /// Electronic energy in Eh, overriding the value in `[conditions]`.
    electronic_energy: Option<f64>,

    /// Spin multiplicity, overriding the value in `[conditions]`.
    multiplicity: Option<usize>,

    /// Rotational symmetry number, overriding the value in `[conditions]`.
    symmetry_number: Option<usize>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
enum Units {
    #[default]
    #[serde(alias = "bohr")]
    Bohr,
    #[serde(alias = "angstrom")]
    Angstrom,
}

#[derive(Deserialize, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    /// The conditions shared by every molecule. Any field left out takes its
    /// default value.
    #[serde(default)]
    conditions: ThermoConditions,

    /// The molecules to run.
    molecule: Vec<RawMolecule>,
}

/// A single molecule from a job file
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoleculeConfig {
    pub name: String,

    /// the geometry with coordinates in bohr
    pub molecule: Molecule,

    /// path to the hessian file. absolute after [Config::load]
    pub hessian: PathBuf,

    /// the shared conditions with any per-molecule overrides applied
    pub conditions: ThermoConditions,
}

impl MoleculeConfig {
    /// load the hessian for `self` and pair it with the molecule
    pub fn job(&self) -> Result<Job, Error> {
        let n3n = 3 * self.molecule.natoms();
        let hessian = load_hessian(&self.hessian, n3n)?;
        Ok(Job::new(self.name.clone(), self.molecule.clone(), hessian)
            .with_conditions(self.conditions.clone()))
    }
}

/// Construct a `Config` with [Config::load] on a TOML file
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawConfig")]
pub struct Config {
    pub conditions: ThermoConditions,
    pub molecules: Vec<MoleculeConfig>,
}

impl TryFrom<RawConfig> for Config {
    type Error = String;

    fn try_from(rc: RawConfig) -> Result<Self, Self::Error> {
        rc.conditions.validate().map_err(|e| e.to_string())?;
        let mut molecules = Vec::with_capacity(rc.molecule.len());
        for m in rc.molecule {
            let mut molecule = m
                .geometry
                .parse::<Molecule>()
                .map_err(|e| format!("geometry of {}: {e}", m.name))?;
            if m.units == Units::Angstrom {
                molecule.to_bohr();
            }
            let mut conditions = rc.conditions.clone();
            if let Some(e) = m.electronic_energy {
                conditions.electronic_energy = e;
            }
            if let Some(mult) = m.multiplicity {
                conditions.multiplicity = mult;
            }
            if let Some(sigma) = m.symmetry_number {
                conditions.symmetry_number = sigma;
            }
            conditions
                .validate()
                .map_err(|e| format!("conditions of {}: {e}", m.name))?;
            molecules.push(MoleculeConfig {
                name: m.name,
                molecule,
                hessian: m.hessian,
                conditions,
            });
        }
        Ok(Self {
            conditions: rc.conditions,
            molecules,
        })
    }
}

impl Config {
    /// load a [Config] from the TOML file specified by `filename` and resolve
    /// the hessian paths against its directory
    pub fn load<P>(filename: P) -> anyhow::Result<Self>
    where
        P: AsRef<Path> + Debug,
    {
        let contents = std::fs::read_to_string(&filename)
            .with_context(|| format!("failed to read {filename:?}"))?;
        let mut ret: Self = toml::from_str(&contents)
            .with_context(|| format!("failed to deserialize {filename:?}"))?;
        if ret.molecules.is_empty() {
            anyhow::bail!("no molecules in {filename:?}");
        }
        let dir = filename.as_ref().parent().unwrap_or_else(|| Path::new(""));
        for m in &mut ret.molecules {
            if m.hessian.is_relative() {
                m.hessian = dir.join(&m.hessian);
            }
        }
        Ok(ret)
    }
}
