use std::fmt::Display;

use crate::{Report, freq::NormalModeSet, thermo::ThermoResult};

impl Display for NormalModeSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{:>5}{:>12}{:>12}{:>12}",
            "Mode", "Freq", "Red. Mass", "Force K"
        )?;
        for (i, mode) in self.iter().enumerate() {
            let freq = if mode.is_imaginary() {
                format!("{:.1}i", -mode.freq)
            } else {
                format!("{:.1}", mode.freq)
            };
            writeln!(
                f,
                "{:5}{:>12}{:12.4}{:12.4}",
                i + 1,
                freq,
                mode.reduced_mass,
                mode.force_constant
            )?;
        }
        Ok(())
    }
}

/// display adapter printing the cartesian displacement vector of each mode
/// in `x y z` rows per atom
pub struct Displacements<'a>(pub &'a NormalModeSet);

impl Display for Displacements<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, mode) in self.0.iter().enumerate() {
            writeln!(f, "Mode {:>3}: {:.1} cm-1", i + 1, mode.freq)?;
            for xyz in mode.displacement.as_slice().chunks(3) {
                for x in xyz {
                    write!(f, "{x:10.5}")?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl Display for ThermoResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ThermoResult {
            temperature,
            pressure,
            zpe,
            e_elec,
            e_trans,
            e_rot,
            e_vib,
            enthalpy,
            s_trans,
            s_rot,
            s_vib,
            s_elec,
            s_conc,
            entropy,
            gibbs,
            freqs: _,
            imaginary,
        } = self;
        writeln!(f, "T = {temperature:.2} K, P = {pressure:.1} Pa")?;
        writeln!(f, "\nEnergies (kJ/mol):")?;
        writeln!(f, "{:<12}{:16.6}", "E(elec)", e_elec)?;
        writeln!(f, "{:<12}{:16.6}", "ZPE", zpe)?;
        writeln!(f, "{:<12}{:16.6}", "E(trans)", e_trans)?;
        writeln!(f, "{:<12}{:16.6}", "E(rot)", e_rot)?;
        writeln!(f, "{:<12}{:16.6}", "E(vib)", e_vib)?;
        writeln!(f, "{:<12}{:16.6}", "H", enthalpy)?;
        writeln!(f, "\nEntropies (J/mol K):")?;
        writeln!(f, "{:<12}{:16.6}", "S(trans)", s_trans)?;
        writeln!(f, "{:<12}{:16.6}", "S(rot)", s_rot)?;
        writeln!(f, "{:<12}{:16.6}", "S(vib)", s_vib)?;
        writeln!(f, "{:<12}{:16.6}", "S(elec)", s_elec)?;
        if *s_conc != 0.0 {
            writeln!(f, "{:<12}{:16.6}", "S(conc)", s_conc)?;
        }
        writeln!(f, "{:<12}{:16.6}", "S", entropy)?;
        writeln!(f, "\n{:<12}{:16.6}", "G", gibbs)?;
        if !imaginary.is_empty() {
            writeln!(
                f,
                "\nWARNING: {} imaginary frequencies",
                imaginary.len()
            )?;
        }
        Ok(())
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Report {
            frame,
            modes,
            thermo,
        } = self;
        writeln!(f, "Molecule is {}", frame.rotor)?;
        writeln!(
            f,
            "Principal moments (amu bohr^2): {:.6} {:.6} {:.6}",
            frame.moments[0], frame.moments[1], frame.moments[2]
        )?;
        writeln!(f, "\nVibrational Frequencies (cm-1):")?;
        write!(f, "{modes}")?;
        writeln!(f)?;
        write!(f, "{thermo}")
    }
}
