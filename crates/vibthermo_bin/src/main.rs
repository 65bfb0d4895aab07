use clap::Parser;
use serde::Serialize;
use vibthermo::{Report, batch::run_batch, output::Displacements};

use crate::config::Config;

mod config;

/// harmonic frequencies and thermochemistry from cartesian hessians
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML job file describing the conditions and molecules to run
    #[arg(value_parser)]
    infile: String,

    /// Writes the output in JSON format for use by other programs
    #[arg(short, long, value_parser, default_value_t = false)]
    json: bool,

    /// Set the maximum number of threads to use. Defaults to 0, which means to
    /// use as many threads as there are CPUS.
    #[arg(short, long, default_value_t = 0)]
    threads: usize,

    /// Also print the cartesian displacement vector of every normal mode
    #[arg(
        short,
        long,
        value_parser,
        default_value_t = false,
        conflicts_with = "json"
    )]
    modes: bool,
}

#[derive(Serialize)]
struct Entry<'a> {
    name: &'a str,
    #[serde(flatten)]
    report: &'a Report,
}

/// call `rayon::ThreadPoolBuilder` to set `num_threads` to `n`. Discards the
/// error returned by `build_global` if the thread pool has already been
/// initialized
fn max_threads(n: usize) {
    let _ = rayon::ThreadPoolBuilder::new()
        .num_threads(n)
        .build_global();
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    max_threads(args.threads);

    let config = Config::load(&args.infile)?;
    log::info!(
        "loaded {} molecules from {}",
        config.molecules.len(),
        args.infile
    );

    let mut failed = 0;
    let mut jobs = Vec::with_capacity(config.molecules.len());
    for m in &config.molecules {
        match m.job() {
            Ok(job) => jobs.push(job),
            Err(e) => {
                eprintln!("{}: {e}", m.name);
                failed += 1;
            }
        }
    }

    let results = run_batch(&jobs, &config.conditions);
    let mut entries = Vec::with_capacity(jobs.len());
    for (job, res) in jobs.iter().zip(&results) {
        match res {
            Ok(report) => entries.push(Entry {
                name: &job.name,
                report,
            }),
            Err(e) => {
                eprintln!("{}: {e}", job.name);
                failed += 1;
            }
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for Entry { name, report } in &entries {
            println!("== {name} ==");
            println!("{report}");
            if args.modes {
                println!("Normal Modes:");
                println!("{}", Displacements(&report.modes));
            }
        }
    }

    if failed > 0 {
        anyhow::bail!(
            "{failed} of {} molecules failed",
            config.molecules.len()
        );
    }
    Ok(())
}
