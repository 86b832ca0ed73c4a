use log::{info, warn};
use std::path::PathBuf;
use structopt::StructOpt;
use tsps::{log::build_logger_for_level, prelude::*};

#[derive(StructOpt)]
pub enum Algorithm {
    /// Held-Karp bitmask dynamic program (default)
    HeldKarp,
    /// Exhaustive backtracking baseline; only feasible for small instances
    BruteForce,
}

impl Default for Algorithm {
    fn default() -> Self {
        Algorithm::HeldKarp
    }
}

#[derive(StructOpt)]
struct Opts {
    /// Instance file; read from stdin if omitted
    #[structopt(short, long)]
    instance: Option<PathBuf>,

    /// Result file; written to stdout if omitted
    #[structopt(short, long)]
    output: Option<PathBuf>,

    /// Log the distance matrix before solving
    #[structopt(short = "m", long)]
    show_matrix: bool,

    #[structopt(subcommand)]
    algorithm: Option<Algorithm>,
}

fn load_points(path: &Option<PathBuf>) -> Result<Vec<Point>> {
    if let Some(path) = path {
        try_read_instance_file(path)
    } else {
        let stdin = std::io::stdin();
        try_read_instance(stdin.lock())
    }
}

fn report_and_write(solver: &mut dyn TourSolver, output: &Option<PathBuf>) -> Result<()> {
    let name = solver.algorithm_name();
    let tour = solver.solve()?;

    info!("From {name} APPROACH:");
    info!("\ttour: {tour}");
    info!("\ttour cost: {}", tour.cost());

    // persistence is best effort; a computed but unsaved result is fine
    let written = match output {
        Some(path) => tour.try_write_file(path),
        None => tour.try_write(std::io::stdout()),
    };
    if let Err(e) = written {
        warn!("could not persist the result: {e}");
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    build_logger_for_level(log::LevelFilter::Info);
    let opts = Opts::from_args();

    let points = load_points(&opts.instance)?;
    let matrix = DistanceMatrix::from_points(&points)?;

    if opts.show_matrix {
        info!("DISTANCE MATRIX:\n{matrix}");
    }

    match opts.algorithm.unwrap_or_default() {
        Algorithm::HeldKarp => {
            let mut solver = HeldKarpSolver::new(&matrix)?;
            report_and_write(&mut solver, &opts.output)?;
        }
        Algorithm::BruteForce => {
            let mut solver = BruteForceSolver::new(&matrix)?;
            report_and_write(&mut solver, &opts.output)?;
        }
    }

    Ok(())
}
