//! Runs all three solvers on one instance, prints a labeled report per
//! algorithm and optionally stores one result file per solver.

use log::warn;
use std::path::{Path, PathBuf};
use structopt::StructOpt;
use tsps::{log::build_logger_for_level, prelude::*};

#[derive(StructOpt)]
struct Opts {
    /// Instance file; read from stdin if omitted
    #[structopt(short, long)]
    instance: Option<PathBuf>,

    /// Directory receiving one result file per solver; nothing is written
    /// if omitted
    #[structopt(short = "d", long)]
    output_dir: Option<PathBuf>,

    /// Skip the brute force (it is factorial-time on large instances)
    #[structopt(long)]
    skip_brute_force: bool,
}

fn load_points(path: &Option<PathBuf>) -> Result<Vec<Point>> {
    if let Some(path) = path {
        try_read_instance_file(path)
    } else {
        let stdin = std::io::stdin();
        try_read_instance(stdin.lock())
    }
}

fn result_file_name(algorithm_name: &str) -> String {
    format!(
        "{}.txt",
        algorithm_name.to_lowercase().replace([' ', '-'], "_")
    )
}

fn report(solver: &mut dyn TourSolver, output_dir: &Option<PathBuf>) -> Result<()> {
    let name = solver.algorithm_name();
    let tour = solver.solve()?;

    println!("\nFrom {name} APPROACH:");
    println!("\ttour: {tour}");
    println!("\ttour cost: {}", tour.cost());

    if let Some(dir) = output_dir {
        let path = Path::new(dir).join(result_file_name(name));
        if let Err(e) = tour.try_write_file(&path) {
            warn!("could not persist the {name} result to {}: {e}", path.display());
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    build_logger_for_level(log::LevelFilter::Info);
    let opts = Opts::from_args();

    let points = load_points(&opts.instance)?;
    let matrix = DistanceMatrix::from_points(&points)?;

    println!("DISTANCE MATRIX:");
    print!("{matrix}");

    if !opts.skip_brute_force {
        report(&mut BruteForceSolver::new(&matrix)?, &opts.output_dir)?;
    }
    report(&mut HeldKarpSolver::new(&matrix)?, &opts.output_dir)?;
    report(&mut MstApproximation::new(&matrix), &opts.output_dir)?;

    Ok(())
}
