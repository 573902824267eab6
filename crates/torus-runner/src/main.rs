//! Runs a toroidal life simulation from a grid file.
//!
//! Reads a grid of `.` (dead) and `O` (alive) characters, simulates it in
//! parallel row bands and writes the final generation in the same format.
//!
//! ```text
//! torus-runner -i <input> -o <output> [-p <workers>] [-g <generations>]
//! ```
//!
//! Every flag can also be set from the environment (`TORUS_INPUT`,
//! `TORUS_OUTPUT`, `TORUS_WORKERS`, `TORUS_GENERATIONS`). Log verbosity is
//! controlled with `RUST_LOG`.

mod io;

use std::path::PathBuf;

use clap::Parser;
use eyre::WrapErr;
use torus_life::{DEFAULT_GENERATIONS, RemainderPolicy, SimulationConfig};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "torus-runner", about = "Cellular life simulator on a toroidal grid")]
struct Args {
    /// Path to the input grid.
    #[arg(short, long, env = "TORUS_INPUT")]
    input: PathBuf,

    /// Path the final grid is written to.
    #[arg(short, long, env = "TORUS_OUTPUT")]
    output: PathBuf,

    /// Number of worker threads, one row band each.
    #[arg(short = 'p', long = "processes", env = "TORUS_WORKERS", default_value_t = 1)]
    workers: usize,

    /// Number of generations to simulate.
    #[arg(short, long, env = "TORUS_GENERATIONS", default_value_t = DEFAULT_GENERATIONS)]
    generations: usize,

    /// Drop leftover rows when the row count is not a multiple of the worker
    /// count, instead of giving them to the last band.
    #[arg(long)]
    truncate_remainder: bool,
}

impl Args {
    fn config(&self) -> SimulationConfig {
        let remainder = if self.truncate_remainder {
            RemainderPolicy::Truncate
        } else {
            RemainderPolicy::ExtendLast
        };

        SimulationConfig::new(self.workers)
            .with_generations(self.generations)
            .with_remainder(remainder)
    }
}

fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("torus_runner=info".parse()?)
                .add_directive("torus_core=info".parse()?),
        )
        .init();

    run_cli(&Args::parse())
}

/// Load, simulate and save. The output file is created only after the
/// simulation has finished successfully.
fn run_cli(args: &Args) -> eyre::Result<()> {
    let config = args.config();

    let grid = io::load_grid(&args.input)?;
    info!(
        "Loaded {}x{} grid from {}",
        grid.rows(),
        grid.cols(),
        args.input.display()
    );

    let done = torus_life::run(grid, &config).wrap_err("simulation failed")?;

    io::write_grid(&args.output, &done)?;
    info!(
        "Wrote generation {} ({} alive) to {}",
        config.generations,
        done.population(),
        args.output.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn args(dir: &tempfile::TempDir, input: &str, workers: usize) -> Args {
        let input_path = dir.path().join("input.txt");
        fs::write(&input_path, input).unwrap();

        Args {
            input: input_path,
            output: dir.path().join("output.txt"),
            workers,
            generations: 1,
            truncate_remainder: false,
        }
    }

    #[test]
    fn writes_final_generation() {
        let dir = tempfile::tempdir().unwrap();
        let args = args(&dir, "...\n.O.\n...\n", 1);

        run_cli(&args).unwrap();
        assert_eq!(fs::read_to_string(&args.output).unwrap(), "...\n...\n...\n");
    }

    #[test]
    fn zero_workers_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let args = args(&dir, "...\n...\n...\n", 0);

        let err = run_cli(&args).unwrap_err();
        assert!(format!("{err:#}").contains("invalid worker count 0"));
        assert!(!args.output.exists());
    }

    #[test]
    fn more_workers_than_rows_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let args = args(&dir, "...\n...\n...\n", 4);

        let err = run_cli(&args).unwrap_err();
        assert!(format!("{err:#}").contains("invalid worker count 4"));
        assert!(!args.output.exists());
    }

    #[test]
    fn ragged_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let args = args(&dir, "...\n..\n...\n", 1);

        let err = run_cli(&args).unwrap_err();
        assert!(format!("{err:#}").contains("expected 3 cells, found 2"));
        assert!(!args.output.exists());
    }

    #[test]
    fn truncate_flag_selects_policy() {
        let dir = tempfile::tempdir().unwrap();
        let mut args = args(&dir, "...\n...\n...\n", 2);
        assert_eq!(args.config().remainder, RemainderPolicy::ExtendLast);

        args.truncate_remainder = true;
        run_cli(&args).unwrap();
        assert_eq!(fs::read_to_string(&args.output).unwrap(), "...\n...\n");
    }
}
