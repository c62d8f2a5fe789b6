//! This crate contains the source code for the `pathquest` command-line tool.
//!
//! The tool loads a maze, runs one search over it and prints the recorded trace as text.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow until the crate is published."
)]
#![expect(
    unused_crate_dependencies,
    reason = "The error type derives are used in the library crate."
)]

use std::{fs, io, path::PathBuf};

use clap::Parser;
use color_eyre::{
    eyre::{Result, WrapErr as _},
    install,
};
use pathquest::{Algorithm, Cell, Outcome, Playback, Scenario, Step, Trace};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Records the trace of a maze search and prints it.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Maze file: one row per line, `#` for walls, `.` for open cells, `S` and `E` for the
    /// endpoints. The bundled 15x15 maze is used when omitted.
    #[arg(short, long, value_name = "FILE")]
    maze: Option<PathBuf>,

    /// Search to run: bfs, dfs, dijkstra or astar.
    #[arg(short, long, default_value = "bfs")]
    algorithm: Algorithm,

    /// Print a summary of every recorded step.
    #[arg(long, conflicts_with = "step")]
    steps: bool,

    /// Print the step at this zero-based index.
    #[arg(long, value_name = "INDEX")]
    step: Option<usize>,

    /// Log search progress to stderr. `RUST_LOG` takes precedence when set.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    install()?;

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let scenario = load(cli.maze)?;
    info!(
        algorithm = %cli.algorithm,
        rows = scenario.grid.rows(),
        cols = scenario.grid.cols(),
        "running search"
    );

    let trace = scenario.search(cli.algorithm);
    let mut playback = Playback::new(&trace);

    if cli.steps {
        while let Some(step) = playback.current() {
            println!("{}", describe(playback.position(), step));
            if playback.step_forward().is_none() {
                break;
            }
        }
    } else if let Some(index) = cli.step {
        if let Some(step) = playback.seek(index) {
            println!("{}", describe(playback.position(), step));
        }
    }

    println!("{}", summarize(cli.algorithm, &trace));

    Ok(())
}

/// Installs the `tracing` subscriber that writes log events to stderr.
///
/// The filter is read from `RUST_LOG`; without it only warnings are shown, or debug events when
/// `verbose` is set.
fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Reads the scenario from `path`, or falls back to the bundled one.
///
/// # Errors
///
/// This function may return errors if the file cannot be read or is not a valid maze.
fn load(path: Option<PathBuf>) -> Result<Scenario> {
    let Some(path) = path else {
        return Ok(Scenario::default());
    };

    let contents = fs::read_to_string(&path)
        .wrap_err_with(|| format!("failed to read maze file {}", path.display()))?;

    contents
        .parse::<Scenario>()
        .wrap_err_with(|| format!("failed to parse maze file {}", path.display()))
}

/// Joins the display form of each cell with `separator`.
fn join(cells: &[Cell], separator: &str) -> String {
    cells
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}

/// One-line summary of a single step.
fn describe(index: usize, step: &Step) -> String {
    let marker = if step.is_complete() {
        " [complete]"
    } else if step.is_no_path() {
        " [no path]"
    } else {
        ""
    };

    format!(
        "step {index}: current {}, path length {}, visited {}, frontier [{}]{marker}",
        step.current(),
        step.path_length(),
        step.visited().len(),
        join(step.frontier(), ", "),
    )
}

/// Closing summary of the whole trace.
fn summarize(algorithm: Algorithm, trace: &Trace) -> String {
    match (trace.outcome(), trace.solution()) {
        (Outcome::Found, Some(path)) => format!(
            "{}: path of {} edges found in {} steps\n{}",
            algorithm.name(),
            path.len().saturating_sub(1),
            trace.len(),
            join(path, " -> "),
        ),
        (Outcome::Rejected, _) => format!(
            "{}: no search performed, the start or end is outside the maze or on a wall",
            algorithm.name()
        ),
        (Outcome::Found | Outcome::NoPath, _) => format!(
            "{}: no path after exploring {} steps",
            algorithm.name(),
            trace.len()
        ),
    }
}
