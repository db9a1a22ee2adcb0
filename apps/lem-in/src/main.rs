//! lem-in — schedules an ant colony through a farm of rooms and tunnels.
//!
//! Reads a farm description, picks the set of interior-disjoint routes with
//! the lowest turn estimate, plays the turn loop, and prints the input
//! followed by one blank line and the move log.
//!
//! Logs go to stderr (`LEM_LOG=debug` or `-v`); stdout carries only the
//! echo and the move log, or a single `ERROR: …` line.

mod report;

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use lem_core::{EdgePolicy, SimConfig};
use lem_farm::enumerate_routes;
use lem_output::{CsvWriter, MoveLogWriter, SimOutputObserver};
use lem_parse::parse_farm;
use lem_plan::{ExhaustiveSelector, RouteSelector};
use lem_sim::{NoopObserver, Schedule, SimBuilder};

use report::PlanReport;


// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "lem-in")]
#[command(about = "Move every ant from ##start to ##end in as few turns as possible")]
struct Cli {
    /// Farm description file
    file: PathBuf,

    /// Tunnel capacity model: directed or undirected
    #[arg(long, default_value = "directed")]
    edge_policy: EdgePolicy,

    /// Abort if the run needs more than this many turns
    #[arg(long)]
    max_turns: Option<u64>,

    /// Also write moves.csv and turn_summaries.csv into this directory
    #[arg(long)]
    csv_dir: Option<PathBuf>,

    /// Write the chosen routes and allocation as JSON
    #[arg(long)]
    plan_json: Option<PathBuf>,

    /// Debug logging on stderr
    #[arg(long, short)]
    verbose: bool,
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let (output, succeeded) = execute(&cli);
    if let Err(e) = print(&output) {
        eprintln!("cannot write output: {e}");
        return ExitCode::FAILURE;
    }
    if succeeded { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

/// The complete stdout text and whether the run succeeded.  A failed run
/// yields exactly one `ERROR: …` line.
fn execute(cli: &Cli) -> (Vec<u8>, bool) {
    match run(cli) {
        Ok(output) => (output, true),
        Err(e) => {
            debug!("{e:#}");
            (format!("ERROR: {e}\n").into_bytes(), false)
        }
    }
}

fn print(output: &[u8]) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(output)?;
    stdout.flush()
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("LEM_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Everything up to the final print.  The returned buffer holds the complete
/// stdout text.  Files (`--plan-json`, `--csv-dir`) are written only after
/// the run has finished, so a failed run leaves nothing behind.
fn run(cli: &Cli) -> Result<Vec<u8>> {
    let started = Instant::now();

    // 1. Parse.
    let text = fs::read_to_string(&cli.file)
        .with_context(|| format!("cannot read {}", cli.file.display()))?;
    let input = parse_farm(&text)?;
    let farm = &input.farm;
    info!(
        rooms = farm.room_count(),
        tunnels = farm.tunnel_count(),
        ants = input.ant_count,
        "farm loaded"
    );

    // 2. Enumerate and select.
    let routes = enumerate_routes(farm);
    info!(routes = routes.len(), "routes enumerated");
    let plan = ExhaustiveSelector.select(&routes, input.ant_count)?;
    info!(
        chosen = plan.routes.len(),
        estimated_turns = plan.estimated_turns,
        "plan selected"
    );

    let config = SimConfig { edge_policy: cli.edge_policy, max_turns: cli.max_turns };
    let report = PlanReport::new(&plan, farm, &config);

    // 3. Simulate.
    let mut sim = SimBuilder::from_plan(farm, plan).config(config.clone()).build()?;
    let schedule: Schedule = sim.run(&mut NoopObserver)?;

    // 4. Export.
    if let Some(path) = &cli.plan_json {
        report.write(path)?;
        info!(path = %path.display(), "plan written");
    }
    if let Some(dir) = &cli.csv_dir {
        let writer = CsvWriter::new(dir)
            .with_context(|| format!("cannot create CSV files in {}", dir.display()))?;
        let mut obs = SimOutputObserver::new(writer);
        obs.replay(&schedule, farm);
        if let Some(e) = obs.take_error() {
            return Err(e).context("CSV export failed");
        }
        info!(dir = %dir.display(), "CSV written");
    }

    // 5. Render.
    let mut log = MoveLogWriter::new(Vec::new());
    log.echo_input(&text)?;
    log.write_schedule(&schedule, farm)?;
    info!(
        turns = schedule.turn_count(),
        lines = log.lines_written(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "done"
    );
    Ok(log.into_inner())
}
