//! workday: one simulated office day for the lift-sim elevator simulator.
//!
//! By default simulates a 10-floor tower with two cars from 06:00 to 23:30,
//! with callers drawn from the built-in working-day affluence profile.
//!
//! # Example
//!
//! ```bash
//! # Default day, sweep dispatch
//! workday --seed 42
//!
//! # Four cars, nearest-call dispatch, initial queue from a file, CSV trace
//! workday -e 4 --strategy nearest \
//!     --waiting demos/workday/data/morning_rush.csv --trace output/workday
//!
//! # Replay a fixed list of timed calls instead of the random model
//! workday --calls my_calls.csv
//! ```

use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use lift_building::{
    load_affluence_csv, load_calls_csv, load_names_csv, AffluenceArrivals, AffluenceTable,
    ArrivalGenerator, ScheduledArrivals, WaitingList,
};
use lift_core::SimConfig;
use lift_output::{CsvWriter, TraceObserver};
use lift_sim::{arrivals_rng, NoopObserver, Sim, SimBuilder, SimObserver, SimReport};
use lift_strategy::{IdleStrategy, NearestCallStrategy, Strategy, SweepStrategy};

// ── Constants ─────────────────────────────────────────────────────────────────

/// Caller names used when no name file is given.
const DEFAULT_NAMES: &[&str] = &[
    "Ada", "Alan", "Barbara", "Dennis", "Edsger", "Frances", "Grace", "John", "Ken", "Leslie",
];

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum StrategyKind {
    /// Collective control: keep direction while there is work ahead.
    Sweep,
    /// Serve onboard destinations, then the nearest call.
    Nearest,
    /// Never move.
    Idle,
}

/// Simulate one day of elevator traffic.
#[derive(Parser, Debug)]
#[command(name = "workday")]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file with the building and timetable; omitted fields keep their defaults
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Random seed; overrides the config
    #[arg(long)]
    seed: Option<u64>,

    /// Number of cars, all starting at floor 1; overrides the config
    #[arg(short = 'e', long)]
    elevators: Option<usize>,

    /// Dispatch strategy used by every car
    #[arg(short = 's', long, value_enum, default_value = "sweep")]
    strategy: StrategyKind,

    /// CSV of persons already waiting at start (floor,name,arrival,destination)
    #[arg(long)]
    waiting: Option<PathBuf>,

    /// CSV of timed calls to replay instead of the affluence model
    #[arg(long, conflicts_with_all = ["affluence", "names"])]
    calls: Option<PathBuf>,

    /// CSV affluence profile (time,affluence); defaults to the built-in working day
    #[arg(long)]
    affluence: Option<PathBuf>,

    /// Name list, one per line
    #[arg(long)]
    names: Option<PathBuf>,

    /// Directory for the CSV trace (events, arrivals, histogram)
    #[arg(long)]
    trace: Option<PathBuf>,

    /// Print the summary as JSON instead of text
    #[arg(long)]
    json: bool,
}

// ── Setup ─────────────────────────────────────────────────────────────────────

fn load_config(args: &Args) -> Result<SimConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            serde_json::from_reader(file).with_context(|| format!("parsing {}", path.display()))?
        }
        None => SimConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(n) = args.elevators {
        config.starting_floors = vec![1; n];
    }
    config.validate()?;
    Ok(config)
}

fn make_strategies(kind: StrategyKind, count: usize) -> Vec<Box<dyn Strategy>> {
    (0..count)
        .map(|_| -> Box<dyn Strategy> {
            match kind {
                StrategyKind::Sweep   => Box::new(SweepStrategy::new()),
                StrategyKind::Nearest => Box::new(NearestCallStrategy),
                StrategyKind::Idle    => Box::new(IdleStrategy),
            }
        })
        .collect()
}

fn make_arrivals(args: &Args, config: &SimConfig) -> Result<Box<dyn ArrivalGenerator>> {
    if let Some(path) = &args.calls {
        let calls = load_calls_csv(path).with_context(|| format!("loading {}", path.display()))?;
        info!(calls = calls.len(), "replaying timed calls");
        return Ok(Box::new(ScheduledArrivals::new(calls)));
    }

    let table = match &args.affluence {
        Some(path) => load_affluence_csv(path).with_context(|| format!("loading {}", path.display()))?,
        None => AffluenceTable::working_day(),
    };
    let names = match &args.names {
        Some(path) => load_names_csv(path).with_context(|| format!("loading {}", path.display()))?,
        None => DEFAULT_NAMES.iter().map(|&n| n.to_owned()).collect(),
    };
    info!(points = table.len(), names = names.len(), "affluence model");
    let model = AffluenceArrivals::new(table, names, config.max_floor, arrivals_rng(config))?;
    Ok(Box::new(model))
}

fn make_waiting(path: Option<&Path>, config: &SimConfig) -> Result<WaitingList> {
    match path {
        Some(path) => {
            let calls = load_calls_csv(path).with_context(|| format!("loading {}", path.display()))?;
            Ok(WaitingList::with_calls(config.max_floor, calls)?)
        }
        None => Ok(WaitingList::new(config.max_floor)),
    }
}

fn run<O: SimObserver>(
    sim: &mut Sim<Box<dyn Strategy>, Box<dyn ArrivalGenerator>>,
    observer: &mut O,
) -> Result<SimReport> {
    Ok(sim.run(observer)?)
}

// ── Output ────────────────────────────────────────────────────────────────────

fn print_json(report: &SimReport) -> Result<()> {
    let elevators: Vec<serde_json::Value> = report
        .elevators
        .iter()
        .map(|e| {
            serde_json::json!({
                "id":           e.id.0,
                "final_floor":  e.final_floor,
                "loaded":       e.loaded,
                "unloaded":     e.unloaded,
                "max_load":     e.max_load,
                "left_onboard": e.left_onboard,
                "stopped":      e.stopped,
            })
        })
        .collect();
    let buckets: Vec<serde_json::Value> = report
        .buckets()
        .iter()
        .map(|b| serde_json::json!({ "bucket_secs": b.label(), "count": b.count }))
        .collect();
    let summary = serde_json::json!({
        "end_time":      report.end_time.to_string(),
        "generated":     report.generated,
        "transported":   report.transported,
        "left_waiting":  report.left_waiting,
        "left_onboard":  report.left_onboard(),
        "mean_wait_secs": report.mean_wait_secs(),
        "max_wait_secs": report.max_wait_secs(),
        "elevators":     elevators,
        "histogram":     buckets,
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,lift_sim=info,workday=info")),
        )
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;
    info!(
        floors = config.max_floor,
        elevators = config.elevator_count(),
        strategy = ?args.strategy,
        seed = config.seed,
        "configuration"
    );

    let strategies = make_strategies(args.strategy, config.elevator_count());
    let arrivals = make_arrivals(&args, &config)?;
    let waiting = make_waiting(args.waiting.as_deref(), &config)?;

    let mut sim = SimBuilder::new(config, strategies, arrivals)
        .waiting_list(waiting)
        .build()?;

    let t0 = Instant::now();
    let report = match &args.trace {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let mut obs = TraceObserver::new(CsvWriter::new(dir)?);
            let report = run(&mut sim, &mut obs)?;
            if let Some(e) = obs.take_error() {
                eprintln!("output error: {e}");
            }
            info!(rows = obs.rows_written(), dir = %dir.display(), "trace written");
            report
        }
        None => run(&mut sim, &mut NoopObserver)?,
    };
    info!(elapsed_ms = t0.elapsed().as_millis() as u64, "done");

    if args.json {
        print_json(&report)?;
    } else {
        print!("{report}");
    }
    Ok(())
}
