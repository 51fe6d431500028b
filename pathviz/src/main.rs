//! pathviz: paint walls, pick endpoints and watch A* or uniform-cost search
//! explore the grid.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, anyhow};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use pathviz::config::{
    DEFAULT_FRAME_DELAY_MS, DEFAULT_LOGICAL_WIDTH, DEFAULT_SIZE, HostConfig, MAX_SIZE, MIN_SIZE, SessionConfig,
};
use pathviz::host::Host;
use pathviz::{Algorithm, Session, headless};
use pathviz_core::DEFAULT_DENSITY;
use pathviz_search::Heuristic;

#[derive(Parser, Debug)]
#[command(name = "pathviz")]
#[command(about = "Interactive grid pathfinding visualizer")]
struct Args {
    /// Cells per side of the grid
    #[arg(long, default_value_t = DEFAULT_SIZE, value_parser = clap::value_parser!(i32).range(i64::from(MIN_SIZE)..=i64::from(MAX_SIZE)))]
    size: i32,

    /// Logical width divided evenly among the rows
    #[arg(long, default_value_t = DEFAULT_LOGICAL_WIDTH, value_parser = clap::value_parser!(i32).range(1..))]
    width: i32,

    /// Barrier probability for random mazes (0 to 1)
    #[arg(long, default_value_t = DEFAULT_DENSITY, value_parser = parse_density)]
    density: f64,

    /// Seed for random mazes
    #[arg(long)]
    seed: Option<u64>,

    /// Pause after each rendered search step, in milliseconds
    #[arg(long, default_value_t = DEFAULT_FRAME_DELAY_MS)]
    delay_ms: u64,

    /// Write logs to this file (interactive mode logs nowhere otherwise)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Run a seeded maze without a terminal and print one line per search
    #[arg(long)]
    headless: bool,

    /// Algorithm for headless runs
    #[arg(long, value_enum, default_value_t = AlgorithmArg::All)]
    algorithm: AlgorithmArg,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum AlgorithmArg {
    Manhattan,
    Euclidean,
    Dijkstra,
    All,
}

impl AlgorithmArg {
    fn algorithms(self) -> Vec<Algorithm> {
        match self {
            Self::Manhattan => vec![Algorithm::AStar(Heuristic::Manhattan)],
            Self::Euclidean => vec![Algorithm::AStar(Heuristic::Euclidean)],
            Self::Dijkstra => vec![Algorithm::UniformCost],
            Self::All => Algorithm::ALL.to_vec(),
        }
    }
}

fn parse_density(s: &str) -> Result<f64, String> {
    let d: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if (0.0..=1.0).contains(&d) {
        Ok(d)
    } else {
        Err(format!("density must be between 0 and 1, got {d}"))
    }
}

impl Args {
    fn configs(&self) -> (SessionConfig, HostConfig) {
        let session = SessionConfig {
            size: self.size,
            logical_width: self.width,
            density: self.density,
            seed: self.seed,
        };
        let host = HostConfig {
            frame_delay_ms: self.delay_ms,
            log_file: self.log_file.clone(),
            headless: self.headless,
        };
        (session, host)
    }
}

/// Install the log sink: the given file, else stderr when `to_stderr`.
fn init_logging(log_file: Option<&Path>, to_stderr: bool) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let installed = match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).try_init()
        }
        None if to_stderr => builder.with_writer(std::io::stderr).try_init(),
        None => return Ok(()),
    };
    installed.map_err(|e| anyhow!("failed to install logger: {e}"))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let (session_config, host_config) = args.configs();
    init_logging(host_config.log_file.as_deref(), host_config.headless)?;

    if host_config.headless {
        let reports = headless::run(session_config, &args.algorithm.algorithms())
            .context("headless run failed")?;
        for report in reports {
            println!("{report}");
        }
        return Ok(());
    }

    let session = Session::new(session_config).context("failed to create grid")?;
    Host::new(session, &host_config)
        .run()
        .context("terminal session failed")?;
    Ok(())
}
