mod pointer;
mod world;

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use kinematics::body::Body;
use kinematics::config::{ConfigError, CreatureConfig};
use kinematics::point::Point;

use crate::pointer::Pointer;
use crate::world::{Topology, World};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("cannot open pointer input {path}: {source}")]
    OpenInput { path: PathBuf, source: io::Error },
}

#[derive(Parser, Debug)]
#[command(name = "creature", about = "Procedural creature kinematics, one JSON snapshot per line")]
struct Cli {
    /// More log output on stderr (-v debug, -vv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Curvature limit for the spine in radians; overrides CREATURE_ANGLE_MARGIN.
    #[arg(long, global = true)]
    angle_margin: Option<f64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Simulate the example creature and stream snapshots to stdout.
    Run(RunArgs),
    /// Print the example creature's shape as JSON.
    Topology,
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Ticks to simulate for generated paths; ignored with --input.
    #[arg(long, default_value_t = 600)]
    ticks: u64,

    #[arg(long, value_enum, default_value_t = PathKind::Circle)]
    path: PathKind,

    /// JSON-lines pointer samples (`-` for stdin) instead of a generated path.
    #[arg(long, env = "CREATURE_INPUT")]
    input: Option<PathBuf>,

    /// Emit a snapshot every N ticks; the last tick is always emitted.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    every: u64,

    /// Seed for the wander path.
    #[arg(long, env = "CREATURE_SEED", default_value_t = 0)]
    seed: u64,

    /// Generated samples leave the head in place.
    #[arg(long)]
    no_follow: bool,

    #[arg(long, default_value_t = 400.0)]
    center_x: f64,

    #[arg(long, default_value_t = 300.0)]
    center_y: f64,

    #[arg(long, default_value_t = 200.0)]
    radius: f64,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum PathKind {
    Circle,
    FigureEight,
    Wander,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let level = match cli.verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt().with_writer(io::stderr).with_max_level(level).init();

    let mut config = CreatureConfig::from_env()?;
    if cli.angle_margin.is_some() {
        config.angle_margin = cli.angle_margin;
        config.validate()?;
    }

    match cli.command {
        Command::Run(args) => run(&config, &args),
        Command::Topology => print_topology(&config),
    }
}

fn run(config: &CreatureConfig, args: &RunArgs) -> Result<(), CliError> {
    let mut world = World::new(Body::example(config));
    let stdout = io::stdout();
    let mut out = stdout.lock();

    tracing::info!(path = ?args.path, input = ?args.input, ticks = args.ticks, every = args.every, "simulation starting");
    let summary = match &args.input {
        Some(path) if path.as_os_str() == "-" => {
            world.run(pointer::read_samples(io::stdin().lock()), args.every, &mut out)?
        }
        Some(path) => {
            let file = File::open(path).map_err(|source| CliError::OpenInput { path: path.clone(), source })?;
            world.run(pointer::read_samples(BufReader::new(file)), args.every, &mut out)?
        }
        None => {
            let samples = generated_path(args).take(ticks_to_take(args.ticks)).map(Ok);
            world.run(samples, args.every, &mut out)?
        }
    };
    tracing::info!(
        ticks = summary.ticks,
        emitted = summary.emitted,
        last_tick = world.tick(),
        head = ?world.body().head(),
        "simulation finished"
    );
    Ok(())
}

fn generated_path(args: &RunArgs) -> Pointer {
    let center = Point::new(args.center_x, args.center_y);
    let pointer = match args.path {
        PathKind::Circle => Pointer::circle(center, args.radius),
        PathKind::FigureEight => Pointer::figure_eight(center, args.radius),
        PathKind::Wander => Pointer::wander(center, args.radius, args.seed),
    };
    pointer.following(!args.no_follow)
}

fn ticks_to_take(ticks: u64) -> usize {
    usize::try_from(ticks).unwrap_or(usize::MAX)
}

fn print_topology(config: &CreatureConfig) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(&Topology::of(&Body::example(config)))?;
    println!("{rendered}");
    Ok(())
}
