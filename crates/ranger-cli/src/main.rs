//! `ranger` command line entry point.

use std::path::PathBuf;

use anyhow::{ensure, Context, Result};
use clap::{Parser, Subcommand};
use ranger_cli::{
    build_map, check_map, render_map, run_simulation, MapFormat, RangerConfig, CONFIG_FILE,
};
use ranger_world::MapGenerator;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Procedural park maps and headless patrol sessions
#[derive(Parser, Debug)]
#[command(name = "ranger", version, about, long_about = None)]
struct Cli {
    /// Path to the config file
    #[arg(long, global = true, default_value = CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a park map and print it to stdout
    Map {
        /// Map seed (overrides the config; random when neither is set)
        #[arg(long)]
        seed: Option<u32>,

        /// Output format
        #[arg(long, value_enum, default_value_t = MapFormat::Ascii)]
        format: MapFormat,

        /// Fail unless the camp is reachable from the spawn
        #[arg(long)]
        check: bool,
    },

    /// Play a session on autopilot and print the result
    Simulate {
        /// Map seed (overrides the config)
        #[arg(long)]
        seed: Option<u32>,

        /// Seconds to simulate
        #[arg(long, default_value_t = 60.0)]
        seconds: f32,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write the current configuration to the config path
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn init_tracing(config: &RangerConfig) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(config.log_directive()))?;
    let registry = tracing_subscriber::registry().with(filter);
    if config.log_json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let loaded = RangerConfig::load_from(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    init_tracing(&loaded.config)?;
    info!("ranger {}", env!("CARGO_PKG_VERSION"));
    loaded.log();
    let config = loaded.config;

    match cli.command {
        Command::Map {
            seed,
            format,
            check,
        } => print_map(&config, seed.or(config.seed), format, check),
        Command::Simulate {
            seed,
            seconds,
            json,
        } => {
            let mut session = config.session.clone();
            if let Some(seed) = seed.or(config.seed) {
                session.map_seed = seed;
            }
            let report = run_simulation(session, MapGenerator::new(config.generator), seconds);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
                return Ok(());
            }
            println!("seed:      {}", report.seed);
            println!("time:      {:.1}s", report.seconds);
            println!("score:     {}", report.score);
            println!("completed: {}", report.completed);
            println!("escapes:   {}", report.escapes);
            if report.lost {
                println!("Poachers prevailed...");
            }
            Ok(())
        },
        Command::InitConfig { force } => {
            ensure!(
                force || !cli.config.exists(),
                "{} already exists (use --force to overwrite)",
                cli.config.display()
            );
            config.save_to(&cli.config)?;
            println!("wrote {}", cli.config.display());
            Ok(())
        },
    }
}

fn print_map(config: &RangerConfig, seed: Option<u32>, format: MapFormat, check: bool) -> Result<()> {
    let map = build_map(config, seed);
    println!("{}", render_map(&map, format)?);
    if check {
        check_map(&map)?;
    }
    Ok(())
}
