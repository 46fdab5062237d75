//! gazesmooth CLI — smooth recorded or piped sample streams.
//!
//! Usage:
//!   gazesmooth filter [OPTIONS]   Filter JSON-lines samples from a file or stdin
//!   gazesmooth params [OPTIONS]   Print the effective filter parameters

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use gazesmooth_common::{AppConfig, FilterParams, TimestampUnit};

mod commands;

#[derive(Parser)]
#[command(
    name = "gazesmooth",
    about = "Adaptive One Euro smoothing for jittery gaze and pointer streams",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to $XDG_CONFIG_HOME/gazesmooth/config.json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Per-parameter overrides; unset flags fall back to the config file.
#[derive(Args, Debug)]
struct ParamOverrides {
    /// Nominal sample rate (Hz)
    #[arg(long)]
    frequency: Option<f64>,

    /// Minimum cutoff frequency (Hz)
    #[arg(long)]
    min_cutoff: Option<f64>,

    /// Speed coefficient
    #[arg(long)]
    beta: Option<f64>,

    /// Derivative cutoff frequency (Hz)
    #[arg(long)]
    dcutoff: Option<f64>,
}

impl ParamOverrides {
    fn apply(&self, base: FilterParams) -> FilterParams {
        FilterParams {
            frequency: self.frequency.unwrap_or(base.frequency),
            min_cutoff: self.min_cutoff.unwrap_or(base.min_cutoff),
            beta: self.beta.unwrap_or(base.beta),
            derivative_cutoff: self.dcutoff.unwrap_or(base.derivative_cutoff),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Filter a stream of {"t": .., "value": ..} JSON lines
    Filter {
        /// Input file (reads stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Unit of the "t" field: s|ms|us|ns
        #[arg(long, default_value = "s")]
        unit: TimestampUnit,

        #[command(flatten)]
        params: ParamOverrides,
    },

    /// Print the effective filter parameters as JSON
    Params {
        #[command(flatten)]
        params: ParamOverrides,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load(),
    };

    // Initialize logging
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    gazesmooth_common::logging::init_logging(&config.logging);

    match cli.command {
        Commands::Filter {
            input,
            unit,
            params,
        } => commands::filter::run(input, unit, params.apply(config.filter)),
        Commands::Params { params } => commands::params::run(params.apply(config.filter)),
    }
}
