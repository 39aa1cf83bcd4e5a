//! qhash Command-Line Interface
//!
//! Computes quantum-inspired digests and inspects the circuit behind them.
//!
//! ```text
//! qhash hash --text hello --bits 64
//! qhash circuit --demo
//! qhash histogram --text hi --shots 2048
//! qhash avalanche hello hellp
//! ```

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::style;
use qhash::SamplingStrategy;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

use commands::common::InputArgs;
use commands::{avalanche, circuit, hash, histogram, version};
use config::{CliConfig, LoggingConfig};

/// qhash - quantum-inspired digests from a simulated circuit
#[derive(Parser)]
#[command(name = "qhash")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (YAML); defaults to $QHASH_CONFIG
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the digest of an input
    Hash {
        #[command(flatten)]
        input: InputArgs,

        /// Digest width in bits (multiple of 8, at most 256)
        #[arg(short, long)]
        bits: Option<u32>,

        /// Outcome selection (seeded, most-probable)
        #[arg(short, long)]
        sampling: Option<SamplingStrategy>,

        /// Also print the register width and selected outcome
        #[arg(long)]
        trace: bool,
    },

    /// Draw the hashing circuit for an input
    Circuit {
        #[command(flatten)]
        input: InputArgs,

        /// Draw the 4-qubit demonstration circuit instead
        #[arg(long, conflicts_with = "input")]
        demo: bool,
    },

    /// Sample measurement outcomes and print a histogram
    Histogram {
        #[command(flatten)]
        input: InputArgs,

        /// Use the 4-qubit demonstration circuit instead
        #[arg(long, conflicts_with = "input")]
        demo: bool,

        /// Number of shots
        #[arg(short, long, default_value = "1024")]
        shots: u32,

        /// Seed for the shot sampler (random if omitted)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Compare the digests of two inputs bit by bit
    Avalanche {
        /// First input
        a: String,

        /// Second input
        b: String,

        /// Treat both inputs as hex-encoded bytes
        #[arg(long)]
        hex: bool,

        /// Digest width in bits (multiple of 8, at most 256)
        #[arg(short, long)]
        bits: Option<u32>,

        /// Outcome selection (seeded, most-probable)
        #[arg(short, long)]
        sampling: Option<SamplingStrategy>,
    },

    /// Show version information
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = CliConfig::load(cli.config.as_deref())?;
    init_logging(cli.verbose, &config.logging);
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Hash {
            input,
            bits,
            sampling,
            trace,
        } => {
            let bytes = input.load()?;
            hash::execute(&bytes, config.hash_with(bits, sampling), trace)
        }

        Commands::Circuit { input, demo } => {
            let bytes = if demo { None } else { Some(input.load()?) };
            circuit::execute(bytes.as_deref())
        }

        Commands::Histogram {
            input,
            demo,
            shots,
            seed,
        } => {
            let bytes = if demo { None } else { Some(input.load()?) };
            histogram::execute(bytes.as_deref(), shots, seed)
        }

        Commands::Avalanche {
            a,
            b,
            hex,
            bits,
            sampling,
        } => avalanche::execute(&a, &b, hex, config.hash_with(bits, sampling)),

        Commands::Version => {
            version::execute();
            Ok(())
        }
    }
}

/// Install the global subscriber; `-v` flags override the configured level.
fn init_logging(verbose: u8, logging: &LoggingConfig) {
    let filter = match verbose {
        0 => logging.level.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr);

    if logging.format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
