//! greeks - option Greeks and strategy scenarios from the command line
//!
//! # Commands
//!
//! - `greeks price` - Aggregate Greeks of the configured strategy, per leg
//! - `greeks legs` - The composed legs
//! - `greeks sweep --axis <spot|time|vol|rate>` - 1-D scenario series
//! - `greeks surface --field <greek|pnl>` - Spot × time surface
//! - `greeks check` - Validate and print the effective configuration
//!
//! # Architecture
//!
//! As the **S**ervice layer, this crate loads configuration, initialises
//! logging and hands the parameter set to `pricer_models` and `pricer_risk`.

use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use pricer_models::greeks::GreekKind;
use pricer_risk::scenarios::SweepAxis;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

use commands::{sweep::SweepArgs, Context, OutputFormat};
use config::{GreeksConfig, DEFAULT_CONFIG_PATH};
pub use error::{CliError, Result};

/// Option Greeks and strategy scenario CLI
#[derive(Parser)]
#[command(name = "greeks")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Aggregate Greeks at the base parameters with the per-leg breakdown
    Price,

    /// List the legs composed for the configured strategy
    Legs,

    /// Sweep one axis and report every Greek per comparison series
    Sweep {
        /// Axis to sweep (spot, time, vol, rate)
        #[arg(short, long, default_value = "spot")]
        axis: SweepAxis,

        /// Number of samples (overrides [engine] steps)
        #[arg(short, long)]
        steps: Option<usize>,

        /// Price every sample at expiry
        #[arg(short, long)]
        expiry: bool,

        /// Report values at this position (days for time, percent for vol/rate)
        #[arg(short, long, allow_negative_numbers = true)]
        marker: Option<f64>,
    },

    /// Evaluate one Greek over a spot × time grid
    Surface {
        /// Output field, e.g. delta, gamma or pnl
        #[arg(long, default_value = "pnl")]
        field: GreekKind,

        /// Nodes per axis (overrides [engine] grid_size)
        #[arg(short, long)]
        grid: Option<usize>,
    },

    /// Check and print the effective configuration
    Check,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = GreeksConfig::load_or_default(&cli.config)
        .and_then(GreeksConfig::with_env_override)
        .with_context(|| format!("loading {}", cli.config.display()))?;

    init_tracing(&config, cli.verbose);
    if cli.verbose {
        info!("Verbose mode enabled");
    }
    if !cli.config.exists() {
        info!(path = %cli.config.display(), "config file not found, using defaults");
    }

    config.validate().map_err(CliError::from)?;
    debug!(?config, "effective configuration");

    let ctx = Context {
        config,
        format: cli.format,
    };

    match cli.command {
        Commands::Price => commands::price::run(&ctx),
        Commands::Legs => commands::legs::run(&ctx),
        Commands::Sweep {
            axis,
            steps,
            expiry,
            marker,
        } => commands::sweep::run(
            &ctx,
            SweepArgs {
                axis,
                steps,
                expiry,
                marker,
            },
        ),
        Commands::Surface { field, grid } => commands::surface::run(&ctx, field, grid),
        Commands::Check => commands::check::run(&ctx),
    }?;

    Ok(())
}

/// Logs go to stderr so JSON on stdout stays machine-readable. `RUST_LOG`
/// takes precedence over the configured level.
fn init_tracing(config: &GreeksConfig, verbose: bool) {
    let level = if verbose {
        "debug"
    } else {
        config.engine.log_level().unwrap_or_default().as_filter_str()
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
