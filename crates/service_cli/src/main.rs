//! tbill-rates - Treasury bill discount rates from the daily rate feed
//!
//! Fetches the most recent daily Treasury bill quote and interpolates a
//! discount rate for any maturity date.
//!
//! # Commands
//!
//! - `tbill-rates` / `tbill-rates schedule` - Print the quote and a daily discount schedule
//! - `tbill-rates quote` - Print the latest quote
//! - `tbill-rates discount --date <date>` - Discount for one maturity date
//! - `tbill-rates price --face-value <f> --maturity <date>` - Value a bill
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate wires the feed adapter
//! (`adapter_feeds`) to the rate engine (`rates_core`).

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rates_core::types::Date;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

use commands::quote::OutputFormat;
use config::CliConfig;
pub use error::{CliError, Result};

/// Treasury bill discount rate CLI
#[derive(Parser)]
#[command(name = "tbill-rates")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (defaults apply when it does not exist)
    #[arg(short, long, global = true, default_value = "tbill-rates.toml")]
    config: PathBuf,

    /// Read the feed from a local XML file instead of HTTP
    #[arg(long, global = true)]
    feed_file: Option<PathBuf>,

    /// Reference date (YYYY-MM-DD), defaults to today
    #[arg(long, global = true)]
    as_of: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the quote and the discount for each upcoming day
    Schedule {
        /// Number of days to print
        #[arg(short, long)]
        days: Option<u32>,

        /// Fractional digits for each rate
        #[arg(short, long)]
        precision: Option<usize>,
    },

    /// Print the latest quote
    Quote {
        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Interpolated discount for one maturity date
    Discount {
        /// Maturity date (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,
    },

    /// Discount rate and current value of a bill
    Price {
        /// Face value of the bill
        #[arg(short, long)]
        face_value: f64,

        /// Maturity date (YYYY-MM-DD)
        #[arg(short, long)]
        maturity: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = CliConfig::load_or_default(&cli.config)?.with_env_override()?;
    config.validate()?;

    // Initialise tracing; RUST_LOG takes precedence over the configured level
    let level = if cli.verbose {
        "debug".to_string()
    } else {
        config.log_level.to_lowercase()
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .init();

    debug!(?config, "Loaded configuration");

    let as_of = match cli.as_of.as_deref() {
        Some(s) => Date::parse(s)?,
        None => Date::today(),
    };
    info!("Reference date: {}", as_of);

    let curve = commands::load_curve(&config, cli.feed_file.as_deref(), as_of)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let outcome = match cli.command {
        None => commands::schedule::run(&mut out, &curve, config.schedule_days, config.precision),
        Some(Commands::Schedule { days, precision }) => {
            let days = days.unwrap_or(config.schedule_days);
            let precision = precision.unwrap_or(config.precision);
            commands::schedule::check_bounds(days, precision)?;
            commands::schedule::run(&mut out, &curve, days, precision)
        }
        Some(Commands::Quote { format }) => {
            let format: OutputFormat = format.parse()?;
            commands::quote::run(&mut out, curve.quote(), format)
        }
        Some(Commands::Discount { date }) => {
            let target = Date::parse(&date)?;
            commands::discount::run(&mut out, &curve, target, config.precision)
        }
        Some(Commands::Price {
            face_value,
            maturity,
        }) => {
            let maturity = Date::parse(&maturity)?;
            commands::price::run(&mut out, &curve, face_value, maturity, config.precision)
        }
    };
    outcome?;

    out.flush()?;
    Ok(())
}
