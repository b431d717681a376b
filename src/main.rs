//! ADS-B Snapshot CLI
//!
//! Pulls every aircraft position recorded within a small window around a
//! target time out of a readsb trace archive and writes them to CSV.

use adsb_snapshot::commands::{
    display_version, execute_extract, execute_inspect, parse_rfc3339_epoch, validate_args,
    ExtractArgs,
};
use adsb_snapshot::output::{default_output_path, default_traces_path};
use adsb_snapshot::scanner::ErrorPolicy;
use adsb_snapshot::utils::config::{
    DEFAULT_ARCHIVE_ROOT, DEFAULT_DATE, DEFAULT_MAX_PLANES, DEFAULT_TARGET_TIME, MATCH_WINDOW_SECS,
};
use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

/// ADS-B Snapshot - aircraft positions at a point in time
#[derive(Parser, Debug)]
#[command(name = "adsb-snapshot")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Extract positions near a target time into a CSV file
    Extract {
        /// Root directory of the extracted archives
        #[arg(long, default_value = DEFAULT_ARCHIVE_ROOT)]
        archives: PathBuf,

        /// Archive day, as named on disk (e.g. 2025.12.28)
        #[arg(short, long, default_value = DEFAULT_DATE)]
        date: String,

        /// Target time in epoch seconds
        #[arg(short, long, conflicts_with = "at")]
        target_time: Option<f64>,

        /// Target time as an RFC 3339 instant
        #[arg(long)]
        at: Option<String>,

        /// Traces directory (defaults to <archives>/<date>/traces)
        #[arg(long)]
        traces: Option<PathBuf>,

        /// Output CSV (defaults to <archives>/<date>.<target time>.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Stop once more than this many positions are collected
        #[arg(short, long, default_value_t = DEFAULT_MAX_PLANES)]
        max_planes: usize,

        /// Match window half-width in seconds
        #[arg(long, default_value_t = MATCH_WINDOW_SECS)]
        window: f64,

        /// Log and skip unreadable trace files instead of aborting
        #[arg(long)]
        skip_errors: bool,

        /// Write rows while scanning instead of collecting them first
        #[arg(long)]
        stream: bool,
    },

    /// Summarize a single trace file
    Inspect {
        /// Path to a gzip trace file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Extract {
            archives,
            date,
            target_time,
            at,
            traces,
            output,
            max_planes,
            window,
            skip_errors,
            stream,
        } => {
            let target_time = match at {
                Some(at) => parse_rfc3339_epoch(&at)?,
                None => target_time.unwrap_or(DEFAULT_TARGET_TIME),
            };

            let args = ExtractArgs {
                traces_path: traces.unwrap_or_else(|| default_traces_path(&archives, &date)),
                output_csv: output
                    .unwrap_or_else(|| default_output_path(&archives, &date, target_time)),
                target_time,
                max_planes,
                window_secs: window,
                error_policy: if skip_errors {
                    ErrorPolicy::Skip
                } else {
                    ErrorPolicy::Abort
                },
                stream,
            };

            // Validate args first
            validate_args(&args)?;

            execute_extract(args)?;
        }

        Commands::Inspect { file } => {
            execute_inspect(&file)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
