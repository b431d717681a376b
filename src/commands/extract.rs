//! Extract command implementation.
//!
//! The extract command:
//! 1. Walks the traces tree and selects samples near the target time
//! 2. Writes the matches to CSV

use super::models::ExtractArgs;
use super::utils::describe_epoch;
use crate::output::{validate_path, write_positions, StagedCsvSink};
use crate::scanner::{scan_into, Positions, ScanOptions, ScanSummary};
use anyhow::{Context, Result};
use log::{info, warn};
use std::time::Instant;

/// Execute the extract command
///
/// **Public** - main entry point called from main.rs
///
/// # Arguments
/// * `args` - Extract command arguments
///
/// # Returns
/// Counters from the scan
///
/// # Errors
/// * Unreadable traces tree or trace file (unless skipping)
/// * CSV write errors
pub fn execute_extract(args: ExtractArgs) -> Result<ScanSummary> {
    let start_time = Instant::now();

    info!("Extracting positions at {}", describe_epoch(args.target_time));
    info!("Traces: {}", args.traces_path.display());

    let options = ScanOptions::new(args.target_time)
        .with_window_secs(args.window_secs)
        .with_max_planes(args.max_planes)
        .with_error_policy(args.error_policy);

    let summary = if args.stream {
        info!("Step 1/1: Scanning traces, streaming to {}...", args.output_csv.display());
        // Rows land in a staged file; a failed scan leaves the old output alone
        let mut sink = StagedCsvSink::create(&args.output_csv)
            .context("Failed to create output CSV")?;
        let summary = scan_into(&args.traces_path, &options, &mut sink)
            .context("Failed to scan traces")?;
        sink.commit().context("Failed to finish output CSV")?;
        summary
    } else {
        info!("Step 1/2: Scanning traces...");
        let mut positions = Positions::new();
        let summary = scan_into(&args.traces_path, &options, &mut positions)
            .context("Failed to scan traces")?;

        info!("Step 2/2: Writing output file...");
        write_positions(&positions, &args.output_csv)
            .context("Failed to write positions CSV")?;
        summary
    };

    info!("{}", summary.summary());
    if summary.files_skipped + summary.directories_skipped > 0 {
        warn!(
            "{} files and {} directories could not be read",
            summary.files_skipped, summary.directories_skipped
        );
    }
    info!("✓ Positions written to: {}", args.output_csv.display());

    let elapsed = start_time.elapsed();
    info!("Extract completed in {:.2}s", elapsed.as_secs_f64());

    Ok(summary)
}

/// Validate extract arguments
///
/// **Public** - called before executing the command
pub fn validate_args(args: &ExtractArgs) -> Result<()> {
    if !args.target_time.is_finite() {
        anyhow::bail!("Target time must be a finite number of seconds");
    }

    if !args.window_secs.is_finite() || args.window_secs <= 0.0 {
        anyhow::bail!("Match window must be a positive number of seconds");
    }

    if !args.traces_path.is_dir() {
        anyhow::bail!(
            "Traces directory does not exist: {}",
            args.traces_path.display()
        );
    }

    validate_path(&args.output_csv).context("Invalid output path")?;

    Ok(())
}
