//! Inspect command: summarize a single trace file.

use super::utils::describe_epoch;
use crate::parser::read_trace_file;
use anyhow::{Context, Result};
use std::path::Path;

/// Print what a trace file contains
///
/// **Public** - called from main.rs
pub fn execute_inspect(file_path: &Path) -> Result<()> {
    println!("Inspecting trace: {}", file_path.display());

    let trace = read_trace_file(file_path).context("Failed to read trace file")?;

    println!("✓ Valid trace file");
    println!("  ICAO: {}", trace.icao.as_deref().unwrap_or("-"));
    println!("  Base time: {}", describe_epoch(trace.timestamp));
    println!("  Records: {}", trace.trace.len());

    if let Some((first, last)) = trace.offset_span() {
        println!(
            "  Span: {} .. {}",
            describe_epoch(trace.timestamp + first),
            describe_epoch(trace.timestamp + last)
        );
        let missing_heading = trace.trace.iter().filter(|r| r.heading.is_none()).count();
        println!("  Records without heading: {}", missing_heading);
    }

    Ok(())
}
