//! Walk a `traces/<subdir>/<file>` tree and collect samples near a target time.
//!
//! Traversal follows whatever order the filesystem reports: subdirectories,
//! then files within each, then records within each file. Nothing is sorted.

use super::positions::{MatchWindow, Position, PositionSink, Positions};
use crate::parser::read_trace_file;
use crate::utils::config::{DEFAULT_MAX_PLANES, MATCH_WINDOW_SECS};
use crate::utils::error::ScanError;
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// What to do when a subdirectory or trace file cannot be read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// First failure ends the scan
    #[default]
    Abort,
    /// Log the failure, count it and move on
    Skip,
}

/// Parameters for a scan
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanOptions {
    pub window: MatchWindow,

    /// Soft cap: the scan stops as soon as more than this many matches are held
    pub max_planes: usize,

    pub error_policy: ErrorPolicy,
}

impl ScanOptions {
    pub fn new(target_time: f64) -> Self {
        Self {
            window: MatchWindow::new(target_time, MATCH_WINDOW_SECS),
            max_planes: DEFAULT_MAX_PLANES,
            error_policy: ErrorPolicy::default(),
        }
    }

    pub fn with_window_secs(mut self, tolerance: f64) -> Self {
        self.window.tolerance = tolerance;
        self
    }

    pub fn with_max_planes(mut self, max_planes: usize) -> Self {
        self.max_planes = max_planes;
        self
    }

    pub fn with_error_policy(mut self, error_policy: ErrorPolicy) -> Self {
        self.error_policy = error_policy;
        self
    }
}

/// Counters describing a finished scan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Subdirectories whose listing succeeded
    pub directories: usize,
    pub directories_skipped: usize,

    /// Trace files read and parsed
    pub files: usize,
    pub files_skipped: usize,

    /// Records examined against the window
    pub records: usize,

    /// Positions handed to the sink
    pub matches: usize,

    /// True when the scan stopped early on the soft cap
    pub capped: bool,
}

impl ScanSummary {
    pub fn summary(&self) -> String {
        format!(
            "Matches: {}{} | Files: {} ({} skipped) | Dirs: {} ({} skipped) | Records: {}",
            self.matches,
            if self.capped { " (capped)" } else { "" },
            self.files,
            self.files_skipped,
            self.directories,
            self.directories_skipped,
            self.records
        )
    }
}

/// Collect positions near `target_time` with the default window and abort-on-error
///
/// **Public** - main entry point for callers that want the whole result in memory
///
/// # Arguments
/// * `traces_path` - Directory whose children are subdirectories of trace files
/// * `target_time` - Epoch seconds at the center of the match window
/// * `max_planes` - Soft cap; up to `max_planes + 1` positions may be returned
///
/// # Errors
/// Any unreadable directory or trace file, including records shorter than six fields
pub fn scan_traces(
    traces_path: impl AsRef<Path>,
    target_time: f64,
    max_planes: usize,
) -> Result<Positions, ScanError> {
    let options = ScanOptions::new(target_time).with_max_planes(max_planes);
    let mut positions = Positions::new();
    scan_into(traces_path, &options, &mut positions)?;
    Ok(positions)
}

/// Scan a traces tree, pushing every match into `sink`
///
/// **Public** - lets callers stream matches straight to an output
///
/// Returns as soon as the number of matches exceeds `options.max_planes`,
/// leaving the rest of the current file and tree unread.
pub fn scan_into<S>(
    traces_path: impl AsRef<Path>,
    options: &ScanOptions,
    sink: &mut S,
) -> Result<ScanSummary, ScanError>
where
    S: PositionSink + ?Sized,
{
    let traces_path = traces_path.as_ref();
    let window = options.window;
    let mut summary = ScanSummary::default();

    debug!(
        "Scanning {} for samples within {}s of {}",
        traces_path.display(),
        window.tolerance,
        window.center
    );

    // The root listing is fatal under every policy
    for subdir in list_dir(traces_path)? {
        let files = match list_dir(&subdir) {
            Ok(files) => files,
            Err(err) if options.error_policy == ErrorPolicy::Skip => {
                warn!("Skipping directory: {}", err);
                summary.directories_skipped += 1;
                continue;
            }
            Err(err) => return Err(err),
        };
        summary.directories += 1;

        for path in files {
            let trace = match read_trace_file(&path) {
                Ok(trace) => trace,
                Err(err) if options.error_policy == ErrorPolicy::Skip => {
                    warn!("Skipping trace file: {}", err);
                    summary.files_skipped += 1;
                    continue;
                }
                Err(err) => return Err(err.into()),
            };
            summary.files += 1;

            for record in &trace.trace {
                summary.records += 1;

                if !window.contains(record.absolute_time(trace.timestamp)) {
                    continue;
                }

                sink.push(Position::from(record))?;
                summary.matches += 1;

                if summary.matches > options.max_planes {
                    summary.capped = true;
                    info!(
                        "Collected {} positions (cap {}), stopping early at {}",
                        summary.matches,
                        options.max_planes,
                        path.display()
                    );
                    return Ok(summary);
                }
            }
        }
    }

    debug!("Scan complete: {}", summary.summary());
    Ok(summary)
}

/// List a directory's immediate children in filesystem order
///
/// **Private** - internal helper for scan_into
fn list_dir(path: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let read_dir_error = |source: std::io::Error| ScanError::ReadDir {
        path: path.to_path_buf(),
        source,
    };

    fs::read_dir(path)
        .map_err(read_dir_error)?
        .map(|entry| entry.map(|e| e.path()).map_err(read_dir_error))
        .collect()
}
