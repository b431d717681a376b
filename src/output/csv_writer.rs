//! CSV export of matched positions.
//!
//! Layout: header `,lat,lon,heading`, then `index,lat,lon,heading` per row.
//! The index starts at 0; a missing heading is written as an empty cell.

use crate::scanner::positions::{Position, PositionSink, Positions};
use crate::utils::config::{CSV_HEADER, TRACES_DIR_NAME};
use crate::utils::error::OutputError;
use csv::WriterBuilder;
use log::{debug, info};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Write a whole result set to a CSV file
///
/// **Public** - main entry point for CSV output
///
/// # Arguments
/// * `positions` - Result set from the scanner
/// * `output_path` - Destination file; parent directories are created
///
/// # Returns
/// Number of data rows written
///
/// # Errors
/// * `OutputError::InvalidPath` - Path is empty, a directory, or its parent cannot be created
/// * `OutputError::WriteFailed` / `OutputError::CsvFailed` - I/O error during write
pub fn write_positions(
    positions: &Positions,
    output_path: impl AsRef<Path>,
) -> Result<usize, OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing {} positions to: {}", positions.len(), output_path.display());

    let mut sink = StagedCsvSink::create(output_path)?;
    for position in positions.iter() {
        sink.push(position)?;
    }
    sink.commit()
}

/// Streaming CSV writer usable as a scan sink
///
/// Rows go out as they are pushed, so a scan never holds all matches.
pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
    rows: usize,
}

impl CsvSink<File> {
    /// Create the output file (and its parent directories) and write the header
    pub fn create(output_path: impl AsRef<Path>) -> Result<Self, OutputError> {
        let output_path = output_path.as_ref();

        validate_path(output_path)?;
        create_parent_dirs(output_path)?;

        let file = File::create(output_path)?;
        Self::new(file)
    }
}

impl<W: Write> CsvSink<W> {
    /// Wrap any writer and emit the header row
    pub fn new(writer: W) -> Result<Self, OutputError> {
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(writer);
        writer.write_record(CSV_HEADER)?;
        Ok(Self { writer, rows: 0 })
    }

    /// Rows written so far, excluding the header
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Flush buffered rows and return the row count
    pub fn finish(mut self) -> Result<usize, OutputError> {
        self.writer.flush()?;
        debug!("CSV complete ({} rows)", self.rows);
        Ok(self.rows)
    }

    /// Flush and hand back the underlying writer
    pub fn into_inner(self) -> Result<W, OutputError> {
        self.writer
            .into_inner()
            .map_err(|e| OutputError::WriteFailed(e.into_error()))
    }
}

impl<W: Write> PositionSink for CsvSink<W> {
    fn push(&mut self, position: Position) -> Result<(), OutputError> {
        self.writer
            .serialize((self.rows, position.lat, position.lon, position.heading))?;
        self.rows += 1;
        Ok(())
    }
}

/// Streaming CSV writer that only replaces its target on `commit`
///
/// Rows go to a temporary file beside the target. Dropping the sink without
/// committing removes that file and leaves any existing output untouched.
pub struct StagedCsvSink {
    staging: NamedTempFile,
    sink: CsvSink<File>,
    target: PathBuf,
}

impl StagedCsvSink {
    pub fn create(output_path: impl AsRef<Path>) -> Result<Self, OutputError> {
        let output_path = output_path.as_ref();

        validate_path(output_path)?;
        create_parent_dirs(output_path)?;

        let dir = match output_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let staging = NamedTempFile::new_in(dir)?;
        let sink = CsvSink::new(staging.reopen()?)?;

        Ok(Self {
            staging,
            sink,
            target: output_path.to_path_buf(),
        })
    }

    pub fn rows(&self) -> usize {
        self.sink.rows()
    }

    /// Flush the rows and move the file into place
    pub fn commit(self) -> Result<usize, OutputError> {
        let rows = self.sink.finish()?;
        self.staging
            .persist(&self.target)
            .map_err(|e| OutputError::WriteFailed(e.error))?;
        debug!("Moved staged CSV to {}", self.target.display());
        Ok(rows)
    }
}

impl PositionSink for StagedCsvSink {
    fn push(&mut self, position: Position) -> Result<(), OutputError> {
        self.sink.push(position)
    }
}

/// `<root>/<date>/traces`
pub fn default_traces_path(archive_root: impl AsRef<Path>, date: &str) -> PathBuf {
    archive_root.as_ref().join(date).join(TRACES_DIR_NAME)
}

/// `<root>/<date>.<target_time>.csv`
///
/// Whole-second target times print without a fractional part.
pub fn default_output_path(
    archive_root: impl AsRef<Path>,
    date: &str,
    target_time: f64,
) -> PathBuf {
    archive_root
        .as_ref()
        .join(format!("{}.{}.csv", date, target_time))
}

/// Validate that output path is writable
///
/// **Public** - also used by the extract command before scanning
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    // Check if we're trying to overwrite a directory
    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Create parent directories if needed
///
/// **Private** - internal helper for CsvSink::create
fn create_parent_dirs(path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }
    Ok(())
}
