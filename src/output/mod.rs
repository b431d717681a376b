//! Output writers for extracted positions.
//!
//! Positions are written as CSV, either from an in-memory result set or
//! streamed row by row while the scan runs.

pub mod csv_writer;

// Re-export main functions
pub use csv_writer::{
    default_output_path, default_traces_path, validate_path, write_positions, CsvSink,
    StagedCsvSink,
};
