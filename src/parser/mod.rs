//! Trace file parsing and schema definitions.
//!
//! This module handles:
//! - Decompressing gzip trace archives
//! - Parsing the JSON payload
//! - Naming the positional record fields

pub mod schema;
pub mod trace_file;

// Re-export main types
pub use schema::{TraceFile, TraceRecord};
pub use trace_file::{parse_trace, read_trace_file};
