//! Trace scanning: walk the archive tree and select samples near a target time.

pub mod positions;
pub mod walker;

// Re-export main types
pub use positions::{MatchWindow, Position, PositionSink, Positions};
pub use walker::{scan_into, scan_traces, ErrorPolicy, ScanOptions, ScanSummary};
