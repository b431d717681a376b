//! ADS-B Snapshot
//!
//! Extracts aircraft positions (latitude, longitude, heading) near a
//! fixed instant from a day of readsb per-aircraft trace archives, and
//! writes them to CSV.
//!
//! The archive layout is `<root>/<date>/traces/<subdir>/<trace file>`,
//! where every trace file is gzip-compressed JSON.
//!
//! ## Getting Started
//!
//! ```bash
//! adsb-snapshot extract --date 2025.12.28 --at 2025-12-28T12:00:00Z
//! adsb-snapshot --help
//! ```
//!
//! Library users can call [`scanner::scan_traces`] directly, or
//! [`scanner::scan_into`] with a [`output::CsvSink`] to stream matches.

pub mod commands;
pub mod output;
pub mod parser;
pub mod scanner;
pub mod utils;
