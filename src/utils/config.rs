//! Configuration and constants for the CLI.

/// Root directory holding extracted daily archives
pub const DEFAULT_ARCHIVE_ROOT: &str = "data/archives";

/// Archive day to scan, as named by the readsb archive tarballs
pub const DEFAULT_DATE: &str = "2025.12.28";

/// Default snapshot instant (epoch seconds)
pub const DEFAULT_TARGET_TIME: f64 = 1_754_051_908.0;

/// Soft cap on collected positions; scanning stops once it is exceeded
pub const DEFAULT_MAX_PLANES: usize = 1000;

/// Half-width of the match window around the target time, in seconds
pub const MATCH_WINDOW_SECS: f64 = 1.0;

/// Subdirectory of a daily archive that holds the per-aircraft traces
pub const TRACES_DIR_NAME: &str = "traces";

// Trace records are positional: 0 = offset, 1 = lat, 2 = lon, 5 = heading (track)
// Anything shorter cannot yield a position
pub const MIN_RECORD_FIELDS: usize = 6;

/// CSV header; the leading empty column is the row index
pub const CSV_HEADER: [&str; 4] = ["", "lat", "lon", "heading"];
