use crate::output::{default_output_path, default_traces_path};
use crate::scanner::ErrorPolicy;
use crate::utils::config::{
    DEFAULT_ARCHIVE_ROOT, DEFAULT_DATE, DEFAULT_MAX_PLANES, DEFAULT_TARGET_TIME, MATCH_WINDOW_SECS,
};
use std::path::PathBuf;

/// Arguments for the extract command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ExtractArgs {
    /// Directory of `<subdir>/<trace file>` entries
    pub traces_path: PathBuf,

    /// Output path for the CSV
    pub output_csv: PathBuf,

    /// Center of the match window (epoch seconds)
    pub target_time: f64,

    /// Soft cap on collected positions
    pub max_planes: usize,

    /// Half-width of the match window in seconds
    pub window_secs: f64,

    /// Abort on the first unreadable file, or skip it
    pub error_policy: ErrorPolicy,

    /// Write rows while scanning instead of after
    pub stream: bool,
}

impl Default for ExtractArgs {
    fn default() -> Self {
        Self {
            traces_path: default_traces_path(DEFAULT_ARCHIVE_ROOT, DEFAULT_DATE),
            output_csv: default_output_path(DEFAULT_ARCHIVE_ROOT, DEFAULT_DATE, DEFAULT_TARGET_TIME),
            target_time: DEFAULT_TARGET_TIME,
            max_planes: DEFAULT_MAX_PLANES,
            window_secs: MATCH_WINDOW_SECS,
            error_policy: ErrorPolicy::Abort,
            stream: false,
        }
    }
}
