//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod extract;
pub mod inspect;
pub mod models;
pub mod utils;

// Re-export main command functions
pub use extract::{execute_extract, validate_args};
pub use inspect::execute_inspect;
pub use models::ExtractArgs;
pub use utils::{describe_epoch, display_version, parse_rfc3339_epoch};
