//! Pipeline orchestration for quotation analysis.
//!
//! Shared load → analyze → report plumbing used by the CLI command
//! handlers, reducing duplication between the four report commands.

mod load;
mod output;

pub use load::{load_input, DatasetSource};
pub use output::{auto_detect_format, should_use_color, write_output, OutputTarget};

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success
    pub const SUCCESS: i32 = 0;
    /// Orphan quotations were detected and --fail-on-orphans was set
    pub const ORPHANS_DETECTED: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 3;
}
