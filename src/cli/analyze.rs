//! Analyze command handler.
//!
//! Implements the `analyze` subcommand: the full per-item ranking view.

use super::{prepare, ReportOptions};
use crate::pipeline::{exit_codes, write_output};
use anyhow::Result;

/// Analyze command configuration
pub struct AnalyzeConfig {
    pub options: ReportOptions,
    /// Exit non-zero when quotations reference unknown item codes
    pub fail_on_orphans: bool,
}

/// Run the analyze command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
pub fn run_analyze(config: AnalyzeConfig) -> Result<i32> {
    let prepared = prepare(&config.options)?;

    let orphan_count: usize = prepared
        .groups
        .iter()
        .filter(|g| g.is_orphan())
        .map(|g| g.quotes().len())
        .sum();

    let output = prepared
        .renderer
        .render_full(&prepared.groups, &prepared.meta)?;
    write_output(&output, &prepared.target, config.options.quiet)?;

    if config.fail_on_orphans && orphan_count > 0 {
        tracing::error!(
            "{} quotation(s) reference unknown item codes",
            orphan_count
        );
        return Ok(exit_codes::ORPHANS_DETECTED);
    }

    Ok(exit_codes::SUCCESS)
}
