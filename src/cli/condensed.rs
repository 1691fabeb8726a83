//! Condensed command handler.
//!
//! Implements the `condensed` subcommand: one row per catalog item with
//! its winning quotation.

use super::{prepare, ReportOptions};
use crate::analysis::condensed_report;
use crate::pipeline::{exit_codes, write_output};
use anyhow::Result;

/// Run the condensed command, returning the desired exit code.
pub fn run_condensed(options: ReportOptions) -> Result<i32> {
    let prepared = prepare(&options)?;

    let rows = condensed_report(&prepared.groups);
    let output = prepared.renderer.render_condensed(&rows, &prepared.meta)?;
    write_output(&output, &prepared.target, options.quiet)?;

    Ok(exit_codes::SUCCESS)
}
