//! Brands command handler.
//!
//! Implements the `brands` subcommand: quotation counts, wins and average
//! price per brand.

use super::{prepare, ReportOptions};
use crate::analysis::brand_report;
use crate::pipeline::{exit_codes, write_output};
use anyhow::Result;

/// Run the brands command, returning the desired exit code.
pub fn run_brands(options: ReportOptions) -> Result<i32> {
    let prepared = prepare(&options)?;

    let stats = brand_report(&prepared.groups);
    let output = prepared.renderer.render_brands(&stats, &prepared.meta)?;
    write_output(&output, &prepared.target, options.quiet)?;

    Ok(exit_codes::SUCCESS)
}
