//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand
//! and returns the desired process exit code.

mod analyze;
mod brands;
mod condensed;
mod suppliers;

pub use analyze::{run_analyze, AnalyzeConfig};
pub use brands::run_brands;
pub use condensed::run_condensed;
pub use suppliers::{run_suppliers, SuppliersConfig};

use crate::analysis::AnalysisGroup;
use crate::model::Dataset;
use crate::pipeline::{
    auto_detect_format, load_input, should_use_color, DatasetSource, OutputTarget,
};
use crate::reports::{renderer_for, ReportFormat, ReportMetadata, ReportRenderer};
use anyhow::Result;
use std::path::PathBuf;

/// Options shared by every report command.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Where the dataset comes from
    pub source: DatasetSource,
    /// Price weight percentage (0-100)
    pub weight_percent: i32,
    /// Requested output format (possibly Auto)
    pub format: ReportFormat,
    /// Output file, or stdout when absent
    pub output_file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
    /// Suppress informational logging
    pub quiet: bool,
}

/// Everything a command handler needs after the shared stages ran.
struct PreparedReport {
    groups: Vec<AnalysisGroup>,
    meta: ReportMetadata,
    renderer: Box<dyn ReportRenderer>,
    target: OutputTarget,
}

/// Run the shared load → analyze → renderer-selection stages.
fn prepare(options: &ReportOptions) -> Result<PreparedReport> {
    let dataset = load_input(&options.source, options.quiet)?;
    let Dataset { items, quotations } = dataset;

    let groups = crate::analysis::analyze(&items, &quotations, options.weight_percent);

    let target = OutputTarget::from_option(options.output_file.clone());
    let format = auto_detect_format(options.format, &target);
    let use_color = should_use_color(options.no_color) && target.is_terminal();
    let renderer = renderer_for(format, use_color)?;

    Ok(PreparedReport {
        groups,
        meta: ReportMetadata::new(options.weight_percent),
        renderer,
        target,
    })
}
