//! Report generation over engine output.
//!
//! Each renderer turns one of the four analysis views (full, condensed,
//! supplier, brand) into a string in its format:
//! - JSON: structured data for programmatic integration
//! - CSV: flat rows for spreadsheet import
//! - Summary: aligned tables for terminals
//!
//! Renderers are pure projections; they never recompute scores.

mod csv_out;
mod json;
mod summary;
mod types;

pub use csv_out::CsvReporter;
pub use json::JsonReporter;
pub use summary::SummaryReporter;
pub use types::{ReportFormat, ReportMetadata};

use crate::analysis::{AnalysisGroup, BrandStats, CondensedRow, SupplierStats};
use crate::error::{BidError, Result};

/// Trait for report renderers. One method per analysis view.
pub trait ReportRenderer {
    /// Full per-item ranking view, orphan group included.
    fn render_full(&self, groups: &[AnalysisGroup], meta: &ReportMetadata) -> Result<String>;

    /// Condensed winner-per-item view.
    fn render_condensed(&self, rows: &[CondensedRow], meta: &ReportMetadata) -> Result<String>;

    /// Supplier performance view (possibly pre-filtered).
    fn render_suppliers(&self, stats: &[SupplierStats], meta: &ReportMetadata) -> Result<String>;

    /// Brand/origin view.
    fn render_brands(&self, stats: &[BrandStats], meta: &ReportMetadata) -> Result<String>;

    /// The format this renderer produces.
    fn format(&self) -> ReportFormat;
}

/// Look up the renderer for a concrete format.
///
/// `Auto` must be resolved (see [`crate::pipeline::auto_detect_format`])
/// before calling this.
pub fn renderer_for(format: ReportFormat, use_color: bool) -> Result<Box<dyn ReportRenderer>> {
    match format {
        ReportFormat::Json => Ok(Box::new(JsonReporter::new())),
        ReportFormat::Csv => Ok(Box::new(CsvReporter::new())),
        ReportFormat::Summary => {
            let reporter = SummaryReporter::new();
            let reporter = if use_color {
                reporter
            } else {
                reporter.no_color()
            };
            Ok(Box::new(reporter))
        }
        ReportFormat::Auto => Err(BidError::report(
            "renderer lookup",
            crate::error::ReportErrorKind::UnsupportedFormat(
                "auto must be resolved against the output target first".into(),
            ),
        )),
    }
}
