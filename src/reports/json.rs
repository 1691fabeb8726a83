//! JSON report generator.
//!
//! Wraps each view's serializable output in a small metadata envelope (tool,
//! version, timestamp, weight split) so consumers can tell reports apart
//! without out-of-band context.

use serde::Serialize;
use serde_json::json;

use super::{ReportFormat, ReportMetadata, ReportRenderer};
use crate::analysis::{AnalysisGroup, BrandStats, CondensedRow, SupplierStats};
use crate::error::{BidError, ReportErrorKind, Result};

/// JSON report generator.
pub struct JsonReporter;

impl JsonReporter {
    pub fn new() -> Self {
        Self
    }

    fn envelope<T: Serialize>(
        &self,
        view: &str,
        payload: &T,
        meta: &ReportMetadata,
    ) -> Result<String> {
        let doc = json!({
            "meta": meta,
            "view": view,
            "data": payload,
        });
        serde_json::to_string_pretty(&doc).map_err(|e| {
            BidError::report(
                format!("{view} view"),
                ReportErrorKind::JsonSerializationError(e.to_string()),
            )
        })
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRenderer for JsonReporter {
    fn render_full(&self, groups: &[AnalysisGroup], meta: &ReportMetadata) -> Result<String> {
        self.envelope("full", &groups, meta)
    }

    fn render_condensed(&self, rows: &[CondensedRow], meta: &ReportMetadata) -> Result<String> {
        self.envelope("condensed", &rows, meta)
    }

    fn render_suppliers(&self, stats: &[SupplierStats], meta: &ReportMetadata) -> Result<String> {
        self.envelope("suppliers", &stats, meta)
    }

    fn render_brands(&self, stats: &[BrandStats], meta: &ReportMetadata) -> Result<String> {
        self.envelope("brands", &stats, meta)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}
