//! Report format selection and shared metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Output formats for the report renderers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    /// Resolve from TTY state: summary on a terminal, JSON when piped.
    Auto,
    /// Machine-readable JSON with a metadata envelope.
    Json,
    /// Flat quotation rows for spreadsheet import.
    Csv,
    /// Aligned plain-text tables.
    Summary,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Auto => "auto",
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Summary => "summary",
        };
        f.write_str(name)
    }
}

/// Envelope metadata attached to generated reports.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    pub tool: &'static str,
    pub version: &'static str,
    pub generated_at: DateTime<Utc>,
    /// Price share of the composite score, 0-100.
    pub price_weight_percent: i32,
}

impl ReportMetadata {
    pub fn new(price_weight_percent: i32) -> Self {
        Self {
            tool: "bidmaster",
            version: env!("CARGO_PKG_VERSION"),
            generated_at: Utc::now(),
            price_weight_percent,
        }
    }

    /// The weight split as a display string, e.g. `70/30`.
    pub fn weight_label(&self) -> String {
        format!(
            "{}/{}",
            self.price_weight_percent,
            100 - self.price_weight_percent
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_display_names() {
        assert_eq!(ReportFormat::Auto.to_string(), "auto");
        assert_eq!(ReportFormat::Json.to_string(), "json");
        assert_eq!(ReportFormat::Csv.to_string(), "csv");
        assert_eq!(ReportFormat::Summary.to_string(), "summary");
    }

    #[test]
    fn test_metadata_weight_label() {
        let meta = ReportMetadata::new(70);
        assert_eq!(meta.weight_label(), "70/30");
        assert_eq!(meta.tool, "bidmaster");
    }
}
