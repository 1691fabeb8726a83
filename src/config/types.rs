//! Configuration type definitions.

use crate::error::{BidError, Result};
use crate::reports::ReportFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Scoring configuration
    pub analysis: AnalysisConfig,
    /// Output preferences
    pub output: OutputConfig,
}

/// Scoring configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Price weight percentage (0-100); technical weight is the remainder
    pub default_weight_percent: i32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            default_weight_percent: 70,
        }
    }
}

/// Output preferences
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Default report format
    pub format: ReportFormat,
    /// Default output file
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::Auto,
            file: None,
            no_color: false,
        }
    }
}

impl AppConfig {
    /// Validate all configuration values.
    pub fn validate(&self) -> Result<()> {
        let weight = self.analysis.default_weight_percent;
        if !(0..=100).contains(&weight) {
            return Err(BidError::config(format!(
                "analysis.default_weight_percent must be between 0 and 100, got {weight}"
            )));
        }
        Ok(())
    }
}
