//! Dataset loading from JSON and CSV files.
//!
//! JSON is the native shape (the original client's local-storage export,
//! camelCase field names); CSV covers hand-maintained spreadsheets of items
//! or quotations. Format is detected from the file extension.

mod csv_file;
mod json;

pub use csv_file::{load_items_csv, load_quotations_csv};
pub use json::{load_dataset_json, parse_dataset_str};

use std::path::Path;

use crate::error::{BidError, ErrorContext, Result};
use crate::model::{Dataset, Item, Quotation};

/// Supported dataset file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    Json,
    Csv,
}

/// Detect a dataset file's format from its extension.
pub fn detect_format(path: &Path) -> Result<DatasetFormat> {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("json") => Ok(DatasetFormat::Json),
        Some("csv") => Ok(DatasetFormat::Csv),
        _ => Err(BidError::unknown_format(path.display().to_string())),
    }
}

/// Load a combined dataset (items + quotations) from a single JSON file.
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    match detect_format(path)? {
        DatasetFormat::Json => load_dataset_json(path),
        DatasetFormat::Csv => Err(BidError::validation(format!(
            "{}: a combined dataset must be JSON; load CSV items and quotations separately",
            path.display()
        ))),
    }
}

/// Load an item catalog from a JSON array or CSV file.
pub fn load_items(path: &Path) -> Result<Vec<Item>> {
    match detect_format(path)? {
        DatasetFormat::Json => {
            let content = read_file(path)?;
            serde_json::from_str(&content)
                .map_err(BidError::from)
                .with_context(|| format!("items from {}", path.display()))
        }
        DatasetFormat::Csv => load_items_csv(path),
    }
}

/// Load a quotation list from a JSON array or CSV file.
pub fn load_quotations(path: &Path) -> Result<Vec<Quotation>> {
    match detect_format(path)? {
        DatasetFormat::Json => {
            let content = read_file(path)?;
            serde_json::from_str(&content)
                .map_err(BidError::from)
                .with_context(|| format!("quotations from {}", path.display()))
        }
        DatasetFormat::Csv => load_quotations_csv(path),
    }
}

pub(crate) fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| BidError::io(path, e))
}
