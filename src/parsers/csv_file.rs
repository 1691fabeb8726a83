//! CSV import for item catalogs and quotation lists.
//!
//! Headers match the JSON field names (camelCase), so a spreadsheet exported
//! from the web client's tables round-trips without renaming columns.

use std::path::Path;

use crate::error::{BidError, ErrorContext, Result};
use crate::model::{Item, Quotation};

/// Load an item catalog from a CSV file with an `id,code,name,specs` header
/// (only `code` is required).
pub fn load_items_csv(path: &Path) -> Result<Vec<Item>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .flexible(true)
        .from_path(path)
        .map_err(|e| csv_open_error(path, e))?;

    let mut items = Vec::new();
    for record in reader.deserialize() {
        let item: Item = record
            .map_err(BidError::from)
            .with_context(|| format!("items from {}", path.display()))?;
        items.push(item);
    }
    tracing::debug!(count = items.len(), path = %path.display(), "loaded item catalog");
    Ok(items)
}

/// Load a quotation list from a CSV file with an
/// `id,itemCode,supplierName,brand,price,vatIncluded,technicalScore,...`
/// header.
pub fn load_quotations_csv(path: &Path) -> Result<Vec<Quotation>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .flexible(true)
        .from_path(path)
        .map_err(|e| csv_open_error(path, e))?;

    let mut quotations = Vec::new();
    for record in reader.deserialize() {
        let quote: Quotation = record
            .map_err(BidError::from)
            .with_context(|| format!("quotations from {}", path.display()))?;
        quotations.push(quote);
    }
    tracing::debug!(count = quotations.len(), path = %path.display(), "loaded quotations");
    Ok(quotations)
}

fn csv_open_error(path: &Path, err: csv::Error) -> BidError {
    match err.into_kind() {
        csv::ErrorKind::Io(io) => BidError::io(path, io),
        other => BidError::dataset(
            path.display().to_string(),
            crate::error::DatasetErrorKind::InvalidCsv(format!("{other:?}")),
        ),
    }
}
