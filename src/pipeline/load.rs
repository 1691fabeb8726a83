//! Dataset loading pipeline.
//!
//! Resolves the CLI input flavors (one combined JSON file, or separate
//! item and quotation files) into a single `Dataset`.

use crate::model::Dataset;
use crate::parsers;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Where the dataset comes from
#[derive(Debug, Clone)]
pub enum DatasetSource {
    /// A single JSON file holding both items and quotations
    Combined(PathBuf),
    /// Separate item and quotation files (JSON or CSV each)
    Split { items: PathBuf, quotes: PathBuf },
}

impl DatasetSource {
    /// Resolve the CLI arguments into a source, rejecting ambiguous combinations.
    pub fn resolve(
        data: Option<PathBuf>,
        items: Option<PathBuf>,
        quotes: Option<PathBuf>,
    ) -> Result<Self> {
        match (data, items, quotes) {
            (Some(path), None, None) => Ok(DatasetSource::Combined(path)),
            (None, Some(items), Some(quotes)) => Ok(DatasetSource::Split { items, quotes }),
            (Some(_), _, _) => anyhow::bail!(
                "a combined dataset file cannot be mixed with --items/--quotes"
            ),
            (None, _, _) => anyhow::bail!(
                "provide a dataset file, or both --items and --quotes"
            ),
        }
    }
}

/// Load a dataset with context for error messages
pub fn load_input(source: &DatasetSource, quiet: bool) -> Result<Dataset> {
    let dataset = match source {
        DatasetSource::Combined(path) => {
            if !quiet {
                tracing::info!("Loading dataset: {:?}", path);
            }
            parsers::load_dataset(path)
                .with_context(|| format!("Failed to load dataset: {}", path.display()))?
        }
        DatasetSource::Split { items, quotes } => {
            if !quiet {
                tracing::info!("Loading items: {:?}, quotations: {:?}", items, quotes);
            }
            let items = parsers::load_items(items)
                .with_context(|| format!("Failed to load items: {}", items.display()))?;
            let quotations = parsers::load_quotations(quotes)
                .with_context(|| format!("Failed to load quotations: {}", quotes.display()))?;
            Dataset::new(items, quotations)
        }
    };

    if !quiet {
        tracing::info!(
            "Loaded {} items, {} quotations",
            dataset.item_count(),
            dataset.quotation_count()
        );
    }

    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_resolve_combined() {
        let source = DatasetSource::resolve(Some(PathBuf::from("data.json")), None, None)
            .expect("resolve");
        assert!(matches!(source, DatasetSource::Combined(_)));
    }

    #[test]
    fn test_resolve_split() {
        let source = DatasetSource::resolve(
            None,
            Some(PathBuf::from("items.csv")),
            Some(PathBuf::from("quotes.csv")),
        )
        .expect("resolve");
        assert!(matches!(source, DatasetSource::Split { .. }));
    }

    #[test]
    fn test_resolve_rejects_mixed_inputs() {
        let result = DatasetSource::resolve(
            Some(PathBuf::from("data.json")),
            Some(PathBuf::from("items.csv")),
            None,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_resolve_rejects_missing_quotes() {
        let result = DatasetSource::resolve(None, Some(PathBuf::from("items.csv")), None);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_combined_json() {
        let mut file = tempfile::Builder::new()
            .suffix(".json")
            .tempfile()
            .expect("tempfile");
        write!(
            file,
            r#"{{"items":[{{"id":"EQ001","code":"EQ001","name":"Pump","specs":""}}],"quotations":[]}}"#
        )
        .expect("write");

        let source = DatasetSource::Combined(file.path().to_path_buf());
        let dataset = load_input(&source, true).expect("load");
        assert_eq!(dataset.item_count(), 1);
        assert_eq!(dataset.quotation_count(), 0);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let source = DatasetSource::Combined(PathBuf::from("/nonexistent/data.json"));
        assert!(load_input(&source, true).is_err());
    }
}
