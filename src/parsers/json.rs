//! JSON dataset parsing.

use std::path::Path;

use crate::error::{BidError, ErrorContext, Result};
use crate::model::Dataset;

use super::read_file;

/// Parse a combined dataset from a JSON string.
///
/// Accepts the `{ "items": [...], "quotations": [...] }` shape; either list
/// may be absent and defaults to empty, matching a fresh install of the
/// original client.
pub fn parse_dataset_str(content: &str) -> Result<Dataset> {
    serde_json::from_str(content)
        .map_err(BidError::from)
        .context("combined dataset")
}

/// Load a combined dataset from a JSON file.
pub fn load_dataset_json(path: &Path) -> Result<Dataset> {
    let content = read_file(path)?;
    parse_dataset_str(&content).with_context(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_dataset() {
        let json = r#"{
            "items": [
                {"id": "1", "code": "EQ001", "name": "Pump", "specs": "2 kW"}
            ],
            "quotations": [
                {
                    "id": "q1",
                    "itemCode": "EQ001",
                    "supplierName": "Acme",
                    "brand": "Contoso",
                    "price": 1000,
                    "vatIncluded": true,
                    "technicalScore": 8,
                    "techScoreReason": "solid references",
                    "notes": ""
                }
            ]
        }"#;
        let ds = parse_dataset_str(json).expect("parse");
        assert_eq!(ds.items.len(), 1);
        assert_eq!(ds.quotations.len(), 1);
        assert_eq!(
            ds.quotations[0].tech_score_reason.as_deref(),
            Some("solid references")
        );
    }

    #[test]
    fn test_parse_partial_dataset_defaults_empty() {
        let ds = parse_dataset_str(r#"{"items": []}"#).expect("parse");
        assert!(ds.quotations.is_empty());

        let ds = parse_dataset_str("{}").expect("parse");
        assert!(ds.is_empty());
    }

    #[test]
    fn test_parse_invalid_json_is_error() {
        let err = parse_dataset_str("{not json").unwrap_err();
        assert!(err.to_string().contains("dataset"));
    }
}
