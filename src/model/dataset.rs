//! Dataset container: one catalog snapshot plus one quotation snapshot.

use serde::{Deserialize, Serialize};

use super::{Item, Quotation};

/// An immutable input snapshot for one analysis run.
///
/// The engine never mutates a dataset; recomputation on changed weights or
/// data is a fresh call over a fresh snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub quotations: Vec<Quotation>,
}

impl Dataset {
    pub fn new(items: Vec<Item>, quotations: Vec<Quotation>) -> Self {
        Self { items, quotations }
    }

    /// True when there is nothing to analyze at all.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.quotations.is_empty()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn quotation_count(&self) -> usize {
        self.quotations.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_dataset() {
        let ds = Dataset::default();
        assert!(ds.is_empty());
        assert_eq!(ds.item_count(), 0);
        assert_eq!(ds.quotation_count(), 0);
    }

    #[test]
    fn test_dataset_parses_combined_json() {
        let json = r#"{
            "items": [{"code": "EQ001", "name": "Pump", "specs": ""}],
            "quotations": [{
                "itemCode": "EQ001",
                "supplierName": "Acme",
                "price": 100.0,
                "technicalScore": 7
            }]
        }"#;
        let ds: Dataset = serde_json::from_str(json).expect("parse dataset");
        assert_eq!(ds.item_count(), 1);
        assert_eq!(ds.quotation_count(), 1);
        assert_eq!(ds.quotations[0].technical_score, 7.0);
        assert!(!ds.quotations[0].vat_included);
    }
}
