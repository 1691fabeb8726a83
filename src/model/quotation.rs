//! Supplier quotation types, raw and scored.

use serde::{Deserialize, Serialize};

/// One supplier quotation against a catalog item.
///
/// Referential integrity of `item_code` is NOT enforced upstream; quotations
/// whose code matches no catalog item end up in the orphan group during
/// analysis rather than being dropped. A `price` of zero or below means
/// "invalid/unset" and never participates in price normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quotation {
    /// Stable identifier assigned by the quotation store.
    #[serde(default)]
    pub id: String,
    /// References an [`Item::code`](super::Item); may be a typo.
    pub item_code: String,
    /// Supplier name, used verbatim as an aggregation key.
    pub supplier_name: String,
    /// Brand/origin; empty means unknown.
    #[serde(default)]
    pub brand: String,
    /// Unit price; ≤ 0 is treated as invalid/unset.
    #[serde(default)]
    pub price: f64,
    /// Whether the price includes VAT. Pass-through for display/export.
    #[serde(default)]
    pub vat_included: bool,
    /// Technical evaluation score, expected domain 1-10 but not clamped.
    #[serde(default)]
    pub technical_score: f64,
    /// Optional justification for the technical score.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tech_score_reason: Option<String>,
    /// Free-text notes. Pass-through.
    #[serde(default)]
    pub notes: String,
}

/// A quotation with its derived scores and rank. Never persisted; built
/// fresh on every analysis run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredQuotation {
    #[serde(flatten)]
    pub quote: Quotation,
    /// Normalized price score, 0-10. 10 means group-lowest valid price.
    pub price_score: f64,
    /// `price_score` scaled by the price weight.
    pub weighted_price_score: f64,
    /// `technical_score` scaled by the technical weight.
    pub weighted_tech_score: f64,
    /// Sum of the weighted sub-scores.
    pub total_score: f64,
    /// Dense 1-based rank within the item group; 0 means "not applicable"
    /// (orphan entries).
    pub rank: u32,
    /// True for the single quotation matching the group's positive minimum
    /// price, if any.
    pub is_lowest_price: bool,
}

impl ScoredQuotation {
    /// Wrap a quotation with all score fields zeroed and no rank.
    ///
    /// Used for orphan-group entries, which have no meaningful peer set to
    /// normalize against.
    pub fn zeroed(quote: Quotation) -> Self {
        Self {
            quote,
            price_score: 0.0,
            weighted_price_score: 0.0,
            weighted_tech_score: 0.0,
            total_score: 0.0,
            rank: 0,
            is_lowest_price: false,
        }
    }

    /// True when this quotation won its item group.
    pub fn is_winner(&self) -> bool {
        self.rank == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_quote() -> Quotation {
        Quotation {
            id: "q1".into(),
            item_code: "EQ001".into(),
            supplier_name: "Acme Supply".into(),
            brand: "Contoso".into(),
            price: 1500.0,
            vat_included: true,
            technical_score: 8.0,
            tech_score_reason: None,
            notes: String::new(),
        }
    }

    #[test]
    fn test_quotation_round_trips_camel_case() {
        let json = serde_json::to_string(&sample_quote()).expect("serialize");
        assert!(json.contains("\"itemCode\":\"EQ001\""));
        assert!(json.contains("\"supplierName\":\"Acme Supply\""));
        assert!(json.contains("\"vatIncluded\":true"));

        let back: Quotation = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, sample_quote());
    }

    #[test]
    fn test_scored_quotation_flattens_quote_fields() {
        let scored = ScoredQuotation::zeroed(sample_quote());
        let json = serde_json::to_string(&scored).expect("serialize");
        // Flattened: quote fields sit alongside the derived scores.
        assert!(json.contains("\"itemCode\":\"EQ001\""));
        assert!(json.contains("\"priceScore\":0.0"));
        assert!(json.contains("\"rank\":0"));
    }

    #[test]
    fn test_zeroed_has_no_rank_and_no_lowest_flag() {
        let scored = ScoredQuotation::zeroed(sample_quote());
        assert_eq!(scored.rank, 0);
        assert!(!scored.is_lowest_price);
        assert!(!scored.is_winner());
        assert_eq!(scored.total_score, 0.0);
    }
}
