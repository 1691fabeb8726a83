//! Structural filtering of the supplier performance view.

use super::aggregate::{AnnotatedQuote, SupplierStats};

/// User-chosen narrowing of the supplier view. All active criteria are
/// combined with AND; an empty filter passes everything through.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SupplierReportFilter {
    /// Keep only this supplier (exact name match).
    pub supplier: Option<String>,
    /// Keep only quotations for this item code.
    pub item_code: Option<String>,
    /// Keep only quotations with this brand.
    pub brand: Option<String>,
    /// Keep only quotations holding this rank.
    pub rank: Option<u32>,
}

impl SupplierReportFilter {
    pub fn is_active(&self) -> bool {
        self.supplier.is_some()
            || self.item_code.is_some()
            || self.brand.is_some()
            || self.rank.is_some()
    }

    fn matches_quote(&self, q: &AnnotatedQuote) -> bool {
        let match_item = self
            .item_code
            .as_ref()
            .is_none_or(|code| q.quote.quote.item_code == *code);
        let match_brand = self
            .brand
            .as_ref()
            .is_none_or(|brand| q.quote.quote.brand == *brand);
        let match_rank = self.rank.is_none_or(|rank| q.quote.rank == rank);
        match_item && match_brand && match_rank
    }
}

/// Narrow a supplier report to the suppliers and quotations matching the
/// filter, dropping any supplier whose quote list becomes empty.
///
/// Purely a view: the input aggregate is left untouched and the surviving
/// suppliers keep their original performance statistics (wins, rate, value)
/// computed over the unfiltered data.
pub fn filter_supplier_report(
    report: &[SupplierStats],
    filter: &SupplierReportFilter,
) -> Vec<SupplierStats> {
    report
        .iter()
        .filter(|s| filter.supplier.as_ref().is_none_or(|name| s.name == *name))
        .filter_map(|s| {
            let quotes: Vec<AnnotatedQuote> = s
                .quotes
                .iter()
                .filter(|q| filter.matches_quote(q))
                .cloned()
                .collect();
            if quotes.is_empty() {
                None
            } else {
                Some(SupplierStats {
                    quotes,
                    ..s.clone()
                })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{analyze, supplier_report};
    use crate::model::{Item, Quotation};

    fn fixture_report() -> Vec<SupplierStats> {
        let items = vec![
            Item::new("EQ001", "Pump", ""),
            Item::new("EQ002", "Valve", ""),
        ];
        let quotes = vec![
            Quotation {
                id: "1".into(),
                item_code: "EQ001".into(),
                supplier_name: "Acme".into(),
                brand: "Contoso".into(),
                price: 1000.0,
                vat_included: false,
                technical_score: 8.0,
                tech_score_reason: None,
                notes: String::new(),
            },
            Quotation {
                id: "2".into(),
                item_code: "EQ002".into(),
                supplier_name: "Acme".into(),
                brand: "Fabrikam".into(),
                price: 900.0,
                vat_included: false,
                technical_score: 5.0,
                tech_score_reason: None,
                notes: String::new(),
            },
            Quotation {
                id: "3".into(),
                item_code: "EQ002".into(),
                supplier_name: "Bolt".into(),
                brand: "Fabrikam".into(),
                price: 700.0,
                vat_included: false,
                technical_score: 8.0,
                tech_score_reason: None,
                notes: String::new(),
            },
        ];
        supplier_report(&analyze(&items, &quotes, 70))
    }

    #[test]
    fn test_empty_filter_passes_everything() {
        let report = fixture_report();
        let filter = SupplierReportFilter::default();
        assert!(!filter.is_active());

        let out = filter_supplier_report(&report, &filter);
        assert_eq!(out, report);
    }

    #[test]
    fn test_supplier_selection() {
        let report = fixture_report();
        let filter = SupplierReportFilter {
            supplier: Some("Acme".into()),
            ..Default::default()
        };
        let out = filter_supplier_report(&report, &filter);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Acme");
        assert_eq!(out[0].quotes.len(), 2);
    }

    #[test]
    fn test_conjunctive_item_and_rank() {
        let report = fixture_report();
        let filter = SupplierReportFilter {
            item_code: Some("EQ002".into()),
            rank: Some(1),
            ..Default::default()
        };
        let out = filter_supplier_report(&report, &filter);
        // Only Bolt won EQ002; Acme's EQ002 quote is rank 2 and its EQ001
        // quote fails the item criterion, so Acme drops out entirely.
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Bolt");
        assert_eq!(out[0].quotes.len(), 1);
    }

    #[test]
    fn test_brand_filter() {
        let report = fixture_report();
        let filter = SupplierReportFilter {
            brand: Some("Contoso".into()),
            ..Default::default()
        };
        let out = filter_supplier_report(&report, &filter);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Acme");
        assert_eq!(out[0].quotes.len(), 1);
        assert_eq!(out[0].quotes[0].quote.quote.item_code, "EQ001");
    }

    #[test]
    fn test_stats_survive_filtering_unchanged() {
        let report = fixture_report();
        let filter = SupplierReportFilter {
            item_code: Some("EQ001".into()),
            ..Default::default()
        };
        let out = filter_supplier_report(&report, &filter);
        let acme = &out[0];
        // Performance numbers still describe the unfiltered aggregate.
        assert_eq!(acme.total_items, 2);
        assert_eq!(acme.quotes.len(), 1);
    }

    #[test]
    fn test_input_not_mutated() {
        let report = fixture_report();
        let before = report.clone();
        let filter = SupplierReportFilter {
            rank: Some(99),
            ..Default::default()
        };
        let out = filter_supplier_report(&report, &filter);
        assert!(out.is_empty());
        assert_eq!(report, before);
    }
}
