//! CSV report generator.
//!
//! Emits the flat quotation rows the original client exported to
//! spreadsheets: one row per quotation with item identity, scores and rank.
//! Quoting is handled by the `csv` writer (RFC 4180).

use super::{ReportFormat, ReportMetadata, ReportRenderer};
use crate::analysis::{AnalysisGroup, BrandStats, CondensedRow, SupplierStats};
use crate::error::{BidError, ReportErrorKind, Result};

/// CSV report generator.
pub struct CsvReporter;

impl CsvReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CsvReporter {
    fn default() -> Self {
        Self::new()
    }
}

fn finish(writer: csv::Writer<Vec<u8>>, view: &str) -> Result<String> {
    let bytes = writer
        .into_inner()
        .map_err(|e| csv_error(view, e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| csv_error(view, e.to_string()))
}

fn csv_error(view: &str, message: String) -> BidError {
    BidError::report(format!("{view} view"), ReportErrorKind::CsvError(message))
}

fn write_record<I, S>(writer: &mut csv::Writer<Vec<u8>>, view: &str, record: I) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<[u8]>,
{
    writer
        .write_record(record)
        .map_err(|e| csv_error(view, e.to_string()))
}

fn vat_label(vat_included: bool) -> &'static str {
    if vat_included { "yes" } else { "no" }
}

impl ReportRenderer for CsvReporter {
    fn render_full(&self, groups: &[AnalysisGroup], _meta: &ReportMetadata) -> Result<String> {
        let view = "full";
        let mut writer = csv::Writer::from_writer(Vec::new());
        write_record(
            &mut writer,
            view,
            [
                "itemCode",
                "itemName",
                "itemSpecs",
                "supplierName",
                "brand",
                "price",
                "vatIncluded",
                "technicalScore",
                "priceScore",
                "totalScore",
                "rank",
            ],
        )?;

        for group in groups {
            let (code, name, specs) = match group {
                AnalysisGroup::Real(g) => {
                    (g.item.code.as_str(), g.item.name.as_str(), g.item.specs.as_str())
                }
                AnalysisGroup::Orphan(g) => (g.code(), g.name(), g.specs()),
            };
            for q in group.quotes() {
                // Orphan rows keep their typo'd item code visible.
                let row_code = if group.is_orphan() {
                    q.quote.item_code.as_str()
                } else {
                    code
                };
                let rank = if q.rank > 0 {
                    q.rank.to_string()
                } else {
                    "N/A".to_string()
                };
                write_record(
                    &mut writer,
                    view,
                    [
                        row_code.to_string(),
                        name.to_string(),
                        specs.to_string(),
                        q.quote.supplier_name.clone(),
                        q.quote.brand.clone(),
                        q.quote.price.to_string(),
                        vat_label(q.quote.vat_included).to_string(),
                        q.quote.technical_score.to_string(),
                        q.price_score.to_string(),
                        q.total_score.to_string(),
                        rank,
                    ],
                )?;
            }
        }
        finish(writer, view)
    }

    fn render_condensed(&self, rows: &[CondensedRow], _meta: &ReportMetadata) -> Result<String> {
        let view = "condensed";
        let mut writer = csv::Writer::from_writer(Vec::new());
        write_record(
            &mut writer,
            view,
            [
                "itemCode",
                "itemName",
                "itemSpecs",
                "winningSupplier",
                "brand",
                "price",
                "totalScore",
            ],
        )?;

        for row in rows {
            match &row.winner {
                Some(w) => write_record(
                    &mut writer,
                    view,
                    [
                        row.item_code.clone(),
                        row.item_name.clone(),
                        row.item_specs.clone(),
                        w.supplier_name.clone(),
                        w.brand.clone(),
                        w.price.to_string(),
                        w.total_score.to_string(),
                    ],
                )?,
                None => write_record(
                    &mut writer,
                    view,
                    [
                        row.item_code.as_str(),
                        row.item_name.as_str(),
                        row.item_specs.as_str(),
                        "no quotation",
                        "",
                        "",
                        "",
                    ],
                )?,
            }
        }
        finish(writer, view)
    }

    fn render_suppliers(&self, stats: &[SupplierStats], _meta: &ReportMetadata) -> Result<String> {
        let view = "suppliers";
        let mut writer = csv::Writer::from_writer(Vec::new());
        write_record(
            &mut writer,
            view,
            [
                "supplierName",
                "itemCode",
                "itemName",
                "itemSpecs",
                "brand",
                "price",
                "vatIncluded",
                "technicalScore",
                "priceScore",
                "totalScore",
                "rank",
                "status",
            ],
        )?;

        for supplier in stats {
            for q in &supplier.quotes {
                let status = if q.quote.is_winner() { "won" } else { "lost" };
                write_record(
                    &mut writer,
                    view,
                    [
                        supplier.name.clone(),
                        q.quote.quote.item_code.clone(),
                        q.item_name.clone(),
                        q.item_specs.clone(),
                        q.quote.quote.brand.clone(),
                        q.quote.quote.price.to_string(),
                        vat_label(q.quote.quote.vat_included).to_string(),
                        q.quote.quote.technical_score.to_string(),
                        q.quote.price_score.to_string(),
                        q.quote.total_score.to_string(),
                        q.quote.rank.to_string(),
                        status.to_string(),
                    ],
                )?;
            }
        }
        finish(writer, view)
    }

    fn render_brands(&self, stats: &[BrandStats], _meta: &ReportMetadata) -> Result<String> {
        let view = "brands";
        let mut writer = csv::Writer::from_writer(Vec::new());
        write_record(
            &mut writer,
            view,
            ["brand", "participations", "wins", "avgPrice"],
        )?;

        for brand in stats {
            write_record(
                &mut writer,
                view,
                [
                    brand.name.clone(),
                    brand.count.to_string(),
                    brand.winning_count.to_string(),
                    brand.avg_price.to_string(),
                ],
            )?;
        }
        finish(writer, view)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Csv
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{analyze, brand_report, condensed_report, supplier_report};
    use crate::model::{Item, Quotation};

    fn quote(item_code: &str, supplier: &str, price: f64, tech: f64) -> Quotation {
        Quotation {
            id: format!("{item_code}-{supplier}"),
            item_code: item_code.into(),
            supplier_name: supplier.into(),
            brand: "Contoso".into(),
            price,
            vat_included: false,
            technical_score: tech,
            tech_score_reason: None,
            notes: String::new(),
        }
    }

    fn fixture() -> Vec<AnalysisGroup> {
        let items = vec![Item::new("EQ001", "Pump, heavy", "2 kW")];
        let quotes = vec![
            quote("EQ001", "Acme", 1000.0, 8.0),
            quote("BAD", "Ghost", 10.0, 5.0),
        ];
        analyze(&items, &quotes, 70)
    }

    #[test]
    fn test_full_csv_has_header_and_all_rows() {
        let out = CsvReporter::new()
            .render_full(&fixture(), &ReportMetadata::new(70))
            .expect("render");
        let lines: Vec<&str> = out.lines().collect();

        assert!(lines[0].starts_with("itemCode,itemName,itemSpecs"));
        // One real quotation plus one orphan row.
        assert_eq!(lines.len(), 3);
        // Comma inside item name must be quoted.
        assert!(lines[1].contains("\"Pump, heavy\""));
        // Orphan row keeps its typo'd code and has no rank.
        assert!(lines[2].starts_with("BAD,"));
        assert!(lines[2].ends_with(",N/A"));
    }

    #[test]
    fn test_supplier_csv_marks_won_and_lost() {
        let groups = fixture();
        let out = CsvReporter::new()
            .render_suppliers(&supplier_report(&groups), &ReportMetadata::new(70))
            .expect("render");
        assert!(out.contains(",won"));
        assert!(!out.contains("Ghost"));
    }

    #[test]
    fn test_condensed_csv() {
        let groups = fixture();
        let out = CsvReporter::new()
            .render_condensed(&condensed_report(&groups), &ReportMetadata::new(70))
            .expect("render");
        assert!(out.contains("Acme"));
        assert!(out.lines().count() == 2);
    }

    #[test]
    fn test_brand_csv() {
        let groups = fixture();
        let out = CsvReporter::new()
            .render_brands(&brand_report(&groups), &ReportMetadata::new(70))
            .expect("render");
        assert!(out.contains("Contoso,1,1,1000"));
    }
}
