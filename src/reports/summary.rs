//! Summary report generator for shell output.
//!
//! Provides compact, human-readable tables for terminal usage.

use super::{ReportFormat, ReportMetadata, ReportRenderer};
use crate::analysis::{AnalysisGroup, BrandStats, CondensedRow, SupplierStats};
use crate::error::Result;

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn header(&self, title: &str, meta: &ReportMetadata) -> Vec<String> {
        vec![
            self.color(title, "bold"),
            format!(
                "{}  price/technical {}",
                self.color("Weights:", "cyan"),
                meta.weight_label()
            ),
            self.color("─".repeat(80).as_str(), "dim"),
        ]
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRenderer for SummaryReporter {
    fn render_full(&self, groups: &[AnalysisGroup], meta: &ReportMetadata) -> Result<String> {
        let mut lines = self.header("Quotation Analysis", meta);

        for group in groups {
            lines.push(String::new());
            match group {
                AnalysisGroup::Real(g) => {
                    lines.push(format!(
                        "{} {} {}",
                        self.color(&g.item.code, "bold"),
                        truncate(&g.item.name, 40),
                        self.color(&truncate(&g.item.specs, 30), "dim")
                    ));
                }
                AnalysisGroup::Orphan(g) => {
                    lines.push(self.color(g.name(), "yellow"));
                }
            }

            lines.push(format!(
                "  {:<5} {:<24} {:<16} {:>10} {:>6} {:>7}",
                self.color("RANK", "bold"),
                self.color("SUPPLIER", "bold"),
                self.color("BRAND", "bold"),
                self.color("PRICE", "bold"),
                self.color("TECH", "bold"),
                self.color("TOTAL", "bold")
            ));

            for q in group.quotes() {
                let rank = if q.rank > 0 {
                    format!("#{}", q.rank)
                } else {
                    "-".to_string()
                };
                let rank = if q.rank == 1 {
                    self.color(&rank, "green")
                } else {
                    rank
                };
                lines.push(format!(
                    "  {:<5} {:<24} {:<16} {:>10.2} {:>6.1} {:>7.2}",
                    rank,
                    truncate(&q.quote.supplier_name, 24),
                    truncate(&q.quote.brand, 16),
                    q.quote.price,
                    q.quote.technical_score,
                    q.total_score
                ));
            }
        }

        let orphan_count: usize = groups
            .iter()
            .filter(|g| g.is_orphan())
            .map(|g| g.quotes().len())
            .sum();
        if orphan_count > 0 {
            lines.push(String::new());
            lines.push(self.color(
                &format!(
                    "{orphan_count} quotation{} could not be matched to a catalog item",
                    if orphan_count == 1 { "" } else { "s" }
                ),
                "yellow",
            ));
        }

        Ok(lines.join("\n"))
    }

    fn render_condensed(&self, rows: &[CondensedRow], meta: &ReportMetadata) -> Result<String> {
        let mut lines = self.header("Winning Quotations", meta);

        lines.push(format!(
            "{:<8} {:<32} {:<24} {:>10} {:>7}",
            self.color("ITEM", "bold"),
            self.color("NAME", "bold"),
            self.color("WINNER", "bold"),
            self.color("PRICE", "bold"),
            self.color("SCORE", "bold")
        ));

        for row in rows {
            match &row.winner {
                Some(w) => lines.push(format!(
                    "{:<8} {:<32} {:<24} {:>10.2} {:>7.2}",
                    row.item_code,
                    truncate(&row.item_name, 32),
                    truncate(&w.supplier_name, 24),
                    w.price,
                    w.total_score
                )),
                None => lines.push(format!(
                    "{:<8} {:<32} {}",
                    row.item_code,
                    truncate(&row.item_name, 32),
                    self.color("no quotation", "dim")
                )),
            }
        }

        Ok(lines.join("\n"))
    }

    fn render_suppliers(&self, stats: &[SupplierStats], meta: &ReportMetadata) -> Result<String> {
        let mut lines = self.header("Supplier Performance", meta);

        lines.push(format!(
            "{:<24} {:>6} {:>6} {:>6} {:>9} {:>14}",
            self.color("SUPPLIER", "bold"),
            self.color("ITEMS", "bold"),
            self.color("WON", "bold"),
            self.color("LOST", "bold"),
            self.color("WIN %", "bold"),
            self.color("TOTAL VALUE", "bold")
        ));

        for supplier in stats {
            let win_rate = format!("{:.1}%", supplier.win_rate);
            let win_rate = if supplier.win_rate >= 50.0 {
                self.color(&win_rate, "green")
            } else {
                win_rate
            };
            lines.push(format!(
                "{:<24} {:>6} {:>6} {:>6} {:>9} {:>14.2}",
                truncate(&supplier.name, 24),
                supplier.total_items,
                supplier.wins,
                supplier.losses,
                win_rate,
                supplier.total_value
            ));
        }

        Ok(lines.join("\n"))
    }

    fn render_brands(&self, stats: &[BrandStats], meta: &ReportMetadata) -> Result<String> {
        let mut lines = self.header("Brand Breakdown", meta);

        lines.push(format!(
            "{:<24} {:>8} {:>6} {:>12}",
            self.color("BRAND", "bold"),
            self.color("QUOTES", "bold"),
            self.color("WINS", "bold"),
            self.color("AVG PRICE", "bold")
        ));

        for brand in stats {
            lines.push(format!(
                "{:<24} {:>8} {:>6} {:>12.2}",
                truncate(&brand.name, 24),
                brand.count,
                brand.winning_count,
                brand.avg_price
            ));
        }

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}

/// Truncate a string to fit within `max_len` (UTF-8 safe)
fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else if max_len > 3 {
        let end = floor_char_boundary(s, max_len - 3);
        format!("{}...", &s[..end])
    } else {
        let end = floor_char_boundary(s, max_len);
        s[..end].to_string()
    }
}

/// Find the largest byte index <= `index` that is a valid UTF-8 char boundary.
const fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{analyze, supplier_report};
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
        let items = vec![Item::new("EQ001", "Pump", "2 kW")];
        let quotes = vec![
            quote("EQ001", "Acme", 1000.0, 8.0),
            quote("EQ001", "Bolt", 1200.0, 9.0),
            quote("BAD", "Ghost", 10.0, 5.0),
        ];
        analyze(&items, &quotes, 70)
    }

    #[test]
    fn test_full_summary_plain_text() {
        let out = SummaryReporter::new()
            .no_color()
            .render_full(&fixture(), &ReportMetadata::new(70))
            .expect("render");
        assert!(out.contains("Quotation Analysis"));
        assert!(out.contains("price/technical 70/30"));
        assert!(out.contains("EQ001"));
        assert!(out.contains("#1"));
        assert!(out.contains("could not be matched"));
        assert!(!out.contains('\x1b'));
    }

    #[test]
    fn test_colored_output_contains_ansi() {
        let out = SummaryReporter::new()
            .render_full(&fixture(), &ReportMetadata::new(70))
            .expect("render");
        assert!(out.contains('\x1b'));
    }

    #[test]
    fn test_supplier_table() {
        let groups = fixture();
        let out = SummaryReporter::new()
            .no_color()
            .render_suppliers(&supplier_report(&groups), &ReportMetadata::new(70))
            .expect("render");
        assert!(out.contains("Supplier Performance"));
        assert!(out.contains("Acme"));
        assert!(out.contains("100.0%"));
        assert!(!out.contains("Ghost"));
    }

    #[test]
    fn test_truncate_keeps_short_strings() {
        assert_eq!(truncate("pump", 10), "pump");
        assert_eq!(truncate("a very long item name", 10), "a very ...");
    }
}
