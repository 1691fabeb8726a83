//! Derived aggregate views over the ranked group list.
//!
//! Three independent read-only projections: winner-per-item (condensed),
//! per-supplier performance, and per-brand participation. All three skip the
//! orphan group — quotations without a real item have no meaningful ranking
//! to aggregate. Map-keyed aggregation uses `IndexMap` so first-seen order
//! is preserved deterministically before the final sort.

use std::cmp::Ordering;

use indexmap::IndexMap;
use serde::Serialize;

use crate::model::ScoredQuotation;

use super::group::AnalysisGroup;

/// Aggregation key used for quotations with an empty brand field.
pub const UNKNOWN_BRAND: &str = "Unknown";

/// A scored quotation annotated with its owning item's display fields, for
/// views that flatten quotations out of their groups.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotatedQuote {
    #[serde(flatten)]
    pub quote: ScoredQuotation,
    pub item_name: String,
    pub item_specs: String,
}

/// One row of the condensed winner-per-item view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CondensedRow {
    pub item_code: String,
    pub item_name: String,
    pub item_specs: String,
    /// The rank-1 quotation. Always present for groups the engine emits;
    /// kept optional so renderers show an explicit "no quotation" marker
    /// rather than trusting that invariant.
    pub winner: Option<WinnerSummary>,
}

/// Winner identity for a condensed row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WinnerSummary {
    pub supplier_name: String,
    pub brand: String,
    pub price: f64,
    pub total_score: f64,
}

/// Per-supplier performance statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierStats {
    pub name: String,
    /// Number of quotations this supplier submitted across all real groups.
    pub total_items: usize,
    /// Quotations that took rank 1 in their group.
    pub wins: usize,
    pub losses: usize,
    /// Sum of quoted prices, invalid (≤ 0) prices included as-is.
    pub total_value: f64,
    /// `wins / total_items * 100`.
    pub win_rate: f64,
    pub quotes: Vec<AnnotatedQuote>,
}

/// Per-brand participation statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandStats {
    pub name: String,
    /// Total participations across all real groups.
    pub count: usize,
    /// Participations that took rank 1.
    pub winning_count: usize,
    /// The winning quotations themselves, annotated for display.
    pub winning_quotes: Vec<AnnotatedQuote>,
    /// Arithmetic mean of the brand's quoted prices. Deliberately unguarded
    /// against zero/invalid prices, so a brand quoting price 0 skews its
    /// average downward. Callers wanting price normalization already have it
    /// in the per-group price scores.
    pub avg_price: f64,
    pub quotes: Vec<AnnotatedQuote>,
}

fn annotate(quote: &ScoredQuotation, name: &str, specs: &str) -> AnnotatedQuote {
    AnnotatedQuote {
        quote: quote.clone(),
        item_name: name.to_string(),
        item_specs: specs.to_string(),
    }
}

/// Condensed winner-per-item view over the real groups.
pub fn condensed_report(groups: &[AnalysisGroup]) -> Vec<CondensedRow> {
    groups
        .iter()
        .filter_map(AnalysisGroup::as_real)
        .map(|g| CondensedRow {
            item_code: g.item.code.clone(),
            item_name: g.item.name.clone(),
            item_specs: g.item.specs.clone(),
            winner: g.winner().map(|w| WinnerSummary {
                supplier_name: w.quote.supplier_name.clone(),
                brand: w.quote.brand.clone(),
                price: w.quote.price,
                total_score: w.total_score,
            }),
        })
        .collect()
}

/// Per-supplier performance view over the real groups.
///
/// Supplier names are used verbatim as keys — no trimming or case folding —
/// so `"Acme Corp"` and `"acme corp "` are distinct suppliers, exactly as
/// they were entered. Sorted by win rate descending, then raw wins
/// descending.
pub fn supplier_report(groups: &[AnalysisGroup]) -> Vec<SupplierStats> {
    let mut map: IndexMap<String, SupplierStats> = IndexMap::new();

    for group in groups.iter().filter_map(AnalysisGroup::as_real) {
        for q in &group.quotes {
            let entry = map
                .entry(q.quote.supplier_name.clone())
                .or_insert_with(|| SupplierStats {
                    name: q.quote.supplier_name.clone(),
                    total_items: 0,
                    wins: 0,
                    losses: 0,
                    total_value: 0.0,
                    win_rate: 0.0,
                    quotes: Vec::new(),
                });
            entry.total_items += 1;
            entry.total_value += q.quote.price;
            if q.is_winner() {
                entry.wins += 1;
            }
            entry
                .quotes
                .push(annotate(q, &group.item.name, &group.item.specs));
        }
    }

    let mut stats: Vec<SupplierStats> = map
        .into_values()
        .map(|mut s| {
            s.losses = s.total_items - s.wins;
            s.win_rate = if s.total_items > 0 {
                (s.wins as f64 / s.total_items as f64) * 100.0
            } else {
                0.0
            };
            s
        })
        .collect();

    stats.sort_by(|a, b| {
        b.win_rate
            .partial_cmp(&a.win_rate)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.wins.cmp(&a.wins))
    });
    stats
}

/// Per-brand participation view over the real groups.
///
/// Empty brands aggregate under [`UNKNOWN_BRAND`]. Brand names, like
/// supplier names, are used verbatim. Sorted by participation count
/// descending; ties keep first-seen order.
pub fn brand_report(groups: &[AnalysisGroup]) -> Vec<BrandStats> {
    let mut map: IndexMap<String, BrandStats> = IndexMap::new();

    for group in groups.iter().filter_map(AnalysisGroup::as_real) {
        for q in &group.quotes {
            let key = if q.quote.brand.is_empty() {
                UNKNOWN_BRAND.to_string()
            } else {
                q.quote.brand.clone()
            };
            let entry = map.entry(key.clone()).or_insert_with(|| BrandStats {
                name: key,
                count: 0,
                winning_count: 0,
                winning_quotes: Vec::new(),
                avg_price: 0.0,
                quotes: Vec::new(),
            });
            entry.count += 1;
            entry
                .quotes
                .push(annotate(q, &group.item.name, &group.item.specs));
            if q.is_winner() {
                entry.winning_count += 1;
                entry
                    .winning_quotes
                    .push(annotate(q, &group.item.name, &group.item.specs));
            }
        }
    }

    let mut stats: Vec<BrandStats> = map
        .into_values()
        .map(|mut b| {
            let sum: f64 = b.quotes.iter().map(|q| q.quote.quote.price).sum();
            b.avg_price = sum / b.count as f64;
            b
        })
        .collect();

    stats.sort_by(|a, b| b.count.cmp(&a.count));
    stats
}
