//! Per-quotation score calculation.
//!
//! Given one item's quotations and a price/technical weight split, computes a
//! normalized price score, the weighted sub-scores, and the composite total
//! for every quotation. Pure and deterministic; rounding is applied once at
//! every derived step so repeated recomputation cannot drift.

use serde::Serialize;

use crate::model::{Quotation, ScoredQuotation};

/// Complementary price/technical weight pair. Always sums to 1.0 when built
/// through [`WeightSplit::from_percent`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightSplit {
    /// Weight applied to the normalized price score.
    pub price: f64,
    /// Weight applied to the raw technical score.
    pub tech: f64,
}

impl WeightSplit {
    /// Split an integer percent (price share, 0-100) into the complementary
    /// weight pair.
    ///
    /// No range check happens here: a percent outside 0-100 produces
    /// mathematically consistent but likely meaningless weights. Validating
    /// operator input is the caller's job (the CLI clamps at parse time).
    pub fn from_percent(price_weight_percent: i32) -> Self {
        Self {
            price: f64::from(price_weight_percent) / 100.0,
            tech: f64::from(100 - price_weight_percent) / 100.0,
        }
    }
}

impl Default for WeightSplit {
    /// The 70/30 price/technical split the original evaluation sheet used.
    fn default() -> Self {
        Self::from_percent(70)
    }
}

/// Round to 2 decimal places, half away from zero.
///
/// Applied exactly once at each derived-score step; callers must not
/// re-round already-rounded values.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Lowest strictly-positive price in a quotation set, or 0.0 when no
/// quotation carries a valid price.
pub fn lowest_valid_price(quotes: &[Quotation]) -> f64 {
    let lowest = quotes
        .iter()
        .map(|q| q.price)
        .filter(|p| *p > 0.0)
        .fold(f64::INFINITY, f64::min);
    if lowest.is_finite() { lowest } else { 0.0 }
}

/// Score every quotation in one item group against the group's lowest valid
/// price.
///
/// The group-minimum price scores 10 on price; higher prices score
/// proportionally lower, never above 10 and never negative. A price ≤ 0
/// scores 0 and can never carry the lowest-price flag. The technical score
/// flows through unclamped; validating its 1-10 domain belongs to data
/// entry, not here.
///
/// Ranks are NOT assigned here; see [`assign_ranks`](super::assign_ranks).
pub fn score_quotations(quotes: &[Quotation], weights: WeightSplit) -> Vec<ScoredQuotation> {
    let lowest_price = lowest_valid_price(quotes);

    quotes
        .iter()
        .map(|q| {
            let price_score_raw = if q.price > 0.0 && lowest_price > 0.0 {
                (lowest_price / q.price) * 10.0
            } else {
                0.0
            };
            let price_score = round2(price_score_raw);
            let weighted_price_score = round2(price_score * weights.price);
            let weighted_tech_score = round2(q.technical_score * weights.tech);
            let total_score = round2(weighted_price_score + weighted_tech_score);

            ScoredQuotation {
                quote: q.clone(),
                price_score,
                weighted_price_score,
                weighted_tech_score,
                total_score,
                rank: 0,
                is_lowest_price: q.price == lowest_price && q.price > 0.0,
            }
        })
        .collect()
}
