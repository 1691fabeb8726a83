//! Rank assignment over a scored item group.

use std::cmp::Ordering;

use crate::model::ScoredQuotation;

/// Sort a scored group by total score descending and assign dense 1-based
/// ranks.
///
/// Ties are not collapsed: two quotations sharing a total score receive
/// distinct consecutive ranks. The sort is stable, so equal-score quotations
/// keep their input (insertion) order; the earlier-submitted quotation takes
/// the better rank. That tie-break carries no business meaning of its own,
/// it is simply the deterministic choice this tool guarantees.
pub fn assign_ranks(quotes: &mut [ScoredQuotation]) {
    quotes.sort_by(|a, b| {
        b.total_score
            .partial_cmp(&a.total_score)
            .unwrap_or(Ordering::Equal)
    });
    for (idx, q) in quotes.iter_mut().enumerate() {
        q.rank = (idx + 1) as u32;
    }
}
