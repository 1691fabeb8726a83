//! Grouping engine: partition quotations by catalog item.
//!
//! Two-pass claim-then-sweep design: every quotation ends up in exactly one
//! group. Items claim their quotations first; whatever is left over (item
//! codes matching nothing in the catalog) lands in a single orphan group
//! appended after all real groups, so data-entry mistakes are surfaced
//! instead of silently dropped.

use serde::Serialize;

use crate::model::{Item, Quotation, ScoredQuotation};

use super::rank::assign_ranks;
use super::score::{lowest_valid_price, score_quotations, WeightSplit};

/// Display code renderers show for the orphan group.
pub const ORPHAN_CODE: &str = "ERROR";

/// One analysis group: either a real catalog item with its scored
/// quotations, or the synthetic orphan bucket.
///
/// Modeled as a tagged enum so downstream aggregation chooses explicitly
/// what to do with each variant instead of testing for a magic item code.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum AnalysisGroup {
    /// A catalog item with at least one quotation, scored and ranked.
    Real(ItemGroup),
    /// Quotations whose item code matched nothing in the catalog.
    Orphan(OrphanGroup),
}

impl AnalysisGroup {
    /// The scored quotations in this group, regardless of variant.
    pub fn quotes(&self) -> &[ScoredQuotation] {
        match self {
            Self::Real(g) => &g.quotes,
            Self::Orphan(g) => &g.quotes,
        }
    }

    pub fn is_orphan(&self) -> bool {
        matches!(self, Self::Orphan(_))
    }

    /// The real item group, if this is one.
    pub fn as_real(&self) -> Option<&ItemGroup> {
        match self {
            Self::Real(g) => Some(g),
            Self::Orphan(_) => None,
        }
    }
}

/// A catalog item plus its scored, ranked quotations.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemGroup {
    pub item: Item,
    pub quotes: Vec<ScoredQuotation>,
    /// Lowest strictly-positive price in the group; 0.0 when no quotation
    /// carried a valid price.
    pub lowest_price: f64,
}

impl ItemGroup {
    /// The rank-1 quotation. Present for every group the engine emits,
    /// since items without quotations produce no group at all.
    pub fn winner(&self) -> Option<&ScoredQuotation> {
        self.quotes.iter().find(|q| q.rank == 1)
    }
}

/// The synthetic bucket for quotations referencing unknown item codes.
/// All score fields are zero and rank is 0 ("not applicable").
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrphanGroup {
    pub quotes: Vec<ScoredQuotation>,
}

impl OrphanGroup {
    /// Display code for renderers.
    pub fn code(&self) -> &'static str {
        ORPHAN_CODE
    }

    /// Display heading for renderers.
    pub fn name(&self) -> &'static str {
        "WARNING: quotations with unknown item codes"
    }

    /// Display description for renderers.
    pub fn specs(&self) -> &'static str {
        "The quotations below reference item codes that do not exist in the catalog."
    }
}

/// Partition, score and rank a full dataset snapshot.
///
/// For each catalog item with at least one matching quotation, emits a
/// [`AnalysisGroup::Real`] with scored, ranked quotations; items with zero
/// quotations are omitted entirely. Quotations claimed by no item are
/// collected into at most one trailing [`AnalysisGroup::Orphan`] with all
/// score fields zeroed.
///
/// `price_weight_percent` is the price share of the composite score, 0-100;
/// the complementary share goes to the technical score. Out-of-range values
/// are not rejected here (see [`WeightSplit::from_percent`]).
pub fn analyze(
    items: &[Item],
    quotations: &[Quotation],
    price_weight_percent: i32,
) -> Vec<AnalysisGroup> {
    let weights = WeightSplit::from_percent(price_weight_percent);
    let mut groups = Vec::new();
    let mut claimed = vec![false; quotations.len()];

    // Pass 1: each item claims its quotations.
    for item in items {
        let member_idx: Vec<usize> = quotations
            .iter()
            .enumerate()
            .filter(|(_, q)| q.item_code == item.code)
            .map(|(i, _)| i)
            .collect();
        if member_idx.is_empty() {
            continue;
        }

        let members: Vec<Quotation> = member_idx
            .iter()
            .map(|&i| {
                claimed[i] = true;
                quotations[i].clone()
            })
            .collect();

        let lowest_price = lowest_valid_price(&members);
        let mut quotes = score_quotations(&members, weights);
        assign_ranks(&mut quotes);

        groups.push(AnalysisGroup::Real(ItemGroup {
            item: item.clone(),
            quotes,
            lowest_price,
        }));
    }

    // Pass 2: sweep unclaimed quotations into the orphan group.
    let orphans: Vec<ScoredQuotation> = quotations
        .iter()
        .zip(&claimed)
        .filter(|(_, &taken)| !taken)
        .map(|(q, _)| ScoredQuotation::zeroed(q.clone()))
        .collect();

    if !orphans.is_empty() {
        tracing::warn!(
            count = orphans.len(),
            "quotations reference item codes missing from the catalog"
        );
        groups.push(AnalysisGroup::Orphan(OrphanGroup { quotes: orphans }));
    }

    groups
}
