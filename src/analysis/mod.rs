//! Quotation scoring, ranking, grouping and aggregation.
//!
//! This is the core of the crate: pure, synchronous functions over immutable
//! input snapshots. Data flows one direction:
//!
//! ```text
//! catalog + quotations -> analyze() -> Vec<AnalysisGroup>
//!                                         |-> condensed_report()
//!                                         |-> supplier_report() -> filter_supplier_report()
//!                                         '-> brand_report()
//! ```
//!
//! Every call recomputes from scratch — there is no cached or shared state,
//! so the engine is safe to call from anywhere without locking. Realistic
//! inputs are tens to low hundreds of rows; full recomputation is cheap.

mod aggregate;
mod filter;
mod group;
mod rank;
mod score;

pub use aggregate::{
    brand_report, condensed_report, supplier_report, AnnotatedQuote, BrandStats, CondensedRow,
    SupplierStats, WinnerSummary, UNKNOWN_BRAND,
};
pub use filter::{filter_supplier_report, SupplierReportFilter};
pub use group::{analyze, AnalysisGroup, ItemGroup, OrphanGroup, ORPHAN_CODE};
pub use rank::assign_ranks;
pub use score::{lowest_valid_price, round2, score_quotations, WeightSplit};
