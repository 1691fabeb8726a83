//! Core data model for procurement analysis.
//!
//! Defines the catalog items and supplier quotations the engine consumes,
//! plus the [`Dataset`] container they are loaded into. Wire names are
//! camelCase so datasets exported by the original web client load directly.

mod catalog;
mod dataset;
mod quotation;

pub use catalog::Item;
pub use dataset::Dataset;
pub use quotation::{Quotation, ScoredQuotation};
