//! **A library for scoring, ranking and reporting procurement quotations.**
//!
//! `bidmaster` takes a catalog of items and the supplier quotations received
//! for them, scores every quotation on a weighted price/technical split,
//! ranks competing quotations per item, and aggregates the results into
//! supplier, brand and winner views. It powers both a command-line interface
//! (CLI) and a Rust library for programmatic integration.
//!
//! ## Key Features
//!
//! - **Weighted Scoring**: Composite scores from a configurable price/technical
//!   split (default 70/30), with the cheapest valid offer setting the price
//!   baseline per item.
//! - **Per-Item Ranking**: Quotations compete only against quotations for the
//!   same catalog item; ties keep their input order.
//! - **Orphan Detection**: Quotations referencing unknown item codes are never
//!   dropped silently; they surface in a dedicated group.
//! - **Aggregated Views**: Winner-per-item, per-supplier win rates, and brand
//!   participation statistics.
//! - **Flexible Reporting**: JSON, CSV and terminal-friendly summary output.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: The input data shapes ([`Item`], [`Quotation`]) and the
//!   scored output shape ([`ScoredQuotation`]).
//! - **[`analysis`]**: The engine. [`analysis::analyze`] turns items and
//!   quotations into ranked [`analysis::AnalysisGroup`]s; the aggregate
//!   functions project those groups into the condensed, supplier and brand
//!   views.
//! - **[`parsers`]**: JSON and CSV dataset loading.
//! - **[`pipeline`]**: Shared load/output plumbing used by the CLI handlers.
//! - **[`reports`]**: Renderers that turn analysis views into output strings.
//!
//! ## Getting Started
//!
//! ```no_run
//! use bidmaster::analysis::{analyze, condensed_report};
//! use bidmaster::parsers::load_dataset;
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dataset = load_dataset(Path::new("tender.json"))?;
//!     let groups = analyze(&dataset.items, &dataset.quotations, 70);
//!
//!     for row in condensed_report(&groups) {
//!         match &row.winner {
//!             Some(w) => println!("{}: {} at {:.2}", row.item_code, w.supplier_name, w.price),
//!             None => println!("{}: no quotation received", row.item_code),
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Cast safety: usize↔f64 casts in the scoring math are bounded in practice
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    // Doc completeness: # Errors sections are aspirational
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod parsers;
pub mod pipeline;
pub mod reports;

// Re-export main types for convenience
pub use analysis::{analyze, AnalysisGroup, WeightSplit};
pub use config::AppConfig;
pub use error::{BidError, ErrorContext, Result};
pub use model::{Dataset, Item, Quotation, ScoredQuotation};
pub use parsers::load_dataset;
pub use reports::ReportFormat;
