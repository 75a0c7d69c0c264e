//! Report generation module - rendering parsed logs into documents.
//!
//! This module handles:
//! - The cleaned Markdown build report
//! - The HTML dashboard
//! - The executive Markdown summary
//! - Writing rendered output and JSON export
//!
//! Renderers are pure functions of [`ReportData`](crate::types::ReportData):
//! the same data always renders to the same bytes.
//!
//! # Module Organization
//!
//! - `types` - Report kinds, default output names and rating helpers
//! - `markdown` - Clean Markdown report
//! - `dashboard` - HTML dashboard and HTML escaping
//! - `executive` - Executive summary
//! - `export` - File output and JSON export

mod dashboard;
mod executive;
mod export;
mod markdown;
mod types;

pub use export::{export_json, write_report};
pub use types::ReportKind;
