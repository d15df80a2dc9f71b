//! Date-range sales aggregation.
//!
//! This module provides pure business logic for building the aggregated
//! report bundle exported by the spreadsheet and document sinks: visit rows
//! grouped per seller plus global and per-product sell-through statistics.

pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use service::ReportService;
pub use types::*;
