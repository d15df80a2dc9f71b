//! Core business logic for Vendra.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `identity` - Chilean RUT validation and normalization
//! - `visit` - Visit report validation rules
//! - `reports` - Date-range sales aggregation and statistics
//! - `export` - Spreadsheet and document export sinks

pub mod export;
pub mod identity;
pub mod reports;
pub mod visit;
