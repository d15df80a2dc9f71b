//! Visit report validation rules.
//!
//! A seller submits a [`VisitDraft`] describing one sales visit. Validation
//! is an explicit function returning either a [`ValidatedVisit`] ready for
//! persistence or a list of field-scoped errors, decoupled from any UI
//! concern. The "N/A" sentinel rows for no-sale reports are typed
//! identifiers resolved once at startup ([`Sentinels`]), never per-request
//! name lookups.

pub mod types;
pub mod validation;

#[cfg(test)]
mod tests;

pub use types::{FieldError, Sentinels, ValidatedVisit, VisitDraft};
pub use validation::validate_draft;
