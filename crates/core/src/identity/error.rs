//! RUT validation error types.

use thiserror::Error;

/// Errors that can occur while validating a RUT.
///
/// Both variants are user-correctable and are surfaced as field-level
/// validation messages; invalid values are never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RutError {
    /// The input does not have the shape of a RUT.
    #[error("invalid RUT format: {0}")]
    InvalidFormat(&'static str),

    /// The check character does not match the modulo-11 algorithm.
    #[error("invalid RUT: check digit does not match (expected {expected}, found {found})")]
    InvalidChecksum {
        /// Check character computed from the body.
        expected: char,
        /// Check character supplied by the user.
        found: char,
    },
}
