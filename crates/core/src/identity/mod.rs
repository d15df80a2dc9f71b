//! Chilean RUT validation and normalization.
//!
//! A RUT is a national identity/tax number made of a numeric body and a
//! modulo-11 check character. Input arrives as free text with arbitrary
//! punctuation; the canonical form stored and compared everywhere else is
//! the normalized uppercase body plus check character.

pub mod error;
pub mod rut;

#[cfg(test)]
mod tests;

pub use error::RutError;
pub use rut::Rut;
