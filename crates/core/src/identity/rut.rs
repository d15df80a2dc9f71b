//! Canonical RUT type and the modulo-11 validation algorithm.

use serde::Serialize;

use super::error::RutError;

/// Minimum normalized length (e.g. `1.000.000-1` -> `10000001`).
const MIN_LEN: usize = 8;
/// Maximum normalized length (e.g. `99.999.999-9` -> `999999999`).
const MAX_LEN: usize = 9;

/// A validated, normalized Chilean RUT.
///
/// The canonical form is the uppercase digits-only body followed by the
/// check character (`0`-`9` or `K`), 8 or 9 characters total. This is the
/// form used for storage and uniqueness comparisons.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Rut {
    canonical: String,
}

impl Rut {
    /// Validates and normalizes a RUT from free-text input.
    ///
    /// Strips `.` and `-`, trims whitespace and uppercases before checking
    /// the length, the numeric body and the modulo-11 check character.
    ///
    /// # Errors
    ///
    /// Returns [`RutError::InvalidFormat`] when the normalized input is not
    /// 8-9 characters or the body is not numeric, and
    /// [`RutError::InvalidChecksum`] when the check character is wrong.
    pub fn parse(raw: &str) -> Result<Self, RutError> {
        let normalized: String = raw.trim().replace(['.', '-'], "").to_uppercase();

        // All later checks index by byte; non-ASCII input can never be valid.
        if !normalized.is_ascii() {
            return Err(RutError::InvalidFormat(
                "must contain only digits and the check character",
            ));
        }
        if normalized.len() < MIN_LEN {
            return Err(RutError::InvalidFormat("too short (minimum 1 million)"));
        }
        if normalized.len() > MAX_LEN {
            return Err(RutError::InvalidFormat("exceeds the allowed length"));
        }

        let (body, check) = normalized.split_at(normalized.len() - 1);
        if !body.bytes().all(|b| b.is_ascii_digit()) {
            return Err(RutError::InvalidFormat("body must contain only digits"));
        }

        // split_at(len - 1) guarantees exactly one remaining character
        let found = check.chars().next().unwrap_or('0');
        let expected = expected_check_char(body);
        if found != expected {
            return Err(RutError::InvalidChecksum { expected, found });
        }

        Ok(Self {
            canonical: normalized,
        })
    }

    /// Validates an optional RUT field.
    ///
    /// Empty or whitespace-only input succeeds with `None`; the caller
    /// decides whether emptiness is acceptable in its context.
    ///
    /// # Errors
    ///
    /// Same as [`Rut::parse`] for non-empty input.
    pub fn parse_optional(raw: &str) -> Result<Option<Self>, RutError> {
        if raw.trim().is_empty() {
            return Ok(None);
        }
        Self::parse(raw).map(Some)
    }

    /// Returns the canonical normalized form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.canonical
    }

    /// Returns the numeric body (all but the check character).
    #[must_use]
    pub fn body(&self) -> &str {
        &self.canonical[..self.canonical.len() - 1]
    }

    /// Returns the check character.
    #[must_use]
    pub fn check_char(&self) -> char {
        self.canonical.chars().next_back().unwrap_or('0')
    }

    /// Consumes the RUT, returning the canonical string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.canonical
    }
}

impl std::fmt::Display for Rut {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.canonical)
    }
}

/// Computes the expected check character for a numeric body.
///
/// Digits are walked least-significant first, each multiplied by the cyclic
/// weight sequence 2,3,4,5,6,7,2,3,... The expected check value is
/// `(-sum) mod 11`, with 10 mapping to `K`.
fn expected_check_char(body: &str) -> char {
    let sum: i64 = body
        .bytes()
        .rev()
        .zip((2..=7).cycle())
        .map(|(digit, weight)| i64::from(digit - b'0') * weight)
        .sum();

    match (-sum).rem_euclid(11) {
        10 => 'K',
        value => char::from_digit(u32::try_from(value).unwrap_or(0), 10).unwrap_or('0'),
    }
}
