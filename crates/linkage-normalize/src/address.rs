//! Free-text address cleanup.
//!
//! Addresses arrive with embedded newlines and ragged spacing. Cleanup
//! collapses every whitespace run (newlines included) to a single space and
//! trims the ends. Total and idempotent.

use crate::Normalizer;

/// Collapse whitespace runs to single spaces and trim.
pub fn collapse_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[derive(Debug, Default, Clone, Copy)]
pub struct AddressNormalizer;

impl Normalizer for AddressNormalizer {
    fn normalize(&self, raw: &str) -> Option<String> {
        Some(collapse_whitespace(raw))
    }
}
