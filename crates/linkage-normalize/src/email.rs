//! Syntax-only email validation and canonicalization.
//!
//! No deliverability or DNS checks — a syntactically valid address is
//! accepted as-is with the domain lowercased, anything else nulls out.

use std::str::FromStr;

use email_address::EmailAddress;
use tracing::trace;

use crate::Normalizer;

#[derive(Debug, Default, Clone, Copy)]
pub struct EmailNormalizer;

impl Normalizer for EmailNormalizer {
    fn normalize(&self, raw: &str) -> Option<String> {
        let parsed = EmailAddress::from_str(raw.trim())
            .map_err(|error| trace!(%error, "email validation failed"))
            .ok()?;
        Some(format!(
            "{}@{}",
            parsed.local_part(),
            parsed.domain().to_lowercase()
        ))
    }
}
