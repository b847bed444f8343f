//! Normalization options shared by the schema transformers.

use phonenumber::country;

/// Options that parameterize the field normalizers.
#[derive(Debug, Clone, Copy)]
pub struct NormalizeOptions {
    /// Region used for phone numbers without an explicit dialing prefix.
    pub default_region: country::Id,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            default_region: country::RU,
        }
    }
}

impl NormalizeOptions {
    /// Parse a two-letter region code (e.g. `RU`, `US`), case-insensitive.
    pub fn with_region_code(code: &str) -> Option<Self> {
        let region: country::Id = code.trim().to_uppercase().parse().ok()?;
        Some(Self {
            default_region: region,
        })
    }
}
