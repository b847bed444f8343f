//! Field-level normalization heuristics for person records.
//!
//! Every normalizer here is pure and total: for any input it returns a
//! canonical value or `None` ("present but unparseable"), and it never
//! panics or errors. The schema transformers compose these through the
//! [`Normalizer`] and [`NameSplitter`] seams so locale-specific rules can be
//! swapped without touching transformer code.

pub mod address;
pub mod date;
pub mod email;
pub mod name;
pub mod options;
pub mod phone;

pub use address::AddressNormalizer;
pub use date::{DateNormalizer, strip_non_date_chars};
pub use email::EmailNormalizer;
pub use name::{LowercaseSplitter, NameParts, NameSplitter, TitleCaseSplitter};
pub use options::NormalizeOptions;
pub use phone::{PhoneNormalizer, repair_digit_confusions, strip_non_digits};

/// A single-field normalization capability.
///
/// `None` means the value was present in the source but could not be
/// interpreted; the caller nulls the field and keeps the record.
pub trait Normalizer: Send + Sync {
    fn normalize(&self, raw: &str) -> Option<String>;
}
