//! Phone number repair and canonical international formatting.
//!
//! Source phones come from hand transcription, so characters commonly
//! mistaken for digits are repaired before parsing: `i`/`l` for `1`, `o`
//! for `0`, `s` for `5`, case-insensitively. The repaired string is parsed
//! against a default region; a number that carries its own `+CC` dialing
//! prefix keeps it. Output is the international format with space-grouped
//! national digits (`+7 912 345-67-80`).

use phonenumber::{Mode, country};
use tracing::trace;

use crate::Normalizer;

/// Replace characters commonly mis-transcribed as digits.
///
/// The character classes are disjoint, so substitution order is irrelevant.
pub fn repair_digit_confusions(raw: &str) -> String {
    raw.chars()
        .map(|ch| match ch {
            'i' | 'I' | 'l' | 'L' => '1',
            'o' | 'O' => '0',
            's' | 'S' => '5',
            other => other,
        })
        .collect()
}

/// Drop everything that is not an ASCII digit. Pre-step for sources that
/// bury the number in punctuation or free text.
pub fn strip_non_digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Parses noisy phone text into canonical international representation.
#[derive(Debug, Clone, Copy)]
pub struct PhoneNormalizer {
    region: country::Id,
}

impl PhoneNormalizer {
    pub fn new(region: country::Id) -> Self {
        Self { region }
    }

    pub fn region(&self) -> country::Id {
        self.region
    }
}

impl Default for PhoneNormalizer {
    fn default() -> Self {
        Self::new(country::RU)
    }
}

impl Normalizer for PhoneNormalizer {
    fn normalize(&self, raw: &str) -> Option<String> {
        let repaired = repair_digit_confusions(raw);
        match phonenumber::parse(Some(self.region), &repaired) {
            Ok(number) => Some(number.format().mode(Mode::International).to_string()),
            Err(error) => {
                trace!(%error, "phone parse failed");
                None
            }
        }
    }
}
