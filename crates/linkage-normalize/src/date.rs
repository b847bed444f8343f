//! Ambiguous partial-date repair into canonical `YYYY-MM-DD`.
//!
//! Birthdates arrive as two- or three-digit years, unpadded months and days,
//! or already canonical strings. Canonical input is returned unchanged; for
//! everything else the string is split into year/month/day components and
//! each is widened or zero-padded. An out-of-range month or day fails to
//! null rather than being coerced.

use chrono::NaiveDate;

use crate::Normalizer;

/// Keep digits and the separators `-`, `/`, `.` — everything else is noise
/// around the date.
pub fn strip_non_date_chars(raw: &str) -> String {
    raw.chars()
        .filter(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '/' | '.'))
        .collect()
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DateNormalizer;

impl Normalizer for DateNormalizer {
    fn normalize(&self, raw: &str) -> Option<String> {
        let value = raw.trim();

        // Canonical input passes through untouched, which makes the
        // normalizer idempotent on its own output.
        if is_canonical(value) {
            return Some(value.to_string());
        }

        let mut parts = value.split('-');
        let (year, month, day) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(y), Some(m), Some(d), None) if !y.is_empty() && !m.is_empty() && !d.is_empty() => {
                (y, m, d)
            }
            _ => return None,
        };

        let year = widen_year(year)?;
        let month = pad_component(month, 12)?;
        let day = pad_component(day, 31)?;
        Some(format!("{year}-{month}-{day}"))
    }
}

/// Strict `YYYY-MM-DD`: 4-2-2 digit shape and a real calendar date.
fn is_canonical(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(idx, byte)| idx == 4 || idx == 7 || byte.is_ascii_digit())
        && NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}

/// Widen a truncated year to four digits.
///
/// Two digits pivot on 21: `95` is 1995, `07` is 2007. Three digits keep a
/// leading 9 in the 1900s (`995` is 1995) and everything else in the 2000s.
fn widen_year(year: &str) -> Option<String> {
    match year.len() {
        2 => {
            let value: u32 = year.parse().ok()?;
            let century = if value > 21 { "19" } else { "20" };
            Some(format!("{century}{year}"))
        }
        3 => {
            let millennium = if year.starts_with('9') { "1" } else { "2" };
            Some(format!("{millennium}{year}"))
        }
        4 => Some(year.to_string()),
        _ => None,
    }
}

/// Zero-pad a single-digit month/day; otherwise require the value to lie in
/// `1..=max`.
fn pad_component(component: &str, max: u32) -> Option<String> {
    if component.len() == 1 {
        return Some(format!("0{component}"));
    }
    let value: u32 = component.parse().ok()?;
    if (1..=max).contains(&value) {
        Some(component.to_string())
    } else {
        None
    }
}
