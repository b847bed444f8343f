//! Free-text personal name splitting.
//!
//! A name is tokenized on whitespace runs and routed by token count:
//! three or more tokens yield first/middle/last with everything between the
//! outer tokens joined into the middle name, two tokens yield first/last,
//! one token is a bare first name. Absent tokens are empty strings, never
//! null — downstream matching relies on that distinction.

/// A split name. Parts that have no source token are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameParts {
    pub first: String,
    pub middle: String,
    pub last: String,
}

/// Splits free-text names into first/middle/last.
pub trait NameSplitter: Send + Sync {
    fn split(&self, raw: &str) -> NameParts;
}

/// Lowercases the whole name before splitting (Type A/B datasets).
#[derive(Debug, Default, Clone, Copy)]
pub struct LowercaseSplitter;

impl NameSplitter for LowercaseSplitter {
    fn split(&self, raw: &str) -> NameParts {
        split_tokens(&raw.to_lowercase())
    }
}

/// Cleans the name to letters/hyphen/whitespace, splits, then title-cases
/// each part (Type C datasets, which mix Latin and Cyrillic).
#[derive(Debug, Default, Clone, Copy)]
pub struct TitleCaseSplitter;

impl NameSplitter for TitleCaseSplitter {
    fn split(&self, raw: &str) -> NameParts {
        let parts = split_tokens(&clean_person_name(raw));
        NameParts {
            first: title_case(&parts.first),
            middle: title_case(&parts.middle),
            last: title_case(&parts.last),
        }
    }
}

/// Token-count split rule shared by both splitters. Case is left untouched.
pub fn split_tokens(text: &str) -> NameParts {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    match tokens.as_slice() {
        [] => NameParts::default(),
        [first] => NameParts {
            first: (*first).to_string(),
            ..NameParts::default()
        },
        [first, last] => NameParts {
            first: (*first).to_string(),
            middle: String::new(),
            last: (*last).to_string(),
        },
        [first, middle @ .., last] => NameParts {
            first: (*first).to_string(),
            middle: middle.join(" "),
            last: (*last).to_string(),
        },
    }
}

/// Retain Latin/Cyrillic letters, hyphens and whitespace; collapse
/// whitespace runs to single spaces.
pub fn clean_person_name(raw: &str) -> String {
    let kept: String = raw.chars().filter(|&ch| is_name_char(ch)).collect();
    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn is_name_char(ch: char) -> bool {
    // А..=я covers both Cyrillic cases; Ё/ё sit outside that range.
    ch.is_ascii_alphabetic() || matches!(ch, 'А'..='я' | 'Ё' | 'ё' | '-') || ch.is_whitespace()
}

/// Title-case with `str.title` semantics: an alphabetic character that
/// follows a non-alphabetic one is uppercased, every other alphabetic
/// character is lowercased. "anna-maria" becomes "Anna-Maria".
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_alpha = false;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }
    out
}
