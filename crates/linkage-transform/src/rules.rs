//! Per-dataset transformation rules.
//!
//! The three source layouts share one transformer; everything that differs
//! between them is captured here as explicit configuration instead of
//! copy-pasted pipeline variants.

use linkage_model::{ADDRESS, BIRTHDATE, DatasetKind, EMAIL, PHONE, SOURCE_ID};

/// How the free-text name column is split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameStyle {
    /// Lowercase, then split on whitespace runs.
    Lowercase,
    /// Strip to Latin/Cyrillic letters, hyphen and whitespace, split, then
    /// title-case each part.
    CleanedTitleCase,
}

/// Pre-step applied to raw phone text before repair and parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhonePrep {
    /// Feed the raw text straight into digit repair.
    AsIs,
    /// Drop every non-digit first (sources that bury the number in text).
    DigitsOnly,
}

/// Everything that distinguishes one dataset's transformation from another.
#[derive(Debug, Clone, Copy)]
pub struct DatasetRules {
    pub kind: DatasetKind,
    pub name_style: NameStyle,
    pub phone: Option<PhonePrep>,
    pub email: bool,
    pub birthdate: bool,
    pub address: bool,
}

impl DatasetRules {
    pub fn for_kind(kind: DatasetKind) -> Self {
        match kind {
            DatasetKind::TypeA => Self {
                kind,
                name_style: NameStyle::Lowercase,
                phone: Some(PhonePrep::AsIs),
                email: true,
                birthdate: false,
                address: false,
            },
            DatasetKind::TypeB => Self {
                kind,
                name_style: NameStyle::Lowercase,
                phone: Some(PhonePrep::DigitsOnly),
                email: false,
                birthdate: true,
                address: true,
            },
            DatasetKind::TypeC => Self {
                kind,
                name_style: NameStyle::CleanedTitleCase,
                phone: None,
                email: false,
                birthdate: true,
                address: false,
            },
        }
    }

    /// Columns this dataset's transformation consumes. Absence of any of
    /// them is a structural failure that aborts the batch.
    pub fn consumed_columns(&self) -> Vec<&'static str> {
        let mut columns = vec![SOURCE_ID, self.kind.name_column()];
        if self.birthdate {
            columns.push(BIRTHDATE);
        }
        if self.phone.is_some() {
            columns.push(PHONE);
        }
        if self.email {
            columns.push(EMAIL);
        }
        if self.address {
            columns.push(ADDRESS);
        }
        columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_a_consumes_phone_and_email() {
        let rules = DatasetRules::for_kind(DatasetKind::TypeA);
        assert_eq!(
            rules.consumed_columns(),
            vec!["uid", "full_name", "phone", "email"]
        );
    }

    #[test]
    fn type_b_consumes_birthdate_phone_address() {
        let rules = DatasetRules::for_kind(DatasetKind::TypeB);
        assert_eq!(
            rules.consumed_columns(),
            vec!["uid", "full_name", "birthdate", "phone", "address"]
        );
        assert_eq!(rules.phone, Some(PhonePrep::DigitsOnly));
    }

    #[test]
    fn type_c_consumes_name_and_birthdate_only() {
        let rules = DatasetRules::for_kind(DatasetKind::TypeC);
        assert_eq!(rules.consumed_columns(), vec!["uid", "name", "birthdate"]);
        assert_eq!(rules.name_style, NameStyle::CleanedTitleCase);
        assert!(rules.phone.is_none());
    }
}
