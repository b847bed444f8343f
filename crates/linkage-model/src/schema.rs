#![deny(unsafe_code)]

use std::fmt;

/// The canonical identifier column every transformed batch carries.
pub const UNIQUE_ID: &str = "unique_id";
/// The identifier column as it appears in every source dataset.
pub const SOURCE_ID: &str = "uid";

pub const FIRST_NAME: &str = "first_name";
pub const MIDDLE_NAME: &str = "middle_name";
pub const LAST_NAME: &str = "last_name";
pub const PHONE: &str = "phone";
pub const EMAIL: &str = "email";
pub const BIRTHDATE: &str = "birthdate";
pub const ADDRESS: &str = "address";

/// Schema tag for the three source dataset layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum DatasetKind {
    /// `uid, full_name, phone, email`
    TypeA,
    /// `uid, full_name, birthdate, phone, address`
    TypeB,
    /// `uid, name, birthdate`
    TypeC,
}

impl DatasetKind {
    pub const ALL: [DatasetKind; 3] = [DatasetKind::TypeA, DatasetKind::TypeB, DatasetKind::TypeC];

    pub fn as_str(self) -> &'static str {
        match self {
            DatasetKind::TypeA => "type-a",
            DatasetKind::TypeB => "type-b",
            DatasetKind::TypeC => "type-c",
        }
    }

    /// Default CSV file stem for this dataset in a data directory.
    pub fn file_stem(self) -> &'static str {
        match self {
            DatasetKind::TypeA => "main1",
            DatasetKind::TypeB => "main2",
            DatasetKind::TypeC => "main3",
        }
    }

    /// The free-text name column this schema carries.
    pub fn name_column(self) -> &'static str {
        match self {
            DatasetKind::TypeA | DatasetKind::TypeB => "full_name",
            DatasetKind::TypeC => "name",
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
