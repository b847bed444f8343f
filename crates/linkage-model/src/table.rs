#![deny(unsafe_code)]

use std::collections::BTreeMap;

/// A single cell of a record.
///
/// `Missing` doubles as the null marker: before normalization it means the
/// source held nothing for this column, after normalization it means the
/// source value could not be parsed. Name parts never use it — they degrade
/// to `Text("")` instead, so downstream matching can tell "no token present"
/// apart from "present but unparseable".
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Missing,
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    /// The cell's text, if present.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(value) => Some(value),
            CellValue::Missing => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }
}

/// One source or canonical record. Column order is owned by the batch;
/// the record only stores cell contents.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct Record {
    pub cells: BTreeMap<String, CellValue>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, column: impl Into<String>, value: CellValue) {
        self.cells.insert(column.into(), value);
    }

    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells.get(column)
    }

    /// Text content of a cell; `None` when the cell is absent or missing.
    pub fn text(&self, column: &str) -> Option<&str> {
        self.cells.get(column).and_then(CellValue::as_text)
    }

    pub fn remove(&mut self, column: &str) -> Option<CellValue> {
        self.cells.remove(column)
    }
}

/// An ordered sequence of records of one schema.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct Batch {
    pub columns: Vec<String>,
    pub records: Vec<Record>,
}

impl Batch {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            records: Vec::new(),
        }
    }

    pub fn push_record(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    /// Rename a column in the header and in every record.
    ///
    /// Returns false when the source column does not exist; the batch is
    /// left untouched in that case.
    pub fn rename_column(&mut self, from: &str, to: &str) -> bool {
        let Some(position) = self.columns.iter().position(|c| c == from) else {
            return false;
        };
        self.columns[position] = to.to_string();
        for record in &mut self.records {
            if let Some(value) = record.remove(from) {
                record.set(to, value);
            }
        }
        true
    }

    /// Add a column at the end of the header if it is not already present.
    pub fn add_column(&mut self, column: &str) {
        if !self.has_column(column) {
            self.columns.push(column.to_string());
        }
    }

    /// Drop a column from the header and from every record.
    pub fn drop_column(&mut self, column: &str) {
        self.columns.retain(|c| c != column);
        for record in &mut self.records {
            record.remove(column);
        }
    }
}
