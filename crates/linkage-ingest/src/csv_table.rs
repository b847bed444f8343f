use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use tracing::debug;

use linkage_model::{Batch, CellValue, Record};

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read one source dataset into a [`Batch`].
///
/// Headers are trimmed and BOM-stripped; empty cells become `Missing`;
/// rows that are entirely empty are skipped. Ragged rows are tolerated —
/// cells beyond the header width are dropped, short rows pad with
/// `Missing`.
pub fn read_batch(path: &Path) -> Result<Batch> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read csv: {}", path.display()))?;

    let headers: Vec<String> = reader
        .headers()
        .with_context(|| format!("read headers: {}", path.display()))?
        .iter()
        .map(normalize_header)
        .collect();

    let mut batch = Batch::new(headers.clone());
    for record in reader.records() {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        let mut row = Record::new();
        for (idx, header) in headers.iter().enumerate() {
            let value = record.get(idx).map(normalize_cell).unwrap_or_default();
            let cell = if value.is_empty() {
                CellValue::Missing
            } else {
                CellValue::Text(value)
            };
            row.set(header.clone(), cell);
        }
        batch.push_record(row);
    }
    debug!(path = %path.display(), rows = batch.len(), "loaded batch");
    Ok(batch)
}
