use std::path::Path;

use anyhow::{Context, Result};
use csv::Writer;
use tracing::debug;

use linkage_model::{Batch, CellValue, Record};

/// Concatenate canonical batches into one batch.
///
/// Columns are the union across batches in first-seen order; records from a
/// batch that lacks a column carry `Missing` there. Record order follows
/// batch submission order.
pub fn concat_batches(batches: Vec<Batch>) -> Batch {
    let mut columns: Vec<String> = Vec::new();
    for batch in &batches {
        for column in &batch.columns {
            if !columns.contains(column) {
                columns.push(column.clone());
            }
        }
    }
    let mut out = Batch::new(columns);
    for batch in batches {
        for record in batch.records {
            out.push_record(record);
        }
    }
    out
}

/// Write one batch as CSV. `Missing` cells serialize as empty fields.
pub fn write_batch(path: &Path, batch: &Batch) -> Result<()> {
    let mut writer =
        Writer::from_path(path).with_context(|| format!("write csv: {}", path.display()))?;
    writer
        .write_record(&batch.columns)
        .context("write header")?;
    for record in &batch.records {
        let row: Vec<&str> = batch
            .columns
            .iter()
            .map(|column| cell_text(record, column))
            .collect();
        writer.write_record(&row).context("write row")?;
    }
    writer.flush().context("flush csv")?;
    debug!(path = %path.display(), rows = batch.len(), "wrote batch");
    Ok(())
}

/// Concatenate and persist the canonical batches in one step.
pub fn write_concatenated(path: &Path, batches: Vec<Batch>) -> Result<usize> {
    let combined = concat_batches(batches);
    write_batch(path, &combined)?;
    Ok(combined.len())
}

fn cell_text<'a>(record: &'a Record, column: &str) -> &'a str {
    match record.get(column) {
        Some(CellValue::Text(text)) => text,
        Some(CellValue::Missing) | None => "",
    }
}
