use std::path::PathBuf;

use linkage_model::DatasetKind;
use linkage_transform::TransformStats;

#[derive(Debug)]
pub struct RunResult {
    pub output: Option<PathBuf>,
    pub total_rows: usize,
    pub datasets: Vec<DatasetReport>,
}

#[derive(Debug)]
pub struct DatasetReport {
    pub kind: DatasetKind,
    pub rows: usize,
    pub chunks: usize,
    pub empty_names: usize,
    pub null_phones: usize,
    pub null_emails: usize,
    pub null_birthdates: usize,
    pub null_addresses: usize,
}

impl From<&TransformStats> for DatasetReport {
    fn from(stats: &TransformStats) -> Self {
        Self {
            kind: stats.dataset,
            rows: stats.rows,
            chunks: stats.chunks,
            empty_names: stats.empty_names,
            null_phones: stats.null_phones,
            null_emails: stats.null_emails,
            null_birthdates: stats.null_birthdates,
            null_addresses: stats.null_addresses,
        }
    }
}
