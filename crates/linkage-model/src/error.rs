use thiserror::Error;

use crate::DatasetKind;

/// Fatal failures of the preprocessing pipeline.
///
/// Field-level parse failures are deliberately not represented here: a
/// normalizer that cannot interpret its input nulls the field and the record
/// is kept. Only structural problems (a consumed column missing from a batch)
/// and worker failures abort a run.
#[derive(Debug, Error)]
pub enum LinkageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("dataset {dataset}: required column `{column}` is missing")]
    MissingColumn {
        dataset: DatasetKind,
        column: String,
    },
    #[error("dataset {dataset}: worker failed: {source}")]
    Worker {
        dataset: DatasetKind,
        #[source]
        source: Box<LinkageError>,
    },
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, LinkageError>;
