//! CSV ingestion and canonical output.
//!
//! The tabular source abstraction for the preprocessor: one CSV file per
//! dataset in, one concatenated canonical CSV out. All decision logic lives
//! in `linkage-normalize` and `linkage-transform`; this crate is glue.

pub mod csv_table;
pub mod writer;

pub use csv_table::read_batch;
pub use writer::{concat_batches, write_batch, write_concatenated};
