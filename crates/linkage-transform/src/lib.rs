//! Schema transformation and dispatch for the record-linkage preprocessor.
//!
//! One parameterized [`DatasetTransformer`] handles all three source
//! layouts, driven by [`DatasetRules`]. [`BatchExecutor`] fans the three
//! datasets out to independent workers and joins them in submission order.
//! Chunking inside a dataset is strictly sequential and exists only to
//! bound memory and report progress.

pub mod chunk;
pub mod executor;
pub mod rules;
pub mod transformer;

pub use chunk::chunk_ranges;
pub use executor::{BatchExecutor, DatasetResult};
pub use rules::{DatasetRules, NameStyle, PhonePrep};
pub use transformer::{DEFAULT_CHUNK_SIZE, DatasetTransformer, TransformStats};
