//! CLI library components for the record-linkage preprocessor.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
