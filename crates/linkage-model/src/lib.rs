//! Data model for the record-linkage preprocessor.
//!
//! Three independently sourced person datasets arrive with different, messy
//! column layouts. This crate defines the tabular representation they share
//! ([`Batch`], [`Record`], [`CellValue`]), the schema tags that drive the
//! per-dataset transformation rules ([`DatasetKind`]), and the fatal error
//! taxonomy ([`LinkageError`]).

pub mod error;
pub mod schema;
pub mod table;

pub use error::{LinkageError, Result};
pub use schema::{
    ADDRESS, BIRTHDATE, DatasetKind, EMAIL, FIRST_NAME, LAST_NAME, MIDDLE_NAME, PHONE, SOURCE_ID,
    UNIQUE_ID,
};
pub use table::{Batch, CellValue, Record};
