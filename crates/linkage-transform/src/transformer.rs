//! The schema transformer: one parameterized implementation for all three
//! source layouts.
//!
//! A transformation never drops a record: a field the normalizers cannot
//! interpret degrades to `Missing` (or an empty string for name parts) and
//! the row survives. The only fatal condition is a consumed column missing
//! from the batch.

use indicatif::ProgressBar;
use tracing::debug;

use linkage_model::{
    ADDRESS, BIRTHDATE, Batch, CellValue, DatasetKind, EMAIL, FIRST_NAME, LAST_NAME, LinkageError,
    MIDDLE_NAME, PHONE, Record, Result, SOURCE_ID, UNIQUE_ID,
};
use linkage_normalize::{
    AddressNormalizer, DateNormalizer, EmailNormalizer, LowercaseSplitter, NameSplitter,
    NormalizeOptions, Normalizer, PhoneNormalizer, TitleCaseSplitter, strip_non_date_chars,
    strip_non_digits,
};

use crate::chunk::chunk_ranges;
use crate::rules::{DatasetRules, NameStyle, PhonePrep};

pub const DEFAULT_CHUNK_SIZE: usize = 1000;

/// Per-dataset counters surfaced in the run summary.
#[derive(Debug, Clone, Copy)]
pub struct TransformStats {
    pub dataset: DatasetKind,
    pub rows: usize,
    pub chunks: usize,
    pub empty_names: usize,
    pub null_phones: usize,
    pub null_emails: usize,
    pub null_birthdates: usize,
    pub null_addresses: usize,
}

impl TransformStats {
    fn new(dataset: DatasetKind, rows: usize, chunks: usize) -> Self {
        Self {
            dataset,
            rows,
            chunks,
            empty_names: 0,
            null_phones: 0,
            null_emails: 0,
            null_birthdates: 0,
            null_addresses: 0,
        }
    }
}

/// Transforms one raw batch into the canonical record layout.
///
/// The normalizers sit behind trait objects so locale-specific phone, date
/// or name rules can be substituted without touching this code.
pub struct DatasetTransformer {
    rules: DatasetRules,
    chunk_size: usize,
    show_progress: bool,
    splitter: Box<dyn NameSplitter>,
    phone: Box<dyn Normalizer>,
    email: Box<dyn Normalizer>,
    date: Box<dyn Normalizer>,
    address: Box<dyn Normalizer>,
}

impl DatasetTransformer {
    pub fn new(kind: DatasetKind, options: &NormalizeOptions) -> Self {
        let rules = DatasetRules::for_kind(kind);
        let splitter: Box<dyn NameSplitter> = match rules.name_style {
            NameStyle::Lowercase => Box::new(LowercaseSplitter),
            NameStyle::CleanedTitleCase => Box::new(TitleCaseSplitter),
        };
        Self {
            rules,
            chunk_size: DEFAULT_CHUNK_SIZE,
            show_progress: false,
            splitter,
            phone: Box::new(PhoneNormalizer::new(options.default_region)),
            email: Box::new(EmailNormalizer),
            date: Box::new(DateNormalizer),
            address: Box::new(AddressNormalizer),
        }
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn with_phone_normalizer(mut self, normalizer: Box<dyn Normalizer>) -> Self {
        self.phone = normalizer;
        self
    }

    pub fn with_date_normalizer(mut self, normalizer: Box<dyn Normalizer>) -> Self {
        self.date = normalizer;
        self
    }

    pub fn with_name_splitter(mut self, splitter: Box<dyn NameSplitter>) -> Self {
        self.splitter = splitter;
        self
    }

    pub fn rules(&self) -> &DatasetRules {
        &self.rules
    }

    /// Transform a whole batch, chunk by chunk, in input order.
    ///
    /// # Errors
    ///
    /// `MissingColumn` when a consumed column is absent; per-field parse
    /// failures are not errors.
    pub fn transform(&self, batch: Batch) -> Result<(Batch, TransformStats)> {
        let kind = self.rules.kind;
        for column in self.rules.consumed_columns() {
            if !batch.has_column(column) {
                return Err(LinkageError::MissingColumn {
                    dataset: kind,
                    column: column.to_string(),
                });
            }
        }

        let mut batch = batch;
        batch.rename_column(SOURCE_ID, UNIQUE_ID);
        batch.add_column(FIRST_NAME);
        batch.add_column(MIDDLE_NAME);
        batch.add_column(LAST_NAME);

        let ranges = chunk_ranges(batch.len(), self.chunk_size);
        let mut stats = TransformStats::new(kind, batch.len(), ranges.len());
        let bar = if self.show_progress {
            ProgressBar::new(ranges.len() as u64)
        } else {
            ProgressBar::hidden()
        };

        for range in ranges {
            debug!(dataset = %kind, start = range.start, end = range.end, "processing chunk");
            for record in &mut batch.records[range] {
                self.process_record(record, &mut stats);
            }
            bar.inc(1);
        }
        bar.finish_and_clear();

        batch.drop_column(kind.name_column());
        debug!(
            dataset = %kind,
            rows = stats.rows,
            chunks = stats.chunks,
            "dataset transformed"
        );
        Ok((batch, stats))
    }

    fn process_record(&self, record: &mut Record, stats: &mut TransformStats) {
        let raw_name = record.text(self.rules.kind.name_column()).unwrap_or("");
        let parts = self.splitter.split(raw_name);
        if parts.first.is_empty() {
            stats.empty_names += 1;
        }
        record.set(FIRST_NAME, CellValue::text(parts.first));
        record.set(MIDDLE_NAME, CellValue::text(parts.middle));
        record.set(LAST_NAME, CellValue::text(parts.last));

        if let Some(prep) = self.rules.phone {
            let normalized = record.text(PHONE).and_then(|raw| {
                let prepared = match prep {
                    PhonePrep::AsIs => raw.to_string(),
                    PhonePrep::DigitsOnly => strip_non_digits(raw),
                };
                self.phone.normalize(&prepared)
            });
            set_or_null(record, PHONE, normalized, &mut stats.null_phones);
        }

        if self.rules.email {
            let normalized = record.text(EMAIL).and_then(|raw| self.email.normalize(raw));
            set_or_null(record, EMAIL, normalized, &mut stats.null_emails);
        }

        if self.rules.birthdate {
            let normalized = record
                .text(BIRTHDATE)
                .and_then(|raw| self.date.normalize(&strip_non_date_chars(raw)));
            set_or_null(record, BIRTHDATE, normalized, &mut stats.null_birthdates);
        }

        if self.rules.address {
            let normalized = record
                .text(ADDRESS)
                .and_then(|raw| self.address.normalize(raw));
            set_or_null(record, ADDRESS, normalized, &mut stats.null_addresses);
        }
    }
}

fn set_or_null(record: &mut Record, column: &str, value: Option<String>, null_count: &mut usize) {
    match value {
        Some(text) => record.set(column, CellValue::text(text)),
        None => {
            *null_count += 1;
            record.set(column, CellValue::Missing);
        }
    }
}
