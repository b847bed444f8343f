use std::fs;
use std::io::{self, IsTerminal};
use std::time::Instant;

use anyhow::{Context, Result, anyhow};
use comfy_table::Table;
use tracing::{info, info_span};

use linkage_ingest::{read_batch, write_concatenated};
use linkage_model::{Batch, DatasetKind};
use linkage_normalize::NormalizeOptions;
use linkage_transform::{BatchExecutor, DatasetRules};

use crate::cli::RunArgs;
use crate::summary::{apply_table_style, header_cell};
use crate::types::{DatasetReport, RunResult};

/// Load, transform, concatenate and (unless `--dry-run`) persist the three
/// source datasets.
pub fn run_preprocess(args: &RunArgs) -> Result<RunResult> {
    let options = NormalizeOptions::with_region_code(&args.region)
        .ok_or_else(|| anyhow!("unknown phone region code `{}`", args.region))?;

    // Stage 1: ingest one batch per schema.
    let ingest_span = info_span!("ingest", data_dir = %args.data_dir.display());
    let ingest_start = Instant::now();
    let jobs: Vec<(DatasetKind, Batch)> = ingest_span.in_scope(|| {
        DatasetKind::ALL
            .into_iter()
            .map(|kind| {
                let path = args.data_dir.join(format!("{}.csv", kind.file_stem()));
                let batch = read_batch(&path)
                    .with_context(|| format!("load dataset {kind} from {}", path.display()))?;
                info!(dataset = %kind, rows = batch.len(), "dataset loaded");
                Ok((kind, batch))
            })
            .collect::<Result<_>>()
    })?;
    info!(
        elapsed_ms = ingest_start.elapsed().as_millis() as u64,
        "ingest complete"
    );

    // Stage 2: transform, one worker per dataset unless --sequential.
    let executor = BatchExecutor::new(options)
        .with_chunk_size(args.chunk_size)
        .with_progress(io::stderr().is_terminal());
    let transform_start = Instant::now();
    let results = if args.sequential {
        executor.run_sequential(jobs)
    } else {
        executor.run(jobs)
    }
    .context("transform datasets")?;
    info!(
        elapsed_ms = transform_start.elapsed().as_millis() as u64,
        "transform complete"
    );

    let datasets: Vec<DatasetReport> = results
        .iter()
        .map(|r| DatasetReport::from(&r.stats))
        .collect();
    let total_rows: usize = datasets.iter().map(|d| d.rows).sum();

    // Stage 3: concatenate and persist.
    if args.dry_run {
        info!(total_rows, "dry run, skipping output");
        return Ok(RunResult {
            output: None,
            total_rows,
            datasets,
        });
    }

    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| args.data_dir.join("output").join("linked.csv"));
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create output dir {}", parent.display()))?;
    }
    let output_span = info_span!("output", path = %output_path.display());
    let written = output_span.in_scope(|| {
        write_concatenated(&output_path, results.into_iter().map(|r| r.batch).collect())
    })?;
    info!(rows = written, path = %output_path.display(), "canonical output written");

    Ok(RunResult {
        output: Some(output_path),
        total_rows,
        datasets,
    })
}

/// Print the three source schemas and their column layouts.
pub fn run_schemas() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Schema"),
        header_cell("File"),
        header_cell("Consumed columns"),
        header_cell("Name handling"),
    ]);
    apply_table_style(&mut table);
    for kind in DatasetKind::ALL {
        let rules = DatasetRules::for_kind(kind);
        let consumed = rules.consumed_columns().join(", ");
        let name_handling = match rules.name_style {
            linkage_transform::NameStyle::Lowercase => "lowercase split",
            linkage_transform::NameStyle::CleanedTitleCase => "clean + title-case split",
        };
        table.add_row(vec![
            kind.to_string(),
            format!("{}.csv", kind.file_stem()),
            consumed,
            name_handling.to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}
