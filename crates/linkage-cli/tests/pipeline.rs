//! End-to-end pipeline runs over a temporary data directory.

use std::fs;
use std::path::Path;

use linkage_cli::cli::RunArgs;
use linkage_cli::commands::run_preprocess;

fn write_fixtures(dir: &Path) {
    fs::write(
        dir.join("main1.csv"),
        "uid,full_name,phone,email\n\
         a-1,Ada Augusta Lovelace,89l2345678O,Ada@Example.com\n\
         a-2,Grace Hopper,not a phone,not-an-email\n",
    )
    .expect("write main1");
    fs::write(
        dir.join("main2.csv"),
        "uid,full_name,birthdate,phone,address\n\
         b-1,Ivan Petrov,95-7-3,8 (912) 345-67-80,\"12 Main St\nApt 4\"\n",
    )
    .expect("write main2");
    fs::write(
        dir.join("main3.csv"),
        "uid,name,birthdate\n\
         c-1,иван иванович петров,995-1-1\n\
         c-2,anna rossi,13-99-01\n",
    )
    .expect("write main3");
}

fn run_args(dir: &Path) -> RunArgs {
    RunArgs {
        data_dir: dir.to_path_buf(),
        output: None,
        region: "RU".to_string(),
        chunk_size: 1000,
        sequential: false,
        dry_run: false,
    }
}

#[test]
fn full_run_writes_concatenated_canonical_csv() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_fixtures(dir.path());

    let result = run_preprocess(&run_args(dir.path())).expect("run");
    assert_eq!(result.total_rows, 5);
    assert_eq!(result.datasets.len(), 3);
    assert_eq!(result.datasets[0].rows, 2);
    assert_eq!(result.datasets[0].null_phones, 1);
    assert_eq!(result.datasets[2].null_birthdates, 1);

    let output = result.output.expect("output path");
    let content = fs::read_to_string(&output).expect("read output");
    let mut lines = content.lines();
    let header = lines.next().expect("header");
    assert!(header.contains("unique_id"));
    assert!(header.contains("first_name"));
    assert!(!header.contains("full_name"));
    // Header plus five records.
    assert_eq!(content.lines().count(), 6);
    assert!(content.contains("a-1"));
    assert!(content.contains("1995-07-03"));
    assert!(content.contains("Иван"));
}

#[test]
fn dry_run_writes_nothing() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_fixtures(dir.path());

    let mut args = run_args(dir.path());
    args.dry_run = true;
    let result = run_preprocess(&args).expect("run");
    assert!(result.output.is_none());
    assert_eq!(result.total_rows, 5);
    assert!(!dir.path().join("output").exists());
}

#[test]
fn sequential_flag_produces_the_same_totals() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_fixtures(dir.path());

    let mut args = run_args(dir.path());
    args.sequential = true;
    args.output = Some(dir.path().join("seq.csv"));
    let result = run_preprocess(&args).expect("run");
    assert_eq!(result.total_rows, 5);
    assert_eq!(
        result.output.as_deref(),
        Some(dir.path().join("seq.csv").as_path())
    );
}

#[test]
fn unknown_region_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_fixtures(dir.path());

    let mut args = run_args(dir.path());
    args.region = "??".to_string();
    assert!(run_preprocess(&args).is_err());
}

#[test]
fn missing_source_file_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_fixtures(dir.path());
    fs::remove_file(dir.path().join("main2.csv")).expect("remove");

    assert!(run_preprocess(&run_args(dir.path())).is_err());
}
