//! Transformer behavior across the three schema layouts.

use linkage_model::{Batch, CellValue, DatasetKind, LinkageError, Record};
use linkage_normalize::NormalizeOptions;
use linkage_transform::DatasetTransformer;

fn record(pairs: &[(&str, &str)]) -> Record {
    let mut record = Record::new();
    for (column, value) in pairs {
        record.set(*column, CellValue::text(*value));
    }
    record
}

fn type_a_batch(rows: &[(&str, &str, &str, &str)]) -> Batch {
    let columns = ["uid", "full_name", "phone", "email"];
    let mut batch = Batch::new(columns.iter().map(|c| (*c).to_string()).collect());
    for (uid, name, phone, email) in rows {
        batch.push_record(record(&[
            ("uid", uid),
            ("full_name", name),
            ("phone", phone),
            ("email", email),
        ]));
    }
    batch
}

fn transformer(kind: DatasetKind) -> DatasetTransformer {
    DatasetTransformer::new(kind, &NormalizeOptions::default())
}

#[test]
fn type_a_normalizes_all_fields() {
    let batch = type_a_batch(&[(
        "a-1",
        "Ada Augusta Lovelace",
        "89l2345678O",
        "Ada@Example.com",
    )]);
    let (out, stats) = transformer(DatasetKind::TypeA)
        .transform(batch)
        .expect("transform");

    assert_eq!(out.len(), 1);
    let row = &out.records[0];
    assert_eq!(row.text("unique_id"), Some("a-1"));
    assert_eq!(row.text("first_name"), Some("ada"));
    assert_eq!(row.text("middle_name"), Some("augusta"));
    assert_eq!(row.text("last_name"), Some("lovelace"));
    assert!(row.text("phone").expect("phone").starts_with("+7"));
    assert_eq!(row.text("email"), Some("Ada@example.com"));
    assert!(row.get("full_name").is_none());
    assert!(!out.has_column("full_name"));
    assert_eq!(stats.null_phones, 0);
    assert_eq!(stats.null_emails, 0);
}

#[test]
fn unparseable_fields_null_but_keep_the_record() {
    let batch = type_a_batch(&[
        ("a-1", "Grace Hopper", "not a phone", "not-an-email"),
        ("a-2", "", "89123456780", "ok@test.org"),
    ]);
    let (out, stats) = transformer(DatasetKind::TypeA)
        .transform(batch)
        .expect("transform");

    // Row-count invariant: parse failures never drop records.
    assert_eq!(out.len(), 2);
    let bad = &out.records[0];
    assert!(bad.get("phone").expect("cell present").is_missing());
    assert!(bad.get("email").expect("cell present").is_missing());
    assert_eq!(bad.text("first_name"), Some("grace"));

    // Empty name yields empty strings, not nulls.
    let unnamed = &out.records[1];
    assert_eq!(unnamed.text("first_name"), Some(""));
    assert_eq!(unnamed.text("last_name"), Some(""));

    assert_eq!(stats.null_phones, 1);
    assert_eq!(stats.null_emails, 1);
    assert_eq!(stats.empty_names, 1);
}

#[test]
fn type_b_strips_noise_before_phone_and_date() {
    let columns = ["uid", "full_name", "birthdate", "phone", "address"];
    let mut batch = Batch::new(columns.iter().map(|c| (*c).to_string()).collect());
    batch.push_record(record(&[
        ("uid", "b-1"),
        ("full_name", "Ivan Petrov"),
        ("birthdate", "born 95-7-3"),
        ("phone", "tel: 8 (912) 345-67-80"),
        ("address", "12 Main St\nApt 4"),
    ]));

    let (out, stats) = transformer(DatasetKind::TypeB)
        .transform(batch)
        .expect("transform");
    let row = &out.records[0];
    assert_eq!(row.text("birthdate"), Some("1995-07-03"));
    assert!(row.text("phone").expect("phone").starts_with("+7"));
    assert_eq!(row.text("address"), Some("12 Main St Apt 4"));
    assert_eq!(stats.null_birthdates, 0);
}

#[test]
fn type_c_cleans_and_title_cases_names() {
    let columns = ["uid", "name", "birthdate"];
    let mut batch = Batch::new(columns.iter().map(|c| (*c).to_string()).collect());
    batch.push_record(record(&[
        ("uid", "c-1"),
        ("name", "иван4  иванович ПЕТРОВ"),
        ("birthdate", "995-1-1"),
    ]));
    batch.push_record(record(&[
        ("uid", "c-2"),
        ("name", "anna-maria  rossi"),
        ("birthdate", "13-99-01"),
    ]));

    let (out, stats) = transformer(DatasetKind::TypeC)
        .transform(batch)
        .expect("transform");
    assert_eq!(out.len(), 2);

    let first = &out.records[0];
    assert_eq!(first.text("first_name"), Some("Иван"));
    assert_eq!(first.text("middle_name"), Some("Иванович"));
    assert_eq!(first.text("last_name"), Some("Петров"));
    assert_eq!(first.text("birthdate"), Some("1995-01-01"));
    assert!(!out.has_column("name"));

    let second = &out.records[1];
    assert_eq!(second.text("first_name"), Some("Anna-Maria"));
    assert_eq!(second.text("last_name"), Some("Rossi"));
    // Out-of-range month fails to null rather than being coerced.
    assert!(second.get("birthdate").expect("cell present").is_missing());
    assert_eq!(stats.null_birthdates, 1);
}

#[test]
fn missing_consumed_column_is_fatal() {
    let mut batch = Batch::new(vec!["uid".to_string(), "full_name".to_string()]);
    batch.push_record(record(&[("uid", "a-1"), ("full_name", "Ada Lovelace")]));

    let result = transformer(DatasetKind::TypeA).transform(batch);
    match result {
        Err(LinkageError::MissingColumn { dataset, column }) => {
            assert_eq!(dataset, DatasetKind::TypeA);
            assert_eq!(column, "phone");
        }
        other => panic!("expected MissingColumn, got {other:?}"),
    }
}

#[test]
fn uid_is_renamed_exactly_once() {
    let batch = type_a_batch(&[("a-1", "Ada Lovelace", "89123456780", "a@b.org")]);
    let (out, _) = transformer(DatasetKind::TypeA)
        .transform(batch)
        .expect("transform");
    assert!(out.has_column("unique_id"));
    assert!(!out.has_column("uid"));
    assert_eq!(
        out.columns.iter().filter(|c| *c == "unique_id").count(),
        1
    );
}

#[test]
fn row_count_invariant_holds_for_large_batches() {
    let rows: Vec<(String, String)> = (0..2500)
        .map(|i| (format!("b-{i}"), format!("person {i} example")))
        .collect();
    let columns = ["uid", "full_name", "birthdate", "phone", "address"];
    let mut batch = Batch::new(columns.iter().map(|c| (*c).to_string()).collect());
    for (uid, name) in &rows {
        batch.push_record(record(&[
            ("uid", uid),
            ("full_name", name),
            ("birthdate", "garbage"),
            ("phone", "garbage"),
            ("address", ""),
        ]));
    }

    let (out, stats) = transformer(DatasetKind::TypeB)
        .transform(batch)
        .expect("transform");
    assert_eq!(out.len(), 2500);
    assert_eq!(stats.rows, 2500);
    assert_eq!(stats.chunks, 3);
    assert_eq!(stats.null_birthdates, 2500);
    assert_eq!(stats.null_phones, 2500);
}
