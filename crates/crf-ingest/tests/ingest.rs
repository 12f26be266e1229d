#![allow(missing_docs)]

use std::path::PathBuf;

use crf_ingest::{IngestError, load_dataset, load_terminology};
use crf_model::{CodelistIndex, CrfError};

fn data_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name)
}

#[test]
fn loads_terminology_rows_verbatim() {
    let rows = load_terminology(&data_path("terminology.csv")).expect("load terminology");
    // All file rows come back, including the blank-value AEDECOD row
    assert_eq!(rows.len(), 9);
    assert_eq!(rows[0].codelist, "SEX");
    assert_eq!(rows[0].value, "MALE");
    assert!(rows.iter().any(|row| row.value.is_empty()));
}

#[test]
fn terminology_feeds_index_build() {
    let rows = load_terminology(&data_path("terminology.csv")).expect("load terminology");
    let index = CodelistIndex::build(&rows).expect("build index");
    assert_eq!(index.len(), 3);
    // Duplicate MALE row collapses, blank AEDECOD value drops
    assert_eq!(index.allowed_values("SEX").len(), 2);
    assert_eq!(index.allowed_values("AEDECOD").len(), 3);
}

#[test]
fn missing_terminology_headers_rejected() {
    let err = load_terminology(&data_path("filled_ae.csv")).expect_err("wrong headers");
    match err {
        IngestError::MissingHeader { header, .. } => assert_eq!(header, "CODELIST"),
        other => panic!("expected MissingHeader, got {other}"),
    }
}

#[test]
fn missing_file_reports_path() {
    let err = load_terminology(&data_path("nope.csv")).expect_err("missing file");
    assert!(err.to_string().contains("nope.csv"));
}

#[test]
fn dataset_loads_in_file_order() {
    let dataset = load_dataset(&data_path("filled_ae.csv")).expect("load dataset");
    assert_eq!(dataset.height(), 4);
    assert_eq!(dataset.headers(), ["SUBJID", "AEDECOD", "AESEV"]);
    assert!(dataset.has_column("aedecod"));
    assert!(!dataset.has_column("LBTEST"));
}

#[test]
fn duplicate_headers_rejected() {
    let err = load_dataset(&data_path("dup_headers.csv")).expect_err("duplicate headers");
    match err {
        IngestError::DuplicateHeader { header, .. } => assert_eq!(header, "sex"),
        other => panic!("expected DuplicateHeader, got {other}"),
    }
}

#[test]
fn record_column_extraction() {
    let dataset = load_dataset(&data_path("filled_ae.csv")).expect("load dataset");
    let column = dataset
        .record_column("subjid", "AEDECOD")
        .expect("extract column");

    assert_eq!(column.field, "AEDECOD");
    assert_eq!(column.len(), 4);

    let entries = column.entries();
    assert_eq!(entries[0].record_id, "S001");
    assert_eq!(entries[0].value.as_deref(), Some("HEADACHE"));
    // Blank cell comes through as missing
    assert_eq!(entries[2].record_id, "S003");
    assert!(entries[2].is_missing());
}

#[test]
fn record_column_missing_field_is_error() {
    let dataset = load_dataset(&data_path("filled_ae.csv")).expect("load dataset");
    let err = dataset
        .record_column("SUBJID", "LBTEST")
        .expect_err("absent field column");
    match err {
        CrfError::MissingColumn { column } => assert_eq!(column, "LBTEST"),
        other => panic!("expected MissingColumn, got {other}"),
    }
}
