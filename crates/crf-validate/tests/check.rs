#![allow(missing_docs)]

use std::path::PathBuf;

use crf_ingest::{load_dataset, load_terminology};
use crf_model::{CheckWarning, CodelistIndex, Suggestion};
use crf_validate::{build_payload, check_against_index};

fn data_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name)
}

fn demo_index() -> CodelistIndex {
    let rows = load_terminology(&data_path("terminology.csv")).expect("load terminology");
    CodelistIndex::build(&rows).expect("build index")
}

#[test]
fn end_to_end_sex_check() {
    let index = demo_index();
    let dataset = load_dataset(&data_path("filled_demo.csv")).expect("load dataset");
    let column = dataset.record_column("SUBJID", "SEX").expect("extract SEX");

    let report = check_against_index(&index, &column, "SEX");

    assert_eq!(report.total_records, 5);
    assert_eq!(report.compliant, 2); // S001 MALE, S004 FEMALE
    assert_eq!(report.skipped, 1); // S003 blank
    assert_eq!(report.non_compliant(), 2); // S002 Femlae, S005 male
    assert!(report.warnings.is_empty());

    let typo = report
        .findings
        .iter()
        .find(|finding| finding.record_id == "S002")
        .expect("S002 flagged");
    match &typo.suggestion {
        Suggestion::Replacement { value, similarity } => {
            assert_eq!(value, "FEMALE");
            assert!(*similarity < 1.0);
        }
        Suggestion::NoMatch => panic!("expected FEMALE suggestion for Femlae"),
    }

    // Lowercase exact term is flagged under the case-sensitive policy but
    // repaired at full similarity.
    let lowercase = report
        .findings
        .iter()
        .find(|finding| finding.record_id == "S005")
        .expect("S005 flagged");
    match &lowercase.suggestion {
        Suggestion::Replacement { value, similarity } => {
            assert_eq!(value, "MALE");
            assert!((similarity - 1.0).abs() < f64::EPSILON);
        }
        Suggestion::NoMatch => panic!("expected MALE suggestion for male"),
    }
}

#[test]
fn unknown_codelist_flags_all_with_warning() {
    let index = demo_index();
    let dataset = load_dataset(&data_path("filled_demo.csv")).expect("load dataset");
    let column = dataset
        .record_column("SUBJID", "COUNTRY")
        .expect("extract COUNTRY");

    let report = check_against_index(&index, &column, "COUNTRY");

    assert_eq!(report.compliant, 0);
    assert_eq!(report.non_compliant(), 5);
    assert_eq!(
        report.warnings,
        vec![CheckWarning::UnknownCodelist {
            codelist: "COUNTRY".to_string()
        }]
    );
    assert!(
        report
            .findings
            .iter()
            .all(|finding| finding.suggestion == Suggestion::NoMatch)
    );
}

#[test]
fn payload_covers_all_checked_fields() {
    let index = demo_index();
    let dataset = load_dataset(&data_path("filled_demo.csv")).expect("load dataset");

    let reports = vec![
        check_against_index(
            &index,
            &dataset.record_column("SUBJID", "SEX").expect("SEX"),
            "SEX",
        ),
        check_against_index(
            &index,
            &dataset.record_column("SUBJID", "COUNTRY").expect("COUNTRY"),
            "COUNTRY",
        ),
    ];
    let payload = build_payload("filled_demo.csv", &reports);

    assert_eq!(payload.reports.len(), 2);
    let sex = &payload.reports[0];
    assert_eq!(sex.field, "SEX");
    assert_eq!(
        sex.compliant + sex.non_compliant + sex.skipped,
        sex.total_records
    );
    assert!(!payload.reports[1].warnings.is_empty());
}
