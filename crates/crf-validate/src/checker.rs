//! Record-column compliance classification.

use std::collections::BTreeSet;

use tracing::{debug, warn};

use crf_model::{CheckWarning, CodelistIndex, ComplianceReport, Finding, RecordColumn};

use crate::suggest::best_suggestion;

/// Classify a record column against an allowed value set.
///
/// Each record lands in exactly one of three buckets: skipped (missing
/// value), compliant (trimmed value is a case-sensitive member of the
/// allowed set), or non-compliant (one finding with a suggestion). Pure
/// computation; running it twice yields identical reports.
pub fn check_column(
    column: &RecordColumn,
    codelist: &str,
    allowed: &BTreeSet<String>,
) -> ComplianceReport {
    let mut report = ComplianceReport {
        field: column.field.clone(),
        codelist: codelist.to_string(),
        total_records: column.len(),
        ..ComplianceReport::default()
    };

    for entry in column.entries() {
        if entry.is_missing() {
            report.skipped += 1;
            continue;
        }
        let observed = entry.value.as_deref().unwrap_or("").trim();
        if allowed.contains(observed) {
            report.compliant += 1;
            continue;
        }
        report.findings.push(Finding {
            record_id: entry.record_id.clone(),
            observed: observed.to_string(),
            suggestion: best_suggestion(observed, allowed),
        });
    }

    debug!(
        field = %report.field,
        codelist = %report.codelist,
        compliant = report.compliant,
        non_compliant = report.non_compliant(),
        skipped = report.skipped,
        "checked column"
    );
    report
}

/// Check a column against the codelist index.
///
/// Resolves the allowed set and attaches an unknown-codelist warning when
/// the codelist has no terms, so the all-flagged outcome is visible rather
/// than silent.
pub fn check_against_index(
    index: &CodelistIndex,
    column: &RecordColumn,
    codelist: &str,
) -> ComplianceReport {
    let allowed = index.allowed_values(codelist);
    let mut report = check_column(column, codelist, allowed);
    if !index.contains(codelist) {
        warn!(codelist, field = %column.field, "codelist has no allowed terms");
        report.warnings.push(CheckWarning::UnknownCodelist {
            codelist: codelist.to_string(),
        });
    }
    report
}
