//! JSON serialization of compliance results for downstream tooling.

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Utc;
use serde::Serialize;

use crf_model::{CheckWarning, ComplianceReport, Finding};

const REPORT_SCHEMA: &str = "crf-compliance.report";
const REPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
pub struct CompliancePayload {
    pub schema: &'static str,
    pub schema_version: u32,
    pub generated_at: String,
    pub dataset: String,
    pub reports: Vec<FieldReportJson>,
}

#[derive(Debug, Serialize)]
pub struct FieldReportJson {
    pub field: String,
    pub codelist: String,
    pub total_records: usize,
    pub compliant: usize,
    pub non_compliant: usize,
    pub skipped: usize,
    pub is_compliant: bool,
    pub findings: Vec<Finding>,
    pub warnings: Vec<CheckWarning>,
}

/// Build the serializable payload for a set of per-field reports.
pub fn build_payload(dataset: &str, reports: &[ComplianceReport]) -> CompliancePayload {
    CompliancePayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        dataset: dataset.to_string(),
        reports: reports
            .iter()
            .map(|report| FieldReportJson {
                field: report.field.clone(),
                codelist: report.codelist.clone(),
                total_records: report.total_records,
                compliant: report.compliant,
                non_compliant: report.non_compliant(),
                skipped: report.skipped,
                is_compliant: report.is_compliant(),
                findings: report.findings.clone(),
                warnings: report.warnings.clone(),
            })
            .collect(),
    }
}

/// Write the compliance report as pretty-printed JSON.
pub fn write_report_json(
    output_path: &Path,
    dataset: &str,
    reports: &[ComplianceReport],
) -> Result<PathBuf> {
    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    let payload = build_payload(dataset, reports);
    let json = serde_json::to_string_pretty(&payload)?;
    std::fs::write(output_path, format!("{json}\n"))?;
    Ok(output_path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crf_model::Suggestion;

    #[test]
    fn payload_shape() {
        let reports = vec![ComplianceReport {
            field: "SEX".to_string(),
            codelist: "SEX".to_string(),
            total_records: 3,
            compliant: 1,
            skipped: 1,
            findings: vec![Finding {
                record_id: "S2".to_string(),
                observed: "Femlae".to_string(),
                suggestion: Suggestion::Replacement {
                    value: "FEMALE".to_string(),
                    similarity: 0.67,
                },
            }],
            warnings: vec![],
        }];
        let payload = build_payload("filled_demo.csv", &reports);
        assert_eq!(payload.schema, REPORT_SCHEMA);
        assert_eq!(payload.reports.len(), 1);
        assert_eq!(payload.reports[0].non_compliant, 1);
        assert!(!payload.reports[0].is_compliant);

        let json = serde_json::to_value(&payload).expect("serialize payload");
        assert_eq!(json["dataset"], "filled_demo.csv");
        assert_eq!(json["reports"][0]["findings"][0]["suggestion"]["kind"], "replacement");
    }
}
