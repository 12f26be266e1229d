use std::path::PathBuf;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span, warn};

use crf_ingest::{Dataset, load_dataset, load_terminology};
use crf_model::{CheckWarning, CodelistIndex, ComplianceReport};
use crf_validate::{check_against_index, write_report_json};

use crate::cli::{CheckArgs, CodelistsArgs, FieldSpec};
use crate::summary::apply_table_style;

/// Result of a `check` run, for summary rendering and exit-code gating.
pub struct CheckOutcome {
    pub dataset: String,
    pub reports: Vec<ComplianceReport>,
    /// Fields that could not be checked at all (column absent).
    pub skipped_fields: Vec<CheckWarning>,
    pub report_path: Option<PathBuf>,
}

impl CheckOutcome {
    pub fn has_findings(&self) -> bool {
        self.reports.iter().any(|report| !report.is_compliant())
    }
}

pub fn run_check(args: &CheckArgs) -> Result<CheckOutcome> {
    let rows = load_terminology(&args.terminology).context("load terminology table")?;
    let index = CodelistIndex::build(&rows).context("build codelist index")?;
    info!(
        codelists = index.len(),
        terminology = %args.terminology.display(),
        "codelist index ready"
    );

    let dataset = load_dataset(&args.dataset).context("load dataset")?;
    let dataset_name = args.dataset.display().to_string();

    let plan = check_plan(args, &dataset, &index);
    if plan.is_empty() {
        warn!(dataset = %dataset_name, "no checkable fields; nothing matches the terminology");
    }

    let mut reports = Vec::new();
    let mut skipped_fields = Vec::new();
    for spec in &plan {
        let span = info_span!("check", field = %spec.column, codelist = %spec.codelist);
        let _guard = span.enter();

        if !dataset.has_column(&spec.column) {
            warn!(column = %spec.column, "column not found in dataset; check skipped");
            skipped_fields.push(CheckWarning::MissingColumn {
                column: spec.column.clone(),
            });
            continue;
        }
        let column = dataset
            .record_column(&args.id_column, &spec.column)
            .with_context(|| format!("extract column {}", spec.column))?;
        let report = check_against_index(&index, &column, &spec.codelist);
        info!(
            compliant = report.compliant,
            non_compliant = report.non_compliant(),
            skipped = report.skipped,
            "field checked"
        );
        reports.push(report);
    }

    let report_path = match &args.report {
        Some(path) => {
            let written = write_report_json(path, &dataset_name, &reports)
                .context("write JSON report")?;
            Some(written)
        }
        None => None,
    };

    Ok(CheckOutcome {
        dataset: dataset_name,
        reports,
        skipped_fields,
        report_path,
    })
}

/// Resolve which (column, codelist) pairs to check.
///
/// Explicit `--field` flags win. Otherwise every dataset column whose name
/// matches a codelist is checked against it, the way the original sample
/// data pairs AEDECOD, SEX and LBTEST columns with same-named codelists.
fn check_plan(args: &CheckArgs, dataset: &Dataset, index: &CodelistIndex) -> Vec<FieldSpec> {
    if !args.fields.is_empty() {
        return args.fields.clone();
    }
    dataset
        .headers()
        .iter()
        .filter(|header| !header.eq_ignore_ascii_case(&args.id_column))
        .filter(|header| index.contains(header))
        .map(|header| FieldSpec {
            column: header.clone(),
            codelist: header.clone(),
        })
        .collect()
}

pub fn run_codelists(args: &CodelistsArgs) -> Result<()> {
    let rows = load_terminology(&args.terminology).context("load terminology table")?;
    let index = CodelistIndex::build(&rows).context("build codelist index")?;

    let mut table = Table::new();
    table.set_header(vec!["Codelist", "Terms", "Examples"]);
    apply_table_style(&mut table);
    for (name, values) in index.iter() {
        let examples: Vec<&str> = values.iter().take(3).map(String::as_str).collect();
        let mut examples = examples.join(", ");
        if values.len() > 3 {
            examples.push_str(", ...");
        }
        table.add_row(vec![name.to_string(), values.len().to_string(), examples]);
    }
    println!("{table}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn data_path(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests/data")
            .join(name)
    }

    fn check_args(fields: Vec<FieldSpec>, report: Option<PathBuf>) -> CheckArgs {
        CheckArgs {
            dataset: data_path("filled_demo.csv"),
            terminology: data_path("terminology.csv"),
            id_column: "SUBJID".to_string(),
            fields,
            report,
            quiet_compliant: false,
        }
    }

    fn spec(column: &str) -> FieldSpec {
        FieldSpec {
            column: column.to_string(),
            codelist: column.to_string(),
        }
    }

    #[test]
    fn absent_field_is_skipped_with_warning() {
        let args = check_args(vec![spec("LBTEST")], None);
        let outcome = run_check(&args).expect("run check");

        assert!(outcome.reports.is_empty());
        assert_eq!(
            outcome.skipped_fields,
            vec![CheckWarning::MissingColumn {
                column: "LBTEST".to_string()
            }]
        );
        assert!(!outcome.has_findings());
    }

    #[test]
    fn absent_field_does_not_block_other_checks() {
        let args = check_args(vec![spec("LBTEST"), spec("SEX")], None);
        let outcome = run_check(&args).expect("run check");

        assert_eq!(outcome.reports.len(), 1);
        assert_eq!(outcome.reports[0].field, "SEX");
        assert_eq!(outcome.skipped_fields.len(), 1);
        assert!(outcome.has_findings()); // S002 Femlae
    }

    #[test]
    fn default_plan_pairs_columns_with_same_named_codelists() {
        // No --field flags: SEX matches a codelist, COUNTRY does not, and
        // the SUBJID codelist is ignored because it names the id column.
        let args = check_args(Vec::new(), None);
        let outcome = run_check(&args).expect("run check");

        assert_eq!(outcome.reports.len(), 1);
        let report = &outcome.reports[0];
        assert_eq!(report.field, "SEX");
        assert_eq!(report.codelist, "SEX");
        assert_eq!(report.total_records, 3);
        assert_eq!(report.compliant, 1); // S001 MALE
        assert_eq!(report.non_compliant(), 1); // S002 Femlae
        assert_eq!(report.skipped, 1); // S003 blank
        assert!(outcome.skipped_fields.is_empty());
    }

    #[test]
    fn report_flag_writes_json_payload() {
        let path = std::env::temp_dir().join(format!(
            "crf-compliance-report-{}.json",
            std::process::id()
        ));
        let args = check_args(vec![spec("SEX")], Some(path.clone()));
        let outcome = run_check(&args).expect("run check");

        assert_eq!(outcome.report_path.as_deref(), Some(path.as_path()));
        let contents = std::fs::read_to_string(&path).expect("read report");
        assert!(contents.contains("crf-compliance.report"));
        assert!(contents.contains("\"field\": \"SEX\""));
        std::fs::remove_file(&path).ok();
    }
}
