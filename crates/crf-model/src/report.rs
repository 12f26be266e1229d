//! Compliance report types.
//!
//! A report is a pure derived value: recomputed on every check, no
//! lifecycle of its own. Records partition exactly into compliant,
//! non-compliant (one finding each), and skipped-missing.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Correction proposal for one non-compliant value.
///
/// `NoMatch` is an explicit marker, distinct from an empty string or a
/// missing field, so rendering can tell "checked, nothing close enough"
/// apart from "not yet checked".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Suggestion {
    /// Closest allowed value at or above the similarity threshold.
    Replacement { value: String, similarity: f64 },
    /// No allowed value came close enough.
    NoMatch,
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Replacement { value, similarity } => {
                write!(f, "{value} ({:.0}%)", similarity * 100.0)
            }
            Self::NoMatch => write!(f, "no suggestion"),
        }
    }
}

/// One non-compliant record with its proposed correction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub record_id: String,
    pub observed: String,
    pub suggestion: Suggestion,
}

/// Non-fatal conditions detected during a check.
///
/// Warnings are data carried on the report, not errors: the check proceeds
/// and the caller decides how to display them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CheckWarning {
    /// The requested codelist has zero allowed values; every non-missing
    /// value registers as non-compliant.
    UnknownCodelist { codelist: String },
    /// The field column is absent from the dataset; the check was skipped.
    MissingColumn { column: String },
}

impl fmt::Display for CheckWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownCodelist { codelist } => {
                write!(
                    f,
                    "no allowed terms found for codelist {codelist}; all values will be flagged"
                )
            }
            Self::MissingColumn { column } => {
                write!(f, "column {column} not found in dataset; check skipped")
            }
        }
    }
}

/// Outcome of checking one record column against one codelist.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComplianceReport {
    /// Field name that was checked (e.g., "AEDECOD").
    pub field: String,
    /// Codelist the field was checked against.
    pub codelist: String,
    /// Total records in the column, missing values included.
    pub total_records: usize,
    /// Records whose value is a member of the allowed set.
    pub compliant: usize,
    /// Records excluded because the value was missing.
    pub skipped: usize,
    /// One entry per non-compliant record.
    pub findings: Vec<Finding>,
    /// Non-fatal conditions encountered during the check.
    pub warnings: Vec<CheckWarning>,
}

impl ComplianceReport {
    pub fn non_compliant(&self) -> usize {
        self.findings.len()
    }

    /// True when no record was flagged. A column of only missing values is
    /// vacuously compliant; callers that need to tell that apart from real
    /// data must look at `total_records` and `skipped`.
    pub fn is_compliant(&self) -> bool {
        self.findings.is_empty()
    }
}
