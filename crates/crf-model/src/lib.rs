pub mod column;
pub mod error;
pub mod index;
pub mod lookup;
pub mod report;
pub mod terminology;

pub use column::{RecordColumn, RecordEntry};
pub use error::{CrfError, Result};
pub use index::CodelistIndex;
pub use lookup::CaseInsensitiveSet;
pub use report::{CheckWarning, ComplianceReport, Finding, Suggestion};
pub use terminology::TerminologyRow;

/// Returns true when an observed value counts as missing.
///
/// Missing values are excluded from compliance evaluation entirely; they
/// are neither compliant nor non-compliant.
pub fn is_missing_value(value: Option<&str>) -> bool {
    match value {
        None => true,
        Some(text) => text.trim().is_empty(),
    }
}
