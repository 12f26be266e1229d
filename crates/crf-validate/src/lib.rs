//! Terminology compliance checking.
//!
//! Pure computation over in-memory values: classification is case-sensitive
//! exact membership, suggestions use normalized Levenshtein similarity with
//! a fixed acceptance threshold. No I/O and no shared state; checks for
//! different fields are independent of each other.

mod checker;
mod report_json;
mod suggest;

pub use checker::{check_against_index, check_column};
pub use report_json::{CompliancePayload, FieldReportJson, build_payload, write_report_json};
pub use suggest::{SUGGESTION_THRESHOLD, best_suggestion, normalize};
