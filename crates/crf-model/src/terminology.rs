use serde::{Deserialize, Serialize};

/// One row of a long-format controlled-terminology table.
///
/// Each row names a codelist and one permitted term for it. Multiple rows
/// share a codelist; within a codelist the values behave as a set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminologyRow {
    /// Codelist identifier (e.g., "AEDECOD", "SEX").
    pub codelist: String,

    /// A permitted value for that codelist (e.g., "HEADACHE").
    pub value: String,
}

impl TerminologyRow {
    pub fn new(codelist: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            codelist: codelist.into(),
            value: value.into(),
        }
    }
}
