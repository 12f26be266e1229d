use serde::{Deserialize, Serialize};

use crate::is_missing_value;

/// One (record id, observed value) pair within a record column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordEntry {
    /// Subject or record identifier (e.g., a SUBJID value).
    pub record_id: String,

    /// Observed value; `None` when the source cell was absent.
    pub value: Option<String>,
}

impl RecordEntry {
    /// Whether this entry counts as missing (absent or whitespace-only).
    pub fn is_missing(&self) -> bool {
        is_missing_value(self.value.as_deref())
    }
}

/// Ordered sequence of observed values for one field across one dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordColumn {
    /// Field name under test (e.g., "AEDECOD").
    pub field: String,

    entries: Vec<RecordEntry>,
}

impl RecordColumn {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, record_id: impl Into<String>, value: Option<String>) {
        self.entries.push(RecordEntry {
            record_id: record_id.into(),
            value,
        });
    }

    pub fn entries(&self) -> &[RecordEntry] {
        &self.entries
    }

    /// Total record count, missing values included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
