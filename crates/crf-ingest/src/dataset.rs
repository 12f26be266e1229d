//! Flat CRF dataset loading and column extraction.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use crf_model::{CaseInsensitiveSet, CrfError, RecordColumn};

use crate::error::{IngestError, Result};

/// A loaded CRF dataset: header-addressed string rows in file order.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    headers: Vec<String>,
    rows: Vec<BTreeMap<String, String>>,
}

impl Dataset {
    /// Column headers in file order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of data rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether a column exists, ignoring case.
    pub fn has_column(&self, name: &str) -> bool {
        self.header_set().contains(name)
    }

    /// Extract a record column for one field, keyed by an identifier column.
    ///
    /// The identifier column is required: its absence is a hard error. An
    /// absent field column is also an error here; callers that want the
    /// skip-with-warning behavior test `has_column` first (see
    /// `crf-validate`'s check plan handling).
    pub fn record_column(
        &self,
        id_column: &str,
        field: &str,
    ) -> std::result::Result<RecordColumn, CrfError> {
        let lookup = self.header_set();
        let id_column = lookup.get(id_column).ok_or_else(|| CrfError::MissingColumn {
            column: id_column.to_string(),
        })?;
        let field_column = lookup.get(field).ok_or_else(|| CrfError::MissingColumn {
            column: field.to_string(),
        })?;

        let mut column = RecordColumn::new(field_column);
        for row in &self.rows {
            let record_id = row.get(id_column).cloned().unwrap_or_default();
            let value = row.get(field_column).filter(|v| !v.is_empty()).cloned();
            column.push(record_id, value);
        }
        Ok(column)
    }

    fn header_set(&self) -> CaseInsensitiveSet {
        CaseInsensitiveSet::new(&self.headers)
    }
}

/// Load a flat CSV dataset.
///
/// Cells are trimmed; row order is preserved. Ragged records are a CSV
/// parse error, surfaced with the file path. Duplicate column headers
/// (ignoring case) are rejected here: rows are header-addressed, so a
/// repeated header would make one column silently shadow the other.
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|error| IngestError::from_csv_error(path, error))?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|error| IngestError::csv(path, &error))?
        .iter()
        .map(|header| header.trim_matches('\u{feff}').trim().to_string())
        .collect();

    let mut seen = BTreeSet::new();
    for header in &headers {
        if !seen.insert(header.to_ascii_uppercase()) {
            return Err(IngestError::DuplicateHeader {
                path: path.to_path_buf(),
                header: header.clone(),
            });
        }
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|error| IngestError::csv(path, &error))?;
        let mut row = BTreeMap::new();
        for (idx, value) in record.iter().enumerate() {
            let key = headers.get(idx).cloned().unwrap_or_default();
            row.insert(key, value.trim().to_string());
        }
        rows.push(row);
    }
    debug!(path = %path.display(), rows = rows.len(), columns = headers.len(), "loaded dataset");
    Ok(Dataset { headers, rows })
}
