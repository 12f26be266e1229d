//! Terminology table loader.
//!
//! The table is long-format CSV with `CODELIST` and `VALUE` columns: one
//! row per (codelist, permitted term) pair. Header matching is
//! case-insensitive and BOM-tolerant; anything structurally malformed is
//! rejected here so the core can assume well-typed string columns.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use crf_model::TerminologyRow;

use crate::error::{IngestError, Result};

const CODELIST_HEADER: &str = "CODELIST";
const VALUE_HEADER: &str = "VALUE";

/// Load a terminology table from CSV.
///
/// Rows are returned verbatim, including blank cells; dropping unusable
/// rows is the index builder's job, so the loader stays a faithful view of
/// the file.
pub fn load_terminology(path: &Path) -> Result<Vec<TerminologyRow>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|error| IngestError::from_csv_error(path, error))?;

    let headers = reader
        .headers()
        .map_err(|error| IngestError::csv(path, &error))?
        .clone();
    let codelist_idx = header_index(&headers, CODELIST_HEADER)
        .ok_or_else(|| missing_header(path, CODELIST_HEADER))?;
    let value_idx =
        header_index(&headers, VALUE_HEADER).ok_or_else(|| missing_header(path, VALUE_HEADER))?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|error| IngestError::csv(path, &error))?;
        let codelist = record.get(codelist_idx).unwrap_or("").trim().to_string();
        let value = record.get(value_idx).unwrap_or("").trim().to_string();
        rows.push(TerminologyRow { codelist, value });
    }
    debug!(path = %path.display(), rows = rows.len(), "loaded terminology table");
    Ok(rows)
}

/// Find a header position, ignoring case and a UTF-8 BOM on the first cell.
fn header_index(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|header| header.trim_matches('\u{feff}').trim().eq_ignore_ascii_case(name))
}

fn missing_header(path: &Path, header: &str) -> IngestError {
    IngestError::MissingHeader {
        path: path.to_path_buf(),
        header: header.to_string(),
    }
}
