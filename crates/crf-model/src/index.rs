//! Codelist index: per-codelist allowed value sets.
//!
//! Built once per terminology table load and read-only afterwards. A
//! terminology change means a fresh `build`; consumers never mutate an
//! existing index, so publishing a rebuilt index is a plain pointer swap.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::{CrfError, Result};
use crate::terminology::TerminologyRow;

static EMPTY_SET: LazyLock<BTreeSet<String>> = LazyLock::new(BTreeSet::new);

/// Mapping from codelist name to its set of allowed values.
///
/// Codelist names are matched case-insensitively (uppercase keys). Values
/// are kept verbatim apart from trimming; membership tests downstream are
/// case-sensitive on the stored form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CodelistIndex {
    codelists: BTreeMap<String, BTreeSet<String>>,
}

impl CodelistIndex {
    /// Build an index from a flat terminology table.
    ///
    /// Rows with a blank codelist name or blank value are dropped, and
    /// duplicate values within a codelist collapse. Fails with
    /// [`CrfError::EmptyTerminology`] when no usable row remains.
    pub fn build(rows: &[TerminologyRow]) -> Result<Self> {
        let mut codelists: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for row in rows {
            let codelist = row.codelist.trim();
            let value = row.value.trim();
            if codelist.is_empty() || value.is_empty() {
                continue;
            }
            codelists
                .entry(codelist.to_uppercase())
                .or_default()
                .insert(value.to_string());
        }
        if codelists.is_empty() {
            return Err(CrfError::EmptyTerminology);
        }
        Ok(Self { codelists })
    }

    /// Allowed values for a codelist.
    ///
    /// Unknown codelists return the empty set rather than an error: nothing
    /// is permitted, so every observed value registers as non-compliant
    /// downstream. Callers are expected to pair the empty result with an
    /// unknown-codelist warning (see `contains`).
    pub fn allowed_values(&self, codelist: &str) -> &BTreeSet<String> {
        self.codelists
            .get(&codelist.trim().to_uppercase())
            .unwrap_or(&EMPTY_SET)
    }

    /// Whether the codelist was present in the terminology table.
    pub fn contains(&self, codelist: &str) -> bool {
        self.codelists
            .contains_key(&codelist.trim().to_uppercase())
    }

    /// Codelist names in sorted order, with their allowed sets.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.codelists
            .iter()
            .map(|(name, values)| (name.as_str(), values))
    }

    /// Number of distinct codelists.
    pub fn len(&self) -> usize {
        self.codelists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codelists.is_empty()
    }
}
