use std::path::Path;

use fxhash::FxHashMap;
use log::{debug, warn};

use brcaint_core::models::Table;
use brcaint_core::utils::parse_numeric;
use brcaint_core::TableError;

use crate::consts::{CODE_SECOND_COLUMN, CODE_THIRD_COLUMN, HYPOMORPH_CODE, HYPOMORPH_LABEL};
use crate::errors::LookupError;
use crate::evidence::Evidence;

///
/// Normalise a raw results cell to a result code: numeric values are
/// truncated toward zero, so `2`, `2.0` and `2.7` all become `"2"`.
///
pub fn result_code(raw: &str) -> Result<String, LookupError> {
    match parse_numeric(raw) {
        Some(value) => Ok((value.trunc() as i64).to_string()),
        None => Err(LookupError::NotNumeric(raw.to_string())),
    }
}

///
/// Maps (track, result code) to the evidence label for that outcome.
///
#[derive(Clone, Debug, Default)]
pub struct ClassificationTable {
    classes: FxHashMap<String, FxHashMap<String, Evidence>>,
}

impl ClassificationTable {
    pub fn new() -> Self {
        Self::default()
    }

    ///
    /// Build the table from its spreadsheet form.
    ///
    /// Columns are positional: track name, label for code `2`, label for
    /// code `0`. Any further columns are ignored. A later row for the same
    /// track replaces the earlier labels.
    ///
    pub fn from_table(table: &Table) -> Result<Self, TableError> {
        if table.n_columns() < 3 {
            return Err(TableError::TooFewColumns {
                expected: 3,
                found: table.n_columns(),
            });
        }

        let mut classes = ClassificationTable::new();

        for (index, row) in table.rows.iter().enumerate() {
            let Some(track) = row[0].as_deref() else {
                warn!("Row {} of the classification table has no track name, skipping", index + 1);
                continue;
            };

            if classes.contains_track(track) {
                debug!("Track {} listed more than once, keeping the last row", track);
            }

            classes.insert(track, CODE_THIRD_COLUMN, Evidence::from(row[2].clone()));
            classes.insert(track, CODE_SECOND_COLUMN, Evidence::from(row[1].clone()));
        }

        Ok(classes)
    }

    pub fn from_path(path: &Path) -> Result<Self, TableError> {
        let table = Table::from_path(path, 0)?;
        Self::from_table(&table)
    }

    pub fn insert(&mut self, track: &str, code: &str, evidence: Evidence) {
        self.classes
            .entry(track.to_string())
            .or_default()
            .insert(code.to_string(), evidence);
    }

    pub fn contains_track(&self, track: &str) -> bool {
        self.classes.contains_key(track)
    }

    pub fn n_tracks(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn get(&self, track: &str, code: &str) -> Result<&Evidence, LookupError> {
        let codes = self
            .classes
            .get(track)
            .ok_or_else(|| LookupError::UnknownTrack(track.to_string()))?;

        codes.get(code).ok_or_else(|| LookupError::UnknownCode {
            track: track.to_string(),
            code: code.to_string(),
        })
    }

    ///
    /// Turn one raw results cell into evidence.
    ///
    /// Code `1` is always a hypomorph and never consults the table.
    ///
    pub fn evidence_for(&self, track: &str, raw: &str) -> Result<Evidence, LookupError> {
        let code = result_code(raw)?;

        if code == HYPOMORPH_CODE {
            return Ok(Evidence::from(HYPOMORPH_LABEL));
        }

        self.get(track, &code).cloned()
    }
}
