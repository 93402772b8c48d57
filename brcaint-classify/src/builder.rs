use log::{debug, info, warn};
use serde::Serialize;

use brcaint_core::models::Table;
use brcaint_core::TableError;

use crate::classes::ClassificationTable;
use crate::errors::LookupError;
use crate::evidence::{Evidence, VariantEvidence};

///
/// Per-reason counts of results cells that produced no evidence.
///
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SkipSummary {
    pub not_numeric: usize,
    pub unknown_track: usize,
    pub unknown_code: usize,
}

impl SkipSummary {
    pub fn record(&mut self, error: &LookupError) {
        match error {
            LookupError::NotNumeric(_) => self.not_numeric += 1,
            LookupError::UnknownTrack(_) => self.unknown_track += 1,
            LookupError::UnknownCode { .. } => self.unknown_code += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.not_numeric + self.unknown_track + self.unknown_code
    }
}

///
/// Evidence for every variant that had at least one usable result, in the
/// order the variants first produced evidence.
///
#[derive(Clone, Debug, Default)]
pub struct EvidenceSet {
    pub variants: Vec<VariantEvidence>,
    pub skipped: SkipSummary,
}

impl EvidenceSet {
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}

///
/// Gather evidence labels for every row of a results table.
///
/// Tracks are walked in header order and, within a track, rows top to
/// bottom, so each variant's evidence follows track order. Cells that
/// can't be turned into evidence are skipped and tallied.
///
/// # Arguments
/// - results: the per-track results table
/// - classes: the (track, code) to label mapping
/// - key_column: column holding the variant identifier; without one the
///   0-based row index is the key
///
pub fn build_evidence(
    results: &Table,
    classes: &ClassificationTable,
    key_column: Option<&str>,
) -> Result<EvidenceSet, TableError> {
    let key_index = key_column.map(|k| results.column_index(k)).transpose()?;

    let mut slots: Vec<Option<Vec<Evidence>>> = vec![None; results.n_rows()];
    let mut first_seen: Vec<usize> = Vec::new();
    let mut skipped = SkipSummary::default();

    for (column, track) in results.headers.iter().enumerate() {
        if Some(column) == key_index {
            continue;
        }

        for (row, cell) in results.column(column).enumerate() {
            let Some(raw) = cell else {
                continue;
            };

            match classes.evidence_for(track, raw) {
                Ok(evidence) => {
                    let slot = &mut slots[row];
                    if slot.is_none() {
                        first_seen.push(row);
                    }
                    slot.get_or_insert_with(Vec::new).push(evidence);
                }
                Err(e) => {
                    debug!("Skipping row {} on track {}: {}", row, track, e);
                    skipped.record(&e);
                }
            }
        }
    }

    let variants: Vec<VariantEvidence> = first_seen
        .into_iter()
        .map(|row| {
            let key = key_index
                .and_then(|k| results.cell(row, k))
                .map(str::to_string)
                .unwrap_or_else(|| row.to_string());
            VariantEvidence::new(key, slots[row].take().unwrap_or_default())
        })
        .collect();

    info!(
        "Collected evidence for {} of {} variants",
        variants.len(),
        results.n_rows()
    );
    if skipped.total() > 0 {
        warn!(
            "Skipped {} cells ({} not numeric, {} unknown track, {} unknown code)",
            skipped.total(),
            skipped.not_numeric,
            skipped.unknown_track,
            skipped.unknown_code
        );
    }

    Ok(EvidenceSet { variants, skipped })
}
