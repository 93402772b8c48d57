//! Testing statistics for the supplementary assay tables.
//!
//! A variant is "tested" by an assay when its cell in that assay column has
//! a value. Reference-panel variants have a value in `T6`, the rest are
//! VUS; documented variants have `T7 == 1`.

use std::collections::BTreeMap;

use log::debug;
use serde::Serialize;

use brcaint_core::models::Table;
use brcaint_core::utils::parse_numeric;

use crate::consts::{DOCUMENTED_COLUMN, N_METADATA_COLUMNS, REFERENCE_COLUMN};
use crate::errors::StatsError;

/// Which variants a distribution is computed over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VariantSubset {
    All,
    /// `T6` has a value.
    Reference,
    /// `T6` is empty.
    Vus,
}

///
/// A supplementary table viewed as metadata columns followed by assays.
///
#[derive(Debug)]
pub struct AssayTable<'a> {
    table: &'a Table,
    reference_column: usize,
    documented_column: usize,
}

impl<'a> AssayTable<'a> {
    pub fn new(table: &'a Table) -> Result<Self, StatsError> {
        if table.n_columns() < N_METADATA_COLUMNS {
            return Err(StatsError::MissingMetadata {
                expected: N_METADATA_COLUMNS,
                found: table.n_columns(),
            });
        }

        let reference_column = table.column_index(REFERENCE_COLUMN)?;
        let documented_column = table.column_index(DOCUMENTED_COLUMN)?;

        debug!(
            "Assay table with {} variants and {} assays",
            table.n_rows(),
            table.n_columns() - N_METADATA_COLUMNS
        );

        Ok(AssayTable {
            table,
            reference_column,
            documented_column,
        })
    }

    pub fn assay_names(&self) -> &[String] {
        &self.table.headers[N_METADATA_COLUMNS..]
    }

    /// Number of assays that tested each variant, in row order.
    pub fn tests_per_variant(&self) -> Vec<usize> {
        self.table
            .rows
            .iter()
            .map(|row| {
                row[N_METADATA_COLUMNS..]
                    .iter()
                    .filter(|c| c.is_some())
                    .count()
            })
            .collect()
    }

    fn is_reference(&self, row: usize) -> bool {
        self.table.cell(row, self.reference_column).is_some()
    }

    fn is_documented(&self, row: usize) -> bool {
        self.table
            .cell(row, self.documented_column)
            .and_then(parse_numeric)
            .is_some_and(|v| v == 1.0)
    }

    fn in_subset(&self, row: usize, subset: VariantSubset) -> bool {
        match subset {
            VariantSubset::All => true,
            VariantSubset::Reference => self.is_reference(row),
            VariantSubset::Vus => !self.is_reference(row),
        }
    }

    fn count_rows<F>(&self, predicate: F) -> usize
    where
        F: Fn(usize, usize) -> bool,
    {
        self.tests_per_variant()
            .into_iter()
            .enumerate()
            .filter(|(row, n_tests)| predicate(*row, *n_tests))
            .count()
    }

    /// Total number of (variant, assay) results in the table.
    pub fn sum_assays_tested(&self) -> usize {
        self.tests_per_variant().into_iter().sum()
    }

    ///
    /// Map from number of assays to number of variants tested that many
    /// times. Only observed counts appear; zero is included when observed.
    ///
    pub fn test_count_distribution(&self, subset: VariantSubset) -> BTreeMap<usize, usize> {
        let mut distribution = BTreeMap::new();
        for (row, n_tests) in self.tests_per_variant().into_iter().enumerate() {
            if self.in_subset(row, subset) {
                *distribution.entry(n_tests).or_insert(0) += 1;
            }
        }
        distribution
    }

    /// Documented variants with at least one assay result.
    pub fn count_documented_tested(&self) -> usize {
        self.count_rows(|row, n_tests| self.is_documented(row) && n_tests > 0)
    }

    /// Reference-panel variants with at least one assay result.
    pub fn count_reference_tested(&self) -> usize {
        self.count_rows(|row, n_tests| self.is_reference(row) && n_tests > 0)
    }

    /// Documented variants outside the reference panel with at least one assay result.
    pub fn count_documented_without_reference_and_tested(&self) -> usize {
        self.count_rows(|row, n_tests| {
            self.is_documented(row) && !self.is_reference(row) && n_tests > 0
        })
    }

    /// Number of variants each assay tested, in column order.
    pub fn tests_per_track(&self) -> Vec<(String, usize)> {
        self.assay_names()
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let tested = self
                    .table
                    .column(N_METADATA_COLUMNS + i)
                    .filter(|c| c.is_some())
                    .count();
                (name.clone(), tested)
            })
            .collect()
    }

    pub fn summarize(&self) -> AssayStatistics {
        AssayStatistics {
            number_of_variants: self.table.n_rows(),
            total_assays_tested: self.sum_assays_tested(),
            documented_tested_variants: self.count_documented_tested(),
            reference_variants_tested: self.count_reference_tested(),
            documented_without_reference_tested: self
                .count_documented_without_reference_and_tested(),
            test_distribution: self.test_count_distribution(VariantSubset::All),
            reference_test_distribution: self.test_count_distribution(VariantSubset::Reference),
            vus_test_distribution: self.test_count_distribution(VariantSubset::Vus),
            tests_per_track: self.tests_per_track().into_iter().collect(),
        }
    }
}

///
/// Every statistic for one table, serialisable to JSON.
///
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AssayStatistics {
    pub number_of_variants: usize,
    pub total_assays_tested: usize,
    pub documented_tested_variants: usize,
    pub reference_variants_tested: usize,
    pub documented_without_reference_tested: usize,
    pub test_distribution: BTreeMap<usize, usize>,
    pub reference_test_distribution: BTreeMap<usize, usize>,
    pub vus_test_distribution: BTreeMap<usize, usize>,
    pub tests_per_track: BTreeMap<String, usize>,
}
