//! Descriptive statistics for BRCA1/BRCA2 supplementary assay tables.
//!
//! How many assays tested each variant, split by reference panel and VUS,
//! and how many documented variants were tested at all.
//!
//! ```no_run
//! use brcaint_core::models::Table;
//! use brcaint_stats::{AssayTable, consts::DEFAULT_SKIP_ROWS};
//!
//! let table = Table::from_path("sup_table_1.csv".as_ref(), DEFAULT_SKIP_ROWS).unwrap();
//! let stats = AssayTable::new(&table).unwrap().summarize();
//! println!("{} assay results", stats.total_assays_tested);
//! ```
pub mod consts;
pub mod errors;
pub mod statistics;

// re-exports
pub use errors::StatsError;
pub use statistics::{AssayStatistics, AssayTable, VariantSubset};
