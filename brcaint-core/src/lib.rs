//! Core infrastructure for brcaint.
//!
//! This crate holds the pieces every other brcaint crate needs: a small
//! in-memory [`Table`](models::Table) built from CSV/TSV exports of assay
//! spreadsheets, missing-cell detection that mirrors the usual spreadsheet
//! NA spellings, and the shared error type for table loading.
//!
//! ```no_run
//! use brcaint_core::models::Table;
//!
//! let table = Table::from_path("results.csv".as_ref(), 0).unwrap();
//! println!("{} tracks, {} rows", table.n_columns(), table.n_rows());
//! ```
pub mod consts;
pub mod errors;
pub mod models;
pub mod utils;

// re-exports
pub use errors::TableError;
pub use models::{Cell, Table};
