use thiserror::Error;

use brcaint_core::TableError;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Table has {found} columns, but at least {expected} metadata columns are required")]
    MissingMetadata { expected: usize, found: usize },

    #[error(transparent)]
    Table(#[from] TableError),
}
