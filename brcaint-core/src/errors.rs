use thiserror::Error;

#[derive(Error, Debug)]
pub enum TableError {
    #[error("Can't read file: {0}")]
    FileReadError(String),

    #[error("No header row found in table: {0}")]
    MissingHeader(String),

    #[error("Expected at least {expected} columns, found {found}")]
    TooFewColumns { expected: usize, found: usize },

    #[error("Column not found: {0}")]
    MissingColumn(String),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
