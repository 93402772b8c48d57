use std::fmt::{self, Display};
use std::io::Read;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::errors::TableError;
use crate::utils::{delimiter_for_path, get_dynamic_reader, is_missing_value};

///
/// A single table cell: `None` when the spreadsheet had no value.
///
pub type Cell = Option<String>;

///
/// Table struct, the in-memory form of one exported spreadsheet sheet.
///
/// Every data row holds exactly as many cells as there are headers.
///
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
    pub path: Option<PathBuf>,
}

impl Table {
    ///
    /// Read a table from a CSV/TSV file, optionally gzip-compressed.
    ///
    /// # Arguments
    /// - path: path to the table on disk
    /// - skip_rows: number of leading lines to drop before the header row
    ///
    pub fn from_path(path: &Path, skip_rows: usize) -> Result<Self, TableError> {
        let reader = get_dynamic_reader(path)
            .map_err(|e| TableError::FileReadError(format!("{:#}", e)))?;

        let mut table = Self::from_reader(reader, delimiter_for_path(path), skip_rows)
            .map_err(|e| match e {
                TableError::MissingHeader(_) => TableError::MissingHeader(path.display().to_string()),
                other => other,
            })?;
        table.path = Some(path.to_path_buf());

        debug!(
            "Loaded table {:?}: {} columns, {} rows",
            path,
            table.n_columns(),
            table.n_rows()
        );

        Ok(table)
    }

    ///
    /// Read a table from any reader.
    ///
    /// Header names are trimmed. Missing markers become `None`. Short rows are
    /// padded with missing cells; surplus cells are dropped.
    ///
    pub fn from_reader<R: Read>(
        reader: R,
        delimiter: u8,
        skip_rows: usize,
    ) -> Result<Self, TableError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut records = csv_reader.records().skip(skip_rows);

        let headers: Vec<String> = match records.next() {
            Some(record) => record?.iter().map(|h| h.trim().to_string()).collect(),
            None => return Err(TableError::MissingHeader("<reader>".to_string())),
        };

        let mut rows = Vec::new();
        for (index, record) in records.enumerate() {
            let record = record?;

            if record.len() > headers.len() {
                warn!(
                    "Row {} has {} fields but the header has {}, dropping the extra fields",
                    index + 1,
                    record.len(),
                    headers.len()
                );
            }

            let mut row: Vec<Cell> = record
                .iter()
                .take(headers.len())
                .map(|value| {
                    if is_missing_value(value) {
                        None
                    } else {
                        Some(value.trim().to_string())
                    }
                })
                .collect();
            row.resize(headers.len(), None);

            rows.push(row);
        }

        Ok(Table {
            headers,
            rows,
            path: None,
        })
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_columns(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    ///
    /// Position of a column by (trimmed) header name.
    ///
    pub fn column_index(&self, name: &str) -> Result<usize, TableError> {
        self.headers
            .iter()
            .position(|h| h == name.trim())
            .ok_or_else(|| TableError::MissingColumn(name.to_string()))
    }

    ///
    /// Iterate over the cells of one column, top to bottom.
    ///
    pub fn column(&self, index: usize) -> impl Iterator<Item = &Cell> + '_ {
        self.rows.iter().map(move |row| &row[index])
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .and_then(|c| c.as_deref())
    }
}

impl TryFrom<&Path> for Table {
    type Error = TableError;

    fn try_from(value: &Path) -> Result<Self, Self::Error> {
        Table::from_path(value, 0)
    }
}

impl TryFrom<&str> for Table {
    type Error = TableError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Table::from_path(Path::new(value), 0)
    }
}

impl Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Table with {} columns and {} rows.",
            self.n_columns(),
            self.n_rows()
        )
    }
}
