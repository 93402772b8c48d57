use std::ffi::OsStr;
use std::fs::File;
use std::io::prelude::*;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use flate2::read::MultiGzDecoder;

use crate::consts::{GZ_EXTENSION, MISSING_MARKERS, TAB_DELIMITED_EXTENSIONS};

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>> {
    let is_gzipped = path.extension() == Some(OsStr::new(GZ_EXTENSION));
    let file = File::open(path).with_context(|| format!("Failed to open file: {:?}", path))?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    let reader = BufReader::new(file);

    Ok(reader)
}

///
/// Pick the field delimiter for a table export from its file name.
///
/// `.tsv`, `.tab` and `.txt` (optionally followed by `.gz`) are tab-delimited,
/// anything else is read as CSV.
///
pub fn delimiter_for_path(path: &Path) -> u8 {
    let filename = path
        .file_name()
        .and_then(|f| f.to_str())
        .unwrap_or_default()
        .to_lowercase();
    let filename = filename
        .strip_suffix(&format!(".{}", GZ_EXTENSION))
        .unwrap_or(&filename);

    let ext = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();

    if TAB_DELIMITED_EXTENSIONS.contains(&ext) {
        b'\t'
    } else {
        b','
    }
}

/// True if a raw cell value should be treated as missing.
pub fn is_missing_value(value: &str) -> bool {
    MISSING_MARKERS.contains(&value.trim())
}

///
/// Parse a cell as a number, accepting both integer and float notation.
///
/// Returns `None` for non-numeric text and for non-finite values.
///
pub fn parse_numeric(value: &str) -> Option<f64> {
    let value = value.trim();
    if let Ok(int) = value.parse::<i64>() {
        return Some(int as f64);
    }
    value.parse::<f64>().ok().filter(|v| v.is_finite())
}
