/// Cell contents treated as "no value", matched after trimming.
pub const MISSING_MARKERS: &[&str] = &[
    "", "NA", "N/A", "n/a", "NaN", "nan", "-nan", "NULL", "null", "None", "#N/A", "<NA>",
];

/// Extensions (before an optional `.gz`) that are read as tab-delimited.
pub const TAB_DELIMITED_EXTENSIONS: &[&str] = &["tsv", "tab", "txt"];

pub const GZ_EXTENSION: &str = "gz";
