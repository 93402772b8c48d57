/// Metadata columns T1..T7 precede the assay columns.
pub const N_METADATA_COLUMNS: usize = 7;

/// Present when the variant belongs to the reference panel.
pub const REFERENCE_COLUMN: &str = "T6";

/// `1` when the variant is documented.
pub const DOCUMENTED_COLUMN: &str = "T7";

/// The supplementary sheets carry one metadata line above the header.
pub const DEFAULT_SKIP_ROWS: usize = 1;
