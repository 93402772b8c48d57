/// Raw result code that always means a hypomorphic (partial) effect.
pub const HYPOMORPH_CODE: &str = "1";
pub const HYPOMORPH_LABEL: &str = "hypomorph";

/// Substrings that mark benign and pathogenic functional evidence.
pub const BENIGN_MARKER: &str = "BS3";
pub const PATHOGENIC_MARKER: &str = "PS3";

/// Codes whose labels come from the second and third columns of the
/// classification table, respectively.
pub const CODE_SECOND_COLUMN: &str = "2";
pub const CODE_THIRD_COLUMN: &str = "0";

/// Dominant side must outnumber the other at least this many times.
pub const RATIO_THRESHOLD: usize = 3;

pub const DEFAULT_OUT: &str = "discordance_report.txt";
