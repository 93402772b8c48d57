use thiserror::Error;

///
/// Reason a results cell contributed no evidence.
///
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("Cell value is not numeric: {0:?}")]
    NotNumeric(String),

    #[error("Track not present in the classification table: {0}")]
    UnknownTrack(String),

    #[error("No class for code {code} on track {track}")]
    UnknownCode { track: String, code: String },
}
