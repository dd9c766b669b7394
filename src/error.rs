//! errors produced by boards, the rule engine and the record codec
use thiserror::Error;

/// Everything that can go wrong while building, reading, or decoding a board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// a dimension, coordinate, or count is outside its allowed range
    #[error("{what} out of range: {value}")]
    OutOfRange {
        /// name of the offending argument or field
        what: &'static str,
        /// the value that was rejected
        value: i64,
    },

    /// a required input was absent
    #[error("missing input: {0}")]
    MissingInput(&'static str),

    /// the serialized record does not have the four-field board shape
    #[error("malformed board record: {0}")]
    MalformedRecord(String),
}

impl BoardError {
    pub(crate) fn out_of_range(what: &'static str, value: usize) -> Self {
        BoardError::OutOfRange {
            what,
            value: i64::try_from(value).unwrap_or(i64::MAX),
        }
    }
}

impl From<serde_json::Error> for BoardError {
    fn from(e: serde_json::Error) -> Self {
        BoardError::MalformedRecord(e.to_string())
    }
}
