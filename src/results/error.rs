//! Result-parsing errors

use std::fmt;

/// A response row disagrees with the header, or the TSV stream is otherwise
/// undecodable
#[derive(Debug)]
pub struct MalformedResultError {
    source: csv::Error,
}

impl fmt::Display for MalformedResultError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Malformed query result: {}", self.source)
    }
}

impl std::error::Error for MalformedResultError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

impl From<csv::Error> for MalformedResultError {
    fn from(err: csv::Error) -> Self {
        MalformedResultError { source: err }
    }
}
