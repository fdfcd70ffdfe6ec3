//! Transport errors

use std::fmt;

/// Errors surfaced by a transport implementation
///
/// Opaque to the query core: it never inspects these beyond propagating
/// them to the caller.
#[derive(Debug)]
pub enum TransportError {
    /// The service URL could not be parsed
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },
    /// HTTP-level failure: connect, status or body read
    Http {
        source: reqwest::Error,
    },
    /// Failure reported by a non-HTTP transport implementation
    Other(String),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::InvalidUrl { url, source } => {
                write!(f, "Invalid service URL '{}': {}", url, source)
            }
            TransportError::Http { source } => write!(f, "HTTP request failed: {}", source),
            TransportError::Other(message) => write!(f, "Transport failed: {}", message),
        }
    }
}

impl std::error::Error for TransportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TransportError::InvalidUrl { source, .. } => Some(source),
            TransportError::Http { source } => Some(source),
            TransportError::Other(_) => None,
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        TransportError::Http { source: err }
    }
}
