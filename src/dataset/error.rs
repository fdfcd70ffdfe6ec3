//! Dataset operation errors

use std::fmt;

use crate::compiler::CompileError;
use crate::config::UnknownNameError;
use crate::error::ConfigParseError;
use crate::results::MalformedResultError;
use crate::transport::TransportError;

/// Everything that can go wrong between a query request and its result
#[derive(Debug)]
pub enum QueryError {
    /// The configuration document could not be parsed
    Config(ConfigParseError),
    /// The request referenced an attribute or filter the dataset lacks
    UnknownName(UnknownNameError),
    /// The selection could not be rendered into a query document
    Compile(CompileError),
    /// The transport failed
    Transport(TransportError),
    /// The response rows disagree with the response header
    MalformedResult(MalformedResultError),
    /// The mart reported a query error in-band
    Server(String),
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::Config(err) => write!(f, "{}", err),
            QueryError::UnknownName(err) => write!(f, "{}", err),
            QueryError::Compile(err) => write!(f, "{}", err),
            QueryError::Transport(err) => write!(f, "{}", err),
            QueryError::MalformedResult(err) => write!(f, "{}", err),
            QueryError::Server(message) => write!(f, "Mart rejected the query: {}", message),
        }
    }
}

impl std::error::Error for QueryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QueryError::Config(err) => Some(err),
            QueryError::UnknownName(err) => Some(err),
            QueryError::Compile(err) => Some(err),
            QueryError::Transport(err) => Some(err),
            QueryError::MalformedResult(err) => Some(err),
            QueryError::Server(_) => None,
        }
    }
}

impl From<ConfigParseError> for QueryError {
    fn from(err: ConfigParseError) -> Self {
        QueryError::Config(err)
    }
}

impl From<UnknownNameError> for QueryError {
    fn from(err: UnknownNameError) -> Self {
        QueryError::UnknownName(err)
    }
}

impl From<CompileError> for QueryError {
    fn from(err: CompileError) -> Self {
        QueryError::Compile(err)
    }
}

impl From<TransportError> for QueryError {
    fn from(err: TransportError) -> Self {
        QueryError::Transport(err)
    }
}

impl From<MalformedResultError> for QueryError {
    fn from(err: MalformedResultError) -> Self {
        QueryError::MalformedResult(err)
    }
}
