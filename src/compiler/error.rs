//! Compiler errors

use std::fmt;

/// Errors that can occur while rendering a query document
#[derive(Debug)]
pub enum CompileError {
    /// A boolean filter was given a value with no included/excluded reading
    InvalidBooleanValue {
        filter: String,
        value: String,
    },
    /// A non-boolean filter was given a bare boolean value
    UnexpectedBoolean {
        filter: String,
    },
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::InvalidBooleanValue { filter, value } => {
                write!(
                    f,
                    "Invalid value '{}' for boolean filter '{}' (expected true/false, 'included', 'only' or 'excluded')",
                    value, filter
                )
            }
            CompileError::UnexpectedBoolean { filter } => {
                write!(f, "Filter '{}' is not boolean-typed, give it a scalar or list value", filter)
            }
        }
    }
}

impl std::error::Error for CompileError {}
