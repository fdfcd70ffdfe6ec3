//! Error types for configuration parsing

use std::fmt;

use crate::config::DuplicateNameError;

/// Errors that can occur while parsing a dataset configuration document
#[derive(Debug)]
pub enum ConfigParseError {
    /// XML reader error
    Xml {
        source: quick_xml::Error,
    },
    /// Malformed attribute inside an XML tag
    Attr {
        source: quick_xml::events::attributes::AttrError,
    },
    /// Configuration response was not valid UTF-8
    Utf8 {
        source: std::str::Utf8Error,
    },
    /// Document contains no AttributePage container
    MissingAttributePages,
    /// Document contains no FilterPage container
    MissingFilterPages,
    /// A descriptor element is missing its internalName
    MissingName {
        element: &'static str,
    },
    /// A descriptor name appears more than once
    Duplicate(DuplicateNameError),
}

impl fmt::Display for ConfigParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigParseError::Xml { source } => {
                write!(f, "Invalid configuration XML: {}", source)
            }
            ConfigParseError::Attr { source } => {
                write!(f, "Invalid configuration XML attribute: {}", source)
            }
            ConfigParseError::Utf8 { source } => {
                write!(f, "Configuration document is not valid UTF-8: {}", source)
            }
            ConfigParseError::MissingAttributePages => {
                write!(f, "Configuration document has no AttributePage elements")
            }
            ConfigParseError::MissingFilterPages => {
                write!(f, "Configuration document has no FilterPage elements")
            }
            ConfigParseError::MissingName { element } => {
                write!(f, "{} element is missing its internalName", element)
            }
            ConfigParseError::Duplicate(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ConfigParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigParseError::Xml { source } => Some(source),
            ConfigParseError::Attr { source } => Some(source),
            ConfigParseError::Utf8 { source } => Some(source),
            ConfigParseError::Duplicate(err) => Some(err),
            _ => None,
        }
    }
}

impl From<quick_xml::Error> for ConfigParseError {
    fn from(err: quick_xml::Error) -> Self {
        ConfigParseError::Xml { source: err }
    }
}

impl From<quick_xml::events::attributes::AttrError> for ConfigParseError {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        ConfigParseError::Attr { source: err }
    }
}

impl From<std::str::Utf8Error> for ConfigParseError {
    fn from(err: std::str::Utf8Error) -> Self {
        ConfigParseError::Utf8 { source: err }
    }
}

impl From<DuplicateNameError> for ConfigParseError {
    fn from(err: DuplicateNameError) -> Self {
        ConfigParseError::Duplicate(err)
    }
}
