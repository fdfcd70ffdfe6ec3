//! Registry error types

use std::fmt;

/// Which registry a name was resolved against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    Attribute,
    Filter,
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameKind::Attribute => write!(f, "attribute"),
            NameKind::Filter => write!(f, "filter"),
        }
    }
}

/// A caller referenced a name the dataset's registry does not contain
#[derive(Debug, Clone)]
pub struct UnknownNameError {
    pub kind: NameKind,
    /// The offending name
    pub name: String,
}

impl fmt::Display for UnknownNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown {} '{}'", self.kind, self.name)
    }
}

impl std::error::Error for UnknownNameError {}

/// Registry construction found the same name twice
#[derive(Debug, Clone)]
pub struct DuplicateNameError {
    pub kind: NameKind,
    pub name: String,
}

impl fmt::Display for DuplicateNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Duplicate {} '{}' in configuration", self.kind, self.name)
    }
}

impl std::error::Error for DuplicateNameError {}
