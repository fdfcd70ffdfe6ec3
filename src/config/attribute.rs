//! Attribute descriptors

/// A selectable output column of a dataset
///
/// Parsed from an `AttributeDescription` element of the configuration
/// document. Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Unique key within the dataset (the protocol `internalName`)
    pub name: String,
    /// Human-readable label; empty when the mart provides none
    pub display_name: String,
    /// Longer description; empty when the mart provides none
    pub description: String,
    /// True when the attribute is included in queries that select no
    /// explicit attribute list
    pub default: bool,
}
