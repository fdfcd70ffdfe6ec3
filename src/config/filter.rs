//! Filter descriptors

/// A selectable input constraint of a dataset
///
/// Parsed from a `FilterDescription` element of the configuration document.
/// Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    /// Unique key within the dataset (the protocol `internalName`)
    pub name: String,
    /// Human-readable label; empty when the mart provides none
    pub display_name: String,
    /// Longer description; empty when the mart provides none
    pub description: String,
    /// Value shape declared by the mart, e.g. "list", "boolean", "text"
    ///
    /// Named `kind` rather than the protocol's `type` because `type` is a
    /// Rust keyword.
    pub kind: String,
}

impl Filter {
    /// True when the mart declares this filter boolean-valued
    pub fn is_boolean(&self) -> bool {
        self.kind == "boolean"
    }
}
