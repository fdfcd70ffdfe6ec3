//! Request types for dataset queries

/// A value bound to a filter in a query
///
/// The mart declares each filter's value shape in the configuration; the
/// compiler resolves the variant against that declaration, so a `Bool` on a
/// non-boolean filter (or vice versa) is rejected at compile time rather
/// than sent to the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    /// A single value, rendered as-is
    Scalar(String),
    /// Multiple values, rendered comma-joined in input order
    List(Vec<String>),
    /// Shorthand for boolean filters: true = included, false = excluded
    Bool(bool),
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::Scalar(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::Scalar(value)
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        FilterValue::Bool(value)
    }
}

impl From<Vec<String>> for FilterValue {
    fn from(values: Vec<String>) -> Self {
        FilterValue::List(values)
    }
}

impl From<Vec<&str>> for FilterValue {
    fn from(values: Vec<&str>) -> Self {
        FilterValue::List(values.into_iter().map(str::to_string).collect())
    }
}

/// A dataset query: which attributes to select and which filters to apply
///
/// Attributes are emitted in the given order; an empty list selects the
/// dataset's default attributes. Filters are ordered name/value pairs so the
/// compiled document preserves insertion order.
#[derive(Debug, Default)]
pub struct QueryRequest {
    /// Attribute names to select; empty = dataset defaults
    pub attributes: Vec<String>,
    /// Filter name/value pairs, applied in order
    pub filters: Vec<(String, FilterValue)>,
    /// Label result columns with raw attribute names instead of display names
    pub use_attr_names: bool,
}
