//! Query-document rendering
//!
//! The output is a single-line XML document compared byte-for-byte by
//! downstream callers, so the element layout here is fixed: no newlines, one
//! space before the self-closing `/>`, protocol constants in the root tag.

use quick_xml::escape::escape;

use crate::config::Filter;
use crate::query::FilterValue;

use super::error::CompileError;

// Protocol constants of the query document. These are fixed by the mart
// protocol, not caller-configurable.
const DATASET_CONFIG_VERSION: &str = "0.6";
const FORMATTER: &str = "TSV";
const VIRTUAL_SCHEMA: &str = "default";
const INTERFACE: &str = "default";

/// A filter resolved against the dataset's registry, ready to render
///
/// Carries the registry entry so the renderer can apply the filter's declared
/// value shape (boolean filters render an `excluded` flag, everything else a
/// `value` field).
#[derive(Debug)]
pub struct ResolvedFilter<'a> {
    pub filter: &'a Filter,
    pub value: &'a FilterValue,
}

/// Render the query document for one dataset
///
/// Attributes are emitted in the given order, filters in input order. Names
/// are trusted to exist in the dataset's registries; validation happens
/// before compilation, never here. Identical inputs produce byte-identical
/// output.
pub fn compile_query(
    dataset_name: &str,
    attributes: &[String],
    filters: &[ResolvedFilter<'_>],
) -> Result<String, CompileError> {
    let mut doc = String::new();

    doc.push_str(&format!(
        "<Query datasetConfigVersion=\"{}\" formatter=\"{}\" header=\"1\" uniqueRows=\"1\" virtualSchemaName=\"{}\">",
        DATASET_CONFIG_VERSION, FORMATTER, VIRTUAL_SCHEMA
    ));
    doc.push_str(&format!(
        "<Dataset interface=\"{}\" name=\"{}\">",
        INTERFACE,
        escape(dataset_name)
    ));

    for name in attributes {
        doc.push_str(&format!("<Attribute name=\"{}\" />", escape(name)));
    }
    for resolved in filters {
        render_filter(&mut doc, resolved)?;
    }

    doc.push_str("</Dataset></Query>");
    Ok(doc)
}

fn render_filter(doc: &mut String, resolved: &ResolvedFilter<'_>) -> Result<(), CompileError> {
    let filter = resolved.filter;

    if filter.is_boolean() {
        // Boolean filters carry an excluded flag instead of a value.
        let excluded = match resolved.value {
            FilterValue::Bool(true) => "0",
            FilterValue::Bool(false) => "1",
            FilterValue::Scalar(s)
                if s.eq_ignore_ascii_case("included") || s.eq_ignore_ascii_case("only") =>
            {
                "0"
            }
            FilterValue::Scalar(s) if s.eq_ignore_ascii_case("excluded") => "1",
            other => {
                return Err(CompileError::InvalidBooleanValue {
                    filter: filter.name.clone(),
                    value: raw_value(other),
                })
            }
        };
        doc.push_str(&format!(
            "<Filter name=\"{}\" excluded=\"{}\" />",
            escape(&filter.name),
            excluded
        ));
    } else {
        let value = match resolved.value {
            FilterValue::Scalar(s) => s.clone(),
            FilterValue::List(items) => items.join(","),
            FilterValue::Bool(_) => {
                return Err(CompileError::UnexpectedBoolean {
                    filter: filter.name.clone(),
                })
            }
        };
        doc.push_str(&format!(
            "<Filter name=\"{}\" value=\"{}\" />",
            escape(&filter.name),
            escape(&value)
        ));
    }

    Ok(())
}

fn raw_value(value: &FilterValue) -> String {
    match value {
        FilterValue::Scalar(s) => s.clone(),
        FilterValue::List(items) => items.join(","),
        FilterValue::Bool(b) => b.to_string(),
    }
}
