//! Configuration parser (verb module)
//!
//! Transforms a mart configuration document into [`Configuration`].
//!
//! The document nests `AttributeDescription` elements under `AttributePage`
//! containers and `FilterDescription` elements under `FilterPage` containers,
//! with intermediate grouping elements in between. The parser scans
//! descriptors at any depth below their page container; grouping elements are
//! traversed transparently.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::config::{Attribute, AttributeRegistry, Configuration, Filter, FilterRegistry};
use crate::error::ConfigParseError;

/// Parse a configuration document into registries
///
/// Optional descriptor fields (displayName, description, default, type)
/// resolve to empty string / false when absent. A descriptor without an
/// internalName fails the parse, as does a document with no AttributePage or
/// no FilterPage container.
pub fn parse_configuration(xml: &str) -> Result<Configuration, ConfigParseError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    let mut attributes = Vec::new();
    let mut filters = Vec::new();

    let mut saw_attribute_page = false;
    let mut saw_filter_page = false;
    let mut attribute_depth = 0usize;
    let mut filter_depth = 0usize;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Eof => break,
            Event::Start(e) => match e.local_name().as_ref() {
                b"AttributePage" => {
                    saw_attribute_page = true;
                    attribute_depth += 1;
                }
                b"FilterPage" => {
                    saw_filter_page = true;
                    filter_depth += 1;
                }
                b"AttributeDescription" if attribute_depth > 0 => {
                    attributes.push(parse_attribute(&e)?);
                }
                b"FilterDescription" if filter_depth > 0 => {
                    filters.push(parse_filter(&e)?);
                }
                _ => {}
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"AttributePage" => saw_attribute_page = true,
                b"FilterPage" => saw_filter_page = true,
                b"AttributeDescription" if attribute_depth > 0 => {
                    attributes.push(parse_attribute(&e)?);
                }
                b"FilterDescription" if filter_depth > 0 => {
                    filters.push(parse_filter(&e)?);
                }
                _ => {}
            },
            Event::End(e) => match e.local_name().as_ref() {
                b"AttributePage" => attribute_depth = attribute_depth.saturating_sub(1),
                b"FilterPage" => filter_depth = filter_depth.saturating_sub(1),
                _ => {}
            },
            _ => {}
        }
        buf.clear();
    }

    if !saw_attribute_page {
        return Err(ConfigParseError::MissingAttributePages);
    }
    if !saw_filter_page {
        return Err(ConfigParseError::MissingFilterPages);
    }

    Ok(Configuration {
        attributes: AttributeRegistry::from_entries(attributes)?,
        filters: FilterRegistry::from_entries(filters)?,
    })
}

fn parse_attribute(e: &BytesStart<'_>) -> Result<Attribute, ConfigParseError> {
    let mut name: Option<String> = None;
    let mut display_name = String::new();
    let mut description = String::new();
    let mut default = false;

    for attr in e.attributes() {
        let attr = attr?;
        match attr.key.as_ref() {
            b"internalName" => name = Some(attr.unescape_value()?.to_string()),
            b"displayName" => display_name = attr.unescape_value()?.to_string(),
            b"description" => description = attr.unescape_value()?.to_string(),
            b"default" => default = is_truthy(&attr.unescape_value()?),
            _ => {}
        }
    }

    let name = name.ok_or(ConfigParseError::MissingName {
        element: "AttributeDescription",
    })?;
    Ok(Attribute {
        name,
        display_name,
        description,
        default,
    })
}

fn parse_filter(e: &BytesStart<'_>) -> Result<Filter, ConfigParseError> {
    let mut name: Option<String> = None;
    let mut display_name = String::new();
    let mut description = String::new();
    let mut kind = String::new();

    for attr in e.attributes() {
        let attr = attr?;
        match attr.key.as_ref() {
            b"internalName" => name = Some(attr.unescape_value()?.to_string()),
            b"displayName" => display_name = attr.unescape_value()?.to_string(),
            b"description" => description = attr.unescape_value()?.to_string(),
            b"type" => kind = attr.unescape_value()?.to_string(),
            _ => {}
        }
    }

    let name = name.ok_or(ConfigParseError::MissingName {
        element: "FilterDescription",
    })?;
    Ok(Filter {
        name,
        display_name,
        description,
        kind,
    })
}

fn is_truthy(value: &str) -> bool {
    value == "true" || value == "1"
}
