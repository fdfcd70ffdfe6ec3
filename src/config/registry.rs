//! Name-keyed, insertion-ordered registries over configuration entries

use std::collections::HashMap;

use super::attribute::Attribute;
use super::error::{DuplicateNameError, NameKind, UnknownNameError};
use super::filter::Filter;

/// Ordered lookup container over a dataset's attributes
///
/// Preserves the document order of the configuration it was built from.
/// Lookups are by exact name; a missing name is an error, never a silent
/// `None`.
#[derive(Debug)]
pub struct AttributeRegistry {
    entries: Vec<Attribute>,
    index: HashMap<String, usize>,
}

impl AttributeRegistry {
    /// Build a registry from entries in document order
    ///
    /// Rejects repeated names rather than letting a later entry shadow an
    /// earlier one.
    pub fn from_entries(entries: Vec<Attribute>) -> Result<Self, DuplicateNameError> {
        let index = build_index(&entries, NameKind::Attribute, |a| &a.name)?;
        Ok(Self { entries, index })
    }

    /// Look up an attribute by name
    pub fn get(&self, name: &str) -> Result<&Attribute, UnknownNameError> {
        self.index
            .get(name)
            .map(|&pos| &self.entries[pos])
            .ok_or_else(|| UnknownNameError {
                kind: NameKind::Attribute,
                name: name.to_string(),
            })
    }

    /// True when the registry contains `name`
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// All attributes, in document order
    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.entries.iter()
    }

    /// Attributes marked default by the mart, in document order
    ///
    /// These are substituted when a query selects no explicit attributes.
    pub fn defaults(&self) -> impl Iterator<Item = &Attribute> {
        self.entries.iter().filter(|a| a.default)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Ordered lookup container over a dataset's filters
#[derive(Debug)]
pub struct FilterRegistry {
    entries: Vec<Filter>,
    index: HashMap<String, usize>,
}

impl FilterRegistry {
    /// Build a registry from entries in document order
    pub fn from_entries(entries: Vec<Filter>) -> Result<Self, DuplicateNameError> {
        let index = build_index(&entries, NameKind::Filter, |f| &f.name)?;
        Ok(Self { entries, index })
    }

    /// Look up a filter by name
    pub fn get(&self, name: &str) -> Result<&Filter, UnknownNameError> {
        self.index
            .get(name)
            .map(|&pos| &self.entries[pos])
            .ok_or_else(|| UnknownNameError {
                kind: NameKind::Filter,
                name: name.to_string(),
            })
    }

    /// True when the registry contains `name`
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// All filters, in document order
    pub fn iter(&self) -> impl Iterator<Item = &Filter> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn build_index<T>(
    entries: &[T],
    kind: NameKind,
    name: impl Fn(&T) -> &String,
) -> Result<HashMap<String, usize>, DuplicateNameError> {
    let mut index = HashMap::with_capacity(entries.len());
    for (pos, entry) in entries.iter().enumerate() {
        if index.insert(name(entry).clone(), pos).is_some() {
            return Err(DuplicateNameError {
                kind,
                name: name(entry).clone(),
            });
        }
    }
    Ok(index)
}
