//! The dataset handle
//!
//! [`Dataset`] orchestrates the query pipeline: it lazily fetches and caches
//! the dataset's configuration, validates requested names against the
//! registries, hands the validated selection to the compiler, dispatches the
//! document over the transport and decodes the TSV response.

mod error;

pub use error::QueryError;

use std::collections::HashMap;

use log::{debug, trace};
use once_cell::sync::OnceCell;

use crate::compiler::{compile_query, ResolvedFilter};
use crate::config::{AttributeRegistry, Configuration, FilterRegistry};
use crate::error::ConfigParseError;
use crate::parser::parse_configuration;
use crate::query::QueryRequest;
use crate::results::{parse_result, QueryResult};
use crate::transport::Transport;

/// A queryable dataset of one mart
///
/// Holds the transport it queries through and a one-shot configuration
/// cache: the first registry access fetches and parses the configuration,
/// every later access reuses it. Racing first accesses perform at most one
/// successful fetch; a failed fetch leaves the cache empty so a later access
/// can retry.
pub struct Dataset<T: Transport> {
    name: String,
    display_name: String,
    transport: T,
    config: OnceCell<Configuration>,
}

impl<T: Transport> Dataset<T> {
    pub fn new(name: impl Into<String>, display_name: impl Into<String>, transport: T) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            transport,
            config: OnceCell::new(),
        }
    }

    /// Unique key of this dataset within its mart
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable label of this dataset
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// The transport this dataset queries through
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// The dataset's attribute registry, fetching the configuration on
    /// first access
    pub fn attributes(&self) -> Result<&AttributeRegistry, QueryError> {
        Ok(&self.configuration()?.attributes)
    }

    /// The dataset's filter registry, fetching the configuration on first
    /// access
    pub fn filters(&self) -> Result<&FilterRegistry, QueryError> {
        Ok(&self.configuration()?.filters)
    }

    /// The cached configuration, fetched once per dataset lifetime
    pub fn configuration(&self) -> Result<&Configuration, QueryError> {
        self.config.get_or_try_init(|| self.fetch_configuration())
    }

    fn fetch_configuration(&self) -> Result<Configuration, QueryError> {
        debug!("fetching configuration for dataset '{}'", self.name);
        let raw = self
            .transport
            .get(&[("type", "configuration"), ("dataset", self.name.as_str())])?;
        let text = std::str::from_utf8(&raw).map_err(ConfigParseError::from)?;
        let config = parse_configuration(text)?;
        debug!(
            "dataset '{}' configuration loaded: {} attributes, {} filters",
            self.name,
            config.attributes.len(),
            config.filters.len()
        );
        Ok(config)
    }

    /// Run a query and decode its result table
    ///
    /// Every requested name is validated against the registries before
    /// anything goes on the wire; no query is issued when validation fails.
    /// An empty attribute selection substitutes the dataset's default
    /// attributes in registry order.
    pub fn query(&self, request: &QueryRequest) -> Result<QueryResult, QueryError> {
        // 1. Make sure the configuration is loaded.
        let config = self.configuration()?;

        // 2. Validate the attribute selection, substituting defaults for an
        //    empty one.
        let attributes: Vec<String> = if request.attributes.is_empty() {
            config.attributes.defaults().map(|a| a.name.clone()).collect()
        } else {
            for name in &request.attributes {
                config.attributes.get(name)?;
            }
            request.attributes.clone()
        };

        // 3. Resolve filters against the registry; the compiler needs each
        //    filter's declared value shape.
        let mut filters = Vec::with_capacity(request.filters.len());
        for (name, value) in &request.filters {
            let filter = config.filters.get(name)?;
            filters.push(ResolvedFilter { filter, value });
        }

        // 4. Render and dispatch the query document.
        let document = compile_query(&self.name, &attributes, &filters)?;
        debug!(
            "querying dataset '{}': {} attributes, {} filters",
            self.name,
            attributes.len(),
            filters.len()
        );
        trace!("query document: {}", document);

        let raw = self.transport.get(&[("query", document.as_str())])?;

        // The mart reports query failures in-band with a 200 response.
        if raw.starts_with(b"Query ERROR") {
            return Err(QueryError::Server(
                String::from_utf8_lossy(&raw).trim_end().to_string(),
            ));
        }

        // 5. Decode the TSV response. The header carries display names;
        //    remap them to raw attribute names when asked to.
        let result = if request.use_attr_names {
            let attr_names: HashMap<&str, &str> = attributes
                .iter()
                .filter_map(|name| config.attributes.get(name).ok())
                .map(|attr| (attr.display_name.as_str(), attr.name.as_str()))
                .collect();
            parse_result(&raw, |field| {
                attr_names
                    .get(field)
                    .map(|name| (*name).to_string())
                    .unwrap_or_else(|| field.to_string())
            })?
        } else {
            parse_result(&raw, |field| field.to_string())?
        };

        Ok(result)
    }
}
